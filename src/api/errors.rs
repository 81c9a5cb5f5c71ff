use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Ставка больше баланса.
    InsufficientBalance { needed: u64, available: u64 },

    /// Раздача без выбранной стороны.
    NoSideSelected,

    /// Команда не может быть выполнена в текущей фазе.
    InvalidPhaseTransition(String),

    /// Неправильные входные данные (сумма, число раундов, смена стороны и т.п.).
    BadRequest(String),

    /// Внутренняя ошибка движка (например, пустой шуз).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InsufficientBalance { needed, available } => {
                ApiError::InsufficientBalance {
                    needed: needed.0,
                    available: available.0,
                }
            }
            EngineError::NoSideSelected => ApiError::NoSideSelected,
            EngineError::InvalidPhaseTransition { .. } | EngineError::AutoPlayActive => {
                ApiError::InvalidPhaseTransition(err.to_string())
            }
            EngineError::InvalidAmount
            | EngineError::SideLocked
            | EngineError::NoLastBet
            | EngineError::BetAlreadyPlaced
            | EngineError::InvalidRoundCount => ApiError::BadRequest(err.to_string()),
            EngineError::EmptyShoe | EngineError::Internal(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
