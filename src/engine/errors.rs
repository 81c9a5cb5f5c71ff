use crate::domain::chips::Chips;
use crate::engine::session::Phase;

use thiserror::Error;

/// Ошибки движка баккара.
///
/// Все, кроме `EmptyShoe` и `Internal`, — обычные отказы пользователю:
/// состояние сессии при них не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недостаточно средств: нужно {needed}, доступно {available}")]
    InsufficientBalance { needed: Chips, available: Chips },

    #[error("Не выбрана сторона ставки")]
    NoSideSelected,

    #[error("Действие «{action}» недопустимо в фазе {phase}")]
    InvalidPhaseTransition { action: &'static str, phase: Phase },

    #[error("Шуз пуст")]
    EmptyShoe,

    #[error("Сумма ставки должна быть больше нуля")]
    InvalidAmount,

    #[error("Сначала снимите ставку с другой стороны")]
    SideLocked,

    #[error("Нет прошлой ставки для повтора")]
    NoLastBet,

    #[error("Ставка уже сделана")]
    BetAlreadyPlaced,

    #[error("Идёт авто-плей")]
    AutoPlayActive,

    #[error("Количество раундов авто-плея должно быть больше нуля")]
    InvalidRoundCount,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
