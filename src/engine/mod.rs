//! Движок баккара: раунд, правила добора, выплаты, фазы, авто-плей.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `place_bet` / `clear_bet` / `select_side` / `repeat_last_bet` – ставки
//!   - `deal` – сыграть раунд и рассчитать его
//!   - `next_round` – вернуться к приёму ставок
//!   - `run_auto_play` / `auto_play_step` – серия раундов

pub mod auto_play;
pub mod errors;
pub mod payout;
pub mod round;
pub mod round_events;
pub mod session;
pub mod validation;

pub use auto_play::{AutoPlayEvent, AutoPlayReport, AutoPlaySummary, HaltReason};
pub use errors::EngineError;
pub use payout::{payout, profit};
pub use round::{play_round, DealtRound};
pub use round_events::{RoundEvent, RoundEventKind, RoundEvents};
pub use session::{GameSession, Phase, RoundReport, StatusMessage};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`), тесты подставляют свои.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
