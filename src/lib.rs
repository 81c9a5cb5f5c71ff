//! Движок правил баккара.
//!
//! Шуз на несколько колод, раздача, таблица добора третьей карты,
//! выплаты по ставкам Player / Banker / Tie, история и табло серий.
//! Отрисовка, анимации и тайминги — забота фронта: движок отдаёт
//! упорядоченные события, а фронт показывает их в своём темпе.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod history;
pub mod infra;

pub use domain::TableConfig;
pub use engine::{EngineError, GameSession, Phase, RandomSource};
