//! Подсчёт очков баккара и правила добора.
//!
//! Основные функции:
//!   `hand_value(cards) -> u8`
//!   `player_draws(total)`, `banker_draws(total, player_third)`

pub mod evaluator;
pub mod lookup_tables;

pub use evaluator::{decide_winner, hand_value, is_natural, NATURAL_MIN};
pub use lookup_tables::{banker_draws, player_draws, BANKER_DRAWS};
