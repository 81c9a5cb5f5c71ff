//! Доменная модель баккара: карты, шуз, руки, ставки, фишки, конфиг стола.

pub mod bet;
pub mod card;
pub mod chips;
pub mod hand;
pub mod shoe;
pub mod table;

/// Сквозной номер раунда в сессии.
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bet::*;
pub use card::*;
pub use chips::*;
pub use hand::*;
pub use shoe::*;
pub use table::*;
