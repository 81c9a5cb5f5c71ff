//! История раундов, статистика и табло серий.

pub mod ledger;
pub mod stats;
pub mod streak;

pub use ledger::RoundHistory;
pub use stats::{rate_percent, SessionStats, StatsWindow, WindowStats};
pub use streak::{build_streak_columns, StreakBoard, StreakColumn};
