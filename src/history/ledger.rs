use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::hand::RoundOutcome;
use crate::history::stats::{SessionStats, StatsWindow, WindowStats};
use crate::history::streak::{build_streak_columns, StreakBoard};

/// История раундов: только добавление, хранится от старых к новым,
/// при переполнении выбрасываются самые старые.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    entries: VecDeque<RoundOutcome>,
    capacity: usize,
    stats: SessionStats,
}

impl RoundHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            stats: SessionStats::default(),
        }
    }

    pub fn record(&mut self, outcome: RoundOutcome) {
        self.stats.record(&outcome);
        self.entries.push_back(outcome);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn latest(&self) -> Option<&RoundOutcome> {
        self.entries.back()
    }

    pub fn oldest_first(&self) -> impl DoubleEndedIterator<Item = &RoundOutcome> {
        self.entries.iter()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &RoundOutcome> {
        self.entries.iter().rev()
    }

    /// Последние `limit` раундов, от новых к старым.
    pub fn recent(&self, limit: Option<usize>) -> Vec<RoundOutcome> {
        self.newest_first()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    pub fn window_stats(&self, window: StatsWindow) -> WindowStats {
        WindowStats::compute(window, self.newest_first())
    }

    pub fn streak_board(&self, rows: usize, page_size: usize) -> StreakBoard {
        StreakBoard::new(build_streak_columns(self.oldest_first(), rows), rows, page_size)
    }
}
