use serde::{Deserialize, Serialize};

use crate::domain::hand::{RoundOutcome, Winner};
use crate::domain::RoundId;

/// Столбец табло: подряд идущие раунды с одним победителем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakColumn {
    pub winner: Winner,
    pub round_ids: Vec<RoundId>,
}

impl StreakColumn {
    fn start(outcome: &RoundOutcome) -> Self {
        Self {
            winner: outcome.winner,
            round_ids: vec![outcome.id],
        }
    }

    pub fn len(&self) -> usize {
        self.round_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.round_ids.is_empty()
    }

    /// Строка для отладки: "PPP", "B" и т.п.
    pub fn labels(&self) -> String {
        std::iter::repeat(self.winner.label()).take(self.len()).collect()
    }
}

/// Разложить историю (от старых к новым) по столбцам табло.
///
/// Серия длиннее `rows` переносится в новый столбец.
pub fn build_streak_columns<'a>(
    oldest_first: impl IntoIterator<Item = &'a RoundOutcome>,
    rows: usize,
) -> Vec<StreakColumn> {
    let rows = rows.max(1);
    let mut columns = Vec::new();
    let mut current: Option<StreakColumn> = None;

    for outcome in oldest_first {
        current = match current.take() {
            None => Some(StreakColumn::start(outcome)),
            Some(mut col) if col.winner == outcome.winner && col.len() < rows => {
                col.round_ids.push(outcome.id);
                Some(col)
            }
            Some(col) => {
                columns.push(col);
                Some(StreakColumn::start(outcome))
            }
        };
    }

    if let Some(col) = current {
        columns.push(col);
    }
    columns
}

/// Табло с постраничным выводом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakBoard {
    pub columns: Vec<StreakColumn>,
    pub rows: usize,
    pub page_size: usize,
}

impl StreakBoard {
    pub fn new(columns: Vec<StreakColumn>, rows: usize, page_size: usize) -> Self {
        Self {
            columns,
            rows,
            page_size: page_size.max(1),
        }
    }

    /// Минимум одна страница, даже если история пуста.
    pub fn page_count(&self) -> usize {
        self.columns.len().div_ceil(self.page_size).max(1)
    }

    pub fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    /// Столбцы страницы `page`; за пределами — пусто.
    pub fn page(&self, page: usize) -> &[StreakColumn] {
        let start = page.saturating_mul(self.page_size);
        if start >= self.columns.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.columns.len());
        &self.columns[start..end]
    }
}
