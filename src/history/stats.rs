use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::{RoundOutcome, Winner};

/// Накопительная статистика сессии. Не зависит от обрезки истории.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: u64,
    pub total_wagered: Chips,
    pub total_returned: Chips,
    pub player_wins: u64,
    pub banker_wins: u64,
    pub ties: u64,
}

impl SessionStats {
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        self.total_wagered += outcome.bet.amount;
        self.total_returned += outcome.payout;
        match outcome.winner {
            Winner::Player => self.player_wins += 1,
            Winner::Banker => self.banker_wins += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    /// Чистый результат: возвращено минус поставлено.
    pub fn net_result(&self) -> i64 {
        self.total_returned.signed_diff(self.total_wagered)
    }
}

/// Окно для статистики по последним раундам.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatsWindow {
    Last(usize),
    All,
}

impl StatsWindow {
    /// Переключатель ALL → 10 → 50 → 100 → ALL.
    pub fn next(self) -> StatsWindow {
        match self {
            StatsWindow::All => StatsWindow::Last(10),
            StatsWindow::Last(10) => StatsWindow::Last(50),
            StatsWindow::Last(50) => StatsWindow::Last(100),
            StatsWindow::Last(_) => StatsWindow::All,
        }
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            StatsWindow::Last(n) => Some(n),
            StatsWindow::All => None,
        }
    }
}

/// Доли исходов в окне.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowStats {
    pub window: StatsWindow,
    pub total: usize,
    pub player_wins: usize,
    pub banker_wins: usize,
    pub ties: usize,
    pub player_rate: u8,
    pub banker_rate: u8,
    pub tie_rate: u8,
}

impl WindowStats {
    /// `newest_first` — история от новых к старым; берём первые N.
    pub fn compute<'a>(
        window: StatsWindow,
        newest_first: impl Iterator<Item = &'a RoundOutcome>,
    ) -> Self {
        let limit = window.limit().unwrap_or(usize::MAX);
        let (mut player_wins, mut banker_wins, mut ties) = (0, 0, 0);
        let mut total = 0;
        for outcome in newest_first.take(limit) {
            total += 1;
            match outcome.winner {
                Winner::Player => player_wins += 1,
                Winner::Banker => banker_wins += 1,
                Winner::Tie => ties += 1,
            }
        }

        Self {
            window,
            total,
            player_wins,
            banker_wins,
            ties,
            player_rate: rate_percent(player_wins, total),
            banker_rate: rate_percent(banker_wins, total),
            tie_rate: rate_percent(ties, total),
        }
    }
}

/// Процент с округлением до целого (половина — вверх), 0 при пустом окне.
pub fn rate_percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = count as u64;
    let total = total as u64;
    ((count * 200 + total) / (2 * total)) as u8
}
