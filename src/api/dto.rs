use serde::{Deserialize, Serialize};

use crate::domain::bet::{Bet, BetSide};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Winner;
use crate::domain::RoundId;
use crate::engine::{AutoPlaySummary, Phase, RoundEvent};
use crate::history::{SessionStats, StreakColumn, WindowStats};

use super::errors::ApiError;

/// DTO одного сыгранного раунда (для истории).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcomeDto {
    pub round_id: RoundId,
    pub winner: Winner,
    pub player_score: u8,
    pub banker_score: u8,
    pub natural: bool,
    pub bet_side: BetSide,
    pub bet_amount: Chips,
    pub payout: Chips,
    /// Выплата минус ставка.
    pub profit: i64,
    pub player_cards: Vec<Card>,
    pub banker_cards: Vec<Card>,
}

/// DTO состояния сессии для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub phase: Phase,
    pub balance: Chips,
    pub bet_side: BetSide,
    pub bet_amount: Chips,
    pub last_bet: Option<Bet>,
    /// Строка статуса в человекочитаемом виде.
    pub status: String,
    pub player_cards: Vec<Card>,
    pub banker_cards: Vec<Card>,
    /// Очки показываются только когда все карты руки открыты.
    pub player_score: Option<u8>,
    pub banker_score: Option<u8>,
    pub shoe_serial: u32,
    pub shoe_remaining: usize,
    pub auto_playing: bool,
    pub rounds_played: u64,
    pub chip_denominations: Vec<Chips>,
}

/// Одна страница табло серий.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakPageDto {
    pub page: usize,
    pub total_pages: usize,
    pub rows: usize,
    pub columns: Vec<StreakColumn>,
}

/// Статистика: накопительная + по окну.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsDto {
    pub session: SessionStats,
    pub net_result: i64,
    pub window: WindowStats,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Ставка/сторона/фаза изменены.
    SessionState(SessionViewDto),

    /// Раунд сыгран: события для пошагового показа и итог.
    RoundDealt {
        events: Vec<RoundEvent>,
        outcome: RoundOutcomeDto,
        session: SessionViewDto,
    },

    /// Авто-плей закончен.
    AutoPlayFinished {
        rounds: Vec<RoundOutcomeDto>,
        summary: AutoPlaySummary,
        session: SessionViewDto,
    },

    /// Команда отклонена; состояние не изменилось.
    Rejected { error: ApiError, status: String },
}
