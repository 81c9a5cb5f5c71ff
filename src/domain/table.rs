use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::shoe::CARDS_PER_DECK;

/// Сколько карт максимум уходит на один раунд (2+2 и по одной третьей).
pub const MAX_CARDS_PER_ROUND: usize = 6;

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("deck_count должен быть от 1 до 16, получено {0}")]
    InvalidDeckCount(u8),

    #[error("cut_card_threshold={threshold} должен быть не меньше 6 и меньше размера шуза ({shoe_size})")]
    InvalidCutCard { threshold: usize, shoe_size: usize },

    #[error("max_history должен быть больше нуля")]
    EmptyHistory,

    #[error("streak_rows и streak_columns_per_page должны быть больше нуля")]
    EmptyStreakBoard,

    #[error("auto_play_rounds должен быть больше нуля")]
    InvalidAutoPlayRounds,

    #[error("Номиналы фишек должны быть положительными")]
    InvalidChip,

    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Конфиг стола баккара. Значения по умолчанию — как в казино на 8 колод.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Сколько колод в шузе.
    pub deck_count: u8,
    /// Если в шузе осталось меньше карт — перед раундом собираем новый.
    pub cut_card_threshold: usize,
    pub initial_balance: Chips,
    /// Сколько раундов храним в истории.
    pub max_history: usize,
    /// Высота столбца на табло.
    pub streak_rows: usize,
    pub streak_columns_per_page: usize,
    /// Раундов в одном авто-плее.
    pub auto_play_rounds: u32,
    /// Номиналы фишек для фронта.
    pub chip_denominations: Vec<Chips>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_count: 8,
            cut_card_threshold: 60,
            initial_balance: Chips(10_000),
            max_history: 1000,
            streak_rows: 6,
            streak_columns_per_page: 25,
            auto_play_rounds: 10,
            chip_denominations: vec![Chips(50), Chips(100), Chips(250), Chips(500)],
        }
    }
}

impl TableConfig {
    pub fn shoe_size(&self) -> usize {
        self.deck_count as usize * CARDS_PER_DECK
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_count == 0 || self.deck_count > 16 {
            return Err(ConfigError::InvalidDeckCount(self.deck_count));
        }
        let shoe_size = self.shoe_size();
        if self.cut_card_threshold < MAX_CARDS_PER_ROUND || self.cut_card_threshold >= shoe_size {
            return Err(ConfigError::InvalidCutCard {
                threshold: self.cut_card_threshold,
                shoe_size,
            });
        }
        if self.max_history == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if self.streak_rows == 0 || self.streak_columns_per_page == 0 {
            return Err(ConfigError::EmptyStreakBoard);
        }
        if self.auto_play_rounds == 0 {
            return Err(ConfigError::InvalidAutoPlayRounds);
        }
        if self.chip_denominations.iter().any(|c| c.is_zero()) {
            return Err(ConfigError::InvalidChip);
        }
        Ok(())
    }

    /// Разобрать конфиг из JSON. Отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
