use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{RoundOutcome, Side, Winner};

/// Тип события в раунде.
///
/// Фронт проигрывает события по порядку в своём темпе: порядок событий
/// совпадает с порядком выдачи карт из шуза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Перед раундом шуз был заменён новым.
    ShoeReplaced {
        serial: u32,
        cards: usize,
    },

    /// Карта сдана рубашкой вверх.
    CardDealt {
        side: Side,
        card: Card,
    },

    /// Карта открыта.
    CardRevealed {
        side: Side,
        card: Card,
    },

    /// Натуральная у одной или обеих сторон — добора не будет.
    NaturalDeclared {
        player_total: u8,
        banker_total: u8,
    },

    /// Сторона взяла третью карту (открытой).
    ThirdCardDrawn {
        side: Side,
        card: Card,
        total: u8,
    },

    /// Сторона осталась без третьей карты.
    SideStands {
        side: Side,
        total: u8,
    },

    /// Итог по картам известен.
    RoundDecided {
        winner: Winner,
        player_total: u8,
        banker_total: u8,
    },

    /// Раунд рассчитан: выплата начислена, история обновлена.
    RoundFinished {
        outcome: RoundOutcome,
        balance: Chips,
    },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Лента событий одного раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundEvents {
    pub events: Vec<RoundEvent>,
}

impl RoundEvents {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundEventKind> {
        self.events.iter().map(|e| &e.kind)
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }

    /// Карты в порядке выдачи из шуза (сдача рубашкой + третьи карты).
    pub fn dealt_cards(&self) -> Vec<(Side, Card)> {
        self.iter()
            .filter_map(|k| match k {
                RoundEventKind::CardDealt { side, card }
                | RoundEventKind::ThirdCardDrawn { side, card, .. } => Some((*side, *card)),
                _ => None,
            })
            .collect()
    }
}
