use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::bet::{Bet, BetSide};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::RoundId;
use crate::eval::hand_value;

/// Кому раздаются карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Banker,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "PLAYER"),
            Side::Banker => write!(f, "BANKER"),
        }
    }
}

/// Итог раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Winner {
    Player,
    Banker,
    Tie,
}

impl Winner {
    /// Однобуквенная метка для табло: P / B / T.
    pub fn label(self) -> char {
        match self {
            Winner::Player => 'P',
            Winner::Banker => 'B',
            Winner::Tie => 'T',
        }
    }

    /// Сторона ставки, которая выигрывает при таком исходе.
    pub fn bet_side(self) -> BetSide {
        match self {
            Winner::Player => BetSide::Player,
            Winner::Banker => BetSide::Banker,
            Winner::Tie => BetSide::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Рука одной стороны: 2 или 3 карты.
///
/// Очки не хранятся, а всегда считаются из карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub side: Side,
    pub cards: Vec<Card>,
}

impl Hand {
    pub const MAX_CARDS: usize = 3;

    pub fn new(side: Side) -> Self {
        Self {
            side,
            cards: Vec::with_capacity(Self::MAX_CARDS),
        }
    }

    pub fn push(&mut self, card: Card) {
        debug_assert!(self.cards.len() < Self::MAX_CARDS, "hand overflow");
        self.cards.push(card);
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn has_third_card(&self) -> bool {
        self.cards.len() == Self::MAX_CARDS
    }

    /// Все карты открыты (можно показывать очки).
    pub fn all_face_up(&self) -> bool {
        self.cards.iter().all(|c| c.face_up)
    }

    pub fn reveal_all(&mut self) {
        for card in self.cards.iter_mut() {
            card.reveal();
        }
    }
}

/// Завершённый раунд. Создаётся один раз и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub id: RoundId,
    pub winner: Winner,
    pub player_score: u8,
    pub banker_score: u8,
    /// Раунд закончился на натуральной (8/9) двухкарточной руке.
    pub natural: bool,
    pub player_cards: Vec<Card>,
    pub banker_cards: Vec<Card>,
    pub bet: Bet,
    pub payout: Chips,
}

impl RoundOutcome {
    /// Профит = выплата − ставка. Для пуша 0, для проигрыша −ставка.
    pub fn profit(&self) -> i64 {
        self.payout.signed_diff(self.bet.amount)
    }
}
