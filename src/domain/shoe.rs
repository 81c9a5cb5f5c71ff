use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardId, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

pub const CARDS_PER_DECK: usize = 52;

/// Шуз: несколько колод, перемешанных вместе.
///
/// Верх шуза — конец вектора (`draw` делает `pop`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    deck_count: u8,
    serial: u32,
}

impl Shoe {
    /// Неперемешанный шуз: колода за колодой, внутри колоды
    /// Hearts A..K, Diamonds A..K, Clubs A..K, Spades A..K.
    pub fn ordered(deck_count: u8, serial: u32) -> Self {
        let mut cards = Vec::with_capacity(deck_count as usize * CARDS_PER_DECK);
        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    let id = CardId::new(serial, cards.len() as u32);
                    cards.push(Card::new(rank, suit, id));
                }
            }
        }
        Self {
            cards,
            deck_count,
            serial,
        }
    }

    /// Собрать новый шуз и перемешать его целиком (Fisher–Yates через `RandomSource`).
    pub fn build<R: RandomSource>(deck_count: u8, serial: u32, rng: &mut R) -> Self {
        let mut shoe = Self::ordered(deck_count, serial);
        rng.shuffle(&mut shoe.cards);
        shoe
    }

    /// Заряженный шуз: `top[0]` будет вытянута первой.
    /// Id карт переназначаются по позиции, масть/ранг сохраняются.
    pub fn from_top(top: Vec<Card>, serial: u32) -> Self {
        let cards = top
            .into_iter()
            .enumerate()
            .map(|(pos, c)| Card::new(c.rank, c.suit, CardId::new(serial, pos as u32)))
            .rev()
            .collect::<Vec<_>>();
        let deck_count = cards.len().div_ceil(CARDS_PER_DECK) as u8;
        Self {
            cards,
            deck_count,
            serial,
        }
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Пора ли менять шуз перед следующим раундом (достали cut-card).
    pub fn needs_rebuild(&self, cut_card_threshold: usize) -> bool {
        self.remaining() < cut_card_threshold
    }

    /// Взять верхнюю карту.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyShoe)
    }

    /// Карты в порядке выдачи (первая — верхняя). Только для чтения.
    pub fn peek_order(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
