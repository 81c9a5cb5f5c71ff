use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    /// Порядок мастей при сборке колоды.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Порядок рангов при сборке колоды: A, 2..10, J, Q, K.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Очки карты в баккара: A = 1, 2–9 по номиналу, 10/J/Q/K = 0.
    pub const fn point_value(self) -> u8 {
        match self {
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
            r => r as u8,
        }
    }
}

/// Уникальный идентификатор карты в рамках сессии.
///
/// Старшие 32 бита — серийный номер шуза, младшие — позиция карты
/// в шузе до перемешивания.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

impl CardId {
    pub const fn new(shoe_serial: u32, position: u32) -> Self {
        CardId(((shoe_serial as u64) << 32) | position as u64)
    }

    pub const fn shoe_serial(self) -> u32 {
        (self.0 >> 32) as u32
    }

    pub const fn position(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.shoe_serial(), self.position())
    }
}

/// Карта из шуза.
///
/// После того как карта вытянута, меняется только флаг `face_up`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub id: CardId,
    pub face_up: bool,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit, id: CardId) -> Self {
        Self {
            rank,
            suit,
            id,
            face_up: true,
        }
    }

    pub const fn point_value(&self) -> u8 {
        self.rank.point_value()
    }

    /// Ранг и масть без учёта id и флага открытости.
    pub const fn face(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    pub fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    pub fn reveal(&mut self) {
        self.face_up = true;
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Ten => write!(f, "10"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            r => write!(f, "{}", *r as u8),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `10d`, `7c`. Закрытая карта печатается как `??`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            write!(f, "??")
        }
    }
}

/// Парсинг строки вида "Ah", "10d", "Td", "7c".
///
/// Id у распарсенной карты нулевой: настоящий id карта получает в шузе.
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars: Vec<char> = s.chars().collect();
        let s_ch = chars.pop().ok_or_else(|| "Empty card string".to_string())?;
        let rank_str: String = chars.into_iter().collect();

        let rank = match rank_str.as_str() {
            "A" | "a" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            _ => return Err(format!("Invalid rank: {rank_str}")),
        };

        let suit = match s_ch {
            'h' | 'H' => Suit::Hearts,
            'd' | 'D' => Suit::Diamonds,
            'c' | 'C' => Suit::Clubs,
            's' | 'S' => Suit::Spades,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card::new(rank, suit, CardId(0)))
    }
}
