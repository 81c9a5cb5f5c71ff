use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// На что поставлено.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BetSide {
    Player,
    Banker,
    Tie,
    /// Сторона не выбрана: с такой ставкой раздавать нельзя.
    #[default]
    None,
}

impl BetSide {
    pub fn is_selected(self) -> bool {
        !matches!(self, BetSide::None)
    }
}

impl fmt::Display for BetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetSide::Player => "PLAYER",
            BetSide::Banker => "BANKER",
            BetSide::Tie => "TIE",
            BetSide::None => "NONE",
        };
        write!(f, "{s}")
    }
}

impl FromStr for BetSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p" | "player" => Ok(BetSide::Player),
            "b" | "banker" => Ok(BetSide::Banker),
            "t" | "tie" => Ok(BetSide::Tie),
            "none" | "-" => Ok(BetSide::None),
            _ => Err(format!("Invalid bet side: {s}")),
        }
    }
}

/// Ставка: сторона + сумма.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Bet {
    pub side: BetSide,
    pub amount: Chips,
}

impl Bet {
    pub const NONE: Bet = Bet {
        side: BetSide::None,
        amount: Chips::ZERO,
    };

    pub const fn new(side: BetSide, amount: Chips) -> Self {
        Self { side, amount }
    }

    /// Есть ли реальные деньги на столе.
    pub fn is_staked(&self) -> bool {
        !self.amount.is_zero()
    }
}
