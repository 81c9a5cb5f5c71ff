use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Сумма в фишках (баланс, ставка, выплата). Обёртка над u64,
/// поэтому баланс физически не может уйти в минус.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub const fn new(amount: u64) -> Self {
        Chips(amount)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Вычитание с проверкой: `None`, если фишек не хватает.
    pub fn checked_sub(self, other: Chips) -> Option<Chips> {
        self.0.checked_sub(other.0).map(Chips)
    }

    /// Умножение на коэффициент выплаты (насыщающее).
    pub fn times(self, factor: u64) -> Chips {
        Chips(self.0.saturating_mul(factor))
    }

    /// Знаковая разница `self - other` для подсчёта профита.
    pub fn signed_diff(self, other: Chips) -> i64 {
        let diff = self.0 as i128 - other.0 as i128;
        diff.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}
