use crate::domain::bet::{Bet, BetSide};
use crate::domain::chips::Chips;
use crate::domain::hand::Winner;

/// Коэффициент полной выплаты при выигрыше на Player/Banker (1:1 + ставка).
pub const EVEN_MONEY_RETURN: u64 = 2;

/// Выигрыш ставки на ничью: 8 к 1.
pub const TIE_ODDS: u64 = 8;

/// Сколько вернуть игроку по итогам раунда (ставка уже списана с баланса).
///
/// Одна функция на все пути расчёта: и обычная раздача, и авто-плей.
/// Комиссия на Banker не берётся.
pub fn payout(bet: &Bet, winner: Winner) -> Chips {
    let amount = bet.amount;
    match (bet.side, winner) {
        (BetSide::Player, Winner::Player) => amount.times(EVEN_MONEY_RETURN),
        (BetSide::Banker, Winner::Banker) => amount.times(EVEN_MONEY_RETURN),
        (BetSide::Tie, Winner::Tie) => amount + amount.times(TIE_ODDS),
        // Пуш: при ничьей ставка на сторону возвращается.
        (BetSide::Player | BetSide::Banker, Winner::Tie) => amount,
        (BetSide::Player, Winner::Banker)
        | (BetSide::Banker, Winner::Player)
        | (BetSide::Tie, Winner::Player | Winner::Banker) => Chips::ZERO,
        (BetSide::None, _) => Chips::ZERO,
    }
}

/// Профит раунда: выплата минус ставка.
pub fn profit(bet: &Bet, payout: Chips) -> i64 {
    payout.signed_diff(bet.amount)
}
