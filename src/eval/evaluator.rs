use crate::domain::card::Card;
use crate::domain::hand::Winner;

/// Двухкарточная сумма, начиная с которой рука считается натуральной.
pub const NATURAL_MIN: u8 = 8;

/// Очки руки: сумма очков карт по модулю 10. Результат всегда в 0..=9.
pub fn hand_value(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|c| c.point_value() as u32).sum();
    (sum % 10) as u8
}

/// 8 или 9 на двух картах.
pub fn is_natural(total: u8) -> bool {
    total >= NATURAL_MIN
}

/// Победитель по итоговым очкам: больше — выиграл, поровну — ничья.
pub fn decide_winner(player_total: u8, banker_total: u8) -> Winner {
    use std::cmp::Ordering;

    match player_total.cmp(&banker_total) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Banker,
        Ordering::Equal => Winner::Tie,
    }
}
