//! Таблица добора третьей карты.

/// Игрок добирает при сумме 0..=5, стоит на 6 и 7.
pub const PLAYER_DRAW_MAX: u8 = 5;

/// Банкир без третьей карты игрока ведёт себя так же: добирает на 0..=5.
pub const BANKER_STAND_ALONE_DRAW_MAX: u8 = 5;

/// `BANKER_DRAWS[banker_total][p3]` — добирает ли банкир, когда игрок
/// взял третью карту со значением `p3` (0..=9).
///
/// Строки 0..=7 (на 8/9 раунд уже закончен натуральной):
///   0–2: всегда;
///   3:   кроме p3 = 8;
///   4:   p3 ∈ 2..=7;
///   5:   p3 ∈ 4..=7;
///   6:   p3 ∈ 6..=7;
///   7:   никогда.
pub const BANKER_DRAWS: [[bool; 10]; 8] = [
    //  p3: 0     1      2      3      4      5      6      7      8      9
    [true, true, true, true, true, true, true, true, true, true], // 0
    [true, true, true, true, true, true, true, true, true, true], // 1
    [true, true, true, true, true, true, true, true, true, true], // 2
    [true, true, true, true, true, true, true, true, false, true], // 3
    [false, false, true, true, true, true, true, true, false, false], // 4
    [false, false, false, false, true, true, true, true, false, false], // 5
    [false, false, false, false, false, false, true, true, false, false], // 6
    [false, false, false, false, false, false, false, false, false, false], // 7
];

/// Добирает ли игрок при двухкарточной сумме `player_total`.
pub fn player_draws(player_total: u8) -> bool {
    player_total <= PLAYER_DRAW_MAX
}

/// Добирает ли банкир.
///
/// `player_third` — значение третьей карты игрока, `None` если игрок стоял.
/// Суммы 8/9 сюда попадать не должны (натуральная), для них всегда `false`.
pub fn banker_draws(banker_total: u8, player_third: Option<u8>) -> bool {
    match player_third {
        None => banker_total <= BANKER_STAND_ALONE_DRAW_MAX,
        Some(p3) => BANKER_DRAWS
            .get(banker_total as usize)
            .and_then(|row| row.get(p3 as usize))
            .copied()
            .unwrap_or(false),
    }
}
