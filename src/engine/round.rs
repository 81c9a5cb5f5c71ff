use tracing::error;

use crate::domain::card::Card;
use crate::domain::hand::{Hand, Side, Winner};
use crate::domain::shoe::Shoe;
use crate::domain::table::MAX_CARDS_PER_ROUND;
use crate::engine::errors::EngineError;
use crate::engine::round_events::{RoundEventKind, RoundEvents};
use crate::eval::{banker_draws, decide_winner, is_natural, player_draws};

/// Результат раздачи по картам (без денег).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealtRound {
    pub player: Hand,
    pub banker: Hand,
    pub winner: Winner,
    pub natural: bool,
}

impl DealtRound {
    pub fn player_total(&self) -> u8 {
        self.player.value()
    }

    pub fn banker_total(&self) -> u8 {
        self.banker.value()
    }
}

/// Сыграть один раунд из шуза.
///
/// - сдаёт P, B, P, B рубашкой вверх и открывает их в том же порядке;
/// - натуральная (8/9) у любой стороны завершает раунд;
/// - иначе применяет таблицу добора игрока, затем банкира.
///
/// Шуз должен содержать хотя бы `MAX_CARDS_PER_ROUND` карт: это проверяется
/// до первой выдачи, так что при ошибке шуз не тронут.
pub fn play_round(shoe: &mut Shoe, events: &mut RoundEvents) -> Result<DealtRound, EngineError> {
    if shoe.remaining() < MAX_CARDS_PER_ROUND {
        error!(remaining = shoe.remaining(), "в шузе не хватает карт на раунд");
        return Err(EngineError::EmptyShoe);
    }

    let mut player = Hand::new(Side::Player);
    let mut banker = Hand::new(Side::Banker);

    // Сдача: P, B, P, B.
    for _ in 0..2 {
        deal_face_down(shoe, &mut player, events)?;
        deal_face_down(shoe, &mut banker, events)?;
    }

    // Вскрытие в порядке сдачи.
    for i in 0..2 {
        reveal_card(&mut player, i, events);
        reveal_card(&mut banker, i, events);
    }

    let player_total = player.value();
    let banker_total = banker.value();

    if is_natural(player_total) || is_natural(banker_total) {
        events.push(RoundEventKind::NaturalDeclared {
            player_total,
            banker_total,
        });
        return Ok(finish(player, banker, true, events));
    }

    // Игрок.
    let player_third = if player_draws(player_total) {
        let card = draw_face_up(shoe, &mut player, events)?;
        Some(card.point_value())
    } else {
        events.push(RoundEventKind::SideStands {
            side: Side::Player,
            total: player_total,
        });
        None
    };

    // Банкир.
    if banker_draws(banker_total, player_third) {
        draw_face_up(shoe, &mut banker, events)?;
    } else {
        events.push(RoundEventKind::SideStands {
            side: Side::Banker,
            total: banker_total,
        });
    }

    Ok(finish(player, banker, false, events))
}

fn deal_face_down(
    shoe: &mut Shoe,
    hand: &mut Hand,
    events: &mut RoundEvents,
) -> Result<(), EngineError> {
    let card = shoe.draw()?.face_down();
    hand.push(card);
    events.push(RoundEventKind::CardDealt {
        side: hand.side,
        card,
    });
    Ok(())
}

fn reveal_card(hand: &mut Hand, index: usize, events: &mut RoundEvents) {
    if let Some(card) = hand.cards.get_mut(index) {
        card.reveal();
        events.push(RoundEventKind::CardRevealed {
            side: hand.side,
            card: *card,
        });
    }
}

/// Третья карта сдаётся сразу открытой.
fn draw_face_up(
    shoe: &mut Shoe,
    hand: &mut Hand,
    events: &mut RoundEvents,
) -> Result<Card, EngineError> {
    let mut card = shoe.draw()?;
    card.reveal();
    hand.push(card);
    events.push(RoundEventKind::ThirdCardDrawn {
        side: hand.side,
        card,
        total: hand.value(),
    });
    Ok(card)
}

fn finish(player: Hand, banker: Hand, natural: bool, events: &mut RoundEvents) -> DealtRound {
    let player_total = player.value();
    let banker_total = banker.value();
    let winner = decide_winner(player_total, banker_total);

    events.push(RoundEventKind::RoundDecided {
        winner,
        player_total,
        banker_total,
    });

    DealtRound {
        player,
        banker,
        winner,
        natural,
    }
}
