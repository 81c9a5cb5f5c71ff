use crate::api::dto::{RoundOutcomeDto, SessionViewDto, StreakPageDto};
use crate::domain::hand::{Hand, RoundOutcome};
use crate::engine::GameSession;
use crate::history::StreakBoard;

/// Маппинг завершённого раунда в DTO.
pub fn outcome_to_dto(outcome: &RoundOutcome) -> RoundOutcomeDto {
    RoundOutcomeDto {
        round_id: outcome.id,
        winner: outcome.winner,
        player_score: outcome.player_score,
        banker_score: outcome.banker_score,
        natural: outcome.natural,
        bet_side: outcome.bet.side,
        bet_amount: outcome.bet.amount,
        payout: outcome.payout,
        profit: outcome.profit(),
        player_cards: outcome.player_cards.clone(),
        banker_cards: outcome.banker_cards.clone(),
    }
}

/// Очки руки для фронта: пока есть закрытая карта — `None`.
fn visible_score(hand: &Hand) -> Option<u8> {
    if !hand.is_empty() && hand.all_face_up() {
        Some(hand.value())
    } else {
        None
    }
}

/// Маппинг сессии в DTO для фронта.
pub fn session_to_dto(session: &GameSession) -> SessionViewDto {
    let bet = session.bet();

    SessionViewDto {
        phase: session.phase(),
        balance: session.balance(),
        bet_side: bet.side,
        bet_amount: bet.amount,
        last_bet: session.last_bet().copied(),
        status: session.status().to_string(),
        player_cards: session.player_hand().cards.clone(),
        banker_cards: session.banker_hand().cards.clone(),
        player_score: visible_score(session.player_hand()),
        banker_score: visible_score(session.banker_hand()),
        shoe_serial: session.shoe().serial(),
        shoe_remaining: session.shoe().remaining(),
        auto_playing: session.is_auto_playing(),
        rounds_played: session.history().stats().rounds,
        chip_denominations: session.config().chip_denominations.clone(),
    }
}

/// Страница табло. `None` — последняя страница (как по умолчанию на фронте).
pub fn streak_page(board: &StreakBoard, page: Option<usize>) -> StreakPageDto {
    let total_pages = board.page_count();
    let page = page.unwrap_or(board.last_page()).min(total_pages - 1);

    StreakPageDto {
        page,
        total_pages,
        rows: board.rows,
        columns: board.page(page).to_vec(),
    }
}
