use crate::domain::bet::{Bet, BetSide};
use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;
use crate::engine::session::Phase;

/// Ставочные действия разрешены только в фазе Betting и не во время авто-плея.
pub fn ensure_betting(
    phase: Phase,
    auto_play_active: bool,
    action: &'static str,
) -> Result<(), EngineError> {
    if auto_play_active {
        return Err(EngineError::AutoPlayActive);
    }
    if phase != Phase::Betting {
        return Err(EngineError::InvalidPhaseTransition { action, phase });
    }
    Ok(())
}

/// Добавить фишки к текущей ставке.
pub fn validate_place_bet(bet: &Bet, amount: Chips, balance: Chips) -> Result<(), EngineError> {
    if !bet.side.is_selected() {
        return Err(EngineError::NoSideSelected);
    }
    if amount.is_zero() {
        return Err(EngineError::InvalidAmount);
    }
    if balance < amount {
        return Err(EngineError::InsufficientBalance {
            needed: amount,
            available: balance,
        });
    }
    Ok(())
}

/// Сменить сторону можно, пока на другой стороне не лежат фишки.
pub fn validate_select_side(bet: &Bet, side: BetSide) -> Result<(), EngineError> {
    if bet.is_staked() && bet.side.is_selected() && bet.side != side {
        return Err(EngineError::SideLocked);
    }
    Ok(())
}

/// Повтор прошлой ставки: она должна быть, на столе пусто, денег хватает.
pub fn validate_repeat_bet(
    bet: &Bet,
    last_bet: Option<&Bet>,
    balance: Chips,
) -> Result<Bet, EngineError> {
    let last = match last_bet {
        Some(b) if b.is_staked() && b.side.is_selected() => *b,
        _ => return Err(EngineError::NoLastBet),
    };
    if bet.is_staked() {
        return Err(EngineError::BetAlreadyPlaced);
    }
    if balance < last.amount {
        return Err(EngineError::InsufficientBalance {
            needed: last.amount,
            available: balance,
        });
    }
    Ok(last)
}

/// Раздача (и авто-плей) требует выбранной стороны.
pub fn validate_deal(bet: &Bet) -> Result<(), EngineError> {
    if !bet.side.is_selected() {
        return Err(EngineError::NoSideSelected);
    }
    Ok(())
}
