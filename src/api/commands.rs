use serde::{Deserialize, Serialize};

use crate::domain::bet::BetSide;
use crate::domain::chips::Chips;
use crate::engine::{AutoPlayEvent, EngineError, GameSession, RandomSource};
use crate::infra::mapping::{outcome_to_dto, session_to_dto};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня — всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Добавить фишки к ставке на выбранную сторону.
    PlaceBet { amount: Chips },

    /// Снять ставку (фишки возвращаются на баланс).
    ClearBet,

    /// Выбрать сторону: Player / Banker / Tie.
    SelectSide { side: BetSide },

    /// Повторить прошлую ставку.
    RepeatLastBet,

    /// Сыграть раунд.
    Deal,

    /// Убрать карты и перейти к новым ставкам.
    NextRound,

    /// Авто-плей на `rounds` раундов; `None` — значение из конфига стола.
    AutoPlay { rounds: Option<u32> },
}

/// Выполнить команду над сессией.
///
/// Отказ не паникует и не меняет состояние: возвращается
/// `CommandResponse::Rejected` со строкой статуса.
pub fn execute_command<R: RandomSource>(
    session: &mut GameSession,
    rng: &mut R,
    command: Command,
) -> CommandResponse {
    match run(session, rng, command) {
        Ok(response) => response,
        Err(err) => CommandResponse::Rejected {
            error: ApiError::from(err),
            status: session.status().to_string(),
        },
    }
}

fn run<R: RandomSource>(
    session: &mut GameSession,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, EngineError> {
    match command {
        Command::PlaceBet { amount } => session.place_bet(amount)?,
        Command::ClearBet => session.clear_bet()?,
        Command::SelectSide { side } => session.select_side(side)?,
        Command::RepeatLastBet => session.repeat_last_bet()?,
        Command::NextRound => session.next_round()?,

        Command::Deal => {
            let report = session.deal(rng)?;
            return Ok(CommandResponse::RoundDealt {
                events: report.events.events,
                outcome: outcome_to_dto(&report.outcome),
                session: session_to_dto(session),
            });
        }

        Command::AutoPlay { rounds } => {
            let rounds = rounds.unwrap_or(session.config().auto_play_rounds);
            let report = session.run_auto_play(rounds, rng)?;
            let outcomes = report
                .events
                .iter()
                .filter_map(|e| match e {
                    AutoPlayEvent::RoundFinished { outcome, .. } => Some(outcome_to_dto(outcome)),
                    _ => None,
                })
                .collect();
            return Ok(CommandResponse::AutoPlayFinished {
                rounds: outcomes,
                summary: report.summary,
                session: session_to_dto(session),
            });
        }
    }

    Ok(CommandResponse::SessionState(session_to_dto(session)))
}
