//! Авто-плей: N раундов подряд с одной и той же ставкой.
//!
//! Движок отдаёт по одному событию за шаг (`auto_play_step`), паузу между
//! раундами выдерживает фронт. Пока авто-плей идёт, ставки менять нельзя.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::domain::chips::Chips;
use crate::domain::hand::RoundOutcome;
use crate::engine::errors::EngineError;
use crate::engine::round_events::RoundEvents;
use crate::engine::session::{GameSession, Phase, StatusMessage};
use crate::engine::validation::{ensure_betting, validate_deal};
use crate::engine::RandomSource;

/// Почему авто-плей остановился раньше срока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HaltReason {
    /// Баланса не хватает на следующую ставку. Штатная остановка.
    InsufficientBalance { needed: Chips, available: Chips },
    /// Ошибка движка (шуз); ставка раунда возвращена.
    Engine(String),
}

/// Итог авто-плея.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoPlaySummary {
    pub requested: u32,
    pub completed: u32,
    pub halted: Option<HaltReason>,
    pub net_profit: i64,
    pub balance: Chips,
}

/// Событие авто-плея.
#[derive(Clone, Debug, PartialEq)]
pub enum AutoPlayEvent {
    RoundFinished {
        /// Номер раунда внутри авто-плея, с 1.
        round: u32,
        outcome: RoundOutcome,
        balance: Chips,
        events: RoundEvents,
    },
    Halted {
        after_rounds: u32,
        reason: HaltReason,
    },
    Finished {
        summary: AutoPlaySummary,
    },
}

/// Состояние идущего авто-плея.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoPlayState {
    pub requested: u32,
    pub completed: u32,
    pub halted: Option<HaltReason>,
    pub net_profit: i64,
}

/// Полный отчёт `run_auto_play`.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoPlayReport {
    pub events: Vec<AutoPlayEvent>,
    pub summary: AutoPlaySummary,
}

impl AutoPlayReport {
    /// Сколько раз пришло `RoundFinished`.
    pub fn round_events(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AutoPlayEvent::RoundFinished { .. }))
            .count()
    }
}

impl GameSession {
    /// Запустить авто-плей на `rounds` раундов с текущей ставкой.
    ///
    /// Первая ставка уже лежит на столе; следующие списываются перед
    /// каждым раундом.
    pub fn start_auto_play(&mut self, rounds: u32) -> Result<(), EngineError> {
        let checked = ensure_betting(self.phase, self.is_auto_playing(), "auto_play")
            .and_then(|_| validate_deal(&self.bet))
            .and_then(|_| {
                if rounds == 0 {
                    Err(EngineError::InvalidRoundCount)
                } else {
                    Ok(())
                }
            });
        if let Err(e) = checked {
            return self.reject(e);
        }

        if self.bet.is_staked() {
            self.last_bet = Some(self.bet);
        }
        self.phase = Phase::Dealing;
        self.auto_play = Some(AutoPlayState {
            requested: rounds,
            completed: 0,
            halted: None,
            net_profit: 0,
        });
        info!(rounds, side = %self.bet.side, wager = self.bet.amount.0, "авто-плей запущен");
        Ok(())
    }

    /// Один шаг авто-плея. `None`, если авто-плей не идёт.
    pub fn auto_play_step<R: RandomSource>(&mut self, rng: &mut R) -> Option<AutoPlayEvent> {
        let mut state = self.auto_play.clone()?;

        if state.halted.is_some() || state.completed >= state.requested {
            return Some(self.finish_auto_play(state));
        }

        let round = state.completed + 1;
        let wager = self.bet.amount;
        let mut debited = false;

        if state.completed > 0 && self.bet.is_staked() {
            match self.balance.checked_sub(wager) {
                Some(rest) => {
                    self.balance = rest;
                    debited = true;
                }
                None => {
                    let reason = HaltReason::InsufficientBalance {
                        needed: wager,
                        available: self.balance,
                    };
                    warn!(
                        after_rounds = state.completed,
                        needed = wager.0,
                        available = self.balance.0,
                        "авто-плей остановлен: не хватает на ставку"
                    );
                    state.halted = Some(reason.clone());
                    self.auto_play = Some(state.clone());
                    self.status = StatusMessage::AutoPlayHalted;
                    return Some(AutoPlayEvent::Halted {
                        after_rounds: state.completed,
                        reason,
                    });
                }
            }
        }

        self.status = StatusMessage::AutoPlayRound {
            round,
            total: state.requested,
        };

        let mut events = RoundEvents::new();
        match self.play_and_settle(rng, &mut events) {
            Ok(outcome) => {
                state.completed = round;
                state.net_profit += outcome.profit();
                self.auto_play = Some(state);
                Some(AutoPlayEvent::RoundFinished {
                    round,
                    outcome,
                    balance: self.balance,
                    events,
                })
            }
            Err(e) => {
                if debited {
                    self.balance += wager;
                }
                error!(error = %e, round, "авто-плей прерван ошибкой движка");
                let reason = HaltReason::Engine(e.to_string());
                state.halted = Some(reason.clone());
                self.auto_play = Some(state.clone());
                self.status = StatusMessage::InternalError;
                Some(AutoPlayEvent::Halted {
                    after_rounds: state.completed,
                    reason,
                })
            }
        }
    }

    /// Прогнать авто-плей до конца.
    pub fn run_auto_play<R: RandomSource>(
        &mut self,
        rounds: u32,
        rng: &mut R,
    ) -> Result<AutoPlayReport, EngineError> {
        self.start_auto_play(rounds)?;

        let mut events = Vec::new();
        while let Some(event) = self.auto_play_step(rng) {
            if let AutoPlayEvent::Finished { summary } = &event {
                let summary = summary.clone();
                events.push(event);
                return Ok(AutoPlayReport { events, summary });
            }
            events.push(event);
        }

        Err(EngineError::Internal("авто-плей завершился без итога"))
    }

    fn finish_auto_play(&mut self, state: AutoPlayState) -> AutoPlayEvent {
        self.auto_play = None;
        self.phase = Phase::Result;
        if state.halted.is_none() {
            self.status = StatusMessage::AutoPlayFinished {
                rounds: state.completed,
            };
        }

        let summary = AutoPlaySummary {
            requested: state.requested,
            completed: state.completed,
            halted: state.halted,
            net_profit: state.net_profit,
            balance: self.balance,
        };
        info!(
            completed = summary.completed,
            requested = summary.requested,
            net_profit = summary.net_profit,
            "авто-плей завершён"
        );
        AutoPlayEvent::Finished { summary }
    }
}
