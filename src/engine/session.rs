use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::bet::{Bet, BetSide};
use crate::domain::chips::Chips;
use crate::domain::hand::{Hand, RoundOutcome, Side, Winner};
use crate::domain::shoe::Shoe;
use crate::domain::table::{ConfigError, TableConfig};
use crate::engine::auto_play::AutoPlayState;
use crate::engine::errors::EngineError;
use crate::engine::payout::payout;
use crate::engine::round::play_round;
use crate::engine::round_events::{RoundEventKind, RoundEvents};
use crate::engine::validation::{
    ensure_betting, validate_deal, validate_place_bet, validate_repeat_bet, validate_select_side,
};
use crate::engine::RandomSource;
use crate::history::{RoundHistory, StatsWindow, StreakBoard, WindowStats};
use crate::infra::ids::IdGenerator;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Betting,
    Dealing,
    Result,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Betting => "BETTING",
            Phase::Dealing => "DEALING",
            Phase::Result => "RESULT",
        };
        write!(f, "{s}")
    }
}

/// Строка статуса для фронта. Отказы видны только через неё
/// (и через `Err` у метода), исключений нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusMessage {
    PlaceYourBets,
    SelectSideFirst,
    BetPlaced { total: Chips },
    BetCleared,
    BetRepeated { amount: Chips },
    BetAlreadyPlaced,
    InsufficientBalance,
    ClearBetFirst,
    NoLastBet,
    InvalidAmount,
    NotNow,
    Dealing,
    Won { profit: Chips },
    Push,
    Lost { amount: Chips },
    RoundResult { winner: Winner },
    AutoPlayRound { round: u32, total: u32 },
    AutoPlayHalted,
    AutoPlayFinished { rounds: u32 },
    InternalError,
}

impl StatusMessage {
    pub fn from_error(err: &EngineError) -> Self {
        match err {
            EngineError::InsufficientBalance { .. } => StatusMessage::InsufficientBalance,
            EngineError::NoSideSelected => StatusMessage::SelectSideFirst,
            EngineError::InvalidPhaseTransition { .. } | EngineError::AutoPlayActive => {
                StatusMessage::NotNow
            }
            EngineError::InvalidAmount | EngineError::InvalidRoundCount => {
                StatusMessage::InvalidAmount
            }
            EngineError::SideLocked => StatusMessage::ClearBetFirst,
            EngineError::NoLastBet => StatusMessage::NoLastBet,
            EngineError::BetAlreadyPlaced => StatusMessage::BetAlreadyPlaced,
            EngineError::EmptyShoe | EngineError::Internal(_) => StatusMessage::InternalError,
        }
    }

    /// Итоговая строка раунда по профиту.
    pub fn for_outcome(outcome: &RoundOutcome) -> Self {
        let profit = outcome.profit();
        if profit > 0 {
            StatusMessage::Won {
                profit: Chips(profit as u64),
            }
        } else if outcome.bet.is_staked() && profit == 0 {
            StatusMessage::Push
        } else if outcome.bet.is_staked() {
            StatusMessage::Lost {
                amount: outcome.bet.amount,
            }
        } else {
            StatusMessage::RoundResult {
                winner: outcome.winner,
            }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::PlaceYourBets => write!(f, "Сделайте ставку и нажмите DEAL"),
            StatusMessage::SelectSideFirst => write!(f, "Выберите сторону ставки"),
            StatusMessage::BetPlaced { total } => write!(f, "Ставка: {total}"),
            StatusMessage::BetCleared => write!(f, "Ставка снята"),
            StatusMessage::BetRepeated { amount } => write!(f, "Повтор: {amount}"),
            StatusMessage::BetAlreadyPlaced => write!(f, "Ставка уже сделана"),
            StatusMessage::InsufficientBalance => write!(f, "Недостаточно средств"),
            StatusMessage::ClearBetFirst => write!(f, "Сначала снимите ставку"),
            StatusMessage::NoLastBet => write!(f, "Нечего повторять"),
            StatusMessage::InvalidAmount => write!(f, "Неверная сумма"),
            StatusMessage::NotNow => write!(f, "Сейчас это недоступно"),
            StatusMessage::Dealing => write!(f, "Раздача карт..."),
            StatusMessage::Won { profit } => write!(f, "Выигрыш! +{profit}"),
            StatusMessage::Push => write!(f, "Ничья (ставка возвращена)"),
            StatusMessage::Lost { amount } => write!(f, "Проигрыш: -{amount}"),
            StatusMessage::RoundResult { winner } => match winner {
                Winner::Player => write!(f, "Победа игрока"),
                Winner::Banker => write!(f, "Победа банкира"),
                Winner::Tie => write!(f, "Ничья (TIE)"),
            },
            StatusMessage::AutoPlayRound { round, total } => {
                write!(f, "AUTO PLAY: {round}/{total}")
            }
            StatusMessage::AutoPlayHalted => write!(f, "Авто-плей остановлен: недостаточно средств"),
            StatusMessage::AutoPlayFinished { rounds } => write!(f, "Сыграно раундов: {rounds}"),
            StatusMessage::InternalError => write!(f, "Внутренняя ошибка"),
        }
    }
}

/// Итог одной раздачи для фронта.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// Все события раунда; последнее — `RoundFinished`.
    pub events: RoundEvents,
    pub outcome: RoundOutcome,
    pub balance: Chips,
}

/// Игровая сессия: один стол, один игрок.
///
/// Владеет шузом, балансом, историей и фазой. Все изменения идут через
/// `&mut self`, поэтому посреди раздачи или авто-плея ничего вклиниться не может.
#[derive(Debug)]
pub struct GameSession {
    pub(crate) config: TableConfig,
    pub(crate) phase: Phase,
    pub(crate) balance: Chips,
    pub(crate) bet: Bet,
    pub(crate) last_bet: Option<Bet>,
    pub(crate) shoe: Shoe,
    pub(crate) player_hand: Hand,
    pub(crate) banker_hand: Hand,
    pub(crate) history: RoundHistory,
    pub(crate) status: StatusMessage,
    pub(crate) auto_play: Option<AutoPlayState>,
    pub(crate) ids: IdGenerator,
}

impl GameSession {
    /// Новая сессия со свежим перемешанным шузом.
    pub fn new<R: RandomSource>(config: TableConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let ids = IdGenerator::new();
        let shoe = Shoe::build(config.deck_count, ids.next_shoe_serial(), rng);
        info!(
            decks = config.deck_count,
            cards = shoe.remaining(),
            "создан новый шуз"
        );
        Ok(Self::assemble(config, shoe, ids))
    }

    /// Сессия с заранее заряженным шузом (реплей, тесты).
    pub fn with_shoe(config: TableConfig, shoe: Shoe) -> Result<Self, ConfigError> {
        config.validate()?;
        let ids = IdGenerator::after_shoe(shoe.serial());
        Ok(Self::assemble(config, shoe, ids))
    }

    fn assemble(config: TableConfig, shoe: Shoe, ids: IdGenerator) -> Self {
        Self {
            balance: config.initial_balance,
            history: RoundHistory::new(config.max_history),
            config,
            phase: Phase::Betting,
            bet: Bet::NONE,
            last_bet: None,
            shoe,
            player_hand: Hand::new(Side::Player),
            banker_hand: Hand::new(Side::Banker),
            status: StatusMessage::PlaceYourBets,
            auto_play: None,
            ids,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn bet(&self) -> &Bet {
        &self.bet
    }

    pub fn last_bet(&self) -> Option<&Bet> {
        self.last_bet.as_ref()
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn banker_hand(&self) -> &Hand {
        &self.banker_hand
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    pub fn window_stats(&self, window: StatsWindow) -> WindowStats {
        self.history.window_stats(window)
    }

    pub fn streak_board(&self) -> StreakBoard {
        self.history
            .streak_board(self.config.streak_rows, self.config.streak_columns_per_page)
    }

    /// Положить фишки на выбранную сторону.
    pub fn place_bet(&mut self, amount: Chips) -> Result<(), EngineError> {
        let checked = ensure_betting(self.phase, self.is_auto_playing(), "place_bet")
            .and_then(|_| validate_place_bet(&self.bet, amount, self.balance));
        if let Err(e) = checked {
            return self.reject(e);
        }

        self.balance -= amount;
        self.bet.amount += amount;
        self.status = StatusMessage::BetPlaced {
            total: self.bet.amount,
        };
        Ok(())
    }

    /// Снять ставку: фишки возвращаются на баланс, сторона остаётся.
    pub fn clear_bet(&mut self) -> Result<(), EngineError> {
        if let Err(e) = ensure_betting(self.phase, self.is_auto_playing(), "clear_bet") {
            return self.reject(e);
        }

        self.balance += self.bet.amount;
        self.bet.amount = Chips::ZERO;
        self.status = StatusMessage::BetCleared;
        Ok(())
    }

    pub fn select_side(&mut self, side: BetSide) -> Result<(), EngineError> {
        let checked = ensure_betting(self.phase, self.is_auto_playing(), "select_side")
            .and_then(|_| validate_select_side(&self.bet, side));
        if let Err(e) = checked {
            return self.reject(e);
        }

        self.bet.side = side;
        Ok(())
    }

    /// Повторить прошлую ставку (сумма и сторона).
    pub fn repeat_last_bet(&mut self) -> Result<(), EngineError> {
        let checked = ensure_betting(self.phase, self.is_auto_playing(), "repeat_last_bet")
            .and_then(|_| validate_repeat_bet(&self.bet, self.last_bet.as_ref(), self.balance));
        let last = match checked {
            Ok(last) => last,
            Err(e) => return self.reject(e),
        };

        self.balance -= last.amount;
        self.bet = last;
        self.status = StatusMessage::BetRepeated {
            amount: last.amount,
        };
        Ok(())
    }

    /// Раздать раунд: Betting → Dealing → Result.
    ///
    /// Возвращает ленту событий для пошагового показа и итог раунда.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<RoundReport, EngineError> {
        let checked = ensure_betting(self.phase, self.is_auto_playing(), "deal")
            .and_then(|_| validate_deal(&self.bet));
        if let Err(e) = checked {
            return self.reject(e);
        }

        self.phase = Phase::Dealing;
        self.status = StatusMessage::Dealing;

        let mut events = RoundEvents::new();
        let outcome = match self.play_and_settle(rng, &mut events) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.phase = Phase::Betting;
                return self.reject(e);
            }
        };

        if self.bet.is_staked() {
            self.last_bet = Some(self.bet);
        }
        self.status = StatusMessage::for_outcome(&outcome);
        self.phase = Phase::Result;

        Ok(RoundReport {
            events,
            outcome,
            balance: self.balance,
        })
    }

    /// Result → Betting: убрать карты и рассчитанную ставку.
    /// Сторона и прошлая ставка сохраняются.
    pub fn next_round(&mut self) -> Result<(), EngineError> {
        if self.is_auto_playing() {
            return self.reject(EngineError::AutoPlayActive);
        }
        if self.phase != Phase::Result {
            return self.reject(EngineError::InvalidPhaseTransition {
                action: "next_round",
                phase: self.phase,
            });
        }

        self.player_hand = Hand::new(Side::Player);
        self.banker_hand = Hand::new(Side::Banker);
        self.bet.amount = Chips::ZERO;
        self.status = StatusMessage::PlaceYourBets;
        self.phase = Phase::Betting;
        Ok(())
    }

    /// Подменить шуз (реплей, тесты). Только между раундами.
    pub fn replace_shoe(&mut self, shoe: Shoe) -> Result<(), EngineError> {
        if let Err(e) = ensure_betting(self.phase, self.is_auto_playing(), "replace_shoe") {
            return self.reject(e);
        }
        self.shoe = shoe;
        Ok(())
    }

    /// Общая часть обычной раздачи и авто-плея: проверка шуза, раунд,
    /// выплата, баланс, история. Ставка к этому моменту уже списана.
    pub(crate) fn play_and_settle<R: RandomSource>(
        &mut self,
        rng: &mut R,
        events: &mut RoundEvents,
    ) -> Result<RoundOutcome, EngineError> {
        if self.shoe.needs_rebuild(self.config.cut_card_threshold) {
            self.rebuild_shoe(rng);
            events.push(RoundEventKind::ShoeReplaced {
                serial: self.shoe.serial(),
                cards: self.shoe.remaining(),
            });
        }

        let dealt = play_round(&mut self.shoe, events)?;
        let paid = payout(&self.bet, dealt.winner);
        self.balance += paid;

        let outcome = RoundOutcome {
            id: self.ids.next_round_id(),
            winner: dealt.winner,
            player_score: dealt.player_total(),
            banker_score: dealt.banker_total(),
            natural: dealt.natural,
            player_cards: dealt.player.cards.clone(),
            banker_cards: dealt.banker.cards.clone(),
            bet: self.bet,
            payout: paid,
        };
        debug!(
            round = outcome.id,
            winner = %outcome.winner,
            player = outcome.player_score,
            banker = outcome.banker_score,
            payout = outcome.payout.0,
            "раунд рассчитан"
        );

        self.player_hand = dealt.player;
        self.banker_hand = dealt.banker;
        self.history.record(outcome.clone());

        events.push(RoundEventKind::RoundFinished {
            outcome: outcome.clone(),
            balance: self.balance,
        });
        Ok(outcome)
    }

    /// Собрать новый шуз, остаток старого выбрасывается.
    fn rebuild_shoe<R: RandomSource>(&mut self, rng: &mut R) {
        let discarded = self.shoe.remaining();
        self.shoe = Shoe::build(self.config.deck_count, self.ids.next_shoe_serial(), rng);
        info!(
            serial = self.shoe.serial(),
            discarded,
            cards = self.shoe.remaining(),
            "замена шуза (достали cut-card)"
        );
    }

    /// Отказ: состояние не меняется, только строка статуса.
    pub(crate) fn reject<T>(&mut self, err: EngineError) -> Result<T, EngineError> {
        debug!(error = %err, phase = %self.phase, "действие отклонено");
        self.status = StatusMessage::from_error(&err);
        Err(err)
    }
}
