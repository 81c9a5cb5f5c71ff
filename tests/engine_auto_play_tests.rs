//! Тесты авто-плея: серия раундов, остановка по балансу, блокировка ставок.

use baccarat_engine::domain::bet::{Bet, BetSide};
use baccarat_engine::domain::card::Card;
use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::domain::shoe::Shoe;
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::engine::{
    AutoPlayEvent, EngineError, GameSession, HaltReason, Phase, RandomSource, StatusMessage,
};

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

/// Три раунда подряд: у игрока натуральная 9, у банкира 0.
const THREE_PLAYER_NATURALS: &str =
    "9h Kd Kc Ks 9d Kh Kc Ks 9c Kd Kh Ks Ks Ks Ks Ks";

fn session(initial: u64) -> GameSession {
    let top: Vec<Card> = THREE_PLAYER_NATURALS
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();
    let config = TableConfig {
        cut_card_threshold: 6,
        initial_balance: Chips(initial),
        ..TableConfig::default()
    };
    GameSession::with_shoe(config, Shoe::from_top(top, 1)).unwrap()
}

//
// TEST 1 — полный авто-плей
//
#[test]
fn auto_play_runs_all_rounds() {
    let mut s = session(10_000);
    s.select_side(BetSide::Player).unwrap();
    s.place_bet(Chips(100)).unwrap();

    let report = s.run_auto_play(3, &mut DummyRng).unwrap();

    assert_eq!(report.round_events(), 3);
    assert_eq!(report.summary.requested, 3);
    assert_eq!(report.summary.completed, 3);
    assert_eq!(report.summary.halted, None);
    assert_eq!(report.summary.net_profit, 300);
    assert_eq!(report.summary.balance, Chips(10_300));
    assert_eq!(s.balance(), Chips(10_300));

    assert!(matches!(report.events.last(), Some(AutoPlayEvent::Finished { .. })));
    assert_eq!(s.phase(), Phase::Result);
    assert!(!s.is_auto_playing());
    assert_eq!(s.status(), &StatusMessage::AutoPlayFinished { rounds: 3 });
    assert_eq!(s.history().len(), 3);
    assert_eq!(s.last_bet(), Some(&Bet::new(BetSide::Player, Chips(100))));

    let rounds: Vec<_> = report
        .events
        .iter()
        .filter_map(|e| match e {
            AutoPlayEvent::RoundFinished { round, outcome, .. } => Some((*round, outcome.winner)),
            _ => None,
        })
        .collect();
    assert_eq!(
        rounds,
        vec![(1, Winner::Player), (2, Winner::Player), (3, Winner::Player)]
    );
}

//
// TEST 2 — остановка, когда не хватает на следующую ставку
//
#[test]
fn auto_play_halts_on_insufficient_balance() {
    let mut s = session(250);
    s.select_side(BetSide::Banker).unwrap();
    s.place_bet(Chips(100)).unwrap();

    let report = s.run_auto_play(10, &mut DummyRng).unwrap();

    // 250 -> 150 (первая ставка) -> проигрыш -> 50 (вторая) -> проигрыш -> стоп
    assert_eq!(report.summary.completed, 2);
    assert_eq!(report.round_events() as u32, report.summary.completed);
    assert_eq!(
        report.summary.halted,
        Some(HaltReason::InsufficientBalance {
            needed: Chips(100),
            available: Chips(50)
        })
    );
    assert_eq!(report.summary.net_profit, -200);
    assert_eq!(s.balance(), Chips(50));
    assert_eq!(s.status(), &StatusMessage::AutoPlayHalted);
    assert_eq!(s.phase(), Phase::Result);
    assert!(matches!(
        report.events[2],
        AutoPlayEvent::Halted {
            after_rounds: 2,
            ..
        }
    ));

    // после остановки обычный цикл продолжается
    s.next_round().unwrap();
    assert!(matches!(
        s.repeat_last_bet(),
        Err(EngineError::InsufficientBalance { .. })
    ));
}

//
// TEST 3 — во время авто-плея ставки заблокированы
//
#[test]
fn mutations_are_blocked_during_auto_play() {
    let mut s = session(10_000);
    s.select_side(BetSide::Player).unwrap();
    s.place_bet(Chips(100)).unwrap();
    s.start_auto_play(3).unwrap();
    assert!(s.is_auto_playing());
    assert_eq!(s.phase(), Phase::Dealing);

    assert_eq!(s.place_bet(Chips(50)), Err(EngineError::AutoPlayActive));
    assert_eq!(s.clear_bet(), Err(EngineError::AutoPlayActive));
    assert_eq!(s.select_side(BetSide::Tie), Err(EngineError::AutoPlayActive));
    assert_eq!(s.repeat_last_bet(), Err(EngineError::AutoPlayActive));
    assert_eq!(s.next_round(), Err(EngineError::AutoPlayActive));
    assert_eq!(s.start_auto_play(5), Err(EngineError::AutoPlayActive));
    assert!(matches!(
        s.deal(&mut DummyRng),
        Err(EngineError::AutoPlayActive)
    ));

    let first = s.auto_play_step(&mut DummyRng);
    assert!(matches!(first, Some(AutoPlayEvent::RoundFinished { round: 1, .. })));
    assert_eq!(s.status(), &StatusMessage::AutoPlayRound { round: 1, total: 3 });
    assert_eq!(s.bet(), &Bet::new(BetSide::Player, Chips(100)));
    assert_eq!(s.place_bet(Chips(50)), Err(EngineError::AutoPlayActive));

    assert!(matches!(
        s.auto_play_step(&mut DummyRng),
        Some(AutoPlayEvent::RoundFinished { round: 2, .. })
    ));
    assert!(matches!(
        s.auto_play_step(&mut DummyRng),
        Some(AutoPlayEvent::RoundFinished { round: 3, .. })
    ));
    assert!(matches!(
        s.auto_play_step(&mut DummyRng),
        Some(AutoPlayEvent::Finished { .. })
    ));
    assert_eq!(s.auto_play_step(&mut DummyRng), None);
    assert!(!s.is_auto_playing());
}

//
// TEST 4 — авто-плей без денег
//
#[test]
fn auto_play_without_wager_only_records_history() {
    let mut s = session(10_000);
    s.select_side(BetSide::Tie).unwrap();

    let report = s.run_auto_play(2, &mut DummyRng).unwrap();

    assert_eq!(report.summary.completed, 2);
    assert_eq!(report.summary.net_profit, 0);
    assert_eq!(s.balance(), Chips(10_000));
    assert_eq!(s.history().len(), 2);
    assert_eq!(s.last_bet(), None);
}

//
// TEST 5 — проверки при старте
//
#[test]
fn auto_play_start_validation() {
    let mut s = session(10_000);
    assert_eq!(s.auto_play_step(&mut DummyRng), None);

    assert_eq!(
        s.run_auto_play(3, &mut DummyRng).map(|_| ()),
        Err(EngineError::NoSideSelected)
    );

    s.select_side(BetSide::Banker).unwrap();
    assert_eq!(s.start_auto_play(0), Err(EngineError::InvalidRoundCount));
    assert!(!s.is_auto_playing());
    assert_eq!(s.phase(), Phase::Betting);

    s.deal(&mut DummyRng).unwrap();
    assert!(matches!(
        s.start_auto_play(3),
        Err(EngineError::InvalidPhaseTransition {
            phase: Phase::Result,
            ..
        })
    ));
}
