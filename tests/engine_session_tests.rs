//! Тесты игровой сессии: ставки, фазы, расчёт, замена шуза.

use baccarat_engine::domain::bet::{Bet, BetSide};
use baccarat_engine::domain::card::Card;
use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::domain::shoe::Shoe;
use baccarat_engine::domain::table::{ConfigError, TableConfig};
use baccarat_engine::engine::{
    EngineError, GameSession, Phase, RandomSource, RoundEventKind, StatusMessage,
};
use baccarat_engine::infra::DeterministicRng;

/// shuffle ничего не делает => новый шуз остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn loaded(cards: &str, serial: u32) -> Shoe {
    let top: Vec<Card> = cards.split_whitespace().map(|s| s.parse().unwrap()).collect();
    Shoe::from_top(top, serial)
}

/// Конфиг для заряженных шузов: шуз меняется, только когда карт меньше 6.
fn test_config() -> TableConfig {
    TableConfig {
        cut_card_threshold: 6,
        ..TableConfig::default()
    }
}

fn session_with(cards: &str) -> GameSession {
    GameSession::with_shoe(test_config(), loaded(cards, 1)).unwrap()
}

// P: 3 + 4 = 7, B: 7 + 2 = 9 (натуральная банкира)
const BANKER_NATURAL: &str = "3h 7d 4c 2s Ks Ks Ks Ks";
// P: 4 + 4 = 8, B: 5 + 3 = 8
const NATURAL_TIE: &str = "4h 5d 4c 3s Ks Ks Ks Ks";

//
// TEST 1 — ставка 500 на банкира, банкир выигрывает
//
#[test]
fn banker_bet_wins_end_to_end() {
    let mut s = session_with(BANKER_NATURAL);
    assert_eq!(s.balance(), Chips(10_000));

    s.select_side(BetSide::Banker).unwrap();
    s.place_bet(Chips(500)).unwrap();
    assert_eq!(s.balance(), Chips(9_500));

    let report = s.deal(&mut DummyRng).unwrap();

    assert_eq!(report.outcome.winner, Winner::Banker);
    assert_eq!(report.outcome.player_score, 7);
    assert_eq!(report.outcome.banker_score, 9);
    assert!(report.outcome.natural);
    assert_eq!(report.outcome.payout, Chips(1_000));
    assert_eq!(report.outcome.profit(), 500);
    assert_eq!(report.balance, Chips(10_500));
    assert_eq!(s.balance(), Chips(10_500));

    assert_eq!(s.phase(), Phase::Result);
    assert_eq!(
        s.status(),
        &StatusMessage::Won {
            profit: Chips(500)
        }
    );
    assert_eq!(s.last_bet(), Some(&Bet::new(BetSide::Banker, Chips(500))));
    assert_eq!(s.history().len(), 1);
    assert!(matches!(
        report.events.last(),
        Some(RoundEventKind::RoundFinished { .. })
    ));
}

//
// TEST 2 — ставка на ничью платит 8:1
//
#[test]
fn tie_bet_pays_eight_to_one() {
    let mut s = session_with(NATURAL_TIE);
    s.select_side(BetSide::Tie).unwrap();
    s.place_bet(Chips(100)).unwrap();

    let report = s.deal(&mut DummyRng).unwrap();

    assert_eq!(report.outcome.winner, Winner::Tie);
    assert_eq!(report.outcome.payout, Chips(900));
    assert_eq!(report.outcome.profit(), 800);
    assert_eq!(s.balance(), Chips(10_800));
}

//
// TEST 3 — проигрыш и пуш
//
#[test]
fn player_bet_loses_to_banker() {
    let mut s = session_with(BANKER_NATURAL);
    s.select_side(BetSide::Player).unwrap();
    s.place_bet(Chips(100)).unwrap();

    let report = s.deal(&mut DummyRng).unwrap();

    assert_eq!(report.outcome.payout, Chips::ZERO);
    assert_eq!(report.outcome.profit(), -100);
    assert_eq!(s.balance(), Chips(9_900));
    assert_eq!(
        s.status(),
        &StatusMessage::Lost {
            amount: Chips(100)
        }
    );
}

#[test]
fn side_bet_is_returned_on_tie() {
    let mut s = session_with(NATURAL_TIE);
    s.select_side(BetSide::Player).unwrap();
    s.place_bet(Chips(100)).unwrap();

    let report = s.deal(&mut DummyRng).unwrap();

    assert_eq!(report.outcome.payout, Chips(100));
    assert_eq!(s.balance(), Chips(10_000));
    assert_eq!(s.status(), &StatusMessage::Push);
}

//
// TEST 4 — раунд без денег
//
#[test]
fn round_without_wager_is_observational() {
    let mut s = session_with(BANKER_NATURAL);
    s.select_side(BetSide::Player).unwrap();

    let report = s.deal(&mut DummyRng).unwrap();

    assert_eq!(report.outcome.payout, Chips::ZERO);
    assert_eq!(s.balance(), Chips(10_000));
    assert_eq!(s.last_bet(), None);
    assert_eq!(
        s.status(),
        &StatusMessage::RoundResult {
            winner: Winner::Banker
        }
    );
    assert_eq!(s.history().stats().rounds, 1);
}

//
// TEST 5 — отказы не меняют состояние
//
#[test]
fn deal_without_side_is_rejected() {
    let mut s = session_with(BANKER_NATURAL);
    let shoe_before = s.shoe().clone();

    assert_eq!(s.deal(&mut DummyRng), Err(EngineError::NoSideSelected));
    assert_eq!(s.phase(), Phase::Betting);
    assert_eq!(s.status(), &StatusMessage::SelectSideFirst);
    assert_eq!(s.shoe(), &shoe_before);
    assert!(s.history().is_empty());
}

#[test]
fn bet_validation_rejections() {
    let mut s = session_with(BANKER_NATURAL);

    assert_eq!(s.place_bet(Chips(100)), Err(EngineError::NoSideSelected));

    s.select_side(BetSide::Banker).unwrap();
    assert_eq!(s.place_bet(Chips::ZERO), Err(EngineError::InvalidAmount));
    assert_eq!(
        s.place_bet(Chips(20_000)),
        Err(EngineError::InsufficientBalance {
            needed: Chips(20_000),
            available: Chips(10_000)
        })
    );
    assert_eq!(s.status(), &StatusMessage::InsufficientBalance);
    assert_eq!(s.balance(), Chips(10_000));
    assert_eq!(s.bet().amount, Chips::ZERO);

    // весь баланс поставить можно
    s.place_bet(Chips(10_000)).unwrap();
    assert_eq!(s.balance(), Chips::ZERO);
}

#[test]
fn betting_is_closed_outside_betting_phase() {
    let mut s = session_with(BANKER_NATURAL);
    s.select_side(BetSide::Banker).unwrap();
    s.place_bet(Chips(100)).unwrap();
    s.deal(&mut DummyRng).unwrap();

    let balance = s.balance();
    assert_eq!(
        s.place_bet(Chips(100)),
        Err(EngineError::InvalidPhaseTransition {
            action: "place_bet",
            phase: Phase::Result
        })
    );
    assert_eq!(s.status(), &StatusMessage::NotNow);
    assert!(s.clear_bet().is_err());
    assert!(s.select_side(BetSide::Player).is_err());
    assert!(s.repeat_last_bet().is_err());
    assert!(s.deal(&mut DummyRng).is_err());
    assert_eq!(s.balance(), balance);
    assert_eq!(s.history().len(), 1);
}

#[test]
fn next_round_only_from_result() {
    let mut s = session_with(BANKER_NATURAL);
    assert!(matches!(
        s.next_round(),
        Err(EngineError::InvalidPhaseTransition {
            phase: Phase::Betting,
            ..
        })
    ));

    s.select_side(BetSide::Banker).unwrap();
    s.place_bet(Chips(250)).unwrap();
    s.deal(&mut DummyRng).unwrap();
    assert_eq!(s.player_hand().len(), 2);

    s.next_round().unwrap();
    assert_eq!(s.phase(), Phase::Betting);
    assert!(s.player_hand().is_empty());
    assert!(s.banker_hand().is_empty());
    assert_eq!(s.bet().amount, Chips::ZERO);
    assert_eq!(s.bet().side, BetSide::Banker);
    assert_eq!(s.status(), &StatusMessage::PlaceYourBets);
}

//
// TEST 6 — смена стороны и снятие ставки
//
#[test]
fn side_is_locked_while_chips_are_down() {
    let mut s = session_with(BANKER_NATURAL);
    s.select_side(BetSide::Player).unwrap();
    s.place_bet(Chips(100)).unwrap();
    s.place_bet(Chips(50)).unwrap();
    assert_eq!(
        s.status(),
        &StatusMessage::BetPlaced {
            total: Chips(150)
        }
    );

    assert_eq!(s.select_side(BetSide::Banker), Err(EngineError::SideLocked));
    assert_eq!(s.status(), &StatusMessage::ClearBetFirst);
    // та же сторона — не ошибка
    s.select_side(BetSide::Player).unwrap();

    s.clear_bet().unwrap();
    assert_eq!(s.balance(), Chips(10_000));
    assert_eq!(s.bet().amount, Chips::ZERO);
    assert_eq!(s.bet().side, BetSide::Player);

    s.select_side(BetSide::Banker).unwrap();
    assert_eq!(s.bet().side, BetSide::Banker);
}

//
// TEST 7 — повтор ставки
//
#[test]
fn repeat_last_bet_flow() {
    let mut s = session_with(BANKER_NATURAL);
    assert_eq!(s.repeat_last_bet(), Err(EngineError::NoLastBet));
    assert_eq!(s.status(), &StatusMessage::NoLastBet);

    s.select_side(BetSide::Banker).unwrap();
    s.place_bet(Chips(500)).unwrap();
    s.deal(&mut DummyRng).unwrap();
    s.next_round().unwrap();
    assert_eq!(s.balance(), Chips(10_500));

    s.repeat_last_bet().unwrap();
    assert_eq!(s.bet(), &Bet::new(BetSide::Banker, Chips(500)));
    assert_eq!(s.balance(), Chips(10_000));
    assert_eq!(
        s.status(),
        &StatusMessage::BetRepeated {
            amount: Chips(500)
        }
    );

    assert_eq!(s.repeat_last_bet(), Err(EngineError::BetAlreadyPlaced));
    assert_eq!(s.balance(), Chips(10_000));
}

#[test]
fn repeat_last_bet_needs_balance() {
    let config = TableConfig {
        initial_balance: Chips(600),
        ..test_config()
    };
    let mut s = GameSession::with_shoe(config, loaded(BANKER_NATURAL, 1)).unwrap();
    s.select_side(BetSide::Player).unwrap();
    s.place_bet(Chips(500)).unwrap();
    s.deal(&mut DummyRng).unwrap();
    s.next_round().unwrap();

    assert_eq!(
        s.repeat_last_bet(),
        Err(EngineError::InsufficientBalance {
            needed: Chips(500),
            available: Chips(100)
        })
    );
    assert_eq!(s.bet().amount, Chips::ZERO);
}

//
// TEST 8 — замена шуза по cut-card
//
#[test]
fn shoe_is_rebuilt_below_cut_card() {
    // 7 карт: после первого раунда (4 карты) остаётся 3 < 6
    let shoe = loaded("3h 7d 4c 2s Ks Ks Ks", 5);
    let mut s = GameSession::with_shoe(test_config(), shoe).unwrap();
    s.select_side(BetSide::Player).unwrap();

    let first = s.deal(&mut DummyRng).unwrap();
    assert!(!first
        .events
        .iter()
        .any(|e| matches!(e, RoundEventKind::ShoeReplaced { .. })));
    assert_eq!(s.shoe().remaining(), 3);

    s.next_round().unwrap();
    let second = s.deal(&mut DummyRng).unwrap();

    assert!(matches!(
        second.events.iter().next(),
        Some(RoundEventKind::ShoeReplaced {
            serial: 6,
            cards: 416
        })
    ));
    assert_eq!(s.shoe().serial(), 6);
    // неперемешанный шуз: K♠ J♠ / Q♠ 10♠, игрок берёт 9♠, банкир 8♠
    assert_eq!(second.outcome.winner, Winner::Player);
    assert_eq!(s.shoe().remaining(), 416 - 6);
    assert!(second
        .outcome
        .player_cards
        .iter()
        .all(|c| c.id.shoe_serial() == 6));
}

#[test]
fn long_session_always_has_cards() {
    let mut rng = DeterministicRng::from_seed(99);
    let mut s = GameSession::new(TableConfig::default(), &mut rng).unwrap();
    s.select_side(BetSide::Banker).unwrap();

    let mut rebuilds = 0;
    for _ in 0..300 {
        let before = s.shoe().remaining();
        let report = s.deal(&mut rng).unwrap();
        let replaced = report
            .events
            .iter()
            .any(|e| matches!(e, RoundEventKind::ShoeReplaced { .. }));
        assert_eq!(replaced, before < 60);
        if replaced {
            rebuilds += 1;
        }
        s.next_round().unwrap();
    }

    assert!(rebuilds >= 3);
    assert_eq!(s.history().len(), 300);
    assert_eq!(s.balance(), Chips(10_000));
}

//
// TEST 9 — прочее
//
#[test]
fn round_ids_increase() {
    let mut s = session_with("3h 7d 4c 2s 4h 5d 4c 3s Ks Ks");
    s.select_side(BetSide::Tie).unwrap();

    s.deal(&mut DummyRng).unwrap();
    s.next_round().unwrap();
    s.deal(&mut DummyRng).unwrap();

    let ids: Vec<_> = s.history().newest_first().map(|o| o.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(s.history().latest().map(|o| o.winner), Some(Winner::Tie));
}

#[test]
fn invalid_config_is_rejected() {
    let config = TableConfig {
        deck_count: 0,
        ..TableConfig::default()
    };
    assert!(matches!(
        GameSession::new(config, &mut DummyRng),
        Err(ConfigError::InvalidDeckCount(0))
    ));
}

#[test]
fn replace_shoe_only_between_rounds() {
    let mut s = session_with(BANKER_NATURAL);
    s.replace_shoe(loaded(NATURAL_TIE, 2)).unwrap();
    s.select_side(BetSide::Tie).unwrap();

    let report = s.deal(&mut DummyRng).unwrap();
    assert_eq!(report.outcome.winner, Winner::Tie);
    assert!(s.replace_shoe(loaded(NATURAL_TIE, 3)).is_err());
}
