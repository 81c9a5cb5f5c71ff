// src/bin/baccarat_dev_cli.rs

use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use baccarat_engine::api::{answer_query, Query, QueryResponse};
use baccarat_engine::domain::bet::BetSide;
use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::TableConfig;
use baccarat_engine::engine::{
    AutoPlayEvent, GameSession, RandomSource, RoundEventKind, RoundEvents, RoundReport,
};
use baccarat_engine::history::StatsWindow;
use baccarat_engine::infra::{outcome_to_dto, session_to_dto, DeterministicRng, SystemRng};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dev-CLI стола баккара: раздачи и авто-плей в терминале")]
struct Args {
    /// JSON-файл с конфигом стола (недостающие поля — по умолчанию).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для детерминированного шуза.
    #[arg(long)]
    seed: Option<u64>,

    /// Количество колод в шузе.
    #[arg(long)]
    decks: Option<u8>,

    /// Порог cut-card: шуз меняется, когда карт осталось меньше.
    #[arg(long)]
    cut_card: Option<usize>,

    /// Сколько раундов сыграть.
    #[arg(short, long, default_value_t = 5)]
    rounds: u32,

    /// Ставка на раунд (0 — просто смотреть).
    #[arg(short, long, default_value_t = 100)]
    bet: u64,

    /// Сторона ставки: player / banker / tie.
    #[arg(short, long, default_value = "banker")]
    side: BetSide,

    /// Играть одним авто-плеем вместо отдельных раздач.
    #[arg(long)]
    auto: bool,

    /// Пауза между событиями раунда, мс.
    #[arg(long, default_value_t = 0)]
    pause_ms: u64,

    /// Вывести историю и статистику в JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(env_filter)
        .compact()
        .init();

    let config = load_config(&args)?;

    match args.seed {
        Some(seed) => {
            info!(seed, "детерминированный шуз");
            run(&args, config, &mut DeterministicRng::from_seed(seed))
        }
        None => run(&args, config, &mut SystemRng),
    }
}

fn load_config(args: &Args) -> Result<TableConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => TableConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => TableConfig::default(),
    };
    if let Some(decks) = args.decks {
        config.deck_count = decks;
    }
    if let Some(threshold) = args.cut_card {
        config.cut_card_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn run<R: RandomSource>(
    args: &Args,
    config: TableConfig,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    let mut session = GameSession::new(config, rng)?;
    let pause = Duration::from_millis(args.pause_ms);

    println!("baccarat_dev_cli: баланс {}", session.balance());

    session.select_side(args.side)?;
    if args.bet > 0 {
        session.place_bet(Chips(args.bet))?;
    }

    if args.auto {
        play_auto(&mut session, args.rounds, rng, pause)?;
    } else {
        play_manual(&mut session, args.rounds, rng, pause)?;
    }

    print_summary(&session, args.json)?;
    Ok(())
}

/// Отдельные раздачи: после каждой — next_round и повтор ставки.
fn play_manual<R: RandomSource>(
    session: &mut GameSession,
    rounds: u32,
    rng: &mut R,
    pause: Duration,
) -> Result<(), Box<dyn Error>> {
    for n in 1..=rounds {
        if n > 1 {
            session.next_round()?;
            if session.last_bet().is_some() && session.repeat_last_bet().is_err() {
                warn!(balance = session.balance().0, "не хватает на ставку, стоп");
                break;
            }
        }

        println!();
        println!("================ РАУНД {n} ================");
        let report = session.deal(rng)?;
        print_round(&report, pause);
    }
    Ok(())
}

fn play_auto<R: RandomSource>(
    session: &mut GameSession,
    rounds: u32,
    rng: &mut R,
    pause: Duration,
) -> Result<(), Box<dyn Error>> {
    session.start_auto_play(rounds)?;

    while let Some(event) = session.auto_play_step(rng) {
        match event {
            AutoPlayEvent::RoundFinished { round, events, .. } => {
                println!();
                println!("================ AUTO {round}/{rounds} ================");
                print_events(&events, pause);
            }
            AutoPlayEvent::Halted {
                after_rounds,
                reason,
            } => {
                println!("Авто-плей остановлен после {after_rounds} раундов: {reason:?}");
            }
            AutoPlayEvent::Finished { summary } => {
                println!();
                println!(
                    "Авто-плей: {}/{} раундов, профит {}, баланс {}",
                    summary.completed, summary.requested, summary.net_profit, summary.balance
                );
                break;
            }
        }
    }
    Ok(())
}

fn print_round(report: &RoundReport, pause: Duration) {
    print_events(&report.events, pause);
    println!("Статус: выплата {}, баланс {}", report.outcome.payout, report.balance);
}

/// Пошаговый показ раунда; темп задаёт `pause`.
fn print_events(events: &RoundEvents, pause: Duration) {
    for kind in events.iter() {
        match kind {
            RoundEventKind::ShoeReplaced { serial, cards } => {
                println!("  новый шуз #{serial}: {cards} карт");
            }
            RoundEventKind::CardDealt { side, card } => {
                println!("  {side}: {card}");
            }
            RoundEventKind::CardRevealed { side, card } => {
                println!("  {side} открывает {card}");
            }
            RoundEventKind::NaturalDeclared {
                player_total,
                banker_total,
            } => {
                println!("  натуральная! {player_total} : {banker_total}");
            }
            RoundEventKind::ThirdCardDrawn { side, card, total } => {
                println!("  {side} берёт {card} -> {total}");
            }
            RoundEventKind::SideStands { side, total } => {
                println!("  {side} стоит на {total}");
            }
            RoundEventKind::RoundDecided {
                winner,
                player_total,
                banker_total,
            } => {
                println!("  ИТОГ: {winner} ({player_total} : {banker_total})");
            }
            RoundEventKind::RoundFinished { outcome, balance } => {
                println!("  профит {}, баланс {balance}", outcome.profit());
            }
        }
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}

fn print_summary(session: &GameSession, json: bool) -> Result<(), Box<dyn Error>> {
    let stats = answer_query(
        session,
        Query::GetStats {
            window: StatsWindow::All,
        },
    );
    let streaks = answer_query(
        session,
        Query::GetStreakColumns {
            page_size: None,
            page: None,
        },
    );

    if json {
        let history: Vec<_> = session.history().newest_first().map(outcome_to_dto).collect();
        println!("{}", serde_json::to_string_pretty(&session_to_dto(session))?);
        println!("{}", serde_json::to_string_pretty(&history)?);
        println!("{}", serde_json::to_string_pretty(&stats)?);
        println!("{}", serde_json::to_string_pretty(&streaks)?);
        return Ok(());
    }

    println!();
    println!("================ СТАТИСТИКА ================");
    if let QueryResponse::Stats(stats) = stats {
        let w = stats.window;
        println!(
            "Раундов: {}  P {}% / B {}% / T {}%",
            w.total, w.player_rate, w.banker_rate, w.tie_rate
        );
        println!(
            "Поставлено {}, возвращено {}, итог {}",
            stats.session.total_wagered, stats.session.total_returned, stats.net_result
        );
    }
    if let QueryResponse::StreakPage(page) = streaks {
        println!("Табло (стр. {}/{}):", page.page + 1, page.total_pages);
        for column in &page.columns {
            println!("  {}", column.labels());
        }
    }
    println!("Баланс: {}", session.balance());
    Ok(())
}
