// src/bin/padel_dev_cli.rs

use clap::{Parser, ValueEnum};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use padel_scheduler::api::{
    Command, CommandResponse, MatchDto, Query, QueryResponse, RoundDto, SetScoreCommand, StandingRowDto,
    UpdateConfigCommand,
};
use padel_scheduler::domain::{PlayMode, ScoringMode, TournamentConfig, Variant};
use padel_scheduler::infra::{InMemoryTournamentStorage, RngSeed};
use padel_scheduler::time_ctrl::now_ms;
use padel_scheduler::{ApiError, TournamentService};

/// Сколько "длится" раунд в симуляции TIMER-режима.
const SIMULATED_ROUND_MS: u64 = 15 * 60_000;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Americano,
    Mexicano,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Individual,
    Team,
}

/// Симуляция турнира целиком: ростер, раунды, случайный счёт, таблица.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Число игроков (4–32).
    #[arg(long, default_value_t = 8)]
    players: u32,

    /// Число кортов (1–8).
    #[arg(long, default_value_t = 2)]
    courts: u8,

    #[arg(long, value_enum, default_value_t = VariantArg::Americano)]
    variant: VariantArg,

    #[arg(long, value_enum, default_value_t = ModeArg::Individual)]
    mode: ModeArg,

    /// Очков в матче (нечётное, 11–29).
    #[arg(long, default_value_t = 21)]
    points: u32,

    /// Число раундов, 0 — AUTO.
    #[arg(long, default_value_t = 0)]
    rounds: u32,

    /// AUTO: каждая пара партнёров дважды.
    #[arg(long)]
    rematch: bool,

    /// Играть на время (минуты) вместо числа раундов.
    #[arg(long)]
    timer_minutes: Option<u32>,

    /// Seed турнира. По умолчанию — текущее время.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!("{err}");
        eprintln!("padel_dev_cli: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ApiError> {
    let seed = args.seed.unwrap_or_else(now_ms);
    println!("padel_dev_cli: seed={seed}");

    let config = TournamentConfig {
        variant: match args.variant {
            VariantArg::Americano => Variant::Americano,
            VariantArg::Mexicano => Variant::Mexicano,
        },
        scoring_mode: match args.mode {
            ModeArg::Individual => ScoringMode::Individual,
            ModeArg::Team => ScoringMode::Team,
        },
        courts: args.courts,
        match_points: args.points,
        rounds_planned: args.rounds,
        auto_rematch: args.rematch,
        play_mode: if args.timer_minutes.is_some() {
            PlayMode::Timer
        } else {
            PlayMode::Rounds
        },
        timer_minutes: args.timer_minutes.unwrap_or(60),
    };

    let mut service = TournamentService::new(InMemoryTournamentStorage::new());
    let tid = service.create(TournamentConfig::default())?;
    service.execute(
        tid,
        Command::UpdateConfig(UpdateConfigCommand { config: config.clone() }),
        &mut RngSeed::from_u64(seed).to_rng(),
        0,
    )?;

    for i in 0..args.players {
        service.execute(
            tid,
            Command::AddPlayer {
                name: format!("P{}", i + 1),
            },
            &mut RngSeed::from_u64(seed).to_rng(),
            0,
        )?;
    }

    let base_seed = RngSeed::from_u64(seed);

    if config.scoring_mode == ScoringMode::Team {
        let mut rng = base_seed.derive(tid, u32::MAX).to_rng();
        if let CommandResponse::TeamsGenerated(teams) = service.execute(tid, Command::GenerateTeams, &mut rng, 0)? {
            println!();
            println!("================ TEAMS =================");
            for t in teams {
                println!("  {:<8} {} + {}", t.name, t.player_names[0], t.player_names[1]);
            }
        }
    }

    let mut score_rng = StdRng::seed_from_u64(seed);
    let start = now_ms();
    let mut round_index: u32 = 0;

    loop {
        let now = start + u64::from(round_index) * SIMULATED_ROUND_MS;
        let mut rng = base_seed.derive(tid, round_index).to_rng();

        let round = match service.execute(tid, Command::NextRound, &mut rng, now) {
            Ok(CommandResponse::RoundAdded(round)) => round,
            Ok(_) => break,
            Err(ApiError::Rejected(reason)) => {
                info!("simulation stops: {reason}");
                println!();
                println!("no more rounds: {reason}");
                break;
            }
            Err(err) => return Err(err),
        };

        for m in &round.matches {
            let a = score_rng.gen_range(0..=config.match_points);
            let b = config.match_points - a;
            service.execute(
                tid,
                Command::SetScore(SetScoreCommand {
                    round_index: round.round_index,
                    match_id: m.match_id,
                    score_a: Some(i64::from(a)),
                    score_b: Some(i64::from(b)),
                }),
                &mut rng,
                now,
            )?;
        }

        if let QueryResponse::Round(scored) = service.query(tid, Query::GetRound { round_index }, now)? {
            print_round(&scored);
        }

        round_index += 1;

        // TIMER без ограничения раундов: не крутимся бесконечно, если таймер длинный.
        if config.play_mode == PlayMode::Timer && round_index >= 64 {
            break;
        }
    }

    if let QueryResponse::Standings(rows) = service.query(tid, Query::GetStandings, start)? {
        print_standings("STANDINGS", &rows);
    }
    if config.scoring_mode == ScoringMode::Team {
        if let QueryResponse::Standings(rows) = service.query(tid, Query::GetPlayerStandings, start)? {
            print_standings("PLAYERS", &rows);
        }
    }

    Ok(())
}

fn print_round(round: &RoundDto) {
    println!();
    println!("================ ROUND {} =================", round.round_index + 1);
    for m in &round.matches {
        print_match(m);
    }
    if !round.sitting_out.is_empty() {
        println!("  bye: {}", round.sitting_out.join(", "));
    }
}

fn print_match(m: &MatchDto) {
    let score = match (m.score_a, m.score_b) {
        (Some(a), Some(b)) => format!("{a:>2} : {b:<2}"),
        _ => " -  : - ".to_string(),
    };
    println!(
        "  court {} | {:<16} {} {:>16}",
        m.court,
        m.side_a_names.join(" + "),
        score,
        m.side_b_names.join(" + ")
    );
}

fn print_standings(title: &str, rows: &[StandingRowDto]) {
    println!();
    println!("================ {title} =================");
    println!("  #   name        PF   PA   +/-   G   W");
    for r in rows {
        println!(
            "  {:<3} {:<10} {:>4} {:>4} {:>5} {:>3} {:>3}",
            r.rank, r.name, r.points_for, r.points_against, r.diff, r.games, r.wins
        );
    }
}
