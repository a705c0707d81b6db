//! AUTO planner tests
//!
//! Проверяем:
//! - пример 8 игроков / 2 корта: M=14, 7 игр, 7 раундов
//! - арифметику плана для n = 4..=32 (с rematch и без)
//! - AUTO-раунды MEXICANO и TEAM
//! - ручное число раундов и TIMER

use padel_scheduler::domain::{PlayMode, ScoringMode, TournamentConfig, Variant};
use padel_scheduler::engine::planner::americano_partner_plan;
use padel_scheduler::engine::{auto_round_count, auto_target_games_americano, max_matches_per_round, planned_rounds};

fn config(variant: Variant, mode: ScoringMode, courts: u8, rematch: bool) -> TournamentConfig {
    TournamentConfig {
        variant,
        scoring_mode: mode,
        courts,
        auto_rematch: rematch,
        ..TournamentConfig::default()
    }
}

//
// TEST 1 — 8 players, 2 courts, Americano
//
#[test]
fn eight_players_two_courts() {
    let plan = americano_partner_plan(8, false);
    assert_eq!(plan.matches, 14);
    assert_eq!(plan.games_per_player, 7);
    assert_eq!(auto_target_games_americano(8, false), 7);

    let cfg = config(Variant::Americano, ScoringMode::Individual, 2, false);
    assert_eq!(auto_round_count(&cfg, 8, 0), 7);
}

//
// TEST 2 — rematch doubles the plan
//
#[test]
fn eight_players_rematch() {
    let plan = americano_partner_plan(8, true);
    assert_eq!(plan.matches, 28);
    assert_eq!(plan.games_per_player, 14);
}

//
// TEST 3 — odd roster: 5 players, one court
//
#[test]
fn five_players_one_court() {
    let plan = americano_partner_plan(5, false);
    assert_eq!(plan.matches, 5);
    assert_eq!(plan.games_per_player, 4);

    let cfg = config(Variant::Americano, ScoringMode::Individual, 2, false);
    // min(2 корта, 5/4) = 1 матч за раунд
    assert_eq!(max_matches_per_round(5, 2), 1);
    assert_eq!(auto_round_count(&cfg, 5, 0), 5);
}

//
// TEST 4 — plan arithmetic over the whole roster range
//
#[test]
fn plan_covers_every_pair_and_is_fair() {
    for rematch in [false, true] {
        let factor = if rematch { 2 } else { 1 };

        for n in 4u32..=32 {
            let plan = americano_partner_plan(n, rematch);
            let pairs = n * (n - 1) / 2 * factor;

            assert!(plan.matches * 2 >= pairs, "n={n}: {} matches cannot cover {pairs} partnerships", plan.matches);
            assert_eq!((4 * plan.matches) % n, 0, "n={n}: games per player must be integral");
            assert_eq!(plan.games_per_player, 4 * plan.matches / n);

            // минимальность: на шаг меньше уже не хватает
            let step = n / gcd(n, 4);
            if plan.matches >= step {
                assert!((plan.matches - step) * 2 < pairs, "n={n}: plan is not minimal");
            }
        }
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

//
// TEST 5 — tiny rosters have no plan
//
#[test]
fn fewer_than_four_players_plan_nothing() {
    let cfg = config(Variant::Americano, ScoringMode::Individual, 2, false);
    for n in 0..4 {
        assert_eq!(auto_round_count(&cfg, n, 0), 0);
        assert_eq!(auto_target_games_americano(n as u32, false), 0);
    }
}

//
// TEST 6 — Mexicano auto rounds
//
#[test]
fn mexicano_auto_rounds() {
    let cfg = config(Variant::Mexicano, ScoringMode::Individual, 2, false);
    // весь ростер влезает в раунд и n чётное -> n-1
    assert_eq!(auto_round_count(&cfg, 8, 0), 7);
    // не влезает -> n
    assert_eq!(auto_round_count(&cfg, 10, 0), 10);
    assert_eq!(auto_round_count(&cfg, 9, 0), 9);

    let cfg = config(Variant::Mexicano, ScoringMode::Individual, 2, true);
    assert_eq!(auto_round_count(&cfg, 8, 0), 14);
}

//
// TEST 7 — Team auto rounds
//
#[test]
fn team_auto_rounds() {
    let cfg = config(Variant::Americano, ScoringMode::Team, 1, false);
    assert_eq!(auto_round_count(&cfg, 8, 4), 3);
    assert_eq!(auto_round_count(&cfg, 2, 1), 0);

    let cfg = config(Variant::Mexicano, ScoringMode::Team, 1, true);
    assert_eq!(auto_round_count(&cfg, 8, 4), 6);
}

//
// TEST 8 — planned rounds: manual, auto, timer
//
#[test]
fn planned_rounds_by_play_mode() {
    let mut cfg = config(Variant::Americano, ScoringMode::Individual, 2, false);
    assert_eq!(planned_rounds(&cfg, 8, 0), 7);

    cfg.rounds_planned = 4;
    assert_eq!(planned_rounds(&cfg, 8, 0), 4);

    cfg.play_mode = PlayMode::Timer;
    assert_eq!(planned_rounds(&cfg, 8, 0), 0);
}
