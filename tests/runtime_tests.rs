// tests/runtime_tests.rs
//
// Проверяем рантайм турнира поверх снапшота:
//
// 1) start_or_next_round:
//    - мало игроков -> отказ, снапшот не меняется;
//    - первый раунд фиксирует started_at;
//    - лимит раундов, истёкший таймер;
//    - TEAM: нечётный ростер, нет команд.
//
// 2) set_score: зажим + пересчёт таблицы.
//
// 3) generate_teams_random: имена, уникальность, заморозка после старта.
//
// 4) AMERICANO до конца плана:
//    - ручной план больше AUTO: после цели по играм — TargetReached, а не зависание;
//    - AUTO-план: каждая пара побывала партнёрами (на ростерах 4, 6, 8).

use std::collections::HashSet;

use padel_scheduler::domain::{
    MatchId, PlayMode, PlayerId, Points, ScoringMode, TournamentConfig, TournamentError, TournamentState, Variant,
};
use padel_scheduler::engine::HistoryStats;
use padel_scheduler::infra::DeterministicRng;
use padel_scheduler::tournament::TournamentRuntime;

fn state_with(config: TournamentConfig, n: usize) -> TournamentState {
    let mut state = TournamentState::new(config).expect("valid config");
    for i in 0..n {
        state.add_player(&format!("P{}", i + 1)).expect("room for player");
    }
    state
}

fn individual(variant: Variant) -> TournamentConfig {
    TournamentConfig {
        variant,
        ..TournamentConfig::default()
    }
}

fn team(variant: Variant) -> TournamentConfig {
    TournamentConfig {
        variant,
        scoring_mode: ScoringMode::Team,
        ..TournamentConfig::default()
    }
}

//
// TEST 1 — not enough players
//
#[test]
fn next_round_needs_four_players() {
    let rt = TournamentRuntime::new();
    let state = state_with(individual(Variant::Americano), 3);

    let err = rt
        .start_or_next_round(&state, &mut DeterministicRng::from_seed(1), 1_000)
        .unwrap_err();

    assert_eq!(err, TournamentError::NotEnoughParticipants);
    assert!(state.rounds.is_empty());
    assert!(!state.is_started());
}

//
// TEST 2 — first round starts the tournament
//
#[test]
fn first_round_records_start_time() {
    let rt = TournamentRuntime::new();
    let state = state_with(individual(Variant::Americano), 8);

    let next = rt
        .start_or_next_round(&state, &mut DeterministicRng::from_seed(1), 5_000)
        .expect("round");

    assert_eq!(next.rounds.len(), 1);
    assert_eq!(next.started_at, Some(5_000));
    assert!(next.is_started());

    let later = rt
        .start_or_next_round(&next, &mut DeterministicRng::from_seed(2), 9_000)
        .expect("round");
    assert_eq!(later.started_at, Some(5_000), "start time is set once");
    assert_eq!(later.rounds[1].index, 1);
}

//
// TEST 3 — planned round limit
//
#[test]
fn planned_rounds_limit() {
    let rt = TournamentRuntime::new();
    let mut config = individual(Variant::Mexicano);
    config.rounds_planned = 2;
    let mut state = state_with(config, 8);
    let mut rng = DeterministicRng::from_seed(3);

    for _ in 0..2 {
        assert!(TournamentRuntime::can_add_next_round(&state, 0));
        state = rt.start_or_next_round(&state, &mut rng, 0).expect("round");
    }

    assert!(!TournamentRuntime::can_add_next_round(&state, 0));
    let err = rt.start_or_next_round(&state, &mut rng, 0).unwrap_err();
    assert_eq!(err, TournamentError::PlannedRoundsReached { planned: 2 });
}

//
// TEST 4 — auto plan limit (8 players, 2 courts -> 7 rounds)
//
#[test]
fn auto_plan_limit() {
    let rt = TournamentRuntime::new();
    let mut state = state_with(individual(Variant::Americano), 8);
    let mut rng = DeterministicRng::from_seed(4);

    assert_eq!(TournamentRuntime::planned_rounds(&state), 7);
    while TournamentRuntime::can_add_next_round(&state, 0) {
        state = rt.start_or_next_round(&state, &mut rng, 0).expect("round");
    }
    assert_eq!(state.rounds.len(), 7);
}

//
// TEST 5 — expired timer
//
#[test]
fn timer_expiry_blocks_new_rounds() {
    let rt = TournamentRuntime::new();
    let config = TournamentConfig {
        play_mode: PlayMode::Timer,
        timer_minutes: 1,
        ..TournamentConfig::default()
    };
    let state = state_with(config, 4);
    let mut rng = DeterministicRng::from_seed(5);

    let state = rt.start_or_next_round(&state, &mut rng, 1_000).expect("round");
    assert_eq!(TournamentRuntime::planned_rounds(&state), 0);
    assert_eq!(TournamentRuntime::timer_remaining_ms(&state, 31_000), Some(30_000));

    let state = rt.start_or_next_round(&state, &mut rng, 30_000).expect("round");
    assert_eq!(state.rounds.len(), 2);

    assert!(!TournamentRuntime::can_add_next_round(&state, 61_000));
    let err = rt.start_or_next_round(&state, &mut rng, 61_000).unwrap_err();
    assert_eq!(err, TournamentError::TimerExpired);
}

//
// TEST 6 — team mode roster checks
//
#[test]
fn team_mode_roster_checks() {
    let rt = TournamentRuntime::new();
    let mut rng = DeterministicRng::from_seed(6);

    let odd = state_with(team(Variant::Americano), 5);
    assert_eq!(
        rt.start_or_next_round(&odd, &mut rng, 0).unwrap_err(),
        TournamentError::InvalidTeamPlayerCount(5)
    );

    let no_teams = state_with(team(Variant::Americano), 4);
    assert_eq!(
        rt.start_or_next_round(&no_teams, &mut rng, 0).unwrap_err(),
        TournamentError::NotEnoughParticipants
    );

    let with_teams = TournamentRuntime::generate_teams_random(&no_teams, &mut rng).expect("teams");
    let started = rt.start_or_next_round(&with_teams, &mut rng, 0).expect("round");
    assert_eq!(started.rounds[0].match_count(), 1);
}

//
// TEST 7 — set score: clamp and recompute
//
#[test]
fn set_score_recomputes_standings() {
    let rt = TournamentRuntime::new();
    let state = state_with(individual(Variant::Americano), 4);
    let state = rt
        .start_or_next_round(&state, &mut DeterministicRng::from_seed(7), 0)
        .expect("round");

    let m = state.rounds[0].matches[0].clone();
    let next = TournamentRuntime::set_score(&state, 0, m.id, Some(25), Some(-3)).expect("score");

    let scored = &next.rounds[0].matches[0];
    assert_eq!(scored.score.map(|s| (s.a, s.b)), Some((Points(21), Points(0))));

    for &pid in m.side_a() {
        let p = next.player(pid).expect("player");
        assert_eq!(p.standing.points_for, Points(21));
        assert_eq!(p.standing.wins, 1);
    }
    for &pid in m.side_b() {
        let p = next.player(pid).expect("player");
        assert_eq!(p.standing.points_against, Points(21));
    }

    // исходный снапшот не тронут
    assert!(state.rounds[0].matches[0].score.is_none());

    // стираем счёт -> таблица пустеет
    let cleared = TournamentRuntime::set_score(&next, 0, m.id, None, Some(3)).expect("score");
    assert!(cleared.players.iter().all(|p| p.standing.games == 0));
}

//
// TEST 8 — set score on unknown round / match
//
#[test]
fn set_score_unknown_targets() {
    let state = state_with(individual(Variant::Americano), 4);

    let err = TournamentRuntime::set_score(&state, 3, MatchId::new(3, 0), Some(1), Some(1)).unwrap_err();
    assert_eq!(err, TournamentError::RoundNotFound(3));
}

//
// TEST 9 — random teams
//
#[test]
fn random_teams_cover_every_player_once() {
    let state = state_with(team(Variant::Mexicano), 6);
    let next = TournamentRuntime::generate_teams_random(&state, &mut DeterministicRng::from_seed(9)).expect("teams");

    assert_eq!(next.teams.len(), 3);
    let names: Vec<&str> = next.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Team 1", "Team 2", "Team 3"]);

    let mut seen: HashSet<PlayerId> = HashSet::new();
    for t in &next.teams {
        for pid in t.roster {
            assert!(seen.insert(pid));
        }
    }
    assert_eq!(seen.len(), 6);

    let odd = state_with(team(Variant::Mexicano), 5);
    assert_eq!(
        TournamentRuntime::generate_teams_random(&odd, &mut DeterministicRng::from_seed(9)).unwrap_err(),
        TournamentError::InvalidTeamPlayerCount(5)
    );
}

//
// TEST 10 — roster is frozen after start
//
#[test]
fn roster_frozen_after_start() {
    let rt = TournamentRuntime::new();
    let state = state_with(team(Variant::Americano), 4);
    let mut rng = DeterministicRng::from_seed(10);
    let state = TournamentRuntime::generate_teams_random(&state, &mut rng).expect("teams");
    let state = rt.start_or_next_round(&state, &mut rng, 0).expect("round");

    assert_eq!(
        TournamentRuntime::generate_teams_random(&state, &mut rng).unwrap_err(),
        TournamentError::RosterFrozen
    );

    let mut copy = state.clone();
    assert_eq!(copy.remove_player(1), Err(TournamentError::RosterFrozen));
    assert_eq!(copy, state);
}

//
// TEST 11 — team tournament plays through the auto plan
//
#[test]
fn team_tournament_runs_to_completion() {
    let rt = TournamentRuntime::new();
    let mut config = team(Variant::Americano);
    config.courts = 1;
    let mut rng = DeterministicRng::from_seed(11);
    let state = state_with(config, 8);
    let mut state = TournamentRuntime::generate_teams_random(&state, &mut rng).expect("teams");

    assert_eq!(TournamentRuntime::planned_rounds(&state), 3);
    while TournamentRuntime::can_add_next_round(&state, 0) {
        state = rt.start_or_next_round(&state, &mut rng, 0).expect("round");
        let last = state.rounds.last().expect("round").clone();
        for m in &last.matches {
            state = TournamentRuntime::set_score(&state, last.index, m.id, Some(11), Some(10)).expect("score");
        }
    }

    assert_eq!(state.rounds.len(), 3);
    let games: u32 = state.teams.iter().map(|t| t.standing.games).sum();
    assert_eq!(games, 6, "3 matches, 2 teams each");
}

//
// TEST 12 — manual plan above the Americano target stops at the target
//
#[test]
fn manual_plan_above_target_reports_target_reached() {
    let rt = TournamentRuntime::new();
    let mut config = individual(Variant::Americano);
    config.courts = 2;
    config.rounds_planned = 10;
    let mut state = state_with(config, 8);
    let mut rng = DeterministicRng::from_seed(12);

    assert_eq!(TournamentRuntime::americano_target_games(&state), Some(7));

    while TournamentRuntime::can_add_next_round(&state, 0) {
        state = rt.start_or_next_round(&state, &mut rng, 0).expect("round");
    }

    // 8 игроков на 2 кортах: все играют каждый раунд, 7 игр — это 7 раундов
    assert_eq!(state.rounds.len(), 7);

    let ids = state.player_ids();
    let stats = HistoryStats::compute(&state.rounds, &ids);
    for &id in &ids {
        assert_eq!(stats.games(id), 7, "player {id}");
    }

    let err = rt.start_or_next_round(&state, &mut rng, 0).unwrap_err();
    assert_eq!(err, TournamentError::TargetReached { games: 7 });
    assert_eq!(state.rounds.len(), 7);
}

//
// TEST 13 — no target in timer mode, so the limit does not apply
//
#[test]
fn timer_mode_has_no_americano_target() {
    let mut config = individual(Variant::Americano);
    config.play_mode = PlayMode::Timer;
    let state = state_with(config, 8);

    assert_eq!(TournamentRuntime::americano_target_games(&state), None);
    assert!(TournamentRuntime::can_add_next_round(&state, 0));
}

//
// TEST 14 — Americano auto plan: every pair partners at least once (twice with rematch)
//
// Поиск best-effort: на 4, 6 и 8 игроках покрытие держится на любом сиде,
// на других размерах ростера одна-две пары могут остаться без встречи.
//
#[test]
fn americano_auto_plan_covers_every_partnership() {
    let rt = TournamentRuntime::new();

    for rematch in [false, true] {
        let need = if rematch { 2 } else { 1 };

        for n in [4usize, 6, 8] {
            for seed in [7u64, 21, 99] {
                let mut config = individual(Variant::Americano);
                config.courts = 8;
                config.auto_rematch = rematch;
                let mut state = state_with(config, n);
                let mut rng = DeterministicRng::from_seed(seed);

                let planned = TournamentRuntime::planned_rounds(&state);
                while TournamentRuntime::can_add_next_round(&state, 0) {
                    state = rt.start_or_next_round(&state, &mut rng, 0).expect("round");
                }
                assert_eq!(state.rounds.len() as u32, planned, "n={n} rematch={rematch} seed={seed}");

                let ids = state.player_ids();
                let stats = HistoryStats::compute(&state.rounds, &ids);

                let mut missing = Vec::new();
                for (i, &a) in ids.iter().enumerate() {
                    for &b in &ids[i + 1..] {
                        if stats.partners(a, b) < need {
                            missing.push((a, b));
                        }
                    }
                }

                assert!(
                    missing.is_empty(),
                    "n={n} rematch={rematch} seed={seed}: pairs never partnered {missing:?}"
                );
            }
        }
    }
}
