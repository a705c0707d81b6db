//! Round builder tests
//!
//! Проверяем:
//! - ёмкость раунда: матчей не больше кортов и не больше floor(n/4)
//! - никто не играет дважды в одном раунде, корты 1..=courts
//! - AMERICANO: честное распределение игр (5 игроков, 1 корт)
//! - MEXICANO: посев по таблице с третьего раунда
//! - TEAM: круговая система без повторов соперников
//! - пустой раунд и ошибка конфига

use std::collections::HashSet;

use padel_scheduler::domain::{
    Match, MatchId, MatchScore, ParticipantId, Player, Points, Round, ScoringMode, Team, TournamentConfig,
    TournamentError, Variant,
};
use padel_scheduler::engine::{build_round, HistoryStats, RoundBuilder};
use padel_scheduler::infra::DeterministicRng;

fn players(n: u64) -> Vec<Player> {
    (1..=n).map(|id| Player::new(id, format!("P{id}"))).collect()
}

fn teams(n: u64) -> Vec<Team> {
    (1..=n)
        .map(|id| Team::new(id, format!("Team {id}"), [id * 2 - 1, id * 2]))
        .collect()
}

fn config(variant: Variant, mode: ScoringMode, courts: u8) -> TournamentConfig {
    TournamentConfig {
        variant,
        scoring_mode: mode,
        courts,
        ..TournamentConfig::default()
    }
}

fn assert_round_well_formed(round: &Round, courts: u8, pool: usize) {
    assert!(round.match_count() <= courts as usize);

    let mut seen = HashSet::new();
    for m in &round.matches {
        assert!((1..=courts).contains(&m.court), "court {} out of range", m.court);
        for id in m.lineup.participants() {
            assert!(seen.insert(id), "participant {id} plays twice in round {}", round.index);
        }
    }
    assert!(seen.len() <= pool);
}

//
// TEST 1 — capacity invariant over many seeds and shapes
//
#[test]
fn capacity_invariant_holds() {
    for variant in [Variant::Americano, Variant::Mexicano] {
        for n in 4u64..=13 {
            for courts in 1u8..=3 {
                for seed in 0..5 {
                    let cfg = config(variant, ScoringMode::Individual, courts);
                    let roster = players(n);
                    let mut rng = DeterministicRng::from_seed(seed);
                    let mut rounds: Vec<Round> = Vec::new();

                    for r in 0..4 {
                        let round = build_round(&cfg, r, &roster, &[], &rounds, &mut rng).expect("valid config");

                        assert!(round.match_count() <= (n as usize) / 4);
                        assert_round_well_formed(&round, courts, n as usize);
                        assert_eq!(round.index, r);
                        rounds.push(round);
                    }
                }
            }
        }
    }
}

//
// TEST 2 — full seating: 8 players, 2 courts, everybody plays every round
//
#[test]
fn eight_players_everybody_plays() {
    let cfg = config(Variant::Americano, ScoringMode::Individual, 2);
    let roster = players(8);
    let ids: Vec<ParticipantId> = roster.iter().map(|p| p.id).collect();
    let mut rng = DeterministicRng::from_seed(42);
    let mut rounds: Vec<Round> = Vec::new();

    for r in 0..7 {
        let round = build_round(&cfg, r, &roster, &[], &rounds, &mut rng).expect("round");
        assert_eq!(round.match_count(), 2);
        assert!(round.sitting_out(&ids).is_empty());
        rounds.push(round);
    }

    let stats = HistoryStats::compute(&rounds, &ids);
    for id in ids {
        assert_eq!(stats.games(id), 7);
    }
}

//
// TEST 3 — odd roster: byes rotate and everyone reaches the target
//
#[test]
fn five_players_reach_target_games() {
    let cfg = config(Variant::Americano, ScoringMode::Individual, 1);
    let roster = players(5);
    let ids: Vec<ParticipantId> = roster.iter().map(|p| p.id).collect();
    let mut rng = DeterministicRng::from_seed(3);
    let mut rounds: Vec<Round> = Vec::new();

    // AUTO: 5 раундов, по 4 игры каждому
    for r in 0..5 {
        let round = build_round(&cfg, r, &roster, &[], &rounds, &mut rng).expect("round");
        assert_eq!(round.match_count(), 1);
        rounds.push(round);
    }

    let stats = HistoryStats::compute(&rounds, &ids);
    for id in ids {
        assert_eq!(stats.games(id), 4, "player {id}");
        assert_eq!(stats.byes(id), 1, "player {id}");
    }
}

//
// TEST 4 — Mexicano seeds by standings from round 2
//
#[test]
fn mexicano_blocks_follow_standings() {
    let cfg = config(Variant::Mexicano, ScoringMode::Individual, 2);
    let roster = players(8);

    let mut r0a = Match::doubles(MatchId::new(0, 0), 1, [1, 2], [3, 4]);
    r0a.score = Some(MatchScore::new(Points(21), Points(0)));
    let mut r0b = Match::doubles(MatchId::new(0, 1), 2, [5, 6], [7, 8]);
    r0b.score = Some(MatchScore::new(Points(20), Points(1)));

    // Второй раунд без счёта: на таблицу не влияет.
    let r1a = Match::doubles(MatchId::new(1, 0), 1, [1, 5], [2, 6]);
    let r1b = Match::doubles(MatchId::new(1, 1), 2, [3, 7], [4, 8]);

    let rounds = vec![Round::new(0, vec![r0a, r0b]), Round::new(1, vec![r1a, r1b])];

    let round = build_round(&cfg, 2, &roster, &[], &rounds, &mut DeterministicRng::from_seed(1)).expect("round");
    assert_eq!(round.match_count(), 2);

    let top: HashSet<ParticipantId> = round.matches[0].lineup.participants().collect();
    let bottom: HashSet<ParticipantId> = round.matches[1].lineup.participants().collect();

    assert_eq!(top, HashSet::from([1, 2, 5, 6]));
    assert_eq!(bottom, HashSet::from([3, 4, 7, 8]));
}

//
// TEST 5 — Team Americano, 4 teams, 1 court: three different pairings
//
#[test]
fn team_americano_one_court_no_repeat() {
    let cfg = config(Variant::Americano, ScoringMode::Team, 1);
    let roster = players(8);
    let squad = teams(4);
    let mut rng = DeterministicRng::from_seed(11);
    let mut rounds: Vec<Round> = Vec::new();
    let mut met: HashSet<(ParticipantId, ParticipantId)> = HashSet::new();

    for r in 0..3 {
        let round = build_round(&cfg, r, &roster, &squad, &rounds, &mut rng).expect("round");
        assert_eq!(round.match_count(), 1);

        for m in &round.matches {
            let (a, b) = (m.side_a()[0], m.side_b()[0]);
            assert!(met.insert((a.min(b), a.max(b))), "teams {a} and {b} met twice");
        }
        rounds.push(round);
    }
}

//
// TEST 6 — Team Americano with enough courts: full round robin
//
#[test]
fn team_americano_full_round_robin() {
    let cfg = config(Variant::Americano, ScoringMode::Team, 2);
    let roster = players(8);
    let squad = teams(4);
    let mut rng = DeterministicRng::from_seed(5);
    let mut rounds: Vec<Round> = Vec::new();
    let mut met: HashSet<(ParticipantId, ParticipantId)> = HashSet::new();

    for r in 0..3 {
        let round = build_round(&cfg, r, &roster, &squad, &rounds, &mut rng).expect("round");
        assert_eq!(round.match_count(), 2);
        assert_round_well_formed(&round, 2, 4);

        for m in &round.matches {
            let (a, b) = (m.side_a()[0], m.side_b()[0]);
            assert!(met.insert((a.min(b), a.max(b))));
        }
        rounds.push(round);
    }

    assert_eq!(met.len(), 6);
}

//
// TEST 7 — Team Mexicano pairs neighbours
//
#[test]
fn team_mexicano_pairs_consecutive_teams() {
    let cfg = config(Variant::Mexicano, ScoringMode::Team, 1);
    let roster = players(6);
    let squad = teams(3);

    let round = build_round(&cfg, 0, &roster, &squad, &[], &mut DeterministicRng::from_seed(9)).expect("round");
    assert_eq!(round.match_count(), 1);
    assert_round_well_formed(&round, 1, 3);
}

//
// TEST 8 — too few participants give an empty round, not an error
//
#[test]
fn too_few_participants_give_empty_round() {
    let cfg = config(Variant::Americano, ScoringMode::Individual, 2);
    let round = build_round(&cfg, 0, &players(3), &[], &[], &mut DeterministicRng::from_seed(0)).expect("round");
    assert!(round.is_empty());

    let cfg = config(Variant::Americano, ScoringMode::Team, 2);
    let round = build_round(&cfg, 0, &players(2), &teams(1), &[], &mut DeterministicRng::from_seed(0)).expect("round");
    assert!(round.is_empty());
}

//
// TEST 9 — invalid config fails fast
//
#[test]
fn invalid_config_is_rejected() {
    let mut cfg = config(Variant::Americano, ScoringMode::Individual, 2);
    cfg.courts = 0;

    let res = build_round(&cfg, 0, &players(8), &[], &[], &mut DeterministicRng::from_seed(0));
    assert!(matches!(res, Err(TournamentError::InvalidConfig(_))));
}

//
// TEST 10 — same seed, same round
//
#[test]
fn builder_is_deterministic_for_a_seed() {
    let cfg = config(Variant::Americano, ScoringMode::Individual, 3);
    let roster = players(12);
    let builder = RoundBuilder::with_attempts(50);

    let a = builder
        .build(&cfg, 0, &roster, &[], &[], &mut DeterministicRng::from_seed(77))
        .expect("round");
    let b = builder
        .build(&cfg, 0, &roster, &[], &[], &mut DeterministicRng::from_seed(77))
        .expect("round");

    assert_eq!(a, b);
    assert_eq!(a.match_count(), 3);
}
