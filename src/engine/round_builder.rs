// src/engine/round_builder.rs

use log::{debug, info};

use crate::domain::{
    Match, MatchId, ParticipantId, Player, Round, ScoringMode, Team, TeamId, TournamentConfig,
    TournamentError, Variant,
};
use crate::engine::history::HistoryStats;
use crate::engine::pairing::{self, PairingWeights, Split, PAIRING_ATTEMPTS};
use crate::engine::planner::{self, max_matches_per_round};
use crate::engine::round_robin::circle_pairings;
use crate::engine::selection::{self, AmericanoTarget};
use crate::engine::RandomSource;

/// Сборщик раунда.
///
/// Настраивается только числом попыток AMERICANO-поиска: для очень больших
/// ростеров (сотни) стоимость O(attempts × n²), и его имеет смысл уменьшить.
#[derive(Clone, Copy, Debug)]
pub struct RoundBuilder {
    attempts: usize,
}

impl Default for RoundBuilder {
    fn default() -> Self {
        Self {
            attempts: PAIRING_ATTEMPTS,
        }
    }
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attempts(attempts: usize) -> Self {
        Self {
            attempts: attempts.max(1),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Собрать раунд `round_index` по истории `rounds_so_far`.
    ///
    /// Ничего не мутирует: прошлые раунды только читаются.
    /// Если участников не хватает даже на один матч — возвращается пустой раунд,
    /// это нормальный исход, а не ошибка. Ошибка — только невалидный конфиг.
    pub fn build<R: RandomSource>(
        &self,
        config: &TournamentConfig,
        round_index: u32,
        players: &[Player],
        teams: &[Team],
        rounds_so_far: &[Round],
        rng: &mut R,
    ) -> Result<Round, TournamentError> {
        config.validate_full()?;

        let round = match config.scoring_mode {
            ScoringMode::Team => build_team_round(config, round_index, players, teams, rounds_so_far, rng),
            ScoringMode::Individual => match config.variant {
                Variant::Mexicano => build_mexicano_round(config, round_index, players, rounds_so_far, rng),
                Variant::Americano => self.build_americano_round(config, round_index, players, teams, rounds_so_far, rng),
            },
        };

        info!(
            "round {} built: mode={:?} variant={:?} matches={}",
            round_index + 1,
            config.scoring_mode,
            config.variant,
            round.match_count()
        );

        Ok(round)
    }

    fn build_americano_round<R: RandomSource>(
        &self,
        config: &TournamentConfig,
        round_index: u32,
        players: &[Player],
        teams: &[Team],
        rounds_so_far: &[Round],
        rng: &mut R,
    ) -> Round {
        let n = players.len();
        let max_matches = max_matches_per_round(n, config.courts);
        if max_matches == 0 {
            return Round::empty(round_index);
        }

        let ids: Vec<ParticipantId> = players.iter().map(|p| p.id).collect();
        let stats = HistoryStats::compute(rounds_so_far, &ids);

        let planned = planner::planned_rounds(config, n, teams.len());
        let target = (planned > 0).then(|| AmericanoTarget {
            target_games: planner::auto_target_games_americano(n as u32, config.auto_rematch),
            planned_rounds: planned,
        });

        let playing = selection::select_americano(&ids, max_matches, &stats, target, round_index);
        if playing.len() < 4 {
            return Round::empty(round_index);
        }

        let weights = PairingWeights::for_variant(Variant::Americano);
        let splits = pairing::search_pairing(&playing, &stats, &weights, self.attempts, rng);

        Round::new(round_index, doubles_matches(round_index, config.courts, &splits))
    }
}

/// Собрать раунд с настройками по умолчанию (200 попыток).
pub fn build_round<R: RandomSource>(
    config: &TournamentConfig,
    round_index: u32,
    players: &[Player],
    teams: &[Team],
    rounds_so_far: &[Round],
    rng: &mut R,
) -> Result<Round, TournamentError> {
    RoundBuilder::default().build(config, round_index, players, teams, rounds_so_far, rng)
}

/// MEXICANO: блоки по таблице, в каждом блоке один проход по трём разбиениям.
fn build_mexicano_round<R: RandomSource>(
    config: &TournamentConfig,
    round_index: u32,
    players: &[Player],
    rounds_so_far: &[Round],
    rng: &mut R,
) -> Round {
    let max_matches = max_matches_per_round(players.len(), config.courts);
    if max_matches == 0 {
        return Round::empty(round_index);
    }

    let playing = selection::select_mexicano(players, rounds_so_far, round_index, max_matches, rng);

    let ids: Vec<ParticipantId> = players.iter().map(|p| p.id).collect();
    let stats = HistoryStats::compute(rounds_so_far, &ids);
    let weights = PairingWeights::for_variant(Variant::Mexicano);

    let (splits, cost) = pairing::pair_in_blocks(&playing, &stats, &weights);
    debug!("mexicano blocks: round={} matches={} cost={}", round_index, splits.len(), cost);

    Round::new(round_index, doubles_matches(round_index, config.courts, &splits))
}

/// TEAM: команда против команды, без эвристики.
///
/// - AMERICANO: круговая система по порядку ростера, пары раунда в случайном порядке
///   (если кортов меньше, чем пар, случай решает, кто играет);
/// - MEXICANO: раунды 0–1 случайно, дальше по таблице, соседи играют друг с другом.
fn build_team_round<R: RandomSource>(
    config: &TournamentConfig,
    round_index: u32,
    players: &[Player],
    teams: &[Team],
    rounds_so_far: &[Round],
    rng: &mut R,
) -> Round {
    let max_matches = usize::from(config.courts).min(teams.len() / 2);
    if max_matches == 0 {
        return Round::empty(round_index);
    }

    let mut pairs: Vec<(TeamId, TeamId)> = match config.variant {
        Variant::Americano => {
            let ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
            let mut pairs = circle_pairings(&ids, round_index);
            rng.shuffle(&mut pairs);
            pairs
        }
        Variant::Mexicano => {
            let ordered = selection::order_teams_mexicano(teams, players, rounds_so_far, round_index, rng);
            ordered.chunks_exact(2).map(|c| (c[0], c[1])).collect()
        }
    };
    pairs.truncate(max_matches);

    let matches = pairs
        .into_iter()
        .enumerate()
        .map(|(slot, (a, b))| Match::teams(MatchId::new(round_index, slot as u32), court_for(slot, config.courts), a, b))
        .collect();

    Round::new(round_index, matches)
}

fn doubles_matches(round_index: u32, courts: u8, splits: &[Split]) -> Vec<Match> {
    splits
        .iter()
        .enumerate()
        .map(|(slot, s)| Match::doubles(MatchId::new(round_index, slot as u32), court_for(slot, courts), s.a, s.b))
        .collect()
}

/// Корты раздаются подряд с 1. Если матчей вдруг больше, чем кортов, — по кругу.
fn court_for(slot: usize, courts: u8) -> u8 {
    let courts = usize::from(courts.max(1));
    (slot % courts + 1) as u8
}
