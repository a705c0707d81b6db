// src/engine/selection.rs
//! Выбор участников раунда: кто играет, кто отдыхает.

use std::collections::HashSet;

use log::debug;

use crate::domain::{ParticipantId, Player, PlayerId, Round, ScoringMode, Team, TeamId};
use crate::engine::history::HistoryStats;
use crate::engine::RandomSource;
use crate::standings;

/// Цель AMERICANO: сколько игр должен набрать каждый и за сколько раундов.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmericanoTarget {
    pub target_games: u32,
    pub planned_rounds: u32,
}

/// Внутренняя строка для ранжирования кандидатов.
struct Candidate {
    id: ParticipantId,
    idx: usize,
    need: u32,
    byes: u32,
    byed_last: bool,
}

/// AMERICANO: выбор игроков раунда.
///
/// С целью (`target`):
///   - need = max(0, target_games - games);
///   - кто должен играть каждый оставшийся раунд (need == remaining) — играет обязательно;
///   - остальные места по: need DESC → сидел в прошлом раунде → меньше пауз → порядок в ростере.
///
/// Без цели (TIMER) — просто первые max_matches*4 по порядку ростера.
///
/// Результат всегда кратен 4 и не больше max_matches*4.
pub fn select_americano(
    ids: &[ParticipantId],
    max_matches: u32,
    stats: &HistoryStats,
    target: Option<AmericanoTarget>,
    round_index: u32,
) -> Vec<ParticipantId> {
    let capacity = max_matches as usize * 4;

    let Some(target) = target else {
        return ids.iter().copied().take(capacity).collect();
    };

    let remaining = i64::from(target.planned_rounds) - i64::from(round_index);

    let rows: Vec<Candidate> = ids
        .iter()
        .enumerate()
        .map(|(idx, &id)| Candidate {
            id,
            idx,
            need: target.target_games.saturating_sub(stats.games(id)),
            byes: stats.byes(id),
            byed_last: stats.byed_last(id),
        })
        .collect();

    let must_play: Vec<ParticipantId> = rows
        .iter()
        .filter(|r| r.need > 0 && i64::from(r.need) == remaining)
        .map(|r| r.id)
        .collect();

    let total_need: u32 = rows.iter().map(|r| r.need).sum();
    let remaining_matches = total_need.div_ceil(4);
    let min_matches_now = (must_play.len() as u32).div_ceil(4);

    let matches_now = max_matches.min(remaining_matches.max(min_matches_now));
    let need_players = matches_now as usize * 4;

    let mut ranked: Vec<&Candidate> = rows.iter().filter(|r| r.need > 0).collect();
    // Не давать две паузы подряд: сидевший в прошлом раунде идёт раньше.
    ranked.sort_by(|a, b| {
        b.need
            .cmp(&a.need)
            .then_with(|| b.byed_last.cmp(&a.byed_last))
            .then_with(|| a.byes.cmp(&b.byes))
            .then_with(|| a.idx.cmp(&b.idx))
    });

    let mut selected: Vec<ParticipantId> = must_play.clone();
    let mut seen: HashSet<ParticipantId> = must_play.iter().copied().collect();

    for r in ranked {
        if selected.len() >= need_players {
            break;
        }
        if seen.insert(r.id) {
            selected.push(r.id);
        }
    }

    let playable = (selected.len() / 4 * 4).min(capacity);
    selected.truncate(playable);

    debug!(
        "americano selection: round={} must_play={} need_total={} matches_now={} selected={}",
        round_index,
        must_play.len(),
        total_need,
        matches_now,
        selected.len()
    );

    selected
}

/// MEXICANO: порядок игроков раунда.
///
/// Раунды 0 и 1 — случайно; дальше — по текущей таблице.
/// Затем режем до max_matches*4: подряд идущие четвёрки — это "блоки" по силе.
pub fn select_mexicano<R: RandomSource>(
    players: &[Player],
    rounds: &[Round],
    round_index: u32,
    max_matches: u32,
    rng: &mut R,
) -> Vec<PlayerId> {
    let mut ordered: Vec<PlayerId> = if round_index < 2 {
        let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        rng.shuffle(&mut ids);
        ids
    } else {
        let (fresh, _) = standings::recompute_standings(players, &[], rounds, ScoringMode::Individual);
        standings::rank_players(&fresh, rounds)
            .into_iter()
            .map(|p| p.id)
            .collect()
    };

    ordered.truncate(max_matches as usize * 4);
    ordered
}

/// TEAM + MEXICANO: порядок команд.
///
/// Раунды 0 и 1 — случайно; дальше — по таблице команд.
pub fn order_teams_mexicano<R: RandomSource>(
    teams: &[Team],
    players: &[Player],
    rounds: &[Round],
    round_index: u32,
    rng: &mut R,
) -> Vec<TeamId> {
    if round_index < 2 {
        let mut ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
        rng.shuffle(&mut ids);
        return ids;
    }

    let (_, fresh) = standings::recompute_standings(players, teams, rounds, ScoringMode::Team);
    standings::rank_teams(&fresh, rounds)
        .into_iter()
        .map(|t| t.id)
        .collect()
}
