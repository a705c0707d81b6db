use serde::{Deserialize, Serialize};

use crate::domain::{Match, PlayerId, Ranked, Round, ScoringMode, Team, TeamId, TournamentState};
use crate::standings;
use crate::tournament::TournamentRuntime;

use super::dto::{MatchDto, RoundDto, StandingRowDto, TeamDto, TournamentViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Шапка турнира.
    GetTournament,

    /// Таблица в текущем режиме зачёта (игроки или команды).
    GetStandings,

    /// Личная таблица игроков (в TEAM mode тоже есть).
    GetPlayerStandings,

    /// Список команд.
    ListTeams,

    /// Один раунд.
    GetRound { round_index: u32 },

    /// Все раунды.
    ListRounds,

    /// Остаток таймера.
    GetTimer,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Tournament(TournamentViewDto),
    Standings(Vec<StandingRowDto>),
    Teams(Vec<TeamDto>),
    Round(RoundDto),
    Rounds(Vec<RoundDto>),
    Timer { remaining_ms: Option<u64> },
}

/// Шапка турнира на момент `now_ms`.
pub fn build_tournament_view(state: &TournamentState, now_ms: u64) -> TournamentViewDto {
    TournamentViewDto {
        config: state.config.clone(),
        started: state.is_started(),
        players: state.players.len() as u32,
        teams: state.teams.len() as u32,
        rounds_played: state.rounds.len() as u32,
        planned_rounds: TournamentRuntime::planned_rounds(state),
        can_add_next_round: TournamentRuntime::can_add_next_round(state, now_ms),
        timer_remaining_ms: TournamentRuntime::timer_remaining_ms(state, now_ms),
    }
}

/// Таблица в режиме зачёта турнира.
///
/// Статистика пересчитывается из раундов, так что снапшот может быть несвежим.
pub fn build_standings(state: &TournamentState) -> Vec<StandingRowDto> {
    match state.config.scoring_mode {
        ScoringMode::Individual => build_player_standings(state),
        ScoringMode::Team => {
            let fresh = TournamentRuntime::recomputed(state);
            let ranked = standings::rank_teams(&fresh.teams, &fresh.rounds);
            rows(&ranked, |t| t.name.clone())
        }
    }
}

/// Личная таблица игроков.
pub fn build_player_standings(state: &TournamentState) -> Vec<StandingRowDto> {
    let fresh = TournamentRuntime::recomputed(state);
    let ranked = standings::rank_players(&fresh.players, &fresh.rounds);
    rows(&ranked, |p| p.name.clone())
}

fn rows<T: Ranked>(ranked: &[T], name: impl Fn(&T) -> String) -> Vec<StandingRowDto> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let s = item.standing();
            StandingRowDto {
                rank: i as u32 + 1,
                participant_id: item.participant_id(),
                name: name(item),
                points_for: s.points_for.get(),
                points_against: s.points_against.get(),
                diff: s.diff(),
                games: s.games,
                wins: s.wins,
            }
        })
        .collect()
}

pub fn build_teams(state: &TournamentState) -> Vec<TeamDto> {
    state.teams.iter().map(|t| build_team_dto(state, t)).collect()
}

pub fn build_team_dto(state: &TournamentState, team: &Team) -> TeamDto {
    let [p1, p2] = team.roster;
    TeamDto {
        team_id: team.id,
        name: team.name.clone(),
        player_ids: team.roster,
        player_names: [player_name(state, p1), player_name(state, p2)],
    }
}

pub fn build_round_dto(state: &TournamentState, round: &Round) -> RoundDto {
    let sitting_out = round
        .sitting_out(&state.participant_ids())
        .into_iter()
        .map(|id| participant_name(state, id))
        .collect();

    RoundDto {
        round_index: round.index,
        matches: round.matches.iter().map(|m| build_match_dto(state, m)).collect(),
        sitting_out,
    }
}

pub fn build_match_dto(state: &TournamentState, m: &Match) -> MatchDto {
    let names = |side: &[u64]| -> Vec<String> { side.iter().map(|&id| participant_name(state, id)).collect() };

    MatchDto {
        match_id: m.id,
        court: m.court,
        side_a: m.side_a().to_vec(),
        side_b: m.side_b().to_vec(),
        side_a_names: names(m.side_a()),
        side_b_names: names(m.side_b()),
        score_a: m.score.map(|s| s.a.get()),
        score_b: m.score.map(|s| s.b.get()),
        sum_valid: m.has_valid_sum(state.config.match_points),
    }
}

fn participant_name(state: &TournamentState, id: u64) -> String {
    match state.config.scoring_mode {
        ScoringMode::Individual => player_name(state, id),
        ScoringMode::Team => team_name(state, id),
    }
}

fn player_name(state: &TournamentState, id: PlayerId) -> String {
    state
        .player(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

fn team_name(state: &TournamentState, id: TeamId) -> String {
    state
        .team(id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}
