//! Диспетчер API: команда + снапшот -> новый снапшот + ответ.

use log::{debug, warn};

use crate::domain::TournamentState;
use crate::engine::RandomSource;
use crate::tournament::TournamentRuntime;

use super::commands::{Command, SetScoreCommand, UpdateConfigCommand};
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{self, Query, QueryResponse};

/// Применить команду к снапшоту.
///
/// При ошибке снапшот вызывающего остаётся валидным и неизменным:
/// работаем над копией.
pub fn apply_command<R: RandomSource>(
    runtime: &TournamentRuntime,
    state: &TournamentState,
    command: Command,
    rng: &mut R,
    now_ms: u64,
) -> Result<(TournamentState, CommandResponse), ApiError> {
    debug!("api command: {:?}", command);

    let result = dispatch(runtime, state, command, rng, now_ms);
    if let Err(err) = &result {
        warn!("api command rejected: {}", err);
    }
    result
}

fn dispatch<R: RandomSource>(
    runtime: &TournamentRuntime,
    state: &TournamentState,
    command: Command,
    rng: &mut R,
    now_ms: u64,
) -> Result<(TournamentState, CommandResponse), ApiError> {
    match command {
        Command::AddPlayer { name } => {
            let mut next = state.clone();
            let player_id = next.add_player(&name)?;
            Ok((next, CommandResponse::PlayerAdded { player_id }))
        }

        Command::RenamePlayer { player_id, name } => {
            let mut next = state.clone();
            next.rename_player(player_id, &name)?;
            Ok((next, CommandResponse::Ok))
        }

        Command::RemovePlayer { player_id } => {
            let mut next = state.clone();
            next.remove_player(player_id)?;
            Ok((next, CommandResponse::Ok))
        }

        Command::GenerateTeams => {
            let next = TournamentRuntime::generate_teams_random(state, rng)?;
            let teams = queries::build_teams(&next);
            Ok((next, CommandResponse::TeamsGenerated(teams)))
        }

        Command::RenameTeam { team_id, name } => {
            let mut next = state.clone();
            next.rename_team(team_id, &name)?;
            Ok((next, CommandResponse::Ok))
        }

        Command::UpdateConfig(UpdateConfigCommand { config }) => {
            let mut next = state.clone();
            next.set_config(config)?;
            let view = queries::build_tournament_view(&next, now_ms);
            Ok((next, CommandResponse::TournamentState(view)))
        }

        Command::NextRound => {
            let next = runtime.start_or_next_round(state, rng, now_ms)?;
            let round = next
                .rounds
                .last()
                .map(|r| queries::build_round_dto(&next, r))
                .ok_or_else(|| ApiError::Internal("round was not appended".to_string()))?;
            Ok((next, CommandResponse::RoundAdded(round)))
        }

        Command::SetScore(SetScoreCommand {
            round_index,
            match_id,
            score_a,
            score_b,
        }) => {
            let next = TournamentRuntime::set_score(state, round_index, match_id, score_a, score_b)?;
            let dto = next
                .rounds
                .iter()
                .find(|r| r.index == round_index)
                .and_then(|r| r.find_match(match_id))
                .map(|m| queries::build_match_dto(&next, m))
                .ok_or_else(|| ApiError::NotFound(format!("match {match_id}")))?;
            Ok((next, CommandResponse::ScoreSet(dto)))
        }

        Command::Reset => {
            let next = state.reset();
            let view = queries::build_tournament_view(&next, now_ms);
            Ok((next, CommandResponse::TournamentState(view)))
        }
    }
}

/// Выполнить запрос "только чтение".
pub fn run_query(state: &TournamentState, query: Query, now_ms: u64) -> Result<QueryResponse, ApiError> {
    let response = match query {
        Query::GetTournament => QueryResponse::Tournament(queries::build_tournament_view(state, now_ms)),
        Query::GetStandings => QueryResponse::Standings(queries::build_standings(state)),
        Query::GetPlayerStandings => QueryResponse::Standings(queries::build_player_standings(state)),
        Query::ListTeams => QueryResponse::Teams(queries::build_teams(state)),
        Query::GetRound { round_index } => {
            let round = state
                .rounds
                .iter()
                .find(|r| r.index == round_index)
                .ok_or_else(|| ApiError::NotFound(format!("round {round_index}")))?;
            QueryResponse::Round(queries::build_round_dto(state, round))
        }
        Query::ListRounds => QueryResponse::Rounds(
            state
                .rounds
                .iter()
                .map(|r| queries::build_round_dto(state, r))
                .collect(),
        ),
        Query::GetTimer => QueryResponse::Timer {
            remaining_ms: TournamentRuntime::timer_remaining_ms(state, now_ms),
        },
    };

    Ok(response)
}
