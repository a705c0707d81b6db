// src/tournament/runtime.rs

use log::{debug, info, warn};

use crate::domain::{MatchId, PlayMode, PlayerId, ScoringMode, TournamentError, TournamentState, Variant};
use crate::engine::{planner, HistoryStats, RandomSource, RoundBuilder};
use crate::standings;
use crate::time_ctrl;

/// Рантайм-слой турнира.
///
/// Склеивает доменный снапшот, планировщик, таблицу и таймер.
/// Каждая операция берёт снапшот по ссылке и возвращает новый;
/// при отказе (`Err`) исходный снапшот остаётся как был.
///
/// Сериализацию запросов по одному турниру обеспечивает вызывающий.
#[derive(Clone, Copy, Debug, Default)]
pub struct TournamentRuntime {
    builder: RoundBuilder,
}

impl TournamentRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Рантайм с нестандартным числом попыток AMERICANO-поиска.
    pub fn with_builder(builder: RoundBuilder) -> Self {
        Self { builder }
    }

    /// Сколько раундов запланировано (0 — не ограничено раундами).
    pub fn planned_rounds(state: &TournamentState) -> u32 {
        planner::planned_rounds(&state.config, state.players.len(), state.teams.len())
    }

    /// Можно ли сейчас добавить раунд (таймер / лимит раундов / цель AMERICANO).
    ///
    /// Нехватку игроков не проверяет: это отдельный отказ в `start_or_next_round`.
    pub fn can_add_next_round(state: &TournamentState, now_ms: u64) -> bool {
        Self::check_can_add(state, now_ms).is_ok()
    }

    /// Цель AMERICANO по играм, если она действует.
    ///
    /// Есть только в INDIVIDUAL + AMERICANO при конечном плане раундов;
    /// в TIMER выбор идёт без цели.
    pub fn americano_target_games(state: &TournamentState) -> Option<u32> {
        match (state.config.scoring_mode, state.config.variant) {
            (ScoringMode::Individual, Variant::Americano) if Self::planned_rounds(state) > 0 => Some(
                planner::auto_target_games_americano(state.players.len() as u32, state.config.auto_rematch),
            ),
            _ => None,
        }
    }

    /// Цель достигнута: меньше четырёх игроков ещё не добрали игр, матч собрать не из кого.
    ///
    /// Бывает при ручном плане раундов больше AUTO: все добирают цель раньше,
    /// чем кончаются раунды.
    fn target_reached(state: &TournamentState) -> Option<u32> {
        let target = Self::americano_target_games(state)?;

        let ids = state.player_ids();
        let stats = HistoryStats::compute(&state.rounds, &ids);
        let still_need = ids.iter().filter(|&&id| stats.games(id) < target).count();

        (still_need < 4).then_some(target)
    }

    /// Остаток таймера; `None` вне TIMER.
    pub fn timer_remaining_ms(state: &TournamentState, now_ms: u64) -> Option<u64> {
        time_ctrl::remaining_ms(&state.config, state.started_at, now_ms)
    }

    /// Стартовать турнир (первый раунд) или добавить следующий раунд.
    pub fn start_or_next_round<R: RandomSource>(
        &self,
        state: &TournamentState,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<TournamentState, TournamentError> {
        Self::check_can_add(state, now_ms)?;
        Self::check_roster(state)?;

        let mut next = Self::recomputed(state);
        if next.started_at.is_none() {
            next.started_at = Some(now_ms);
        }

        let round_index = next.rounds.len() as u32;
        let round = self
            .builder
            .build(&next.config, round_index, &next.players, &next.teams, &next.rounds, rng)?;

        if round.is_empty() {
            warn!("round {} not added: capacity below one match", round_index + 1);
            return Err(TournamentError::NotEnoughParticipants);
        }

        next.rounds.push(round);
        let next = Self::recomputed(&next);

        info!(
            "tournament: round {}/{} added",
            next.rounds.len(),
            Self::planned_rounds(&next)
        );

        Ok(next)
    }

    /// Выставить счёт матча и пересчитать таблицу.
    ///
    /// Счёт меняется в любой момент, в том числе у старых раундов.
    pub fn set_score(
        state: &TournamentState,
        round_index: u32,
        match_id: MatchId,
        score_a: Option<i64>,
        score_b: Option<i64>,
    ) -> Result<TournamentState, TournamentError> {
        let mut next = state.clone();
        let match_points = next.config.match_points;

        let round = next
            .rounds
            .iter_mut()
            .find(|r| r.index == round_index)
            .ok_or(TournamentError::RoundNotFound(round_index))?;

        let updated = standings::set_score(round, match_id, score_a, score_b, match_points)?;

        if !updated.has_valid_sum(match_points) && updated.is_scored() {
            debug!("match {}: score sum differs from {}", match_id, match_points);
        }

        Ok(Self::recomputed(&next))
    }

    /// Случайные команды из всех игроков (только до старта).
    ///
    /// Нужно чётное число игроков, минимум 4. Старые команды заменяются.
    pub fn generate_teams_random<R: RandomSource>(
        state: &TournamentState,
        rng: &mut R,
    ) -> Result<TournamentState, TournamentError> {
        if state.is_started() {
            return Err(TournamentError::RosterFrozen);
        }

        let n = state.players.len();
        if n < 4 || n % 2 != 0 {
            return Err(TournamentError::InvalidTeamPlayerCount(n));
        }

        let mut ids: Vec<PlayerId> = state.player_ids();
        rng.shuffle(&mut ids);

        let rosters: Vec<[PlayerId; 2]> = ids.chunks_exact(2).map(|c| [c[0], c[1]]).collect();

        let mut next = state.clone();
        next.replace_teams(&rosters)?;

        debug!("teams generated: {}", next.teams.len());
        Ok(next)
    }

    /// Копия снапшота со свежей таблицей.
    pub fn recomputed(state: &TournamentState) -> TournamentState {
        let (players, teams) =
            standings::recompute_standings(&state.players, &state.teams, &state.rounds, state.config.scoring_mode);

        TournamentState {
            players,
            teams,
            ..state.clone()
        }
    }

    fn check_can_add(state: &TournamentState, now_ms: u64) -> Result<(), TournamentError> {
        match state.config.play_mode {
            PlayMode::Timer if time_ctrl::is_expired(&state.config, state.started_at, now_ms) => {
                Err(TournamentError::TimerExpired)
            }
            PlayMode::Rounds => {
                let planned = Self::planned_rounds(state);
                if planned > 0 && state.rounds.len() as u32 >= planned {
                    return Err(TournamentError::PlannedRoundsReached { planned });
                }
                if state.players.len() >= 4 {
                    if let Some(games) = Self::target_reached(state) {
                        return Err(TournamentError::TargetReached { games });
                    }
                }
                Ok(())
            }
            PlayMode::Timer => Ok(()),
        }
    }

    fn check_roster(state: &TournamentState) -> Result<(), TournamentError> {
        let n = state.players.len();

        match state.config.scoring_mode {
            ScoringMode::Team => {
                if n < 4 || n % 2 != 0 {
                    return Err(TournamentError::InvalidTeamPlayerCount(n));
                }
                if state.teams.len() < 2 {
                    return Err(TournamentError::NotEnoughParticipants);
                }
            }
            ScoringMode::Individual => {
                if n < 4 {
                    return Err(TournamentError::NotEnoughParticipants);
                }
            }
        }

        Ok(())
    }
}
