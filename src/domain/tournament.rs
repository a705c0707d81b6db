// src/domain/tournament.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::player::{Player, Team};
use crate::domain::round::{MatchId, Round};
use crate::domain::{ParticipantId, PlayerId, TeamId, MAX_PLAYERS};
use crate::infra::ids::IdGenerator;

/// Вариант турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Упор на ротацию партнёров: каждый с каждым.
    Americano,
    /// Упор на посев по форме: сильные играют с сильными.
    Mexicano,
}

/// Кто является единицей зачёта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScoringMode {
    /// Игроки, пары меняются каждый раунд.
    Individual,
    /// Фиксированные команды по два игрока.
    Team,
}

impl ScoringMode {
    /// Сколько участников на одной стороне матча.
    pub const fn side_size(self) -> usize {
        match self {
            ScoringMode::Individual => 2,
            ScoringMode::Team => 1,
        }
    }
}

/// Чем ограничена длина турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayMode {
    /// Фиксированное (или авто) число раундов.
    Rounds,
    /// Играем, пока не кончится таймер.
    Timer,
}

pub const MIN_COURTS: u8 = 1;
pub const MAX_COURTS: u8 = 8;
pub const MIN_MATCH_POINTS: u32 = 11;
pub const MAX_MATCH_POINTS: u32 = 29;
pub const MIN_TIMER_MINUTES: u32 = 1;
pub const MAX_TIMER_MINUTES: u32 = 360;

/// Конфигурация турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentConfig {
    pub variant: Variant,
    pub scoring_mode: ScoringMode,

    /// Количество кортов (1–8).
    pub courts: u8,

    /// Сумма очков в матче (нечётное, 11–29).
    pub match_points: u32,

    /// Для ROUNDS: 0 = AUTO, иначе ручное число раундов.
    pub rounds_planned: u32,

    /// AUTO: каждая пара партнёров должна встретиться дважды.
    pub auto_rematch: bool,

    pub play_mode: PlayMode,

    /// Для TIMER: длительность в минутах (1–360).
    pub timer_minutes: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Americano,
            scoring_mode: ScoringMode::Individual,
            courts: 2,
            match_points: 21,
            rounds_planned: 0,
            auto_rematch: false,
            play_mode: PlayMode::Rounds,
            timer_minutes: 60,
        }
    }
}

impl TournamentConfig {
    /// Жёсткая валидация конфига.
    ///
    /// Значения вне документированных границ — это баг вызывающего кода,
    /// поэтому не зажимаем, а возвращаем ошибку.
    pub fn validate_full(&self) -> Result<(), TournamentError> {
        if !(MIN_COURTS..=MAX_COURTS).contains(&self.courts) {
            return Err(TournamentError::InvalidConfig(format!(
                "TournamentConfig: courts must be in [{MIN_COURTS}, {MAX_COURTS}], got {}",
                self.courts
            )));
        }

        if !(MIN_MATCH_POINTS..=MAX_MATCH_POINTS).contains(&self.match_points) {
            return Err(TournamentError::InvalidConfig(format!(
                "TournamentConfig: match_points must be in [{MIN_MATCH_POINTS}, {MAX_MATCH_POINTS}], got {}",
                self.match_points
            )));
        }

        if self.match_points % 2 == 0 {
            return Err(TournamentError::InvalidConfig(format!(
                "TournamentConfig: match_points must be odd, got {}",
                self.match_points
            )));
        }

        if !(MIN_TIMER_MINUTES..=MAX_TIMER_MINUTES).contains(&self.timer_minutes) {
            return Err(TournamentError::InvalidConfig(format!(
                "TournamentConfig: timer_minutes must be in [{MIN_TIMER_MINUTES}, {MAX_TIMER_MINUTES}], got {}",
                self.timer_minutes
            )));
        }

        Ok(())
    }

    pub fn timer_duration_ms(&self) -> u64 {
        u64::from(self.timer_minutes) * 60_000
    }
}

/// Снапшот турнира — корень владения.
///
/// Жизненный цикл:
/// - создаётся пустым;
/// - игроки/команды меняются только до первого раунда;
/// - раунды только добавляются в конец;
/// - счёт матчей можно менять в любой момент.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentState {
    pub config: TournamentConfig,
    pub players: Vec<Player>,
    /// Пусто, если не TEAM mode.
    pub teams: Vec<Team>,
    pub rounds: Vec<Round>,
    /// Unix time (мс) первого раунда. Нужен для TIMER.
    pub started_at: Option<u64>,
    pub ids: IdGenerator,
}

impl Default for TournamentState {
    fn default() -> Self {
        Self {
            config: TournamentConfig::default(),
            players: Vec::new(),
            teams: Vec::new(),
            rounds: Vec::new(),
            started_at: None,
            ids: IdGenerator::new(),
        }
    }
}

impl TournamentState {
    pub fn new(config: TournamentConfig) -> Result<Self, TournamentError> {
        config.validate_full()?;

        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Турнир стартовал — ростер заморожен.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some() || !self.rounds.is_empty()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// Id тех, кто стоит на сторонах матчей в текущем режиме.
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        match self.config.scoring_mode {
            ScoringMode::Individual => self.player_ids(),
            ScoringMode::Team => self.teams.iter().map(|t| t.id).collect(),
        }
    }

    /// Поменять конфиг.
    ///
    /// После старта нельзя переключать режим зачёта: история уже содержит
    /// стороны определённой арности.
    pub fn set_config(&mut self, config: TournamentConfig) -> Result<(), TournamentError> {
        config.validate_full()?;

        if self.is_started() && config.scoring_mode != self.config.scoring_mode {
            return Err(TournamentError::RosterFrozen);
        }

        self.config = config;
        Ok(())
    }

    /// Добавить игрока. Имя триммится.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let clean = name.trim();
        if clean.is_empty() {
            return Err(TournamentError::EmptyName);
        }

        if self.players.len() >= MAX_PLAYERS {
            return Err(TournamentError::RosterFull { cap: MAX_PLAYERS });
        }

        let id = self.ids.next_player_id();
        self.players.push(Player::new(id, clean));
        Ok(id)
    }

    /// Переименовать игрока. Пустое имя оставляет старое.
    pub fn rename_player(&mut self, player_id: PlayerId, name: &str) -> Result<(), TournamentError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;

        let clean = name.trim();
        if !clean.is_empty() {
            player.name = clean.to_string();
        }
        Ok(())
    }

    /// Удалить игрока (только до старта). Команды с ним тоже удаляются.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.is_started() {
            return Err(TournamentError::RosterFrozen);
        }

        if self.player(player_id).is_none() {
            return Err(TournamentError::PlayerNotFound(player_id));
        }

        self.players.retain(|p| p.id != player_id);
        self.teams.retain(|t| !t.has_player(player_id));
        Ok(())
    }

    /// Заменить все команды новым набором ростеров (только до старта).
    ///
    /// Каждый игрок может быть максимум в одной команде.
    /// Команды получают имена "Team 1", "Team 2", …
    pub fn replace_teams(&mut self, rosters: &[[PlayerId; 2]]) -> Result<(), TournamentError> {
        if self.is_started() {
            return Err(TournamentError::RosterFrozen);
        }

        let mut seen: Vec<PlayerId> = Vec::with_capacity(rosters.len() * 2);
        for roster in rosters {
            for &pid in roster {
                if self.player(pid).is_none() {
                    return Err(TournamentError::PlayerNotFound(pid));
                }
                if seen.contains(&pid) {
                    return Err(TournamentError::PlayerInTwoTeams(pid));
                }
                seen.push(pid);
            }
        }

        let mut ids = self.ids.clone();
        let teams = rosters
            .iter()
            .enumerate()
            .map(|(i, roster)| Team::new(ids.next_team_id(), format!("Team {}", i + 1), *roster))
            .collect();

        self.ids = ids;
        self.teams = teams;
        Ok(())
    }

    /// Переименовать команду. Пустое имя оставляет старое.
    pub fn rename_team(&mut self, team_id: TeamId, name: &str) -> Result<(), TournamentError> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;

        let clean = name.trim();
        if !clean.is_empty() {
            team.name = clean.to_string();
        }
        Ok(())
    }

    /// Полный сброс: новое пустое состояние, конфиг сохраняется.
    pub fn reset(&self) -> Self {
        Self {
            config: self.config.clone(),
            ..Self::default()
        }
    }
}

/// Ошибки, которые могут возникать при работе с турниром.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Invalid tournament config: {0}")]
    InvalidConfig(String),

    #[error("Player name is empty")]
    EmptyName,

    #[error("Roster is full: at most {cap} players")]
    RosterFull { cap: usize },

    #[error("Roster is frozen: the tournament has already started")]
    RosterFrozen,

    #[error("Player not found: id={0}")]
    PlayerNotFound(PlayerId),

    #[error("Team not found: id={0}")]
    TeamNotFound(TeamId),

    #[error("Player {0} is assigned to more than one team")]
    PlayerInTwoTeams(PlayerId),

    #[error("Teams need an even number of players, at least 4 (got {0})")]
    InvalidTeamPlayerCount(usize),

    #[error("Not enough participants for a single match")]
    NotEnoughParticipants,

    #[error("Tournament timer has expired")]
    TimerExpired,

    #[error("All {planned} planned rounds are already generated")]
    PlannedRoundsReached { planned: u32 },

    #[error("Every player has already played the target of {games} games")]
    TargetReached { games: u32 },

    #[error("Round not found: index={0}")]
    RoundNotFound(u32),

    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Invalid side arity for {mode:?}: expected {expected}, found {found}")]
    InvalidArity {
        mode: ScoringMode,
        expected: usize,
        found: usize,
    },
}
