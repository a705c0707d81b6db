use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TournamentError;
use crate::infra::StorageError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый конфиг, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Игрок / команда / раунд / матч не найден.
    #[error("not found: {0}")]
    NotFound(String),

    /// Команда не может быть выполнена в текущем состоянии
    /// (ростер заморожен, таймер вышел, раунды кончились, мало игроков).
    /// Снапшот не изменился.
    #[error("rejected: {0}")]
    Rejected(String),

    /// Ошибка хранилища.
    #[error("storage: {0}")]
    Storage(String),

    /// Внутренняя ошибка.
    #[error("internal: {0}")]
    Internal(String),
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        let text = err.to_string();
        match err {
            TournamentError::InvalidConfig(_) | TournamentError::InvalidArity { .. } => ApiError::BadRequest(text),

            TournamentError::PlayerNotFound(_)
            | TournamentError::TeamNotFound(_)
            | TournamentError::RoundNotFound(_)
            | TournamentError::MatchNotFound(_) => ApiError::NotFound(text),

            TournamentError::EmptyName
            | TournamentError::RosterFull { .. }
            | TournamentError::RosterFrozen
            | TournamentError::PlayerInTwoTeams(_)
            | TournamentError::InvalidTeamPlayerCount(_)
            | TournamentError::NotEnoughParticipants
            | TournamentError::TimerExpired
            | TournamentError::PlannedRoundsReached { .. }
            | TournamentError::TargetReached { .. } => ApiError::Rejected(text),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StorageError::Codec(_) => ApiError::Storage(err.to_string()),
        }
    }
}
