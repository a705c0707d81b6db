//! Доменная модель турнира: игроки, команды, матчи, раунды, конфиг и снапшот состояния.

pub mod player;
pub mod points;
pub mod round;
pub mod tournament;

// Базовые идентификаторы
pub type PlayerId = u64;
pub type TeamId = u64;
pub type TournamentId = u64;

/// Участник матча: игрок в INDIVIDUAL, команда в TEAM.
/// Оба вида id живут в u64, а кто именно стоит на стороне — говорит `Lineup`.
pub type ParticipantId = u64;

/// Жёсткий лимит ростера.
pub const MAX_PLAYERS: usize = 32;

pub use player::*;
pub use points::*;
pub use round::*;
pub use tournament::*;
