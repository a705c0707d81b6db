use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, PlayerId, TeamId, TournamentConfig};

/// Команда верхнего уровня: всё, что меняет снапшот турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Добавить игрока (имя триммится; лимит 32).
    AddPlayer { name: String },

    /// Переименовать игрока. Пустое имя игнорируется.
    RenamePlayer { player_id: PlayerId, name: String },

    /// Удалить игрока (только до старта).
    RemovePlayer { player_id: PlayerId },

    /// Разбить всех игроков на случайные команды (только до старта).
    GenerateTeams,

    /// Переименовать команду.
    RenameTeam { team_id: TeamId, name: String },

    /// Поменять конфиг турнира.
    UpdateConfig(UpdateConfigCommand),

    /// Стартовать турнир / добавить следующий раунд.
    NextRound,

    /// Выставить счёт (или стереть, если одного из чисел нет).
    SetScore(SetScoreCommand),

    /// Сбросить турнир, оставив конфиг.
    Reset,
}

/// Новый конфиг целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateConfigCommand {
    pub config: TournamentConfig,
}

/// Счёт матча.
///
/// Числа приходят "как ввёл пользователь": могут быть отрицательными или больше
/// лимита, домен сам зажмёт их в [0, match_points].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetScoreCommand {
    pub round_index: u32,
    pub match_id: MatchId,
    pub score_a: Option<i64>,
    pub score_b: Option<i64>,
}
