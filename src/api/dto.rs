use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId, PlayerId, TeamId, TournamentConfig};

/// Строка таблицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingRowDto {
    /// Место, с 1.
    pub rank: u32,
    pub participant_id: ParticipantId,
    pub name: String,
    pub points_for: u32,
    pub points_against: u32,
    pub diff: i64,
    pub games: u32,
    pub wins: u32,
}

/// DTO команды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDto {
    pub team_id: TeamId,
    pub name: String,
    pub player_ids: [PlayerId; 2],
    pub player_names: [String; 2],
}

/// DTO матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchDto {
    pub match_id: MatchId,
    pub court: u8,
    pub side_a: Vec<ParticipantId>,
    pub side_b: Vec<ParticipantId>,
    /// Имена сторон в том же порядке, что и id.
    pub side_a_names: Vec<String>,
    pub side_b_names: Vec<String>,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    /// Сумма счёта равна match_points. Для несыгранного матча — false.
    pub sum_valid: bool,
}

/// DTO раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundDto {
    pub round_index: u32,
    pub matches: Vec<MatchDto>,
    /// Кто отдыхает в этом раунде.
    pub sitting_out: Vec<String>,
}

/// Общий вид турнира (шапка для фронта).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentViewDto {
    pub config: TournamentConfig,
    pub started: bool,
    pub players: u32,
    pub teams: u32,
    pub rounds_played: u32,
    /// 0 — число раундов не ограничено (TIMER).
    pub planned_rounds: u32,
    pub can_add_next_round: bool,
    pub timer_remaining_ms: Option<u64>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Игрок добавлен.
    PlayerAdded { player_id: PlayerId },

    /// Команды сгенерированы.
    TeamsGenerated(Vec<TeamDto>),

    /// Добавлен новый раунд.
    RoundAdded(RoundDto),

    /// Обновлён счёт матча.
    ScoreSet(MatchDto),

    /// Состояние турнира после команды (конфиг, сброс).
    TournamentState(TournamentViewDto),
}
