use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::{ParticipantId, PlayerId, TeamId};

/// Накопленная статистика участника.
///
/// Всегда пересчитывается с нуля из истории раундов (`standings::recompute_standings`),
/// руками её никто не инкрементит.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub points_for: Points,
    pub points_against: Points,
    /// Сколько сыграно матчей с выставленным счётом.
    pub games: u32,
    /// Чистые победы (для отображения, в сортировке не участвует).
    pub wins: u32,
}

impl Standing {
    /// Разница очков (может быть отрицательной).
    pub fn diff(&self) -> i64 {
        i64::from(self.points_for.0) - i64::from(self.points_against.0)
    }

    pub fn record(&mut self, scored: Points, conceded: Points) {
        self.points_for += scored;
        self.points_against += conceded;
        self.games += 1;
        if scored > conceded {
            self.wins += 1;
        }
    }
}

/// Игрок турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub standing: Standing,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            standing: Standing::default(),
        }
    }
}

/// Команда (TEAM mode): фиксированная пара игроков.
///
/// Ростер задаётся до первого раунда и дальше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub roster: [PlayerId; 2],
    pub standing: Standing,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, roster: [PlayerId; 2]) -> Self {
        Self {
            id,
            name: name.into(),
            roster,
            standing: Standing::default(),
        }
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.roster.contains(&player_id)
    }
}

/// Всё, что можно ранжировать: игрок или команда.
pub trait Ranked {
    fn participant_id(&self) -> ParticipantId;
    fn standing(&self) -> &Standing;
}

impl Ranked for Player {
    fn participant_id(&self) -> ParticipantId {
        self.id
    }

    fn standing(&self) -> &Standing {
        &self.standing
    }
}

impl Ranked for Team {
    fn participant_id(&self) -> ParticipantId {
        self.id
    }

    fn standing(&self) -> &Standing {
        &self.standing
    }
}
