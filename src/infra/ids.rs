use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, TeamId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Счётчики лежат прямо в снапшоте турнира (`TournamentState::ids`),
/// поэтому сериализуются вместе с ним и переживают save/load.
/// Удалённый игрок свой id назад не отдаёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdGenerator {
    player_counter: u64,
    team_counter: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            player_counter: 1,
            team_counter: 1,
        }
    }

    #[inline]
    pub fn next_player_id(&mut self) -> PlayerId {
        let id = self.player_counter;
        self.player_counter += 1;
        id
    }

    #[inline]
    pub fn next_team_id(&mut self) -> TeamId {
        let id = self.team_counter;
        self.team_counter += 1;
        id
    }
}
