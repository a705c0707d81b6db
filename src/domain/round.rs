use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::tournament::{ScoringMode, TournamentError};
use crate::domain::{ParticipantId, PlayerId, TeamId};

/// Идентификатор матча: номер раунда + порядковый номер матча внутри раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId {
    pub round_index: u32,
    pub slot: u32,
}

impl MatchId {
    pub fn new(round_index: u32, slot: u32) -> Self {
        Self { round_index, slot }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}-M{}", self.round_index + 1, self.slot + 1)
    }
}

/// Состав матча. Арность сторон зашита в тип:
/// - INDIVIDUAL: пара игроков против пары;
/// - TEAM: команда против команды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Lineup {
    Doubles {
        a: [PlayerId; 2],
        b: [PlayerId; 2],
    },
    Teams {
        a: TeamId,
        b: TeamId,
    },
}

impl Lineup {
    pub fn side_a(&self) -> &[ParticipantId] {
        match self {
            Lineup::Doubles { a, .. } => a,
            Lineup::Teams { a, .. } => core::slice::from_ref(a),
        }
    }

    pub fn side_b(&self) -> &[ParticipantId] {
        match self {
            Lineup::Doubles { b, .. } => b,
            Lineup::Teams { b, .. } => core::slice::from_ref(b),
        }
    }

    /// Все участники матча (сначала сторона A, потом B).
    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.side_a().iter().chain(self.side_b().iter()).copied()
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.participants().any(|p| p == id)
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        match self {
            Lineup::Doubles { .. } => ScoringMode::Individual,
            Lineup::Teams { .. } => ScoringMode::Team,
        }
    }
}

/// Счёт матча. Либо выставлены оба числа, либо матч не сыгран (`None` у `Match::score`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchScore {
    pub a: Points,
    pub b: Points,
}

impl MatchScore {
    pub fn new(a: Points, b: Points) -> Self {
        Self { a, b }
    }

    pub fn is_draw(&self) -> bool {
        self.a == self.b
    }
}

/// Один матч раунда.
///
/// Стороны неизменны после создания, меняется только счёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    /// Корт, 1..=courts.
    pub court: u8,
    pub lineup: Lineup,
    pub score: Option<MatchScore>,
}

impl Match {
    pub fn doubles(id: MatchId, court: u8, a: [PlayerId; 2], b: [PlayerId; 2]) -> Self {
        Self {
            id,
            court,
            lineup: Lineup::Doubles { a, b },
            score: None,
        }
    }

    pub fn teams(id: MatchId, court: u8, a: TeamId, b: TeamId) -> Self {
        Self {
            id,
            court,
            lineup: Lineup::Teams { a, b },
            score: None,
        }
    }

    /// Сборка матча из "сырых" сторон (импорт, внешний ввод).
    ///
    /// Неверная арность для режима — ошибка вызывающего, сразу возвращаем Err.
    pub fn from_sides(
        id: MatchId,
        court: u8,
        side_a: &[ParticipantId],
        side_b: &[ParticipantId],
        mode: ScoringMode,
    ) -> Result<Self, TournamentError> {
        let expected = mode.side_size();
        for side in [side_a, side_b] {
            if side.len() != expected {
                return Err(TournamentError::InvalidArity {
                    mode,
                    expected,
                    found: side.len(),
                });
            }
        }

        Ok(match mode {
            ScoringMode::Individual => {
                Self::doubles(id, court, [side_a[0], side_a[1]], [side_b[0], side_b[1]])
            }
            ScoringMode::Team => Self::teams(id, court, side_a[0], side_b[0]),
        })
    }

    pub fn side_a(&self) -> &[ParticipantId] {
        self.lineup.side_a()
    }

    pub fn side_b(&self) -> &[ParticipantId] {
        self.lineup.side_b()
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }

    /// Проверка суммы: scoreA + scoreB == matchPoints.
    /// Не сыгранный матч суммой не обладает — false.
    pub fn has_valid_sum(&self, match_points: u32) -> bool {
        self.score
            .map(|s| crate::standings::is_valid_sum(s.a, s.b, match_points))
            .unwrap_or(false)
    }
}

/// Раунд: упорядоченный список матчей с одним индексом.
///
/// Кто сидит на скамейке — не хранится, выводится из матчей и полного списка участников.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    pub index: u32,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(index: u32, matches: Vec<Match>) -> Self {
        Self { index, matches }
    }

    pub fn empty(index: u32) -> Self {
        Self {
            index,
            matches: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn plays(&self, id: ParticipantId) -> bool {
        self.matches.iter().any(|m| m.lineup.contains(id))
    }

    /// Кто в этом раунде не попал ни в один матч.
    pub fn sitting_out(&self, all: &[ParticipantId]) -> Vec<ParticipantId> {
        all.iter().copied().filter(|id| !self.plays(*id)).collect()
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }
}
