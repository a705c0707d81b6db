// src/engine/history.rs

use std::collections::{HashMap, HashSet};

use crate::domain::{ParticipantId, Round};

/// Ключ неупорядоченной пары: (min, max).
/// `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(ParticipantId, ParticipantId);

impl PairKey {
    pub fn new(a: ParticipantId, b: ParticipantId) -> Self {
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }

    pub fn low(&self) -> ParticipantId {
        self.0
    }

    pub fn high(&self) -> ParticipantId {
        self.1
    }
}

/// Агрегаты по истории раундов.
///
/// Чистая функция от (раунды, участники): каждый вызов считает всё заново,
/// никакого инкрементального кеша. Для пар — одна плоская мапа по `PairKey`,
/// без предварительного заполнения n² нулями.
#[derive(Clone, Debug, Default)]
pub struct HistoryStats {
    /// Сколько матчей сыграл участник.
    pub games_played: HashMap<ParticipantId, u32>,
    /// Сколько раундов участник просидел.
    pub bye_count: HashMap<ParticipantId, u32>,
    /// Сидел ли участник в последнем раунде.
    pub byed_last_round: HashMap<ParticipantId, bool>,
    /// Сколько раз двое были партнёрами (только стороны из 2 человек).
    pub partner_count: HashMap<PairKey, u32>,
    /// Сколько раз двое были соперниками.
    pub opponent_count: HashMap<PairKey, u32>,
    /// Партнёр в последнем раунде.
    pub last_partner: HashMap<ParticipantId, ParticipantId>,
    /// Соперники в последнем раунде.
    pub last_opponents: HashMap<ParticipantId, HashSet<ParticipantId>>,
}

impl HistoryStats {
    /// Посчитать все агрегаты.
    ///
    /// `ids` — полный список участников (нужен для пауз: кого нет в матчах раунда).
    pub fn compute(rounds: &[Round], ids: &[ParticipantId]) -> Self {
        let mut stats = HistoryStats::default();

        for &id in ids {
            stats.games_played.insert(id, 0);
            stats.bye_count.insert(id, 0);
            stats.byed_last_round.insert(id, false);
        }

        for round in rounds {
            for m in &round.matches {
                for id in m.lineup.participants() {
                    *stats.games_played.entry(id).or_insert(0) += 1;
                }

                for side in [m.side_a(), m.side_b()] {
                    if let [x, y] = side {
                        *stats.partner_count.entry(PairKey::new(*x, *y)).or_insert(0) += 1;
                    }
                }

                for &a in m.side_a() {
                    for &b in m.side_b() {
                        *stats.opponent_count.entry(PairKey::new(a, b)).or_insert(0) += 1;
                    }
                }
            }

            for &id in ids {
                if !round.plays(id) {
                    *stats.bye_count.entry(id).or_insert(0) += 1;
                }
            }
        }

        if let Some(last) = rounds.last() {
            for &id in ids {
                stats.byed_last_round.insert(id, !last.plays(id));
            }

            for m in &last.matches {
                for side in [m.side_a(), m.side_b()] {
                    if let [x, y] = side {
                        stats.last_partner.insert(*x, *y);
                        stats.last_partner.insert(*y, *x);
                    }
                }

                for &a in m.side_a() {
                    stats.last_opponents.entry(a).or_default().extend(m.side_b().iter().copied());
                }
                for &b in m.side_b() {
                    stats.last_opponents.entry(b).or_default().extend(m.side_a().iter().copied());
                }
            }
        }

        stats
    }

    pub fn games(&self, id: ParticipantId) -> u32 {
        self.games_played.get(&id).copied().unwrap_or(0)
    }

    pub fn byes(&self, id: ParticipantId) -> u32 {
        self.bye_count.get(&id).copied().unwrap_or(0)
    }

    pub fn byed_last(&self, id: ParticipantId) -> bool {
        self.byed_last_round.get(&id).copied().unwrap_or(false)
    }

    pub fn partners(&self, a: ParticipantId, b: ParticipantId) -> u32 {
        self.partner_count.get(&PairKey::new(a, b)).copied().unwrap_or(0)
    }

    pub fn opponents(&self, a: ParticipantId, b: ParticipantId) -> u32 {
        self.opponent_count.get(&PairKey::new(a, b)).copied().unwrap_or(0)
    }

    /// Были ли a и b партнёрами в последнем раунде (в любую сторону).
    pub fn were_last_partners(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.last_partner.get(&a) == Some(&b) || self.last_partner.get(&b) == Some(&a)
    }

    /// Был ли `b` соперником `a` в последнем раунде.
    pub fn were_last_opponents(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.last_opponents
            .get(&a)
            .is_some_and(|set| set.contains(&b))
    }
}
