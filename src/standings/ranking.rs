// src/standings/ranking.rs
//! Сортировка таблицы.
//!
//! Порядок ключей:
//! 1) points_for DESC;
//! 2) личные встречи: у кого больше побед над другим;
//! 3) разница очков DESC;
//! 4) points_against ASC.
//!
//! Ключ (2) не транзитивен (A>B, B>C, C>A вполне возможно), поэтому
//! `slice::sort_by` здесь нельзя: ему нужен полный порядок. Используем
//! устойчивую вставками — она корректно работает с любым компаратором,
//! а при полном равенстве сохраняет порядок входа.

use core::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Lineup, ParticipantId, Player, Ranked, Round, Standing, Team};
use crate::standings::aggregate::{scored_matches, side_a_won};

/// Счётчик побед в личных встречах: (победитель, проигравший) -> сколько раз.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadToHead {
    wins: HashMap<(ParticipantId, ParticipantId), u32>,
}

impl HeadToHead {
    /// Личные встречи игроков: только матчи 2v2.
    /// Каждый из победителей "побеждает" каждого из проигравших.
    pub fn for_players(rounds: &[Round]) -> Self {
        Self::collect(rounds, |lineup| matches!(lineup, Lineup::Doubles { .. }))
    }

    /// Личные встречи команд: только матчи 1v1.
    pub fn for_teams(rounds: &[Round]) -> Self {
        Self::collect(rounds, |lineup| matches!(lineup, Lineup::Teams { .. }))
    }

    fn collect(rounds: &[Round], include: impl Fn(&Lineup) -> bool) -> Self {
        let mut h2h = Self::default();

        for m in scored_matches(rounds).filter(|m| include(&m.lineup)) {
            let Some(score) = m.score else { continue };
            let Some(a_won) = side_a_won(&score) else { continue };

            let (winners, losers) = if a_won {
                (m.side_a(), m.side_b())
            } else {
                (m.side_b(), m.side_a())
            };

            for &w in winners {
                for &l in losers {
                    h2h.record(w, l);
                }
            }
        }

        h2h
    }

    pub fn record(&mut self, winner: ParticipantId, loser: ParticipantId) {
        *self.wins.entry((winner, loser)).or_insert(0) += 1;
    }

    /// Сколько раз `winner` обыграл `loser`.
    pub fn wins(&self, winner: ParticipantId, loser: ParticipantId) -> u32 {
        self.wins.get(&(winner, loser)).copied().unwrap_or(0)
    }
}

/// Компаратор двух строк таблицы. `Less` — `a` выше.
pub fn compare_standings(
    a_id: ParticipantId,
    a: &Standing,
    b_id: ParticipantId,
    b: &Standing,
    h2h: &HeadToHead,
) -> Ordering {
    b.points_for
        .cmp(&a.points_for)
        .then_with(|| h2h.wins(b_id, a_id).cmp(&h2h.wins(a_id, b_id)))
        .then_with(|| b.diff().cmp(&a.diff()))
        .then_with(|| a.points_against.cmp(&b.points_against))
}

/// Отсортировать участников по таблице. Вход не трогаем, возвращаем копию.
pub fn rank_by<T: Ranked + Clone>(items: &[T], h2h: &HeadToHead) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());

    for item in items {
        let mut pos = out.len();
        while pos > 0 && ranks_below(&out[pos - 1], item, h2h) {
            pos -= 1;
        }
        out.insert(pos, item.clone());
    }

    out
}

/// `prev` должен стоять ниже `next`.
fn ranks_below<T: Ranked>(prev: &T, next: &T, h2h: &HeadToHead) -> bool {
    compare_standings(
        prev.participant_id(),
        prev.standing(),
        next.participant_id(),
        next.standing(),
        h2h,
    ) == Ordering::Greater
}

/// Таблица игроков. Статистика берётся как есть из `players`.
pub fn rank_players(players: &[Player], rounds: &[Round]) -> Vec<Player> {
    rank_by(players, &HeadToHead::for_players(rounds))
}

/// Таблица команд.
pub fn rank_teams(teams: &[Team], rounds: &[Round]) -> Vec<Team> {
    rank_by(teams, &HeadToHead::for_teams(rounds))
}
