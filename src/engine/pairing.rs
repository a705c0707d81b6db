// src/engine/pairing.rs
//! Эвристика разбиения четвёрок на пары (только INDIVIDUAL 2v2).
//!
//! Четвёрку {p0, p1, p2, p3} можно разбить на две пары ровно тремя способами:
//!   (p0,p1 | p2,p3), (p0,p2 | p1,p3), (p0,p3 | p1,p2).
//! Берём самый дешёвый по штрафной функции за повторы.
//!
//! Для AMERICANO дополнительно делаем многократный случайный поиск по всему раунду:
//! это best-effort, а не оптимум. Перестановок между матчами после
//! жадной нарезки нет.

use log::debug;

use crate::domain::{ParticipantId, Variant};
use crate::engine::history::HistoryStats;
use crate::engine::RandomSource;

/// Сколько случайных попыток делает AMERICANO-поиск.
pub const PAIRING_ATTEMPTS: usize = 200;

/// Веса штрафной функции.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingWeights {
    /// За каждый прошлый раз, когда эти двое уже были партнёрами.
    pub partner_repeat: u64,
    /// Если эти двое были партнёрами в прошлом раунде.
    pub partner_last: u64,
    /// За каждый прошлый раз, когда эти двое уже были соперниками.
    pub opp_repeat: u64,
    /// Если эти двое были соперниками в прошлом раунде.
    pub opp_last: u64,
}

impl PairingWeights {
    /// AMERICANO: повтор партнёра штрафуется максимально.
    pub const AMERICANO: PairingWeights = PairingWeights {
        partner_repeat: 25_000,
        partner_last: 60_000,
        opp_repeat: 2_000,
        opp_last: 350,
    };

    /// MEXICANO: ротация партнёров сильная, соперники средне (форма уже делает своё).
    pub const MEXICANO: PairingWeights = PairingWeights {
        partner_repeat: 15_000,
        partner_last: 40_000,
        opp_repeat: 1_500,
        opp_last: 250,
    };

    pub const fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Americano => Self::AMERICANO,
            Variant::Mexicano => Self::MEXICANO,
        }
    }
}

/// Разбиение четвёрки: пара A против пары B.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    pub a: [ParticipantId; 2],
    pub b: [ParticipantId; 2],
}

impl Split {
    /// Три возможных разбиения четвёрки.
    pub fn candidates(q: [ParticipantId; 4]) -> [Split; 3] {
        [
            Split { a: [q[0], q[1]], b: [q[2], q[3]] },
            Split { a: [q[0], q[2]], b: [q[1], q[3]] },
            Split { a: [q[0], q[3]], b: [q[1], q[2]] },
        ]
    }

    /// Штраф за это разбиение по истории.
    pub fn cost(&self, stats: &HistoryStats, w: &PairingWeights) -> u64 {
        let [a, b] = self.a;
        let [c, d] = self.b;

        let mut cost = 0u64;

        cost += u64::from(stats.partners(a, b)) * w.partner_repeat;
        cost += u64::from(stats.partners(c, d)) * w.partner_repeat;

        if stats.were_last_partners(a, b) {
            cost += w.partner_last;
        }
        if stats.were_last_partners(c, d) {
            cost += w.partner_last;
        }

        for (x, y) in [(a, c), (a, d), (b, c), (b, d)] {
            let rep = stats.opponents(x, y);
            if rep > 0 {
                cost += u64::from(rep) * w.opp_repeat;
            }
            if stats.were_last_opponents(x, y) {
                cost += w.opp_last;
            }
        }

        cost
    }
}

/// Лучшее из трёх разбиений четвёрки. При равенстве — первое.
pub fn best_split(quartet: [ParticipantId; 4], stats: &HistoryStats, weights: &PairingWeights) -> (Split, u64) {
    let [first, rest @ ..] = Split::candidates(quartet);
    let mut best = (first, first.cost(stats, weights));

    for split in rest {
        let cost = split.cost(stats, weights);
        if cost < best.1 {
            best = (split, cost);
        }
    }

    best
}

/// Один проход: режем список подряд на четвёрки и для каждой берём лучшее разбиение.
/// Хвост, не добравший до четвёрки, отбрасывается.
///
/// Возвращает разбиения в порядке четвёрок и суммарный штраф раунда.
pub fn pair_in_blocks(playing: &[ParticipantId], stats: &HistoryStats, weights: &PairingWeights) -> (Vec<Split>, u64) {
    let mut splits = Vec::with_capacity(playing.len() / 4);
    let mut total = 0u64;

    for chunk in playing.chunks_exact(4) {
        let (split, cost) = best_split([chunk[0], chunk[1], chunk[2], chunk[3]], stats, weights);
        splits.push(split);
        total += cost;
    }

    (splits, total)
}

/// Многократный случайный поиск по раунду (AMERICANO).
///
/// `attempts` раз: перемешать весь список, нарезать на четвёрки, разбить каждую
/// лучше всего, посчитать суммарный штраф. Оставляем самую дешёвую попытку
/// (при равенстве — более раннюю).
pub fn search_pairing<R: RandomSource>(
    playing: &[ParticipantId],
    stats: &HistoryStats,
    weights: &PairingWeights,
    attempts: usize,
    rng: &mut R,
) -> Vec<Split> {
    let mut best: Option<(Vec<Split>, u64)> = None;
    let mut ids = playing.to_vec();

    for _ in 0..attempts.max(1) {
        rng.shuffle(&mut ids);
        let (splits, total) = pair_in_blocks(&ids, stats, weights);

        let better = match &best {
            Some((_, best_cost)) => total < *best_cost,
            None => true,
        };
        if better {
            best = Some((splits, total));
        }
    }

    match best {
        Some((splits, cost)) => {
            debug!("pairing search: players={} attempts={} best_cost={}", playing.len(), attempts, cost);
            splits
        }
        None => Vec::new(),
    }
}
