// src/engine/round_robin.rs
//! Круговая система ("circle method") для TEAM mode.
//!
//! Первый участник стоит на месте, остальные поворачиваются на одну позицию
//! каждый раунд. За n-1 раундов (n — чётное, при нечётном добавляем слот BYE)
//! каждая пара встречается ровно один раз.

use crate::domain::ParticipantId;

/// Длина одного полного цикла для `count` участников.
pub fn cycle_length(count: usize) -> usize {
    if count < 2 {
        return 0;
    }
    let slots = count + count % 2;
    slots - 1
}

/// Пары раунда `round_index` по круговой системе.
///
/// Порядок `ids` задаёт "посадку" и должен быть одинаковым во всех раундах.
/// Пары с BYE выкидываются. После полного цикла расписание повторяется.
pub fn circle_pairings(ids: &[ParticipantId], round_index: u32) -> Vec<(ParticipantId, ParticipantId)> {
    let cycle = cycle_length(ids.len());
    if cycle == 0 {
        return Vec::new();
    }

    let mut slots: Vec<Option<ParticipantId>> = ids.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    // Поворот всех, кроме первого: каждый раунд последний уходит в начало.
    let shift = round_index as usize % cycle;
    slots[1..].rotate_right(shift);

    let n = slots.len();
    (0..n / 2)
        .filter_map(|i| match (slots[i], slots[n - 1 - i]) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect()
}
