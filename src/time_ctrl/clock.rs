// src/time_ctrl/clock.rs
//! Таймер турнира.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::domain::TournamentConfig;

/// Таймер турнира: длительность + момент старта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentClock {
    /// Полная длительность, мс.
    pub duration_ms: u64,
    /// Unix time (мс) старта. `None`, пока нет ни одного раунда.
    pub started_at: Option<u64>,
}

impl TournamentClock {
    pub fn new(duration_ms: u64, started_at: Option<u64>) -> Self {
        Self {
            duration_ms,
            started_at,
        }
    }

    pub fn from_config(config: &TournamentConfig, started_at: Option<u64>) -> Self {
        Self::new(config.timer_duration_ms(), started_at)
    }

    /// Момент окончания (если уже стартовали).
    pub fn deadline_ms(&self) -> Option<u64> {
        self.started_at.map(|s| s.saturating_add(self.duration_ms))
    }

    /// Остаток времени. До старта — вся длительность, после дедлайна — 0.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.deadline_ms() {
            None => self.duration_ms,
            Some(deadline) => deadline.saturating_sub(now_ms),
        }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.remaining_ms(now_ms) == 0
    }
}

/// Текущее wall-clock время в мс. Часы до 1970 года считаем нулём.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
