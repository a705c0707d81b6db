use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Очки в матче. Обёртка над u32, чтобы не путать со счётчиками игр и индексами.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(pub u32);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn new(amount: u32) -> Self {
        Points(amount)
    }

    /// Ввод с фронта может быть любым (отрицательным, огромным) —
    /// зажимаем в [0, max].
    pub fn clamped(raw: i64, max: u32) -> Self {
        Points(raw.clamp(0, i64::from(max)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl core::fmt::Display for Points {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
