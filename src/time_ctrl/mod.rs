// src/time_ctrl/mod.rs
//! Контроль времени турнира (TIMER mode).
//!
//! Здесь собираем:
//! - таймер турнира (`TournamentClock`): сколько осталось до конца;
//! - чтение wall-clock (`now_ms`) для бинарников.
//!
//! Ядро само время не читает: `now` всегда приходит снаружи,
//! чтобы тесты могли гонять любые моменты времени.

pub mod clock;

pub use clock::{now_ms, TournamentClock};

use crate::domain::{PlayMode, TournamentConfig};

/// Сколько миллисекунд осталось до конца турнира.
///
/// - не TIMER — `None` (длина турнира ограничена раундами);
/// - турнир ещё не стартовал — полная длительность;
/// - иначе `max(0, started_at + minutes*60000 - now)`.
pub fn remaining_ms(config: &TournamentConfig, started_at: Option<u64>, now: u64) -> Option<u64> {
    match config.play_mode {
        PlayMode::Rounds => None,
        PlayMode::Timer => Some(TournamentClock::from_config(config, started_at).remaining_ms(now)),
    }
}

/// Вышло ли время. Вне TIMER — никогда.
pub fn is_expired(config: &TournamentConfig, started_at: Option<u64>, now: u64) -> bool {
    remaining_ms(config, started_at, now) == Some(0)
}
