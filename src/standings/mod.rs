// src/standings/mod.rs
//! Таблица: агрегация очков из истории, head-to-head и сортировка.
//!
//! Ничего не хранит: всё считается заново из раундов. Поэтому
//! `recompute_standings` идемпотентна и может вызываться сколько угодно раз.

pub mod aggregate;
pub mod ranking;
pub mod score;

pub use aggregate::recompute_standings;
pub use ranking::{compare_standings, rank_by, rank_players, rank_teams, HeadToHead};
pub use score::{is_valid_sum, set_score};
