// src/tournament/mod.rs
//! Рантайм турнира поверх снапшота `TournamentState`
//! и сервис, который держит снапшоты в хранилище.

pub mod runtime;
pub mod service;

pub use runtime::TournamentRuntime;
pub use service::TournamentService;
