//! Планировщик турниров по падел-теннису (Americano / Mexicano).
//!
//! Слои:
//! - `domain` — игроки, команды, матчи, раунды, конфиг и снапшот турнира;
//! - `engine` — планировщик раундов: выбор игроков, разбиение на пары, AUTO-план;
//! - `standings` — таблица: агрегация очков, личные встречи, сортировка;
//! - `time_ctrl` — таймер турнира (TIMER mode);
//! - `tournament` — рантайм поверх снапшота и сервис с хранилищем;
//! - `infra` — RNG, seed, id, хранение снапшотов;
//! - `api` — команды, запросы, DTO.
//!
//! Ядро синхронное и без I/O: любая операция берёт снапшот и возвращает новый.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod standings;
pub mod time_ctrl;
pub mod tournament;

pub use api::{apply_command, run_query, ApiError, Command, CommandResponse, Query, QueryResponse};
pub use domain::{TournamentConfig, TournamentError, TournamentState};
pub use engine::{build_round, RandomSource, RoundBuilder};
pub use tournament::{TournamentRuntime, TournamentService};
