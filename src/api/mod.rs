//! Внешний API планировщика.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет снапшот (ростер, конфиг, раунды, счёт);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - диспетчер (handler.rs) — применение команды/запроса к снапшоту.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::*;
pub use queries::*;
