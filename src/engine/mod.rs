//! Планировщик раундов: кто играет, кто отдыхает, кто с кем в паре.
//!
//! Высокоуровневый объект: `RoundBuilder`
//! Основные операции:
//!   - `build_round` – собрать следующий раунд по истории
//!   - `auto_round_count` – AUTO-число раундов для конфига
//!   - `HistoryStats::compute` – агрегаты по прошлым раундам
//!
//! Всё здесь — чистые функции над снапшотом, единственная внешняя
//! зависимость — `RandomSource`.

pub mod history;
pub mod pairing;
pub mod planner;
pub mod round_builder;
pub mod round_robin;
pub mod selection;

pub use history::{HistoryStats, PairKey};
pub use pairing::{PairingWeights, Split, PAIRING_ATTEMPTS};
pub use planner::{auto_round_count, auto_target_games_americano, max_matches_per_round, planned_rounds, AmericanoPlan};
pub use round_builder::{build_round, RoundBuilder};

/// RNG интерфейс для engine.
/// Реализации в infra (обёртки над `rand`), в тестах — `DeterministicRng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
