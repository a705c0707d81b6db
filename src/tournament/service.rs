// src/tournament/service.rs

use log::info;

use crate::api::{self, ApiError, Command, CommandResponse, Query, QueryResponse};
use crate::domain::{TournamentConfig, TournamentId, TournamentState};
use crate::engine::RandomSource;
use crate::infra::TournamentStorage;

use super::TournamentRuntime;

/// Сервис турниров: load -> apply -> save.
///
/// Один вызов `execute` — одна транзакция над одним турниром: снапшот
/// сохраняется только если команда прошла. Параллельный доступ к одному
/// турниру должен сериализовать вызывающий (например, мьютекс на id).
pub struct TournamentService<S: TournamentStorage> {
    storage: S,
    runtime: TournamentRuntime,
    next_id: TournamentId,
}

impl<S: TournamentStorage> TournamentService<S> {
    pub fn new(storage: S) -> Self {
        Self::with_runtime(storage, TournamentRuntime::default())
    }

    pub fn with_runtime(storage: S, runtime: TournamentRuntime) -> Self {
        Self {
            storage,
            runtime,
            next_id: 1,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Создать пустой турнир с конфигом.
    pub fn create(&mut self, config: TournamentConfig) -> Result<TournamentId, ApiError> {
        let state = TournamentState::new(config)?;

        let id = self.next_id;
        self.storage.save(id, &state)?;
        self.next_id += 1;

        info!("tournament {} created", id);
        Ok(id)
    }

    /// Загрузить снапшот.
    pub fn snapshot(&self, id: TournamentId) -> Result<TournamentState, ApiError> {
        Ok(self.storage.load(id)?)
    }

    /// Применить команду и сохранить результат.
    pub fn execute<R: RandomSource>(
        &mut self,
        id: TournamentId,
        command: Command,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<CommandResponse, ApiError> {
        let state = self.storage.load(id)?;
        let (next, response) = api::apply_command(&self.runtime, &state, command, rng, now_ms)?;
        self.storage.save(id, &next)?;
        Ok(response)
    }

    pub fn query(&self, id: TournamentId, query: Query, now_ms: u64) -> Result<QueryResponse, ApiError> {
        let state = self.storage.load(id)?;
        api::run_query(&state, query, now_ms)
    }

    /// Удалить турнир.
    pub fn remove(&mut self, id: TournamentId) {
        self.storage.remove(id);
    }
}
