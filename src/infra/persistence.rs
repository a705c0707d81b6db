use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{TournamentId, TournamentState};

/// Ошибки слоя хранения.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Tournament snapshot not found: id={0}")]
    NotFound(TournamentId),

    #[error("Snapshot (de)serialization failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Снапшот -> JSON.
pub fn to_json(state: &TournamentState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

/// JSON -> снапшот.
pub fn from_json(raw: &str) -> Result<TournamentState, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Абстракция хранилища снапшотов.
///
/// Ядро планировщика про хранение ничего не знает: оно получает снапшот
/// и возвращает новый. Сохранять/загружать — забота вызывающего.
/// Если ядро крутится в многопользовательском сервере, то вызывающий же
/// сериализует "next round" / "set score" по одному турниру.
pub trait TournamentStorage {
    /// Загрузить снапшот турнира.
    fn load(&self, id: TournamentId) -> Result<TournamentState, StorageError>;

    /// Сохранить снапшот турнира (перезаписывает старый).
    fn save(&mut self, id: TournamentId, state: &TournamentState) -> Result<(), StorageError>;

    /// Удалить снапшот. Отсутствующий id — не ошибка.
    fn remove(&mut self, id: TournamentId);
}

/// In-memory реализация для тестов и dev-CLI.
///
/// Хранит снапшоты как JSON-блобы, как это делает настоящий внешний storage.
#[derive(Debug, Default)]
pub struct InMemoryTournamentStorage {
    blobs: HashMap<TournamentId, String>,
}

impl InMemoryTournamentStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl TournamentStorage for InMemoryTournamentStorage {
    fn load(&self, id: TournamentId) -> Result<TournamentState, StorageError> {
        let raw = self.blobs.get(&id).ok_or(StorageError::NotFound(id))?;
        from_json(raw)
    }

    fn save(&mut self, id: TournamentId, state: &TournamentState) -> Result<(), StorageError> {
        let raw = to_json(state)?;
        self.blobs.insert(id, raw);
        Ok(())
    }

    fn remove(&mut self, id: TournamentId) {
        self.blobs.remove(&id);
    }
}
