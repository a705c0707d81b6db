//! RngSeed — доменный seed для RNG планировщика.
//!
//! Позволяет:
//!   - хранить базовый seed турнира (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || base || tournament_id || round_index)
//!   - создавать DeterministicRng из seed
//!
//! Так весь турнир воспроизводится из одного числа, и генерация раунда N
//! не зависит от того, сколько случайности съели раунды до него.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::TournamentId;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда конкретного турнира.
    pub fn derive(&self, tournament_id: TournamentId, round_index: u32) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"PADEL_SCHEDULER_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(tournament_id.to_le_bytes());
        hasher.update(round_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
