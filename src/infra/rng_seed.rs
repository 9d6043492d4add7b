//! RngSeed — доменный seed для симуляций.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding для батчей симуляции:
//!         new = H(domain || base || batch_index)
//!   - создавать DeterministicRng из seed
//!
//! Каждый батч получает свой независимый поток, и результат
//! не зависит от того, сколько потоков реально работало.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для CLI и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Свежий seed из системной энтропии.
    pub fn random() -> Self {
        let mut b = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut b);
        Self { bytes: b }
    }

    /// Seed для батча с номером `batch_index`.
    pub fn derive(&self, batch_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"POKER_EQUITY_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(batch_index.to_le_bytes());

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
