use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::EquityError;

pub const DEFAULT_TRIALS: u32 = 10_000;
pub const DEFAULT_BATCH_SIZE: u32 = 1_000;

/// Параметры прогона симуляции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Количество симуляций (раздач).
    pub trials: u32,
    /// Базовый seed. `None` — системная энтропия.
    pub seed: Option<u64>,
    /// Размер батча: единица параллельной работы, у каждого батча свой RNG.
    pub batch_size: u32,
    /// Раскидывать батчи по пулу rayon.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_trials(trials: u32) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), EquityError> {
        if self.trials == 0 {
            return Err(EquityError::InvalidTrialCount);
        }
        if self.batch_size == 0 {
            return Err(EquityError::Config("batch_size должен быть положительным".into()));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, EquityError> {
        let config: Self = serde_json::from_str(json).map_err(|e| EquityError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EquityError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EquityError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}
