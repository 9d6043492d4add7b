use serde::{Deserialize, Serialize};

use crate::engine::config::DEFAULT_TRIALS;

use super::errors::TrainerError;

/// Параметры тренажёра.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrainerConfig {
    /// Сколько вопросов за сессию.
    pub questions: usize,
    /// Симуляций на один вопрос.
    pub trials: u32,
    pub min_opponents: u32,
    pub max_opponents: u32,
    /// Шаг допустимой догадки в процентах.
    pub guess_step: u8,
    /// Догадка считается близкой, если ошибка строго меньше этого порога.
    pub tolerance: u8,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            questions: 5,
            trials: DEFAULT_TRIALS,
            min_opponents: 1,
            max_opponents: 4,
            guess_step: 10,
            tolerance: 10,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), TrainerError> {
        if self.min_opponents == 0 || self.min_opponents > self.max_opponents {
            return Err(TrainerError::Config(format!(
                "диапазон соперников {}..={} некорректен",
                self.min_opponents, self.max_opponents
            )));
        }
        if self.trials == 0 {
            return Err(TrainerError::Config("trials должен быть положительным".into()));
        }
        if self.guess_step == 0 || self.guess_step > 100 {
            return Err(TrainerError::Config(format!("шаг догадки {} некорректен", self.guess_step)));
        }
        Ok(())
    }

    /// Проверить догадку игрока: 0..=100 и кратна шагу.
    pub fn check_guess(&self, guess: u32) -> Result<u8, TrainerError> {
        if self.guess_step == 0 {
            return Err(TrainerError::Config("шаг догадки должен быть положительным".into()));
        }
        if guess > 100 {
            return Err(TrainerError::GuessOutOfRange(guess));
        }
        let guess = guess as u8;
        if guess % self.guess_step != 0 {
            return Err(TrainerError::GuessOffStep {
                guess,
                step: self.guess_step,
            });
        }
        Ok(guess)
    }
}
