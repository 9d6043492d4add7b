use serde::{Deserialize, Serialize};

use super::config::TrainerConfig;

/// Результат одной догадки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: u8,
    pub actual: u8,
    /// |guess - actual| в процентных пунктах.
    pub error: u8,
    /// Ошибка строго меньше порога.
    pub close_enough: bool,
}

/// Состояние тренировочной сессии: история ошибок игрока.
///
/// Принадлежит контроллеру (CLI/UI) и передаётся явно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainerSession {
    tolerance: u8,
    errors: Vec<u8>,
}

impl Default for TrainerSession {
    fn default() -> Self {
        Self::new(TrainerConfig::default().tolerance)
    }
}

impl TrainerSession {
    pub fn new(tolerance: u8) -> Self {
        Self {
            tolerance,
            errors: Vec::new(),
        }
    }

    pub fn record_guess(&mut self, guess: u8, actual: u8) -> GuessOutcome {
        let error = guess.abs_diff(actual);
        self.errors.push(error);
        GuessOutcome {
            guess,
            actual,
            error,
            close_enough: error < self.tolerance,
        }
    }

    pub fn errors(&self) -> &[u8] {
        &self.errors
    }

    pub fn answered(&self) -> usize {
        self.errors.len()
    }

    /// Средняя ошибка; `None`, пока не было ни одной догадки.
    pub fn average_error(&self) -> Option<f64> {
        if self.errors.is_empty() {
            return None;
        }
        let total: u32 = self.errors.iter().map(|&e| e as u32).sum();
        Some(total as f64 / self.errors.len() as f64)
    }
}
