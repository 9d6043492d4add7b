use thiserror::Error;

use crate::engine::EquityError;
use crate::infra::ProblemError;

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("Догадка {0}% вне диапазона 0..=100")]
    GuessOutOfRange(u32),

    #[error("Догадка {guess}% не кратна шагу {step}%")]
    GuessOffStep { guess: u8, step: u8 },

    #[error("Некорректная конфигурация тренажёра: {0}")]
    Config(String),

    #[error("Нет задач для тренировки")]
    NoProblems,

    #[error(transparent)]
    Problem(#[from] ProblemError),

    #[error(transparent)]
    Equity(#[from] EquityError),
}
