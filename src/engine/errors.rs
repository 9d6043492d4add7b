use thiserror::Error;

use crate::domain::card::{Card, CardParseError};
use crate::eval::EvalError;

/// Ошибки симулятора эквити.
///
/// Все варианты — ошибки входных данных, обнаруживаются до начала симуляции.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EquityError {
    #[error(transparent)]
    InvalidCard(#[from] CardParseError),

    #[error("Карта {0} указана больше одного раза")]
    DuplicateCard(Card),

    #[error("В колоде осталось {available} карт, а для раздачи нужно {needed}")]
    InsufficientCards { needed: usize, available: usize },

    #[error(transparent)]
    InvalidHand(#[from] EvalError),

    #[error("У игрока должно быть ровно 2 карты, получено {0}")]
    InvalidHoleCards(usize),

    #[error("На борде может быть не больше 5 карт, получено {0}")]
    InvalidBoardSize(usize),

    #[error("Количество симуляций должно быть положительным")]
    InvalidTrialCount,

    #[error("Количество соперников должно быть положительным")]
    InvalidOpponentCount,

    #[error("Некорректная конфигурация: {0}")]
    Config(String),
}
