use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки оценщика: на вход пришла не рука.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Рука должна содержать от 5 до 7 карт, получено {len}")]
    InvalidHand { len: usize },

    #[error("Карта {0} встречается в руке больше одного раза")]
    DuplicateCard(Card),
}
