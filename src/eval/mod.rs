//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(cards) -> Result<HandRank, EvalError>`
//!   `evaluate_best_hand(hole, board) -> Result<HandRank, EvalError>`
//!
//! Оценщик без состояния: чистая функция от набора карт,
//! безопасно вызывать из нескольких потоков.

pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use errors::EvalError;
pub use evaluator::{evaluate, evaluate_5cards, evaluate_best_hand};
pub use hand_rank::{describe_hand, HandCategory};

pub(crate) use evaluator::best_of_all_5card_combinations;
