//! Тренажёр оценки эквити на флопе.
//!
//! Контроллер (CLI) тянет случайную задачу, показывает руку и флоп,
//! принимает догадку игрока и сравнивает её с результатом симулятора.
//! История ошибок живёт в `TrainerSession`, которую контроллер держит сам.

pub mod config;
pub mod errors;
pub mod question;
pub mod session;

pub use config::TrainerConfig;
pub use errors::TrainerError;
pub use question::DrawnQuestion;
pub use session::{GuessOutcome, TrainerSession};
