//! Инфраструктурный слой вокруг симулятора:
//! - RNG-реализации для движка;
//! - seed и его детерминированное расширение по батчам;
//! - загрузка набора задач для тренажёра.

pub mod problems;
pub mod rng;
pub mod rng_seed;

pub use problems::{Problem, ProblemError, ProblemSet};
pub use rng::*;
pub use rng_seed::RngSeed;
