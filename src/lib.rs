//! Монте-Карло оценка эквити покерной руки (Texas Hold'em).
//!
//! Слои:
//! - `domain` — карты, множества карт, колода, сила руки;
//! - `eval` — оценщик 5–7 карточных рук;
//! - `engine` — симулятор эквити;
//! - `infra` — RNG, seed, набор задач;
//! - `api` — DTO для внешних коллабораторов;
//! - `trainer` — тренажёр оценки эквити.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod trainer;

pub use domain::{Card, CardSet, HandRank, Rank, Suit};
pub use engine::{compute_equity, compute_equity_seeded, EquityError, EquityRequest, SimulationConfig, SimulationResult};
pub use eval::{evaluate, HandCategory};
