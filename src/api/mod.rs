//! Внешний API симулятора.
//!
//! Здесь описываются:
//! - запросы (queries.rs) — посчитать эквити по строковым картам;
//! - DTO (dto.rs) — сериализуемые структуры для коллабораторов;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
