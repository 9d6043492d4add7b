//! Доменная модель: карты, множества карт, колода, сила руки.

pub mod card;
pub mod card_set;
pub mod deck;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use card_set::*;
pub use deck::*;
pub use hand::*;
