use serde::{Deserialize, Serialize};

/// Сила руки. Чем больше значение — тем сильнее рука.
///
/// Заполняется модулем eval (категория + ранги, упакованные в u32).
/// Равные значения означают точную ничью.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

impl HandRank {
    /// Слабее любой реальной руки. Стартовое значение для поиска максимума.
    pub const WORST: HandRank = HandRank(0);

    pub const fn value(&self) -> u32 {
        self.0
    }
}
