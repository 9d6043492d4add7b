use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Маска всех 52 карт.
const FULL_MASK: u64 = (1u64 << 52) - 1;

/// Множество карт как 52-битная маска (бит = `Card::index()`).
///
/// Вставка, удаление и проверка членства — O(1), без аллокаций.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    pub const EMPTY: CardSet = CardSet(0);
    pub const FULL: CardSet = CardSet(FULL_MASK);

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Добавить карту. `false`, если она уже была в множестве.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Убрать карту. `false`, если её не было.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Оставшаяся часть 52-карточного универсума.
    pub fn complement(&self) -> Self {
        CardSet(!self.0 & FULL_MASK)
    }

    pub fn union(&self, other: &CardSet) -> Self {
        CardSet(self.0 | other.0)
    }

    pub fn is_disjoint(&self, other: &CardSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Собрать множество из списка карт.
    /// При повторе возвращает первую встреченную дублирующуюся карту.
    pub fn from_cards(cards: &[Card]) -> Result<Self, Card> {
        let mut set = CardSet::new();
        for &card in cards {
            if !set.insert(card) {
                return Err(card);
            }
        }
        Ok(set)
    }

    /// Карты по возрастанию индекса.
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Card::from_index(idx)
        })
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}
