use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::card_set::CardSet;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание/выборку делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода без известных карт: разность множеств над 52-карточным универсумом.
    /// Порядок тот же, что у `standard_52`.
    pub fn without(known: &CardSet) -> Self {
        Deck {
            cards: known.complement().iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху. Если карт не хватает — `None`, колода не трогается.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        let at = self.cards.len() - n;
        let mut taken = self.cards.split_off(at);
        taken.reverse();
        Some(taken)
    }

    /// Убрать из колоды уже известные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        let known: CardSet = to_remove.iter().copied().collect();
        self.cards.retain(|c| !known.contains(*c));
    }
}
