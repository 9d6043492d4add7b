use serde::Serialize;

use crate::domain::card::{parse_cards, Card};
use crate::domain::card_set::CardSet;

use super::errors::EquityError;

/// Максимум карт на борде.
pub const BOARD_SIZE: usize = 5;

/// Проверенная постановка задачи для симулятора:
/// карты игрока, известная часть борда и число соперников.
///
/// Создаётся только через `new`/`from_strs`, поэтому внутри всегда
/// различные карты и достаточно колоды на добор борда и руки соперников.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EquityRequest {
    hole: [Card; 2],
    board: Vec<Card>,
    opponents: u32,
    known: CardSet,
}

impl EquityRequest {
    pub fn new(hole: [Card; 2], board: &[Card], opponents: u32) -> Result<Self, EquityError> {
        if board.len() > BOARD_SIZE {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }
        if opponents == 0 {
            return Err(EquityError::InvalidOpponentCount);
        }

        let mut known = CardSet::new();
        for &card in hole.iter().chain(board.iter()) {
            if !known.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }
        }

        let needed = (BOARD_SIZE - board.len()).saturating_add((opponents as usize).saturating_mul(2));
        let available = known.complement().len();
        if needed > available {
            return Err(EquityError::InsufficientCards { needed, available });
        }

        Ok(Self {
            hole,
            board: board.to_vec(),
            opponents,
            known,
        })
    }

    /// Постановка из строкового формата карт (`"As"`, `"Td"`, ...).
    pub fn from_strs<S: AsRef<str>>(hole: &[S], board: &[S], opponents: u32) -> Result<Self, EquityError> {
        let hole = parse_cards(hole)?;
        let board = parse_cards(board)?;
        let hole: [Card; 2] = hole
            .as_slice()
            .try_into()
            .map_err(|_| EquityError::InvalidHoleCards(hole.len()))?;
        Self::new(hole, &board, opponents)
    }

    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn opponents(&self) -> u32 {
        self.opponents
    }

    /// Все известные карты (рука игрока + борд).
    pub fn known(&self) -> CardSet {
        self.known
    }

    /// Сколько карт добирается из колоды за одну симуляцию.
    pub fn cards_to_deal(&self) -> usize {
        self.board_cards_missing() + 2 * self.opponents as usize
    }

    pub fn board_cards_missing(&self) -> usize {
        BOARD_SIZE - self.board.len()
    }
}
