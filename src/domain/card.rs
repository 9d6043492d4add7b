use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Индекс масти 0..4 (порядок как в `Suit::ALL`).
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// От двойки к тузу.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Числовое значение 2..=14 → Rank.
    pub const fn from_value(v: u8) -> Option<Self> {
        if v >= 2 && v <= 14 {
            Some(Self::ALL[(v - 2) as usize])
        } else {
            None
        }
    }

    /// Индекс ранга 0..13 (двойка = 0, туз = 12).
    pub const fn index(self) -> u8 {
        self as u8 - 2
    }

    fn from_char(ch: char) -> Option<Self> {
        let rank = match ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// Ошибка разбора строкового представления карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Некорректная карта {0:?}: ожидается ранг (2-9,T,J,Q,K,A) и масть (s,h,d,c)")]
    InvalidCard(String),
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Компактный индекс 0..52: `suit * 13 + rank`.
    /// Используется как ключ в `CardSet`.
    pub const fn index(self) -> u8 {
        self.suit.index() * 13 + self.rank.index()
    }

    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx >= 52 {
            return None;
        }
        Some(Card {
            rank: Rank::ALL[(idx % 13) as usize],
            suit: Suit::ALL[(idx / 13) as usize],
        })
    }

    /// Карта из имени файла-картинки в наборе задач: `"As.png"` → A♠.
    ///
    /// Отрезаем расширение и строго парсим то, что осталось.
    pub fn from_asset_name(name: &str) -> Result<Self, CardParseError> {
        let name = name.trim();
        let stem = match name.rsplit_once('.') {
            Some((stem, _ext)) => stem,
            None => name,
        };
        stem.parse::<Card>()
            .map_err(|_| CardParseError::InvalidCard(name.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c".
///
/// Строго два символа: ранг в верхнем регистре, масть в нижнем.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardParseError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(r_ch).ok_or_else(invalid)?;
        let suit = Suit::from_char(s_ch).ok_or_else(invalid)?;

        Ok(Card { rank, suit })
    }
}

/// Разобрать список строковых карт. Первая же битая строка — ошибка.
pub fn parse_cards<S: AsRef<str>>(items: &[S]) -> Result<Vec<Card>, CardParseError> {
    items.iter().map(|s| s.as_ref().parse::<Card>()).collect()
}
