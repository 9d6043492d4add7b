use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// От слабейшей к сильнейшей.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 рангов (значимые — первыми).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 (2..A) влазит в 4 бита. Сравнение u32 = сравнение рук.
    pub fn from_category_and_ranks(category: HandCategory, ranks: [Rank; 5]) -> Self {
        let value = ranks
            .iter()
            .fold((category as u32) & 0x0F, |acc, r| (acc << 4) | (*r as u32));
        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(cat_id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Достать 5 рангов (в порядке значимости) из HandRank.
    pub fn ranks(&self) -> [Rank; 5] {
        let nibble = |shift: u32| Rank::from_value(((self.0 >> shift) & 0x0F) as u8).unwrap_or(Rank::Two);
        [nibble(16), nibble(12), nibble(8), nibble(4), nibble(0)]
    }
}

/// Человеческое описание руки: категория и значимые ранги.
pub fn describe_hand(rank: HandRank) -> String {
    let cat = rank.category();
    let r = rank.ranks();
    match cat {
        HandCategory::HighCard => format!("{}, {} high", cat.name(), r[0]),
        HandCategory::OnePair => format!("{} of {}s", cat.name(), r[0]),
        HandCategory::TwoPair => format!("{}, {}s and {}s", cat.name(), r[0], r[1]),
        HandCategory::ThreeOfAKind => format!("{}, {}s", cat.name(), r[0]),
        HandCategory::Straight => format!("{}, {} high", cat.name(), r[0]),
        HandCategory::Flush => format!("{}, {} high", cat.name(), r[0]),
        HandCategory::FullHouse => format!("{}, {}s full of {}s", cat.name(), r[0], r[1]),
        HandCategory::FourOfAKind => format!("{}, {}s", cat.name(), r[0]),
        HandCategory::StraightFlush => format!("{}, {} high", cat.name(), r[0]),
    }
}
