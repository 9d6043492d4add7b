use crate::domain::card::{Card, Rank, Suit};
use crate::domain::card_set::CardSet;
use crate::domain::hand::HandRank;

use super::errors::EvalError;
use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Оценить руку из 5–7 различных карт: сила лучшей 5-карточной комбинации.
///
/// Порядок карт на результат не влияет.
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidHand { len: cards.len() });
    }
    CardSet::from_cards(cards).map_err(EvalError::DuplicateCard)?;

    Ok(best_of_all_5card_combinations(cards))
}

/// Вычислить лучшую 5-карточную руку из hole + board.
///
/// Обычно `hole.len() == 2`, `board.len()` от 3 до 5,
/// но в целом функция корректно работает для любых 5–7 карт.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandRank, EvalError> {
    let len = hole.len() + board.len();
    if !(5..=7).contains(&len) {
        return Err(EvalError::InvalidHand { len });
    }

    let mut buf = [Card::new(Rank::Two, Suit::Clubs); 7];
    for (slot, card) in buf.iter_mut().zip(hole.iter().chain(board.iter())) {
        *slot = *card;
    }
    evaluate(&buf[..len])
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
///
/// Вход уже проверен: 5..=7 карт без повторов. Горячий путь симуляции.
pub(crate) fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();
    debug_assert!((5..=7).contains(&n));

    let mut best = HandRank::WORST;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = evaluate_5cards(&five);
                        if r > best {
                            best = r;
                        }
                    }
                }
            }
        }
    }

    best
}

/// Группа одинаковых рангов внутри 5-карточной руки.
#[derive(Clone, Copy)]
struct RankCount {
    count: u8,
    rank: Rank,
}

/// Оценка строго 5-карточной комбинации. Без аллокаций.
pub fn evaluate_5cards(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 13];
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        rank_counts[card.rank.index() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(rank_mask);

    // (count, rank) по присутствующим рангам, от туза к двойке.
    let mut groups = [RankCount { count: 0, rank: Rank::Two }; 5];
    let mut n = 0;
    for rank in Rank::ALL.iter().rev() {
        let count = rank_counts[rank.index() as usize];
        if count > 0 {
            groups[n] = RankCount { count, rank: *rank };
            n += 1;
        }
    }
    let groups = &mut groups[..n];

    // Сначала по количеству (desc), затем по рангу (desc).
    groups.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| b.rank.cmp(&a.rank)));

    // Значимые ранги в порядке сравнения; хвост забиваем двойками (он одинаков внутри категории).
    let mut ranks = [Rank::Two; 5];
    for (slot, g) in ranks.iter_mut().zip(groups.iter()) {
        *slot = g.rank;
    }

    let category = match (is_flush, straight_high, n, groups[0].count) {
        (true, Some(high), _, _) => {
            return HandRank::from_category_and_ranks(HandCategory::StraightFlush, straight_rank_array(high));
        }
        (_, _, 2, 4) => HandCategory::FourOfAKind,
        (_, _, 2, 3) => HandCategory::FullHouse,
        (true, None, _, _) => HandCategory::Flush,
        (false, Some(high), _, _) => {
            return HandRank::from_category_and_ranks(HandCategory::Straight, straight_rank_array(high));
        }
        (_, _, 3, 3) => HandCategory::ThreeOfAKind,
        (_, _, 3, _) => HandCategory::TwoPair,
        (_, _, 4, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRank::from_category_and_ranks(category, ranks)
}

/// Построить массив рангов [r0..r4] для стрита с заданной старшей картой.
fn straight_rank_array(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        // wheel: A2345, туз внизу
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let top = high as u8;
    let r = |offset: u8| Rank::from_value(top - offset).unwrap_or(Rank::Two);
    [r(0), r(1), r(2), r(3), r(4)]
}
