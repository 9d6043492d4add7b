//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_equity::domain::*;

/// Card/Suit/Rank: Display + FromStr roundtrip.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),    // Ah
        Card::new(Rank::Ten, Suit::Spades),    // Ts
        Card::new(Rank::Two, Suit::Clubs),     // 2c
        Card::new(Rank::Nine, Suit::Diamonds), // 9d
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }
}

/// Строгий парсер: всё, что не "ранг+масть", — InvalidCard.
#[test]
fn card_parse_rejects_malformed_strings() {
    for bad in ["", "A", "Xx", "1c", "10h", "Asd", "as", "AS", "A♠", " As"] {
        let err = bad.parse::<Card>().expect_err(bad);
        assert_eq!(err, CardParseError::InvalidCard(bad.to_string()));
    }
}

#[test]
fn parse_cards_stops_at_first_bad_card() {
    let ok = parse_cards(&["As", "Td", "2h"]).unwrap();
    assert_eq!(
        ok,
        vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Hearts),
        ]
    );

    let err = parse_cards(&["As", "Zz", "Qq"]).unwrap_err();
    assert_eq!(err, CardParseError::InvalidCard("Zz".into()));
}

/// Индексы 0..52 уникальны и обратимы.
#[test]
fn card_index_is_a_bijection() {
    let mut seen = HashSet::new();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(rank, suit);
            let idx = card.index();
            assert!(idx < 52);
            assert!(seen.insert(idx), "index {idx} used twice");
            assert_eq!(Card::from_index(idx), Some(card));
        }
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(Card::from_index(52), None);
}

#[test]
fn card_from_asset_name_strips_extension() {
    assert_eq!(Card::from_asset_name("As.png").unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(Card::from_asset_name("Td.jpg").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(Card::from_asset_name(" 7c.png ").unwrap(), Card::new(Rank::Seven, Suit::Clubs));
    assert_eq!(Card::from_asset_name("Kh").unwrap(), Card::new(Rank::King, Suit::Hearts));

    assert!(Card::from_asset_name("Xx.png").is_err());
    assert!(Card::from_asset_name("Asx.png").is_err());
    assert!(Card::from_asset_name(".png").is_err());
}

#[test]
fn rank_from_value_and_index() {
    assert_eq!(Rank::from_value(2), Some(Rank::Two));
    assert_eq!(Rank::from_value(14), Some(Rank::Ace));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
    assert_eq!(Rank::Two.index(), 0);
    assert_eq!(Rank::Ace.index(), 12);
}

//
// ---- CardSet ----
//

#[test]
fn card_set_insert_remove_contains() {
    let as_ = Card::new(Rank::Ace, Suit::Spades);
    let kd = Card::new(Rank::King, Suit::Diamonds);

    let mut set = CardSet::new();
    assert!(set.is_empty());

    assert!(set.insert(as_));
    assert!(!set.insert(as_), "повторная вставка должна вернуть false");
    assert!(set.insert(kd));
    assert_eq!(set.len(), 2);
    assert!(set.contains(as_) && set.contains(kd));

    assert!(set.remove(as_));
    assert!(!set.remove(as_));
    assert!(!set.contains(as_));
    assert_eq!(set.len(), 1);
}

#[test]
fn card_set_from_cards_reports_duplicate() {
    let cards = parse_cards(&["As", "Kd", "Qh"]).unwrap();
    let set = CardSet::from_cards(&cards).unwrap();
    assert_eq!(set.len(), 3);

    let dup = parse_cards(&["As", "Kd", "As"]).unwrap();
    assert_eq!(CardSet::from_cards(&dup), Err(Card::new(Rank::Ace, Suit::Spades)));
}

#[test]
fn card_set_complement_is_the_remaining_universe() {
    let known = CardSet::from_cards(&parse_cards(&["As", "Ad", "Kd", "Qd", "Jd"]).unwrap()).unwrap();
    let rest = known.complement();

    assert_eq!(rest.len(), 47);
    assert!(rest.is_disjoint(&known));
    assert_eq!(rest.union(&known), CardSet::FULL);
    assert_eq!(CardSet::FULL.len(), 52);
    assert_eq!(CardSet::EMPTY.complement(), CardSet::FULL);
}

#[test]
fn card_set_iter_is_ascending_by_index() {
    let set: CardSet = parse_cards(&["As", "2c", "Th"]).unwrap().into_iter().collect();
    let idx: Vec<u8> = set.iter().map(|c| c.index()).collect();
    assert_eq!(idx.len(), 3);
    assert!(idx.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(set.iter().next(), Some(Card::new(Rank::Two, Suit::Clubs)));
}

//
// ---- Deck ----
//

/// Deck: стандартная колода 52 карты, уникальные.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn deck_without_known_cards() {
    let known = parse_cards(&["As", "Ad", "Kd", "Qd", "Jd"]).unwrap();
    let deck = Deck::without(&CardSet::from_cards(&known).unwrap());

    assert_eq!(deck.len(), 47);
    for card in &known {
        assert!(!deck.cards.contains(card), "{card} должна быть удалена");
    }

    // тот же результат, что и удаление по значению
    let mut by_value = Deck::standard_52();
    by_value.remove_cards(&known);
    assert_eq!(by_value, deck);
}

#[test]
fn deck_draw_one_and_draw_n() {
    let mut deck = Deck::standard_52();

    let top = deck.draw_one().unwrap();
    assert_eq!(top, Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(deck.len(), 51);

    let three = deck.draw_n(3).unwrap();
    assert_eq!(three.len(), 3);
    assert_eq!(three[0], Card::new(Rank::King, Suit::Spades));
    assert_eq!(deck.len(), 48);

    // больше, чем осталось — None, колода не меняется
    assert!(deck.draw_n(49).is_none());
    assert_eq!(deck.len(), 48);
}

#[test]
fn hand_rank_worst_is_below_any_real_hand() {
    let weakest = poker_equity::evaluate(&parse_cards(&["2c", "3d", "4h", "5s", "7c"]).unwrap()).unwrap();
    assert!(HandRank::WORST < weakest);
}
