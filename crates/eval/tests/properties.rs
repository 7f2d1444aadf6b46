// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ordering and selection properties checked on sampled hands.
use rand::prelude::*;
use std::cmp::Ordering;

use showdown_eval::{compare::*, subsets::for_each_subset, value::HAND_SIZE, *};

const SAMPLES: usize = 2_000;

fn sample(rng: &mut StdRng, n: usize) -> Vec<Card> {
    Deck::new_and_shuffled(rng).deal_many(n)
}

fn sample_hand(rng: &mut StdRng, n: usize) -> Hand {
    Hand::new(sample(rng, n)).unwrap()
}

#[test]
fn five_cards_categories() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let hand = sample_hand(&mut rng, HAND_SIZE);
        let value = hand.value().unwrap();
        assert!((1..=10).contains(&hand.category_code()));

        let values = value.tie_break().values();
        match value.rank() {
            HandRank::RoyalFlush => assert_eq!(values, [10, 11, 12, 13, 14]),
            HandRank::Flush | HandRank::Straight | HandRank::StraightFlush => {
                assert_eq!(values.len(), HAND_SIZE)
            }
            HandRank::FourOfAKind | HandRank::FullHouse => assert_eq!(values.len(), 2),
            HandRank::ThreeOfAKind | HandRank::TwoPair => assert_eq!(values.len(), 3),
            HandRank::OnePair => assert_eq!(values.len(), 4),
            HandRank::HighCard => assert_eq!(values.len(), 5),
        }
    }
}

#[test]
fn royal_flush_is_ace_high_straight_flush() {
    for suit in Suit::suits() {
        let cards = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
            .map(|r| Card::new(r, suit));
        let value = HandValue::eval(&cards).unwrap();
        assert_eq!(value.rank(), HandRank::RoyalFlush);

        // King high is a plain straight flush.
        let cards = [Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
            .map(|r| Card::new(r, suit));
        assert_eq!(HandValue::eval(&cards).unwrap().rank(), HandRank::StraightFlush);
    }
}

#[test]
fn straights_order() {
    // All ten straights from the wheel up to broadway, mixed suits.
    let straights = (5..=14u8)
        .map(|high| {
            let cards = (0..5)
                .map(|i| {
                    let value = if high == 5 && i == 4 { 14 } else { high - i };
                    let suit = if i == 0 { Suit::Clubs } else { Suit::Hearts };
                    Card::new(Rank::from_value(value).unwrap(), suit)
                })
                .collect::<Vec<_>>();
            Hand::new(cards).unwrap()
        })
        .collect::<Vec<_>>();

    for (idx, hand) in straights.iter().enumerate() {
        assert_eq!(hand.rank(), Some(HandRank::Straight), "{hand}");
        for other in &straights[idx + 1..] {
            assert_eq!(compare_hands(hand, other), Ok(Ordering::Less));
        }
    }
}

#[test]
fn total_order() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let a = sample_hand(&mut rng, 7);
        let b = sample_hand(&mut rng, 7);
        let c = sample_hand(&mut rng, 6);
        let (va, vb, vc) = (a.value().unwrap(), b.value().unwrap(), c.value().unwrap());

        // Reflexive.
        assert_eq!(compare_values(va, va), Ordering::Equal);
        assert!(a == a);

        // Antisymmetric.
        assert_eq!(compare_values(va, vb), compare_values(vb, va).reverse());
        assert_eq!(a == b, !(a != b));
        assert_eq!(a <= b, b >= a);

        // Transitive.
        if va <= vb && vb <= vc {
            assert!(va <= vc);
        }
        if va >= vb && vb >= vc {
            assert!(va >= vc);
        }

        // Category always wins.
        if va.rank() != vb.rank() {
            assert_eq!(compare_values(va, vb), va.rank().cmp(&vb.rank()));
        }
    }
}

#[test]
fn sorting_is_consistent() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut values = (0..SAMPLES)
        .map(|_| sample_hand(&mut rng, 7).value().cloned().unwrap())
        .collect::<Vec<_>>();
    values.sort();

    for w in values.windows(2) {
        assert_ne!(compare_values(&w[0], &w[1]), Ordering::Greater);
        assert!(w[0].rank() <= w[1].rank());
    }

    let max = values.iter().max().unwrap();
    assert_eq!(max, values.last().unwrap());
}

#[test]
fn best_of_seven_is_maximum() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES / 4 {
        let cards = sample(&mut rng, 7);
        let hand = Hand::new(cards.clone()).unwrap();
        let best = hand.value().unwrap();

        let mut subsets = 0;
        let mut found = false;
        for_each_subset(cards.len(), 0, usize::MAX, |s| {
            let value = HandValue::eval(&s.map(|p| cards[p])).unwrap();
            assert!(best >= &value);
            found |= best == &value;
            subsets += 1;
        });

        assert_eq!(subsets, 21);
        assert!(found);
    }
}

#[test]
fn merge_is_commutative() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES / 4 {
        let pocket = sample(&mut rng, 2);
        let board = sample(&mut rng, 5)
            .into_iter()
            .filter(|c| !pocket.contains(c))
            .collect::<Vec<_>>();

        let lhs = Hand::from_parts(&pocket, &board).unwrap();
        let rhs = Hand::from_parts(&board, &pocket).unwrap();
        assert_eq!(compare_hands(&lhs, &rhs), Ok(Ordering::Equal));
        assert_eq!(lhs.category_code(), rhs.category_code());
        assert_eq!(lhs.tie_break(), rhs.tie_break());
    }
}

#[test]
fn worked_examples() {
    let royal: Hand = "10♠ J♠ Q♠ K♠ A♠".parse().unwrap();
    assert_eq!(royal.category_code(), 10);
    assert_eq!(royal.rank().unwrap().name(), "Royal Flush");

    let full: Hand = "2♥ 2♦ 2♣ 5♠ 5♥".parse().unwrap();
    assert_eq!(full.category_code(), 7);
    assert_eq!(full.tie_break(), [5, 2]);

    let two_pair: Hand = "A♠ A♦ K♣ K♦ 2♥".parse().unwrap();
    let trips: Hand = "Q♠ Q♦ Q♣ 3♥ 4♥".parse().unwrap();
    assert_eq!(two_pair.category_code(), 3);
    assert_eq!(trips.category_code(), 4);
    assert!(trips > two_pair);

    let pocket: Hand = "A♠ A♦".parse().unwrap();
    assert_eq!(pocket.category_code(), 0);
    assert_eq!(
        compare_hands(&pocket, &trips),
        Err(EvalError::IncomparableOperands)
    );
    assert_eq!(pocket.partial_cmp(&trips), None);
}
