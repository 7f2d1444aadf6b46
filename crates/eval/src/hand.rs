// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards pool and its best five cards hand.
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    Card,
    compare::compare_hands,
    error::EvalError,
    parse_cards,
    rank::HandRank,
    select::{BestHand, best_hand},
    value::HandValue,
};

/// A pool of cards, classified by its best five cards once it has at least
/// five cards.
///
/// A hand is immutable, adding cards creates a new hand that is evaluated from
/// scratch.
///
/// ```
/// # use showdown_eval::*;
/// let pocket: Hand = "AS AD".parse().unwrap();
/// assert!(!pocket.is_classified());
/// assert_eq!(pocket.category_code(), 0);
///
/// let board = parse_cards("AH KC KD 2S 7H").unwrap();
/// let hand = pocket.with_cards(&board).unwrap();
/// assert_eq!(hand.rank(), Some(HandRank::FullHouse));
/// assert_eq!(hand.to_string(), "Full House [KC, KD, AD, AH, AS]");
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    best: Option<BestHand>,
}

impl Hand {
    /// Creates a hand from a cards pool.
    ///
    /// Fails if the pool contains the same card twice.
    pub fn new(cards: Vec<Card>) -> Result<Hand, EvalError> {
        let best = best_hand(&cards)?;
        Ok(Hand { cards, best })
    }

    /// Creates a hand splitting the best hand search between `num_tasks`
    /// parallel tasks.
    #[cfg(feature = "parallel")]
    pub fn par_new(cards: Vec<Card>, num_tasks: usize) -> Result<Hand, EvalError> {
        let best = crate::select::par_best_hand(&cards, num_tasks)?;
        Ok(Hand { cards, best })
    }

    /// Creates a hand from private cards and shared cards.
    pub fn from_parts(private: &[Card], shared: &[Card]) -> Result<Hand, EvalError> {
        Hand::new([private, shared].concat())
    }

    /// Returns a new hand with the cards of this hand followed by the cards of
    /// the other hand.
    pub fn merge(&self, other: &Hand) -> Result<Hand, EvalError> {
        Hand::from_parts(&self.cards, &other.cards)
    }

    /// Returns a new hand with the given cards added.
    pub fn with_cards(&self, cards: &[Card]) -> Result<Hand, EvalError> {
        Hand::from_parts(&self.cards, cards)
    }

    /// All the cards in the pool.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in the pool.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the hand has at least five cards.
    pub fn is_classified(&self) -> bool {
        self.best.is_some()
    }

    /// The best five cards hand.
    pub fn best(&self) -> Option<&BestHand> {
        self.best.as_ref()
    }

    /// The value of the best five cards hand.
    pub fn value(&self) -> Option<&HandValue> {
        self.best.as_ref().map(BestHand::value)
    }

    /// The hand category.
    pub fn rank(&self) -> Option<HandRank> {
        self.value().map(HandValue::rank)
    }

    /// The category code, 0 for hands with fewer than five cards.
    pub fn category_code(&self) -> u8 {
        self.rank().map(|r| r.code()).unwrap_or(0)
    }

    /// The tie break values, empty for hands with fewer than five cards.
    pub fn tie_break(&self) -> &[u8] {
        self.value().map(|v| v.tie_break().values()).unwrap_or(&[])
    }
}

impl PartialEq for Hand {
    /// Hands are equal if they are both classified with the same value, an
    /// incomplete hand is not equal to any hand.
    fn eq(&self, other: &Self) -> bool {
        compare_hands(self, other) == Ok(Ordering::Equal)
    }
}

impl PartialOrd for Hand {
    /// Returns `None` if any hand is incomplete.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_hands(self, other).ok()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(parse_cards(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
            write!(f, "[")?;
            for (idx, card) in cards.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{card}")?;
            }
            write!(f, "]")
        }

        match &self.best {
            Some(best) => {
                write!(f, "{} ", best.value().rank())?;
                write_cards(f, best.cards())
            }
            None => write_cards(f, &self.cards),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn incomplete_hand() {
        let h = hand("AS KD");
        assert!(!h.is_classified());
        assert_eq!(h.len(), 2);
        assert_eq!(h.category_code(), 0);
        assert_eq!(h.tie_break(), [0u8; 0]);
        assert_eq!(h.rank(), None);
        assert_eq!(h.to_string(), "[AS, KD]");

        let empty = Hand::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn classified_hand() {
        let h = hand("TS JS QS KS AS");
        assert_eq!(h.category_code(), 10);
        assert_eq!(h.tie_break(), [10, 11, 12, 13, 14]);
        assert_eq!(h.to_string(), "Royal Flush [TS, JS, QS, KS, AS]");

        let h = hand("2H 2D 2C 5S 5H");
        assert_eq!(h.category_code(), 7);
        assert_eq!(h.to_string(), "Full House [2C, 2D, 2H, 5H, 5S]");
    }

    #[test]
    fn merge_hands() {
        let pocket = hand("AS KS");
        let board = hand("QS JS TS 2D");
        assert!(!board.is_classified());

        let h1 = pocket.merge(&board).unwrap();
        let h2 = board.merge(&pocket).unwrap();
        assert_eq!(h1.len(), 6);
        assert_eq!(h1.cards()[..2], pocket.cards()[..]);
        assert_eq!(h2.cards()[..4], board.cards()[..]);
        assert_eq!(h1.rank(), Some(HandRank::RoyalFlush));
        assert_eq!(h1, h2);

        // Merging doesn't change the original hands.
        assert_eq!(pocket.len(), 2);
        assert_eq!(board.len(), 4);

        let h3 = Hand::from_parts(board.cards(), pocket.cards()).unwrap();
        assert_eq!(h3.cards(), h2.cards());
    }

    #[test]
    fn merge_reevaluates() {
        let pair = hand("9S 9D AC 4D 2H");
        assert_eq!(pair.rank(), Some(HandRank::OnePair));

        let trips = pair.with_cards(&parse_cards("9H 3C").unwrap()).unwrap();
        assert_eq!(trips.rank(), Some(HandRank::ThreeOfAKind));
        assert_eq!(trips.tie_break(), [4, 14, 9]);
        assert!(trips > pair);
    }

    #[test]
    fn merge_duplicates() {
        let pocket = hand("AS KS");
        assert_eq!(
            pocket.merge(&hand("AS 2D 3D")).unwrap_err(),
            EvalError::DuplicateCard(pocket.cards()[0])
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "AS XX".parse::<Hand>(),
            Err(EvalError::InvalidCard(_))
        ));
        assert!(matches!(
            "AS AS".parse::<Hand>(),
            Err(EvalError::DuplicateCard(_))
        ));
    }

    #[test]
    fn sort_hands() {
        let mut hands = vec![
            hand("QS QD QC 3H 4H"),
            hand("2C 3D 4S 5S 6H"),
            hand("AS AD KC KD 2H"),
            hand("AH 2C 3D 4S 5S"),
            hand("TS JS QS KS AS"),
        ];
        hands.sort_by(|a, b| compare_hands(a, b).unwrap());

        let codes = hands.iter().map(Hand::category_code).collect::<Vec<_>>();
        assert_eq!(codes, [3, 4, 5, 5, 10]);
        assert_eq!(hands[2].tie_break(), [2, 3, 4, 5, 14]);
    }
}
