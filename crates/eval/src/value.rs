// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
//!
//! A five cards hand is classified into a [HandRank] and a [TieBreak] sequence
//! of rank values used to order hands with the same category. For flushes and
//! straights the sequence is the sorted hand values, for the other categories
//! it is the distinct values ordered by `(count, value)`, so that the kickers
//! come first and the most significant value is the last one:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = parse_cards("2H 2D 2C 5S 5H").unwrap();
//! let value = HandValue::eval(&cards.try_into().unwrap()).unwrap();
//! assert_eq!(value.rank(), HandRank::FullHouse);
//! assert_eq!(value.tie_break().values(), [5, 2]);
//! ```
use log::error;
use serde::Serialize;
use std::cmp::Ordering;

use crate::{Card, compare, error::EvalError, rank::HandRank};

/// Number of cards in a classified hand.
pub const HAND_SIZE: usize = 5;

/// The values of an ace low straight before normalization.
pub const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// Rank values that break ties between hands of the same category.
///
/// Values are stored as built by the classifier, the ace low straight is
/// remapped only when comparing.
#[derive(Debug, Clone, Serialize)]
pub struct TieBreak(Vec<u8>);

impl TieBreak {
    /// The raw values, least significant first.
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// The values with an ace low straight remapped to `[1, 2, 3, 4, 5]`.
    pub fn normalized(&self) -> &[u8] {
        compare::normalize_wheel(&self.0)
    }
}

impl PartialEq for TieBreak {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TieBreak {}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::compare_tie_break(&self.0, &other.0)
    }
}

/// The value of a five cards hand.
///
/// Values are only built by classifying cards, to restore a value deserialize
/// a [BestHand](crate::BestHand) that classifies its cards.
#[derive(Debug, Clone, Serialize)]
pub struct HandValue {
    rank: HandRank,
    tie_break: TieBreak,
}

impl HandValue {
    /// Classifies a five cards hand.
    ///
    /// Fails with [EvalError::DuplicateCard] if a card is repeated and with
    /// [EvalError::InvalidComposition] if the rank counts don't match any
    /// category.
    pub fn eval(cards: &[Card; HAND_SIZE]) -> Result<HandValue, EvalError> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(EvalError::DuplicateCard(*card));
            }
        }

        let mut values = cards.map(|c| c.value());
        values.sort_unstable();

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let is_straight = is_straight(&values);

        let (rank, tie_break) = if is_flush && is_straight && values[0] == 10 {
            (HandRank::RoyalFlush, values.to_vec())
        } else if is_flush && is_straight {
            (HandRank::StraightFlush, values.to_vec())
        } else if is_flush {
            (HandRank::Flush, values.to_vec())
        } else if is_straight {
            (HandRank::Straight, values.to_vec())
        } else {
            eval_counts(&values)?
        };

        Ok(HandValue {
            rank,
            tie_break: TieBreak(tie_break),
        })
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie break sequence.
    pub fn tie_break(&self) -> &TieBreak {
        &self.tie_break
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare::compare_values(self, other)
    }
}

/// Checks sorted values for five consecutive ranks or an ace low straight.
fn is_straight(values: &[u8; HAND_SIZE]) -> bool {
    values.windows(2).all(|w| w[0] + 1 == w[1]) || *values == WHEEL
}

/// Classifies a hand with no flush and no straight by its rank counts.
fn eval_counts(values: &[u8; HAND_SIZE]) -> Result<(HandRank, Vec<u8>), EvalError> {
    let mut counts = [0u8; 15];
    for &v in values {
        counts[v as usize] += 1;
    }

    // (count, value) pairs for the distinct values.
    let mut groups = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(value, &count)| (count, value as u8))
        .collect::<Vec<_>>();
    groups.sort_unstable();

    let max_count = groups.last().map(|g| g.0).unwrap_or_default();
    let min_count = groups.first().map(|g| g.0).unwrap_or_default();

    match HandRank::from_shape(max_count, min_count, groups.len() as u8) {
        Some(rank) => Ok((rank, groups.into_iter().map(|(_, v)| v).collect())),
        None => {
            let counts = groups.iter().map(|g| g.0).collect::<Vec<_>>();
            error!("No category for counts {counts:?} values {values:?}");
            Err(EvalError::InvalidComposition {
                counts,
                values: values.to_vec(),
            })
        }
    }
}
