// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
//!
//! Pools with more than five cards are evaluated by classifying every five
//! cards subset and keeping the best one, when two subsets have the same value
//! the first one in enumeration order is kept so the result doesn't depend on
//! how the search is split.
//!
//! ```
//! # use showdown_eval::*;
//! // Pocket aces with a board that makes a full house.
//! let cards = parse_cards("AS AD AH KC KD 2S 7H").unwrap();
//! let best = select::best_hand(&cards).unwrap().unwrap();
//! assert_eq!(best.value().rank(), HandRank::FullHouse);
//! assert_eq!(best.value().tie_break().values(), [13, 14]);
//! ```
use ahash::AHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    Card,
    error::EvalError,
    subsets::{for_each_subset, nck},
    value::{HAND_SIZE, HandValue},
};

/// The best five cards out of a cards pool.
///
/// Serializes as its five cards and deserializing classifies them again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Card; 5]", into = "[Card; 5]")]
pub struct BestHand {
    cards: [Card; HAND_SIZE],
    value: HandValue,
}

impl BestHand {
    /// Classifies a five cards hand.
    pub fn eval(cards: [Card; HAND_SIZE]) -> Result<BestHand, EvalError> {
        let value = HandValue::eval(&cards)?;

        let mut cards = cards;
        cards.sort_unstable();

        Ok(BestHand { cards, value })
    }

    /// The five cards sorted by rank.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The hand value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }
}

impl TryFrom<[Card; HAND_SIZE]> for BestHand {
    type Error = EvalError;

    fn try_from(cards: [Card; HAND_SIZE]) -> Result<Self, Self::Error> {
        BestHand::eval(cards)
    }
}

impl From<BestHand> for [Card; HAND_SIZE] {
    fn from(hand: BestHand) -> Self {
        hand.cards
    }
}

/// Finds the best five cards hand in a pool.
///
/// Returns `None` for pools with fewer than five cards.
pub fn best_hand(cards: &[Card]) -> Result<Option<BestHand>, EvalError> {
    check_pool(cards)?;

    let best = match cards.len() {
        n if n < HAND_SIZE => return Ok(None),
        HAND_SIZE => {
            let mut hand = [cards[0]; HAND_SIZE];
            hand.copy_from_slice(cards);
            Some(BestHand::eval(hand)?)
        }
        n => best_in_range(cards, 0, nck(n, HAND_SIZE))?,
    };

    if let Some(best) = &best {
        debug!(
            "Best hand {} {:?} out of {} cards",
            best.value.rank(),
            best.cards,
            cards.len()
        );
    }

    Ok(best)
}

/// Parallel best hand search, splits the subsets between `num_tasks` tasks.
///
/// Returns the same hand as [best_hand].
#[cfg(feature = "parallel")]
pub fn par_best_hand(cards: &[Card], num_tasks: usize) -> Result<Option<BestHand>, EvalError> {
    use std::{panic, thread};

    check_pool(cards)?;

    if cards.len() < HAND_SIZE {
        return Ok(None);
    }

    let ranges = task_ranges(nck(cards.len(), HAND_SIZE), num_tasks);
    let num_tasks = ranges.len();

    let results = thread::scope(|s| {
        let tasks = ranges
            .into_iter()
            .map(|(start, count)| s.spawn(move || best_in_range(cards, start, count)))
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .map(|t| t.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    // Reduce in task order so that ties resolve as in the sequential search.
    let mut best: Option<BestHand> = None;
    for task_best in results {
        if let Some(hand) = task_best? {
            if best.as_ref().is_none_or(|b| hand.value > b.value) {
                best = Some(hand);
            }
        }
    }

    if let Some(best) = &best {
        debug!(
            "Best hand {} {:?} out of {} cards with {num_tasks} tasks",
            best.value.rank(),
            best.cards,
            cards.len()
        );
    }

    Ok(best)
}

/// Splits `num_hands` subsets into `(start, count)` ranges, one per task, with
/// no more tasks than subsets.
#[cfg(feature = "parallel")]
fn task_ranges(num_hands: usize, num_tasks: usize) -> Vec<(usize, usize)> {
    let num_tasks = num_tasks.clamp(1, num_hands.max(1));
    let hands_per_task = num_hands.div_ceil(num_tasks);

    (0..num_tasks)
        .map(|task_id| {
            let start = task_id * hands_per_task;
            (start, hands_per_task.min(num_hands.saturating_sub(start)))
        })
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Rejects pools with repeated cards.
fn check_pool(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = AHashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Evaluates `count` subsets starting from the `nth` subset and returns the
/// first subset with the highest value.
fn best_in_range(cards: &[Card], nth: usize, count: usize) -> Result<Option<BestHand>, EvalError> {
    let mut best: Option<BestHand> = None;
    let mut failed = None;

    for_each_subset(cards.len(), nth, count, |subset| {
        if failed.is_some() {
            return;
        }

        let hand = subset.map(|pos| cards[pos]);
        match BestHand::eval(hand) {
            Ok(hand) => {
                trace!("Subset {:?} {}", hand.cards, hand.value.rank());
                if best.as_ref().is_none_or(|b| hand.value > b.value) {
                    best = Some(hand);
                }
            }
            Err(e) => failed = Some(e),
        }
    });

    match failed {
        Some(e) => Err(e),
        None => Ok(best),
    }
}
