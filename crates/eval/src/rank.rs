// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};

/// A hand category, from high card (1) to royal flush (10).
///
/// Categories are ordered by strength so that comparing two ranks tells which
/// hand wins regardless of the cards that make the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HandRank {
    /// Five unrelated cards.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks in mixed suits.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

/// Names indexed by category code, code 0 is unused.
const NAMES: [&str; 11] = [
    "",
    "High Card",
    "One Pair",
    "Two Pair",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Full House",
    "Four of a Kind",
    "Straight Flush",
    "Royal Flush",
];

/// Maps the (max count, min count, distinct ranks) of a hand with no flush
/// and no straight to its category.
static SHAPES: LazyLock<AHashMap<(u8, u8, u8), HandRank>> = LazyLock::new(|| {
    let mut shapes = AHashMap::with_capacity(6);

    shapes.insert((4, 1, 2), HandRank::FourOfAKind);
    shapes.insert((3, 2, 2), HandRank::FullHouse);
    shapes.insert((3, 1, 3), HandRank::ThreeOfAKind);
    shapes.insert((2, 1, 3), HandRank::TwoPair);
    shapes.insert((2, 1, 4), HandRank::OnePair);
    shapes.insert((1, 1, 5), HandRank::HighCard);

    shapes
});

impl HandRank {
    /// The category code in 1..=10.
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the category for a code, `None` outside 1..=10.
    pub fn from_code(code: u8) -> Option<HandRank> {
        HandRank::ranks().find(|r| r.code() == code)
    }

    /// Returns all categories from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        NAMES[self.code() as usize]
    }

    /// Looks up the category for a rank count shape.
    pub(crate) fn from_shape(max_count: u8, min_count: u8, distinct: u8) -> Option<HandRank> {
        SHAPES.get(&(max_count, min_count, distinct)).copied()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
