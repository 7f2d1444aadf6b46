// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Classifies poker hands into one of ten categories, from high card to royal
//! flush, and orders hands by category and tie break values. Pools with more
//! than five cards, like the seven cards of a community cards game, are
//! evaluated by searching the best five cards subset.
//!
//! To use the evaluator create a [Hand] from a pool of cards and compare it
//! with other hands:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("QS JS 4C 4H 9D").unwrap();
//! let alice = Hand::from_parts(&parse_cards("AS KS").unwrap(), &board).unwrap();
//! let bob = Hand::from_parts(&parse_cards("4S 4D").unwrap(), &board).unwrap();
//!
//! assert_eq!(alice.rank(), Some(HandRank::OnePair));
//! assert_eq!(bob.rank(), Some(HandRank::FourOfAKind));
//! assert!(bob > alice);
//! ```
//!
//! Hands with fewer than five cards are not classified and don't compare with
//! other hands, [compare::compare_hands] returns an error for them and the
//! comparison operators return false.
//!
//! The **`parallel`** feature enables [select::par_best_hand] that splits the
//! subsets search between parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod compare;
pub mod error;
pub mod hand;
pub mod rank;
pub mod select;
pub mod subsets;
pub mod value;

pub use error::EvalError;
pub use hand::Hand;
pub use rank::HandRank;
pub use select::BestHand;
pub use value::{HandValue, TieBreak};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
