// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines the card values consumed by the hand evaluator, a card
//! is a rank and a suit with ranks valued from 2 to 14 (Ace high):
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), 14);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! Cards can be parsed from their text form:
//!
//! ```
//! # use showdown_cards::{parse_cards, Card, Rank, Suit};
//! let cards = parse_cards("TS JS, qs 10h").unwrap();
//! assert_eq!(cards.len(), 4);
//! assert_eq!(cards[3], Card::new(Rank::Ten, Suit::Hearts));
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
