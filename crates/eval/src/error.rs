// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use showdown_cards::{Card, ParseCardError};
use thiserror::Error;

/// Errors returned by the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand with fewer than five cards was used where a classified hand is
    /// required, for example when a caller asks for the category of a pool
    /// that only holds the pocket cards.
    #[error("hand has {0} cards, at least 5 are needed")]
    IncompleteHand(usize),
    /// The rank counts of a five cards hand don't match any category.
    #[error("invalid hand composition: counts {counts:?} for values {values:?}")]
    InvalidComposition {
        /// Per rank counts sorted ascending.
        counts: Vec<u8>,
        /// The hand values sorted ascending.
        values: Vec<u8>,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card in the hand text is invalid.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    /// A comparison operand is not a classified hand.
    #[error("cannot compare a hand that is not classified")]
    IncomparableOperands,
}
