// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands ordering.
//!
//! Hands are ordered by category first, hands with the same category are
//! ordered by their tie break values scanning from the last (most significant)
//! value backward. An ace low straight is remapped to `[1, 2, 3, 4, 5]` before
//! comparing so that it ranks below all other straights.
use std::cmp::Ordering;

use crate::{
    error::EvalError,
    hand::Hand,
    value::{HandValue, WHEEL},
};

/// The ace low straight values with the ace counted as one.
const WHEEL_LOW: [u8; 5] = [1, 2, 3, 4, 5];

/// Remaps an ace low straight, other values are returned unchanged.
pub fn normalize_wheel(values: &[u8]) -> &[u8] {
    if values == WHEEL { &WHEEL_LOW[..] } else { values }
}

/// Compares two tie break sequences from the most significant value.
pub fn compare_tie_break(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let (lhs, rhs) = (normalize_wheel(lhs), normalize_wheel(rhs));
    lhs.iter()
        .rev()
        .zip(rhs.iter().rev())
        .map(|(l, r)| l.cmp(r))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| lhs.len().cmp(&rhs.len()))
}

/// Compares two hand values, category first and then tie break values.
pub fn compare_values(lhs: &HandValue, rhs: &HandValue) -> Ordering {
    lhs.rank().cmp(&rhs.rank()).then_with(|| {
        compare_tie_break(lhs.tie_break().values(), rhs.tie_break().values())
    })
}

/// Compares two hands.
///
/// Fails with [EvalError::IncomparableOperands] if any hand has fewer than
/// five cards.
pub fn compare_hands(lhs: &Hand, rhs: &Hand) -> Result<Ordering, EvalError> {
    match (lhs.value(), rhs.value()) {
        (Some(l), Some(r)) => Ok(compare_values(l, r)),
        _ => Err(EvalError::IncomparableOperands),
    }
}

/// Compares each pair of hands.
pub fn compare_pairs<'a, I>(pairs: I) -> Vec<Result<Ordering, EvalError>>
where
    I: IntoIterator<Item = (&'a Hand, &'a Hand)>,
{
    pairs
        .into_iter()
        .map(|(lhs, rhs)| compare_hands(lhs, rhs))
        .collect()
}
