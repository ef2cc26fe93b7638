//! The sequential fold engine.
//!
//! [`reduce`] collapses an ordered sequence into one value by strict
//! left-to-right application of an [`Operator`], starting from a
//! caller-supplied seed. The fold order is part of the contract: operators
//! are not assumed commutative, so the engine never reorders or regroups
//! applications.
//!
//! Sequences shorter than two elements are a defined fast path, not an
//! error: the input comes back untouched as [`Reduced::Unchanged`] and the
//! operator is never applied.

use crate::operator::{IntoResult, Operator};

/// Outcome of a [`reduce`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced<T, O = T> {
    /// The input had fewer than two elements and is returned untouched.
    /// An empty input yields `Unchanged(vec![])`; a one-element input
    /// yields the sole element inside the vector.
    Unchanged(Vec<T>),
    /// The operator ran over the full sequence.
    Value(O),
}

impl<T, O> Reduced<T, O> {
    /// The folded result, if the operator actually ran.
    pub fn value(self) -> Option<O> {
        match self {
            Reduced::Value(v) => Some(v),
            Reduced::Unchanged(_) => None,
        }
    }

    /// The untouched input, if the degenerate fast path was taken.
    pub fn unchanged(self) -> Option<Vec<T>> {
        match self {
            Reduced::Unchanged(v) => Some(v),
            Reduced::Value(_) => None,
        }
    }

    /// Whether the degenerate fast path was taken.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Reduced::Unchanged(_))
    }
}

/// Fold `values` into a single result with `op`, starting from `seed`.
///
/// The fold is a strict left fold: the seed combines with the first
/// element, that result with the second, and so on in sequence order.
/// For an [`Operator::Decomposed`] operator the fold runs with the
/// associative intermediate and the output transform is applied exactly
/// once afterwards, with the element count as auxiliary parameter.
///
/// Inputs are borrowed immutably and every application produces a new
/// value; neither `values` nor the seed is mutated in place.
///
/// # Examples
/// ```
/// use refold::operators::{mean, sum};
/// use refold::{reduce, Reduced};
///
/// let values = [8, 13, 21, 34, 55];
/// assert_eq!(reduce(&values, 0, &sum::<i32>()), Reduced::Value(131));
/// assert_eq!(reduce(&values, 0, &mean::<i32>()), Reduced::Value(26.2));
/// ```
pub fn reduce<T, O>(values: &[T], seed: T, op: &Operator<T, O>) -> Reduced<T, O>
where
    T: Clone + IntoResult<O> + 'static,
    O: 'static,
{
    if values.len() < 2 {
        return Reduced::Unchanged(values.to_vec());
    }

    match op {
        Operator::Plain { combine, .. } => {
            let mut acc = seed;
            for v in values {
                acc = combine(acc, v.clone());
            }
            Reduced::Value(acc.into_result())
        }
        Operator::Decomposed {
            intermediate,
            finish,
            ..
        } => {
            let mut acc = seed;
            for v in values {
                acc = intermediate(acc, v.clone());
            }
            Reduced::Value(finish(acc, values.len() as u64))
        }
    }
}
