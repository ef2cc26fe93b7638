//! Basic arithmetic operators: sum, product

use crate::operator::Operator;
use std::ops::{Add, Mul};

/* ===================== sum<T> ===================== */

/// Addition over `T`.
///
/// Plain associative; the natural seed is the additive identity (`0`).
pub fn sum<T>() -> Operator<T>
where
    T: Add<Output = T> + 'static,
{
    Operator::plain("sum", |a, b| a + b)
}

/* ===================== product<T> ===================== */

/// Multiplication over `T`.
///
/// Plain associative; the natural seed is the multiplicative identity (`1`).
pub fn product<T>() -> Operator<T>
where
    T: Mul<Output = T> + 'static,
{
    Operator::plain("product", |a, b| a * b)
}
