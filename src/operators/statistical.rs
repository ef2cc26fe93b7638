//! Statistical operators: mean

use crate::operator::{IntoResult, Operator};
use std::ops::Add;

/* ===================== mean<T> ===================== */

/// Arithmetic mean of the sequence as `f64`.
///
/// Mean is not associative, so it is registered in two-stage form:
/// addition of `T` as the associative intermediate, then one division by
/// the element count. The result promotes to `f64` regardless of the
/// element type. Seed with the additive identity (`0`), which feeds the
/// intermediate fold.
#[allow(clippy::cast_precision_loss)]
pub fn mean<T>() -> Operator<T, f64>
where
    T: Add<Output = T> + IntoResult<f64> + 'static,
{
    Operator::decomposed(
        "mean",
        |a, b| a + b,
        |total: T, count| <T as IntoResult<f64>>::into_result(total) / count as f64,
    )
}
