//! The pluggable operator representation used by [`reduce`](crate::reduce()).
//!
//! An [`Operator`] bundles the combining function with a data-level tag
//! describing how the fold engine must run it:
//!
//! - [`Operator::Plain`] -- an associative operator applied directly; the
//!   fold accumulator is the result.
//! - [`Operator::Decomposed`] -- a non-associative operator rewritten as an
//!   associative intermediate plus an output transform applied exactly once
//!   after the fold, with the element count as auxiliary parameter. The
//!   arithmetic mean is the canonical case: sum as intermediate, divide by
//!   count as transform.
//!
//! The engine dispatches by matching the variant, so recognizing a
//! non-associative operator is a property of the value itself rather than
//! of which function pointer was passed. Registering a new non-associative
//! operator means constructing a `Decomposed` value; no engine code changes.

use std::fmt;
use std::sync::Arc;

/// Binary combining step folded over the sequence, left to right.
pub type CombineFn<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;

/// Output transform applied once after the fold completes. Receives the
/// fold accumulator and the element count.
pub type FinishFn<T, O> = Arc<dyn Fn(T, u64) -> O + Send + Sync>;

/// A binary reduction operator over elements of type `T` producing `O`.
///
/// `O` defaults to `T`; it differs only for decomposed operators whose
/// output transform changes the type (e.g. integer mean producing `f64`).
pub enum Operator<T: 'static, O: 'static = T> {
    /// Associative operator applied directly during the fold.
    Plain {
        /// Short label used in `Debug` output and logs.
        name: &'static str,
        /// The operator itself.
        combine: CombineFn<T>,
    },
    /// Non-associative operator in two-stage form.
    Decomposed {
        /// Short label used in `Debug` output and logs.
        name: &'static str,
        /// Associative stand-in folded over the sequence.
        intermediate: CombineFn<T>,
        /// Applied once to the fold result, with the element count.
        finish: FinishFn<T, O>,
    },
}

impl<T: 'static> Operator<T, T> {
    /// Register a plain associative operator. Only available when the
    /// result type equals the element type: a plain operator's fold
    /// accumulator is its result.
    pub fn plain(
        name: &'static str,
        combine: impl Fn(T, T) -> T + Send + Sync + 'static,
    ) -> Self {
        Operator::Plain {
            name,
            combine: Arc::new(combine),
        }
    }
}

impl<T: 'static, O: 'static> Operator<T, O> {
    /// Register a non-associative operator as its two-stage decomposition.
    ///
    /// `intermediate` must be associative over the sequence; `finish` is
    /// applied exactly once, after the fold, and receives the element
    /// count as the auxiliary parameter.
    pub fn decomposed(
        name: &'static str,
        intermediate: impl Fn(T, T) -> T + Send + Sync + 'static,
        finish: impl Fn(T, u64) -> O + Send + Sync + 'static,
    ) -> Self {
        Operator::Decomposed {
            name,
            intermediate: Arc::new(intermediate),
            finish: Arc::new(finish),
        }
    }

    /// The operator's label.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Plain { name, .. } | Operator::Decomposed { name, .. } => *name,
        }
    }

    /// Whether this operator runs through the two-stage path.
    pub fn is_decomposed(&self) -> bool {
        matches!(self, Operator::Decomposed { .. })
    }
}

impl<T: 'static, O: 'static> Clone for Operator<T, O> {
    fn clone(&self) -> Self {
        match self {
            Operator::Plain { name, combine } => Operator::Plain {
                name: *name,
                combine: Arc::clone(combine),
            },
            Operator::Decomposed {
                name,
                intermediate,
                finish,
            } => Operator::Decomposed {
                name: *name,
                intermediate: Arc::clone(intermediate),
                finish: Arc::clone(finish),
            },
        }
    }
}

impl<T: 'static, O: 'static> fmt::Debug for Operator<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name())
            .field("decomposed", &self.is_decomposed())
            .finish()
    }
}

/// Widening from the fold accumulator type to an operator's result type.
///
/// The blanket identity impl covers every plain operator. The numeric
/// impls below cover the built-in decomposed operators that promote to
/// `f64`; implement this trait for your own accumulator/result pair when
/// registering a decomposed operator over other types.
pub trait IntoResult<O> {
    /// Convert the accumulator into the caller-visible result.
    fn into_result(self) -> O;
}

impl<T> IntoResult<T> for T {
    fn into_result(self) -> T {
        self
    }
}

macro_rules! impl_into_f64 {
    ($($t:ty),* $(,)?) => {$(
        #[allow(clippy::cast_precision_loss)]
        impl IntoResult<f64> for $t {
            fn into_result(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_into_f64!(i8, i16, i32, i64, u8, u16, u32, u64, f32);
