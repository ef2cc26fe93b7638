//! # Refold
//!
//! A **generic reduction engine** for Rust: fold a sequence of elements
//! into a single result with a pluggable binary operator, extend the fold
//! to non-associative operators through a two-stage decomposition, and run
//! range-partitioned counting reductions in parallel across a fixed pool
//! of workers.
//!
//! ## Key Features
//!
//! - **Pluggable operators** - any binary combining function, supplied
//!   explicitly with a caller-provided seed
//! - **Two-stage decomposition** - non-associative aggregates (e.g. the
//!   arithmetic mean) expressed as an associative intermediate plus one
//!   output transform
//! - **Data-level dispatch** - the engine recognizes the two-stage path by
//!   matching the [`Operator`] variant, never by comparing function
//!   identity
//! - **Strict fold order** - left-to-right, seed first; operators are not
//!   assumed commutative
//! - **Partitioned parallel counting** - split `[1, n)` across dedicated
//!   workers, barrier-join, and combine partial counts
//! - **Type-safe** - element and result types are generic parameters
//!   checked at compile time
//!
//! ## Quick Start
//!
//! ```
//! use refold::operators::{mean, product, sum};
//! use refold::{reduce, Reduced};
//!
//! let values = [8, 13, 21, 34, 55];
//!
//! assert_eq!(reduce(&values, 0, &sum::<i32>()), Reduced::Value(131));
//! assert_eq!(reduce(&values, 1, &product::<i32>()), Reduced::Value(4_084_080));
//! assert_eq!(reduce(&values, 0, &mean::<i32>()), Reduced::Value(26.2));
//! ```
//!
//! ## Core Concepts
//!
//! ### Operators
//!
//! An [`Operator`] carries the combining function together with a tag
//! describing how the engine must run it. Plain operators are associative
//! and fold directly. Decomposed operators are non-associative aggregates
//! rewritten as an associative intermediate plus an output transform that
//! receives the element count: mean folds as a sum and divides once at
//! the end. Registering a new non-associative operator means building a
//! `Decomposed` value with [`Operator::decomposed`]; the engine itself
//! never changes.
//!
//! ### Reduction
//!
//! [`reduce`](reduce()) is a strict left fold from a required seed. Sequences with
//! fewer than two elements come back untouched as
//! [`Reduced::Unchanged`], a defined fast path, not an error, and the
//! operator is never applied.
//!
//! ### Partitioned counting
//!
//! [`count_primes_parallel`] splits `[1, n)` into one contiguous span per
//! worker (see [`partition`](partition())), evaluates the primality
//! predicate
//! independently per span on a dedicated thread pool, joins all workers,
//! and sums the partial counts. [`run_partitioned`] exposes the same
//! orchestration for any per-span counting worker; a failed worker is
//! reported as [`Error::WorkerFailure`] with its span, never silently
//! counted as zero.
//!
//! ## Module Overview
//!
//! - [`operator`] - the [`Operator`] representation and result widening
//! - [`operators`] - built-in operator library (sum, product, mean)
//! - [`reduce`](mod@reduce) - the sequential fold engine
//! - [`partition`](mod@partition) - partition descriptors for `[1, n)`
//! - [`primes`] - the primality predicate and per-span counting
//! - [`counter`] - the parallel orchestrator
//! - [`error`] - error types

pub mod counter;
pub mod error;
pub mod operator;
pub mod operators;
pub mod partition;
pub mod primes;
pub mod reduce;

pub use counter::{count_primes_parallel, default_workers, run_partitioned};
pub use error::{Error, Result};
pub use operator::{CombineFn, FinishFn, IntoResult, Operator};
pub use partition::{Span, partition};
pub use primes::{count_primes, count_primes_in, is_prime};
pub use reduce::{Reduced, reduce};
