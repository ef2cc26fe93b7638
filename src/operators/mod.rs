//! Built-in operators for [`reduce`](crate::reduce()).
//!
//! These are reusable [`Operator`](crate::Operator) values over any
//! suitable numeric element type:
//!
//! - [`sum<T>`](sum) -- addition (plain associative).
//! - [`product<T>`](product) -- multiplication (plain associative).
//! - [`mean<T>`](mean) -- arithmetic mean (decomposed: addition as the
//!   associative intermediate, divide-by-count as the output transform,
//!   promoting to `f64` regardless of the element type).
//!
//! The catalogue is open: anything built with the
//! [`Operator`](crate::Operator) constructors participates in the engine
//! exactly like the operators here.
//!
//! # Examples
//! ```
//! use refold::operators::{mean, product, sum};
//! use refold::{reduce, Reduced};
//!
//! let ints = [8, 13, 21, 34, 55];
//! assert_eq!(reduce(&ints, 0, &sum::<i32>()), Reduced::Value(131));
//! assert_eq!(reduce(&ints, 1, &product::<i32>()), Reduced::Value(4_084_080));
//! assert_eq!(reduce(&ints, 0, &mean::<i32>()), Reduced::Value(26.2));
//!
//! let doubles = [1.0, 2.0, 3.0, 5.0, 8.0];
//! assert_eq!(reduce(&doubles, 0.0, &sum::<f64>()), Reduced::Value(19.0));
//! ```

mod basic;
mod statistical;

pub use basic::{product, sum};
pub use statistical::mean;
