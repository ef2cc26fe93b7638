//! Error types for refold.

use thiserror::Error;

/// Result type alias using refold's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the partitioned counter and its orchestrator.
///
/// Degenerate inputs to the fold engine (fewer than two elements, empty
/// partitions) are defined fast paths, not errors; see
/// [`Reduced`](crate::Reduced) and [`partition`](crate::partition()).
#[derive(Error, Debug)]
pub enum Error {
    /// A required numeric input was out of range. Detected before any
    /// work begins; no partial computation occurs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A worker did not complete its partition. Carries the half-open
    /// span the worker owned; a failed worker is never counted as zero.
    #[error("worker for partition [{start}, {end}) failed")]
    WorkerFailure {
        /// Inclusive lower bound of the failed span.
        start: u64,
        /// Exclusive upper bound of the failed span.
        end: u64,
        /// What the worker itself reported.
        #[source]
        source: Box<Error>,
    },

    /// The dedicated worker pool could not be constructed.
    #[error("worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
