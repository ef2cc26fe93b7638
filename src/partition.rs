//! Partition descriptors for the parallel counter.
//!
//! A partition is a half-open span of the integer domain `[1, n)` owned by
//! exactly one worker. For a given worker count the spans are contiguous
//! and pairwise disjoint, and their union is exactly the domain, so no
//! element is skipped or assigned twice.

use crate::error::{Error, Result};

/// Half-open interval assigned to one worker.
pub type Span = std::ops::Range<u64>;

/// Split `[1, n)` into exactly `workers` contiguous spans.
///
/// The domain holds `n - 1` integers, so each span gets
/// `ceil((n - 1) / workers)` of them, except the final spans which are
/// clipped at `n`. A worker whose computed start lands at or past `n`
/// receives an empty span and later contributes zero without error.
///
/// Fails with [`Error::InvalidArgument`] when `n < 1` or `workers < 1`,
/// before any span is built.
///
/// # Examples
/// ```
/// let spans = refold::partition(10, 3)?;
/// assert_eq!(spans, vec![1..4, 4..7, 7..10]);
/// # Ok::<_, refold::Error>(())
/// ```
pub fn partition(n: u64, workers: u64) -> Result<Vec<Span>> {
    if n < 1 {
        return Err(Error::InvalidArgument(format!(
            "domain bound must be at least 1, got {n}"
        )));
    }
    if workers < 1 {
        return Err(Error::InvalidArgument(format!(
            "worker count must be at least 1, got {workers}"
        )));
    }

    let segment = (n - 1).div_ceil(workers);
    let spans = (0..workers)
        .map(|i| {
            let start = (1 + i * segment).min(n);
            let end = (start + segment).min(n);
            start..end
        })
        .collect();
    Ok(spans)
}
