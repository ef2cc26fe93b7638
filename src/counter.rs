//! The partitioned parallel counter.
//!
//! [`run_partitioned`] is the orchestrator: it splits `[1, n)` into one
//! span per worker, dispatches every span onto a dedicated pool, waits for
//! all of them (a full barrier; nothing exits early), and combines the
//! per-worker counts by summation. Combination order is
//! irrelevant since summation is commutative and associative.
//!
//! Workers share no mutable state: each owns its span exclusively and
//! writes only its own result slot. A worker that fails surfaces as
//! [`Error::WorkerFailure`] naming its span; it is never silently treated
//! as zero.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::partition::{Span, partition};
use crate::primes::count_primes_in;

/// Worker count used when the caller does not specify one: the number of
/// logical CPUs.
pub fn default_workers() -> u64 {
    num_cpus::get().max(1) as u64
}

/// Run `worker` once per partition of `[1, n)` and sum the results.
///
/// Builds a pool of exactly `workers` threads, dispatches one task per
/// span, and collects every result slot before combining anything: all
/// workers run to completion once dispatched, even when a sibling fails.
/// The first failed slot (in partition order) is then reported as
/// [`Error::WorkerFailure`] carrying the failed span.
///
/// Fails with [`Error::InvalidArgument`] when `n < 1` or `workers < 1`,
/// before any work is dispatched.
pub fn run_partitioned<F>(n: u64, workers: u64, worker: F) -> Result<u64>
where
    F: Fn(Span) -> Result<u64> + Send + Sync,
{
    let spans = partition(n, workers)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers as usize)
        .build()?;

    let results: Vec<Result<u64>> =
        pool.install(|| spans.par_iter().cloned().map(&worker).collect());

    let mut total = 0u64;
    for (span, result) in spans.iter().zip(results) {
        match result {
            Ok(count) => {
                debug!(start = span.start, end = span.end, count, "partition complete");
                total += count;
            }
            Err(source) => {
                return Err(Error::WorkerFailure {
                    start: span.start,
                    end: span.end,
                    source: Box::new(source),
                });
            }
        }
    }
    Ok(total)
}

/// Count primes in `[1, n)` across `workers` independent partitions.
///
/// The parallel twin of [`count_primes`](crate::count_primes): the total
/// is identical for every valid worker count, including `workers > n`
/// (the surplus workers receive empty spans and contribute zero).
///
/// # Examples
/// ```
/// // primes in [1, 10) are 2, 3, 5, 7
/// assert_eq!(refold::count_primes_parallel(10, 3)?, 4);
/// # Ok::<_, refold::Error>(())
/// ```
pub fn count_primes_parallel(n: u64, workers: u64) -> Result<u64> {
    let total = run_partitioned(n, workers, |span| Ok(count_primes_in(span)))?;
    info!(n, workers, total, "prime count complete");
    Ok(total)
}
