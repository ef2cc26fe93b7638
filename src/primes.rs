//! Primality predicate and per-span counting.

use crate::partition::Span;

/// Trial-division primality test.
///
/// `v` is prime when `v > 1` and no divisor `d` with `d * d <= v` divides
/// it. Total over `u64`; the loop bound is written division-side to avoid
/// overflow near the top of the range.
pub fn is_prime(v: u64) -> bool {
    if v <= 1 {
        return false;
    }
    let mut d = 2;
    while d <= v / d {
        if v % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Number of primes in a half-open span.
///
/// Deterministic and order-independent; the predicate for one integer
/// never depends on any other, so this is safe to run per worker with no
/// coordination.
pub fn count_primes_in(span: Span) -> u64 {
    span.filter(|&v| is_prime(v)).count() as u64
}

/// Single-threaded reference count of primes in `[1, n)`.
pub fn count_primes(n: u64) -> u64 {
    count_primes_in(1..n)
}
