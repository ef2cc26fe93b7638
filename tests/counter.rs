use refold::{
    Error, count_primes, count_primes_in, count_primes_parallel, is_prime, run_partitioned,
};

#[test]
fn primality_spot_checks() {
    let primes: Vec<u64> = (0..30).filter(|&v| is_prime(v)).collect();
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(7919));
    assert!(!is_prime(7917));
}

#[test]
fn sequential_reference_counts() {
    assert_eq!(count_primes(1), 0);
    assert_eq!(count_primes(2), 0);
    assert_eq!(count_primes(3), 1);
    assert_eq!(count_primes(10), 4);
    assert_eq!(count_primes(100), 25);
    assert_eq!(count_primes(1000), 168);
}

/// The worked scenario: N=10, W=3 finds {2, 3, 5, 7}.
#[test]
fn ten_by_three_counts_four() -> anyhow::Result<()> {
    assert_eq!(count_primes_parallel(10, 3)?, 4);
    Ok(())
}

/// Parallel and sequential counts agree for every (n, workers) pair,
/// including a single worker and more workers than elements.
#[test]
fn parallel_matches_sequential() -> anyhow::Result<()> {
    for n in [1, 2, 3, 10, 11, 97, 500, 1000] {
        let expected = count_primes(n);
        for workers in [1, 2, 3, 7, 16, 64] {
            assert_eq!(
                count_primes_parallel(n, workers)?,
                expected,
                "n={n} workers={workers}"
            );
        }
    }
    Ok(())
}

#[test]
fn zero_inputs_are_rejected() {
    assert!(matches!(
        count_primes_parallel(0, 4),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        count_primes_parallel(10, 0),
        Err(Error::InvalidArgument(_))
    ));
}

/// The orchestrator sums whatever the worker returns; counting span
/// lengths recovers the domain size.
#[test]
fn orchestrator_sums_worker_results() -> anyhow::Result<()> {
    let total = run_partitioned(101, 8, |span| Ok(span.end - span.start))?;
    assert_eq!(total, 100);
    Ok(())
}

/// A failed worker surfaces as `WorkerFailure` naming its span; the
/// sibling workers' results are never substituted for it.
#[test]
fn worker_failure_names_the_failed_span() {
    let result = run_partitioned(10, 3, |span| {
        if span.start == 4 {
            Err(Error::InvalidArgument("injected".into()))
        } else {
            Ok(count_primes_in(span))
        }
    });
    match result {
        Err(Error::WorkerFailure { start, end, .. }) => {
            assert_eq!((start, end), (4, 7));
        }
        other => panic!("expected WorkerFailure, got {other:?}"),
    }
}

/// Workers with empty spans contribute zero without error.
#[test]
fn empty_spans_contribute_zero() -> anyhow::Result<()> {
    assert_eq!(count_primes_parallel(1, 5)?, 0);
    assert_eq!(count_primes_parallel(3, 64)?, 1);
    Ok(())
}
