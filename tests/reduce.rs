use refold::operators::{mean, product, sum};
use refold::{Operator, Reduced, reduce};

/// A strict left fold with an associative operator matches the
/// hand-computed fold over `[seed] + sequence`.
#[test]
fn left_fold_matches_hand_computation() {
    let values = [3, 1, 4, 1, 5, 9, 2, 6];
    let expected = values.iter().fold(100, |acc, v| acc + v);
    assert_eq!(reduce(&values, 100, &sum::<i64>()), Reduced::Value(expected));

    let floats = [0.5, 0.25, 0.125];
    let expected = floats.iter().fold(1.0, |acc, v| acc * v);
    assert_eq!(
        reduce(&floats, 1.0, &product::<f64>()),
        Reduced::Value(expected)
    );
}

/// Fold order is seed-first and left-to-right; a non-commutative
/// operator exposes any deviation.
#[test]
fn fold_order_is_seed_first_left_to_right() {
    let subtract = Operator::plain("subtract", |a: i32, b: i32| a - b);
    // ((10 - 1) - 2) - 3 = 4; any other grouping or ordering differs.
    assert_eq!(reduce(&[1, 2, 3], 10, &subtract), Reduced::Value(4));
}

/// A one-element sequence comes back untouched for any operator; the
/// operator is never applied.
#[test]
fn single_element_is_unchanged() {
    let loud = Operator::plain("loud", |_: i32, _: i32| panic!("operator must not run"));
    assert_eq!(reduce(&[42], 0, &loud), Reduced::Unchanged(vec![42]));
    assert_eq!(reduce(&[42], 0, &mean::<i32>()), Reduced::Unchanged(vec![42]));
}

/// An empty sequence yields the empty `Unchanged` marker.
#[test]
fn empty_sequence_is_unchanged_and_empty() {
    let out = reduce(&[], 0, &sum::<i32>());
    assert!(out.is_unchanged());
    assert_eq!(out.unchanged(), Some(vec![]));
}

/// The worked scenario: ints [8, 13, 21, 34, 55].
#[test]
fn fibonacci_scenario() {
    let values = [8, 13, 21, 34, 55];
    assert_eq!(reduce(&values, 0, &sum::<i32>()), Reduced::Value(131));
    assert_eq!(
        reduce(&values, 1, &product::<i32>()),
        Reduced::Value(4_084_080)
    );
    match reduce(&values, 0, &mean::<i32>()) {
        Reduced::Value(avg) => assert!((avg - 26.2).abs() < 1e-12),
        other => panic!("expected a folded value, got {other:?}"),
    }
}

/// The two-stage path substitutes the intermediate for the whole fold
/// and applies the output transform exactly once.
#[test]
fn decomposed_transform_runs_once() {
    use std::sync::atomic::{AtomicU32, Ordering};
    static CALLS: AtomicU32 = AtomicU32::new(0);

    let counted_mean = Operator::decomposed(
        "counted-mean",
        |a: i64, b: i64| a + b,
        |total, count| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            total as f64 / count as f64
        },
    );
    assert_eq!(
        reduce(&[2_i64, 4, 6], 0, &counted_mean),
        Reduced::Value(4.0)
    );
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

/// A user-registered decomposition behaves identically to the built-in
/// mean: dispatch is carried by the operator value, not its identity.
#[test]
fn user_registered_decomposition_matches_builtin() {
    let homemade = Operator::decomposed(
        "mean",
        |a: i32, b: i32| a + b,
        |total, count| f64::from(total) / count as f64,
    );
    let values = [8, 13, 21, 34, 55];
    assert_eq!(
        reduce(&values, 0, &homemade),
        reduce(&values, 0, &mean::<i32>())
    );
}

/// Cloned operators share the same behavior.
#[test]
fn operators_clone() {
    let op = sum::<i32>();
    let copy = op.clone();
    assert_eq!(reduce(&[1, 2, 3], 0, &op), reduce(&[1, 2, 3], 0, &copy));
    assert_eq!(copy.name(), "sum");
}
