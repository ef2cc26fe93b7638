//! Reduce Fibonacci-style series with every built-in operator.
//!
//! Builds a five-element integer series seeded with 8 and 13 and a
//! five-element floating-point series seeded with 1 and 2, prints both,
//! then prints their sum, product, and mean.

use std::ops::Add;

use anyhow::{Context, Result};
use refold::operators::{mean, product, sum};
use refold::reduce;

/// First `len` elements of the series where each element is the sum of
/// the previous two.
fn series<T>(first: T, second: T, len: usize) -> Vec<T>
where
    T: Add<Output = T> + Copy,
{
    let mut out = Vec::with_capacity(len);
    if len > 0 {
        out.push(first);
    }
    if len > 1 {
        out.push(second);
    }
    while out.len() < len {
        let next = out[out.len() - 2] + out[out.len() - 1];
        out.push(next);
    }
    out
}

fn main() -> Result<()> {
    let ints = series(8, 13, 5);
    println!("ints = {ints:?}");

    let total = reduce(&ints, 0, &sum::<i32>())
        .value()
        .context("sum produced no value")?;
    println!("sum(ints) = {total}");

    let prod = reduce(&ints, 1, &product::<i32>())
        .value()
        .context("product produced no value")?;
    println!("product(ints) = {prod}");

    let avg = reduce(&ints, 0, &mean::<i32>())
        .value()
        .context("mean produced no value")?;
    println!("mean(ints) = {avg:.2}");

    let doubles = series(1.0_f64, 2.0, 5);
    println!("doubles = {doubles:?}");

    let total = reduce(&doubles, 0.0, &sum::<f64>())
        .value()
        .context("sum produced no value")?;
    println!("sum(doubles) = {total:.2}");

    let prod = reduce(&doubles, 1.0, &product::<f64>())
        .value()
        .context("product produced no value")?;
    println!("product(doubles) = {prod:.2}");

    let avg = reduce(&doubles, 0.0, &mean::<f64>())
        .value()
        .context("mean produced no value")?;
    println!("mean(doubles) = {avg:.2}");

    Ok(())
}
