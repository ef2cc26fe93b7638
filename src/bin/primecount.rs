//! Count primes in `[1, n)` across a fixed number of workers.
//!
//! Prints the single total to stdout, terminated by a newline, and exits
//! zero. Logging goes to stderr (control the level with `RUST_LOG`).
//! Invalid inputs exit non-zero with an error message instead of a
//! fabricated count.
//!
//! # Usage
//!
//! ```sh
//! primecount 10 --workers 3
//! ```

use anyhow::{Context, Result};
use clap::{Arg, Command, value_parser};
use refold::{count_primes_parallel, default_workers};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("primecount")
        .about("Count primes in [1, n) across a fixed number of workers")
        .arg(
            Arg::new("n")
                .required(true)
                .value_parser(value_parser!(u64))
                .help("Exclusive upper bound of the domain [1, n)"),
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .short('w')
                .value_parser(value_parser!(u64))
                .help("Number of workers (defaults to the logical CPU count)"),
        )
        .get_matches();

    let n = *matches.get_one::<u64>("n").context("n is required")?;
    let workers = matches
        .get_one::<u64>("workers")
        .copied()
        .unwrap_or_else(default_workers);

    let total = count_primes_parallel(n, workers)?;
    println!("{total}");
    Ok(())
}
