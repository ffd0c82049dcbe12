//! Price Demo — pulls a handful of values from a bounded random price stream and
//! prints them to stdout, optionally paired with their time index.
//!
//! Usage example (CLI):
//! ```bash
//! price_demo --lower 10 --upper 20 --count 5
//! price_demo --seed 42 --with-time --format json
//! ```
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` to see the
//! stream's sampling statistics, `RUST_LOG=trace` to see every rejected draw.
#![warn(missing_docs)]
mod args;
mod format;

use crate::args::Args;
use crate::format::{OutputFormat, write_point, write_price};
use clap::Parser;
use log::{debug, error, info};
use price_common::{PriceStream, Result, generate, generate_seeded, index_prices};
use rand::Rng;
use std::io::{self, BufWriter, Write};

/// Take `count` values from `stream` and write them to `out` in `format`.
fn run<R: Rng, W: Write>(
    mut stream: PriceStream<R>,
    count: usize,
    format: OutputFormat,
    with_time: bool,
    out: &mut W,
) -> Result<()> {
    info!("Taking {} prices from {}", count, stream.bounds());
    if with_time {
        for point in index_prices(stream.by_ref()).take(count) {
            write_point(out, format, &point)?;
        }
    } else {
        for price in stream.first(count) {
            write_price(out, format, price)?;
        }
    }
    out.flush()?;

    let stats = stream.stats();
    debug!(
        "Draws: {}, accepted: {}, rejected: {}, expected acceptance rate: {:.3}",
        stats.draws,
        stats.accepted,
        stats.rejected(),
        stream.bounds().acceptance_rate()
    );
    Ok(())
}

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = start(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn start(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.seed {
        Some(seed) => {
            info!("Using seeded generator (seed={})", seed);
            let stream = generate_seeded(args.lower, args.upper, seed)?;
            run(stream, args.count, args.format, args.with_time, &mut out)
        }
        None => {
            let stream = generate(args.lower, args.upper)?;
            run(stream, args.count, args.format, args.with_time, &mut out)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
