//! Command-line arguments for the price demo.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

use crate::format::OutputFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Inclusive lower bound for generated prices.
    #[clap(long, default_value_t = 24.0, allow_negative_numbers = true)]
    pub lower: f64,

    /// Exclusive upper bound for generated prices.
    #[clap(long, default_value_t = 42.0, allow_negative_numbers = true)]
    pub upper: f64,

    /// How many prices to take from the stream.
    #[clap(long, default_value_t = 10)]
    pub count: usize,

    /// Seed for a reproducible stream. Uses the thread-local generator when absent.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pair each price with its time index.
    #[clap(long)]
    pub with_time: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["price_demo"]).unwrap();
        assert_eq!(args.lower, 24.0);
        assert_eq!(args.upper, 42.0);
        assert_eq!(args.count, 10);
        assert_eq!(args.seed, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.with_time);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "price_demo",
            "--lower",
            "-5",
            "--upper",
            "20",
            "--count",
            "5",
            "--seed",
            "7",
            "--format",
            "json",
            "--with-time",
        ])
        .unwrap();
        assert_eq!(args.lower, -5.0);
        assert_eq!(args.upper, 20.0);
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.with_time);
    }
}
