//! Lazy bounded price stream.
//!
//! `PriceStream` is an endless iterator of `f64` prices inside a
//! [`PriceBounds`] interval. Each call to `next` draws uniformly from
//! `[0, upper)` and throws away draws below `lower` until one is kept
//! (rejection sampling). Nothing is produced ahead of demand, so callers bound
//! the stream with [`PriceStream::first`], [`first`] or `Iterator::take`.
//!
//! The random source is a type parameter. [`generate`] uses the thread-local
//! generator, [`generate_seeded`] a seeded `StdRng` for reproducible output,
//! and [`generate_with`] accepts any `Rng` the caller already owns.
//!
//! Bounds are validated before the stream exists; `lower >= upper` is an
//! error instead of a stream that would spin forever.

use std::iter::FusedIterator;

use log::{debug, trace};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::bounds::PriceBounds;
use crate::result::Result;

/// Draw counters for a single stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingStats {
    /// Raw uniform draws taken from the random source.
    pub draws: u64,
    /// Draws that fell inside the bounds and were yielded.
    pub accepted: u64,
}

impl SamplingStats {
    /// Draws discarded for falling below the lower bound.
    pub fn rejected(&self) -> u64 {
        self.draws - self.accepted
    }

    /// Share of draws kept so far, or `None` before the first draw.
    pub fn observed_acceptance_rate(&self) -> Option<f64> {
        if self.draws == 0 {
            None
        } else {
            Some(self.accepted as f64 / self.draws as f64)
        }
    }
}

/// Endless, pull-based stream of prices in `[lower, upper)`.
#[derive(Debug)]
pub struct PriceStream<R> {
    rng: R,
    bounds: PriceBounds,
    stats: SamplingStats,
}

impl<R: Rng> PriceStream<R> {
    /// Build a stream over already validated bounds.
    pub fn new(bounds: PriceBounds, rng: R) -> Self {
        debug!(
            "Price stream created for {} (expected {:.3} draws per value)",
            bounds,
            bounds.expected_draws_per_value()
        );
        Self {
            rng,
            bounds,
            stats: SamplingStats::default(),
        }
    }

    /// Interval every yielded value lies in.
    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Draw counters accumulated since the stream was created.
    pub fn stats(&self) -> SamplingStats {
        self.stats
    }

    /// Pull exactly `n` values from the stream.
    pub fn first(&mut self, n: usize) -> Vec<f64> {
        self.by_ref().take(n).collect()
    }

    fn draw(&mut self) -> f64 {
        self.stats.draws += 1;
        self.rng.random_range(0.0..self.bounds.upper())
    }
}

impl<R: Rng> Iterator for PriceStream<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        loop {
            let value = self.draw();
            if self.bounds.contains(value) {
                self.stats.accepted += 1;
                return Some(value);
            }
            trace!("Rejected draw {} outside {}", value, self.bounds);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: Rng> FusedIterator for PriceStream<R> {}

/// Stream over `[lower, upper)` backed by the thread-local random generator.
///
/// Every call returns an independent stream; nothing is memoized.
pub fn generate(lower: f64, upper: f64) -> Result<PriceStream<ThreadRng>> {
    generate_with(lower, upper, rand::rng())
}

/// Stream over `[lower, upper)` using a caller-supplied random source.
pub fn generate_with<R: Rng>(lower: f64, upper: f64, rng: R) -> Result<PriceStream<R>> {
    let bounds = PriceBounds::new(lower, upper)?;
    Ok(PriceStream::new(bounds, rng))
}

/// Reproducible stream over `[lower, upper)` seeded with `seed`.
pub fn generate_seeded(lower: f64, upper: f64, seed: u64) -> Result<PriceStream<StdRng>> {
    generate_with(lower, upper, StdRng::seed_from_u64(seed))
}

/// Take the first `n` values of any price sequence.
pub fn first<I>(n: usize, prices: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    prices.into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PriceError;

    #[test]
    fn five_values_between_ten_and_twenty() {
        let prices = first(5, generate(10.0, 20.0).unwrap());
        assert_eq!(prices.len(), 5);
        for price in prices {
            assert!((10.0..20.0).contains(&price), "price {} out of range", price);
        }
    }

    #[test]
    fn reversed_bounds_are_refused() {
        let err = generate(42.0, 24.0).unwrap_err();
        assert!(matches!(err, PriceError::InvalidBounds { .. }));
    }

    #[test]
    fn zero_lower_bound_never_rejects() {
        let mut stream = generate_seeded(0.0, 42.0, 7).unwrap();
        let prices = stream.first(1_000);
        assert_eq!(prices.len(), 1_000);
        assert_eq!(stream.stats().draws, 1_000);
        assert_eq!(stream.stats().rejected(), 0);
        assert_eq!(stream.stats().observed_acceptance_rate(), Some(1.0));
    }

    #[test]
    fn same_seed_same_prices() {
        let a = generate_seeded(24.0, 42.0, 1234).unwrap().first(50);
        let b = generate_seeded(24.0, 42.0, 1234).unwrap().first(50);
        assert_eq!(a, b);
    }

    #[test]
    fn separate_calls_are_not_memoized() {
        // Ten identical f64 draws in a row from the thread-local generator
        // would be a collision far below any realistic failure rate.
        let a = first(10, generate(24.0, 42.0).unwrap());
        let b = first(10, generate(24.0, 42.0).unwrap());
        assert_ne!(a, b);
        assert!(a.iter().chain(&b).all(|p| (24.0..42.0).contains(p)));
    }

    #[test]
    fn different_seeds_give_different_prices() {
        let a = generate_with(24.0, 42.0, StdRng::seed_from_u64(1)).unwrap().first(10);
        let b = generate_with(24.0, 42.0, StdRng::seed_from_u64(2)).unwrap().first(10);
        assert_ne!(a, b);
    }

    #[test]
    fn stream_continues_after_first() {
        let mut stream = generate_seeded(1.0, 2.0, 99).unwrap();
        assert_eq!(stream.first(3).len(), 3);
        assert_eq!(stream.first(4).len(), 4);
        assert_eq!(stream.stats().accepted, 7);
    }

    #[test]
    fn first_zero_draws_nothing() {
        let mut stream = generate_seeded(24.0, 42.0, 5).unwrap();
        assert!(stream.first(0).is_empty());
        assert_eq!(stream.stats(), SamplingStats::default());
        assert_eq!(stream.stats().observed_acceptance_rate(), None);
    }

    #[test]
    fn observed_rate_tracks_expected_rate() {
        let mut stream = generate_seeded(24.0, 42.0, 2024).unwrap();
        stream.first(20_000);
        let observed = stream.stats().observed_acceptance_rate().unwrap();
        let expected = stream.bounds().acceptance_rate();
        assert!(
            (observed - expected).abs() < 0.02,
            "observed {} expected {}",
            observed,
            expected
        );
    }

    #[test]
    fn works_with_borrowed_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        let prices = generate_with(5.0, 6.0, &mut rng).unwrap().first(10);
        assert!(prices.iter().all(|p| (5.0..6.0).contains(p)));
    }
}
