//! Time-indexed prices.
//!
//! Pairs consecutive prices with a running time index starting at zero. The
//! pairing is purely positional: nothing ties a `time` to a particular draw.

use serde::{Deserialize, Serialize};

use crate::result::Result;

/// A price together with its position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Zero-based tick index.
    pub time: u64,
    /// Price at this tick.
    pub price: f64,
}

impl PricePoint {
    /// Encode the point to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Lazily attach time indices `0, 1, 2, ...` to a price sequence.
pub fn index_prices<I>(prices: I) -> impl Iterator<Item = PricePoint>
where
    I: IntoIterator<Item = f64>,
{
    (0u64..)
        .zip(prices)
        .map(|(time, price)| PricePoint { time, price })
}
