//! Error types for the price stream workspace.
//!
//! `PriceError` covers the ways a stream can be refused at construction time
//! (bad bounds) plus the I/O and JSON failures the demo binary runs into while
//! printing values.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the demo binary.
#[derive(Error, Debug)]
pub enum PriceError {
    /// The lower bound is not strictly below the upper bound, so rejection
    /// sampling would never accept a draw.
    #[error("Invalid bounds: lower bound {lower} must be less than upper bound {upper}")]
    InvalidBounds {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },

    /// A bound is NaN or infinite.
    #[error("Bound must be a finite number, got {0}")]
    NonFiniteBound(f64),

    /// Draws are taken from `[0, upper)`, which is empty when `upper <= 0`.
    #[error("Empty sample range: upper bound {0} must be greater than zero")]
    EmptySampleRange(f64),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding JSON via serde_json.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
