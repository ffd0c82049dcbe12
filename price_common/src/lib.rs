//!
//! Lazily generated random prices inside a half-open interval.
//!
//! This crate aggregates:
//! - `error` — unified error type `PriceError` used across the workspace.
//! - `result` — handy `Result<T, PriceError>` alias.
//! - `bounds` — validated `[lower, upper)` interval.
//! - `stream` — the endless rejection-sampling `PriceStream` and its constructors.
//! - `point` — time-indexed `PricePoint` pairs.
#![warn(missing_docs)]
pub mod bounds;
pub mod error;
pub mod point;
pub mod result;
pub mod stream;

pub use bounds::PriceBounds;
pub use error::PriceError;
pub use point::{PricePoint, index_prices};
pub use result::Result;
pub use stream::{PriceStream, SamplingStats, first, generate, generate_seeded, generate_with};
