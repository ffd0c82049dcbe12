//! Result alias defaulting the error type to `PriceError`.
use crate::error::PriceError;

/// Workspace-wide `Result` alias with `PriceError` as the default error.
pub type Result<T, E = PriceError> = std::result::Result<T, E>;
