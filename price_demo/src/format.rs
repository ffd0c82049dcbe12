//! Output formats and line rendering for generated prices.
use std::io::Write;

use clap::ValueEnum;
use price_common::{PricePoint, Result};
use strum_macros::{Display, EnumString};

/// How each generated value is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Plain numbers, or `time price` when time indices are requested.
    Text,
    /// One JSON value per line.
    Json,
}

/// Write a single bare price.
pub fn write_price<W: Write>(out: &mut W, format: OutputFormat, price: f64) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", price)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &price)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write a time-indexed price.
pub fn write_point<W: Write>(out: &mut W, format: OutputFormat, point: &PricePoint) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{} {}", point.time, point.price)?,
        OutputFormat::Json => {
            out.write_all(&point.to_json_bytes()?)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
