//! Crate-wide error types.
//!
//! A single `Error` enum that every fallible operation funnels into,
//! keeping the caller's handling uniform. All variants are `Copy` so
//! failures can propagate out of sampling loops without allocation.
//!
//! Degenerate ADC codes and non-positive ratios would otherwise flow
//! into the math as NaN/infinity; here those conditions are typed
//! failures instead.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raw ADC code of zero or at/above the full-scale code. The
    /// voltage-divider equation divides by the code and subtracts it
    /// from full scale, so neither end has a defined resistance.
    SampleOutOfRange {
        /// The offending raw code.
        raw: u16,
    },
    /// Rs/Ro ratio was zero, negative or non-finite; the curve's
    /// logarithm is undefined there.
    NonPositiveRatio,
    /// A manually supplied baseline resistance must be strictly
    /// positive.
    InvalidBaseline,
    /// A configuration field failed range validation. The message names
    /// the field and the constraint.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleOutOfRange { raw } => {
                write!(f, "raw ADC code {raw} is outside the usable range")
            }
            Self::NonPositiveRatio => write!(f, "Rs/Ro ratio must be positive"),
            Self::InvalidBaseline => write!(f, "baseline resistance must be positive"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
