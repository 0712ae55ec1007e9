//! Core traits, common domain types, and library-wide result/error structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::market::Market;

pub mod types;

pub use types::*;

/// Common trait implemented by every priceable instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and bindings.
    fn instrument_type(&self) -> &str;
}

/// Pricing engine abstraction over an instrument type.
pub trait PricingEngine<I: Instrument> {
    /// Prices an instrument under the provided market state.
    fn price(&self, instrument: &I, market: &Market) -> Result<PricingResult, PricingError>;
}

/// Unified engine result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// Standard error of the estimator (Monte Carlo engines only).
    pub stderr: Option<f64>,
    /// Engine-specific scalar diagnostics.
    pub diagnostics: HashMap<String, f64>,
}

/// Engine and model errors surfaced by the API.
///
/// Every pricing entry point returns one of these at the point of detection;
/// nothing is retried and nothing is clamped into a silent NaN/Inf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Option-type token outside the closed `{call, put}` set.
    InvalidOptionType(String),
    /// Input outside the model domain (non-positive spot, strike, volatility,
    /// or expiry, or a non-finite derived quantity).
    Domain(String),
    /// Simulation count too small for the requested estimator.
    SampleSize(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOptionType(msg) => write!(f, "invalid option type: {msg}"),
            Self::Domain(msg) => write!(f, "domain error: {msg}"),
            Self::SampleSize(msg) => write!(f, "sample size error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_message() {
        let err = PricingError::Domain("expiry must be > 0".to_string());
        assert_eq!(err.to_string(), "domain error: expiry must be > 0");
    }
}
