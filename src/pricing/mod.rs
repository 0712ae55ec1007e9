//! Free-function pricing API.
//!
//! Thin fallible wrappers over the engine layer for callers that want a
//! one-call price instead of the instrument/market/engine composition.

pub mod european;
pub mod monte_carlo;

pub use crate::core::types::OptionType;
