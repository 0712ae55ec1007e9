//! Pricing engines over [`crate::instruments`] contracts.

pub mod analytic;
pub mod monte_carlo;
