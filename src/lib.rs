//! Ferrovan prices European vanilla options by stochastic simulation,
//! cross-checked against the Black-Scholes closed form.
//!
//! The core is a Monte Carlo engine over the exact GBM terminal
//! distribution, with two variance-reduction estimators (antithetic
//! variates, strike-centered importance sampling) that stay unbiased for
//! the same Black-Scholes target. A path simulator feeds display
//! collaborators with full multi-step GBM path matrices.
//!
//! References used across modules:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13 and 21.
//! - Glasserman, *Monte Carlo Methods in Financial Engineering* (2004), Ch. 4.
//!
//! Numerical considerations:
//! - Every estimator exposes its standard error; confidence is sampling-driven
//!   and shrinks as O(1/sqrt(n)).
//! - Pricing calls construct a fresh seeded generator and never touch global
//!   state, so identical inputs and seed are bit-identical.
//! - Degenerate inputs (non-positive spot, strike, vol, expiry) surface as
//!   domain errors, never as silent NaN/Inf.
//!
//! # Feature Flags
//! - `parallel`: enables Rayon-powered element-wise simulation maps. Draw
//!   generation and reductions stay serial, so results are unchanged.
//!
//! # Quick Start
//! Price a call three ways:
//! ```rust
//! use ferrovan::core::OptionType;
//! use ferrovan::mc::{DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED};
//! use ferrovan::pricing::european::black_scholes_price;
//! use ferrovan::pricing::monte_carlo::monte_carlo_antithetic_price;
//!
//! let bs = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
//! let mc = monte_carlo_antithetic_price(
//!     OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0,
//!     DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED,
//! ).unwrap();
//! assert!((mc - bs).abs() / bs < 0.05);
//! ```
//!
//! Or through the instrument/engine composition:
//! ```rust
//! use ferrovan::core::PricingEngine;
//! use ferrovan::engines::monte_carlo::{Estimator, MonteCarloPricingEngine};
//! use ferrovan::instruments::EuropeanOption;
//! use ferrovan::market::Market;
//!
//! let market = Market::builder().spot(100.0).rate(0.05).vol(0.2).build().unwrap();
//! let engine = MonteCarloPricingEngine::new(50_000, 42)
//!     .with_estimator(Estimator::ImportanceSampling);
//! let result = engine.price(&EuropeanOption::put(95.0, 0.5), &market).unwrap();
//! assert!(result.price > 0.0 && result.stderr.unwrap() > 0.0);
//! ```
//!
//! Simulate display paths:
//! ```rust
//! use ferrovan::mc::paths::simulate_paths;
//!
//! let paths = simulate_paths(100.0, 1.0, 0.05, 0.2, 50, 10, 42).unwrap();
//! assert_eq!(paths.shape(), (11, 50));
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;
pub mod mc;
pub mod models;
pub mod pricing;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::engines::analytic::BlackScholesEngine;
    pub use crate::engines::monte_carlo::{Estimator, MonteCarloPricingEngine};
    pub use crate::instruments::EuropeanOption;
    pub use crate::market::Market;
}
