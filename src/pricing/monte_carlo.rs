//! Monte Carlo European option pricing helpers.
//!
//! Each function constructs a fresh seeded generator per call (pass
//! [`crate::mc::DEFAULT_SEED`] for the library's reproducibility default)
//! and returns only the price; the engine layer in
//! [`crate::engines::monte_carlo`] exposes the standard error and
//! diagnostics alongside it.

use crate::core::{OptionType, PricingError};
use crate::mc;

/// Crude Monte Carlo price of a European option.
///
/// Parameters follow [`crate::pricing::european::black_scholes_price`], plus
/// `num_simulations` (terminal samples, conventionally
/// [`crate::mc::DEFAULT_NUM_SIMULATIONS`]) and the per-call `seed`.
///
/// # Errors
/// [`PricingError::Domain`] for non-positive `s`, `k`, `sigma`, or `t`;
/// [`PricingError::SampleSize`] when `num_simulations` is zero.
///
/// # Examples
/// ```
/// use ferrovan::core::OptionType;
/// use ferrovan::mc::{DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED};
/// use ferrovan::pricing::monte_carlo::monte_carlo_crude_price;
///
/// let price = monte_carlo_crude_price(
///     OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0,
///     DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED,
/// ).unwrap();
/// assert!(price > 0.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn monte_carlo_crude_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
    num_simulations: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    mc::crude(option_type, s, k, r, sigma, t, num_simulations, seed).map(|est| est.price)
}

/// Antithetic-variates Monte Carlo price of a European option.
///
/// Odd `num_simulations` is truncated to `2 * floor(num_simulations / 2)`
/// total samples; see [`crate::mc::antithetic`].
#[allow(clippy::too_many_arguments)]
pub fn monte_carlo_antithetic_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
    num_simulations: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    mc::antithetic(option_type, s, k, r, sigma, t, num_simulations, seed).map(|est| est.price)
}

/// Importance-sampling Monte Carlo price of a European option.
///
/// Samples from a strike-centered shifted normal and reweights by the
/// likelihood ratio; see [`crate::mc::importance_sampling`].
#[allow(clippy::too_many_arguments)]
pub fn monte_carlo_importance_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
    num_simulations: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    mc::importance_sampling(option_type, s, k, r, sigma, t, num_simulations, seed)
        .map(|est| est.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::{DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED};

    #[test]
    fn wrappers_agree_with_the_estimator_layer() {
        let price = monte_carlo_crude_price(
            OptionType::Call,
            100.0,
            100.0,
            0.05,
            0.2,
            1.0,
            DEFAULT_NUM_SIMULATIONS,
            DEFAULT_SEED,
        )
        .unwrap();
        let est = mc::crude(
            OptionType::Call,
            100.0,
            100.0,
            0.05,
            0.2,
            1.0,
            DEFAULT_NUM_SIMULATIONS,
            DEFAULT_SEED,
        )
        .unwrap();
        assert_eq!(price, est.price);
    }

    #[test]
    fn zero_expiry_is_a_domain_error_for_every_wrapper() {
        assert!(matches!(
            monte_carlo_crude_price(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 0.0, 1_000, 42),
            Err(PricingError::Domain(_))
        ));
        assert!(matches!(
            monte_carlo_antithetic_price(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 0.0, 1_000, 42),
            Err(PricingError::Domain(_))
        ));
        assert!(matches!(
            monte_carlo_importance_price(OptionType::Call, 100.0, 100.0, 0.05, 0.2, 0.0, 1_000, 42),
            Err(PricingError::Domain(_))
        ));
    }
}
