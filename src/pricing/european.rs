//! Closed-form European option pricing helpers.

use crate::core::{OptionType, PricingError};
use crate::engines::analytic::black_scholes::bs_price;

/// Black-Scholes price of a European option.
///
/// Parameters:
/// - `option_type`: call or put payoff direction.
/// - `s`: current spot price.
/// - `k`: strike price.
/// - `r`: continuously compounded risk-free rate.
/// - `sigma`: annualized volatility.
/// - `t`: time to expiry in years.
///
/// # Errors
/// Returns [`PricingError::Domain`] when `s`, `k`, `t`, or `sigma` is not
/// strictly positive. Degenerate inputs are never clamped to intrinsic
/// value.
///
/// # Examples
/// ```
/// use ferrovan::core::OptionType;
/// use ferrovan::pricing::european::black_scholes_price;
///
/// let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// let put = black_scholes_price(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// assert!(call > put);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Result<f64, PricingError> {
    if s <= 0.0 {
        return Err(PricingError::Domain("spot must be > 0".to_string()));
    }
    if k <= 0.0 {
        return Err(PricingError::Domain("strike must be > 0".to_string()));
    }
    if t <= 0.0 {
        return Err(PricingError::Domain("expiry must be > 0".to_string()));
    }
    if sigma <= 0.0 {
        return Err(PricingError::Domain("vol must be > 0".to_string()));
    }

    Ok(bs_price(option_type, s, k, r, sigma, t))
}
