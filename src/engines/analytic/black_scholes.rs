//! Closed-form Black-Scholes engine for European vanilla options.
//!
//! This is the reference oracle the Monte Carlo estimators are validated
//! against. The kernel assumes a validated domain; the engine and the
//! free-function API in [`crate::pricing::european`] perform the validation.

use std::collections::HashMap;

use crate::core::{OptionType, PricingEngine, PricingError, PricingResult};
use crate::instruments::EuropeanOption;
use crate::market::Market;
use crate::math::normal_cdf;

/// Analytic Black-Scholes engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

#[inline]
fn price_from_d(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    discount_factor: f64,
    d1: f64,
    d2: f64,
) -> f64 {
    match option_type {
        OptionType::Call => spot * normal_cdf(d1) - strike * discount_factor * normal_cdf(d2),
        OptionType::Put => strike * discount_factor * normal_cdf(-d2) - spot * normal_cdf(-d1),
    }
}

/// Black-Scholes price kernel.
///
/// Callers must have validated `spot > 0`, `strike > 0`, `vol > 0`, and
/// `expiry > 0`; degenerate inputs belong to the fallible entry points, not
/// here.
#[inline]
pub(crate) fn bs_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let df = (-rate * expiry).exp();
    price_from_d(option_type, spot, strike, df, d1, d2)
}

impl PricingEngine<EuropeanOption> for BlackScholesEngine {
    fn price(
        &self,
        instrument: &EuropeanOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;

        let (d1, d2) = d1_d2(
            market.spot,
            instrument.strike,
            market.rate,
            market.vol,
            instrument.expiry,
        );
        let discount_factor = (-market.rate * instrument.expiry).exp();
        let price = price_from_d(
            instrument.option_type,
            market.spot,
            instrument.strike,
            discount_factor,
            d1,
            d2,
        );

        let mut diagnostics = HashMap::new();
        diagnostics.insert("d1".to_string(), d1);
        diagnostics.insert("d2".to_string(), d2);
        diagnostics.insert("discount_factor".to_string(), discount_factor);

        Ok(PricingResult {
            price,
            stderr: None,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_market() -> Market {
        Market::builder()
            .spot(100.0)
            .rate(0.05)
            .vol(0.2)
            .build()
            .expect("valid market")
    }

    #[test]
    fn black_scholes_known_values() {
        let market = test_market();
        let engine = BlackScholesEngine::new();

        let call = engine
            .price(&EuropeanOption::call(100.0, 1.0), &market)
            .unwrap();
        assert_relative_eq!(call.price, 10.4506, epsilon = 2e-4);

        let put = engine
            .price(&EuropeanOption::put(100.0, 1.0), &market)
            .unwrap();
        assert_relative_eq!(put.price, 5.5735, epsilon = 2e-4);
    }

    #[test]
    fn engine_price_agrees_with_the_kernel() {
        let market = test_market();
        let result = BlackScholesEngine::new()
            .price(&EuropeanOption::put(95.0, 0.5), &market)
            .unwrap();
        let kernel = bs_price(OptionType::Put, 100.0, 95.0, 0.05, 0.2, 0.5);
        assert_relative_eq!(result.price, kernel, epsilon = 1e-12);
    }

    #[test]
    fn engine_rejects_degenerate_instrument() {
        let market = test_market();
        let err = BlackScholesEngine::new()
            .price(&EuropeanOption::call(100.0, 0.0), &market)
            .unwrap_err();
        assert!(matches!(err, PricingError::Domain(_)));
    }

    #[test]
    fn diagnostics_expose_d1_d2() {
        let market = test_market();
        let result = BlackScholesEngine::new()
            .price(&EuropeanOption::call(100.0, 1.0), &market)
            .unwrap();
        assert!(result.diagnostics.contains_key("d1"));
        assert!(result.diagnostics.contains_key("d2"));
        assert!(result.stderr.is_none());
    }
}
