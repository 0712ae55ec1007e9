//! Instrument-level Monte Carlo pricing engine.
//!
//! Wraps the estimator pipeline in [`crate::mc`] behind the common
//! [`PricingEngine`] trait, adding instrument validation and diagnostics.

use std::collections::HashMap;

use crate::core::{PricingEngine, PricingError, PricingResult};
use crate::instruments::EuropeanOption;
use crate::market::Market;
use crate::mc::{self, DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED};

/// Estimator selection for the Monte Carlo engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimator {
    /// Discounted mean payoff over independent samples.
    Crude,
    /// Antithetic variates: each draw paired with its negation.
    Antithetic,
    /// Strike-centered importance sampling with likelihood-ratio weights.
    ImportanceSampling,
}

impl Estimator {
    fn diagnostic_id(self) -> f64 {
        match self {
            Self::Crude => 0.0,
            Self::Antithetic => 1.0,
            Self::ImportanceSampling => 2.0,
        }
    }
}

/// Monte Carlo pricing engine for European vanilla options.
///
/// Every call constructs a fresh seeded generator, so pricing the same
/// instrument twice under the same configuration is bit-identical.
///
/// # Examples
/// ```
/// use ferrovan::core::PricingEngine;
/// use ferrovan::engines::monte_carlo::{Estimator, MonteCarloPricingEngine};
/// use ferrovan::instruments::EuropeanOption;
/// use ferrovan::market::Market;
///
/// let market = Market::builder().spot(100.0).rate(0.05).vol(0.2).build().unwrap();
/// let engine = MonteCarloPricingEngine::new(10_000, 42)
///     .with_estimator(Estimator::Antithetic);
/// let result = engine.price(&EuropeanOption::call(100.0, 1.0), &market).unwrap();
/// assert!(result.stderr.unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloPricingEngine {
    /// Number of terminal samples requested per pricing call.
    pub num_simulations: usize,
    /// Per-call RNG seed.
    pub seed: u64,
    /// Estimator variant.
    pub estimator: Estimator,
}

impl Default for MonteCarloPricingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_SIMULATIONS, DEFAULT_SEED)
    }
}

impl MonteCarloPricingEngine {
    /// Creates a crude-estimator engine with explicit sample count and seed.
    pub fn new(num_simulations: usize, seed: u64) -> Self {
        Self {
            num_simulations,
            seed,
            estimator: Estimator::Crude,
        }
    }

    /// Selects the estimator variant.
    pub fn with_estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }
}

impl PricingEngine<EuropeanOption> for MonteCarloPricingEngine {
    fn price(
        &self,
        instrument: &EuropeanOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;

        let estimate = match self.estimator {
            Estimator::Crude => mc::crude(
                instrument.option_type,
                market.spot,
                instrument.strike,
                market.rate,
                market.vol,
                instrument.expiry,
                self.num_simulations,
                self.seed,
            )?,
            Estimator::Antithetic => mc::antithetic(
                instrument.option_type,
                market.spot,
                instrument.strike,
                market.rate,
                market.vol,
                instrument.expiry,
                self.num_simulations,
                self.seed,
            )?,
            Estimator::ImportanceSampling => mc::importance_sampling(
                instrument.option_type,
                market.spot,
                instrument.strike,
                market.rate,
                market.vol,
                instrument.expiry,
                self.num_simulations,
                self.seed,
            )?,
        };

        let mut diagnostics = HashMap::new();
        diagnostics.insert(
            "num_simulations".to_string(),
            self.num_simulations as f64,
        );
        diagnostics.insert("samples_used".to_string(), estimate.samples_used as f64);
        diagnostics.insert("estimator".to_string(), self.estimator.diagnostic_id());

        Ok(PricingResult {
            price: estimate.price,
            stderr: Some(estimate.stderr),
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::analytic::BlackScholesEngine;

    fn test_market() -> Market {
        Market::builder()
            .spot(100.0)
            .rate(0.05)
            .vol(0.2)
            .build()
            .expect("valid market")
    }

    #[test]
    fn mc_call_matches_black_scholes_within_one_percent() {
        let market = test_market();
        let option = EuropeanOption::call(100.0, 1.0);

        let mc = MonteCarloPricingEngine::new(100_000, 42)
            .price(&option, &market)
            .expect("mc pricing succeeds");
        let bs = BlackScholesEngine::new()
            .price(&option, &market)
            .expect("bs pricing succeeds");

        let rel_err = ((mc.price - bs.price) / bs.price).abs();
        assert!(
            rel_err <= 0.01,
            "MC/BS relative error too high: mc={} bs={} rel_err={}",
            mc.price,
            bs.price,
            rel_err
        );
    }

    #[test]
    fn antithetic_stderr_is_not_worse_than_crude() {
        let market = test_market();
        let option = EuropeanOption::call(100.0, 1.0);

        let crude = MonteCarloPricingEngine::new(100_000, 42)
            .price(&option, &market)
            .expect("crude MC succeeds");
        let antithetic = MonteCarloPricingEngine::new(100_000, 42)
            .with_estimator(Estimator::Antithetic)
            .price(&option, &market)
            .expect("antithetic MC succeeds");

        assert!(
            antithetic.stderr.expect("stderr present") <= crude.stderr.expect("stderr present"),
            "expected antithetic stderr <= crude stderr"
        );
    }

    #[test]
    fn diagnostics_report_truncated_sample_count() {
        let market = test_market();
        let option = EuropeanOption::put(100.0, 1.0);

        let result = MonteCarloPricingEngine::new(10_001, 42)
            .with_estimator(Estimator::Antithetic)
            .price(&option, &market)
            .unwrap();
        assert_eq!(result.diagnostics["samples_used"], 10_000.0);
    }

    #[test]
    fn zero_simulations_is_a_sample_size_error() {
        let market = test_market();
        let err = MonteCarloPricingEngine::new(0, 42)
            .price(&EuropeanOption::call(100.0, 1.0), &market)
            .unwrap_err();
        assert!(matches!(err, PricingError::SampleSize(_)));
    }
}
