//! Market data container used by all pricing engines.

use serde::{Deserialize, Serialize};

use crate::core::PricingError;

/// Market snapshot: spot, risk-free rate, and a flat volatility.
///
/// Volatility surfaces and dividend yields are out of scope; every engine in
/// this crate prices off a single annualized volatility.
///
/// # Examples
/// ```
/// use ferrovan::market::Market;
///
/// let market = Market::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .vol(0.20)
///     .build()
///     .unwrap();
/// assert_eq!(market.spot, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Spot price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Flat annualized volatility.
    pub vol: f64,
}

impl Market {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::default()
    }
}

/// Builder for [`Market`].
#[derive(Debug, Clone, Default)]
pub struct MarketBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    vol: Option<f64>,
}

impl MarketBuilder {
    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the continuously compounded risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the flat annualized volatility.
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds the snapshot.
    ///
    /// # Errors
    /// Returns [`PricingError::Domain`] when spot, rate, or vol is missing,
    /// or when spot or vol is not strictly positive.
    pub fn build(self) -> Result<Market, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::Domain("market spot is required".to_string()))?;
        let rate = self
            .rate
            .ok_or_else(|| PricingError::Domain("market rate is required".to_string()))?;
        let vol = self
            .vol
            .ok_or_else(|| PricingError::Domain("market vol is required".to_string()))?;

        if spot <= 0.0 {
            return Err(PricingError::Domain("market spot must be > 0".to_string()));
        }
        if vol <= 0.0 {
            return Err(PricingError::Domain("market vol must be > 0".to_string()));
        }

        Ok(Market { spot, rate, vol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_all_fields() {
        let err = Market::builder().spot(100.0).rate(0.05).build().unwrap_err();
        assert!(matches!(err, PricingError::Domain(_)));
    }

    #[test]
    fn builder_rejects_nonpositive_vol() {
        let err = Market::builder()
            .spot(100.0)
            .rate(0.05)
            .vol(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, PricingError::Domain(_)));
    }

    #[test]
    fn builder_accepts_negative_rate() {
        let market = Market::builder()
            .spot(100.0)
            .rate(-0.01)
            .vol(0.2)
            .build()
            .unwrap();
        assert_eq!(market.rate, -0.01);
    }
}
