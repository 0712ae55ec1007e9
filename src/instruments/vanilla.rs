//! European vanilla option contract definition used throughout the library.
//!
//! [`EuropeanOption`] stores side, strike, and expiry. Exercise is European
//! only; there is no exercise-style field to misconfigure. Validation rejects
//! `expiry <= 0` outright: degenerate expiries surface as domain errors
//! instead of falling back to intrinsic value.

use serde::{Deserialize, Serialize};

use crate::core::{Instrument, OptionType, PricingError};

/// European vanilla option contract.
///
/// This is the canonical input for both the closed-form and Monte Carlo
/// engines: strike `K`, expiry `T` in year fractions, and the option side.
///
/// # Examples
/// ```
/// use ferrovan::core::OptionType;
/// use ferrovan::instruments::EuropeanOption;
///
/// let option = EuropeanOption {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
/// };
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
}

impl EuropeanOption {
    /// Builds a European call option.
    pub fn call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
        }
    }

    /// Builds a European put option.
    pub fn put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::Domain`] when:
    /// - `strike <= 0`
    /// - `expiry <= 0`
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.strike <= 0.0 {
            return Err(PricingError::Domain(
                "option strike must be > 0".to_string(),
            ));
        }
        if self.expiry <= 0.0 {
            return Err(PricingError::Domain(
                "option expiry must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for EuropeanOption {
    fn instrument_type(&self) -> &str {
        "EuropeanOption"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_side() {
        assert_eq!(EuropeanOption::call(100.0, 1.0).option_type, OptionType::Call);
        assert_eq!(EuropeanOption::put(95.0, 0.5).option_type, OptionType::Put);
    }

    #[test]
    fn validate_rejects_zero_expiry() {
        let err = EuropeanOption::call(100.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, PricingError::Domain(_)));
    }

    #[test]
    fn validate_rejects_nonpositive_strike() {
        let err = EuropeanOption::put(-5.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, PricingError::Domain(_)));
    }
}
