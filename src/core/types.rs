use serde::{Deserialize, Serialize};

use crate::core::PricingError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Returns the lowercase wire token, matching [`std::str::FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl std::str::FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` or `"put"` (case-insensitive).
    ///
    /// This is the only boundary where an option-type token can be invalid;
    /// past it the closed enum makes unsupported sides unrepresentable.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidOptionType`] for any other token.
    ///
    /// # Examples
    /// ```
    /// use ferrovan::core::OptionType;
    ///
    /// assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
    /// assert!("straddle".parse::<OptionType>().is_err());
    /// ```
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(PricingError::InvalidOptionType(format!(
                "unsupported option type `{other}`; expected `call` or `put`"
            ))),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
