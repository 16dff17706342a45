//! Option kind.

use std::fmt;
use std::str::FromStr;

use futopt_core::types::PricingError;

/// Kind of a European option.
///
/// Parses case-insensitively from `"CALL"` / `"PUT"`; any other text is
/// rejected with [`PricingError::InvalidOptionType`].
///
/// # Examples
/// ```
/// use futopt_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.to_string(), "CALL");
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum OptionType {
    /// Right to buy the future at the strike
    Call,
    /// Right to sell the future at the strike
    Put,
}

impl OptionType {
    /// Upper-case name, as accepted by [`FromStr`].
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }

    /// Returns true for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for [`OptionType::Put`].
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("CALL") {
            Ok(OptionType::Call)
        } else if s.eq_ignore_ascii_case("PUT") {
            Ok(OptionType::Put)
        } else {
            Err(PricingError::InvalidOptionType(s.to_string()))
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
