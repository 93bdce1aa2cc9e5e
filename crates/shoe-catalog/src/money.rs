//! Money type for shoe prices.
//!
//! Listing feeds carry prices in minor units (cents), so amounts are kept
//! as integers and only turned into decimals for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Currencies the storefront prices shoes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places between minor and major units.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in the smallest unit of its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor units (e.g., cents).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a possibly fractional minor-unit amount.
    ///
    /// Fractions round half away from zero. NaN and infinities are rejected,
    /// `field` names the offending input in the error.
    ///
    /// ```
    /// use shoe_catalog::money::{Currency, Money};
    /// let m = Money::try_from_minor_f64(12549.5, Currency::USD, "price").unwrap();
    /// assert_eq!(m.amount_minor, 12550);
    /// assert!(Money::try_from_minor_f64(f64::NAN, Currency::USD, "salePrice").is_err());
    /// ```
    pub fn try_from_minor_f64(
        amount: f64,
        currency: Currency,
        field: &'static str,
    ) -> Result<Self, CatalogError> {
        if !amount.is_finite() {
            return Err(CatalogError::NonFiniteAmount(field));
        }
        Ok(Self::new(amount.round() as i64, currency))
    }

    /// Format as a display string (e.g., "$165.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "165.00").
    ///
    /// Integer arithmetic only, so every `i64` amount prints exactly.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        if places == 0 {
            return format!("{sign}{abs}");
        }

        let divisor = 10_u64.pow(places);
        let width = places as usize;
        format!("{sign}{}.{:0width$}", abs / divisor, abs % divisor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(16500, Currency::USD).display(), "$165.00");
        assert_eq!(Money::new(12550, Currency::USD).display(), "$125.50");
        assert_eq!(Money::new(0, Currency::USD).display(), "$0.00");
        assert_eq!(Money::new(9800, Currency::JPY).display(), "\u{00a5}9800");
    }

    #[test]
    fn test_money_from_fractional_minor() {
        let m = Money::try_from_minor_f64(25.0, Currency::USD, "salePrice").unwrap();
        assert_eq!(m.amount_minor, 25);

        let m = Money::try_from_minor_f64(-0.4, Currency::USD, "salePrice").unwrap();
        assert_eq!(m.amount_minor, 0);
    }

    #[test]
    fn test_money_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Money::try_from_minor_f64(bad, Currency::USD, "salePrice").unwrap_err();
            assert_eq!(err, CatalogError::NonFiniteAmount("salePrice"));
        }
    }

    #[test]
    fn test_money_display_is_exact_for_large_amounts() {
        assert_eq!(
            Money::new(i64::MAX, Currency::USD).display(),
            "$92233720368547758.07"
        );
        assert_eq!(
            Money::new(9_007_199_254_740_993, Currency::USD).display_amount(),
            "90071992547409.93"
        );
        assert_eq!(Money::new(i64::MIN, Currency::JPY).display_amount(), "-9223372036854775808");
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::new(-150, Currency::USD).display_amount(), "-1.50");
        assert_eq!(Money::new(-5, Currency::EUR).display_amount(), "-0.05");
    }
}
