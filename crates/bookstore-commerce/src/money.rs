//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that cart totals are exact and
//! always display with the currency's fixed number of decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::CommerceError;

/// Supported currencies.
///
/// Serializes as the upper-case code; deserializes through
/// [`Currency::from_code`], so any case is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CommerceError::UnknownCurrency(s.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a USD value from cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Re-tag the amount with another currency without conversion.
    ///
    /// The catalog is priced in a single currency; this only changes the
    /// symbol used for display.
    pub fn in_currency(&self, currency: Currency) -> Money {
        Money::new(self.amount_cents, currency)
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Format as a display string (e.g., "$49.99", "-$2.50").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}{}{}", self.currency.symbol(), self.unsigned_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}{}", self.unsigned_amount())
    }

    fn unsigned_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_cents.unsigned_abs();
        format!(
            "{}.{:0width$}",
            abs / divisor,
            abs % divisor,
            width = places as usize
        )
    }
}

impl Add for Money {
    type Output = Money;

    /// Adds amounts, keeping the left-hand currency and saturating on overflow.
    fn add(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "Currency mismatch in addition");
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
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
    fn test_money_from_cents() {
        let m = Money::new(1699, Currency::USD);
        assert_eq!(m.amount_cents, 1699);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(1699).display(), "$16.99");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::usd(0).display(), "$0.00");
        assert_eq!(Money::new(1000, Currency::EUR).display_amount(), "10.00");
        assert_eq!(Money::new(1000, Currency::EUR).display(), "\u{20ac}10.00");
    }

    #[test]
    fn test_negative_sign_precedes_symbol() {
        assert_eq!(Money::usd(-250).display(), "-$2.50");
        assert_eq!(Money::usd(-5).display(), "-$0.05");
        assert_eq!(Money::new(-1999, Currency::GBP).display(), "-\u{00a3}19.99");
        assert_eq!(Money::usd(-250).display_amount(), "-2.50");
        assert_eq!(Money::usd(i64::MIN).display(), "-$92233720368547758.08");
    }

    #[test]
    fn test_money_addition_is_exact() {
        // 16.99 + 14.99 * 2 would drift in f64; cents do not.
        let total = Money::usd(1699) + Money::usd(1499) * 2;
        assert_eq!(total.amount_cents, 4697);
        assert_eq!(total.display(), "$46.97");
    }

    #[test]
    fn test_money_multiply_saturates() {
        let m = Money::usd(i64::MAX);
        assert_eq!(m.multiply(2).amount_cents, i64::MAX);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_serde_accepts_any_case() {
        let currency: Currency = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(currency, Currency::GBP);
        assert_eq!(serde_json::to_string(&Currency::GBP).unwrap(), "\"GBP\"");

        let err = serde_json::from_str::<Currency>("\"XYZ\"").unwrap_err();
        assert!(err.to_string().contains("Unknown currency code: XYZ"));
    }
}
