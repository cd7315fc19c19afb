//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendview::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole currency units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// This amount as a percentage of `total` (0.0 when `total` is zero)
    pub fn percent_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            (self.0.abs() as f64 / total.0.abs() as f64) * 100.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50" and "10", with an optional leading `$` and a minus
    /// sign either before or after the symbol ("-10.50", "$-10.50").
    /// Fractional digits beyond the second are truncated. Anything else,
    /// including amounts too large for an i64 of cents, is
    /// `MoneyParseError::InvalidFormat` - this function never panics.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = strip_sign(s);
        let s = s.strip_prefix('$').unwrap_or(s);
        // The sign may also follow the symbol, but only one is allowed
        let (negative, s) = if negative { (true, s) } else { strip_sign(s) };

        let cents = if let Some((units_str, cents_str)) = s.split_once('.') {
            let units = parse_digits(units_str, original)?;

            // Pad or truncate cents to 2 digits
            let cents = match cents_str.len() {
                0 => 0,
                1 => parse_digits(cents_str, original)? * 10,
                _ => {
                    let two = cents_str
                        .get(..2)
                        .ok_or_else(|| MoneyParseError::InvalidFormat(original.to_string()))?;
                    parse_digits(two, original)?
                }
            };

            units
                .checked_mul(100)
                .and_then(|total| total.checked_add(cents))
                .ok_or_else(|| MoneyParseError::InvalidFormat(original.to_string()))?
        } else {
            // Integer format - assume whole currency units
            parse_digits(s, original)?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(original.to_string()))?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Split a leading minus sign off `s`
fn strip_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

/// Parse a non-negative run of ASCII digits
fn parse_digits(s: &str, original: &str) -> Result<i64, MoneyParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidFormat(original.to_string()));
    }
    s.parse()
        .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("$"), "$10.50");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("Rs "), "-Rs 10.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_parse_multibyte_fraction_is_rejected() {
        // Non-ASCII fractional digits are an error, not a panic
        assert!(Money::parse("1.\u{20ac}").is_err());
        assert!(Money::parse("1.5\u{20ac}").is_err());
        assert!(Money::parse("1.５0").is_err());
    }

    #[test]
    fn test_parse_sign_after_symbol() {
        assert_eq!(Money::parse("$-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("-$10.50").unwrap().cents(), -1050);
        // Only one sign is allowed
        assert!(Money::parse("-$-10.50").is_err());
    }

    #[test]
    fn test_parse_overflow_is_rejected() {
        // units * 100 overflows i64
        assert!(Money::parse("922337203685477581").is_err());
        // units * 100 fits, adding the cents does not
        assert!(Money::parse("92233720368547758.99").is_err());
        // too many digits for i64 at all
        assert!(Money::parse("92233720368547758070").is_err());
    }

    #[test]
    fn test_percent_of() {
        let part = Money::from_cents(2500);
        let total = Money::from_cents(10000);
        assert!((part.percent_of(total) - 25.0).abs() < f64::EPSILON);

        // Zero total yields zero, not a division error
        assert_eq!(part.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
