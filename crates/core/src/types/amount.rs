//! Type-safe amount representation using arbitrary-precision cents.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits every [`Amount`] carries.
pub const FRACTION_DIGITS: u32 = 2;

/// Errors that can occur when building an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The value is below zero.
    #[error("amount cannot be negative (got {0})")]
    Negative(String),
    /// The input is not a plain decimal number.
    #[error("'{0}' is not a decimal amount")]
    Invalid(String),
}

/// A non-negative fixed-point amount with exactly two fractional digits.
///
/// The amount is stored as an unbounded count of hundredths, so any digit
/// string the user types maps to an amount without loss. Amounts are
/// replaced whole, never mutated field by field.
///
/// ## Examples
///
/// ```
/// use currency_field_core::Amount;
///
/// let amount = Amount::from_cents(12_345);
/// assert_eq!(amount.to_string(), "123.45");
///
/// // Plain decimal strings are accepted and rounded half-up.
/// let parsed: Amount = "9.995".parse().unwrap();
/// assert_eq!(parsed.to_string(), "10.00");
///
/// // There is no upper bound.
/// let huge: Amount = "123456789012345678901234567890.12".parse().unwrap();
/// assert_eq!(huge.to_string(), "123456789012345678901234567890.12");
///
/// // Negative values are rejected.
/// assert!("-1.00".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(BigUint);

impl Amount {
    /// The zero amount, `0.00`.
    #[must_use]
    pub const fn zero() -> Self {
        Self(BigUint::ZERO)
    }

    /// Create an amount from a whole number of hundredths.
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(BigUint::from(cents))
    }

    /// Create an amount from an unbounded number of hundredths.
    #[must_use]
    pub const fn from_big_cents(cents: BigUint) -> Self {
        Self(cents)
    }

    /// Create an amount from a decimal.
    ///
    /// Extra fractional digits are rounded half-up; missing ones are padded.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative after rounding.
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        let rounded =
            value.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(AmountError::Negative(value.to_string()));
        }

        let mantissa = BigUint::from(rounded.mantissa().unsigned_abs());
        let padding = FRACTION_DIGITS.saturating_sub(rounded.scale());
        Ok(Self(mantissa * BigUint::from(10_u32).pow(padding)))
    }

    /// Returns the amount as a whole number of hundredths.
    #[must_use]
    pub const fn cents(&self) -> &BigUint {
        &self.0
    }

    /// Returns the amount as a `Decimal`, or `None` if it does not fit.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        let cents = i128::try_from(&self.0).ok()?;
        Decimal::try_from_i128_with_scale(cents, FRACTION_DIGITS).ok()
    }

    /// Returns `true` if the amount is `0.00`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::ZERO
    }

    /// Render as a plain `1234.56`-style string with `fraction_digits`
    /// fractional digits.
    ///
    /// Dropped digits are rounded half to even; extra digits are zeros.
    #[must_use]
    pub fn to_fixed_string(&self, fraction_digits: u32) -> String {
        let scaled = if fraction_digits >= FRACTION_DIGITS {
            &self.0 * BigUint::from(10_u32).pow(fraction_digits - FRACTION_DIGITS)
        } else {
            let divisor = BigUint::from(10_u32).pow(FRACTION_DIGITS - fraction_digits);
            let quotient = &self.0 / &divisor;
            let twice_remainder = (&self.0 % &divisor) * 2_u32;
            let round_up = match twice_remainder.cmp(&divisor) {
                core::cmp::Ordering::Less => false,
                core::cmp::Ordering::Greater => true,
                core::cmp::Ordering::Equal => quotient.bit(0),
            };
            if round_up { quotient + 1_u32 } else { quotient }
        };

        let width = fraction_digits as usize;
        let digits = scaled.to_string();
        let digits = format!("{digits:0>pad$}", pad = width + 1);
        let (integer, fraction) = digits.split_at(digits.len() - width);
        if fraction.is_empty() {
            integer.to_owned()
        } else {
            format!("{integer}.{fraction}")
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_fixed_string(FRACTION_DIGITS))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parse a plain decimal such as `1234.5`, rounding half-up to cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || AmountError::Invalid(s.to_owned());

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let mut digits = String::with_capacity(integer.len() + 2);
        digits.push_str(integer);
        digits.extend(fraction.chars().chain(core::iter::repeat('0')).take(2));
        let mut cents: BigUint = digits.parse().map_err(|_| invalid())?;
        if fraction.as_bytes().get(2).is_some_and(|&b| b >= b'5') {
            cents += 1_u32;
        }

        if negative && cents != BigUint::ZERO {
            return Err(AmountError::Negative(trimmed.to_owned()));
        }
        Ok(Self(cents))
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}
