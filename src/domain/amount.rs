use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Fixed-point decimal currency amount using i64 (multiply by 10,000)
///
/// Four fractional digits are kept exactly, so sums of balances are
/// associative and commutative. On the wire an amount is a JSON number; on
/// decode both JSON numbers and decimal strings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 10_000;
    const FRACTION_DIGITS: usize = 4;

    /// Create from raw scaled value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get raw scaled value
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Zero value
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Whole currency units (e.g. `Amount::from_units(150)` is 150.0000)
    pub fn from_units(units: i64) -> Result<Self, DomainError> {
        units
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(DomainError::Overflow)
    }

    /// Parse from decimal string (e.g., "1.5000", "-20", "0.25", ".5")
    ///
    /// Only plain decimal notation is accepted: an optional sign, digits, and
    /// at most four fractional digits. `NaN`, `inf` and exponent forms are
    /// rejected.
    pub fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            Some((integer, decimal)) => (integer, decimal),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        // ".5" is half a unit, "." alone is nothing
        if (integer_part.is_empty() && decimal_part.is_empty())
            || !all_digits(integer_part)
            || !all_digits(decimal_part)
            || decimal_part.len() > Self::FRACTION_DIGITS
        {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = if integer_part.is_empty() {
            0
        } else {
            integer_part.parse().map_err(|_| DomainError::Overflow)?
        };

        let decimal: i64 = if decimal_part.is_empty() {
            0
        } else {
            format!("{:0<4}", decimal_part)
                .parse()
                .map_err(|_| DomainError::InvalidAmount)?
        };

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    /// Convert from a binary float, rounding to four fractional digits
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount);
        }

        let scaled = (value * Self::SCALE as f64).round();
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return Err(DomainError::Overflow);
        }

        Ok(Self(scaled as i64))
    }

    /// Convert to a float for the wire format
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Convert to decimal string with 4 decimal places
    pub fn to_decimal_string(&self) -> String {
        let abs_value = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();
        let integer_part = abs_value / scale;
        let decimal_part = abs_value % scale;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, integer_part, decimal_part)
    }

    /// Checked addition, returns None on overflow
    pub fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction, returns None on underflow
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked negation, returns None for the minimum value
    pub fn checked_neg(&self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Amount::from_units(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        let units = i64::try_from(v).map_err(|_| E::custom(DomainError::Overflow))?;
        Amount::from_units(units).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Amount::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::from_decimal_str(v).map_err(E::custom)
    }
}
