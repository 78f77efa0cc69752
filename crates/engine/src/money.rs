use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::EngineError;

/// Money amount represented as **integer kopecks**.
///
/// Use this type for all monetary values in the engine (record amounts,
/// totals, averages) to avoid floating-point drift. Floats only appear at
/// the serialization boundary, where the persisted blob stores amounts as
/// plain decimal numbers.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12,34 ₽");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer kopecks.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in kopecks.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Converts to the major-unit decimal number stored in the blob.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts a major-unit decimal number into kopecks, rounding to the
    /// nearest kopeck.
    ///
    /// Returns an error for non-finite values and values outside the `i64`
    /// kopeck range.
    pub fn from_major(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidAmount("amount is not finite".to_string()));
        }
        let minor = (value * 100.0).round();
        if minor < i64::MIN as f64 || minor > i64::MAX as f64 {
            return Err(EngineError::InvalidAmount("amount too large".to_string()));
        }
        Ok(Self(minor as i64))
    }
}

impl fmt::Display for Money {
    /// Formats as rubles in the fixed ru-RU style: thousands separated by
    /// spaces, comma before kopecks, trailing ruble sign (`1 234,56 ₽`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let rubles = abs / 100;
        let kopecks = abs % 100;

        let digits = rubles.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}{grouped},{kopecks:02} ₽")
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    /// The persisted blob stores amounts as decimal numbers, not kopecks.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major(value).map_err(serde::de::Error::custom)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into kopecks.
    ///
    /// Accepts `.` or `,` as decimal separator.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let normalized = trimmed.replace(',', ".");
        let mut parts = normalized.split('.');
        let rubles_str = parts.next().ok_or_else(invalid)?;
        let kopecks_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if rubles_str.is_empty() || !rubles_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let rubles: i64 = rubles_str.parse().map_err(|_| invalid())?;

        let kopecks: i64 = match kopecks_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => {
                        return Err(EngineError::InvalidAmount(
                            "too many decimals".to_string(),
                        ));
                    }
                }
            }
        };

        let total = rubles
            .checked_mul(100)
            .and_then(|v| v.checked_add(kopecks))
            .ok_or_else(overflow)?;

        Ok(Money(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_rub() {
        assert_eq!(Money::new(0).to_string(), "0,00 ₽");
        assert_eq!(Money::new(1).to_string(), "0,01 ₽");
        assert_eq!(Money::new(10).to_string(), "0,10 ₽");
        assert_eq!(Money::new(1050).to_string(), "10,50 ₽");
        assert_eq!(Money::new(123_456_789).to_string(), "1 234 567,89 ₽");
        assert_eq!(Money::new(-1050).to_string(), "-10,50 ₽");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Money>().unwrap().minor(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().minor(), 1050);
        assert_eq!("10,50".parse::<Money>().unwrap().minor(), 1050);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().minor(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("-5".parse::<Money>().is_err());
    }

    #[test]
    fn serde_uses_major_units() {
        let amount = Money::new(15_050);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "150.5");

        let parsed: Money = serde_json::from_str("150.5").unwrap();
        assert_eq!(parsed, amount);
        let parsed: Money = serde_json::from_str("150").unwrap();
        assert_eq!(parsed.minor(), 15_000);
    }
}
