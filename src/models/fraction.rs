// src/models/fraction.rs
//
// Exact decimal numbers for the doubling method of binary conversion.
// Doubling works on decimal digits, so a remainder is zero exactly when
// the written-out arithmetic says so (0.1 never terminates, 0.625 does).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 10^18 is the largest power of ten whose double still fits in a u64.
pub const MAX_DECIMAL_PLACES: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("'{0}' is not a decimal number")]
    Malformed(String),
    #[error("'{0}' is outside [0, 1)")]
    OutOfRange(String),
    #[error("'{0}' has more than {} decimal places", MAX_DECIMAL_PLACES)]
    TooPrecise(String),
}

/// `digits / 10^scale`, kept normalized (no trailing zero digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    digits: u64,
    scale: u32,
}

impl Decimal {
    fn new(digits: u64, scale: u32) -> Self {
        let mut d = Self { digits, scale };
        while d.scale > 0 && d.digits % 10 == 0 {
            d.digits /= 10;
            d.scale -= 1;
        }
        d
    }

    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Parses a fraction in [0, 1) such as "0.625" or ".5".
    pub fn fraction(text: &str) -> Result<Self, FractionError> {
        text.parse()
    }

    /// Uses the shortest representation that round-trips the float,
    /// so `0.1f32` becomes exactly 0.1.
    pub fn fraction_from_f32(value: f32) -> Result<Self, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::Malformed(value.to_string()));
        }
        Self::fraction(&value.to_string())
    }

    fn unit(&self) -> u64 {
        10u64.pow(self.scale)
    }

    pub fn whole(&self) -> u64 {
        self.digits / self.unit()
    }

    pub fn fractional(&self) -> Decimal {
        Decimal::new(self.digits % self.unit(), self.scale)
    }

    /// Twice the fractional part; the whole part is dropped first, so the
    /// result is below 2 and fits for any scale up to `MAX_DECIMAL_PLACES`.
    pub fn double_fraction(&self) -> Decimal {
        Decimal::new((self.digits % self.unit()) * 2, self.scale)
    }

    pub fn is_zero(&self) -> bool {
        self.digits == 0
    }
}

impl FromStr for Decimal {
    type Err = FractionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let malformed = || FractionError::Malformed(text.to_string());

        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(malformed());
        }
        if whole.starts_with('-') {
            return Err(FractionError::OutOfRange(text.to_string()));
        }
        if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }

        // trailing zeros carry no precision
        let frac = frac.trim_end_matches('0');
        let scale = frac.len() as u32;
        if scale > MAX_DECIMAL_PLACES {
            return Err(FractionError::TooPrecise(text.to_string()));
        }

        if !whole.trim_start_matches('0').is_empty() {
            return Err(FractionError::OutOfRange(text.to_string()));
        }
        let frac_digits: u64 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| malformed())?
        };

        Ok(Decimal::new(frac_digits, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "{}.0", self.whole())
        } else {
            write!(
                f,
                "{}.{:0width$}",
                self.whole(),
                self.digits % self.unit(),
                width = self.scale as usize
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Decimal::fraction("0.625").unwrap().to_string(), "0.625");
        assert_eq!(Decimal::fraction(".5").unwrap().to_string(), "0.5");
        assert_eq!(Decimal::fraction("0.0500").unwrap().to_string(), "0.05");
        assert_eq!(Decimal::fraction("0").unwrap().to_string(), "0.0");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Decimal::fraction("1.5"),
            Err(FractionError::OutOfRange(_))
        ));
        assert!(matches!(
            Decimal::fraction("-0.5"),
            Err(FractionError::OutOfRange(_))
        ));
        assert!(matches!(
            Decimal::fraction("0.5x"),
            Err(FractionError::Malformed(_))
        ));
        assert!(matches!(Decimal::fraction("."), Err(FractionError::Malformed(_))));
        assert!(matches!(
            Decimal::fraction("0.1234567890123456789"),
            Err(FractionError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_doubling_is_exact() {
        let d = Decimal::fraction("0.6").unwrap().double_fraction();
        assert_eq!(d.whole(), 1);
        assert_eq!(d.fractional().to_string(), "0.2");
        assert_eq!(d.to_string(), "1.2");
    }

    #[test]
    fn test_from_f32() {
        assert_eq!(
            Decimal::fraction_from_f32(0.1).unwrap(),
            Decimal::fraction("0.1").unwrap()
        );
        assert_eq!(
            Decimal::fraction_from_f32(0.625).unwrap().to_string(),
            "0.625"
        );
        assert!(Decimal::fraction_from_f32(f32::NAN).is_err());
        assert!(Decimal::fraction_from_f32(1.0).is_err());
    }

    #[test]
    fn test_whole_parts_never_parse() {
        assert!(matches!(
            "9.999999999999999999".parse::<Decimal>(),
            Err(FractionError::OutOfRange(_))
        ));
        assert!(matches!(
            "10".parse::<Decimal>(),
            Err(FractionError::OutOfRange(_))
        ));
        assert_eq!("00.25".parse::<Decimal>().unwrap().to_string(), "0.25");
    }

    #[test]
    fn test_repeated_doubling_stays_below_two() {
        let mut d = Decimal::fraction("0.999999999999999999").unwrap();
        for _ in 0..100 {
            d = d.double_fraction();
            assert!(d.whole() <= 1);
        }
    }

    #[test]
    fn test_point_one_cycles() {
        // 0.1 -> 0.2 -> 0.4 -> 0.8 -> 0.6 -> 0.2
        let mut r = Decimal::fraction("0.1").unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            r = r.double_fraction().fractional();
            seen.push(r.to_string());
        }
        assert_eq!(seen, ["0.2", "0.4", "0.8", "0.6", "0.2"]);
    }
}
