//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so sums never pick up
//! floating-point drift. Display always renders exactly two fraction digits,
//! which is also the on-disk format.

use std::fmt;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
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

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, or `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Add two amounts, clamping at the representable bounds
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Parse a decimal amount
    ///
    /// Accepts an optional sign, an integer part, an optional fraction and an
    /// optional `e`/`E` exponent: "10.50", "-3", "+0.5", ".75", "12.", "1e3",
    /// "2.5E-1". Digits beyond the second fraction digit round half away from
    /// zero ("3.456" is 346 cents).
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, unsigned) = split_sign(input);

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
            None => (unsigned, None),
        };

        let (whole, fraction) = match mantissa.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (mantissa, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let exponent: i64 = match exponent {
            Some(exp) => {
                let (exp_negative, exp_digits) = split_sign(exp);
                if exp_digits.is_empty() || !all_digits(exp_digits) {
                    return Err(invalid());
                }
                // out of range either way: overflows below or rounds to zero
                let magnitude: i64 = exp_digits.parse().unwrap_or(i64::from(u16::MAX));
                if exp_negative {
                    -magnitude
                } else {
                    magnitude
                }
            }
            None => 0,
        };

        // Significant digits, with the decimal point `point` digits from the left
        let mut digits: Vec<i64> = whole
            .bytes()
            .chain(fraction.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();
        let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading_zeros);
        if digits.is_empty() {
            return Ok(Self::zero());
        }

        let point = (whole.len() as i64 - leading_zeros as i64)
            .checked_add(exponent)
            .ok_or_else(invalid)?;
        let cent_digits = point.checked_add(2).ok_or_else(invalid)?;
        // The leading digit is non-zero, so more than 19 cent digits cannot fit
        if cent_digits > 19 {
            return Err(invalid());
        }

        let digit_at = |i: i64| {
            usize::try_from(i)
                .ok()
                .and_then(|i| digits.get(i).copied())
                .unwrap_or(0)
        };

        let mut cents: i64 = 0;
        for i in 0..cent_digits.max(0) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit_at(i)))
                .ok_or_else(invalid)?;
        }
        if cent_digits >= 0 && digit_at(cent_digits) >= 5 {
            cents = cents.checked_add(1).ok_or_else(invalid)?;
        }

        Ok(Self(if negative { -cents } else { cents }))
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part());
        // `pad` so callers can use width/alignment flags like `{:>12}`
        f.pad(&text)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
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
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(225)), "    2.25");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+2").unwrap().cents(), 200);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("3.5").unwrap().cents(), 350);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("12.").unwrap().cents(), 1200);
        assert_eq!(Money::parse(" 4.20 ").unwrap().cents(), 420);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("3.456").unwrap().cents(), 346);
        assert_eq!(Money::parse("3.454").unwrap().cents(), 345);
        assert_eq!(Money::parse("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse("-1.005").unwrap().cents(), -101);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in [
            "", "abc", "1.2.3", "$5", "1,000", "-", ".", "ten", "inf", "nan", "NaN", "e3", "1e",
            "1e+", "1e2.5", "1e3e4", "--1",
        ] {
            assert!(Money::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse("2.5E-1").unwrap().cents(), 25);
        assert_eq!(Money::parse("1e+2").unwrap().cents(), 10_000);
        assert_eq!(Money::parse("-1.5e2").unwrap().cents(), -15_000);
        assert_eq!(Money::parse("12345e-4").unwrap().cents(), 123);
        assert_eq!(Money::parse("5e-3").unwrap().cents(), 1);
        assert_eq!(Money::parse("4e-3").unwrap().cents(), 0);
        assert_eq!(Money::parse("1e-400").unwrap().cents(), 0);
        assert_eq!(Money::parse("0e99999999999999999999").unwrap().cents(), 0);
        assert_eq!(Money::parse("0.0035e1").unwrap().cents(), 4);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Money::parse("1e17").is_err());
        assert!(Money::parse("1e99999999999999999999").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap(),
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_checked_and_saturating_add() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
        assert_eq!(big.saturating_add(big), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(1000),
            Money::from_cents(550),
            Money::from_cents(-50),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 1500);

        let total: Money = vec![Money::from_cents(i64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
    }
}
