use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A fighter or roster score, rounded to two decimals when constructed.
///
/// Equality is tolerant (`|a - b| < 0.01`) so values that print the same
/// compare equal. Use [`Score::value`] and `f64::to_bits` when bit-level
/// reproducibility matters.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "f64", into = "f64")
)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Self = Self(0.0);

    /// Tolerance used by `PartialEq`.
    pub const EPSILON: f64 = 0.01;

    /// Rounds `value` to two decimals.
    ///
    /// # Formula
    ///
    /// `floor(value * 100 + 0.5) / 100`, i.e. half-way cases round toward
    /// positive infinity on the binary value.
    pub fn new(value: f64) -> Self {
        Self(round_cents(value))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    // Collapse -0.0 so Display never prints "-0.00".
    if rounded == 0.0 { 0.0 } else { rounded }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < Self::EPSILON
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Score> for Score {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(Score::new(12.345_678).value(), 12.35);
        assert_eq!(Score::new(-49.999).value(), -50.0);
        assert_eq!(Score::new(560.624_999_999).value(), 560.62);
    }

    #[test]
    fn equality_is_tolerant() {
        assert_eq!(Score::new(100.0), Score::new(100.004));
        assert_ne!(Score::new(100.0), Score::new(100.02));
    }

    #[test]
    fn sign_predicates() {
        assert!(Score::new(1.0).is_positive());
        assert!(Score::new(-50.0).is_negative());
        assert!(Score::new(-0.001).is_zero());
        assert!(Score::ZERO.is_zero());
    }

    #[test]
    fn sums_and_displays() {
        let total: Score = [Score::new(260.0), Score::new(120.5), Score::new(-50.0)]
            .into_iter()
            .sum();

        assert_eq!(total.value(), 330.5);
        assert_eq!(total.to_string(), "330.50");
        assert_eq!(Score::ZERO.to_string(), "0.00");
    }
}
