//! Extended-precision scalar used for point arithmetic and interval bounds.

use astro_float::{BigFloat, RoundingMode};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Sub};
use num_traits::{One, Zero};

/// Working precision of every [`ExtendedScalar`] in bits.
///
/// This is at least the 113 bit significand of IEEE binary128.
pub const EXTENDED_PRECISION: usize = 128;

/// A real value carried with [`EXTENDED_PRECISION`] bits of significand.
///
/// Arithmetic rounds to nearest-even. The rounding direction is passed to
/// every operation explicitly so nothing here depends on, or changes, any
/// process-wide floating-point state.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct ExtendedScalar(BigFloat);

impl ExtendedScalar {
    /// Converts an `f64`. The conversion is exact.
    pub fn from_f64(value: f64) -> Self {
        Self(BigFloat::from_f64(value, EXTENDED_PRECISION))
    }

    pub(crate) fn from_big_float(value: BigFloat) -> Self {
        Self(value)
    }

    pub fn as_big_float(&self) -> &BigFloat {
        &self.0
    }

    /// `true` for values that are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        !(self.0.is_nan() || self.0.is_inf())
    }

    /// `true` if the value is greater than zero.
    pub fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    pub fn half() -> Self {
        Self::from_f64(0.5)
    }

    /// Divides by `divisor`, returning `None` for an exact zero divisor.
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            None
        } else {
            Some(Self(BigFloat::div(
                &self.0,
                &divisor.0,
                EXTENDED_PRECISION,
                RoundingMode::ToEven,
            )))
        }
    }

    /// The smaller of two values.
    pub fn min_of(self, other: Self) -> Self {
        match other.partial_cmp(&self) {
            Some(Ordering::Less) => other,
            _ => self,
        }
    }

    /// The larger of two values.
    pub fn max_of(self, other: Self) -> Self {
        match other.partial_cmp(&self) {
            Some(Ordering::Greater) => other,
            _ => self,
        }
    }
}

impl Add for ExtendedScalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(BigFloat::add(
            &self.0,
            &rhs.0,
            EXTENDED_PRECISION,
            RoundingMode::ToEven,
        ))
    }
}

impl Sub for ExtendedScalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(BigFloat::sub(
            &self.0,
            &rhs.0,
            EXTENDED_PRECISION,
            RoundingMode::ToEven,
        ))
    }
}

impl Mul for ExtendedScalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(BigFloat::mul(
            &self.0,
            &rhs.0,
            EXTENDED_PRECISION,
            RoundingMode::ToEven,
        ))
    }
}

impl Zero for ExtendedScalar {
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for ExtendedScalar {
    fn one() -> Self {
        Self::from_f64(1.0)
    }
}

impl From<f64> for ExtendedScalar {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl fmt::Display for ExtendedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExtendedScalar {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_are_exact() {
        let six = ExtendedScalar::from_f64(6.0);
        let two = ExtendedScalar::from_f64(2.0);
        let three = ExtendedScalar::from_f64(3.0);
        assert_eq!(two * three, six);
    }

    #[test]
    fn one_third_is_finer_than_f64() {
        let third = ExtendedScalar::one()
            .checked_div(&ExtendedScalar::from_f64(3.0))
            .unwrap();
        // 1/3 in f64 is off by ~1.8e-17; the extended value is not.
        let from_f64 = ExtendedScalar::from_f64(1.0 / 3.0);
        assert_ne!(third, from_f64);
        let back = third * ExtendedScalar::from_f64(3.0);
        let err = back - ExtendedScalar::one();
        let tol = ExtendedScalar::from_f64(1e-35);
        assert!(err <= tol && ExtendedScalar::zero() - tol <= err);
    }

    #[test]
    fn zero_divisor_is_refused() {
        assert!(ExtendedScalar::one()
            .checked_div(&ExtendedScalar::zero())
            .is_none());
    }

    #[test]
    fn min_and_max() {
        let a = ExtendedScalar::from_f64(-1.5);
        let b = ExtendedScalar::from_f64(2.0);
        assert_eq!(a.clone().min_of(b.clone()), a);
        assert_eq!(a.max_of(b.clone()), b);
    }
}
