//! Closed intervals over [`ExtendedScalar`] bounds.
//!
//! Products and quotients are the hull of the four corner results, each
//! corner computed with round-to-nearest extended arithmetic. This is not a
//! Moore-style implementation with outward rounding on every bound; the
//! rounding error of a corner is assumed negligible against the interval
//! widths of interest. Because correctly rounded operations are monotone,
//! the result still contains the identically rounded point result for any
//! choice of operands taken from the inputs.
//!
//! Every operand is treated as independent, so an expression that uses the
//! same interval twice (`x * x`) may be wider than the true range.

use crate::{ExtendedScalar, SplineError, SplineResult};
use core::fmt;
use core::ops::{Add, Mul, Sub};
use num_traits::{One, Zero};

/// The closed range `[lo, hi]` with `lo <= hi`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    lo: ExtendedScalar,
    hi: ExtendedScalar,
}

impl Interval {
    /// Creates `[lo, hi]`.
    ///
    /// # Errors
    /// [`SplineError::InvertedInterval`] if `lo > hi` or either bound is
    /// not finite.
    pub fn new(lo: ExtendedScalar, hi: ExtendedScalar) -> SplineResult<Self> {
        if lo.is_finite() && hi.is_finite() && lo <= hi {
            Ok(Self { lo, hi })
        } else {
            Err(SplineError::InvertedInterval { lo, hi })
        }
    }

    /// The degenerate interval `[value, value]`.
    pub fn point(value: ExtendedScalar) -> Self {
        Self {
            lo: value.clone(),
            hi: value,
        }
    }

    // Bounds produced by min/max of corners are ordered by construction.
    fn hull(corners: [ExtendedScalar; 4]) -> Self {
        let [p1, p2, p3, p4] = corners;
        let lo = p1
            .clone()
            .min_of(p2.clone())
            .min_of(p3.clone())
            .min_of(p4.clone());
        let hi = p1.max_of(p2).max_of(p3).max_of(p4);
        Self { lo, hi }
    }

    #[inline]
    pub fn lo(&self) -> &ExtendedScalar {
        &self.lo
    }

    #[inline]
    pub fn hi(&self) -> &ExtendedScalar {
        &self.hi
    }

    /// `hi - lo`.
    pub fn width(&self) -> ExtendedScalar {
        self.hi.clone() - self.lo.clone()
    }

    pub fn midpoint(&self) -> ExtendedScalar {
        (self.lo.clone() + self.hi.clone()) * ExtendedScalar::half()
    }

    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    /// `true` if `lo <= value <= hi`.
    pub fn contains(&self, value: &ExtendedScalar) -> bool {
        self.lo <= *value && *value <= self.hi
    }

    /// `true` if `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Interval) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// `true` if zero lies in `[lo, hi]`.
    pub fn contains_zero(&self) -> bool {
        self.contains(&ExtendedScalar::zero())
    }

    /// The hull of the four corner quotients.
    ///
    /// # Errors
    /// [`SplineError::DivisionByZeroInterval`] if `divisor` contains zero.
    pub fn checked_div(&self, divisor: &Interval) -> SplineResult<Self> {
        if divisor.contains_zero() {
            return Err(SplineError::DivisionByZeroInterval {
                divisor: divisor.clone(),
            });
        }
        let quotient = |a: &ExtendedScalar, b: &ExtendedScalar| {
            a.checked_div(b).ok_or_else(|| {
                SplineError::DivisionByZeroInterval {
                    divisor: divisor.clone(),
                }
            })
        };
        Ok(Self::hull([
            quotient(&self.lo, &divisor.lo)?,
            quotient(&self.lo, &divisor.hi)?,
            quotient(&self.hi, &divisor.lo)?,
            quotient(&self.hi, &divisor.hi)?,
        ]))
    }

    pub fn square(&self) -> Self {
        self.clone() * self.clone()
    }

    pub fn cube(&self) -> Self {
        self.clone() * self.square()
    }
}

impl Add for Interval {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            lo: self.lo + rhs.lo,
            hi: self.hi + rhs.hi,
        }
    }
}

impl Sub for Interval {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            lo: self.lo - rhs.hi,
            hi: self.hi - rhs.lo,
        }
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::hull([
            self.lo.clone() * rhs.lo.clone(),
            self.lo * rhs.hi.clone(),
            self.hi.clone() * rhs.lo,
            self.hi * rhs.hi,
        ])
    }
}

impl Zero for Interval {
    fn zero() -> Self {
        Self::point(ExtendedScalar::zero())
    }

    fn is_zero(&self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }
}

impl One for Interval {
    fn one() -> Self {
        Self::point(ExtendedScalar::one())
    }
}

impl From<ExtendedScalar> for Interval {
    fn from(value: ExtendedScalar) -> Self {
        Self::point(value)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
