//! Arithmetic capability shared by point and interval splines.
//!
//! The coefficient solver, the global expander and the evaluator are written
//! once against [`SplineArithmetic`] and instantiated for [`ExtendedScalar`]
//! and [`Interval`].

use crate::{ExtendedScalar, Interval, SplineError, SplineResult};
use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Sub};
use num_traits::{One, Zero};

/// Numbers a natural cubic spline can be built from and evaluated with.
///
/// A point value behaves like the degenerate interval `[v, v]`: both
/// bounds return the value itself. Building an interval spline from
/// degenerate nodes therefore reproduces the point spline bit for bit.
pub trait SplineArithmetic:
    Clone
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Human readable name of the arithmetic, used in diagnostics.
    const KIND: &'static str;

    /// Lifts an exact scalar.
    fn from_scalar(value: ExtendedScalar) -> Self;

    /// Divides by `divisor`.
    ///
    /// # Errors
    /// [`SplineError::DivisionByZeroInterval`] if the divisor is, or
    /// contains, zero.
    fn try_div(&self, divisor: &Self) -> SplineResult<Self>;

    /// The smallest value represented.
    fn lower_bound(&self) -> &ExtendedScalar;

    /// The largest value represented.
    fn upper_bound(&self) -> &ExtendedScalar;

    /// Widens the value to an [`Interval`] for diagnostics.
    fn to_interval(&self) -> Interval;

    /// `upper_bound() - lower_bound()`.
    fn width(&self) -> ExtendedScalar {
        self.upper_bound().clone() - self.lower_bound().clone()
    }

    /// Lifts a small constant; `value` must be exactly representable.
    #[inline]
    fn constant(value: f64) -> Self {
        Self::from_scalar(ExtendedScalar::from_f64(value))
    }
}

impl SplineArithmetic for ExtendedScalar {
    const KIND: &'static str = "point";

    #[inline]
    fn from_scalar(value: ExtendedScalar) -> Self {
        value
    }

    fn try_div(&self, divisor: &Self) -> SplineResult<Self> {
        match self.checked_div(divisor) {
            Some(quotient) => Ok(quotient),
            None => Err(SplineError::DivisionByZeroInterval {
                divisor: Interval::point(divisor.clone()),
            }),
        }
    }

    #[inline]
    fn lower_bound(&self) -> &ExtendedScalar {
        self
    }

    #[inline]
    fn upper_bound(&self) -> &ExtendedScalar {
        self
    }

    fn to_interval(&self) -> Interval {
        Interval::point(self.clone())
    }
}

impl SplineArithmetic for Interval {
    const KIND: &'static str = "interval";

    #[inline]
    fn from_scalar(value: ExtendedScalar) -> Self {
        Interval::point(value)
    }

    fn try_div(&self, divisor: &Self) -> SplineResult<Self> {
        self.checked_div(divisor)
    }

    #[inline]
    fn lower_bound(&self) -> &ExtendedScalar {
        self.lo()
    }

    #[inline]
    fn upper_bound(&self) -> &ExtendedScalar {
        self.hi()
    }

    fn to_interval(&self) -> Interval {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotient<T: SplineArithmetic>(a: f64, b: f64) -> SplineResult<T> {
        T::constant(a).try_div(&T::constant(b))
    }

    #[test]
    fn both_arithmetics_refuse_zero_divisors() {
        assert!(matches!(
            quotient::<ExtendedScalar>(1.0, 0.0),
            Err(SplineError::DivisionByZeroInterval { .. })
        ));
        assert!(matches!(
            quotient::<Interval>(1.0, 0.0),
            Err(SplineError::DivisionByZeroInterval { .. })
        ));
    }

    #[test]
    fn degenerate_intervals_track_points() {
        let p = quotient::<ExtendedScalar>(1.0, 3.0).unwrap();
        let i = quotient::<Interval>(1.0, 3.0).unwrap();
        assert_eq!(i.lo(), &p);
        assert_eq!(i.hi(), &p);
        assert!(p.width().is_zero());
        assert!(i.width().is_zero());
    }
}
