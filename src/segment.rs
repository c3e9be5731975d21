//! One cubic piece of a natural spline.

use crate::{GlobalCoefficients, SplineArithmetic};

/// Coefficients of a segment relative to its left knot `x_j`.
///
/// With `dx = x - x_j` the segment is
/// `S_j(x) = a + b·dx + (c/2)·dx² + d·dx³`, so `a = S_j(x_j)`,
/// `b = S_j'(x_j)` and `c = S_j''(x_j)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalCoefficients<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: SplineArithmetic> LocalCoefficients<T> {
    /// `[a, b, c/2, d]`, the plain power-basis coefficients in `dx`.
    pub fn power_form(&self) -> [T; 4] {
        [
            self.a.clone(),
            self.b.clone(),
            self.half_c(),
            self.d.clone(),
        ]
    }

    #[inline]
    pub(crate) fn half_c(&self) -> T {
        self.c.clone() * T::constant(0.5)
    }

    /// `S_j(x_j + dx)` in Horner form.
    pub fn value(&self, dx: &T) -> T {
        ((self.d.clone() * dx.clone() + self.half_c()) * dx.clone()
            + self.b.clone())
            * dx.clone()
            + self.a.clone()
    }

    /// `S_j'(x_j + dx)`.
    pub fn first_derivative(&self, dx: &T) -> T {
        (T::constant(3.0) * self.d.clone() * dx.clone() + self.c.clone())
            * dx.clone()
            + self.b.clone()
    }

    /// `S_j''(x_j + dx)`.
    pub fn second_derivative(&self, dx: &T) -> T {
        T::constant(6.0) * self.d.clone() * dx.clone() + self.c.clone()
    }
}

/// A segment of a [`SplineModel`](crate::SplineModel).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SplineSegment<T> {
    pub(crate) knot: T,
    pub(crate) local: LocalCoefficients<T>,
    pub(crate) global: GlobalCoefficients<T>,
}

impl<T: SplineArithmetic> SplineSegment<T> {
    pub(crate) fn new(knot: T, local: LocalCoefficients<T>) -> Self {
        let global = crate::expansion::expand(&knot, &local);
        Self {
            knot,
            local,
            global,
        }
    }

    /// The left knot `x_j`.
    pub fn knot(&self) -> &T {
        &self.knot
    }

    pub fn local(&self) -> &LocalCoefficients<T> {
        &self.local
    }

    /// Whole-line coefficients. For reporting only; see
    /// [`GlobalCoefficients`].
    pub fn global(&self) -> &GlobalCoefficients<T> {
        &self.global
    }
}
