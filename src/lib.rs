//! Natural cubic spline interpolation with rigorous enclosures.
//!
//! A spline is built from an ordered node set and evaluated at a query
//! point. Nodes and queries are either [`ExtendedScalar`]s, giving one
//! 128 bit round-to-nearest answer, or [`Interval`]s, giving a range that
//! contains the answer for every choice of node values inside the input
//! ranges.
//!
//! Decimal input is converted with [`parse()`]/[`DecimalReader`], which
//! round in a chosen direction so that an interval read from a literal
//! really contains the literal.
//!
//! Every segment is stored in local form around its left knot `x_j`:
//! `S_j(x) = a + b·dx + (c/2)·dx² + d·dx³` with `dx = x - x_j` and `c` the
//! second derivative at `x_j`. Whole-line coefficients are derived for
//! reporting only.
//!
//! # Examples
//! ```
//! use interval_cubic_splines::prelude::*;
//!
//! let mut reader = DecimalReader::new().unwrap();
//! let xs = ["0", "1", "2", "3"]
//!     .map(|x| reader.parse_interval(x).unwrap());
//! let ys = ["0", "1", "0", "0.1"]
//!     .map(|y| reader.parse_interval(y).unwrap());
//!
//! let spline = IntervalSpline::new(&xs, &ys).unwrap();
//! let query = reader.parse_interval("1.5").unwrap();
//! let evaluation = spline.evaluate(&query).unwrap();
//!
//! assert_eq!(evaluation.segment, 1);
//! assert!(evaluation.value.lo() <= evaluation.value.hi());
//! ```
//!
//! # Caveats
//! Interval products and quotients are the hull of their four corner
//! results computed with round-to-nearest arithmetic, not outward-rounded
//! Moore arithmetic. Operands are treated as independent, so enclosures may
//! be wider than the true range of the spline.
//!
//! # Cargo Features
#![doc = document_features::document_features!()]

mod arithmetic;
mod decimal;
mod error;
mod expansion;
mod interval;
mod model;
mod scalar;
mod segment;
pub mod solver;

pub use arithmetic::SplineArithmetic;
pub use decimal::{parse, parse_bounds, DecimalReader, Enclosure, ParseMode};
pub use error::{SplineError, SplineResult};
pub use expansion::{expand, GlobalCoefficients};
pub use interval::Interval;
pub use model::{Evaluation, IntervalSpline, PointSpline, SplineModel};
pub use scalar::{ExtendedScalar, EXTENDED_PRECISION};
pub use segment::{LocalCoefficients, SplineSegment};

pub mod prelude {
    //! Everything needed to parse nodes, build a spline and evaluate it.
    pub use crate::{
        parse, parse_bounds, DecimalReader, Enclosure, Evaluation,
        ExtendedScalar, GlobalCoefficients, Interval, IntervalSpline,
        LocalCoefficients, ParseMode, PointSpline, SplineArithmetic,
        SplineError, SplineModel, SplineResult,
    };
}
