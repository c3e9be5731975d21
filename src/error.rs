//! Error types for spline operations.

use crate::{ExtendedScalar, Interval};
use thiserror::Error;

/// Errors that can occur while parsing, building or evaluating a spline.
///
/// None of these are recovered from internally; every operation hands them
/// straight back to the caller.
#[derive(Error, Debug)]
pub enum SplineError {
    /// The text is not a decimal literal.
    #[error("`{literal}` is not a decimal literal")]
    Parse { literal: String },

    /// A well-formed literal whose magnitude over- or underflows the
    /// exponent range of [`ExtendedScalar`].
    #[error("`{literal}` is outside the representable exponent range")]
    LiteralOutOfRange { literal: String },

    /// Too few nodes, mismatched coordinate counts or x-coordinates that are
    /// not strictly increasing.
    #[error("degenerate nodes: {reason}")]
    DegenerateNodes { reason: String },

    /// The gap between two consecutive nodes is not strictly positive.
    #[error("gap h[{index}] = {gap} is not strictly positive")]
    NonPositiveGap { index: usize, gap: Interval },

    /// An interval division whose divisor contains zero.
    #[error("division by an interval containing zero: {divisor}")]
    DivisionByZeroInterval { divisor: Interval },

    /// An interval query spans a segment boundary.
    #[error("query {query} spans more than one segment")]
    SegmentLookup { query: Interval },

    /// An interval whose lower bound exceeds its upper bound.
    #[error("inverted interval: lower bound {lo} exceeds upper bound {hi}")]
    InvertedInterval {
        lo: ExtendedScalar,
        hi: ExtendedScalar,
    },

    /// The decimal conversion tables could not be set up.
    #[error("failed to set up decimal conversion tables: {0}")]
    ConversionTables(String),
}

/// Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;
