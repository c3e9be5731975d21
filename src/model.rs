//! The immutable spline model and its evaluation.

use crate::{
    solver, ExtendedScalar, GlobalCoefficients, Interval, LocalCoefficients,
    SplineArithmetic, SplineError, SplineResult, SplineSegment,
};
use log::{debug, trace};

/// A natural cubic spline through a fixed node set.
///
/// Built once by [`SplineModel::new()`] and never changed afterwards, so a
/// model can be shared between threads and evaluated concurrently.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SplineModel<T> {
    knots: Vec<T>,
    segments: Vec<SplineSegment<T>>,
}

/// A spline over round-to-nearest extended scalars.
pub type PointSpline = SplineModel<ExtendedScalar>;

/// A spline whose nodes, coefficients and values are enclosures.
pub type IntervalSpline = SplineModel<Interval>;

/// The result of [`SplineModel::evaluate()`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation<T> {
    /// `S(query)`.
    pub value: T,
    /// Index of the segment the query was evaluated on.
    pub segment: usize,
    /// Local coefficients of that segment.
    pub coefficients: LocalCoefficients<T>,
}

impl<T: SplineArithmetic> SplineModel<T> {
    /// Builds the natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    /// * [`SplineError::DegenerateNodes`] – fewer than two nodes,
    ///   mismatched lengths or x-coordinates that do not increase.
    /// * [`SplineError::NonPositiveGap`] – neighbouring interval knots
    ///   overlap or touch.
    /// * [`SplineError::DivisionByZeroInterval`] – the node uncertainty is
    ///   so large that an elimination pivot encloses zero.
    pub fn new(xs: &[T], ys: &[T]) -> SplineResult<Self> {
        let local = solver::solve_natural(xs, ys)?;
        let segments = xs
            .iter()
            .zip(local)
            .map(|(knot, local)| SplineSegment::new(knot.clone(), local))
            .collect::<Vec<_>>();

        debug!(
            "built {} natural cubic spline with {} segments",
            T::KIND,
            segments.len()
        );

        Ok(Self {
            knots: xs.to_vec(),
            segments,
        })
    }

    /// The node x-coordinates.
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    pub fn segments(&self) -> &[SplineSegment<T>] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&SplineSegment<T>> {
        self.segments.get(index)
    }

    /// Number of segments, one less than the number of nodes.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a model has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whole-line coefficients of every segment, in knot order.
    pub fn global_coefficients(
        &self,
    ) -> impl Iterator<Item = &GlobalCoefficients<T>> + '_ {
        self.segments.iter().map(SplineSegment::global)
    }

    /// Index of the segment `query` is evaluated on.
    ///
    /// Queries left of the first knot use the first segment, queries at or
    /// right of the last knot use the last one. Otherwise the first segment
    /// `j` with `query.lo >= x[j].lo` and `query.hi < x[j+1].hi` is chosen;
    /// for point splines this is the `j` with `x[j] <= query < x[j+1]`.
    ///
    /// # Errors
    /// [`SplineError::SegmentLookup`] if an interval query straddles a knot
    /// so that no segment satisfies both conditions.
    pub fn segment_index(&self, query: &T) -> SplineResult<usize> {
        let first = &self.knots[0];
        let last = &self.knots[self.knots.len() - 1];

        if query.lower_bound() < first.lower_bound() {
            trace!("{query} lies left of the first knot {first}");
            return Ok(0);
        }
        if query.upper_bound() >= last.upper_bound() {
            trace!("{query} lies at or right of the last knot {last}");
            return Ok(self.segments.len() - 1);
        }

        let index = self.knots[1..]
            .partition_point(|knot| knot.upper_bound() <= query.upper_bound());

        if query.lower_bound() >= self.knots[index].lower_bound() {
            Ok(index)
        } else {
            Err(SplineError::SegmentLookup {
                query: query.to_interval(),
            })
        }
    }

    /// Evaluates the spline at `query` using the local form of the
    /// containing segment.
    ///
    /// # Errors
    /// See [`segment_index()`](Self::segment_index).
    pub fn evaluate(&self, query: &T) -> SplineResult<Evaluation<T>> {
        let index = self.segment_index(query)?;
        let segment = &self.segments[index];
        let dx = query.clone() - segment.knot.clone();

        Ok(Evaluation {
            value: segment.local.value(&dx),
            segment: index,
            coefficients: segment.local.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: f64) -> ExtendedScalar {
        ExtendedScalar::from_f64(v)
    }

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(s(lo), s(hi)).unwrap()
    }

    fn point_spline() -> PointSpline {
        let xs = [0.0, 1.0, 2.0, 3.0].map(s);
        let ys = [0.0, 1.0, 0.0, 1.0].map(s);
        SplineModel::new(&xs, &ys).unwrap()
    }

    fn interval_spline() -> IntervalSpline {
        let xs = [
            iv(-0.01, 0.01),
            iv(0.99, 1.01),
            iv(1.99, 2.01),
            iv(2.99, 3.01),
        ];
        let ys = [0.0, 1.0, 0.0, 1.0].map(|y| iv(y - 0.001, y + 0.001));
        SplineModel::new(&xs, &ys).unwrap()
    }

    #[test]
    fn point_lookup() {
        let spline = point_spline();
        assert_eq!(spline.len(), 3);
        for (q, expected) in [
            (-5.0, 0),
            (0.0, 0),
            (0.5, 0),
            (1.0, 1),
            (1.999, 1),
            (2.0, 2),
            (3.0, 2),
            (7.0, 2),
        ] {
            assert_eq!(spline.segment_index(&s(q)).unwrap(), expected, "{q}");
        }
    }

    #[test]
    fn interval_lookup() {
        let spline = interval_spline();
        assert_eq!(spline.segment_index(&iv(-1.0, 0.5)).unwrap(), 0);
        assert_eq!(spline.segment_index(&iv(0.2, 0.4)).unwrap(), 0);
        assert_eq!(spline.segment_index(&iv(1.2, 1.4)).unwrap(), 1);
        assert_eq!(spline.segment_index(&iv(2.5, 3.5)).unwrap(), 2);
        // Inside the uncertainty of knot 1: the first candidate wins.
        assert_eq!(spline.segment_index(&iv(1.0, 1.0)).unwrap(), 0);
    }

    #[test]
    fn straddling_query_is_refused() {
        let spline = interval_spline();
        let err = spline.evaluate(&iv(0.5, 1.5)).unwrap_err();
        assert!(matches!(err, SplineError::SegmentLookup { .. }));
    }

    #[test]
    fn evaluation_reports_segment_coefficients() {
        let spline = point_spline();
        let evaluation = spline.evaluate(&s(2.5)).unwrap();
        assert_eq!(evaluation.segment, 2);
        assert_eq!(&evaluation.coefficients, spline.segments()[2].local());
        assert_eq!(spline.segment(2).unwrap().knot(), &s(2.0));
        assert!(spline.segment(3).is_none());
        assert_eq!(spline.global_coefficients().count(), 3);
        assert_eq!(spline.knots().len(), 4);
        assert!(!spline.is_empty());
    }
}
