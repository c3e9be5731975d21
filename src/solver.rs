//! Natural cubic spline coefficients by tridiagonal elimination.
//!
//! The second derivatives `c` at the knots satisfy
//! `h[i-1]·c[i-1] + 2(h[i-1]+h[i])·c[i] + h[i]·c[i+1] = 6·(s[i] - s[i-1])`
//! for the interior knots, with `s[i]` the slope of segment `i` and
//! `c[0] = c[n-1] = 0` at the ends. One forward sweep eliminates the
//! sub-diagonal, one backward sweep recovers `c` and with it `b` and `d`.

use crate::{LocalCoefficients, SplineArithmetic, SplineError, SplineResult};

/// Validates a node set.
///
/// # Errors
/// [`SplineError::DegenerateNodes`] for mismatched lengths, fewer than two
/// nodes, non-finite coordinates or x-coordinates whose bounds are not
/// strictly increasing.
pub fn check_nodes<T: SplineArithmetic>(
    xs: &[T],
    ys: &[T],
) -> SplineResult<()> {
    if xs.len() != ys.len() {
        return Err(SplineError::DegenerateNodes {
            reason: format!(
                "{} x-coordinates but {} y-coordinates",
                xs.len(),
                ys.len()
            ),
        });
    }
    if xs.len() < 2 {
        return Err(SplineError::DegenerateNodes {
            reason: format!("at least 2 nodes required, found {}", xs.len()),
        });
    }
    if let Some(v) = xs.iter().chain(ys).find(|v| {
        !(v.lower_bound().is_finite() && v.upper_bound().is_finite())
    }) {
        return Err(SplineError::DegenerateNodes {
            reason: format!("non-finite coordinate {v}"),
        });
    }
    for (i, pair) in xs.windows(2).enumerate() {
        if pair[1].lower_bound() <= pair[0].lower_bound()
            || pair[1].upper_bound() <= pair[0].upper_bound()
        {
            return Err(SplineError::DegenerateNodes {
                reason: format!(
                    "x[{}] = {} does not increase over x[{i}] = {}",
                    i + 1,
                    pair[1],
                    pair[0]
                ),
            });
        }
    }
    Ok(())
}

/// `h[i] = x[i+1] - x[i]`.
///
/// # Errors
/// [`SplineError::NonPositiveGap`] if a gap is not strictly positive over
/// its whole range, i.e. two interval knots overlap or touch.
pub fn gaps<T: SplineArithmetic>(xs: &[T]) -> SplineResult<Vec<T>> {
    xs.windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let gap = pair[1].clone() - pair[0].clone();
            if gap.lower_bound().is_positive() {
                Ok(gap)
            } else {
                Err(SplineError::NonPositiveGap {
                    index,
                    gap: gap.to_interval(),
                })
            }
        })
        .collect()
}

/// Computes the local coefficients of every segment of the natural cubic
/// spline through `(xs[i], ys[i])`.
///
/// Segment `j` gets `a = ys[j]` and the `b`, `c`, `d` of
/// [`LocalCoefficients`].
pub fn solve_natural<T: SplineArithmetic>(
    xs: &[T],
    ys: &[T],
) -> SplineResult<Vec<LocalCoefficients<T>>> {
    check_nodes(xs, ys)?;
    let h = gaps(xs)?;
    let n = xs.len();

    let two = T::constant(2.0);
    let six = T::constant(6.0);

    let slopes = (0..n - 1)
        .map(|i| (ys[i + 1].clone() - ys[i].clone()).try_div(&h[i]))
        .collect::<SplineResult<Vec<T>>>()?;

    // Forward sweep. Row 0 is the boundary row `c[0] = 0`, so
    // `mu[0] = z[0] = 0`.
    let mut mu = vec![T::zero(); n];
    let mut z = vec![T::zero(); n];
    for i in 1..n - 1 {
        let alpha = six.clone() * (slopes[i].clone() - slopes[i - 1].clone());
        let l = two.clone() * (xs[i + 1].clone() - xs[i - 1].clone())
            - h[i - 1].clone() * mu[i - 1].clone();
        mu[i] = h[i].try_div(&l)?;
        z[i] = (alpha - h[i - 1].clone() * z[i - 1].clone()).try_div(&l)?;
    }

    // Backward sweep from the boundary row `c[n-1] = 0`.
    let mut c_next = T::zero();
    let mut coefficients = Vec::with_capacity(n - 1);
    for j in (0..n - 1).rev() {
        let c = z[j].clone() - mu[j].clone() * c_next.clone();
        let b = slopes[j].clone()
            - (h[j].clone() * (c_next.clone() + two.clone() * c.clone()))
                .try_div(&six)?;
        let d = (c_next - c.clone()).try_div(&(six.clone() * h[j].clone()))?;

        coefficients.push(LocalCoefficients {
            a: ys[j].clone(),
            b,
            c: c.clone(),
            d,
        });
        c_next = c;
    }
    coefficients.reverse();

    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtendedScalar, Interval};
    use num_traits::Zero;

    fn s(v: f64) -> ExtendedScalar {
        ExtendedScalar::from_f64(v)
    }

    fn points(values: &[f64]) -> Vec<ExtendedScalar> {
        values.iter().copied().map(s).collect()
    }

    fn ratio(p: f64, q: f64) -> ExtendedScalar {
        s(p).checked_div(&s(q)).unwrap()
    }

    fn assert_close(actual: &ExtendedScalar, expected: &ExtendedScalar) {
        let err = actual.clone() - expected.clone();
        let tol = s(1e-30);
        assert!(
            err <= tol && ExtendedScalar::zero() - tol <= err,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn alternating_nodes() {
        let xs = points(&[0., 1., 2., 3.]);
        let ys = points(&[0., 1., 0., 1.]);
        let coefficients = solve_natural(&xs, &ys).unwrap();
        assert_eq!(coefficients.len(), 3);

        // Second derivatives at the knots are [0, -4, 4, 0].
        let expected = [
            (0.0, ratio(5.0, 3.0), 0.0, ratio(-2.0, 3.0)),
            (1.0, ratio(-1.0, 3.0), -4.0, ratio(4.0, 3.0)),
            (0.0, ratio(-1.0, 3.0), 4.0, ratio(-2.0, 3.0)),
        ];
        for (local, (a, b, c, d)) in coefficients.iter().zip(expected) {
            assert_eq!(local.a, s(a));
            assert_close(&local.b, &b);
            assert_close(&local.c, &s(c));
            assert_close(&local.d, &d);
        }
    }

    #[test]
    fn two_nodes_give_a_line() {
        let coefficients =
            solve_natural(&points(&[1., 3.]), &points(&[2., 6.])).unwrap();
        assert_eq!(coefficients.len(), 1);
        assert_eq!(coefficients[0].b, s(2.0));
        assert!(coefficients[0].c.is_zero());
        assert!(coefficients[0].d.is_zero());
    }

    #[test]
    fn duplicate_knot_is_degenerate() {
        let xs = points(&[0., 1., 1., 2.]);
        let ys = points(&[0., 1., 2., 3.]);
        let err = solve_natural(&xs, &ys).unwrap_err();
        assert!(matches!(err, SplineError::DegenerateNodes { .. }));
    }

    #[test]
    fn malformed_node_sets() {
        for (xs, ys) in [
            (points(&[0.]), points(&[0.])),
            (points(&[]), points(&[])),
            (points(&[0., 1.]), points(&[0.])),
            (points(&[2., 1., 3.]), points(&[0., 0., 0.])),
            (points(&[0., f64::NAN]), points(&[0., 0.])),
            (points(&[0., 1.]), points(&[0., f64::INFINITY])),
        ] {
            assert!(matches!(
                solve_natural(&xs, &ys),
                Err(SplineError::DegenerateNodes { .. })
            ));
        }
    }

    #[test]
    fn overlapping_interval_knots_give_non_positive_gap() {
        // h[0] = [0.0005, 0.002] - [0, 0.0015] = [-0.001, 0.002]
        let xs = vec![
            Interval::new(s(0.0), s(0.0015)).unwrap(),
            Interval::new(s(0.0005), s(0.002)).unwrap(),
            Interval::point(s(1.0)),
        ];
        let ys = vec![Interval::point(s(0.0)); 3];
        let err = solve_natural(&xs, &ys).unwrap_err();
        match err {
            SplineError::NonPositiveGap { index, gap } => {
                assert_eq!(index, 0);
                assert!(gap.contains_zero());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn touching_interval_knots_give_non_positive_gap() {
        let xs = vec![
            Interval::new(s(0.0), s(1.0)).unwrap(),
            Interval::new(s(1.0), s(2.0)).unwrap(),
        ];
        let ys = vec![Interval::point(s(0.0)); 2];
        assert!(matches!(
            gaps(&xs),
            Err(SplineError::NonPositiveGap { index: 0, .. })
        ));
        assert!(solve_natural(&xs, &ys).is_err());
    }
}
