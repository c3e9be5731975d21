//! Conversion of local segment coefficients to whole-line polynomials.

use crate::{LocalCoefficients, SplineArithmetic};

/// `S_j(x) = a0 + a1·x + a2·x² + a3·x³`, valid on the whole real line.
///
/// Expanding around the origin cancels badly for knots far from zero. These
/// coefficients exist for reporting; evaluation always goes through the
/// local form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlobalCoefficients<T> {
    pub a0: T,
    pub a1: T,
    pub a2: T,
    pub a3: T,
}

impl<T: Clone> GlobalCoefficients<T> {
    /// `[a0, a1, a2, a3]`.
    pub fn to_array(&self) -> [T; 4] {
        [
            self.a0.clone(),
            self.a1.clone(),
            self.a2.clone(),
            self.a3.clone(),
        ]
    }
}

/// Expands the segment with left knot `knot` around the origin.
pub fn expand<T: SplineArithmetic>(
    knot: &T,
    local: &LocalCoefficients<T>,
) -> GlobalCoefficients<T> {
    let three = T::constant(3.0);
    let half_c = local.half_c();
    let x = knot.clone();
    let x2 = x.clone() * x.clone();
    let x3 = x.clone() * x2.clone();

    let a0 = local.a.clone() - local.b.clone() * x.clone()
        + half_c.clone() * x2.clone()
        - local.d.clone() * x3;
    let a1 = local.b.clone() - local.c.clone() * x.clone()
        + three.clone() * local.d.clone() * x2;
    let a2 = half_c - three * local.d.clone() * x;

    GlobalCoefficients {
        a0,
        a1,
        a2,
        a3: local.d.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtendedScalar, Interval};

    fn s(v: f64) -> ExtendedScalar {
        ExtendedScalar::from_f64(v)
    }

    fn cubic_at(
        g: &GlobalCoefficients<ExtendedScalar>,
        x: f64,
    ) -> ExtendedScalar {
        let x = s(x);
        ((g.a3.clone() * x.clone() + g.a2.clone()) * x.clone() + g.a1.clone())
            * x
            + g.a0.clone()
    }

    #[test]
    fn expansion_agrees_with_local_form() {
        let local = LocalCoefficients {
            a: s(1.0),
            b: s(-0.5),
            c: s(3.0),
            d: s(0.25),
        };
        let knot = s(2.0);
        let global = expand(&knot, &local);

        for x in [-1.0, 0.0, 2.0, 2.5, 4.0] {
            let dx = s(x) - knot.clone();
            assert_eq!(cubic_at(&global, x), local.value(&dx));
        }
        assert_eq!(global.a3, s(0.25));
    }

    #[test]
    fn expansion_at_origin_is_identity() {
        let local = LocalCoefficients {
            a: s(1.0),
            b: s(2.0),
            c: s(6.0),
            d: s(4.0),
        };
        let global = expand(&s(0.0), &local);
        assert_eq!(global.to_array(), [s(1.0), s(2.0), s(3.0), s(4.0)]);
    }

    #[test]
    fn interval_expansion_encloses_point_expansion() {
        let local = LocalCoefficients {
            a: s(1.0),
            b: s(-0.5),
            c: s(3.0),
            d: s(0.25),
        };
        let point = expand(&s(1.5), &local);

        let widen = |v: &ExtendedScalar| {
            Interval::new(v.clone() - s(1e-3), v.clone() + s(1e-3)).unwrap()
        };
        let wide = LocalCoefficients {
            a: widen(&local.a),
            b: widen(&local.b),
            c: widen(&local.c),
            d: widen(&local.d),
        };
        let enclosure = expand(&widen(&s(1.5)), &wide);

        for (iv, p) in enclosure.to_array().iter().zip(point.to_array()) {
            assert!(iv.contains(&p));
        }
    }
}
