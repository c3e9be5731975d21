//! Directed-rounding conversion of decimal literals.
//!
//! The decimal text is converted by an arbitrary-precision routine that
//! rounds once, in the requested direction, to [`EXTENDED_PRECISION`] bits.
//! For an interval enclosure the literal is converted twice: toward −∞ for
//! the lower bound and toward +∞ for the upper bound. The two bounds agree
//! exactly when the literal is representable.
//!
//! [`EXTENDED_PRECISION`]: crate::EXTENDED_PRECISION

use crate::{ExtendedScalar, Interval, SplineError, SplineResult};
use astro_float::{BigFloat, Consts, Radix, RoundingMode};
use num_traits::Zero;

/// How a literal is turned into a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// Round to nearest, producing one [`ExtendedScalar`].
    Point,
    /// Round outward, producing an [`Interval`] that contains the literal.
    Interval,
}

/// The result of [`parse()`].
#[derive(Clone, Debug, PartialEq)]
pub enum Enclosure {
    Point(ExtendedScalar),
    Interval(Interval),
}

impl Enclosure {
    /// Widens a point to the degenerate interval.
    pub fn to_interval(&self) -> Interval {
        match self {
            Enclosure::Point(value) => Interval::point(value.clone()),
            Enclosure::Interval(interval) => interval.clone(),
        }
    }

    /// The point value, or `None` for an interval.
    pub fn as_point(&self) -> Option<&ExtendedScalar> {
        match self {
            Enclosure::Point(value) => Some(value),
            Enclosure::Interval(_) => None,
        }
    }
}

/// A parsing session.
///
/// Owns the constant tables of the conversion routine; create one and reuse
/// it for every literal of an input set. Rounding is chosen per call, so a
/// reader never changes state that other computations can observe.
pub struct DecimalReader {
    consts: Consts,
}

impl DecimalReader {
    /// # Errors
    /// [`SplineError::ConversionTables`] if the tables cannot be allocated.
    pub fn new() -> SplineResult<Self> {
        let consts = Consts::new()
            .map_err(|err| SplineError::ConversionTables(format!("{err:?}")))?;
        Ok(Self { consts })
    }

    /// Converts `text` according to `mode`.
    pub fn parse(
        &mut self,
        text: &str,
        mode: ParseMode,
    ) -> SplineResult<Enclosure> {
        Ok(match mode {
            ParseMode::Point => Enclosure::Point(self.parse_point(text)?),
            ParseMode::Interval => {
                Enclosure::Interval(self.parse_interval(text)?)
            }
        })
    }

    /// Round-to-nearest conversion.
    pub fn parse_point(&mut self, text: &str) -> SplineResult<ExtendedScalar> {
        self.convert(text, RoundingMode::ToEven)
    }

    /// Outward-rounded enclosure of a single literal.
    pub fn parse_interval(&mut self, text: &str) -> SplineResult<Interval> {
        self.parse_bounds(text, text)
    }

    /// Enclosure with separately given bounds.
    ///
    /// `lo` is rounded toward −∞ and `hi` toward +∞.
    ///
    /// # Errors
    /// [`SplineError::Parse`] for malformed text,
    /// [`SplineError::LiteralOutOfRange`] for a literal beyond the exponent
    /// range and [`SplineError::InvertedInterval`] if `lo` exceeds `hi`.
    pub fn parse_bounds(
        &mut self,
        lo: &str,
        hi: &str,
    ) -> SplineResult<Interval> {
        let lo = self.convert(lo, RoundingMode::Down)?;
        let hi = self.convert(hi, RoundingMode::Up)?;
        Interval::new(lo, hi)
    }

    /// Converts every literal of `texts`, stopping at the first failure.
    pub fn parse_all<'a, I>(
        &mut self,
        texts: I,
        mode: ParseMode,
    ) -> SplineResult<Vec<Enclosure>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .map(|text| self.parse(text, mode))
            .collect()
    }

    fn convert(
        &mut self,
        text: &str,
        rounding: RoundingMode,
    ) -> SplineResult<ExtendedScalar> {
        let canonical = canonical_literal(text).ok_or_else(|| {
            SplineError::Parse {
                literal: text.to_owned(),
            }
        })?;

        let value = BigFloat::parse(
            &canonical,
            Radix::Dec,
            crate::EXTENDED_PRECISION,
            rounding,
            &mut self.consts,
        );
        let value = ExtendedScalar::from_big_float(value);
        // Overflow saturates to infinity and underflow flushes to zero,
        // whatever the rounding direction.
        let underflow = value.is_zero() && has_nonzero_digit(&canonical);
        if !value.is_finite() || underflow {
            return Err(SplineError::LiteralOutOfRange {
                literal: text.to_owned(),
            });
        }
        log::trace!("{text} -> {value} ({rounding:?})");
        Ok(value)
    }
}

/// Converts `text` with a one-off [`DecimalReader`].
pub fn parse(text: &str, mode: ParseMode) -> SplineResult<Enclosure> {
    DecimalReader::new()?.parse(text, mode)
}

/// Encloses `[lo, hi]` with a one-off [`DecimalReader`].
pub fn parse_bounds(lo: &str, hi: &str) -> SplineResult<Interval> {
    DecimalReader::new()?.parse_bounds(lo, hi)
}

// `true` if the mantissa of a canonical literal is not zero.
fn has_nonzero_digit(canonical: &str) -> bool {
    canonical
        .bytes()
        .take_while(|&b| b != b'e')
        .any(|b| (b'1'..=b'9').contains(&b))
}

// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa
// digit on either side of the point and rewrites it as
// `[-]int[.frac][e[-]exp]`.
fn canonical_literal(text: &str) -> Option<String> {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest, None),
    };

    let (int, frac) = match mantissa.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty())
        || !all_digits(int)
        || !all_digits(frac)
    {
        return None;
    }

    let mut canonical = String::with_capacity(text.len() + 2);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if int.is_empty() { "0" } else { int });
    if !frac.is_empty() {
        canonical.push('.');
        canonical.push_str(frac);
    }

    if let Some(exponent) = exponent {
        let (exp_negative, digits) = match exponent.as_bytes().first()? {
            b'-' => (true, &exponent[1..]),
            b'+' => (false, &exponent[1..]),
            _ => (false, exponent),
        };
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
        canonical.push('e');
        if exp_negative {
            canonical.push('-');
        }
        canonical.push_str(digits);
    }

    Some(canonical)
}
