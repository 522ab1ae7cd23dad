//! Exact-arithmetic tier for the planar predicates.
//!
//! Every finite `f64` is a dyadic rational, so converting the inputs with
//! `BigRational::from_float` and doing the arithmetic in rationals yields the
//! exact value of the determinant. This is the slow path behind the orientation
//! filter and is only entered for nearly collinear inputs.
//!
//! Non-finite ordinates have no rational representation. They are reported as
//! `Collinear`, a catch-all for degenerate input rather than a certified answer.
//!
//! `exact_line_intersection` is standalone public API: the segment intersector
//! never calls it. It serves callers that want the once-rounded crossing of
//! two supporting lines.

use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::coord::{Coord, Segment};
use crate::orientation::Orientation;

#[inline]
fn rat(v: f64) -> Option<BigRational> {
    BigRational::from_float(v)
}

fn rat_xy(c: Coord) -> Option<(BigRational, BigRational)> {
    Some((rat(c.x)?, rat(c.y)?))
}

/// Exact sign of `(end - origin) × (point - end)`.
pub fn exact_orientation(origin: Coord, end: Coord, point: Coord) -> Orientation {
    match exact_determinant(origin, end, point) {
        Some(det) if det.is_positive() => Orientation::CounterClockwise,
        Some(det) if det.is_negative() => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

fn exact_determinant(origin: Coord, end: Coord, point: Coord) -> Option<BigRational> {
    let (ox, oy) = rat_xy(origin)?;
    let (ex, ey) = rat_xy(end)?;
    let (px, py) = rat_xy(point)?;
    let dx1 = &ex - &ox;
    let dy1 = &ey - &oy;
    let dx2 = px - &ex;
    let dy2 = py - &ey;
    Some(dx1 * dy2 - dy1 * dx2)
}

/// Intersection of the two infinite lines through `s1` and `s2`, computed
/// exactly and rounded once to `f64`.
///
/// Returns `None` for parallel (or degenerate) lines, non-finite input, or a
/// result outside the `f64` range.
pub fn exact_line_intersection(s1: &Segment, s2: &Segment) -> Option<Coord> {
    let (p1x, p1y) = rat_xy(s1.start)?;
    let (p2x, p2y) = rat_xy(s1.end)?;
    let (q1x, q1y) = rat_xy(s2.start)?;
    let (q2x, q2y) = rat_xy(s2.end)?;

    let rx = &p2x - &p1x;
    let ry = &p2y - &p1y;
    let sx = q2x - &q1x;
    let sy = q2y - &q1y;

    let denom = &rx * &sy - &ry * &sx;
    if denom.is_zero() {
        return None;
    }
    let qpx = q1x - &p1x;
    let qpy = q1y - &p1y;
    let t = (qpx * &sy - qpy * &sx) / denom;

    let x = (p1x + &t * rx).to_f64()?;
    let y = (p1y + t * ry).to_f64()?;
    if x.is_finite() && y.is_finite() {
        Some(Coord::new(x, y))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn exact_sign_on_representable_inputs() {
        let o = vector![0.0, 0.0];
        let e = vector![10.0, 0.0];
        assert_eq!(
            exact_orientation(o, e, vector![5.0, 5.0]),
            Orientation::CounterClockwise
        );
        assert_eq!(
            exact_orientation(o, e, vector![5.0, -5.0]),
            Orientation::Clockwise
        );
        assert_eq!(
            exact_orientation(o, e, vector![5.0, 0.0]),
            Orientation::Collinear
        );
    }

    #[test]
    fn exact_sees_one_ulp_offsets() {
        // (0.5 + ulp, 0.5) is strictly below the diagonal y = x.
        let o = vector![0.0, 0.0];
        let e = vector![1.0, 1.0];
        let x = f64::from_bits(0.5f64.to_bits() + 1);
        assert_eq!(
            exact_orientation(o, e, vector![x, 0.5]),
            Orientation::Clockwise
        );
        assert_eq!(
            exact_orientation(o, e, vector![0.5, x]),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn non_finite_inputs_are_collinear() {
        let o = vector![0.0, 0.0];
        let e = vector![1.0, 0.0];
        assert_eq!(
            exact_orientation(o, e, vector![f64::INFINITY, 1.0]),
            Orientation::Collinear
        );
        assert_eq!(
            exact_orientation(o, e, vector![0.5, f64::NAN]),
            Orientation::Collinear
        );
    }

    #[test]
    fn exact_lines_cross_and_parallel() {
        let a = Segment::from_xy(0.0, 0.0, 1.0, 0.0);
        let b = Segment::from_xy(2.0, 1.0, 2.0, 2.0);
        assert_eq!(exact_line_intersection(&a, &b), Some(vector![2.0, 0.0]));
        let c = Segment::from_xy(0.0, 1.0, 5.0, 1.0);
        assert_eq!(exact_line_intersection(&a, &c), None);
        let d = Segment::from_xy(0.0, 0.0, 10.0, 10.0);
        let e = Segment::from_xy(0.0, 10.0, 10.0, 0.0);
        assert_eq!(exact_line_intersection(&d, &e), Some(vector![5.0, 5.0]));
    }
}
