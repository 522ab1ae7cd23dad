//! Robust orientation predicate.
//!
//! `orientation(origin, end, point)` classifies `point` against the directed
//! line `origin → end`. Two tiers:
//! - a floating-point filter (Shewchuk-style error bound) that decides the
//!   overwhelming majority of inputs with two products;
//! - an exact rational fallback (`exact::exact_orientation`) for the nearly
//!   collinear remainder.
//!
//! The ordering `Clockwise < Collinear < CounterClockwise` is part of the
//! contract; callers compare against `Collinear` as the neutral baseline.

use std::fmt;
use std::ops::Neg;

use crate::cfg::FILTER_EPS;
use crate::coord::Coord;
use crate::exact::exact_orientation;

/// Turn direction of a point relative to a directed reference line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Classification from the sign of a determinant.
    #[inline]
    pub fn from_sign(det: f64) -> Self {
        if det > 0.0 {
            Self::CounterClockwise
        } else if det < 0.0 {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }

    /// `-1`, `0`, `+1` for CW, collinear, CCW.
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Self::Clockwise => -1,
            Self::Collinear => 0,
            Self::CounterClockwise => 1,
        }
    }

    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Self::CounterClockwise)
    }

    #[inline]
    pub fn is_cw(self) -> bool {
        matches!(self, Self::Clockwise)
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Self::Collinear)
    }
}

impl Neg for Orientation {
    type Output = Orientation;
    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Clockwise => "Clockwise",
            Self::Collinear => "Collinear",
            Self::CounterClockwise => "CounterClockwise",
        };
        f.write_str(label)
    }
}

/// Orientation of `point` relative to the directed line `origin → end`.
///
/// Exact for all finite inputs. Inputs containing NaN or ±∞ that the filter
/// cannot decide are reported as `Collinear`.
pub fn orientation(origin: Coord, end: Coord, point: Coord) -> Orientation {
    if let Some(o) = orientation_filter(origin, end, point) {
        return o;
    }
    tracing::trace!(
        origin = ?(origin.x, origin.y),
        end = ?(end.x, end.y),
        point = ?(point.x, point.y),
        "orientation filter undecided, using exact arithmetic"
    );
    exact_orientation(origin, end, point)
}

/// Floating-point filter tier alone. `None` means the sign could not be
/// certified and exact arithmetic is required.
pub fn orientation_filter(origin: Coord, end: Coord, point: Coord) -> Option<Orientation> {
    let det_left = (origin.x - point.x) * (end.y - point.y);
    let det_right = (origin.y - point.y) * (end.x - point.x);
    let det = det_left - det_right;

    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return Some(Orientation::from_sign(det));
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return Some(Orientation::from_sign(det));
        }
        -det_left - det_right
    } else {
        return Some(Orientation::from_sign(det));
    };

    let err_bound = FILTER_EPS * det_sum;
    if det >= err_bound || -det >= err_bound {
        return Some(Orientation::from_sign(det));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn axis_scenarios() {
        let o = vector![0.0, 0.0];
        let e = vector![10.0, 0.0];
        assert_eq!(orientation(o, e, vector![5.0, 5.0]), Orientation::CounterClockwise);
        assert_eq!(orientation(o, e, vector![5.0, -5.0]), Orientation::Clockwise);
        assert_eq!(orientation(o, e, vector![5.0, 0.0]), Orientation::Collinear);
    }

    #[test]
    fn ordering_and_negation() {
        assert!(Orientation::Clockwise < Orientation::Collinear);
        assert!(Orientation::Collinear < Orientation::CounterClockwise);
        assert_eq!(-Orientation::Clockwise, Orientation::CounterClockwise);
        assert_eq!(-Orientation::Collinear, Orientation::Collinear);
        assert_eq!(Orientation::CounterClockwise.signum(), 1);
        assert_eq!(Orientation::Clockwise.to_string(), "Clockwise");
    }

    #[test]
    fn filter_defers_near_collinear_cases() {
        // Points on y = 0.1 x with coordinates that are not exactly representable:
        // the naive determinant is tiny and unreliable, the filter must defer.
        let o = vector![0.1, 0.01];
        let e = vector![100.3, 10.03];
        let p = vector![1.7, 0.17];
        let filtered = orientation_filter(o, e, p);
        let exact = exact_orientation(o, e, p);
        if let Some(f) = filtered {
            assert_eq!(f, exact);
        }
        assert_eq!(orientation(o, e, p), exact);
    }

    #[test]
    fn tiny_offsets_are_resolved_exactly() {
        // Classic failure case for naive orientation: points around (0.5, 0.5)
        // on a grid of one-ulp steps against the line (12,12)-(24,24).
        let a = vector![12.0, 12.0];
        let b = vector![24.0, 24.0];
        let ulp = f64::EPSILON * 0.5;
        for i in 0..16 {
            for j in 0..16 {
                let p = vector![0.5 + i as f64 * ulp, 0.5 + j as f64 * ulp];
                let expected = exact_orientation(a, b, p);
                assert_eq!(orientation(a, b, p), expected, "i={i} j={j}");
                if i == j {
                    assert_eq!(expected, Orientation::Collinear);
                }
            }
        }
    }

    #[test]
    fn non_finite_is_accepted_as_collinear() {
        // Accepted compatibility behaviour, not a certified classification.
        let o = vector![0.0, 0.0];
        let e = vector![1.0, 1.0];
        let p = vector![f64::INFINITY, f64::INFINITY];
        assert_eq!(orientation(o, e, p), Orientation::Collinear);
    }

    fn coord() -> impl Strategy<Value = Coord> {
        (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(x, y)| vector![x, y])
    }

    proptest! {
        #[test]
        fn swapping_reference_flips_sign(a in coord(), b in coord(), c in coord()) {
            prop_assume!(a != b);
            prop_assert_eq!(orientation(a, b, c), -orientation(b, a, c));
        }

        #[test]
        fn integer_lattice_collinear(x0 in -1000i32..1000, y0 in -1000i32..1000,
                                     dx in -50i32..50, dy in -50i32..50,
                                     k in -40i32..40) {
            prop_assume!(dx != 0 || dy != 0);
            let a = vector![x0 as f64, y0 as f64];
            let b = vector![(x0 + dx) as f64, (y0 + dy) as f64];
            let c = vector![(x0 + k * dx) as f64, (y0 + k * dy) as f64];
            prop_assert_eq!(orientation(a, b, c), Orientation::Collinear);
        }

        #[test]
        fn agrees_with_exact(a in coord(), b in coord(), c in coord()) {
            prop_assert_eq!(orientation(a, b, c), exact_orientation(a, b, c));
        }

        #[test]
        fn scaled_dyadic_collinear(x in -1e3f64..1e3, y in -1e3f64..1e3, s in 1u32..40) {
            // Multiples by powers of two are exact, so the three points are exactly collinear.
            let a = vector![x, y];
            let b = a * 2.0;
            let c = a * f64::from(1u32 << (s % 20));
            prop_assume!(a != b);
            prop_assert_eq!(orientation(a, b, c), Orientation::Collinear);
        }
    }
}
