//! Homogeneous-coordinate line intersection.
//!
//! Each segment's supporting line is the cross product of its endpoints lifted
//! to `(x, y, 1)`; the intersection is the cross product of the two lines,
//! divided by its `w` component. Parallel or nearly parallel lines drive `w`
//! towards zero, which is reported as `NumericFailure`.
//!
//! Numerically fragile on its own: callers translate inputs towards the origin
//! first and validate the result (see `robust`).

use crate::coord::{Coord, Segment};
use crate::error::{GeomError, Result};

/// Intersection point of the infinite lines through `s1` and `s2`.
pub fn intersection(s1: &Segment, s2: &Segment) -> Result<Coord> {
    let (p1, p2) = (s1.start, s1.end);
    let (q1, q2) = (s2.start, s2.end);

    let l1_x = p1.y - p2.y;
    let l1_y = p2.x - p1.x;
    let l1_w = p1.x * p2.y - p2.x * p1.y;

    let l2_x = q1.y - q2.y;
    let l2_y = q2.x - q1.x;
    let l2_w = q1.x * q2.y - q2.x * q1.y;

    let x = l1_y * l2_w - l2_y * l1_w;
    let y = l2_x * l1_w - l1_x * l2_w;
    let w = l1_x * l2_y - l2_x * l1_y;

    let xi = x / w;
    let yi = y / w;
    if !xi.is_finite() || !yi.is_finite() {
        return Err(GeomError::numeric(
            "homogeneous intersection is undefined (parallel or near-parallel lines)",
        ));
    }
    Ok(Coord::new(xi, yi))
}
