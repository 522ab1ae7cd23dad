//! Ring area and winding.
//!
//! Rings are closed coordinate sequences: the last coordinate repeats the first.
//!
//! - `signed_ring_area`: shoelace formula relative to the first vertex;
//!   positive for clockwise rings, negative for counter-clockwise.
//! - `is_ring_counter_clockwise`: winding from the turn at the highest vertex,
//!   decided by the robust orientation predicate.
//!
//! The shoelace terms are summed pairwise from both ends of the ring, so the
//! reversed ring sums the exact negations in the exact same order and the area
//! flips sign bit for bit.

use crate::coord::{xy_equal, Coord};
use crate::error::{GeomError, Result};
use crate::orientation::orientation;

/// Signed area of a closed ring; `0.0` for fewer than 3 coordinates.
pub fn signed_ring_area(ring: &[Coord]) -> f64 {
    let len = ring.len();
    if len < 3 {
        return 0.0;
    }
    let x0 = ring[0].x;
    let term = |i: usize| (ring[i].x - x0) * (ring[i - 1].y - ring[i + 1].y);

    // Terms run over i in 1..=len-2.
    let count = len - 2;
    let mut sum = 0.0;
    for k in 0..count / 2 {
        sum += term(1 + k) + term(len - 2 - k);
    }
    if count % 2 == 1 {
        sum += term(1 + count / 2);
    }
    sum / 2.0
}

/// `true` if the closed ring winds counter-clockwise.
///
/// Repeated coordinates are skipped when looking for the neighbours of the
/// highest vertex. Errors:
/// - `InvalidInput` for fewer than 3 points (closing point excluded);
/// - `DegenerateRing` when the highest vertex has no two distinct neighbours
///   (A-B-A configurations, coincident segments).
pub fn is_ring_counter_clockwise(ring: &[Coord]) -> Result<bool> {
    let n = ring.len().saturating_sub(1);
    if n < 3 {
        return Err(GeomError::invalid(format!(
            "ring has {n} points (closing point excluded), at least 3 are required to determine orientation"
        )));
    }

    let mut hi = 0;
    for (i, p) in ring.iter().enumerate().take(n).skip(1) {
        if p.y > ring[hi].y {
            hi = i;
        }
    }

    let mut prev = hi;
    loop {
        prev = if prev == 0 { n } else { prev - 1 };
        if !xy_equal(ring[prev], ring[hi]) || prev == hi {
            break;
        }
    }

    let mut next = hi;
    loop {
        next = (next + 1) % n;
        if !xy_equal(ring[next], ring[hi]) || next == hi {
            break;
        }
    }

    let (p, h, q) = (ring[prev], ring[hi], ring[next]);
    if xy_equal(p, h) || xy_equal(q, h) || xy_equal(p, q) {
        return Err(GeomError::DegenerateRing);
    }

    let turn = orientation(p, h, q);
    if turn.is_collinear() {
        // Neighbours on a horizontal line through the top vertex: CCW when prev is right of next.
        Ok(p.x > q.x)
    } else {
        Ok(turn.is_ccw())
    }
}

/// Twice the signed area of triangle `p1 p2 p3` (positive when CCW).
#[inline]
pub(crate) fn area2(p1: Coord, p2: Coord, p3: Coord) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y)
}

/// Three times the centroid of triangle `p1 p2 p3`.
#[inline]
pub(crate) fn centroid3(p1: Coord, p2: Coord, p3: Coord) -> Coord {
    p1 + p2 + p3
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn square_ccw() -> Vec<Coord> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.0, 0.0],
        ]
    }

    #[test]
    fn unit_square_area_sign_follows_winding() {
        let ccw = square_ccw();
        assert_eq!(signed_ring_area(&ccw), -1.0);
        let cw: Vec<Coord> = ccw.iter().rev().copied().collect();
        assert_eq!(signed_ring_area(&cw), 1.0);
        assert!(is_ring_counter_clockwise(&ccw).unwrap());
        assert!(!is_ring_counter_clockwise(&cw).unwrap());
    }

    #[test]
    fn short_and_flat_rings_have_zero_area() {
        assert_eq!(signed_ring_area(&[]), 0.0);
        assert_eq!(signed_ring_area(&[vector![1.0, 1.0], vector![2.0, 2.0]]), 0.0);
        let flat = [
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
            vector![0.0, 0.0],
        ];
        assert_eq!(signed_ring_area(&flat), 0.0);
    }

    #[test]
    fn winding_skips_repeated_top_vertex() {
        let ring = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 3.0],
            vector![2.0, 3.0],
            vector![0.0, 0.0],
        ];
        assert!(is_ring_counter_clockwise(&ring).unwrap());
    }

    #[test]
    fn flat_top_breaks_tie_by_x() {
        // Highest vertex sits inside a horizontal top edge.
        let ring = [
            vector![1.0, 2.0],
            vector![0.0, 2.0],
            vector![1.0, 0.0],
            vector![2.0, 2.0],
            vector![1.0, 2.0],
        ];
        assert!(is_ring_counter_clockwise(&ring).unwrap());
        assert!(signed_ring_area(&ring) < 0.0);
        let rev: Vec<Coord> = ring.iter().rev().copied().collect();
        assert!(!is_ring_counter_clockwise(&rev).unwrap());
    }

    #[test]
    fn winding_errors() {
        let too_short = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0]];
        assert!(matches!(
            is_ring_counter_clockwise(&too_short),
            Err(GeomError::InvalidInput { .. })
        ));
        let aba = [
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 0.0],
            vector![0.0, 0.0],
        ];
        assert_eq!(is_ring_counter_clockwise(&aba), Err(GeomError::DegenerateRing));
    }

    #[test]
    fn triangle_helpers() {
        let (a, b, c) = (vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
        assert_eq!(area2(a, b, c), 4.0);
        assert_eq!(area2(a, c, b), -4.0);
        assert_eq!(centroid3(a, b, c), vector![2.0, 2.0]);
    }

    fn closed_ring() -> impl Strategy<Value = Vec<Coord>> {
        prop::collection::vec((-1e4f64..1e4, -1e4f64..1e4), 3..24).prop_map(|pts| {
            let mut ring: Vec<Coord> = pts.into_iter().map(|(x, y)| vector![x, y]).collect();
            ring.push(ring[0]);
            ring
        })
    }

    proptest! {
        #[test]
        fn reversing_a_ring_negates_its_area(ring in closed_ring()) {
            let rev: Vec<Coord> = ring.iter().rev().copied().collect();
            prop_assert_eq!(signed_ring_area(&rev), -signed_ring_area(&ring));
        }

        #[test]
        fn winding_agrees_with_area_sign(
            a in (-1e4f64..1e4, -1e4f64..1e4),
            b in (-1e4f64..1e4, -1e4f64..1e4),
            c in (-1e4f64..1e4, -1e4f64..1e4),
        ) {
            // Triangles are always simple.
            let ring = [
                vector![a.0, a.1],
                vector![b.0, b.1],
                vector![c.0, c.1],
                vector![a.0, a.1],
            ];
            let area = signed_ring_area(&ring);
            prop_assume!(area.abs() > 1e-3);
            prop_assert_eq!(is_ring_counter_clockwise(&ring).unwrap(), area < 0.0);
        }
    }
}
