//! Coordinate orderings: lexicographic and radial.
//!
//! - `cmp_xy`/`sort_xy`: X first, then Y. A total order (`f64::total_cmp`),
//!   so `-0.0` sorts before `0.0` and NaNs sort to the extremes.
//! - `radial_cmp`/`sort_radial`: angular order around a focal point, decided
//!   by the robust orientation predicate, with distance from the focus
//!   breaking collinear ties.
//!
//! The radial comparison is not transitive (orientation is not a global
//! angular order once points wrap around the focus), so `sort_radial` is a
//! plain insertion sort whose result depends only on pairwise comparisons of
//! neighbours. Use it on small point sets.

use std::cmp::Ordering;

use crate::coord::Coord;
use crate::orientation::{orientation, Orientation};

/// Lexicographic order on (X, Y).
#[inline]
pub fn cmp_xy(a: &Coord, b: &Coord) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Sort by X, then Y.
pub fn sort_xy(coords: &mut [Coord]) {
    coords.sort_by(cmp_xy);
}

/// Radial order of `a` and `b` around `focus`.
///
/// `b` counter-clockwise of `a` (seen from `focus`) means `a` is greater;
/// clockwise means `a` is less. Collinear points compare by squared
/// distance to `focus`, nearer first.
pub fn radial_cmp(focus: Coord, a: &Coord, b: &Coord) -> Ordering {
    match orientation(focus, *a, *b) {
        Orientation::CounterClockwise => Ordering::Greater,
        Orientation::Clockwise => Ordering::Less,
        Orientation::Collinear => {
            let da = (a - focus).norm_squared();
            let db = (b - focus).norm_squared();
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        }
    }
}

/// Insertion sort by `radial_cmp` around `focus`. Stable.
pub fn sort_radial(coords: &mut [Coord], focus: Coord) {
    for i in 1..coords.len() {
        let mut j = i;
        while j > 0 && radial_cmp(focus, &coords[j], &coords[j - 1]) == Ordering::Less {
            coords.swap(j, j - 1);
            j -= 1;
        }
    }
}
