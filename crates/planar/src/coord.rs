//! Coordinate primitives: points, segments, envelopes, flat-ordinate readers.
//!
//! - `Coord`: an (X, Y) pair, stored as `nalgebra::Vector2<f64>`.
//! - `Segment`: ordered `(start, end)`; zero length is a valid input.
//! - `Envelope`: closed axis-aligned bounding box.
//!
//! Callers that keep coordinates in flat `[f64]` buffers with a stride wider
//! than 2 (XYZ, XYM, ...) go through `xy_at`/`xy_coords`; only the first two
//! ordinates of each tuple are ever read.

use nalgebra::Vector2;

use crate::cfg::XY;
use crate::error::{GeomError, Result};

/// Planar coordinate (X, Y).
pub type Coord = Vector2<f64>;

/// Euclidean distance between two coordinates.
#[inline]
pub fn distance(a: Coord, b: Coord) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// 2D cross product `a × b` (z component of the 3D cross product).
#[inline]
pub fn cross(a: Coord, b: Coord) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Bit-level XY equality used by the robust code paths (`-0.0 == 0.0`, NaN never equal).
#[inline]
pub fn xy_equal(a: Coord, b: Coord) -> bool {
    a.x == b.x && a.y == b.y
}

/// XY equality where NaN equals NaN. Intended for structural equality checks
/// on caller data, not for the predicates.
#[inline]
pub fn xy_equal_nan(a: Coord, b: Coord) -> bool {
    let eq = |p: f64, q: f64| p == q || (p.is_nan() && q.is_nan());
    eq(a.x, b.x) && eq(a.y, b.y)
}

/// Line segment between two coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Coord,
    pub end: Coord,
}

impl Segment {
    #[inline]
    pub fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_xy(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Coord::new(x0, y0), Coord::new(x1, y1))
    }

    /// `true` when start and end coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        xy_equal(self.start, self.end)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Coord {
        Coord::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    #[inline]
    pub fn envelope(&self) -> Envelope {
        Envelope::of_pair(self.start, self.end)
    }

    /// Segment shifted by `-offset` (both endpoints).
    #[inline]
    pub(crate) fn translated(&self, offset: Coord) -> Self {
        Self::new(self.start - offset, self.end - offset)
    }
}

/// Closed axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub min: Coord,
    pub max: Coord,
}

impl Envelope {
    /// Envelope spanned by two corner points (any order).
    #[inline]
    pub fn of_pair(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Envelope of a point set; `None` for an empty set.
    pub fn of_points(points: &[Coord]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut env = Self::of_pair(*first, *first);
        for p in rest {
            env.expand_to_include(*p);
        }
        Some(env)
    }

    pub fn expand_to_include(&mut self, p: Coord) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.min.x <= p.x && self.max.x >= p.x && self.min.y <= p.y && self.max.y >= p.y
    }

    /// `true` if the closed boxes share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }

    /// Overlap box of two envelopes, if they intersect.
    pub fn intersection(&self, other: &Envelope) -> Option<Envelope> {
        if !self.intersects(other) {
            return None;
        }
        Some(Envelope {
            min: Coord::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Coord::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        })
    }

    #[inline]
    pub fn centre(&self) -> Coord {
        Coord::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// `true` if `p` lies in the closed bounding box of `a`–`b`.
#[inline]
pub fn point_within_segment_bounds(p: Coord, a: Coord, b: Coord) -> bool {
    Envelope::of_pair(a, b).contains(p)
}

/// `true` if the bounding boxes of the two segments overlap.
#[inline]
pub fn segments_overlap(s1: &Segment, s2: &Segment) -> bool {
    s1.envelope().intersects(&s2.envelope())
}

fn check_stride(stride: usize) -> Result<()> {
    if stride < XY {
        return Err(GeomError::invalid(format!(
            "stride must be at least {XY}, was {stride}"
        )));
    }
    Ok(())
}

/// XY of the `index`-th tuple in a flat ordinate buffer.
///
/// Panics if the tuple is out of range (caller bookkeeping error).
#[inline]
pub fn xy_at(flat: &[f64], stride: usize, index: usize) -> Coord {
    let i = index * stride;
    Coord::new(flat[i], flat[i + 1])
}

/// Read all tuples of a flat ordinate buffer as XY coordinates.
///
/// Fails if `stride < 2` or the buffer length is not a multiple of `stride`.
pub fn xy_coords(flat: &[f64], stride: usize) -> Result<Vec<Coord>> {
    check_stride(stride)?;
    if flat.len() % stride != 0 {
        return Err(GeomError::invalid(format!(
            "flat buffer of {} ordinates is not a multiple of stride {stride}",
            flat.len()
        )));
    }
    Ok(flat
        .chunks_exact(stride)
        .map(|c| Coord::new(c[0], c[1]))
        .collect())
}
