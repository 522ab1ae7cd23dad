use crate::coord::{Coord, Segment};

/// Length-weighted centroid of a set of polylines.
///
/// Each segment contributes its midpoint weighted by its length, so
/// zero-length segments contribute nothing.
#[derive(Clone, Debug, Default)]
pub struct LineCentroid {
    weighted_sum: Coord,
    total_length: f64,
}

impl LineCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, seg: &Segment) -> &mut Self {
        let len = seg.length();
        self.total_length += len;
        self.weighted_sum += seg.midpoint() * len;
        self
    }

    /// Add every segment of the polyline through `line`.
    pub fn add_line(&mut self, line: &[Coord]) -> &mut Self {
        for w in line.windows(2) {
            self.add_segment(&Segment::new(w[0], w[1]));
        }
        self
    }

    /// Add a closed ring. Identical to `add_line`: the closing segment is
    /// already part of the coordinate sequence.
    pub fn add_ring(&mut self, ring: &[Coord]) -> &mut Self {
        self.add_line(ring)
    }

    /// Add the boundary of a polygon (shell and holes).
    pub fn add_polygon(&mut self, rings: &[Vec<Coord>]) -> &mut Self {
        for ring in rings {
            self.add_ring(ring);
        }
        self
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Length-weighted mean of segment midpoints; the origin when the total
    /// length is zero.
    pub fn centroid(&self) -> Coord {
        if self.total_length == 0.0 {
            return Coord::zeros();
        }
        self.weighted_sum / self.total_length
    }
}
