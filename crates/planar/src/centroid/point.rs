use crate::coord::{xy_coords, Coord};
use crate::error::Result;

/// Arithmetic mean of a point set.
#[derive(Clone, Debug, Default)]
pub struct PointCentroid {
    count: usize,
    sum: Coord,
}

impl PointCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, p: Coord) -> &mut Self {
        self.count += 1;
        self.sum += p;
        self
    }

    pub fn add_points(&mut self, points: &[Coord]) -> &mut Self {
        for p in points {
            self.add_point(*p);
        }
        self
    }

    /// Add every tuple of a flat ordinate buffer (XY of each `stride`-wide tuple).
    pub fn add_flat(&mut self, flat: &[f64], stride: usize) -> Result<&mut Self> {
        let points = xy_coords(flat, stride)?;
        Ok(self.add_points(&points))
    }

    /// Number of points added so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the added points; the origin when nothing was added.
    pub fn centroid(&self) -> Coord {
        if self.count == 0 {
            return Coord::zeros();
        }
        self.sum / self.count as f64
    }
}
