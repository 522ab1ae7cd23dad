use crate::area::{area2, centroid3, is_ring_counter_clockwise};
use crate::coord::Coord;
use crate::error::{GeomError, Result};

use super::line::LineCentroid;

/// Area-weighted centroid of a set of polygons.
///
/// Every ring is fanned into triangles against a fixed base point (the first
/// coordinate of the first polygon added). Triangle contributions are signed
/// so that holes subtract from shells whatever the winding of either ring.
/// Boundary lengths are accumulated alongside; when the net area is zero the
/// length-weighted centroid is returned instead.
#[derive(Clone, Debug, Default)]
pub struct AreaCentroid {
    base: Option<Coord>,
    /// Twice the signed area accumulated so far.
    area_sum2: f64,
    /// Sum of `area2 * centroid3` over all triangles.
    cg3: Coord,
    lines: LineCentroid,
}

impl AreaCentroid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a polygon given as rings: ring 0 is the shell, the rest are holes.
    ///
    /// Every ring is validated before anything is accumulated; on error the
    /// calculator is left unchanged.
    pub fn add_polygon(&mut self, rings: &[Vec<Coord>]) -> Result<&mut Self> {
        let Some(first) = rings.first().and_then(|shell| shell.first()) else {
            return Err(GeomError::invalid("polygon has no shell coordinates"));
        };

        let mut positive = Vec::with_capacity(rings.len());
        for (i, ring) in rings.iter().enumerate() {
            let ccw = winding(ring)?;
            // Shells count positive when clockwise, holes when counter-clockwise.
            positive.push(if i == 0 { !ccw } else { ccw });
        }

        let base = *self.base.get_or_insert(*first);
        for (ring, is_positive) in rings.iter().zip(positive) {
            self.add_ring(base, ring, is_positive);
        }
        Ok(self)
    }

    fn add_ring(&mut self, base: Coord, ring: &[Coord], is_positive: bool) {
        let sign = if is_positive { -1.0 } else { 1.0 };
        for w in ring.windows(2) {
            let a2 = area2(base, w[0], w[1]);
            self.cg3 += centroid3(base, w[0], w[1]) * (sign * a2);
            self.area_sum2 += sign * a2;
        }
        self.lines.add_ring(ring);
    }

    /// Net area accumulated so far (unsigned for a single well-formed polygon).
    pub fn area(&self) -> f64 {
        self.area_sum2.abs() / 2.0
    }

    /// Area-weighted centroid, or the length-weighted centroid of all ring
    /// boundaries when the net area is zero. The origin when nothing was added.
    pub fn centroid(&self) -> Coord {
        if self.area_sum2 != 0.0 {
            return self.cg3 / 3.0 / self.area_sum2;
        }
        self.lines.centroid()
    }
}

/// Ring winding for centroid purposes. Rings whose top vertex has no two
/// distinct neighbours enclose no area; they count as clockwise.
fn winding(ring: &[Coord]) -> Result<bool> {
    match is_ring_counter_clockwise(ring) {
        Ok(ccw) => Ok(ccw),
        Err(GeomError::DegenerateRing) => {
            tracing::trace!(len = ring.len(), "degenerate ring, treated as clockwise");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
