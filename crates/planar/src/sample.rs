//! Reproducible random inputs for stress tests, benchmarks, and CLI experiments.
//!
//! Purpose
//! - Star-shaped rings (radial jitter around a centre), random segment sets,
//!   and nearly collinear triples that defeat the floating-point filter.
//!
//! Model
//! - Every draw is keyed by a `ReplayToken (seed, index)`, mixed into one
//!   `StdRng`, so a single draw can be replayed without regenerating the
//!   sequence before it.
//! - Rings: `n` equally spaced angles plus bounded angular jitter, sorted,
//!   then radii `radius * (1 + u)` with `u` in `[-radial_jitter, radial_jitter]`.
//!   Sorted angles around the centre make the ring simple and counter-clockwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::coord::{Coord, Segment};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing `2π/n`. Clamped to
    /// `[0, 0.49]`, and further for small `n` so every angular gap stays below `π`.
    pub angle_jitter_frac: f64,
    /// Relative radial jitter amplitude. Clamped to `[0, 0.9]`.
    pub radial_jitter: f64,
    pub radius: f64,
    pub centre: Coord,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            radius: 1.0,
            centre: Coord::zeros(),
        }
    }
}

/// Closed, simple, counter-clockwise ring.
pub fn draw_ring_radial(cfg: RingCfg, tok: ReplayToken) -> Vec<Coord> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    // Gaps are at most `delta * (1 + 2 aj)`; keep them below π.
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.49)
        .min(0.24 * (n as f64 - 2.0));
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = TAU / n as f64;
    let phase = rng.gen::<f64>() * TAU;

    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    angles.sort_by(f64::total_cmp);

    let mut ring: Vec<Coord> = angles
        .into_iter()
        .map(|th| {
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * cfg.radius;
            cfg.centre + Coord::new(th.cos(), th.sin()) * r
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// `count` segments with endpoints uniform in `[-extent, extent]²`.
///
/// Panics unless `extent` is finite and non-negative.
pub fn draw_segments(count: usize, extent: f64, tok: ReplayToken) -> Vec<Segment> {
    let mut rng = tok.to_std_rng();
    let mut coord = || {
        Coord::new(
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        )
    };
    (0..count).map(|_| Segment::new(coord(), coord())).collect()
}

/// Triple `(a, b, p)` with `p` rounded onto segment `a-b` and then moved by up
/// to two ulps in X. The orientation of such triples is decided by exact
/// arithmetic in almost every case.
///
/// Panics unless `extent` is finite and non-negative.
pub fn draw_near_collinear(extent: f64, tok: ReplayToken) -> [Coord; 3] {
    let mut rng = tok.to_std_rng();
    let mut coord = || {
        Coord::new(
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        )
    };
    let (a, b) = (coord(), coord());
    let t: f64 = rng.gen_range(0.0..1.0);
    let ulps: i64 = rng.gen_range(-2..=2);
    let on_line = a + (b - a) * t;
    [a, b, Coord::new(nudge(on_line.x, ulps), on_line.y)]
}

/// `x` moved by `ulps` representable steps away from (positive) or towards
/// (negative) zero. Zero and non-finite values are returned unchanged.
fn nudge(x: f64, ulps: i64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    f64::from_bits((x.to_bits() as i64 + ulps) as u64)
}
