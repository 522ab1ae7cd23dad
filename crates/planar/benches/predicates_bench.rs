//! Criterion benchmarks for the robust predicates and the calculators built on them.
//! Inputs: well-separated random segments (filter path) and nearly collinear
//! triples (exact path), rings with n in {8, 64, 512} vertices.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p planar

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::area::signed_ring_area;
use planar::centroid::polygons_centroid;
use planar::intersect::classify;
use planar::orientation::orientation;
use planar::sample::{
    draw_near_collinear, draw_ring_radial, draw_segments, ReplayToken, RingCfg, VertexCount,
};

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");
    let segs = draw_segments(1024, 1e3, ReplayToken::new(41, 0));
    let points: Vec<_> = draw_segments(1024, 1e3, ReplayToken::new(41, 1))
        .into_iter()
        .map(|s| s.start)
        .collect();
    group.bench_function("filter_path", |b| {
        b.iter(|| {
            for (s, p) in segs.iter().zip(&points) {
                black_box(orientation(s.start, s.end, *p));
            }
        })
    });

    let triples: Vec<_> = (0..1024)
        .map(|i| draw_near_collinear(1e3, ReplayToken::new(42, i)))
        .collect();
    group.bench_function("exact_path", |b| {
        b.iter(|| {
            for [a, e, p] in &triples {
                black_box(orientation(*a, *e, *p));
            }
        })
    });
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let segs = draw_segments(256, 10.0, ReplayToken::new(43, 0));
    c.bench_function("intersect/all_pairs_256", |b| {
        b.iter(|| {
            for s1 in &segs {
                for s2 in &segs {
                    black_box(classify(s1, s2));
                }
            }
        })
    });
}

fn bench_rings(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    for &n in &[8usize, 64, 512] {
        let cfg = RingCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RingCfg::default()
        };
        let ring = draw_ring_radial(cfg, ReplayToken::new(44, n as u64));
        group.bench_with_input(BenchmarkId::new("signed_area", n), &ring, |b, ring| {
            b.iter(|| black_box(signed_ring_area(ring)))
        });
        let polygon = vec![vec![ring.clone()]];
        group.bench_with_input(BenchmarkId::new("area_centroid", n), &polygon, |b, poly| {
            b.iter(|| black_box(polygons_centroid(poly)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orientation, bench_intersect, bench_rings);
criterion_main!(benches);
