//! Compare the naive floating-point orientation with the robust predicate on
//! nearly collinear triples.
//!
//! Usage:
//!   cargo run -p planar --example near_collinear -- [count] [extent]
//!
//! Prints how often the filter was undecided and how often the naive
//! determinant sign disagreed with the exact answer.

use planar::coord::Coord;
use planar::orientation::{orientation, orientation_filter, Orientation};
use planar::sample::{draw_near_collinear, ReplayToken};

fn naive(origin: Coord, end: Coord, point: Coord) -> Orientation {
    let d1 = end - origin;
    let d2 = point - end;
    Orientation::from_sign(d1.x * d2.y - d1.y * d2.x)
}

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let extent: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1e3);

    let mut undecided = 0u64;
    let mut naive_wrong = 0u64;
    for i in 0..count {
        let [a, b, p] = draw_near_collinear(extent, ReplayToken::new(2025, i));
        if orientation_filter(a, b, p).is_none() {
            undecided += 1;
        }
        if naive(a, b, p) != orientation(a, b, p) {
            naive_wrong += 1;
        }
    }
    println!("triples: {count}, extent: {extent}");
    println!("filter undecided: {undecided}");
    println!("naive sign wrong: {naive_wrong}");
}
