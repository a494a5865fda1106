//! Seeded random shapes for property tests and benchmarks.
//!
//! Purpose
//! - Points and circles in a box, lines through two drawn points, and
//!   star-shaped polygons around a drawn circle.
//!
//! Model
//! - A `ReplayToken { seed, index }` seeds its own `StdRng`, so draw `index` of
//!   a sweep can be replayed without replaying the ones before it.
//! - Star polygons walk around the circle center in `n` equal steps, each
//!   nudged by less than half a step, so vertex order follows angle order.
//!
//! Code cross-refs: `Polygon`, `Circle`, `Point::rotate_and_stretch_to`

use crate::figure::Polygon;
use crate::linear::Line;
use crate::point::Point;
use crate::round::Circle;
use crate::tolerance::Coincide;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::ops::{Range, RangeInclusive};

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}
impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

/// Names one reproducible draw in a seeded sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    /// Generator keyed by `(seed, index)`; distinct tokens give independent streams.
    pub fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Uniform point in `bounds` (degenerate bounds collapse to the lower corner).
pub fn draw_point<R: Rng>(rng: &mut R, bounds: Bounds2) -> Point {
    let x = bounds.x_min + rng.gen::<f64>() * (bounds.x_max - bounds.x_min);
    let y = bounds.y_min + rng.gen::<f64>() * (bounds.y_max - bounds.y_min);
    Point::raw(x, y)
}

/// Circle centered in `bounds` with radius drawn from `radius`.
///
/// Panics if `radius` is empty, like `Rng::gen_range`.
pub fn draw_circle<R: Rng>(rng: &mut R, bounds: Bounds2, radius: Range<f64>) -> Circle {
    let center = draw_point(rng, bounds);
    let r = rng.gen_range(radius).max(1e-9);
    Circle::new_unchecked(center, r)
}

/// Line through two distinct points drawn in `bounds`.
///
/// Falls back to the vertical line through the first point when the box is too
/// small to draw a distinct second point.
pub fn draw_line<R: Rng>(rng: &mut R, bounds: Bounds2) -> Line {
    let p = draw_point(rng, bounds);
    for _ in 0..64 {
        let q = draw_point(rng, bounds);
        if !p.coincide(&q) {
            return Line::through_unchecked(&p, &q);
        }
    }
    Line::Y_AXIS.parallel_through(&p)
}

/// Star-shaped polygon around `circle`, counterclockwise.
///
/// The vertex count is drawn from `vertices` (at least 3). `spread` in `[0, 1)`
/// jitters each vertex: its angle moves by up to `spread / 2` of a step and its
/// distance from the center lies in `r·[1 - spread, 1 + spread]`.
///
/// Panics if `vertices` is empty, like `Rng::gen_range`.
pub fn draw_star_polygon<R: Rng>(
    rng: &mut R,
    circle: &Circle,
    vertices: RangeInclusive<usize>,
    spread: f64,
) -> Polygon {
    let n = rng.gen_range(vertices).max(3);
    let spread = spread.clamp(0.0, 0.98);
    let step = TAU / n as f64;
    let center = circle.center();
    let start = Point::raw(center.x() + 1.0, center.y());
    let phase = rng.gen::<f64>() * step;
    let points = (0..n)
        .map(|k| {
            let nudge = rng.gen_range(-0.5..=0.5) * spread * step;
            let length = circle.radius() * (1.0 + rng.gen_range(-spread..=spread));
            start.rotate_and_stretch_to(&center, phase + k as f64 * step + nudge, length)
        })
        .collect();
    Polygon::new_unchecked(points)
}
