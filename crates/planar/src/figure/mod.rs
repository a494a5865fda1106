//! Closed and angular figures built from points.
//!
//! Purpose
//! - `Triangle`, `Polygon` and `Angle` own copies of their defining points.
//!   Transforms map those points and rebuild the figure.
//! - Coincidence of triangles and polygons is order-independent: equal vertex
//!   counts and every vertex matched in the other figure.
//!
//! Point-in-triangle
//! - Topological test: sort the vertices by distance to the query point
//!   (stable), then the point is inside iff the edge between the two nearest
//!   vertices does not cross the segment from the point to the farthest one.
//!   Crossing is closed (`Segment::crosses`), so points on an edge are outside.
//!
//! Code cross-refs: `Segment::crosses`, `Point::angle_between`

mod angle;
mod polygon;
mod triangle;

pub use angle::Angle;
pub use polygon::Polygon;
pub use triangle::Triangle;

use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};

/// Same length and each point matched within `tol` in the other sequence.
pub(crate) fn same_point_set(a: &[Point], b: &[Point], tol: Tolerance) -> bool {
    let covered = |xs: &[Point], ys: &[Point]| {
        xs.iter()
            .all(|x| ys.iter().any(|y| x.coincide_eps(y, tol)))
    };
    a.len() == b.len() && covered(a, b) && covered(b, a)
}

/// Closed-loop perimeter.
pub(crate) fn perimeter(points: &[Point]) -> f64 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| p.distance(q))
        .sum()
}
