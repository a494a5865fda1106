use super::{perimeter, same_point_set};
use crate::error::{ConstructionError, Result};
use crate::linear::Line;
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;

/// Ordered vertex sequence with at least three points; no convexity or closure checks.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(ConstructionError::TooFewVertices(points.len()));
        }
        Ok(Self { points })
    }

    /// Caller guarantees at least three points.
    pub(crate) fn new_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 3);
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Never true: a polygon holds at least three points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Apply `f` to every vertex, keeping order and count.
    pub fn map_points<F: FnMut(&Point) -> Point>(&self, f: F) -> Polygon {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points)
    }
}

impl Coincide for Polygon {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        same_point_set(&self.points, &other.points, tol)
    }
}

impl Transform for Polygon {
    fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|p| p.translate(dx, dy))
    }
    fn rotate(&self, center: &Point, angle: f64) -> Self {
        self.map_points(|p| p.rotate(center, angle))
    }
    fn reflect(&self, axis: &Line) -> Self {
        self.map_points(|p| p.reflect(axis))
    }
}
