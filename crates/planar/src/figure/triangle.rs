use super::{perimeter, same_point_set};
use crate::error::{ConstructionError, Result};
use crate::linear::{Line, Segment};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;

/// Triangle with pairwise distinct vertices (collinear vertices are allowed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Result<Self> {
        if p1.coincide(&p2) || p2.coincide(&p3) || p1.coincide(&p3) {
            return Err(ConstructionError::CoincidentPoints);
        }
        Ok(Self { p1, p2, p3 })
    }

    #[inline]
    fn map<F: Fn(&Point) -> Point>(&self, f: F) -> Self {
        Self {
            p1: f(&self.p1),
            p2: f(&self.p2),
            p3: f(&self.p3),
        }
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }
    #[inline]
    pub fn p3(&self) -> Point {
        self.p3
    }
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Heron's formula; zero for collinear vertices.
    pub fn area(&self) -> f64 {
        let a = self.p1.distance(&self.p2);
        let b = self.p2.distance(&self.p3);
        let c = self.p3.distance(&self.p1);
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices())
    }

    /// Topological containment; see the module docs. Vertices and edge points are outside.
    pub fn contains(&self, p: &Point) -> bool {
        let mut by_distance = self.vertices();
        by_distance.sort_by(|u, v| p.distance(u).total_cmp(&p.distance(v)));
        let [near, mid, far] = by_distance;
        !Segment::new_unchecked(near, mid).crosses(&Segment::new_unchecked(*p, far))
    }
}

impl Coincide for Triangle {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        same_point_set(&self.vertices(), &other.vertices(), tol)
    }
}

impl Transform for Triangle {
    fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map(|p| p.translate(dx, dy))
    }
    fn rotate(&self, center: &Point, angle: f64) -> Self {
        self.map(|p| p.rotate(center, angle))
    }
    fn reflect(&self, axis: &Line) -> Self {
        self.map(|p| p.reflect(axis))
    }
}
