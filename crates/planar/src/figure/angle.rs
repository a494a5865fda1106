use crate::error::{ConstructionError, Result};
use crate::linear::Line;
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;
use std::f64::consts::FRAC_PI_2;

/// Angle at `vertex` between the rays towards `p1` and `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    vertex: Point,
    p1: Point,
    p2: Point,
}

impl Angle {
    pub fn new(vertex: Point, p1: Point, p2: Point) -> Result<Self> {
        if vertex.coincide(&p1) || vertex.coincide(&p2) {
            return Err(ConstructionError::CoincidentPoints);
        }
        Ok(Self { vertex, p1, p2 })
    }

    #[inline]
    fn map<F: Fn(&Point) -> Point>(&self, f: F) -> Self {
        Self {
            vertex: f(&self.vertex),
            p1: f(&self.p1),
            p2: f(&self.p2),
        }
    }

    #[inline]
    pub fn vertex(&self) -> Point {
        self.vertex
    }
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Radians in `[0, π]`.
    #[inline]
    pub fn measure(&self) -> f64 {
        Point::angle_between(&self.vertex, &self.p1, &self.p2)
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.measure().to_degrees()
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        self.is_right_eps(Tolerance::default())
    }
    pub fn is_right_eps(&self, tol: Tolerance) -> bool {
        tol.equal(self.measure(), FRAC_PI_2)
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, Tolerance::default())
    }

    /// Both sub-angles towards `p` strictly smaller than the whole angle.
    pub fn contains_eps(&self, p: &Point, tol: Tolerance) -> bool {
        let total = self.measure();
        let to_p1 = Point::angle_between(&self.vertex, p, &self.p1);
        let to_p2 = Point::angle_between(&self.vertex, p, &self.p2);
        tol.is_less_than(to_p1, total) && tol.is_less_than(to_p2, total)
    }
}

impl Coincide for Angle {
    /// Same vertex and the same ray points, in either order.
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        self.vertex.coincide_eps(&other.vertex, tol)
            && ((self.p1.coincide_eps(&other.p1, tol) && self.p2.coincide_eps(&other.p2, tol))
                || (self.p1.coincide_eps(&other.p2, tol) && self.p2.coincide_eps(&other.p1, tol)))
    }
}

impl Transform for Angle {
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
