//! Points in the plane.
//!
//! Purpose
//! - `Point` is the leaf value every other shape is built from. It wraps a
//!   `nalgebra::Vector2<f64>` and guarantees neither coordinate is NaN.
//! - Rotation and stretch about a center use polar form around that center;
//!   a point coinciding with the center is returned unchanged.
//!
//! Code cross-refs: `Transform` (rotate, reflect, translate), `Line::foot_of_perpendicular`

use crate::error::{ensure_numbers, Result};
use crate::tolerance::{Coincide, Tolerance};
use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    v: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn origin() -> Point {
        Self::raw(0.0, 0.0)
    }

    pub fn new(x: f64, y: f64) -> Result<Self> {
        ensure_numbers(&[x, y])?;
        Ok(Self::raw(x, y))
    }

    pub fn from_vector(v: Vector2<f64>) -> Result<Self> {
        Self::new(v.x, v.y)
    }

    /// Internal constructor for values derived from already valid points.
    #[inline]
    pub(crate) fn raw(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    #[inline]
    pub(crate) fn from_vec_raw(v: Vector2<f64>) -> Self {
        Self { v }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }
    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        self.v
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.v - other.v).norm()
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Self::from_vec_raw((self.v + other.v) * 0.5)
    }

    /// Direction from `center` to `self`, as an `atan2` angle.
    #[inline]
    pub fn angle_from(&self, center: &Point) -> f64 {
        let d = self.v - center.v;
        d.y.atan2(d.x)
    }

    /// Rotate about `center` by `angle`, then place at distance `length` from it.
    ///
    /// A negative `length` lands on the opposite side of the center.
    pub fn rotate_and_stretch_to(&self, center: &Point, angle: f64, length: f64) -> Point {
        if self.coincide(center) {
            return *self;
        }
        let theta = self.angle_from(center) + angle;
        Self::raw(
            center.x() + length * theta.cos(),
            center.y() + length * theta.sin(),
        )
    }

    /// Rotate about `center` by `angle` and scale the distance to it by `ratio`.
    pub fn rotate_and_stretch(&self, center: &Point, angle: f64, ratio: f64) -> Point {
        let length = self.distance(center) * ratio;
        self.rotate_and_stretch_to(center, angle, length)
    }

    #[inline]
    pub fn stretch(&self, center: &Point, ratio: f64) -> Point {
        self.rotate_and_stretch(center, 0.0, ratio)
    }

    #[inline]
    pub fn stretch_to(&self, center: &Point, length: f64) -> Point {
        self.rotate_and_stretch_to(center, 0.0, length)
    }

    /// Angle at `vertex` between the rays towards `p1` and `p2`, in `[0, π]`.
    ///
    /// Law of cosines. NaN when either ray point coincides with the vertex.
    pub fn angle_between(vertex: &Point, p1: &Point, p2: &Point) -> f64 {
        if vertex.coincide(p1) || vertex.coincide(p2) {
            return f64::NAN;
        }
        let a = p1.distance(p2);
        let b = vertex.distance(p1);
        let c = vertex.distance(p2);
        let cos = (b * b + c * c - a * a) / (2.0 * b * c);
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.v
    }
}

impl TryFrom<Vector2<f64>> for Point {
    type Error = crate::error::ConstructionError;

    fn try_from(v: Vector2<f64>) -> Result<Self> {
        Self::from_vector(v)
    }
}

impl Coincide for Point {
    /// Coordinate-wise equality within `tol`.
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        tol.equal(self.x(), other.x()) && tol.equal(self.y(), other.y())
    }
}
