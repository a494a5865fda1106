//! Rigid transforms shared by every shape.
//!
//! Purpose
//! - One trait for translation, rotation about a center, reflection across a
//!   line (axial symmetry), and central symmetry.
//! - Compound shapes apply the point primitives to their defining points and
//!   rebuild a new value. Nothing is mutated in place.
//!
//! Code cross-refs: `Point`, `Line::rotate` (foot-of-perpendicular construction)

use crate::linear::{Line, Segment};
use crate::point::Point;
use nalgebra::Rotation2;
use std::f64::consts::PI;

pub trait Transform: Sized {
    fn translate(&self, dx: f64, dy: f64) -> Self;

    /// Rotate counterclockwise about `center` by `angle` radians.
    fn rotate(&self, center: &Point, angle: f64) -> Self;

    /// Mirror across `axis`.
    #[doc(alias = "axial_symmetry")]
    fn reflect(&self, axis: &Line) -> Self;

    /// Mirror across the line carrying `mirror`.
    fn reflect_across(&self, mirror: &Segment) -> Self {
        self.reflect(&mirror.line())
    }

    /// Point reflection through `center`.
    fn central_symmetry(&self, center: &Point) -> Self {
        self.rotate(center, PI)
    }
}

impl Transform for Point {
    #[inline]
    fn translate(&self, dx: f64, dy: f64) -> Self {
        Point::raw(self.x() + dx, self.y() + dy)
    }

    fn rotate(&self, center: &Point, angle: f64) -> Self {
        let c = center.to_vector();
        Point::from_vec_raw(c + Rotation2::new(angle) * (self.to_vector() - c))
    }

    fn reflect(&self, axis: &Line) -> Self {
        let foot = axis.foot_of_perpendicular(self);
        self.central_symmetry(&foot)
    }

    #[inline]
    fn central_symmetry(&self, center: &Point) -> Self {
        Point::from_vec_raw(center.to_vector() * 2.0 - self.to_vector())
    }
}
