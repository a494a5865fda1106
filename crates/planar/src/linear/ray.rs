use super::Line;
use crate::error::{ensure_numbers, ConstructionError, Result};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;
use nalgebra::Vector2;

/// Dominant axis of a ray's direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RayAxis {
    PosX,
    NegX,
    PosY,
    NegY,
}

impl RayAxis {
    /// Axis with the larger absolute component; ties go to x.
    fn dominant(d: Vector2<f64>) -> Self {
        if d.x.abs() >= d.y.abs() {
            if d.x > 0.0 {
                RayAxis::PosX
            } else {
                RayAxis::NegX
            }
        } else if d.y > 0.0 {
            RayAxis::PosY
        } else {
            RayAxis::NegY
        }
    }

    /// Component of `d` along this axis.
    #[inline]
    fn component(self, d: Vector2<f64>) -> f64 {
        match self {
            RayAxis::PosX => d.x,
            RayAxis::NegX => -d.x,
            RayAxis::PosY => d.y,
            RayAxis::NegY => -d.y,
        }
    }
}

/// Half-line from `origin`, tagged with the dominant axis of its direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[doc(alias = "HalfLine")]
pub struct Ray {
    line: Line,
    origin: Point,
    axis: RayAxis,
}

impl Ray {
    /// Ray from `origin` through `through`.
    pub fn new(origin: Point, through: Point) -> Result<Self> {
        if origin.coincide(&through) {
            return Err(ConstructionError::CoincidentPoints);
        }
        Ok(Self::new_unchecked(origin, through))
    }

    pub(crate) fn new_unchecked(origin: Point, through: Point) -> Self {
        Self {
            line: Line::through_unchecked(&origin, &through),
            origin,
            axis: RayAxis::dominant(through.to_vector() - origin.to_vector()),
        }
    }

    /// Ray from `origin` heading at `angle` radians.
    pub fn from_angle(origin: Point, angle: f64) -> Result<Self> {
        ensure_numbers(&[angle])?;
        if angle.is_infinite() {
            return Err(ConstructionError::NonFiniteAngle(angle));
        }
        let through = Point::raw(origin.x() + angle.cos(), origin.y() + angle.sin());
        Ok(Self::new_unchecked(origin, through))
    }

    #[inline]
    pub fn line(&self) -> Line {
        self.line
    }
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }
    #[inline]
    pub fn axis(&self) -> RayAxis {
        self.axis
    }

    /// Unit direction, oriented along the axis tag.
    pub fn direction(&self) -> Vector2<f64> {
        let d = self.line.direction();
        if self.axis.component(d) < 0.0 {
            -d
        } else {
            d
        }
    }

    /// A second point on the ray, one unit from the origin.
    #[inline]
    pub(crate) fn unit_point(&self) -> Point {
        Point::from_vec_raw(self.origin.to_vector() + self.direction())
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, Tolerance::default())
    }

    /// On the supporting line and on the tagged side of the origin (origin included).
    #[doc(alias = "in_half_line")]
    pub fn contains_eps(&self, p: &Point, tol: Tolerance) -> bool {
        if !self.line.contains_eps(p, tol) {
            return false;
        }
        p.coincide_eps(&self.origin, tol)
            || tol.is_positive(self.axis.component(p.to_vector() - self.origin.to_vector()))
    }

    /// Supporting-line membership only.
    #[doc(alias = "on_half_line")]
    #[inline]
    pub fn on_line(&self, p: &Point) -> bool {
        self.line.contains(p)
    }

    pub fn intersect_line(&self, line: &Line) -> Option<Point> {
        self.intersect_line_eps(line, Tolerance::default())
    }

    pub fn intersect_line_eps(&self, line: &Line, tol: Tolerance) -> Option<Point> {
        let p = self.line.intersect_eps(line, tol)?;
        self.contains_eps(&p, tol).then_some(p)
    }
}

impl Coincide for Ray {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        self.origin.coincide_eps(&other.origin, tol)
            && self.axis == other.axis
            && self.line.coincide_eps(&other.line, tol)
    }
}

impl Transform for Ray {
    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new_unchecked(self.origin.translate(dx, dy), self.unit_point().translate(dx, dy))
    }
    fn rotate(&self, center: &Point, angle: f64) -> Self {
        Self::new_unchecked(
            self.origin.rotate(center, angle),
            self.unit_point().rotate(center, angle),
        )
    }
    fn reflect(&self, axis: &Line) -> Self {
        Self::new_unchecked(self.origin.reflect(axis), self.unit_point().reflect(axis))
    }
}
