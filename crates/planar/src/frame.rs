//! Relative (grid-unit) ↔ absolute (plotted) coordinates.
//!
//! Purpose
//! - A `Frame` places a logical grid on a drawing surface: absolute
//!   `x = ox + x_rel·sx` and `y = oy - y_rel·sy` (y grows downwards on screen).
//! - `FrameMap` lifts the point mapping to shapes by mapping representative
//!   points and rebuilding the shape from them.
//!
//! Notes
//! - Circles only survive equal spacing on both axes; anything else would
//!   produce an ellipse and is rejected with `AnisotropicFrame`.
//! - The y flip mirrors orientation, so a ray keeps its origin but its axis tag
//!   is re-derived from the mapped points.
//!
//! Code cross-refs: `Point`, `Parabola::through_points`, `Hyperbola::through`

use crate::conic::{Hyperbola, Parabola};
use crate::error::{ensure_numbers, ConstructionError, Result};
use crate::figure::{Angle, Polygon, Triangle};
use crate::linear::{Line, Ray, Segment};
use crate::point::Point;
use crate::round::Circle;
use crate::tolerance::Tolerance;

/// Coordinate axis selector for scalar conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis2 {
    X,
    Y,
}

/// Origin plus strictly positive per-axis unit spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    origin: Point,
    spacing_x: f64,
    spacing_y: f64,
}

impl Frame {
    pub fn new(origin: Point, spacing_x: f64, spacing_y: f64) -> Result<Self> {
        ensure_numbers(&[spacing_x, spacing_y])?;
        if spacing_x <= 0.0 || spacing_y <= 0.0 {
            return Err(ConstructionError::NonPositiveSpacing);
        }
        Ok(Self {
            origin,
            spacing_x,
            spacing_y,
        })
    }

    /// Same spacing on both axes.
    #[inline]
    pub fn uniform(origin: Point, spacing: f64) -> Result<Self> {
        Self::new(origin, spacing, spacing)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }
    #[inline]
    pub fn spacing(&self, axis: Axis2) -> f64 {
        match axis {
            Axis2::X => self.spacing_x,
            Axis2::Y => self.spacing_y,
        }
    }
    #[inline]
    pub fn is_uniform(&self) -> bool {
        Tolerance::default().equal(self.spacing_x, self.spacing_y)
    }

    /// Relative → absolute along one axis.
    pub fn to_absolute_value(&self, axis: Axis2, v: f64) -> f64 {
        match axis {
            Axis2::X => self.origin.x() + v * self.spacing_x,
            Axis2::Y => self.origin.y() - v * self.spacing_y,
        }
    }

    /// Absolute → relative along one axis.
    pub fn to_relative_value(&self, axis: Axis2, v: f64) -> f64 {
        match axis {
            Axis2::X => (v - self.origin.x()) / self.spacing_x,
            Axis2::Y => (self.origin.y() - v) / self.spacing_y,
        }
    }

    #[inline]
    pub fn point_to_absolute(&self, p: &Point) -> Point {
        Point::raw(
            self.to_absolute_value(Axis2::X, p.x()),
            self.to_absolute_value(Axis2::Y, p.y()),
        )
    }

    #[inline]
    pub fn point_to_relative(&self, p: &Point) -> Point {
        Point::raw(
            self.to_relative_value(Axis2::X, p.x()),
            self.to_relative_value(Axis2::Y, p.y()),
        )
    }

    fn uniform_spacing(&self) -> Result<f64> {
        if self.is_uniform() {
            Ok(self.spacing_x)
        } else {
            tracing::debug!(frame = ?self, "circle mapping needs uniform spacing");
            Err(ConstructionError::AnisotropicFrame)
        }
    }
}

/// Direction of a frame mapping.
#[derive(Clone, Copy, Debug)]
enum Direction {
    ToAbsolute,
    ToRelative,
}

impl Direction {
    fn point(self, frame: &Frame, p: &Point) -> Point {
        match self {
            Direction::ToAbsolute => frame.point_to_absolute(p),
            Direction::ToRelative => frame.point_to_relative(p),
        }
    }
}

/// Shapes that can be carried through a `Frame`.
///
/// Mapping can fail when the rebuilt shape no longer satisfies its invariants
/// (points merging under a tiny spacing, circles under anisotropic spacing).
pub trait FrameMap: Sized {
    fn to_absolute(&self, frame: &Frame) -> Result<Self>;
    fn to_relative(&self, frame: &Frame) -> Result<Self>;
}

macro_rules! frame_map_via {
    ($ty:ty, $f:ident) => {
        impl FrameMap for $ty {
            fn to_absolute(&self, frame: &Frame) -> Result<Self> {
                $f(self, frame, Direction::ToAbsolute)
            }
            fn to_relative(&self, frame: &Frame) -> Result<Self> {
                $f(self, frame, Direction::ToRelative)
            }
        }
    };
}

fn map_point(p: &Point, frame: &Frame, dir: Direction) -> Result<Point> {
    Ok(dir.point(frame, p))
}

fn map_line(l: &Line, frame: &Frame, dir: Direction) -> Result<Line> {
    let (p, q) = l.two_points();
    Line::through(&dir.point(frame, &p), &dir.point(frame, &q))
}

fn map_segment(s: &Segment, frame: &Frame, dir: Direction) -> Result<Segment> {
    Segment::new(dir.point(frame, &s.p1()), dir.point(frame, &s.p2()))
}

fn map_ray(r: &Ray, frame: &Frame, dir: Direction) -> Result<Ray> {
    Ray::new(
        dir.point(frame, &r.origin()),
        dir.point(frame, &r.unit_point()),
    )
}

fn map_circle(c: &Circle, frame: &Frame, dir: Direction) -> Result<Circle> {
    let s = frame.uniform_spacing()?;
    let radius = match dir {
        Direction::ToAbsolute => c.radius() * s,
        Direction::ToRelative => c.radius() / s,
    };
    Circle::new(dir.point(frame, &c.center()), radius)
}

fn map_parabola(q: &Parabola, frame: &Frame, dir: Direction) -> Result<Parabola> {
    let v = q.vertex();
    let pts: Vec<Point> = [v.x() - 1.0, v.x(), v.x() + 1.0]
        .iter()
        .map(|&x| dir.point(frame, &Point::raw(x, q.y_at(x))))
        .collect();
    Parabola::through_points(&pts[0], &pts[1], &pts[2]).ok_or(
        ConstructionError::DegenerateCoefficients("parabola collapsed under frame mapping"),
    )
}

fn map_hyperbola(h: &Hyperbola, frame: &Frame, dir: Direction) -> Result<Hyperbola> {
    let center = h.center();
    let on_curve = Point::raw(h.x0() + 1.0, h.y0() + h.k());
    Hyperbola::through(&dir.point(frame, &center), &dir.point(frame, &on_curve)).ok_or(
        ConstructionError::DegenerateCoefficients("hyperbola collapsed under frame mapping"),
    )
}

fn map_triangle(t: &Triangle, frame: &Frame, dir: Direction) -> Result<Triangle> {
    let [a, b, c] = t.vertices().map(|p| dir.point(frame, &p));
    Triangle::new(a, b, c)
}

fn map_polygon(poly: &Polygon, frame: &Frame, dir: Direction) -> Result<Polygon> {
    Ok(poly.map_points(|p| dir.point(frame, p)))
}

fn map_angle(a: &Angle, frame: &Frame, dir: Direction) -> Result<Angle> {
    Angle::new(
        dir.point(frame, &a.vertex()),
        dir.point(frame, &a.p1()),
        dir.point(frame, &a.p2()),
    )
}

frame_map_via!(Point, map_point);
frame_map_via!(Line, map_line);
frame_map_via!(Segment, map_segment);
frame_map_via!(Ray, map_ray);
frame_map_via!(Circle, map_circle);
frame_map_via!(Parabola, map_parabola);
frame_map_via!(Hyperbola, map_hyperbola);
frame_map_via!(Triangle, map_triangle);
frame_map_via!(Polygon, map_polygon);
frame_map_via!(Angle, map_angle);
