//! Circles and circle–circle relations.
//!
//! Purpose
//! - `Circle` (center + strictly positive radius) with line, segment and tangent
//!   constructions, and the five-way classification of two circles.
//!
//! Numerics
//! - Line intersection works from the perpendicular foot: distance ≈ radius gives
//!   the foot itself; otherwise the points are `foot ± √(r² - d²)·(-b, a)/|(a, b)|`.
//!   `eps` only decides tangency, never the position of the points.
//! - Relation checks test equality before the matching inequality so that
//!   near-tangent circles classify as tangent.
//!
//! Code cross-refs: `Line::foot_of_perpendicular`, `Line::direction`

use crate::error::{ensure_numbers, ConstructionError, Result};
use crate::intersection::Intersection;
use crate::linear::{Line, Segment};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;

/// Relative position of two circles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircleRelation {
    /// One circle strictly inside the other.
    Contain,
    /// Internally tangent.
    Internal,
    /// Two crossing points.
    Intersect,
    /// Externally tangent.
    External,
    /// Disjoint, side by side.
    Separate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[doc(alias = "Round")]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        ensure_numbers(&[radius])?;
        if !Tolerance::default().is_positive(radius) {
            return Err(ConstructionError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub(crate) fn new_unchecked(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Raw-coefficient constructor for scene readers.
    pub fn from_raw(cx: f64, cy: f64, radius: f64) -> Result<Self> {
        Self::new(Point::new(cx, cy)?, radius)
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strictly inside the disk.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, Tolerance::default())
    }
    #[doc(alias = "in_round")]
    #[inline]
    pub fn contains_eps(&self, p: &Point, tol: Tolerance) -> bool {
        tol.is_less_than(self.center.distance(p), self.radius)
    }

    #[inline]
    pub fn on_boundary(&self, p: &Point) -> bool {
        self.on_boundary_eps(p, Tolerance::default())
    }
    #[doc(alias = "on_round")]
    #[inline]
    pub fn on_boundary_eps(&self, p: &Point, tol: Tolerance) -> bool {
        tol.equal(self.center.distance(p), self.radius)
    }

    /// Distance from `p` to the circle line, `|r - |p - center||`.
    #[inline]
    pub fn distance_to(&self, p: &Point) -> f64 {
        (self.radius - self.center.distance(p)).abs()
    }

    #[inline]
    pub fn intersect_line(&self, line: &Line) -> Intersection {
        self.intersect_line_eps(line, Tolerance::default())
    }

    pub fn intersect_line_eps(&self, line: &Line, tol: Tolerance) -> Intersection {
        let d = line.distance_to(&self.center);
        let foot = line.foot_of_perpendicular(&self.center);
        if tol.equal(d, self.radius) {
            return Intersection::One(foot);
        }
        if d > self.radius {
            return Intersection::Empty;
        }
        let h = (self.radius * self.radius - d * d).sqrt();
        let offset = -line.direction() * h;
        let f = foot.to_vector();
        Intersection::Two(Point::from_vec_raw(f + offset), Point::from_vec_raw(f - offset))
    }

    /// Line intersections the segment spans (see `Segment::spans`).
    #[inline]
    pub fn intersect_segment(&self, segment: &Segment) -> Intersection {
        self.intersect_segment_eps(segment, Tolerance::default())
    }

    pub fn intersect_segment_eps(&self, segment: &Segment, tol: Tolerance) -> Intersection {
        self.intersect_line_eps(&segment.line(), tol)
            .filter(|p| segment.spans_eps(p, tol))
    }

    #[inline]
    pub fn tangent_points(&self, from: &Point) -> Intersection {
        self.tangent_points_eps(from, Tolerance::default())
    }

    /// Tangent points seen from `from`: none inside, `from` itself on the circle.
    pub fn tangent_points_eps(&self, from: &Point, tol: Tolerance) -> Intersection {
        let d = self.center.distance(from);
        if tol.equal(d, self.radius) {
            return Intersection::One(*from);
        }
        if d < self.radius {
            return Intersection::Empty;
        }
        let ratio = self.radius / d;
        let theta = ratio.acos();
        Intersection::Two(
            from.rotate_and_stretch(&self.center, theta, ratio),
            from.rotate_and_stretch(&self.center, -theta, ratio),
        )
    }

    /// Tangent lines through `from`, in tangent-point order.
    pub fn tangent_lines(&self, from: &Point) -> Vec<Line> {
        match self.tangent_points(from) {
            Intersection::Empty => Vec::new(),
            Intersection::One(t) => {
                vec![Line::through_unchecked(&self.center, &t).perpendicular_through(&t)]
            }
            Intersection::Two(t1, t2) => [t1, t2]
                .iter()
                .filter_map(|t| Line::through(from, t).ok())
                .collect(),
        }
    }

    #[inline]
    pub fn relation(&self, other: &Circle) -> CircleRelation {
        self.relation_eps(other, Tolerance::default())
    }

    pub fn relation_eps(&self, other: &Circle, tol: Tolerance) -> CircleRelation {
        let d = self.center.distance(&other.center);
        let sum = self.radius + other.radius;
        let diff = (self.radius - other.radius).abs();
        if tol.equal(d, sum) {
            CircleRelation::External
        } else if d > sum {
            CircleRelation::Separate
        } else if tol.equal(d, diff) {
            CircleRelation::Internal
        } else if d < diff {
            CircleRelation::Contain
        } else {
            CircleRelation::Intersect
        }
    }
}

impl Coincide for Circle {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        self.center.coincide_eps(&other.center, tol) && tol.equal(self.radius, other.radius)
    }
}

impl Transform for Circle {
    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            center: self.center.translate(dx, dy),
            ..*self
        }
    }
    fn rotate(&self, center: &Point, angle: f64) -> Self {
        Self {
            center: self.center.rotate(center, angle),
            ..*self
        }
    }
    fn reflect(&self, axis: &Line) -> Self {
        Self {
            center: self.center.reflect(axis),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests;
