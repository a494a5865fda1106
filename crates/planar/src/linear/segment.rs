use super::Line;
use crate::error::{ConstructionError, Result};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;

/// Closed segment between two non-coincident points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        if p1.coincide(&p2) {
            return Err(ConstructionError::CoincidentPoints);
        }
        Ok(Self { p1, p2 })
    }

    #[inline]
    pub(crate) fn new_unchecked(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Supporting line.
    #[inline]
    pub fn line(&self) -> Line {
        Line::through_unchecked(&self.p1, &self.p2)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p1.midpoint(&self.p2)
    }

    #[inline]
    pub fn spans(&self, p: &Point) -> bool {
        self.spans_eps(p, Tolerance::default())
    }

    /// Bounding-range test: `p.x` strictly inside the x-range OR `p.y` strictly
    /// inside the y-range. Does not test membership of the supporting line.
    pub fn spans_eps(&self, p: &Point, tol: Tolerance) -> bool {
        tol.value_in_range(self.p1.x(), self.p2.x(), p.x())
            || tol.value_in_range(self.p1.y(), self.p2.y(), p.y())
    }

    /// Intersection with `line`; `bounded` keeps it only if the segment spans it.
    #[inline]
    pub fn intersect_line(&self, line: &Line, bounded: bool) -> Option<Point> {
        self.intersect_line_eps(line, bounded, Tolerance::default())
    }

    pub fn intersect_line_eps(&self, line: &Line, bounded: bool, tol: Tolerance) -> Option<Point> {
        let p = self.line().intersect_eps(line, tol)?;
        (!bounded || self.spans_eps(&p, tol)).then_some(p)
    }

    /// Intersection of the supporting lines; `bounded` requires both segments to span it.
    #[inline]
    pub fn intersect_segment(&self, other: &Segment, bounded: bool) -> Option<Point> {
        self.intersect_segment_eps(other, bounded, Tolerance::default())
    }

    pub fn intersect_segment_eps(
        &self,
        other: &Segment,
        bounded: bool,
        tol: Tolerance,
    ) -> Option<Point> {
        let p = self.line().intersect_eps(&other.line(), tol)?;
        (!bounded || (self.spans_eps(&p, tol) && other.spans_eps(&p, tol))).then_some(p)
    }

    /// Distance to the closest point of the segment.
    pub fn distance_to(&self, p: &Point) -> f64 {
        let d = self.p2.to_vector() - self.p1.to_vector();
        let t = (p.to_vector() - self.p1.to_vector()).dot(&d) / d.norm_squared();
        if t <= 0.0 {
            p.distance(&self.p1)
        } else if t >= 1.0 {
            p.distance(&self.p2)
        } else {
            self.line().distance_to(p)
        }
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, Tolerance::default())
    }
    #[doc(alias = "on_segment")]
    #[inline]
    pub fn contains_eps(&self, p: &Point, tol: Tolerance) -> bool {
        tol.is_zero(self.distance_to(p))
    }

    /// Closed-segment crossing test. Touching and collinear overlap count.
    pub fn crosses(&self, other: &Segment) -> bool {
        let (a, b, c, d) = (self.p1, self.p2, other.p1, other.p2);
        relative_ccw(&a, &b, &c) * relative_ccw(&a, &b, &d) <= 0
            && relative_ccw(&c, &d, &a) * relative_ccw(&c, &d, &b) <= 0
    }

    #[inline]
    pub fn foot_of_perpendicular(&self, p: &Point) -> Point {
        self.line().foot_of_perpendicular(p)
    }
    #[inline]
    pub fn perpendicular_through(&self, p: &Point) -> Line {
        self.line().perpendicular_through(p)
    }
    #[inline]
    pub fn parallel_through(&self, p: &Point) -> Line {
        self.line().parallel_through(p)
    }
}

/// Side of `p` relative to the directed segment `s1 → s2`.
///
/// `1` or `-1` off the line; for collinear points `-1` before `s1`, `1` past
/// `s2`, and `0` on the closed segment.
fn relative_ccw(s1: &Point, s2: &Point, p: &Point) -> i32 {
    let (x2, y2) = (s2.x() - s1.x(), s2.y() - s1.y());
    let (mut px, mut py) = (p.x() - s1.x(), p.y() - s1.y());
    let mut ccw = px * y2 - py * x2;
    if ccw == 0.0 {
        ccw = px * x2 + py * y2;
        if ccw > 0.0 {
            px -= x2;
            py -= y2;
            ccw = px * x2 + py * y2;
            if ccw < 0.0 {
                ccw = 0.0;
            }
        }
    }
    if ccw < 0.0 {
        -1
    } else if ccw > 0.0 {
        1
    } else {
        0
    }
}

impl Coincide for Segment {
    /// Same endpoints in either order.
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        (self.p1.coincide_eps(&other.p1, tol) && self.p2.coincide_eps(&other.p2, tol))
            || (self.p1.coincide_eps(&other.p2, tol) && self.p2.coincide_eps(&other.p1, tol))
    }
}

impl Transform for Segment {
    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new_unchecked(self.p1.translate(dx, dy), self.p2.translate(dx, dy))
    }
    fn rotate(&self, center: &Point, angle: f64) -> Self {
        Self::new_unchecked(self.p1.rotate(center, angle), self.p2.rotate(center, angle))
    }
    fn reflect(&self, axis: &Line) -> Self {
        Self::new_unchecked(self.p1.reflect(axis), self.p2.reflect(axis))
    }
}
