use super::quadratic_roots;
use crate::error::{ensure_numbers, ConstructionError, Result};
use crate::intersection::Intersection;
use crate::linear::{Line, Segment};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};

/// Parabola `y = a·x² + b·x + c` with `a` nonzero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

impl Parabola {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        ensure_numbers(&[a, b, c])?;
        if Tolerance::default().is_zero(a) {
            return Err(ConstructionError::DegenerateCoefficients(
                "parabola needs a nonzero quadratic coefficient",
            ));
        }
        Ok(Self { a, b, c })
    }

    /// Parabola through three points; `None` when two share an x or the points are collinear.
    pub fn through_points(p1: &Point, p2: &Point, p3: &Point) -> Option<Self> {
        Self::through_points_eps(p1, p2, p3, Tolerance::default())
    }

    pub fn through_points_eps(p1: &Point, p2: &Point, p3: &Point, tol: Tolerance) -> Option<Self> {
        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());
        let (x3, y3) = (p3.x(), p3.y());
        let den = (x1 - x2) * (x1 - x3) * (x2 - x3);
        if tol.is_zero(den) {
            tracing::debug!(?p1, ?p2, ?p3, "parabola: repeated x coordinate");
            return None;
        }
        let a = ((y1 - y2) * (x1 - x3) - (y1 - y3) * (x1 - x2)) / den;
        let b = ((y1 - y2) * (x1 * x1 - x3 * x3) - (y1 - y3) * (x1 * x1 - x2 * x2)) / -den;
        let c = y1 - a * x1 * x1 - b * x1;
        Self::checked(a, b, c, tol)
    }

    /// Parabola with the given vertex through `point`; `None` when they share an x or a y.
    pub fn from_vertex(vertex: &Point, point: &Point) -> Option<Self> {
        Self::from_vertex_eps(vertex, point, Tolerance::default())
    }

    pub fn from_vertex_eps(vertex: &Point, point: &Point, tol: Tolerance) -> Option<Self> {
        let dx = point.x() - vertex.x();
        let dy = point.y() - vertex.y();
        if tol.is_zero(dx) || tol.is_zero(dy) {
            tracing::debug!(?vertex, ?point, "parabola: vertex and point share an axis");
            return None;
        }
        let a = dy / (dx * dx);
        let b = -2.0 * a * vertex.x();
        let c = vertex.y() + b * b / (4.0 * a);
        Self::checked(a, b, c, tol)
    }

    fn checked(a: f64, b: f64, c: f64, tol: Tolerance) -> Option<Self> {
        if tol.is_zero(a) || !(a.is_finite() && b.is_finite() && c.is_finite()) {
            tracing::debug!(a, b, c, "parabola: degenerate coefficients");
            return None;
        }
        Some(Self { a, b, c })
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Apex `(-b/2a, (4ac - b²)/4a)`.
    pub fn vertex(&self) -> Point {
        let (a, b, c) = (self.a, self.b, self.c);
        Point::raw(-b / (2.0 * a), (4.0 * a * c - b * b) / (4.0 * a))
    }

    /// Vertical symmetry axis through the vertex.
    pub fn axis(&self) -> Line {
        Line::Y_AXIS.parallel_through(&self.vertex())
    }

    #[inline]
    pub fn intersect_line(&self, line: &Line) -> Intersection {
        self.intersect_line_eps(line, Tolerance::default())
    }

    /// `tol` classifies the discriminant; whether the line is vertical is
    /// always decided at the default precision.
    pub fn intersect_line_eps(&self, line: &Line, tol: Tolerance) -> Intersection {
        if Tolerance::default().is_zero(line.b()) {
            let x = -line.c() / line.a();
            return Intersection::One(Point::raw(x, self.y_at(x)));
        }
        let qa = self.a;
        let qb = self.b + line.a() / line.b();
        let qc = self.c + line.c() / line.b();
        Intersection::from_points(
            quadratic_roots(qa, qb, qc, tol)
                .into_iter()
                .map(|x| Point::raw(x, self.y_at(x))),
        )
    }

    #[inline]
    pub fn intersect_segment(&self, segment: &Segment) -> Intersection {
        self.intersect_segment_eps(segment, Tolerance::default())
    }

    pub fn intersect_segment_eps(&self, segment: &Segment, tol: Tolerance) -> Intersection {
        self.intersect_line_eps(&segment.line(), tol)
            .filter(|p| segment.spans_eps(p, tol))
    }

    #[inline]
    pub fn on_curve(&self, p: &Point) -> bool {
        self.on_curve_eps(p, Tolerance::default())
    }

    /// Sampled membership test.
    ///
    /// Evaluates the curve at `x ± eps` and accepts `p.y` inside the sampled
    /// y-range. Near the apex `y(x)` falls outside that range, so the range is
    /// mirrored around `y(x)`. The range is widened by `eps` on both sides.
    pub fn on_curve_eps(&self, p: &Point, tol: Tolerance) -> bool {
        let eps = tol.eps();
        let (x, y) = (p.x(), p.y());
        let y0 = self.y_at(x);
        let y1 = self.y_at(x - eps);
        let y2 = self.y_at(x + eps);
        let (mut lo, mut hi) = (y1.min(y2), y1.max(y2));
        if y0 < lo {
            lo = 2.0 * y0 - lo;
        } else if y0 > hi {
            hi = 2.0 * y0 - hi;
        }
        lo - eps <= y && y <= hi + eps
    }

    /// Shift by `(dx, dy)`: `(a, b - 2a·dx, a·dx² - b·dx + c + dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let (a, b, c) = (self.a, self.b, self.c);
        Self {
            a,
            b: b - 2.0 * a * dx,
            c: a * dx * dx - b * dx + c + dy,
        }
    }
}

impl Coincide for Parabola {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        tol.equal(self.a, other.a) && tol.equal(self.b, other.b) && tol.equal(self.c, other.c)
    }
}
