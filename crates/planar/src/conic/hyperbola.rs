use super::quadratic_roots;
use crate::error::{ensure_numbers, ConstructionError, Result};
use crate::intersection::Intersection;
use crate::linear::{Line, Segment};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};

/// Rectangular hyperbola `y = k/(x - x0) + y0` with `k` nonzero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperbola {
    k: f64,
    x0: f64,
    y0: f64,
}

impl Hyperbola {
    pub fn new(k: f64, x0: f64, y0: f64) -> Result<Self> {
        ensure_numbers(&[k, x0, y0])?;
        if Tolerance::default().is_zero(k) {
            return Err(ConstructionError::DegenerateCoefficients(
                "hyperbola needs a nonzero k",
            ));
        }
        Ok(Self { k, x0, y0 })
    }

    /// Hyperbola with asymptote crossing `center` through `point`.
    ///
    /// `None` when `point` lies on either asymptote.
    pub fn through(center: &Point, point: &Point) -> Option<Self> {
        let dx = point.x() - center.x();
        let dy = point.y() - center.y();
        let tol = Tolerance::default();
        if tol.is_zero(dx) || tol.is_zero(dy) {
            tracing::debug!(?center, ?point, "hyperbola: point on an asymptote");
            return None;
        }
        Some(Self {
            k: dx * dy,
            x0: center.x(),
            y0: center.y(),
        })
    }

    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }
    #[inline]
    pub fn x0(&self) -> f64 {
        self.x0
    }
    #[inline]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Crossing point of the asymptotes.
    #[inline]
    pub fn center(&self) -> Point {
        Point::raw(self.x0, self.y0)
    }

    /// NaN on the vertical asymptote.
    pub fn y_at(&self, x: f64) -> f64 {
        if Tolerance::default().equal(x, self.x0) {
            f64::NAN
        } else {
            self.k / (x - self.x0) + self.y0
        }
    }

    /// NaN on the horizontal asymptote.
    pub fn x_at(&self, y: f64) -> f64 {
        if Tolerance::default().equal(y, self.y0) {
            f64::NAN
        } else {
            self.k / (y - self.y0) + self.x0
        }
    }

    /// `(vertical, horizontal)` asymptotes.
    pub fn asymptotes(&self) -> (Line, Line) {
        let c = self.center();
        (
            Line::Y_AXIS.parallel_through(&c),
            Line::X_AXIS.parallel_through(&c),
        )
    }

    #[inline]
    pub fn intersect_line(&self, line: &Line) -> Intersection {
        self.intersect_line_eps(line, Tolerance::default())
    }

    pub fn intersect_line_eps(&self, line: &Line, tol: Tolerance) -> Intersection {
        let (a, b, c) = (line.a(), line.b(), line.c());
        let exact = Tolerance::default();
        if exact.is_zero(b) {
            let x = -c / a;
            return Self::single(Point::raw(x, self.y_at(x)));
        }
        if exact.is_zero(a) {
            let y = -c / b;
            return Self::single(Point::raw(self.x_at(y), y));
        }
        // a·x·(x - x0) + b·k + (b·y0 + c)·(x - x0) = 0
        let m = b * self.y0 + c;
        let qb = m - a * self.x0;
        let qc = b * self.k - m * self.x0;
        Intersection::from_points(
            quadratic_roots(a, qb, qc, tol)
                .into_iter()
                .map(|x| Point::raw(x, self.y_at(x)))
                .filter(|p| !p.y().is_nan()),
        )
    }

    fn single(p: Point) -> Intersection {
        if p.x().is_nan() || p.y().is_nan() {
            Intersection::Empty
        } else {
            Intersection::One(p)
        }
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

    /// `|p.y - y(p.x)| < eps`; never true on the vertical asymptote.
    pub fn on_curve_eps(&self, p: &Point, tol: Tolerance) -> bool {
        tol.equal(p.y(), self.y_at(p.x()))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            k: self.k,
            x0: self.x0 + dx,
            y0: self.y0 + dy,
        }
    }
}

impl Coincide for Hyperbola {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        tol.equal(self.k, other.k) && tol.equal(self.x0, other.x0) && tol.equal(self.y0, other.y0)
    }
}
