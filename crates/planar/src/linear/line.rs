use crate::error::{ensure_numbers, ConstructionError, Result};
use crate::point::Point;
use crate::tolerance::{Coincide, Tolerance};
use crate::transform::Transform;
use nalgebra::{Matrix2, Vector2};
use std::f64::consts::{FRAC_PI_2, PI};

/// Line `a·x + b·y + c = 0` with `(a, b)` not both zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// The x-axis, `y = 0`.
    pub const X_AXIS: Line = Line {
        a: 0.0,
        b: 1.0,
        c: 0.0,
    };
    /// The y-axis, `x = 0`.
    pub const Y_AXIS: Line = Line {
        a: 1.0,
        b: 0.0,
        c: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        ensure_numbers(&[a, b, c])?;
        let tol = Tolerance::default();
        if tol.is_zero(a) && tol.is_zero(b) {
            return Err(ConstructionError::DegenerateCoefficients(
                "line needs a or b nonzero",
            ));
        }
        Ok(Self { a, b, c })
    }

    /// Line through two points that must not coincide within tolerance.
    pub fn through(p1: &Point, p2: &Point) -> Result<Self> {
        if p1.coincide(p2) {
            return Err(ConstructionError::CoincidentPoints);
        }
        Ok(Self::through_unchecked(p1, p2))
    }

    /// Like `through`, but only rejects exactly equal points.
    pub fn through_strict(p1: &Point, p2: &Point) -> Result<Self> {
        if p1 == p2 {
            return Err(ConstructionError::CoincidentPoints);
        }
        Ok(Self::through_unchecked(p1, p2))
    }

    #[inline]
    pub(crate) fn through_unchecked(p1: &Point, p2: &Point) -> Self {
        let a = p2.y() - p1.y();
        let b = p1.x() - p2.x();
        let c = -b * p1.y() - a * p1.x();
        Self { a, b, c }
    }

    /// Line through `p` with inclination `angle` (radians, any period).
    pub fn from_point_angle(p: &Point, angle: f64) -> Result<Self> {
        ensure_numbers(&[angle])?;
        if angle.is_infinite() {
            return Err(ConstructionError::NonFiniteAngle(angle));
        }
        let tol = Tolerance::default();
        // Inclination is defined modulo π.
        let t = angle.rem_euclid(PI);
        if tol.equal(t, FRAC_PI_2) {
            return Ok(Self {
                a: 1.0,
                b: 0.0,
                c: -p.x(),
            });
        }
        let k = t.tan();
        if tol.is_zero(k) {
            return Ok(Self {
                a: 0.0,
                b: 1.0,
                c: -p.y(),
            });
        }
        Ok(Self {
            a: k,
            b: -1.0,
            c: p.y() - k * p.x(),
        })
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

    /// Signed residual `a·x + b·y + c`.
    #[inline]
    pub fn eval(&self, p: &Point) -> f64 {
        self.a * p.x() + self.b * p.y() + self.c
    }

    #[inline]
    fn normal_norm(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Unit vector along the line, `(b, -a) / |(a, b)|`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.b, -self.a) / self.normal_norm()
    }

    #[inline]
    pub fn distance_to(&self, p: &Point) -> f64 {
        self.eval(p).abs() / self.normal_norm()
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, Tolerance::default())
    }
    #[doc(alias = "on_line")]
    #[inline]
    pub fn contains_eps(&self, p: &Point, tol: Tolerance) -> bool {
        tol.is_zero(self.distance_to(p))
    }

    /// Unique intersection point; `None` for parallel or coincident lines.
    #[inline]
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        self.intersect_eps(other, Tolerance::default())
    }

    pub fn intersect_eps(&self, other: &Line, tol: Tolerance) -> Option<Point> {
        let det = Matrix2::new(self.a, self.b, other.a, other.b).determinant();
        if tol.is_zero(det) {
            tracing::trace!(line = ?self, other = ?other, det, "no unique line intersection");
            return None;
        }
        let x = (other.c * self.b - self.c * other.b) / det;
        let y = (self.c * other.a - self.a * other.c) / det;
        Some(Point::raw(x, y))
    }

    /// Slope `-a/b`; NaN for vertical lines.
    pub fn slope(&self) -> f64 {
        if Tolerance::default().is_zero(self.b) {
            f64::NAN
        } else {
            -self.a / self.b
        }
    }

    /// Inclination in `(-π/2, π/2]`; vertical lines give `π/2`.
    pub fn inclination(&self) -> f64 {
        if Tolerance::default().is_zero(self.b) {
            FRAC_PI_2
        } else {
            (-self.a / self.b).atan()
        }
    }

    /// `y` on the line at `x`; NaN for vertical lines.
    pub fn y_at(&self, x: f64) -> f64 {
        if Tolerance::default().is_zero(self.b) {
            f64::NAN
        } else {
            -(self.a * x + self.c) / self.b
        }
    }

    /// `x` on the line at `y`; NaN for horizontal lines.
    pub fn x_at(&self, y: f64) -> f64 {
        if Tolerance::default().is_zero(self.a) {
            f64::NAN
        } else {
            -(self.b * y + self.c) / self.a
        }
    }

    pub fn foot_of_perpendicular(&self, p: &Point) -> Point {
        let n = Vector2::new(self.a, self.b);
        let t = self.eval(p) / n.norm_squared();
        Point::from_vec_raw(p.to_vector() - n * t)
    }

    /// Line through `p` perpendicular to `self`.
    #[doc(alias = "vertical_line")]
    #[inline]
    pub fn perpendicular_through(&self, p: &Point) -> Line {
        Self {
            a: self.b,
            b: -self.a,
            c: self.a * p.y() - self.b * p.x(),
        }
    }

    /// Line through `p` parallel to `self`.
    #[inline]
    pub fn parallel_through(&self, p: &Point) -> Line {
        Self {
            a: self.a,
            b: self.b,
            c: -self.a * p.x() - self.b * p.y(),
        }
    }

    #[inline]
    pub fn is_parallel(&self, other: &Line) -> bool {
        self.is_parallel_eps(other, Tolerance::default())
    }
    pub fn is_parallel_eps(&self, other: &Line, tol: Tolerance) -> bool {
        tol.equal(self.a * other.b, other.a * self.b)
    }

    #[inline]
    pub fn is_perpendicular(&self, other: &Line) -> bool {
        self.is_perpendicular_eps(other, Tolerance::default())
    }
    pub fn is_perpendicular_eps(&self, other: &Line, tol: Tolerance) -> bool {
        tol.is_zero(self.a * other.a + self.b * other.b)
    }

    /// Two distinct points on the line, unit distance apart.
    pub(crate) fn two_points(&self) -> (Point, Point) {
        let p = self.foot_of_perpendicular(&Point::origin());
        let q = Point::from_vec_raw(p.to_vector() + self.direction());
        (p, q)
    }
}

impl Coincide for Line {
    /// Same locus: parallel with proportional constant terms.
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool {
        self.is_parallel_eps(other, tol)
            && tol.equal(self.a * other.c, other.a * self.c)
            && tol.equal(self.b * other.c, other.b * self.c)
    }
}

impl Transform for Line {
    /// Shift the constant term: `c - a·dx - b·dy`.
    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            c: self.c - self.a * dx - self.b * dy,
            ..*self
        }
    }

    /// Rotate the perpendicular foot from `center`, then rebuild at the turned inclination.
    fn rotate(&self, center: &Point, angle: f64) -> Self {
        let foot = self.foot_of_perpendicular(center).rotate(center, angle);
        let inclination = self.inclination() + angle - PI;
        match Self::from_point_angle(&foot, inclination) {
            Ok(line) => line,
            // Only a NaN angle fails; keep the line through the rotated foot.
            Err(_) => self.parallel_through(&foot),
        }
    }

    fn reflect(&self, axis: &Line) -> Self {
        let (p, q) = self.two_points();
        Self::through_unchecked(&p.reflect(axis), &q.reflect(axis))
    }
}
