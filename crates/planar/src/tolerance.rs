//! Epsilon-tolerant number comparison.
//!
//! Purpose
//! - One tolerance value drives every comparison in the kernel. It is passed
//!   explicitly into `_eps` methods; the plain methods use `Tolerance::default()`.
//! - Callers may relax the tolerance but never tighten it below `DEFAULT_EPS`.
//!
//! Semantics
//! - `equal(a, b)`: `|a - b| < eps`.
//! - `is_less_than(a, b)`: `a < b - eps`; `is_more_than(a, b)`: `a > b + eps`.
//! - `value_in_range(lo, hi, d)` is strictly exclusive at both bounds: a value
//!   within `eps` of either bound is outside the range.
//!
//! Code cross-refs: `Coincide`, `Segment::spans`

/// Floor (and default) for every tolerance.
pub const DEFAULT_EPS: f64 = 1e-12;

/// Comparison tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl Tolerance {
    /// Build a tolerance, clamped up to `DEFAULT_EPS`. NaN falls back to the floor.
    #[inline]
    pub fn new(eps: f64) -> Self {
        if eps.is_nan() || eps < DEFAULT_EPS {
            Self::default()
        } else {
            Self { eps }
        }
    }
    #[inline]
    pub fn eps(self) -> f64 {
        self.eps
    }
    #[inline]
    pub fn equal(self, d1: f64, d2: f64) -> bool {
        (d1 - d2).abs() < self.eps
    }
    #[inline]
    pub fn is_zero(self, d: f64) -> bool {
        d.abs() < self.eps
    }
    #[inline]
    pub fn is_negative(self, d: f64) -> bool {
        d < -self.eps
    }
    #[inline]
    pub fn is_positive(self, d: f64) -> bool {
        d > self.eps
    }
    #[inline]
    pub fn is_less_than(self, d1: f64, d2: f64) -> bool {
        self.is_negative(d1 - d2)
    }
    #[inline]
    pub fn is_more_than(self, d1: f64, d2: f64) -> bool {
        self.is_positive(d1 - d2)
    }
    /// `d` strictly inside the range spanned by `d1` and `d2` (bounds in any order).
    #[inline]
    pub fn value_in_range(self, d1: f64, d2: f64, d: f64) -> bool {
        let lo = d1.min(d2);
        let hi = d1.max(d2);
        self.is_less_than(d, hi) && self.is_more_than(d, lo)
    }
}

/// Tolerant equality between geometric values.
///
/// Implementations are symmetric and reflexive for every tolerance.
pub trait Coincide {
    fn coincide_eps(&self, other: &Self, tol: Tolerance) -> bool;

    #[inline]
    fn coincide(&self, other: &Self) -> bool {
        self.coincide_eps(other, Tolerance::default())
    }
}
