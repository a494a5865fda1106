//! Explicit conics: parabolas `y = a·x² + b·x + c` and hyperbolas
//! `y = k/(x - x0) + y0`.
//!
//! Purpose
//! - Closed-form construction (three points, vertex + point, center + point),
//!   evaluation, translation, and line/segment intersection.
//!
//! Numerics
//! - Line intersection substitutes the line into the curve and classifies the
//!   resulting quadratic by its discriminant (`eps`-zero → one root).
//! - Vertical lines are substituted directly; for hyperbolas so are horizontal
//!   lines, and roots on the vertical asymptote are dropped.
//!
//! Code cross-refs: `Intersection`, `Segment::spans`

mod hyperbola;
mod parabola;

pub use hyperbola::Hyperbola;
pub use parabola::Parabola;

use crate::tolerance::Tolerance;

/// Real roots of `a·x² + b·x + c = 0` with `a` nonzero, larger root first.
fn quadratic_roots(a: f64, b: f64, c: f64, tol: Tolerance) -> Vec<f64> {
    let disc = b * b - 4.0 * a * c;
    if tol.is_zero(disc) {
        vec![-b / (2.0 * a)]
    } else if disc < 0.0 {
        Vec::new()
    } else {
        let s = disc.sqrt();
        vec![(-b + s) / (2.0 * a), (-b - s) / (2.0 * a)]
    }
}
