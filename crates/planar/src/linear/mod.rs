//! One-dimensional loci: lines in general form, segments, and rays.
//!
//! Purpose
//! - `Line` stores `a·x + b·y + c = 0`, which covers vertical lines.
//! - `Segment` and `Ray` carry their supporting line plus the bounds that
//!   restrict it.
//!
//! Numerics
//! - Line intersection is Cramer's rule on the 2×2 system; a determinant within
//!   `eps` of zero means parallel or coincident lines and yields `None`.
//! - Bounded segment queries use the strict per-axis range check
//!   (`Segment::spans`), so points on an endpoint's coordinate are excluded.
//!
//! Code cross-refs: `Tolerance::value_in_range`, `Circle::intersect_line`

mod line;
mod ray;
mod segment;

pub use line::Line;
pub use ray::{Ray, RayAxis};
pub use segment::Segment;

#[cfg(test)]
mod tests;
