//! Precision-aware 2D analytic geometry.
//!
//! Shapes are immutable values validated at construction; algorithms return
//! new values, `Option`/`Intersection` for "no result", or NaN for undefined
//! numbers. Every comparison goes through one `Tolerance` (default `1e-12`).
//!
//! Layout
//! - `tolerance`, `error`: numeric model and construction errors.
//! - `point`, `linear`, `round`, `conic`, `figure`: the shapes.
//! - `transform`, `frame`: rigid transforms and grid ↔ plot coordinates.
//! - `sample`: seeded random shapes for tests and benchmarks.
//!
//! API Policy
//! - `api` is the curated surface for callers; `prelude` is the quick import.

pub mod api;
pub mod conic;
pub mod error;
pub mod figure;
pub mod frame;
pub mod intersection;
pub mod linear;
pub mod point;
pub mod round;
pub mod sample;
pub mod tolerance;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ConstructionError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::conic::{Hyperbola, Parabola};
    pub use crate::error::{ConstructionError, Result};
    pub use crate::figure::{Angle, Polygon, Triangle};
    pub use crate::frame::{Axis2, Frame, FrameMap};
    pub use crate::intersection::Intersection;
    pub use crate::linear::{Line, Ray, RayAxis, Segment};
    pub use crate::point::Point;
    pub use crate::round::{Circle, CircleRelation};
    pub use crate::tolerance::{Coincide, Tolerance, DEFAULT_EPS};
    pub use crate::transform::Transform;
    pub use nalgebra::Vector2 as Vec2;
}
