//! Curated API surface.
//!
//! - Re-exports the shapes and algorithms under the names scene readers and
//!   renderers use (`Round`, `HalfLine`, `RelativeFrame`).
//! - Samplers are grouped here as well so benchmarks import from one place.

// Numeric model
pub use crate::error::{ConstructionError, Result};
pub use crate::tolerance::{Coincide, Tolerance, DEFAULT_EPS};
// Shapes
pub use crate::conic::{Hyperbola, Parabola};
pub use crate::figure::{Angle, Polygon, Triangle};
pub use crate::intersection::Intersection;
pub use crate::linear::{Line, Ray as HalfLine, RayAxis, Segment};
pub use crate::point::Point;
pub use crate::round::{Circle as Round, CircleRelation};
// Transforms and coordinates
pub use crate::frame::{Axis2, Frame as RelativeFrame, FrameMap};
pub use crate::transform::Transform;
// Sampling
pub use crate::sample::{draw_circle, draw_line, draw_point, draw_star_polygon, Bounds2, ReplayToken};
