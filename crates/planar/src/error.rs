//! Construction errors.
//!
//! Every shape validates its invariants at construction and fails fast with a
//! `ConstructionError`. Degenerate-but-legal algorithm inputs (parallel lines,
//! a line missing a circle) are not errors; they surface as `Option::None`,
//! `Intersection::Empty`, or NaN.

use thiserror::Error;

/// Why a shape could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConstructionError {
    #[error("coordinate or coefficient is NaN")]
    NotANumber,
    #[error("defining points coincide")]
    CoincidentPoints,
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("degenerate coefficients: {0}")]
    DegenerateCoefficients(&'static str),
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("frame spacing must be positive")]
    NonPositiveSpacing,
    #[error("circles only map through frames with equal spacing on both axes")]
    AnisotropicFrame,
    #[error("angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ConstructionError>;

/// Reject NaN inputs up front.
#[inline]
pub(crate) fn ensure_numbers(values: &[f64]) -> Result<()> {
    if values.iter().any(|v| v.is_nan()) {
        Err(ConstructionError::NotANumber)
    } else {
        Ok(())
    }
}
