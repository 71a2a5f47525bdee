//! Error types with diagnostic codes using miette
//!
//! Geometry helpers never fail; only validation and the strict angle query
//! report errors.

use miette::Diagnostic;
use thiserror::Error;

/// Outcome of a `validate_*` call.
pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// Validation Errors
// ============================================================================

/// Reasons a polygon is not acceptable as lesson content
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("polygon must have at least {min} sides, got {sides}")]
    #[diagnostic(code(ngon::validate::too_few_sides))]
    TooFewSides { sides: usize, min: usize },

    #[error("polygon can have at most {max} sides, got {sides}")]
    #[diagnostic(code(ngon::validate::too_many_sides))]
    TooManySides { sides: usize, max: usize },

    #[error("radius must be positive, got {radius}")]
    #[diagnostic(code(ngon::validate::invalid_radius))]
    InvalidRadius { radius: f64 },

    #[error("polygon must have at least {min} vertices, got {count}")]
    #[diagnostic(code(ngon::validate::too_few_vertices))]
    TooFewVertices { count: usize, min: usize },

    #[error("polygon can have at most {max} vertices, got {count}")]
    #[diagnostic(code(ngon::validate::too_many_vertices))]
    TooManyVertices { count: usize, max: usize },

    #[error("degenerate polygon: area {area} is below {min_area}")]
    #[diagnostic(
        code(ngon::validate::degenerate),
        help("vertices may be collinear or coincident")
    )]
    DegeneratePolygon { area: f64, min_area: f64 },
}

// ============================================================================
// Angle Errors
// ============================================================================

/// Reasons an interior angle is undefined
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("an angle needs at least 3 vertices, got {count}")]
    #[diagnostic(code(ngon::angle::too_few_vertices))]
    TooFewVertices { count: usize },

    #[error("vertex index {index} is out of range for {count} vertices")]
    #[diagnostic(code(ngon::angle::index_out_of_range))]
    IndexOutOfRange { index: usize, count: usize },

    #[error("vertex {index} coincides with a neighbour")]
    #[diagnostic(
        code(ngon::angle::coincident_vertices),
        help("an edge of zero length has no direction")
    )]
    CoincidentVertices { index: usize },
}
