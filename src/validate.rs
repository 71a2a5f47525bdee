//! Acceptance checks for lesson polygons.
//!
//! Every check returns a [`ValidationResult`]; a failure carries a message the
//! UI can show as is.

use crate::defaults;
use crate::errors::{ValidationError, ValidationResult};
use crate::metrics::{interior_angles, polygon_area, regular_interior_angle, side_lengths};
use crate::types::{Point, SideRange};

/// Check generation parameters against the lesson catalogue (5 to 12 sides).
pub fn validate_polygon(sides: usize, radius: Option<f64>) -> ValidationResult {
    validate_polygon_in_range(sides, radius, SideRange::LESSON_CATALOGUE)
}

/// Check generation parameters against an explicit side range.
pub fn validate_polygon_in_range(
    sides: usize,
    radius: Option<f64>,
    range: SideRange,
) -> ValidationResult {
    if sides < range.min {
        return Err(ValidationError::TooFewSides { sides, min: range.min });
    }
    if sides > range.max {
        return Err(ValidationError::TooManySides { sides, max: range.max });
    }
    match radius {
        // Written so NaN fails too
        Some(radius) if !(radius > 0.0 && radius.is_finite()) => {
            Err(ValidationError::InvalidRadius { radius })
        }
        _ => Ok(()),
    }
}

/// Check a hand-authored vertex list against the lesson catalogue and reject
/// degenerate shapes.
pub fn validate_vertices(vertices: &[Point]) -> ValidationResult {
    validate_vertices_in_range(vertices, SideRange::LESSON_CATALOGUE)
}

/// Check a vertex list against an explicit range and reject degenerate shapes.
pub fn validate_vertices_in_range(vertices: &[Point], range: SideRange) -> ValidationResult {
    let count = vertices.len();
    if count < range.min {
        return Err(ValidationError::TooFewVertices { count, min: range.min });
    }
    if count > range.max {
        return Err(ValidationError::TooManyVertices { count, max: range.max });
    }

    let area = polygon_area(vertices);
    if !(area >= defaults::MIN_POLYGON_AREA) {
        crate::log::debug!(area, count, "degenerate polygon rejected");
        return Err(ValidationError::DegeneratePolygon {
            area,
            min_area: defaults::MIN_POLYGON_AREA,
        });
    }
    Ok(())
}

/// Whether a shape is close enough to regular to be taught as one.
///
/// Every side must be within 5% of the mean side length and every interior
/// angle within `tolerance_degrees` of the ideal angle for its vertex count.
pub fn is_regular(vertices: &[Point], tolerance_degrees: f64) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let sides = side_lengths(vertices);
    let mean = sides.iter().sum::<f64>() / n as f64;
    if mean <= 0.0 {
        return false;
    }
    let side_tolerance = mean * defaults::REGULAR_SIDE_TOLERANCE;
    if sides.iter().any(|s| (s - mean).abs() > side_tolerance) {
        return false;
    }

    let ideal = regular_interior_angle(n);
    interior_angles(vertices)
        .iter()
        .all(|a| (a - ideal).abs() <= tolerance_degrees)
}

/// [`is_regular`] with the default 2° angle tolerance.
pub fn is_regular_default(vertices: &[Point]) -> bool {
    is_regular(vertices, defaults::REGULAR_ANGLE_TOLERANCE)
}
