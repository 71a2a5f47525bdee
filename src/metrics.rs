//! Measurements over a vertex list and closed forms for ideal regular polygons.
//!
//! Nothing here fails: degenerate input produces a sentinel (0 angle, origin
//! centroid, 0 area) so a rendering pass never aborts half way. Use
//! [`try_angle_at_vertex`] when a degenerate vertex must be reported.

use std::f64::consts::PI;

use glam::DVec2;

use crate::errors::AngleError;
use crate::types::{Diagonal, Point};

/// Euclidean distance between two points.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.vec().distance(p2.vec())
}

/// Midpoint of the segment `p1`-`p2` (unlabelled).
pub fn midpoint(p1: &Point, p2: &Point) -> Point {
    Point::from((p1.vec() + p2.vec()) * 0.5)
}

/// Mean of the vertex coordinates; `(0, 0)` for an empty list.
///
/// This is the vertex centroid, not the area centroid. The two agree for
/// regular polygons; for irregular ones it is only used to pick an outward
/// direction for labels, and existing diagrams depend on its exact value.
pub fn polygon_centroid(vertices: &[Point]) -> Point {
    if vertices.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let sum: DVec2 = vertices.iter().map(Point::vec).sum();
    Point::from(sum / vertices.len() as f64)
}

/// Shoelace area. Positive for counter-clockwise winding in y-up
/// coordinates (so clockwise on screen); 0 for fewer than 3 vertices.
pub fn polygon_signed_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice / 2.0
}

/// Enclosed area regardless of winding.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    polygon_signed_area(vertices).abs()
}

/// Interior angle in degrees at vertex `index`, between the edges to its
/// cyclic neighbours.
///
/// Returns 0 when the angle is undefined: a neighbour coincides with the
/// vertex, `index` is out of range, or there are fewer than 3 vertices.
/// The result is always in [0, 180], so reflex angles of concave polygons
/// are reported as their supplement to 360.
pub fn angle_at_vertex(vertices: &[Point], index: usize) -> f64 {
    try_angle_at_vertex(vertices, index).unwrap_or(0.0)
}

/// Like [`angle_at_vertex`] but reports why an angle is undefined.
pub fn try_angle_at_vertex(vertices: &[Point], index: usize) -> Result<f64, AngleError> {
    let count = vertices.len();
    if count < 3 {
        return Err(AngleError::TooFewVertices { count });
    }
    if index >= count {
        return Err(AngleError::IndexOutOfRange { index, count });
    }

    let v = vertices[index].vec();
    let prev = vertices[(index + count - 1) % count].vec() - v;
    let next = vertices[(index + 1) % count].vec() - v;

    // One square root, so collinear edges give a cosine of exactly -1
    let norms = (prev.length_squared() * next.length_squared()).sqrt();
    if norms == 0.0 {
        return Err(AngleError::CoincidentVertices { index });
    }

    // Rounding can push the cosine just outside [-1, 1] for straight angles
    let cos = (prev.dot(next) / norms).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Interior angle at every vertex, in order.
pub fn interior_angles(vertices: &[Point]) -> Vec<f64> {
    (0..vertices.len())
        .map(|i| angle_at_vertex(vertices, i))
        .collect()
}

/// Length of every edge, starting with `v0`-`v1` and ending with the
/// closing edge `v(n-1)`-`v0`.
pub fn side_lengths(vertices: &[Point]) -> Vec<f64> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| distance(a, b))
        .collect()
}

/// Sum of the side lengths.
pub fn polygon_perimeter(vertices: &[Point]) -> f64 {
    side_lengths(vertices).iter().sum()
}

// ============================================================================
// Regular polygon closed forms
// ============================================================================

/// Interior angle of the ideal regular `n`-gon, `(n-2)·180/n`.
pub fn regular_interior_angle(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (n as f64 - 2.0) * 180.0 / n as f64
}

/// Exterior angle of the ideal regular `n`-gon, `360/n`.
pub fn regular_exterior_angle(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    360.0 / n as f64
}

/// Centre-to-side distance of a regular `n`-gon with circumradius `radius`.
pub fn calculate_apothem(n: usize, radius: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    radius * (PI / n as f64).cos()
}

/// Side length of a regular `n`-gon with circumradius `radius`.
pub fn calculate_side_length(n: usize, radius: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    2.0 * radius * (PI / n as f64).sin()
}

/// Area of a regular `n`-gon with circumradius `radius`, `½·n·r²·sin(2π/n)`.
pub fn regular_polygon_area(n: usize, radius: f64) -> f64 {
    if n < 3 {
        return 0.0;
    }
    0.5 * n as f64 * radius * radius * (2.0 * PI / n as f64).sin()
}

/// Number of diagonals of an `n`-gon, `n(n-3)/2`.
pub fn diagonal_count(n: usize) -> usize {
    if n < 4 {
        return 0;
    }
    // n(n-3) is always even; halve the even factor first so large n saturates
    // instead of overflowing
    if n % 2 == 0 {
        (n / 2).saturating_mul(n - 3)
    } else {
        n.saturating_mul((n - 3) / 2)
    }
}

/// Every diagonal of an `n`-gon in ascending `(from, to)` order.
///
/// `(0, n-1)` is the closing edge, not a diagonal.
pub fn calculate_all_diagonals(n: usize) -> Vec<Diagonal> {
    let mut diagonals = Vec::with_capacity(diagonal_count(n));
    for from in 0..n {
        for to in (from + 2)..n {
            if from == 0 && to == n - 1 {
                continue;
            }
            diagonals.push(Diagonal::new(from, to));
        }
    }
    diagonals
}

// ============================================================================
// Metrics bundle
// ============================================================================

/// Every measurement of a polygon, computed in one pass over the vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonMetrics {
    pub signed_area: f64,
    pub area: f64,
    pub centroid: Point,
    /// Degrees, one per vertex.
    pub interior_angles: Vec<f64>,
    /// One per edge, the closing edge last.
    pub side_lengths: Vec<f64>,
    pub diagonals: Vec<Diagonal>,
    pub diagonal_count: usize,
}

impl PolygonMetrics {
    pub fn compute(vertices: &[Point]) -> Self {
        let signed_area = polygon_signed_area(vertices);
        let n = vertices.len();
        PolygonMetrics {
            signed_area,
            area: signed_area.abs(),
            centroid: polygon_centroid(vertices),
            interior_angles: interior_angles(vertices),
            side_lengths: side_lengths(vertices),
            diagonals: calculate_all_diagonals(n),
            diagonal_count: diagonal_count(n),
        }
    }

    pub fn perimeter(&self) -> f64 {
        self.side_lengths.iter().sum()
    }

    pub fn angle_sum(&self) -> f64 {
        self.interior_angles.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::build_regular_polygon;

    const EPSILON: f64 = 1e-9;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn distance_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(midpoint(&a, &b), Point::new(1.5, 2.0));
    }

    #[test]
    fn centroid_of_empty_list_is_origin() {
        assert_eq!(polygon_centroid(&[]), Point::new(0.0, 0.0));
    }

    #[test]
    fn centroid_is_vertex_mean_not_area_centroid() {
        // Extra collinear vertex on the bottom edge drags the vertex mean
        // right even though the enclosed shape is unchanged
        let mut vertices = square();
        vertices.insert(1, Point::new(8.0, 0.0));
        let c = polygon_centroid(&vertices);
        assert!((c.x - 5.6).abs() < EPSILON);
        assert!((c.y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn square_area() {
        assert_eq!(polygon_signed_area(&square()), 100.0);
        assert_eq!(polygon_area(&square()), 100.0);
    }

    #[test]
    fn signed_area_flips_with_winding() {
        let mut reversed = square();
        reversed.reverse();
        assert_eq!(polygon_signed_area(&reversed), -100.0);
        assert_eq!(polygon_area(&reversed), 100.0);
    }

    #[test]
    fn area_needs_three_vertices() {
        assert_eq!(polygon_signed_area(&square()[..2]), 0.0);
        assert_eq!(polygon_signed_area(&[]), 0.0);
    }

    #[test]
    fn square_corners_are_right_angles() {
        for i in 0..4 {
            assert!((angle_at_vertex(&square(), i) - 90.0).abs() < EPSILON);
        }
    }

    #[test]
    fn coincident_vertex_has_zero_angle() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert_eq!(angle_at_vertex(&vertices, 0), 0.0);
        assert_eq!(
            try_angle_at_vertex(&vertices, 1),
            Err(AngleError::CoincidentVertices { index: 1 })
        );
    }

    #[test]
    fn out_of_range_vertex_has_zero_angle() {
        assert_eq!(angle_at_vertex(&square(), 4), 0.0);
        assert_eq!(
            try_angle_at_vertex(&square(), 9),
            Err(AngleError::IndexOutOfRange { index: 9, count: 4 })
        );
        assert_eq!(
            try_angle_at_vertex(&square()[..2], 0),
            Err(AngleError::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn straight_angle_is_exactly_180() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
        ];
        assert_eq!(angle_at_vertex(&vertices, 1), 180.0);
        assert_eq!(try_angle_at_vertex(&vertices, 1), Ok(180.0));
    }

    #[test]
    fn nearly_straight_angle_does_not_produce_nan() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.1),
            Point::new(0.3, 0.3),
        ];
        let angle = angle_at_vertex(&vertices, 1);
        assert!(angle.is_finite());
        assert!((angle - 180.0).abs() < 1e-5);
    }

    #[test]
    fn regular_closed_forms() {
        assert_eq!(regular_interior_angle(3), 60.0);
        assert_eq!(regular_interior_angle(6), 120.0);
        assert_eq!(regular_interior_angle(12), 150.0);
        assert_eq!(regular_exterior_angle(6), 60.0);
        assert_eq!(regular_interior_angle(0), 0.0);

        // Hexagon side equals its circumradius
        assert!((calculate_side_length(6, 10.0) - 10.0).abs() < EPSILON);
        assert!((calculate_apothem(6, 10.0) - 5.0 * 3f64.sqrt()).abs() < EPSILON);
        assert!((calculate_apothem(4, 2f64.sqrt()) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn regular_area_matches_shoelace() {
        let hex = build_regular_polygon(6, 100.0, 0.0, 0.0, 0.0);
        let expected = 3.0 * 3f64.sqrt() / 2.0 * 100.0 * 100.0;
        assert!((polygon_area(&hex) - expected).abs() / expected < 1e-3);
        assert!((regular_polygon_area(6, 100.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn diagonal_counts() {
        assert_eq!(diagonal_count(3), 0);
        assert_eq!(diagonal_count(4), 2);
        assert_eq!(diagonal_count(6), 9);
        assert_eq!(diagonal_count(12), 54);
        assert!(calculate_all_diagonals(3).is_empty());
    }

    #[test]
    fn diagonal_count_of_huge_n_does_not_overflow() {
        let exact = |n: usize| (n as u128 * (n as u128 - 3) / 2) as usize;
        let n = 1usize << 31;
        assert_eq!(diagonal_count(n), exact(n));
        assert_eq!(diagonal_count(n + 1), exact(n + 1));
        assert_eq!(diagonal_count(1usize << 33), usize::MAX);
        assert_eq!(diagonal_count(usize::MAX), usize::MAX);
        assert_eq!(diagonal_count(usize::MAX - 1), usize::MAX);
    }

    #[test]
    fn hexagon_diagonals_in_order() {
        let diagonals = calculate_all_diagonals(6);
        let pairs: Vec<_> = diagonals.iter().map(|d| (d.from, d.to)).collect();
        assert_eq!(
            pairs,
            [(0, 2), (0, 3), (0, 4), (1, 3), (1, 4), (1, 5), (2, 4), (2, 5), (3, 5)]
        );
    }

    #[test]
    fn diagonal_enumeration_matches_count() {
        for n in 0..=20 {
            assert_eq!(calculate_all_diagonals(n).len(), diagonal_count(n), "n = {}", n);
        }
    }

    #[test]
    fn side_lengths_include_closing_edge() {
        let triangle = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
        ];
        assert_eq!(side_lengths(&triangle), [3.0, 4.0, 5.0]);
        assert_eq!(polygon_perimeter(&triangle), 12.0);
    }

    #[test]
    fn metrics_bundle_of_square() {
        let m = PolygonMetrics::compute(&square());
        assert_eq!(m.signed_area, 100.0);
        assert_eq!(m.area, 100.0);
        assert_eq!(m.centroid, Point::new(5.0, 5.0));
        assert_eq!(m.side_lengths, [10.0; 4]);
        assert_eq!(m.diagonal_count, 2);
        assert_eq!(m.diagonals, [Diagonal::new(0, 2), Diagonal::new(1, 3)]);
        assert_eq!(m.perimeter(), 40.0);
        assert!((m.angle_sum() - 360.0).abs() < EPSILON);
    }
}
