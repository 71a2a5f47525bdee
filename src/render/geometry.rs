//! Polygon outlines and angle-marker arcs as SVG path data.

use crate::construct::polar_to_cartesian;
use crate::types::Point;

use super::path_builder::PathData;

/// Closed outline through every vertex in order.
///
/// Fewer than 3 vertices produce an empty path.
pub fn polygon_path_data(vertices: &[Point]) -> PathData {
    let Some((first, rest)) = vertices.split_first() else {
        return PathData::new();
    };
    if rest.len() < 2 {
        return PathData::new();
    }
    rest.iter()
        .fold(PathData::new().m(first.x, first.y), |path, p| path.l(p.x, p.y))
        .z()
}

/// [`polygon_path_data`] as a path string.
pub fn polygon_path(vertices: &[Point]) -> String {
    polygon_path_data(vertices).to_string()
}

/// Straight segment between two points, used for diagonals.
pub fn segment_path(p1: &Point, p2: &Point) -> String {
    PathData::new().m(p1.x, p1.y).l(p2.x, p2.y).to_string()
}

/// Screen bearing from `origin` to `point`: 0° is up, increasing clockwise,
/// in [0, 360).
pub fn angle_to_point(origin: &Point, point: &Point) -> f64 {
    let d = point.vec() - origin.vec();
    let bearing = d.y.atan2(d.x).to_degrees() + 90.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    let bearing = bearing.rem_euclid(360.0);
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// Arc of a circle centred on `(cx, cy)` covering the bearings from
/// `start_angle` clockwise to `end_angle`.
///
/// The path starts at the `end_angle` position and sweeps counter-clockwise
/// (sweep flag 0) back to `start_angle`. The large-arc flag is set when the
/// clockwise span exceeds 180°.
pub fn describe_arc_data(
    cx: f64,
    cy: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> PathData {
    let start = polar_to_cartesian(cx, cy, radius, end_angle);
    let end = polar_to_cartesian(cx, cy, radius, start_angle);
    let span = (end_angle - start_angle).rem_euclid(360.0);
    let large_arc = span > 180.0;

    PathData::new()
        .m(start.x, start.y)
        .a(radius, radius, 0.0, large_arc, false, end.x, end.y)
}

/// [`describe_arc_data`] as a path string.
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    describe_arc_data(cx, cy, radius, start_angle, end_angle).to_string()
}

/// Bearings `(start, end)` of the minor arc between the rays `vertex`→`p1`
/// and `vertex`→`p2`, ordered so that `start` clockwise to `end` spans at
/// most 180°.
pub fn minor_arc_bearings(vertex: &Point, p1: &Point, p2: &Point) -> (f64, f64) {
    let start = angle_to_point(vertex, p1);
    let end = angle_to_point(vertex, p2);
    if (end - start).rem_euclid(360.0) > 180.0 {
        (end, start)
    } else {
        (start, end)
    }
}

/// Arc marking the interior angle at `vertex` between the rays to `p1` and
/// `p2`.
///
/// Always draws the minor arc: rays at bearings 90° and 0° give a 90° marker,
/// never the 270° outside one.
pub fn describe_angle_arc(vertex: &Point, p1: &Point, p2: &Point, radius: f64) -> String {
    let (start, end) = minor_arc_bearings(vertex, p1, p2);
    describe_arc(vertex.x, vertex.y, radius, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PathCommand;

    const EPSILON: f64 = 1e-9;

    fn origin() -> Point {
        Point::new(0.0, 0.0)
    }

    #[test]
    fn square_outline() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(polygon_path(&square), "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    }

    #[test]
    fn outline_needs_three_vertices() {
        assert_eq!(polygon_path(&[]), "");
        assert_eq!(polygon_path(&[Point::new(1.0, 1.0)]), "");
        assert_eq!(polygon_path(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), "");
    }

    #[test]
    fn segment() {
        assert_eq!(
            segment_path(&Point::new(1.0, 2.0), &Point::new(3.0, 4.0)),
            "M 1 2 L 3 4"
        );
    }

    #[test]
    fn compass_bearings() {
        let o = origin();
        assert!((angle_to_point(&o, &Point::new(0.0, -1.0)) - 0.0).abs() < EPSILON);
        assert!((angle_to_point(&o, &Point::new(1.0, 0.0)) - 90.0).abs() < EPSILON);
        assert!((angle_to_point(&o, &Point::new(0.0, 1.0)) - 180.0).abs() < EPSILON);
        assert!((angle_to_point(&o, &Point::new(-1.0, 0.0)) - 270.0).abs() < EPSILON);
        assert!((angle_to_point(&o, &Point::new(-1.0, -1.0)) - 315.0).abs() < EPSILON);
    }

    #[test]
    fn bearing_is_always_below_360() {
        let b = angle_to_point(&origin(), &Point::new(-1e-18, -1.0));
        assert!((0.0..360.0).contains(&b), "{}", b);
    }

    #[test]
    fn arc_endpoints_are_reversed() {
        let path = describe_arc_data(0.0, 0.0, 10.0, 0.0, 90.0);
        match path.commands() {
            [PathCommand::MoveTo(from), PathCommand::Arc { to, large_arc, sweep, .. }] => {
                // Starts at bearing 90 (right), ends at bearing 0 (up)
                assert!((from.x - 10.0).abs() < EPSILON && from.y.abs() < EPSILON);
                assert!(to.x.abs() < EPSILON && (to.y + 10.0).abs() < EPSILON);
                assert!(!large_arc);
                assert!(!sweep);
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }

    #[test]
    fn large_arc_flag_follows_span() {
        let flag = |start: f64, end: f64| match describe_arc_data(0.0, 0.0, 1.0, start, end).commands()[1] {
            PathCommand::Arc { large_arc, .. } => large_arc,
            _ => unreachable!(),
        };
        assert!(!flag(0.0, 180.0));
        assert!(flag(0.0, 181.0));
        assert!(!flag(300.0, 30.0));
        assert!(flag(100.0, 10.0));
    }

    #[test]
    fn right_angle_marker_has_clean_coordinates() {
        let arc = describe_angle_arc(&origin(), &Point::new(1.0, 0.0), &Point::new(0.0, -1.0), 25.0);
        assert_eq!(arc, "M 25 0 A 25 25 0 0 0 0 -25");
    }

    #[test]
    fn angle_arc_picks_minor_arc_either_way() {
        let o = origin();
        let right = Point::new(1.0, 0.0);
        let up = Point::new(0.0, -1.0);
        assert_eq!(minor_arc_bearings(&o, &right, &up), minor_arc_bearings(&o, &up, &right));
        assert_eq!(
            describe_angle_arc(&o, &right, &up, 25.0),
            describe_angle_arc(&o, &up, &right, 25.0)
        );
    }

    #[test]
    fn angle_arc_for_hexagon_vertex_spans_120() {
        let hex = crate::construct::build_regular_polygon(6, 100.0, 0.0, 0.0, 0.0);
        let (start, end) = minor_arc_bearings(&hex[1], &hex[0], &hex[2]);
        assert!(((end - start).rem_euclid(360.0) - 120.0).abs() < 1e-6);
    }
}
