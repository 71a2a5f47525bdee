//! Default offsets, radii and tolerances (all in the caller's coordinate units,
//! which for lesson diagrams are SVG pixels)

/// Distance a vertex label is pushed away from the centroid.
pub const VERTEX_LABEL_OFFSET: f64 = 18.0;
/// Distance an edge label is pushed away from the centroid.
pub const EDGE_LABEL_OFFSET: f64 = 15.0;
/// Perpendicular nudge of a diagonal label off its line.
pub const DIAGONAL_LABEL_OFFSET: f64 = 8.0;
/// Distance of an angle label from its vertex, along the bisector.
pub const ANGLE_LABEL_OFFSET: f64 = 40.0;

/// Radius of the arc drawn to mark an interior angle.
pub const ANGLE_ARC_RADIUS: f64 = 25.0;
/// Margin added on every side of a view box.
pub const VIEW_BOX_PADDING: f64 = 40.0;
/// View box used when there is nothing to frame.
pub const EMPTY_VIEW_BOX_WIDTH: f64 = 400.0;
pub const EMPTY_VIEW_BOX_HEIGHT: f64 = 300.0;

/// Interior angles may deviate this many degrees and still count as regular.
pub const REGULAR_ANGLE_TOLERANCE: f64 = 2.0;
/// Side lengths may deviate this fraction of their mean and still count as regular.
pub const REGULAR_SIDE_TOLERANCE: f64 = 0.05;
/// Polygons enclosing less area than this are degenerate.
pub const MIN_POLYGON_AREA: f64 = 1.0;
