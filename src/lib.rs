//! Polygon geometry for interactive geometry diagrams.
//!
//! Builds regular N-gons from polar parameters, measures arbitrary vertex
//! lists, validates lesson shapes, places labels and emits SVG path data.
//! Every function is pure: inputs are point lists or numbers, outputs are
//! fresh values, and nothing is cached between calls.
//!
//! Coordinates follow the SVG convention (y grows downward). Bearings are
//! measured from straight up, increasing clockwise.
//!
//! ```
//! use ngon::{build_regular_polygon, polygon_path, regular_interior_angle, validate_vertices};
//!
//! let hexagon = build_regular_polygon(6, 100.0, 200.0, 150.0, 0.0);
//! assert!(validate_vertices(&hexagon).is_ok());
//! assert_eq!(regular_interior_angle(6), 120.0);
//! assert!(polygon_path(&hexagon).starts_with("M 200 50 L "));
//! ```

pub mod construct;
pub mod defaults;
pub mod errors;
pub mod figure;
pub mod layout;
pub mod log;
pub mod metrics;
pub mod render;
pub mod types;
pub mod validate;
pub mod viewport;

pub use construct::{build_regular_polygon, polar_to_cartesian, vertex_label};
pub use errors::{AngleError, ValidationError, ValidationResult};
pub use figure::{Figure, FigureOptions};
pub use layout::{
    LabelKind, LabelRule, PlacedLabel, calculate_angle_label_position,
    calculate_diagonal_label_position, calculate_edge_label_position,
    calculate_vertex_label_position, plan_diagonal_labels, plan_edge_labels, plan_vertex_labels,
};
pub use metrics::{
    PolygonMetrics, angle_at_vertex, calculate_all_diagonals, calculate_apothem,
    calculate_side_length, diagonal_count, distance, interior_angles, midpoint, polygon_area,
    polygon_centroid, polygon_perimeter, polygon_signed_area, regular_exterior_angle,
    regular_interior_angle, regular_polygon_area, side_lengths, try_angle_at_vertex,
};
pub use render::{
    PathData, angle_to_point, describe_angle_arc, describe_arc, polygon_path, segment_path,
};
pub use types::{Diagonal, Point, SideRange, ViewBox};
pub use validate::{
    is_regular, is_regular_default, validate_polygon, validate_polygon_in_range,
    validate_vertices, validate_vertices_in_range,
};
pub use viewport::calculate_view_box;
