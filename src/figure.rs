//! Everything a renderer needs to draw one polygon diagram, in one call.

use crate::defaults;
use crate::layout::{PlacedLabel, plan_diagonal_labels, plan_edge_labels, plan_vertex_labels};
use crate::metrics::PolygonMetrics;
use crate::render::{describe_angle_arc, polygon_path, segment_path};
use crate::types::{Point, ViewBox};
use crate::viewport::calculate_view_box;

/// Which optional layers to prepare and how to size them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureOptions {
    /// Margin around the vertices in the view box.
    pub padding: f64,
    /// Radius of the angle-marker arcs.
    pub arc_radius: f64,
    pub show_diagonals: bool,
    pub show_angles: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        FigureOptions {
            padding: defaults::VIEW_BOX_PADDING,
            arc_radius: defaults::ANGLE_ARC_RADIUS,
            show_diagonals: false,
            show_angles: false,
        }
    }
}

/// Paths, labels and measurements for one polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub path: String,
    pub view_box: ViewBox,
    pub metrics: PolygonMetrics,
    pub vertex_labels: Vec<PlacedLabel>,
    pub edge_labels: Vec<PlacedLabel>,
    /// Empty unless diagonals were requested.
    pub diagonal_paths: Vec<String>,
    pub diagonal_labels: Vec<PlacedLabel>,
    /// One minor arc per vertex when angles were requested.
    pub angle_arcs: Vec<String>,
}

impl Figure {
    pub fn prepare(vertices: &[Point], options: &FigureOptions) -> Self {
        let metrics = PolygonMetrics::compute(vertices);
        let n = vertices.len();

        let (diagonal_paths, diagonal_labels) = if options.show_diagonals {
            let paths = metrics
                .diagonals
                .iter()
                .map(|d| segment_path(&vertices[d.from], &vertices[d.to]))
                .collect();
            (paths, plan_diagonal_labels(vertices))
        } else {
            (Vec::new(), Vec::new())
        };

        let angle_arcs = if options.show_angles && n >= 3 {
            (0..n)
                .map(|i| {
                    let prev = &vertices[(i + n - 1) % n];
                    let next = &vertices[(i + 1) % n];
                    describe_angle_arc(&vertices[i], prev, next, options.arc_radius)
                })
                .collect()
        } else {
            Vec::new()
        };

        Figure {
            path: polygon_path(vertices),
            view_box: calculate_view_box(vertices, options.padding),
            metrics,
            vertex_labels: plan_vertex_labels(vertices),
            edge_labels: plan_edge_labels(vertices),
            diagonal_paths,
            diagonal_labels,
            angle_arcs,
        }
    }
}
