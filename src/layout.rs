//! Label anchor placement.
//!
//! Vertex and edge labels are pushed outward from the polygon's vertex
//! centroid; diagonal labels are nudged perpendicular to their line, since
//! diagonals cross the interior and have no outward side; angle labels sit on
//! the bisector of the angle they annotate. Whenever the direction is
//! undefined (a point on the centroid, a zero-length segment) the label goes
//! straight up instead.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::defaults;
use crate::metrics::{calculate_all_diagonals, polygon_centroid};
use crate::types::Point;

/// Screen-up, the fallback direction for degenerate input.
const UP: DVec2 = DVec2::NEG_Y;

fn offset_along(from: DVec2, direction: DVec2, offset: f64) -> DVec2 {
    let dir = direction.try_normalize().unwrap_or_else(|| {
        crate::log::debug!(x = from.x, y = from.y, "label direction undefined, placing above");
        UP
    });
    from + dir * offset
}

/// How a kind of label finds its anchor.
#[enum_dispatch]
pub trait LabelRule {
    /// Distance used when the caller does not pick one.
    fn default_offset(&self) -> f64;

    /// Anchor point at an explicit `offset`.
    fn anchor_at(&self, offset: f64) -> DVec2;

    fn anchor(&self) -> DVec2 {
        self.anchor_at(self.default_offset())
    }
}

/// Label next to a vertex, outward from the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexLabel {
    pub vertex: DVec2,
    pub centroid: DVec2,
}

impl LabelRule for VertexLabel {
    fn default_offset(&self) -> f64 {
        defaults::VERTEX_LABEL_OFFSET
    }

    fn anchor_at(&self, offset: f64) -> DVec2 {
        offset_along(self.vertex, self.vertex - self.centroid, offset)
    }
}

/// Label beside an edge's midpoint, outward from the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLabel {
    pub from: DVec2,
    pub to: DVec2,
    pub centroid: DVec2,
}

impl LabelRule for EdgeLabel {
    fn default_offset(&self) -> f64 {
        defaults::EDGE_LABEL_OFFSET
    }

    fn anchor_at(&self, offset: f64) -> DVec2 {
        let mid = (self.from + self.to) * 0.5;
        offset_along(mid, mid - self.centroid, offset)
    }
}

/// Label beside a diagonal's midpoint, perpendicular to the diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagonalLabel {
    pub from: DVec2,
    pub to: DVec2,
}

impl LabelRule for DiagonalLabel {
    fn default_offset(&self) -> f64 {
        defaults::DIAGONAL_LABEL_OFFSET
    }

    fn anchor_at(&self, offset: f64) -> DVec2 {
        let mid = (self.from + self.to) * 0.5;
        offset_along(mid, (self.to - self.from).perp(), offset)
    }
}

/// Label for the angle at `vertex` between the rays to `p1` and `p2`,
/// placed on the bisector beyond the angle-marker arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleLabel {
    pub vertex: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
}

impl LabelRule for AngleLabel {
    fn default_offset(&self) -> f64 {
        defaults::ANGLE_LABEL_OFFSET
    }

    fn anchor_at(&self, offset: f64) -> DVec2 {
        let bisector = match (
            (self.p1 - self.vertex).try_normalize(),
            (self.p2 - self.vertex).try_normalize(),
        ) {
            (Some(u1), Some(u2)) => u1 + u2,
            _ => DVec2::ZERO,
        };
        offset_along(self.vertex, bisector, offset)
    }
}

/// The closed set of label kinds a polygon diagram uses.
#[enum_dispatch(LabelRule)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelKind {
    Vertex(VertexLabel),
    Edge(EdgeLabel),
    Diagonal(DiagonalLabel),
    AngleMarker(AngleLabel),
}

impl LabelKind {
    pub fn vertex(vertex: &Point, all_vertices: &[Point]) -> Self {
        LabelKind::Vertex(VertexLabel {
            vertex: vertex.vec(),
            centroid: polygon_centroid(all_vertices).vec(),
        })
    }

    pub fn edge(p1: &Point, p2: &Point, all_vertices: &[Point]) -> Self {
        LabelKind::Edge(EdgeLabel {
            from: p1.vec(),
            to: p2.vec(),
            centroid: polygon_centroid(all_vertices).vec(),
        })
    }

    pub fn diagonal(p1: &Point, p2: &Point) -> Self {
        LabelKind::Diagonal(DiagonalLabel {
            from: p1.vec(),
            to: p2.vec(),
        })
    }

    pub fn angle(vertex: &Point, p1: &Point, p2: &Point) -> Self {
        LabelKind::AngleMarker(AngleLabel {
            vertex: vertex.vec(),
            p1: p1.vec(),
            p2: p2.vec(),
        })
    }
}

/// Anchor for the label of `vertex`, `offset` away from it on the far side
/// from the centroid of `all_vertices`.
pub fn calculate_vertex_label_position(vertex: &Point, all_vertices: &[Point], offset: f64) -> Point {
    Point::from(LabelKind::vertex(vertex, all_vertices).anchor_at(offset))
}

/// Anchor for the label of edge `p1`-`p2`, `offset` outward from its midpoint.
pub fn calculate_edge_label_position(
    p1: &Point,
    p2: &Point,
    all_vertices: &[Point],
    offset: f64,
) -> Point {
    Point::from(LabelKind::edge(p1, p2, all_vertices).anchor_at(offset))
}

/// Anchor for the label of diagonal `p1`-`p2`, `offset` off its midpoint at
/// a right angle to the line.
pub fn calculate_diagonal_label_position(p1: &Point, p2: &Point, offset: f64) -> Point {
    Point::from(LabelKind::diagonal(p1, p2).anchor_at(offset))
}

/// Anchor for the label of the angle at `vertex`, `offset` along its bisector.
pub fn calculate_angle_label_position(vertex: &Point, p1: &Point, p2: &Point, offset: f64) -> Point {
    Point::from(LabelKind::angle(vertex, p1, p2).anchor_at(offset))
}

/// A label ready to draw: what kind it is, where it goes and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub kind: LabelKind,
    pub position: Point,
    pub text: Option<String>,
}

impl PlacedLabel {
    fn new(kind: LabelKind, text: Option<String>) -> Self {
        PlacedLabel {
            position: Point::from(kind.anchor()),
            kind,
            text,
        }
    }
}

fn join_labels(a: &Point, b: &Point) -> Option<String> {
    Some(format!("{}{}", a.label.as_deref()?, b.label.as_deref()?))
}

/// One label per vertex at the default offset, carrying the vertex's label.
pub fn plan_vertex_labels(vertices: &[Point]) -> Vec<PlacedLabel> {
    vertices
        .iter()
        .map(|v| PlacedLabel::new(LabelKind::vertex(v, vertices), v.label.clone()))
        .collect()
}

/// One label per edge at the default offset, named after its endpoints
/// (`AB`, `BC`, ...) when both are labelled.
pub fn plan_edge_labels(vertices: &[Point]) -> Vec<PlacedLabel> {
    if vertices.len() < 3 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| PlacedLabel::new(LabelKind::edge(a, b, vertices), join_labels(a, b)))
        .collect()
}

/// One label per diagonal at the default offset, in diagonal order.
pub fn plan_diagonal_labels(vertices: &[Point]) -> Vec<PlacedLabel> {
    calculate_all_diagonals(vertices.len())
        .into_iter()
        .map(|d| {
            let (a, b) = (&vertices[d.from], &vertices[d.to]);
            PlacedLabel::new(LabelKind::diagonal(a, b), join_labels(a, b))
        })
        .collect()
}
