//! Canvas sizing for a vertex set.

use crate::defaults;
use crate::types::{Point, ViewBox};

/// Bounding box of `vertices` grown by `padding` on every side.
///
/// An empty list yields the default 400×300 box at the origin.
pub fn calculate_view_box(vertices: &[Point], padding: f64) -> ViewBox {
    let Some(first) = vertices.first() else {
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: defaults::EMPTY_VIEW_BOX_WIDTH,
            height: defaults::EMPTY_VIEW_BOX_HEIGHT,
        };
    };

    let (min, max) = vertices.iter().skip(1).fold((first.vec(), first.vec()), |(min, max), p| {
        (min.min(p.vec()), max.max(p.vec()))
    });

    ViewBox {
        min_x: min.x - padding,
        min_y: min.y - padding,
        width: max.x - min.x + 2.0 * padding,
        height: max.y - min.y + 2.0 * padding,
    }
}
