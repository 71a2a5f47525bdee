//! Regular polygon construction from polar parameters.
//!
//! Bearings follow the screen convention used throughout the crate: 0° points
//! up and angles increase clockwise, because the y axis grows downward.

use glam::{DVec2, dvec2};

use crate::types::{Point, SideRange};

/// Convert a screen bearing to a point at `radius` from `(cx, cy)`.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, bearing_degrees: f64) -> DVec2 {
    let (sin, cos) = (bearing_degrees - 90.0).to_radians().sin_cos();
    dvec2(cx + radius * cos, cy + radius * sin)
}

/// Label for the vertex at `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn vertex_label(index: usize) -> String {
    let mut label = String::new();
    let mut n = index;
    loop {
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

/// Build the labelled vertices of a regular polygon.
///
/// `sides` is clamped into 3..=12. Vertex `A` sits at bearing
/// `rotation_degrees` (straight up for 0) and the rest follow clockwise.
pub fn build_regular_polygon(
    sides: usize,
    radius: f64,
    center_x: f64,
    center_y: f64,
    rotation_degrees: f64,
) -> Vec<Point> {
    let n = SideRange::CONSTRUCTION.clamp(sides);
    if n != sides {
        crate::log::debug!(requested = sides, clamped = n, "side count clamped");
    }

    let step = 360.0 / n as f64;
    (0..n)
        .map(|i| {
            let p = polar_to_cartesian(center_x, center_y, radius, rotation_degrees + i as f64 * step);
            Point::labeled(p.x, p.y, vertex_label(i))
        })
        .collect()
}
