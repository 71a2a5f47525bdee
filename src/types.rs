//! Plain value types shared by every geometry group.

use std::fmt;

use glam::{DVec2, dvec2};

/// A vertex or derived position, optionally carrying a display label.
///
/// Coordinates are in the caller's space. Lesson diagrams use SVG pixels,
/// so y grows downward.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Point {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Coordinates as a vector (the label is dropped).
    #[inline]
    pub fn vec(&self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<&Point> for DVec2 {
    fn from(p: &Point) -> Self {
        p.vec()
    }
}

/// A diagonal as 0-based indices into the vertex list, `from < to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Diagonal {
    pub from: usize,
    pub to: usize,
}

impl Diagonal {
    pub fn new(from: usize, to: usize) -> Self {
        Diagonal { from, to }
    }
}

/// Axis-aligned rectangle a renderer sizes its canvas to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }
}

/// Formats as the value of an SVG `viewBox` attribute.
impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            crate::render::fmt_num(self.min_x),
            crate::render::fmt_num(self.min_y),
            crate::render::fmt_num(self.width),
            crate::render::fmt_num(self.height)
        )
    }
}

/// An inclusive range of side (or vertex) counts.
///
/// Construction and validation use different ranges: the constructor builds
/// anything from a triangle up, while the N-gon lesson catalogue starts at
/// pentagons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideRange {
    pub min: usize,
    pub max: usize,
}

impl SideRange {
    /// Shapes the constructor will build.
    pub const CONSTRUCTION: SideRange = SideRange { min: 3, max: 12 };
    /// Shapes the N-gon lessons accept.
    pub const LESSON_CATALOGUE: SideRange = SideRange { min: 5, max: 12 };

    pub const fn new(min: usize, max: usize) -> Self {
        SideRange { min, max }
    }

    pub fn contains(self, sides: usize) -> bool {
        (self.min..=self.max).contains(&sides)
    }

    /// Pull `sides` to the nearest bound.
    pub fn clamp(self, sides: usize) -> usize {
        sides.clamp(self.min, self.max)
    }
}
