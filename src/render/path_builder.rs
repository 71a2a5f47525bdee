//! Fluent builder for SVG path data.
//!
//! Only the commands the polygon renderer consumes are supported: absolute
//! `M`, `L`, `A` and `Z`. Each command is written as its letter followed by
//! space-separated numbers, and commands are separated by single spaces:
//!
//! ```text
//! M 0 0 L 10 0 L 10 10 Z
//! M 25 0 A 25 25 0 0 0 0 -25
//! ```

use std::fmt;

use glam::{DVec2, dvec2};

/// A single absolute path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        radius: DVec2,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// Path data under construction.
///
/// # Example
///
/// ```
/// use ngon::render::PathData;
///
/// let path = PathData::new().m(0.0, 0.0).l(10.0, 0.0).l(10.0, 10.0).z();
/// assert_eq!(path.to_string(), "M 0 0 L 10 0 L 10 10 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to an absolute position.
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    /// Line to an absolute position.
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    /// Elliptical arc to an absolute position.
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            radius: dvec2(rx, ry),
            x_axis_rotation,
            large_arc,
            sweep,
            to: dvec2(x, y),
        });
        self
    }

    /// Close the current subpath.
    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCommand::LineTo(p) => write!(f, "L {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCommand::Arc {
                radius,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                fmt_num(radius.x),
                fmt_num(radius.y),
                fmt_num(x_axis_rotation),
                u8::from(large_arc),
                u8::from(sweep),
                fmt_num(to.x),
                fmt_num(to.y)
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

/// Smaller magnitudes are trigonometric rounding noise and print as `0`.
const SNAP_TO_ZERO: f64 = 1e-9;

/// Format a number for path output: shortest decimal that round-trips,
/// no trailing `.0`, and negative zero or rounding noise written as `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    if value.abs() < SNAP_TO_ZERO {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_empty_string() {
        let path = PathData::new();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn commands_are_space_separated() {
        let path = PathData::new().m(1.0, 2.0).l(3.5, -4.0).z();
        assert_eq!(path.to_string(), "M 1 2 L 3.5 -4 Z");
        assert_eq!(path.commands().len(), 3);
    }

    #[test]
    fn arc_flags_are_written_as_digits() {
        let path = PathData::new()
            .m(25.0, 0.0)
            .a(25.0, 25.0, 0.0, true, false, 0.0, 25.0);
        assert_eq!(path.to_string(), "M 25 0 A 25 25 0 1 0 0 25");
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn rounding_noise_is_written_as_zero() {
        assert_eq!(fmt_num(1.5308084989341915e-15), "0");
        assert_eq!(fmt_num(-6.123233995736766e-17), "0");
        assert_eq!(fmt_num(1e-6), "0.000001");
    }

    #[test]
    fn numbers_keep_full_precision() {
        assert_eq!(fmt_num(200.0), "200");
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(fmt_num(-12.25), "-12.25");
    }
}
