//! SVG path emission for polygon diagrams
//!
//! This module is organized into submodules:
//! - `path_builder`: `PathData`, a fluent builder for `M`/`L`/`A`/`Z` path data
//! - `geometry`: polygon outlines, bearings and angle-marker arcs

pub mod geometry;
pub mod path_builder;

pub use geometry::{
    angle_to_point, describe_angle_arc, describe_arc, describe_arc_data, minor_arc_bearings,
    polygon_path, polygon_path_data, segment_path,
};
pub use path_builder::{PathCommand, PathData};

pub(crate) use path_builder::fmt_num;
