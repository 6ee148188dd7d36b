//! SVG renderer for board layouts
//!
//! This module takes a BoardLayout and produces an SVG document in
//! millimeters, with one group per fabrication layer.

pub mod config;
pub mod svg;

pub use self::config::SvgConfig;
pub use self::svg::{render_document, render_svg, write_svg};
