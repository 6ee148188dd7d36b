//! Board layout generator
//!
//! This module turns a [`BoardConfig`] into a [`BoardLayout`]: a canvas size
//! and an ordered list of line, arc and filled-circle primitives in
//! millimeters. It is pure: no I/O happens here.

pub mod border;
pub mod calibration;
pub mod clip;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod stroke;
pub mod types;

pub use clip::{HalfPlane, Keep};
pub use config::{BoardConfig, BoardSize};
pub use engine::{generate, validate};
pub use error::GeometryError;
pub use grid::GridGeometry;
pub use types::*;
