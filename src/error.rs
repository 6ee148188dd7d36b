//! Errors surfaced by the render pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::layout::GeometryError;
use crate::palette::PaletteError;

/// Errors that can occur while producing a drawing
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration describes a board that cannot be laid out
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// The palette file could not be loaded
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// The drawing could not be written
    #[error("failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RenderError {
    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
