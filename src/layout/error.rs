//! Error types for the board layout generator

use thiserror::Error;

/// Configurations the generator refuses to lay out
///
/// Raised by validation before any primitive is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Board size outside the supported set
    #[error("unsupported board size {size} (supported: 7, 9, 13, 19)")]
    UnsupportedSize { size: u32 },

    /// Margin is negative or not a number
    #[error("invalid margin {margin}mm: must be a finite value >= 0")]
    InvalidMargin { margin: f64 },

    /// Corner radius outside the allowed range
    #[error("invalid corner radius {radius}mm: {reason}")]
    InvalidRadius { radius: f64, reason: String },

    /// Multi-line stroke parameters outside the allowed range
    #[error("invalid stroke: {reason}")]
    InvalidStroke { reason: String },
}

impl GeometryError {
    /// Create an invalid radius error
    pub fn radius(radius: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRadius {
            radius,
            reason: reason.into(),
        }
    }

    /// Create an invalid stroke error
    pub fn stroke(reason: impl Into<String>) -> Self {
        Self::InvalidStroke {
            reason: reason.into(),
        }
    }
}
