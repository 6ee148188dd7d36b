//! Configuration for the board layout generator

use std::fmt;
use std::path::PathBuf;

use super::error::GeometryError;

/// Supported board sizes, in lines per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSize {
    Seven,
    Nine,
    Thirteen,
    Nineteen,
}

impl BoardSize {
    pub const ALL: [BoardSize; 4] = [
        BoardSize::Seven,
        BoardSize::Nine,
        BoardSize::Thirteen,
        BoardSize::Nineteen,
    ];

    /// Number of lines in each direction
    pub fn lines(self) -> usize {
        match self {
            BoardSize::Seven => 7,
            BoardSize::Nine => 9,
            BoardSize::Thirteen => 13,
            BoardSize::Nineteen => 19,
        }
    }
}

impl TryFrom<u32> for BoardSize {
    type Error = GeometryError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        match size {
            7 => Ok(BoardSize::Seven),
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            _ => Err(GeometryError::UnsupportedSize { size }),
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.lines();
        write!(f, "{n}x{n}")
    }
}

/// Configuration options for board generation
///
/// All lengths are in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Board size
    pub size: BoardSize,

    /// Distance from the outermost grid lines to the board edge
    pub margin_mm: f64,

    /// Radius of the board corners, 0 for square corners
    pub corner_radius_mm: f64,

    /// Whether to draw the board outline
    pub draw_border: bool,

    /// Generate one half of the board for small cutting beds
    pub half_board: bool,

    /// Generate a stroke calibration piece instead of a board
    pub test_mode: bool,

    /// Distance between the parallel strokes of one line
    pub line_spacing_mm: f64,

    /// Number of parallel strokes drawn per line
    pub line_count: usize,

    /// Where the drawing is written
    pub output_path: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::Nineteen,
            margin_mm: 15.0,
            corner_radius_mm: 10.0,
            draw_border: true,
            half_board: false,
            test_mode: false,
            line_spacing_mm: 0.25,
            line_count: 2,
            output_path: PathBuf::from("goban.svg"),
        }
    }
}

impl BoardConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    /// Set the margin around the grid
    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    /// Set the corner radius (0 disables rounding)
    pub fn with_corner_radius(mut self, radius_mm: f64) -> Self {
        self.corner_radius_mm = radius_mm;
        self
    }

    /// Enable or disable the border
    pub fn with_border(mut self, draw_border: bool) -> Self {
        self.draw_border = draw_border;
        self
    }

    /// Enable or disable half board mode
    pub fn with_half_board(mut self, half_board: bool) -> Self {
        self.half_board = half_board;
        self
    }

    /// Enable or disable the calibration piece
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Set the multi-line stroke parameters
    pub fn with_strokes(mut self, line_count: usize, line_spacing_mm: f64) -> Self {
        self.line_count = line_count;
        self.line_spacing_mm = line_spacing_mm;
        self
    }

    /// Set the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Total width of the band covered by the parallel strokes of one line
    pub fn stroke_band_mm(&self) -> f64 {
        self.line_count.saturating_sub(1) as f64 * self.line_spacing_mm
    }
}
