//! goban-svg - vector drawings of go boards for laser cutting
//!
//! This library lays out a go board from a handful of parameters and renders
//! it as an SVG document in millimeters.
//!
//! # Example
//!
//! ```rust
//! use goban_svg::{render, BoardConfig, BoardSize};
//!
//! let config = BoardConfig::new().with_size(BoardSize::Nine);
//! let svg = render(&config).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod cli;
pub mod error;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use error::RenderError;
pub use layout::{generate, BoardConfig, BoardLayout, BoardSize, GeometryError};
pub use palette::Palette;
pub use renderer::{render_svg, SvgConfig};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Board layout configuration
    pub board: BoardConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Colors and stroke width
    pub palette: Palette,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board configuration
    pub fn with_board(mut self, config: BoardConfig) -> Self {
        self.board = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Render a board to SVG with the default SVG settings and palette
///
/// # Example
///
/// ```rust
/// use goban_svg::{render, BoardConfig};
///
/// let svg = render(&BoardConfig::new().with_half_board(true)).unwrap();
/// assert!(svg.contains("goban-cut"));
/// ```
pub fn render(config: &BoardConfig) -> Result<String, RenderError> {
    render_with_config(&RenderConfig::new().with_board(config.clone()))
}

/// Render a board to an SVG string with custom configuration
pub fn render_with_config(config: &RenderConfig) -> Result<String, RenderError> {
    let layout = generate(&config.board)?;
    Ok(render_svg(&layout, &config.svg, &config.palette))
}

/// Lay out a board and write it to `config.board.output_path`
///
/// Nothing is written when the configuration is invalid.
pub fn render_to_file(config: &RenderConfig) -> Result<BoardLayout, RenderError> {
    let layout = generate(&config.board)?;
    let path = &config.board.output_path;
    renderer::write_svg(&layout, &config.svg, &config.palette, path)
        .map_err(|e| RenderError::output_write(path, e))?;
    Ok(layout)
}
