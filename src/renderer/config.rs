//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Fill the canvas with the palette background color
    pub draw_background: bool,

    /// Digits kept after the decimal point in path data
    pub precision: usize,

    /// Prefix for CSS class names (e.g., "goban-" for "goban-cut")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            draw_background: false,
            precision: 3,
            class_prefix: Some("goban-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a background rectangle is drawn
    pub fn with_background(mut self, draw_background: bool) -> Self {
        self.draw_background = draw_background;
        self
    }

    /// Set the path data precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
