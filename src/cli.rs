//! Command-line interface
//!
//! [`Args`] is parsed by clap in the binary; [`run`] turns it into a
//! [`RenderConfig`] and writes the drawing.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::layout::{BoardConfig, BoardSize};
use crate::palette::Palette;
use crate::{render_to_file, RenderConfig, RenderError};

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "goban.svg";

/// Output file used for the calibration piece when none is given
pub const DEFAULT_TEST_OUTPUT: &str = "test.svg";

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "goban", version)]
#[command(about = "Generate an SVG file defining a go board")]
pub struct Args {
    /// Size of go board to generate (7, 9, 13 or 19)
    #[arg(short, long, default_value_t = 19)]
    pub size: u32,

    /// Margin from the board edge to the outermost lines in mm
    #[arg(short, long, default_value_t = 15.0, allow_negative_numbers = true)]
    pub margin: f64,

    /// Radius of rounded corners in mm, 0 for square corners
    #[arg(long = "rounded_corners", default_value_t = 10.0, allow_negative_numbers = true)]
    pub rounded_corners: f64,

    /// Don't draw the border around the board
    #[arg(long = "no_border")]
    pub no_border: bool,

    /// Draw one half of the board, for cutting beds smaller than the board
    #[arg(long = "half_board")]
    pub half_board: bool,

    /// Create a test piece to choose line count and spacing for the laser cutter
    #[arg(long)]
    pub test: bool,

    /// Number of parallel strokes per line
    #[arg(long = "line_count", default_value_t = 2)]
    pub line_count: usize,

    /// Spacing between parallel strokes in mm
    #[arg(long = "line_spacing", default_value_t = 0.25)]
    pub line_spacing: f64,

    /// Palette file for stroke colors and width (TOML format)
    #[arg(long)]
    pub palette: Option<PathBuf>,

    /// Output filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log_level", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Build the render configuration these arguments describe
    pub fn to_config(&self) -> Result<RenderConfig, RenderError> {
        let size = BoardSize::try_from(self.size)?;

        // The calibration piece gets its own default name
        let output = if self.test && self.output.as_os_str() == DEFAULT_OUTPUT {
            PathBuf::from(DEFAULT_TEST_OUTPUT)
        } else {
            self.output.clone()
        };

        let board = BoardConfig::new()
            .with_size(size)
            .with_margin(self.margin)
            .with_corner_radius(self.rounded_corners)
            .with_border(!self.no_border)
            .with_half_board(self.half_board)
            .with_test_mode(self.test)
            .with_strokes(self.line_count, self.line_spacing)
            .with_output(output);

        let palette = match &self.palette {
            Some(path) => Palette::from_file(path)?,
            None => Palette::default(),
        };

        Ok(RenderConfig::new().with_board(board).with_palette(palette))
    }
}

/// Generate the drawing described by `args` and write it
pub fn run(args: &Args) -> Result<(), RenderError> {
    let config = args.to_config()?;
    debug!(config:?; "resolved configuration");

    let layout = render_to_file(&config)?;
    info!(
        path:% = config.board.output_path.display(),
        primitives = layout.primitives.len();
        "Wrote {:.1}x{:.1}mm drawing",
        layout.canvas.width,
        layout.canvas.height
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GeometryError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("goban").chain(args.iter().copied()))
            .expect("Should parse")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.size, 19);
        assert_eq!(args.margin, 15.0);
        assert_eq!(args.rounded_corners, 10.0);
        assert!(!args.no_border && !args.half_board && !args.test);
        assert_eq!(args.output, PathBuf::from("goban.svg"));
    }

    #[test]
    fn test_underscored_flags() {
        let args = parse(&[
            "-s",
            "9",
            "-m",
            "20",
            "--rounded_corners",
            "0",
            "--no_border",
            "--half_board",
            "--line_count",
            "3",
            "--line_spacing",
            "0.1",
            "-o",
            "nine.svg",
        ]);
        let config = args.to_config().unwrap().board;
        assert_eq!(config.size, BoardSize::Nine);
        assert_eq!(config.margin_mm, 20.0);
        assert_eq!(config.corner_radius_mm, 0.0);
        assert!(!config.draw_border);
        assert!(config.half_board);
        assert_eq!(config.line_count, 3);
        assert_eq!(config.line_spacing_mm, 0.1);
        assert_eq!(config.output_path, PathBuf::from("nine.svg"));
    }

    #[test]
    fn test_unsupported_size() {
        let err = parse(&["--size", "11"]).to_config().unwrap_err();
        assert!(matches!(
            err,
            RenderError::Geometry(GeometryError::UnsupportedSize { size: 11 })
        ));
    }

    #[test]
    fn test_negative_margin_reaches_validation() {
        let args = parse(&["--margin", "-5"]);
        assert_eq!(args.margin, -5.0);
    }

    #[test]
    fn test_test_mode_renames_default_output() {
        let config = parse(&["--test"]).to_config().unwrap();
        assert_eq!(config.board.output_path, PathBuf::from("test.svg"));

        let config = parse(&["--test", "-o", "calib.svg"]).to_config().unwrap();
        assert_eq!(config.board.output_path, PathBuf::from("calib.svg"));
    }
}
