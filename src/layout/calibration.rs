//! Stroke calibration piece
//!
//! Instead of a board, draws a table of short lines, one per combination of
//! stroke count (rows) and stroke spacing (columns). Cutting it shows which
//! combination gives the cleanest line on a given machine. Cells are
//! identified by position only.

use log::debug;

use super::border;
use super::config::BoardConfig;
use super::engine::{validate_radius, validate_strokes};
use super::error::GeometryError;
use super::stroke;
use super::types::{Axis, BoardLayout, Layer, Line, Point, Primitive, Size};

/// Stroke counts tried, one per row
pub const LINE_COUNTS: [usize; 3] = [1, 2, 3];

/// Stroke spacings tried in millimeters, one per column
pub const LINE_SPACINGS_MM: [f64; 5] = [0.1, 0.15, 0.2, 0.25, 0.3];

const MARGIN_MM: f64 = 10.0;
const LINE_LENGTH_MM: f64 = 10.0;
const COLUMN_PITCH_MM: f64 = 20.0;
const ROW_PITCH_MM: f64 = 10.0;

/// Canvas of the calibration piece
pub fn canvas() -> Size {
    let columns = (LINE_SPACINGS_MM.len() - 1) as f64;
    let rows = (LINE_COUNTS.len() - 1) as f64;
    Size::new(
        2.0 * MARGIN_MM + columns * COLUMN_PITCH_MM + LINE_LENGTH_MM,
        2.0 * MARGIN_MM + rows * ROW_PITCH_MM,
    )
}

/// Lay out the calibration piece
///
/// Board size, margin and half board settings are ignored. The border, when
/// enabled, uses the configured corner radius and strokes; without a border
/// the radius is not checked.
pub fn generate(config: &BoardConfig) -> Result<BoardLayout, GeometryError> {
    validate_strokes(config)?;
    let canvas = canvas();
    if config.draw_border {
        validate_radius(config, MARGIN_MM, canvas.width.min(canvas.height) / 2.0)?;
    }

    let mut layout = BoardLayout::new(canvas);
    for (row, &count) in LINE_COUNTS.iter().enumerate() {
        let y = MARGIN_MM + row as f64 * ROW_PITCH_MM;
        for (column, &spacing) in LINE_SPACINGS_MM.iter().enumerate() {
            let x = MARGIN_MM + column as f64 * COLUMN_PITCH_MM;
            let sample = Line::new(Point::new(x, y), Point::new(x + LINE_LENGTH_MM, y));
            layout.extend(
                stroke::parallel_lines(sample, Axis::Y, &stroke::offsets(count, spacing))
                    .into_iter()
                    .map(|line| Primitive::line(Layer::Mark, line)),
            );
        }
    }

    if config.draw_border {
        let offsets = stroke::offsets(config.line_count, config.line_spacing_mm);
        layout.extend(border::outline(canvas, config.corner_radius_mm, &offsets));
    }

    debug!(primitives = layout.primitives.len(); "generated calibration piece");
    Ok(layout)
}
