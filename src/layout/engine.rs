//! Board layout generation
//!
//! [`generate`] validates a [`BoardConfig`] and turns it into a
//! [`BoardLayout`]: grid rows, grid columns, star points and the border, in
//! that order. Half boards are produced by laying out the full board and
//! clipping it; the calibration piece lives in [`super::calibration`].

use log::{debug, trace};

use super::border;
use super::calibration;
use super::clip::{self, HalfPlane, Keep};
use super::config::BoardConfig;
use super::error::GeometryError;
use super::grid::{GridGeometry, SPACING_HORIZONTAL_MM};
use super::stroke;
use super::types::{Axis, BoardLayout, Circle, Layer, Line, Point, Primitive, Size};

/// Length of the alignment ticks on a half board's cut edge
pub const ALIGNMENT_TICK_MM: f64 = 5.0;

/// Narrowest margin that still holds the alignment ticks clear of the grid
pub const MIN_TICK_MARGIN_MM: f64 = 4.0;

/// Lay out the drawing described by `config`
///
/// Fails before producing anything when the configuration is invalid.
pub fn generate(config: &BoardConfig) -> Result<BoardLayout, GeometryError> {
    if config.test_mode {
        return calibration::generate(config);
    }

    validate(config)?;

    let full = full_board(config);
    let layout = if config.half_board {
        half_board(config, &full)
    } else {
        full
    };

    debug!(
        size = config.size.lines(),
        half_board = config.half_board,
        primitives = layout.primitives.len();
        "generated board layout {:.2}x{:.2}mm",
        layout.canvas.width,
        layout.canvas.height
    );
    Ok(layout)
}

/// Check a board configuration without laying it out
pub fn validate(config: &BoardConfig) -> Result<(), GeometryError> {
    validate_strokes(config)?;

    let margin = config.margin_mm;
    if !margin.is_finite() || margin < 0.0 {
        return Err(GeometryError::InvalidMargin { margin });
    }

    let extent = GridGeometry::extent(config.size);
    let half_grid = extent.width.min(extent.height) / 2.0;
    validate_radius(config, margin, half_grid)
}

/// Shared stroke checks, also used by the calibration piece
pub(crate) fn validate_strokes(config: &BoardConfig) -> Result<(), GeometryError> {
    if config.line_count == 0 {
        return Err(GeometryError::stroke("at least one line per stroke is required"));
    }
    let spacing = config.line_spacing_mm;
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(GeometryError::stroke(format!(
            "line spacing {spacing}mm must be a finite value >= 0"
        )));
    }
    Ok(())
}

/// Shared radius checks against the margin and half the grid extent
pub(crate) fn validate_radius(
    config: &BoardConfig,
    margin: f64,
    half_grid: f64,
) -> Result<(), GeometryError> {
    let radius = config.corner_radius_mm;
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeometryError::radius(radius, "must be a finite value >= 0"));
    }
    if radius > margin {
        return Err(GeometryError::radius(
            radius,
            format!("exceeds the margin of {margin}mm"),
        ));
    }
    if radius > half_grid {
        return Err(GeometryError::radius(
            radius,
            format!("exceeds half the grid extent ({half_grid}mm)"),
        ));
    }
    let half_band = config.stroke_band_mm() / 2.0;
    if config.draw_border && radius > 0.0 && radius < half_band {
        return Err(GeometryError::radius(
            radius,
            format!("smaller than half the stroke band ({half_band}mm)"),
        ));
    }
    Ok(())
}

/// Grid, stars and border of the complete board
fn full_board(config: &BoardConfig) -> BoardLayout {
    let margin = config.margin_mm;
    let extent = GridGeometry::extent(config.size);
    let canvas = Size::new(
        extent.width + 2.0 * margin,
        extent.height + 2.0 * margin,
    );
    let grid = GridGeometry::new(config.size, Point::new(margin, margin));
    let offsets = stroke::offsets(config.line_count, config.line_spacing_mm);

    let mut layout = BoardLayout::new(canvas);
    layout.extend(grid_lines(&grid, &offsets));
    layout.extend(star_points(&grid));
    if config.draw_border {
        layout.extend(border::outline(canvas, config.corner_radius_mm, &offsets));
    }
    layout
}

/// Row lines top to bottom, then column lines left to right
fn grid_lines(grid: &GridGeometry, offsets: &[f64]) -> Vec<Primitive> {
    let lines = grid.size.lines();
    let extent = grid.size();
    let (left, top) = (grid.origin.x, grid.origin.y);
    let (right, bottom) = (left + extent.width, top + extent.height);

    let rows = (0..lines).map(|row| {
        let y = grid.row_y(row);
        (Line::new(Point::new(left, y), Point::new(right, y)), Axis::Y)
    });
    let columns = (0..lines).map(|column| {
        let x = grid.column_x(column);
        (Line::new(Point::new(x, top), Point::new(x, bottom)), Axis::X)
    });

    rows.chain(columns)
        .flat_map(|(line, axis)| stroke::parallel_lines(line, axis, offsets))
        .map(|line| Primitive::line(Layer::Mark, line))
        .collect()
}

fn star_points(grid: &GridGeometry) -> impl Iterator<Item = Primitive> + '_ {
    let radius = grid.star_radius();
    grid.star_centers()
        .map(move |center| Primitive::filled_circle(Layer::Mark, Circle::new(center, radius)))
}

/// Cut the full board through its middle row and keep the lower half
///
/// The kept half is moved up so the cut edge lies on y = 0. The middle row
/// sits exactly on the cut, so each half carries the strokes on its own side
/// of it.
fn half_board(config: &BoardConfig, full: &BoardLayout) -> BoardLayout {
    let margin = config.margin_mm;
    let half_height = GridGeometry::extent(config.size).height / 2.0;
    let cut = margin + half_height;
    trace!(cut; "clipping board to its lower half");

    let region = HalfPlane::new(Axis::Y, cut, Keep::Above);
    let canvas = Size::new(full.canvas.width, half_height + margin);
    let offsets = stroke::offsets(config.line_count, config.line_spacing_mm);

    let mut layout = BoardLayout::new(canvas);
    layout.extend(
        clip::clip_primitives(&full.primitives, &region)
            .iter()
            .map(|p| clip::translate(p, Axis::Y, -cut)),
    );
    if config.draw_border {
        let edge = Line::new(Point::new(0.0, 0.0), Point::new(canvas.width, 0.0));
        // Outward from the half board is up
        let outward: Vec<f64> = offsets.iter().map(|o| -o).collect();
        layout.extend(
            stroke::parallel_lines(edge, Axis::Y, &outward)
                .into_iter()
                .map(|line| Primitive::line(Layer::Cut, line)),
        );
    }
    layout.extend(alignment_ticks(canvas, margin, &offsets));
    layout
}

/// Short marks perpendicular to the cut edge, centered in the side margins
///
/// Lining up the ticks of two half boards lines up their grids. Margins
/// narrower than [`MIN_TICK_MARGIN_MM`] would put the ticks on the outer
/// columns, so the ticks move halfway into the first and last grid cells.
fn alignment_ticks(canvas: Size, margin: f64, offsets: &[f64]) -> Vec<Primitive> {
    let length = ALIGNMENT_TICK_MM.min(canvas.height);
    let inset = if margin >= MIN_TICK_MARGIN_MM {
        margin / 2.0
    } else {
        margin + SPACING_HORIZONTAL_MM / 2.0
    };
    [inset, canvas.width - inset]
        .into_iter()
        .flat_map(|x| {
            let tick = Line::new(Point::new(x, 0.0), Point::new(x, length));
            stroke::parallel_lines(tick, Axis::X, offsets)
        })
        .map(|line| Primitive::line(Layer::Mark, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::BoardSize;
    use crate::layout::grid::{SPACING_HORIZONTAL_MM, SPACING_VERTICAL_MM};
    use float_cmp::approx_eq;

    fn square(size: BoardSize) -> BoardConfig {
        BoardConfig::new()
            .with_size(size)
            .with_margin(20.0)
            .with_corner_radius(0.0)
    }

    #[test]
    fn test_reference_nineteen_board() {
        let layout = generate(&square(BoardSize::Nineteen)).unwrap();
        assert_eq!(layout.primitives.len(), 93);
        assert_eq!(layout.lines().count(), 76 + 8);
        assert_eq!(layout.circles().count(), 9);
        assert_eq!(layout.arcs().count(), 0);
        assert!(approx_eq!(f64, layout.canvas.width, 18.0 * SPACING_HORIZONTAL_MM + 40.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, layout.canvas.height, 18.0 * SPACING_VERTICAL_MM + 40.0, epsilon = 1e-9));
    }

    #[test]
    fn test_grid_line_count_per_size() {
        for size in BoardSize::ALL {
            for count in 1..=3 {
                let config = square(size).with_border(false).with_strokes(count, 0.2);
                let layout = generate(&config).unwrap();
                assert_eq!(layout.lines().count(), 2 * size.lines() * count);
            }
        }
    }

    #[test]
    fn test_order_is_rows_columns_stars_border() {
        let layout = generate(&square(BoardSize::Seven)).unwrap();
        let p = &layout.primitives;
        // First row, both strokes horizontal
        let first = p[0].as_line().unwrap();
        assert_eq!(first.start.y, first.end.y);
        // First column begins after 7 rows of 2 strokes
        let column = p[14].as_line().unwrap();
        assert_eq!(column.start.x, column.end.x);
        assert!(p[28].as_circle().is_some());
        assert_eq!(p[32].layer, Layer::Cut);
    }

    #[test]
    fn test_lines_span_the_grid_not_the_margin() {
        let layout = generate(&square(BoardSize::Nine).with_border(false)).unwrap();
        let row = layout.lines().next().unwrap();
        assert!(approx_eq!(f64, row.start.x, 20.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, row.end.x, 20.0 + 8.0 * SPACING_HORIZONTAL_MM, epsilon = 1e-9));
    }

    #[test]
    fn test_rounded_border_arcs() {
        let config = square(BoardSize::Thirteen).with_corner_radius(10.0);
        let layout = generate(&config).unwrap();
        assert_eq!(layout.arcs().count(), 8);
        let mean: f64 = layout.arcs().map(|a| a.radius).sum::<f64>() / 8.0;
        assert!(approx_eq!(f64, mean, 10.0, epsilon = 1e-9));
    }

    #[test]
    fn test_no_border() {
        let layout = generate(&square(BoardSize::Nineteen).with_border(false)).unwrap();
        assert_eq!(layout.on_layer(Layer::Cut).count(), 0);
    }

    #[test]
    fn test_invalid_margin() {
        let err = generate(&square(BoardSize::Nine).with_margin(-5.0)).unwrap_err();
        assert_eq!(err, GeometryError::InvalidMargin { margin: -5.0 });
    }

    #[test]
    fn test_radius_larger_than_margin() {
        let config = square(BoardSize::Nine).with_corner_radius(25.0);
        assert!(matches!(
            generate(&config),
            Err(GeometryError::InvalidRadius { radius, .. }) if radius == 25.0
        ));
    }

    #[test]
    fn test_radius_smaller_than_stroke_band() {
        let config = square(BoardSize::Nine)
            .with_strokes(3, 1.0)
            .with_corner_radius(0.5);
        assert!(matches!(
            generate(&config),
            Err(GeometryError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn test_zero_line_count() {
        let config = square(BoardSize::Nine).with_strokes(0, 0.25);
        assert!(matches!(
            generate(&config),
            Err(GeometryError::InvalidStroke { .. })
        ));
    }

    #[test]
    fn test_half_board_canvas() {
        let config = square(BoardSize::Nineteen).with_half_board(true);
        let layout = generate(&config).unwrap();
        let full = generate(&square(BoardSize::Nineteen)).unwrap();
        assert_eq!(layout.canvas.width, full.canvas.width);
        assert!(approx_eq!(
            f64,
            layout.canvas.height,
            9.0 * SPACING_VERTICAL_MM + 20.0,
            epsilon = 1e-9
        ));
    }

    #[test]
    fn test_half_board_stars() {
        // Stars on the middle row stay, stars above it are dropped
        let layout = generate(&square(BoardSize::Nineteen).with_half_board(true)).unwrap();
        assert_eq!(layout.circles().count(), 6);
        assert!(layout
            .circles()
            .all(|c| c.center.y >= -1e-9 && c.center.y <= layout.canvas.height));
    }

    #[test]
    fn test_half_board_alignment_ticks() {
        let layout = generate(&square(BoardSize::Nine).with_half_board(true)).unwrap();
        let ticks: Vec<&Primitive> = layout.primitives.iter().rev().take(4).collect();
        assert!(ticks.iter().all(|p| p.layer == Layer::Mark));
        for tick in ticks {
            let line = tick.as_line().unwrap();
            assert!(approx_eq!(f64, line.start.y, 0.0, epsilon = 1e-12));
            assert!(approx_eq!(f64, line.length(), ALIGNMENT_TICK_MM, epsilon = 1e-9));
        }
    }

    #[test]
    fn test_half_board_closes_outline_at_the_cut() {
        let layout = generate(&square(BoardSize::Nine).with_half_board(true)).unwrap();
        let cut_edges = layout
            .on_layer(Layer::Cut)
            .filter_map(|p| p.as_line())
            .filter(|l| l.start.y.abs() < 0.2 && l.end.y.abs() < 0.2 && l.length() > 100.0)
            .count();
        assert_eq!(cut_edges, 2);
    }

    #[test]
    fn test_alignment_ticks_clear_of_columns_without_margin() {
        let layout = generate(&square(BoardSize::Nine).with_margin(0.0).with_half_board(true)).unwrap();
        let columns: Vec<f64> = (0..9).map(|c| c as f64 * SPACING_HORIZONTAL_MM).collect();
        let ticks: Vec<&Primitive> = layout.primitives.iter().rev().take(4).collect();
        for tick in ticks {
            let x = tick.as_line().unwrap().start.x;
            assert!(columns.iter().all(|c| (x - c).abs() > 1.0), "tick at {x}");
        }
    }
}
