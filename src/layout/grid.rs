//! Grid geometry: line positions and star points
//!
//! Cells are slightly taller than wide, following traditional board
//! proportions. The spacing does not depend on the margin or any other
//! configuration value.

use super::config::BoardSize;
use super::types::{Point, Size};

/// Horizontal distance between neighbouring vertical lines
pub const SPACING_HORIZONTAL_MM: f64 = 22.0;

/// Vertical distance between neighbouring horizontal lines
pub const SPACING_VERTICAL_MM: f64 = 23.7;

/// Star radius relative to the horizontal spacing (2mm on a 22mm grid)
const STAR_RADIUS_RATIO: f64 = 1.0 / 11.0;

const STARS_7: &[(usize, usize)] = &[(2, 2), (4, 2), (2, 4), (4, 4)];
const STARS_9: &[(usize, usize)] = &[(2, 2), (6, 2), (2, 6), (6, 6)];
const STARS_13: &[(usize, usize)] = &[(3, 3), (9, 3), (6, 6), (3, 9), (9, 9)];
const STARS_19: &[(usize, usize)] = &[
    (3, 3),
    (9, 3),
    (15, 3),
    (3, 9),
    (9, 9),
    (15, 9),
    (3, 15),
    (9, 15),
    (15, 15),
];

/// Star point intersections as 0-indexed (column, row) pairs
pub fn star_points(size: BoardSize) -> &'static [(usize, usize)] {
    match size {
        BoardSize::Seven => STARS_7,
        BoardSize::Nine => STARS_9,
        BoardSize::Thirteen => STARS_13,
        BoardSize::Nineteen => STARS_19,
    }
}

/// Grid placed on the canvas with its top-left intersection at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub size: BoardSize,
    pub origin: Point,
}

impl GridGeometry {
    pub fn new(size: BoardSize, origin: Point) -> Self {
        Self { size, origin }
    }

    /// Extent of the playing area between the outermost lines
    pub fn extent(size: BoardSize) -> Size {
        let cells = (size.lines() - 1) as f64;
        Size::new(cells * SPACING_HORIZONTAL_MM, cells * SPACING_VERTICAL_MM)
    }

    pub fn size(&self) -> Size {
        Self::extent(self.size)
    }

    /// x coordinate of a column line
    pub fn column_x(&self, column: usize) -> f64 {
        self.origin.x + column as f64 * SPACING_HORIZONTAL_MM
    }

    /// y coordinate of a row line
    pub fn row_y(&self, row: usize) -> f64 {
        self.origin.y + row as f64 * SPACING_VERTICAL_MM
    }

    /// Canvas position of an intersection
    pub fn intersection(&self, column: usize, row: usize) -> Point {
        Point::new(self.column_x(column), self.row_y(row))
    }

    /// Canvas positions of the star points
    pub fn star_centers(&self) -> impl Iterator<Item = Point> + '_ {
        star_points(self.size)
            .iter()
            .map(|&(column, row)| self.intersection(column, row))
    }

    pub fn star_radius(&self) -> f64 {
        SPACING_HORIZONTAL_MM * STAR_RADIUS_RATIO
    }
}
