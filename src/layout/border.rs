//! Board outline, optionally with rounded corners

use super::stroke;
use super::types::{Arc, Axis, Layer, Line, Point, Primitive, Size};

/// Outline of a `canvas`-sized board, each edge drawn with the given strokes
///
/// Positive offsets move a stroke outward, so a symmetric offset list keeps
/// the stroke band centered on the canvas edge. With `radius > 0` the straight
/// sides stop `radius` short of each corner and a quarter arc per corner joins
/// them. Sides come first (top, right, bottom, left), then the corners
/// (top-left, top-right, bottom-right, bottom-left).
pub fn outline(canvas: Size, radius: f64, offsets: &[f64]) -> Vec<Primitive> {
    let (w, h, r) = (canvas.width, canvas.height, radius);

    // Each side with the axis and sign that point outward
    let sides = [
        (Line::new(Point::new(r, 0.0), Point::new(w - r, 0.0)), Axis::Y, -1.0),
        (Line::new(Point::new(w, r), Point::new(w, h - r)), Axis::X, 1.0),
        (Line::new(Point::new(w - r, h), Point::new(r, h)), Axis::Y, 1.0),
        (Line::new(Point::new(0.0, h - r), Point::new(0.0, r)), Axis::X, -1.0),
    ];

    let mut primitives = vec![];
    for (side, axis, outward) in sides {
        let directed: Vec<f64> = offsets.iter().map(|o| o * outward).collect();
        primitives.extend(
            stroke::parallel_lines(side, axis, &directed)
                .into_iter()
                .map(|line| Primitive::line(Layer::Cut, line)),
        );
    }

    if r > 0.0 {
        for corner in corners(canvas, r) {
            primitives.extend(
                stroke::concentric_arcs(corner, offsets)
                    .into_iter()
                    .map(|arc| Primitive::arc(Layer::Cut, arc)),
            );
        }
    }

    primitives
}

/// The four corner arcs of a rounded rectangle
fn corners(canvas: Size, r: f64) -> [Arc; 4] {
    let (w, h) = (canvas.width, canvas.height);
    [
        Arc::new(Point::new(r, r), r, 180.0, 270.0),
        Arc::new(Point::new(w - r, r), r, 270.0, 360.0),
        Arc::new(Point::new(w - r, h - r), r, 0.0, 90.0),
        Arc::new(Point::new(r, h - r), r, 90.0, 180.0),
    ]
}
