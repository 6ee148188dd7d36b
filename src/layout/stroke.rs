//! Multi-line strokes
//!
//! A laser cut line is very thin, so one drawn line is replaced by several
//! parallel strokes. The strokes are centered on the nominal coordinate.

use super::types::{Arc, Axis, Line};

/// Perpendicular offsets of `count` strokes `spacing` apart, centered on 0
///
/// Two strokes give `[-spacing/2, spacing/2]`, three give
/// `[-spacing, 0, spacing]`.
pub fn offsets(count: usize, spacing: f64) -> Vec<f64> {
    let center = count.saturating_sub(1) as f64 / 2.0;
    (0..count)
        .map(|i| (i as f64 - center) * spacing)
        .collect()
}

/// Translated copies of `line`, one per offset, shifted along `axis`
///
/// `axis` should be perpendicular to the line so the copies lie side by side.
pub fn parallel_lines(line: Line, axis: Axis, offsets: &[f64]) -> Vec<Line> {
    offsets
        .iter()
        .map(|&offset| {
            Line::new(
                line.start.shifted(axis, offset),
                line.end.shifted(axis, offset),
            )
        })
        .collect()
}

/// Concentric copies of `arc`, one per offset, growing the radius outward
pub fn concentric_arcs(arc: Arc, offsets: &[f64]) -> Vec<Arc> {
    offsets
        .iter()
        .map(|&offset| Arc {
            radius: arc.radius + offset,
            ..arc
        })
        .collect()
}
