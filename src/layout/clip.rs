//! Clipping primitives against a half-plane
//!
//! Used to cut a full board down to one half, but knows nothing about boards:
//! it works on any primitive list.

use super::types::{Arc, Axis, Line, Point, Primitive, Shape};

/// Tolerance for treating a coordinate as lying on the boundary
const EPSILON: f64 = 1e-9;

/// Which side of the boundary is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// Coordinates greater than or equal to the threshold
    Above,
    /// Coordinates less than or equal to the threshold
    Below,
}

/// The region on one side of an axis-aligned boundary, boundary included
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub axis: Axis,
    pub threshold: f64,
    pub keep: Keep,
}

impl HalfPlane {
    pub fn new(axis: Axis, threshold: f64, keep: Keep) -> Self {
        Self {
            axis,
            threshold,
            keep,
        }
    }

    /// Whether a point lies in the kept region
    pub fn contains(&self, point: Point) -> bool {
        let v = point.along(self.axis);
        match self.keep {
            Keep::Above => v >= self.threshold - EPSILON,
            Keep::Below => v <= self.threshold + EPSILON,
        }
    }

    /// Clip a line; `None` when nothing of it remains
    pub fn clip_line(&self, line: &Line) -> Option<Line> {
        match (self.contains(line.start), self.contains(line.end)) {
            (true, true) => Some(*line),
            (false, false) => None,
            (start_in, _) => {
                let cut = self.crossing(line);
                if start_in {
                    Some(Line::new(line.start, cut))
                } else {
                    Some(Line::new(cut, line.end))
                }
            }
        }
    }

    /// Point where a crossing line meets the boundary
    fn crossing(&self, line: &Line) -> Point {
        let a = line.start.along(self.axis);
        let b = line.end.along(self.axis);
        let t = (self.threshold - a) / (b - a);
        let other = self.axis.perpendicular();
        let o = line.start.along(other) + t * (line.end.along(other) - line.start.along(other));
        Point::new(0.0, 0.0)
            .with(self.axis, self.threshold)
            .with(other, o)
    }

    /// Clip an arc; `None` when nothing of it remains
    ///
    /// The arc must be monotonic along the clip axis, which holds for arcs
    /// that stay within one quadrant of their circle (the rounded corners).
    pub fn clip_arc(&self, arc: &Arc) -> Option<Arc> {
        match (self.contains(arc.start_point()), self.contains(arc.end_point())) {
            (true, true) => Some(*arc),
            (false, false) => None,
            (start_in, _) => {
                let angle = self.crossing_angle(arc)?;
                if start_in {
                    Some(Arc {
                        end_deg: angle,
                        ..*arc
                    })
                } else {
                    Some(Arc {
                        start_deg: angle,
                        ..*arc
                    })
                }
            }
        }
    }

    /// Angle within the arc's sweep at which the circle meets the boundary
    fn crossing_angle(&self, arc: &Arc) -> Option<f64> {
        let center = arc.center.along(self.axis);
        let ratio = ((self.threshold - center) / arc.radius).clamp(-1.0, 1.0);
        let candidates = match self.axis {
            Axis::X => {
                let a = ratio.acos().to_degrees();
                [a, -a]
            }
            Axis::Y => {
                let a = ratio.asin().to_degrees();
                [a, 180.0 - a]
            }
        };
        candidates.into_iter().find_map(|candidate| {
            // Bring the candidate into [start, start + 360)
            let turns = ((arc.start_deg - candidate) / 360.0).ceil();
            let angle = candidate + turns * 360.0;
            (angle <= arc.end_deg + EPSILON).then_some(angle.min(arc.end_deg))
        })
    }

    /// Clip a single primitive
    ///
    /// Filled circles are kept whole when their center is in the region and
    /// dropped otherwise.
    pub fn clip(&self, primitive: &Primitive) -> Option<Primitive> {
        let shape = match &primitive.shape {
            Shape::Line(line) => Shape::Line(self.clip_line(line)?),
            Shape::Arc(arc) => Shape::Arc(self.clip_arc(arc)?),
            Shape::FilledCircle(circle) => {
                if !self.contains(circle.center) {
                    return None;
                }
                Shape::FilledCircle(*circle)
            }
        };
        Some(Primitive {
            layer: primitive.layer,
            shape,
        })
    }
}

/// Clip every primitive, dropping those that vanish, preserving order
pub fn clip_primitives(primitives: &[Primitive], region: &HalfPlane) -> Vec<Primitive> {
    primitives.iter().filter_map(|p| region.clip(p)).collect()
}

/// Shift a primitive by `delta` along `axis`
pub fn translate(primitive: &Primitive, axis: Axis, delta: f64) -> Primitive {
    let shape = match primitive.shape {
        Shape::Line(line) => Shape::Line(Line::new(
            line.start.shifted(axis, delta),
            line.end.shifted(axis, delta),
        )),
        Shape::Arc(arc) => Shape::Arc(Arc {
            center: arc.center.shifted(axis, delta),
            ..arc
        }),
        Shape::FilledCircle(mut circle) => {
            circle.center = circle.center.shifted(axis, delta);
            Shape::FilledCircle(circle)
        }
    };
    Primitive {
        layer: primitive.layer,
        shape,
    }
}
