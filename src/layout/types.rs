//! Core types for the board layout

/// A 2D point in millimeters, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Read the coordinate along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Return a copy shifted by `delta` along an axis
    pub fn shifted(&self, axis: Axis, delta: f64) -> Self {
        match axis {
            Axis::X => Self::new(self.x + delta, self.y),
            Axis::Y => Self::new(self.x, self.y + delta),
        }
    }

    /// Return a copy with the coordinate along an axis replaced
    pub fn with(&self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y),
            Axis::Y => Self::new(self.x, value),
        }
    }
}

/// One of the two drawing axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The axis at right angles to this one
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Canvas extent in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// A straight segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// A circular arc swept from `start_deg` to `end_deg`
///
/// Angles follow the SVG convention: 0° points along +x and angles grow
/// clockwise on screen because y points down. `end_deg` is always greater
/// than `start_deg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        Self {
            center,
            radius,
            start_deg,
            end_deg,
        }
    }

    /// Point on the circle at the given angle
    pub fn point_at(&self, deg: f64) -> Point {
        let rad = deg.to_radians();
        Point::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_deg)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_deg)
    }

    /// Swept angle in degrees
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// A solid disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Geometry of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line(Line),
    Arc(Arc),
    FilledCircle(Circle),
}

/// What the fabrication tool does with a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Engraved: grid lines, star points, alignment marks
    Mark,
    /// Cut through: the board outline
    Cut,
}

/// A drawable primitive handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub layer: Layer,
    pub shape: Shape,
}

impl Primitive {
    pub fn line(layer: Layer, line: Line) -> Self {
        Self {
            layer,
            shape: Shape::Line(line),
        }
    }

    pub fn arc(layer: Layer, arc: Arc) -> Self {
        Self {
            layer,
            shape: Shape::Arc(arc),
        }
    }

    pub fn filled_circle(layer: Layer, circle: Circle) -> Self {
        Self {
            layer,
            shape: Shape::FilledCircle(circle),
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match &self.shape {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_arc(&self) -> Option<&Arc> {
        match &self.shape {
            Shape::Arc(arc) => Some(arc),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match &self.shape {
            Shape::FilledCircle(circle) => Some(circle),
            _ => None,
        }
    }
}

/// The result of layout: a canvas and the primitives drawn on it, in order
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub canvas: Size,
    pub primitives: Vec<Primitive>,
}

impl BoardLayout {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            primitives: vec![],
        }
    }

    /// Append primitives in order
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.primitives.iter().filter_map(Primitive::as_line)
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.primitives.iter().filter_map(Primitive::as_arc)
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(Primitive::as_circle)
    }

    /// Primitives on a single layer
    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.layer == layer)
    }
}
