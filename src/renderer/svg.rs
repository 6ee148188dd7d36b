//! SVG generation from board layouts

use std::path::Path;

use log::{debug, info};
use svg::node::element::{
    Circle as SvgCircle, Group, Line as SvgLine, Path as SvgPath, Rectangle,
};
use svg::node::Node;
use svg::Document;

use crate::layout::{Arc, BoardLayout, Circle, Layer, Line, Primitive, Shape};
use crate::palette::Palette;

use super::SvgConfig;

/// Build an SVG document from primitives, one group per layer
pub struct SvgBuilder<'a> {
    config: SvgConfig,
    palette: &'a Palette,
    marks: Vec<Box<dyn Node>>,
    cuts: Vec<Box<dyn Node>>,
}

impl<'a> SvgBuilder<'a> {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig, palette: &'a Palette) -> Self {
        Self {
            config,
            palette,
            marks: vec![],
            cuts: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.config.precision)
    }

    fn push(&mut self, layer: Layer, node: Box<dyn Node>) {
        match layer {
            Layer::Mark => self.marks.push(node),
            Layer::Cut => self.cuts.push(node),
        }
    }

    /// Add any primitive to its layer group
    pub fn add_primitive(&mut self, primitive: &Primitive) {
        match &primitive.shape {
            Shape::Line(line) => self.add_line(primitive.layer, line),
            Shape::Arc(arc) => self.add_arc(primitive.layer, arc),
            Shape::FilledCircle(circle) => self.add_filled_circle(primitive.layer, circle),
        }
    }

    /// Add a line element
    pub fn add_line(&mut self, layer: Layer, line: &Line) {
        let node = SvgLine::new()
            .set("x1", self.num(line.start.x))
            .set("y1", self.num(line.start.y))
            .set("x2", self.num(line.end.x))
            .set("y2", self.num(line.end.y));
        self.push(layer, Box::new(node));
    }

    /// Add an arc as a path with a single elliptical arc command
    pub fn add_arc(&mut self, layer: Layer, arc: &Arc) {
        let start = arc.start_point();
        let end = arc.end_point();
        let large_arc = if arc.sweep_deg() > 180.0 { 1 } else { 0 };
        let r = self.num(arc.radius);
        // Angles grow clockwise on screen, which is SVG's positive sweep
        let d = format!(
            "M{} {} A{} {} 0 {} 1 {} {}",
            self.num(start.x),
            self.num(start.y),
            r,
            r,
            large_arc,
            self.num(end.x),
            self.num(end.y)
        );
        self.push(layer, Box::new(SvgPath::new().set("d", d)));
    }

    /// Add a filled circle; it takes the layer color as fill and no stroke
    pub fn add_filled_circle(&mut self, layer: Layer, circle: &Circle) {
        let color = match layer {
            Layer::Mark => self.palette.mark.clone(),
            Layer::Cut => self.palette.cut.clone(),
        };
        let node = SvgCircle::new()
            .set("cx", self.num(circle.center.x))
            .set("cy", self.num(circle.center.y))
            .set("r", self.num(circle.radius))
            .set("fill", color)
            .set("stroke", "none");
        self.push(layer, Box::new(node));
    }

    /// Build the final document
    ///
    /// The document is sized in millimeters with a matching viewBox, so one
    /// user unit is one millimeter. Marks come before cuts so a laser engraves
    /// before it frees the part.
    pub fn build(self, layout: &BoardLayout) -> Document {
        let palette = self.palette;
        let prefix = self.prefix();
        let stroke_width = self.num(palette.stroke_width);
        let (w, h) = (self.num(layout.canvas.width), self.num(layout.canvas.height));

        let mut document = Document::new()
            .set("width", format!("{w}mm"))
            .set("height", format!("{h}mm"))
            .set("viewBox", format!("0 0 {w} {h}"));

        if self.config.draw_background {
            document = document.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", w)
                    .set("height", h)
                    .set("fill", palette.background.clone())
                    .set("stroke", "none"),
            );
        }

        let marks = layer_group(&prefix, "mark", &palette.mark, &stroke_width, self.marks);
        let cuts = layer_group(&prefix, "cut", &palette.cut, &stroke_width, self.cuts);
        document.add(marks).add(cuts)
    }
}

/// Group sharing one stroke color and width
fn layer_group(
    prefix: &str,
    name: &str,
    color: &str,
    stroke_width: &str,
    nodes: Vec<Box<dyn Node>>,
) -> Group {
    let group = Group::new()
        .set("class", format!("{prefix}{name}"))
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", stroke_width);
    nodes.into_iter().fold(group, |group, node| group.add(node))
}

/// Render a BoardLayout to an SVG document
pub fn render_document(layout: &BoardLayout, config: &SvgConfig, palette: &Palette) -> Document {
    let mut builder = SvgBuilder::new(config.clone(), palette);
    for primitive in &layout.primitives {
        builder.add_primitive(primitive);
    }
    debug!(
        marks = builder.marks.len(),
        cuts = builder.cuts.len();
        "rendered layout to SVG"
    );
    builder.build(layout)
}

/// Render a BoardLayout to an SVG string
pub fn render_svg(layout: &BoardLayout, config: &SvgConfig, palette: &Palette) -> String {
    render_document(layout, config, palette).to_string()
}

/// Render a BoardLayout and save it to `path`
pub fn write_svg(
    layout: &BoardLayout,
    config: &SvgConfig,
    palette: &Palette,
    path: &Path,
) -> std::io::Result<()> {
    let document = render_document(layout, config, palette);
    info!(path:% = path.display(); "Writing SVG file");
    svg::save(path, &document)
}

/// Format a length with at most `precision` decimals and no trailing zeros
fn format_number(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Point, Size};

    fn sample_layout() -> BoardLayout {
        let mut layout = BoardLayout::new(Size::new(100.0, 50.0));
        layout.extend([
            Primitive::line(
                Layer::Mark,
                Line::new(Point::new(10.0, 10.0), Point::new(90.0, 10.0)),
            ),
            Primitive::filled_circle(Layer::Mark, Circle::new(Point::new(50.0, 25.0), 2.0)),
            Primitive::arc(
                Layer::Cut,
                Arc::new(Point::new(10.0, 10.0), 10.0, 180.0, 270.0),
            ),
        ]);
        layout
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.5, 3), "1.5");
        assert_eq!(format_number(2.0, 3), "2");
        assert_eq!(format_number(0.1 + 0.2, 3), "0.3");
        assert_eq!(format_number(-0.0001, 3), "0");
        assert_eq!(format_number(426.6, 1), "426.6");
    }

    #[test]
    fn test_document_is_in_millimeters() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default(), &Palette::default());
        assert!(svg.contains(r#"width="100mm""#));
        assert!(svg.contains(r#"height="50mm""#));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
    }

    #[test]
    fn test_layers_become_groups() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default(), &Palette::default());
        assert!(svg.contains(r#"class="goban-mark""#));
        assert!(svg.contains(r#"class="goban-cut""#));
        assert!(svg.contains(r#"stroke="red""#));
        assert!(svg.contains(r#"stroke="black""#));
        assert!(svg.find("goban-mark").unwrap() < svg.find("goban-cut").unwrap());
    }

    #[test]
    fn test_primitives_become_elements() {
        let svg = render_svg(&sample_layout(), &SvgConfig::default(), &Palette::default());
        assert_eq!(svg.matches("<line").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains(r#"d="M0 10 A10 10 0 0 1 10 0""#));
        assert!(svg.contains(r#"fill="red""#));
    }

    #[test]
    fn test_background_is_optional() {
        let palette = Palette::default();
        let without = render_svg(&sample_layout(), &SvgConfig::default(), &palette);
        assert!(!without.contains("<rect"));
        let with = render_svg(
            &sample_layout(),
            &SvgConfig::default().with_background(true),
            &palette,
        );
        assert!(with.contains("<rect"));
        assert!(with.contains(r#"fill="white""#));
    }

    #[test]
    fn test_class_prefix_can_be_removed() {
        let config = SvgConfig::default().without_class_prefix();
        let svg = render_svg(&sample_layout(), &config, &Palette::default());
        assert!(svg.contains(r#"class="mark""#));
    }
}
