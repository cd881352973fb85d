use svg::node::element as svg_element;

use super::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition};
use crate::{color::Color, geometry::Point};

/// A straight edge between two canvas points.
#[derive(Debug, Clone)]
pub struct Segment {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
}

impl Segment {
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self { from, to, stroke }
    }
}

impl Drawable for Segment {
    fn render_to_layers(&self) -> LayeredOutput {
        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());
        let line = crate::apply_stroke!(line, &self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Edges, Box::new(line));
        output
    }
}

/// A filled circular node marker.
#[derive(Debug, Clone)]
pub struct Dot {
    center: Point,
    radius: f32,
    fill: Color,
}

impl Dot {
    pub fn new(center: Point, radius: f32, fill: Color) -> Self {
        Self {
            center,
            radius,
            fill,
        }
    }
}

impl Drawable for Dot {
    fn render_to_layers(&self) -> LayeredOutput {
        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", &self.fill)
            .set("fill-opacity", self.fill.alpha());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Nodes, Box::new(circle));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_renders_line_on_edge_layer() {
        let segment = Segment::new(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            StrokeDefinition::default(),
        );
        let nodes = segment.render_to_layers().render();

        assert_eq!(nodes.len(), 1);
        let svg = nodes[0].to_string();
        assert!(svg.contains("data-layer=\"edges\""));
        assert!(svg.contains("<line"));
        assert!(svg.contains("x2=\"3\""));
    }

    #[test]
    fn test_dot_renders_circle_on_node_layer() {
        let dot = Dot::new(Point::new(5.0, 6.0), 2.0, Color::new("red").unwrap());
        let svg = dot.render_to_layers().render()[0].to_string();

        assert!(svg.contains("data-layer=\"nodes\""));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("r=\"2\""));
    }
}
