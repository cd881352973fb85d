//! Frame rendering.
//!
//! A [`Renderer`] turns one [`GraphFrame`] at a time into an image following
//! a three step protocol: [`clear`](Renderer::clear) the previous frame,
//! [`draw`](Renderer::draw) the new one and [`refresh`](Renderer::refresh)
//! the display. The SVG plotters present to an [`SvgSurface`].

mod plot2d;
mod plot3d;
mod printer;
mod surface;

pub use plot2d::Plot2d;
pub use plot3d::Plot3d;
pub use printer::PrettyPrinter;
pub use surface::SvgSurface;

use svg::{Document, node::element as svg_element};

use gngplot_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    frame::GraphFrame,
    geometry::Size,
};

use crate::RenderError;

/// The plotting collaborator driven once per frame.
pub trait Renderer {
    /// Drops everything drawn for the previous frame.
    fn clear(&mut self);

    /// Builds the drawables for `frame`.
    ///
    /// # Errors
    ///
    /// Fails if the frame cannot be drawn, e.g. an edge names a node without
    /// a coordinate. Nothing from `frame` is kept in that case.
    fn draw(&mut self, frame: &GraphFrame) -> Result<(), RenderError>;

    /// Pushes the current drawables to the display.
    fn refresh(&mut self) -> Result<(), RenderError>;

    /// Runs clear, draw and refresh for one frame.
    fn render_frame(&mut self, frame: &GraphFrame) -> Result<(), RenderError> {
        self.clear();
        self.draw(frame)?;
        self.refresh()
    }
}

/// Builds a full-canvas SVG document with the drawables layered on top of a
/// background fill.
fn compose_document(canvas: Size, background: Color, drawables: &[Box<dyn Drawable>]) -> Document {
    let mut output = LayeredOutput::new();

    let fill = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", canvas.width())
        .set("height", canvas.height())
        .set("fill", &background);
    output.add_to_layer(RenderLayer::Background, Box::new(fill));

    for drawable in drawables {
        output.merge(drawable.render_to_layers());
    }

    output.render().into_iter().fold(
        Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height()),
        |doc, node| doc.add(node),
    )
}
