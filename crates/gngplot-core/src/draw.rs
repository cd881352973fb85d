//! Drawable primitives for plot rendering.
//!
//! Renderers turn a frame into a list of drawables, which emit SVG nodes into
//! a [`LayeredOutput`] so edges always end up beneath nodes regardless of the
//! order they were built in.

mod layer;
mod primitive;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Dot, Segment};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};

/// Something that can render itself into layered SVG output.
pub trait Drawable: std::fmt::Debug {
    fn render_to_layers(&self) -> LayeredOutput;
}
