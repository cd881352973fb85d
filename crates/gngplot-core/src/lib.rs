//! gngplot Core Types and Definitions
//!
//! This crate provides the foundational types shared by the gngplot
//! renderers. It includes:
//!
//! - **Frames**: The decoded graph snapshot ([`frame::GraphFrame`])
//! - **Identifiers**: String-interned node identifiers ([`identifier::NodeId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Colormaps**: Scalar-to-color mapping ([`colormap::Colormap`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable primitives and layered SVG output ([`draw`] module)

pub mod color;
pub mod colormap;
pub mod draw;
pub mod frame;
pub mod geometry;
pub mod identifier;
