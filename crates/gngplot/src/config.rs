//! Configuration types for gngplot rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a configuration file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`CanvasConfig`] - Size and padding of the SVG canvas.
//! - [`PlotConfig`] - Edge and node styling of the 2D plot.
//! - [`Plot3dConfig`] - Layout, camera and styling of the 3D plot.
//! - [`PrintConfig`] - Pretty-printer options.
//!
//! # Example
//!
//! ```
//! # use gngplot::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.print().indent(), 1);
//! assert!(config.plot().node_color().is_ok());
//! ```

use serde::Deserialize;

use gngplot_core::{
    color::Color,
    colormap::Colormap,
    draw::{StrokeCap, StrokeStyle},
    geometry::{Insets, Size},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    plot: PlotConfig,

    #[serde(default)]
    plot3d: Plot3dConfig,

    #[serde(default)]
    print: PrintConfig,
}

impl AppConfig {
    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the 2D plot configuration.
    pub fn plot(&self) -> &PlotConfig {
        &self.plot
    }

    /// Returns the 3D plot configuration.
    pub fn plot3d(&self) -> &Plot3dConfig {
        &self.plot3d
    }

    /// Mutable access to the 3D plot configuration, for command-line overrides.
    pub fn plot3d_mut(&mut self) -> &mut Plot3dConfig {
        &mut self.plot3d
    }

    /// Returns the pretty-printer configuration.
    pub fn print(&self) -> &PrintConfig {
        &self.print
    }

    /// Mutable access to the pretty-printer configuration.
    pub fn print_mut(&mut self) -> &mut PrintConfig {
        &mut self.print
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    padding: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            padding: 20.0,
        }
    }
}

impl CanvasConfig {
    /// Full canvas size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Uniform padding between the canvas border and the plotted data
    pub fn padding(&self) -> Insets {
        Insets::uniform(self.padding)
    }
}

/// Styling of the 2D plot.
///
/// Defaults draw half-transparent black edges, two pixels wide, under small
/// red node dots on a white background.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    background_color: String,
    edge_color: String,
    edge_opacity: f32,
    edge_width: f32,
    edge_style: String,
    node_color: String,
    node_radius: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            edge_color: "black".to_string(),
            edge_opacity: 0.5,
            edge_width: 2.0,
            edge_style: "solid".to_string(),
            node_color: "red".to_string(),
            node_radius: 2.0,
        }
    }
}

impl PlotConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a CSS color.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background_color", &self.background_color)
    }

    /// Edge color with the configured opacity applied.
    pub fn edge_color(&self) -> Result<Color, String> {
        parse_color("edge_color", &self.edge_color)
            .map(|color| color.with_alpha(self.edge_opacity.clamp(0.0, 1.0)))
    }

    pub fn edge_width(&self) -> f32 {
        self.edge_width
    }

    /// Dash pattern of edges: `solid`, `dashed`, `dotted` or a dash pattern
    /// such as `10,5`
    pub fn edge_style(&self) -> Result<StrokeStyle, String> {
        self.edge_style
            .parse()
            .map_err(|err| format!("Invalid plot.edge_style in config: {err}"))
    }

    pub fn node_color(&self) -> Result<Color, String> {
        parse_color("node_color", &self.node_color)
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }
}

/// Where the 3D plot takes node positions from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSource {
    /// Compute a 3D spring layout; frame coordinates are ignored
    #[default]
    Spring,
    /// Use the frame coordinates, with `z = 0` for planar ones
    Frame,
}

/// Layout, camera and styling of the 3D plot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Plot3dConfig {
    layout: LayoutSource,
    iterations: usize,
    seed: Option<u64>,
    azimuth: f32,
    elevation: f32,
    background_color: String,
    tube_color: String,
    tube_width: f32,
    tube_cap: String,
    point_radius: f32,
    colormap: Colormap,
}

impl Default for Plot3dConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSource::Spring,
            iterations: 50,
            seed: None,
            azimuth: 45.0,
            elevation: 30.0,
            background_color: "black".to_string(),
            tube_color: "rgb(204, 204, 204)".to_string(),
            tube_width: 1.5,
            tube_cap: "round".to_string(),
            point_radius: 3.0,
            colormap: Colormap::Blues,
        }
    }
}

impl Plot3dConfig {
    pub fn layout(&self) -> LayoutSource {
        self.layout
    }

    /// Number of spring layout iterations
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Seed for the spring layout's initial positions; `None` draws from the OS
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Camera rotation around the vertical axis, in degrees
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Camera tilt above the horizontal plane, in degrees
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("plot3d.background_color", &self.background_color)
    }

    pub fn tube_color(&self) -> Result<Color, String> {
        parse_color("plot3d.tube_color", &self.tube_color)
    }

    pub fn tube_width(&self) -> f32 {
        self.tube_width
    }

    /// Line cap of tube ends: `butt`, `round` or `square`
    pub fn tube_cap(&self) -> Result<StrokeCap, String> {
        self.tube_cap
            .parse()
            .map_err(|err| format!("Invalid plot3d.tube_cap in config: {err}"))
    }

    pub fn point_radius(&self) -> f32 {
        self.point_radius
    }

    pub fn colormap(&self) -> Colormap {
        self.colormap
    }
}

/// Pretty-printer options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    indent: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self { indent: 1 }
    }
}

impl PrintConfig {
    /// Spaces per indentation level
    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }
}
