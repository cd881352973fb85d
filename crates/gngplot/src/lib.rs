//! gngplot - Read JSON graph frames and plot them.
//!
//! A graph frame is a JSON object with a `nodes` map of coordinates and an
//! `edges` collection of node pairs. Frames can be pretty-printed, plotted in
//! 2D at their own coordinates, plotted in 3D with a spring layout, or read
//! one per line and animated onto an SVG file that is replaced in place.

pub mod config;
pub mod render;
pub mod source;

mod animate;
mod error;
mod graph;
mod layout;

pub use gngplot_core::{color, colormap, frame, geometry, identifier};

pub use animate::Animator;
pub use error::{GngplotError, RenderError};
pub use graph::FrameGraph;
pub use layout::SpringLayout;

use std::{io::Write, path::Path};

use log::{debug, info};

use config::AppConfig;
use frame::FrameSummary;
use render::{Plot2d, Plot3d, PrettyPrinter, Renderer, SvgSurface};
use source::GraphFrameSource;

/// Entry point tying sources, renderers and configuration together.
///
/// # Examples
///
/// ```rust,no_run
/// use gngplot::{Gngplot, config::AppConfig, source::GraphFrameSource};
///
/// let gngplot = Gngplot::new(AppConfig::default());
///
/// let source = GraphFrameSource::open(Some("graph.json")).expect("Failed to open");
/// let summary = gngplot.plot(source, "graph.svg").expect("Failed to plot");
/// println!("{summary}");
/// ```
#[derive(Debug, Default)]
pub struct Gngplot {
    config: AppConfig,
}

impl Gngplot {
    /// Create a new instance with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pretty-print the whole document read from `source` into `out`.
    ///
    /// Any JSON document is accepted; the `nodes` and `edges` keys are not
    /// required.
    ///
    /// # Errors
    ///
    /// Returns `GngplotError::MalformedFrame` if the input is not JSON, or
    /// `GngplotError::Io` if reading or writing fails.
    pub fn print(&self, source: GraphFrameSource, out: &mut dyn Write) -> Result<(), GngplotError> {
        info!(origin = source.origin().to_string(); "Pretty-printing document");
        let value = source.read_value()?;
        PrettyPrinter::new(self.config.print()).print(&value, out)
    }

    /// Plot the single frame read from `source` in 2D and write it to `output`.
    ///
    /// # Errors
    ///
    /// Returns `GngplotError::MalformedFrame` for an invalid frame and
    /// `GngplotError::Render` if an edge names a node without coordinates or
    /// the SVG cannot be written.
    pub fn plot(
        &self,
        source: GraphFrameSource,
        output: impl AsRef<Path>,
    ) -> Result<FrameSummary, GngplotError> {
        info!(origin = source.origin().to_string(); "Plotting frame in 2D");
        let frame = source.read_document()?;

        let mut plot = Plot2d::new(&self.config, SvgSurface::new(output.as_ref()))?;
        plot.render_frame(&frame)?;
        info!(output = output.as_ref().display().to_string(); "2D plot written");

        Ok(frame.summary())
    }

    /// Plot the single frame read from `source` in 3D and write it to `output`.
    ///
    /// # Errors
    ///
    /// Same as [`plot`](Self::plot).
    pub fn plot3d(
        &self,
        source: GraphFrameSource,
        output: impl AsRef<Path>,
    ) -> Result<FrameSummary, GngplotError> {
        info!(origin = source.origin().to_string(); "Plotting frame in 3D");
        let frame = source.read_document()?;

        let mut plot = Plot3d::new(&self.config, SvgSurface::new(output.as_ref()))?;
        plot.render_frame(&frame)?;
        info!(output = output.as_ref().display().to_string(); "3D plot written");

        Ok(frame.summary())
    }

    /// Animate the line-delimited frames of `source` onto `output`.
    ///
    /// Returns the number of frames rendered. The stream ends quietly at the
    /// first line that is not a complete frame.
    ///
    /// # Errors
    ///
    /// Returns the first read or render error.
    pub fn animate(
        &self,
        source: GraphFrameSource,
        output: impl AsRef<Path>,
    ) -> Result<usize, GngplotError> {
        info!(origin = source.origin().to_string(); "Animating frame stream");
        let mut plot = Plot2d::new(&self.config, SvgSurface::new(output.as_ref()))?;

        let rendered = Animator::new().run(source.frames(), &mut plot)?;
        debug!(presented = plot.surface().presented(); "Surface presents");

        Ok(rendered)
    }
}
