use log::debug;

use gngplot_core::{
    color::Color,
    draw::{Dot, Drawable, Segment, StrokeDefinition},
    frame::GraphFrame,
    geometry::{Bounds, Insets, Point, Size, Viewport},
};

use super::{Renderer, SvgSurface, compose_document};
use crate::{GngplotError, RenderError, config::AppConfig, graph::FrameGraph};

/// Flat plot of a frame at its own node coordinates.
///
/// Edges are straight lines beneath node dots. Only nodes touched by an edge
/// are drawn and fitted to the canvas, and only the first two components of a
/// coordinate are used.
#[derive(Debug)]
pub struct Plot2d {
    surface: SvgSurface,
    canvas: Size,
    padding: Insets,
    background: Color,
    edge_stroke: StrokeDefinition,
    node_color: Color,
    node_radius: f32,
    drawables: Vec<Box<dyn Drawable>>,
}

impl Plot2d {
    /// Creates a 2D plotter styled by `config` that presents to `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`GngplotError::Config`] if a configured color or edge style
    /// is invalid.
    pub fn new(config: &AppConfig, surface: SvgSurface) -> Result<Self, GngplotError> {
        let plot = config.plot();
        let mut edge_stroke = StrokeDefinition::new(
            plot.edge_color().map_err(GngplotError::Config)?,
            plot.edge_width(),
        );
        edge_stroke.set_style(plot.edge_style().map_err(GngplotError::Config)?);

        Ok(Self {
            surface,
            canvas: config.canvas().size(),
            padding: config.canvas().padding(),
            background: plot.background_color().map_err(GngplotError::Config)?,
            edge_stroke,
            node_color: plot.node_color().map_err(GngplotError::Config)?,
            node_radius: plot.node_radius(),
            drawables: Vec::new(),
        })
    }

    pub fn surface(&self) -> &SvgSurface {
        &self.surface
    }

    /// Number of drawables built for the current frame
    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }
}

impl Renderer for Plot2d {
    fn clear(&mut self) {
        self.drawables.clear();
    }

    fn draw(&mut self, frame: &GraphFrame) -> Result<(), RenderError> {
        let graph = FrameGraph::from_frame(frame);

        let points = graph
            .nodes()
            .map(|id| {
                frame
                    .coordinate(id)
                    .map(|coordinate| coordinate.to_point())
                    .ok_or(RenderError::MissingNode(id))
            })
            .collect::<Result<Vec<Point>, _>>()?;

        let Some(bounds) = Bounds::from_points(points.iter().copied()) else {
            debug!("Frame has no edges, nothing to draw");
            return Ok(());
        };
        let viewport = Viewport::fit(bounds, self.canvas, self.padding);

        for (a, b) in graph.index_pairs() {
            self.drawables.push(Box::new(Segment::new(
                viewport.project(points[a]),
                viewport.project(points[b]),
                self.edge_stroke.clone(),
            )));
        }

        for point in points {
            self.drawables.push(Box::new(Dot::new(
                viewport.project(point),
                self.node_radius,
                self.node_color,
            )));
        }

        debug!(edges = graph.edge_count(), nodes = graph.node_count(); "Frame drawn");
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), RenderError> {
        let doc = compose_document(self.canvas, self.background, &self.drawables);
        self.surface.present(&doc)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::source::GraphFrameSource;

    fn frame(json: &str) -> GraphFrame {
        GraphFrameSource::from_reader(Cursor::new(json.to_string()))
            .read_document()
            .unwrap()
    }

    fn plot(dir: &tempfile::TempDir) -> Plot2d {
        let surface = SvgSurface::new(dir.path().join("plot.svg"));
        Plot2d::new(&AppConfig::default(), surface).unwrap()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_two_nodes_one_edge() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = plot(&dir);

        plot.render_frame(&frame(
            r#"{"nodes": {"a": [0,0], "b": [1,1]}, "edges": [["a","b"]]}"#,
        ))
        .unwrap();

        let svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();
        assert_eq!(count(&svg, "<line"), 1);
        assert_eq!(count(&svg, "<circle"), 2);
        assert!(svg.contains("stroke-opacity=\"0.5\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("data-layer=\"edges\""));
    }

    #[test]
    fn test_edge_shapes_render_identically() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = r#""nodes": {"a": [0,0], "b": [1,0], "c": [0,1]}"#;

        let mut as_list = plot(&dir);
        as_list
            .render_frame(&frame(&format!(r#"{{{nodes}, "edges": [["a","b"], ["b","c"]]}}"#)))
            .unwrap();
        let list_svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();

        let mut as_map = plot(&dir);
        as_map
            .render_frame(&frame(&format!(
                r#"{{{nodes}, "edges": {{"0": ["a","b"], "1": ["b","c"]}}}}"#
            )))
            .unwrap();
        let map_svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();

        assert_eq!(list_svg, map_svg);
    }

    #[test]
    fn test_missing_node_fails_without_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = plot(&dir);

        let err = plot
            .draw(&frame(r#"{"nodes": {"a": [0,0]}, "edges": [["a","ghost"]]}"#))
            .unwrap_err();

        assert!(matches!(err, RenderError::MissingNode(id) if id == "ghost"));
        assert_eq!(plot.drawable_count(), 0);
    }

    #[test]
    fn test_isolated_nodes_are_not_drawn() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = plot(&dir);

        plot.render_frame(&frame(
            r#"{"nodes": {"a": [0,0], "b": [1,1], "lonely": [100,100]}, "edges": [["a","b"]]}"#,
        ))
        .unwrap();

        let svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();
        assert_eq!(count(&svg, "<circle"), 2);

        // "b" sits at the far corner of the fitted area, not near "a"
        let canvas = AppConfig::default().canvas().size();
        let padding = AppConfig::default().canvas().padding();
        let far_x = canvas.width() - padding.right();
        assert!(svg.contains(&format!("cx=\"{far_x}\"")));
    }

    #[test]
    fn test_duplicate_edges_draw_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = plot(&dir);

        plot.draw(&frame(
            r#"{"nodes": {"a": [0,0], "b": [2,2], "c": [5,1]}, "edges": [["a","b"], ["b","a"]]}"#,
        ))
        .unwrap();

        // One edge segment and two dots
        assert_eq!(plot.drawable_count(), 3);
    }

    #[test]
    fn test_clear_drops_previous_frame() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = plot(&dir);

        plot.draw(&frame(r#"{"nodes": {"a": [0,0], "b": [1,1]}, "edges": [["a","b"]]}"#))
            .unwrap();
        plot.clear();
        plot.draw(&frame(r#"{"nodes": {"a": [0,0]}, "edges": [["a","a"]]}"#))
            .unwrap();

        // A self loop: one zero-length segment and one dot
        assert_eq!(plot.drawable_count(), 2);
    }

    #[test]
    fn test_empty_frame_presents_background_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut plot = plot(&dir);

        plot.render_frame(&frame(r#"{"nodes": {}, "edges": []}"#))
            .unwrap();

        let svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();
        assert!(svg.contains("<rect"));
        assert_eq!(count(&svg, "<circle"), 0);
        assert_eq!(plot.surface().presented(), 1);
    }

    #[test]
    fn test_dashed_edges() {
        let dir = tempfile::tempdir().unwrap();
        let config: AppConfig =
            serde_json::from_str(r#"{"plot": {"edge_style": "dashed"}}"#).unwrap();
        let mut plot = Plot2d::new(&config, SvgSurface::new(dir.path().join("plot.svg"))).unwrap();

        plot.render_frame(&frame(r#"{"nodes": {"a": [0,0], "b": [1,1]}, "edges": [["a","b"]]}"#))
            .unwrap();

        let svg = std::fs::read_to_string(dir.path().join("plot.svg")).unwrap();
        assert!(svg.contains("stroke-dasharray=\"5,5\""));
    }

    #[test]
    fn test_unknown_edge_style_is_config_error() {
        let config: AppConfig =
            serde_json::from_str(r#"{"plot": {"edge_style": "dashd"}}"#).unwrap();
        let err = Plot2d::new(&config, SvgSurface::new("unused.svg")).unwrap_err();
        assert!(matches!(err, GngplotError::Config(message) if message.contains("dashd")));
    }

    #[test]
    fn test_invalid_config_color_is_config_error() {
        let config: AppConfig =
            serde_json::from_str(r#"{"plot": {"edge_color": "not-a-color"}}"#).unwrap();
        let err = Plot2d::new(&config, SvgSurface::new("unused.svg")).unwrap_err();
        assert!(matches!(err, GngplotError::Config(_)));
    }
}
