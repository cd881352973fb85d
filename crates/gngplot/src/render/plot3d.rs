use log::debug;

use gngplot_core::{
    color::Color,
    colormap::Colormap,
    draw::{Dot, Drawable, Segment, StrokeDefinition},
    frame::GraphFrame,
    geometry::{Bounds, Insets, Point, Point3, Size, Viewport},
};

use super::{Renderer, SvgSurface, compose_document};
use crate::{
    GngplotError, RenderError,
    config::{AppConfig, LayoutSource},
    graph::FrameGraph,
    layout::SpringLayout,
};

/// Orthographic camera orbiting the origin.
#[derive(Debug, Clone, Copy)]
struct Camera {
    azimuth: f32,
    elevation: f32,
}

impl Camera {
    fn new(azimuth_degrees: f32, elevation_degrees: f32) -> Self {
        Self {
            azimuth: azimuth_degrees.to_radians(),
            elevation: elevation_degrees.to_radians(),
        }
    }

    /// Screen position (y up) and closeness to the viewer of a scene point.
    ///
    /// The scene is turned by the azimuth around the z axis and then tilted
    /// by the elevation, so an elevation of 90 degrees looks straight down.
    fn project(&self, point: Point3) -> (Point, f32) {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();

        let x = point.x() * cos_az + point.y() * sin_az;
        let y = -point.x() * sin_az + point.y() * cos_az;

        let up = y * sin_el + point.z() * cos_el;
        let closeness = -y * cos_el + point.z() * sin_el;

        (Point::new(x, up), closeness)
    }
}

/// Tube-and-point plot of a frame in three dimensions.
///
/// By default node positions come from a spring layout of the graph and the
/// frame coordinates are ignored. Points are colored along a colormap by
/// vertex index and painted back to front.
#[derive(Debug)]
pub struct Plot3d {
    surface: SvgSurface,
    canvas: Size,
    padding: Insets,
    background: Color,
    tube_stroke: StrokeDefinition,
    point_radius: f32,
    colormap: Colormap,
    layout_source: LayoutSource,
    layout: SpringLayout,
    camera: Camera,
    drawables: Vec<Box<dyn Drawable>>,
}

impl Plot3d {
    /// Creates a 3D plotter styled by `config` that presents to `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`GngplotError::Config`] if a configured color is invalid.
    pub fn new(config: &AppConfig, surface: SvgSurface) -> Result<Self, GngplotError> {
        let plot3d = config.plot3d();

        let mut tube_stroke = StrokeDefinition::new(
            plot3d.tube_color().map_err(GngplotError::Config)?,
            plot3d.tube_width(),
        );
        tube_stroke.set_cap(plot3d.tube_cap().map_err(GngplotError::Config)?);

        let mut layout = SpringLayout::new();
        layout
            .set_iterations(plot3d.iterations())
            .set_seed(plot3d.seed());

        Ok(Self {
            surface,
            canvas: config.canvas().size(),
            padding: config.canvas().padding(),
            background: plot3d.background_color().map_err(GngplotError::Config)?,
            tube_stroke,
            point_radius: plot3d.point_radius(),
            colormap: plot3d.colormap(),
            layout_source: plot3d.layout(),
            layout,
            camera: Camera::new(plot3d.azimuth(), plot3d.elevation()),
            drawables: Vec::new(),
        })
    }

    pub fn surface(&self) -> &SvgSurface {
        &self.surface
    }

    fn positions(&self, frame: &GraphFrame, graph: &FrameGraph) -> Result<Vec<Point3>, RenderError> {
        match self.layout_source {
            LayoutSource::Spring => Ok(self.layout.calculate(graph)),
            LayoutSource::Frame => graph
                .nodes()
                .map(|id| {
                    frame
                        .coordinate(id)
                        .map(|coordinate| coordinate.to_point3())
                        .ok_or(RenderError::MissingNode(id))
                })
                .collect(),
        }
    }
}

impl Renderer for Plot3d {
    fn clear(&mut self) {
        self.drawables.clear();
    }

    fn draw(&mut self, frame: &GraphFrame) -> Result<(), RenderError> {
        let graph = FrameGraph::from_frame(frame);
        let positions = self.positions(frame, &graph)?;

        let projected: Vec<(Point, f32)> = positions
            .iter()
            .map(|&position| self.camera.project(position))
            .collect();
        let Some(bounds) = Bounds::from_points(projected.iter().map(|&(screen, _)| screen)) else {
            debug!("Frame has no vertices, nothing to draw");
            return Ok(());
        };
        let viewport = Viewport::fit_uniform(bounds, self.canvas, self.padding);

        let mut tubes: Vec<(f32, Segment)> = graph
            .index_pairs()
            .map(|(a, b)| {
                let (from, from_depth) = projected[a];
                let (to, to_depth) = projected[b];
                let segment = Segment::new(
                    viewport.project(from),
                    viewport.project(to),
                    self.tube_stroke.clone(),
                );
                ((from_depth + to_depth) / 2.0, segment)
            })
            .collect();
        tubes.sort_by(|a, b| a.0.total_cmp(&b.0));

        let scalars: Vec<f32> = (0..projected.len()).map(|index| (index + 5) as f32).collect();
        let colors = self.colormap.map_scalars(&scalars);

        let mut points: Vec<(f32, Dot)> = projected
            .iter()
            .zip(colors)
            .map(|(&(screen, depth), color)| {
                (depth, Dot::new(viewport.project(screen), self.point_radius, color))
            })
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        self.drawables
            .extend(tubes.into_iter().map(|(_, tube)| Box::new(tube) as Box<dyn Drawable>));
        self.drawables
            .extend(points.into_iter().map(|(_, point)| Box::new(point) as Box<dyn Drawable>));

        debug!(vertices = projected.len(), tubes = graph.edge_count(); "Frame drawn in 3D");
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), RenderError> {
        let doc = compose_document(self.canvas, self.background, &self.drawables);
        self.surface.present(&doc)
    }
}
