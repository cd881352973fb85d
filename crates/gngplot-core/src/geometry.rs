//! Geometric primitives for plotting graph frames.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, either in data space or canvas space
//! - [`Point3`] - A 3D coordinate used by the 3D plotter
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box
//! - [`Insets`] - Padding values for four sides
//! - [`Viewport`] - Maps data-space bounds onto a canvas
//!
//! # Coordinate System
//!
//! Canvas space follows SVG: origin at the top-left corner, X increasing
//! rightward and Y increasing downward. Data space (the coordinates stored in
//! a frame) has Y increasing upward, as on a plot axis. [`Viewport`] performs
//! the flip.
//!
//! ```text
//!   data                 canvas
//!    +Y                  (0,0) ────► +X
//!     ▲                    │
//!     │                    │
//!     └────► +X            ▼ +Y
//! ```

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use gngplot_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let diff = p1.sub_point(p2);
/// assert_eq!(diff.x(), 5.0);
/// assert_eq!(diff.y(), 15.0);
/// assert_eq!(p2.scale(2.0), Point::new(10.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// A 3D point.
///
/// ```
/// # use gngplot_core::geometry::Point3;
/// let p = Point3::new(3.0, 4.0, 12.0);
/// assert_eq!(p.length(), 13.0);
/// assert_eq!(p.scale(2.0).z(), 24.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn z(self) -> f32 {
        self.z
    }

    pub fn add(self, other: Point3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Point3) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Euclidean length of the vector from the origin
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Largest absolute component
    pub fn max_abs(self) -> f32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Shrinks the size by the given insets, never below zero
    pub fn shrink(self, insets: Insets) -> Self {
        Self {
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }
}

/// An axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds covering exactly one point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    ///
    /// ```
    /// # use gngplot_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([Point::new(1.0, 5.0), Point::new(-2.0, 3.0)]).unwrap();
    /// assert_eq!(bounds.min_x(), -2.0);
    /// assert_eq!(bounds.max_y(), 5.0);
    /// assert!(Bounds::from_points(std::iter::empty()).is_none());
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |acc, point| acc.include(point)))
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grows the bounds to include the point
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Returns true when the point lies inside or on the edge of the bounds
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Padding values for the four sides of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on all four sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Sum of left and right padding
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom padding
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// Maps data-space coordinates onto a padded canvas.
///
/// Each axis is scaled independently so the data bounds fill the inner
/// canvas area, like an auto-scaled plot axis. An axis with zero extent is
/// centred instead of scaled. The Y axis is flipped so larger data Y values
/// appear higher on the canvas.
///
/// ```
/// # use gngplot_core::geometry::{Bounds, Insets, Point, Size, Viewport};
/// let data = Bounds::from_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
/// let viewport = Viewport::fit(data, Size::new(120.0, 120.0), Insets::uniform(10.0));
///
/// assert_eq!(viewport.project(Point::new(0.0, 0.0)), Point::new(10.0, 110.0));
/// assert_eq!(viewport.project(Point::new(1.0, 1.0)), Point::new(110.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    data_center: Point,
    canvas_center: Point,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    /// Builds a viewport that fits `data` into `canvas` minus `padding`
    pub fn fit(data: Bounds, canvas: Size, padding: Insets) -> Self {
        let inner = canvas.shrink(padding);
        let axis_scale = |extent: f32, room: f32| {
            if extent > f32::EPSILON {
                room / extent
            } else {
                0.0
            }
        };

        Self {
            data_center: data.center(),
            canvas_center: Point::new(
                padding.left() + inner.width() / 2.0,
                padding.top() + inner.height() / 2.0,
            ),
            scale_x: axis_scale(data.width(), inner.width()),
            scale_y: axis_scale(data.height(), inner.height()),
        }
    }

    /// Like [`fit`](Self::fit) but with one scale for both axes, so shapes
    /// keep their aspect ratio. The tighter axis decides the scale.
    pub fn fit_uniform(data: Bounds, canvas: Size, padding: Insets) -> Self {
        let mut viewport = Self::fit(data, canvas, padding);
        let scale = match (viewport.scale_x, viewport.scale_y) {
            (x, y) if x > 0.0 && y > 0.0 => x.min(y),
            (x, y) => x.max(y),
        };
        viewport.scale_x = scale;
        viewport.scale_y = scale;
        viewport
    }

    /// Converts a data-space point into canvas space
    pub fn project(&self, point: Point) -> Point {
        let offset = point.sub_point(self.data_center);
        Point::new(
            self.canvas_center.x() + offset.x() * self.scale_x,
            self.canvas_center.y() - offset.y() * self.scale_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_operations() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.scale(2.0), Point::new(6.0, 8.0));
        assert_eq!(p.sub_point(Point::new(1.0, 1.0)), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_point3_operations() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, -1.0, 2.0);
        assert_eq!(a.add(b), Point3::new(1.5, 1.0, 5.0));
        assert_eq!(a.sub(b), Point3::new(0.5, 3.0, 1.0));
        assert_eq!(b.max_abs(), 2.0);
    }

    #[test]
    fn test_size_shrink() {
        let size = Size::new(100.0, 50.0).shrink(Insets::new(5.0, 10.0, 5.0, 10.0));
        assert_eq!(size, Size::new(80.0, 40.0));

        let clamped = Size::new(10.0, 10.0).shrink(Insets::uniform(20.0));
        assert_eq!(clamped, Size::new(0.0, 0.0));
    }

    #[test]
    fn test_bounds_include_and_contains() {
        let bounds = Bounds::from_point(Point::new(0.0, 0.0)).include(Point::new(10.0, -5.0));

        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 5.0);
        assert!(bounds.contains(Point::new(5.0, -2.5)));
        assert!(!bounds.contains(Point::new(11.0, 0.0)));
        assert_eq!(bounds.center(), Point::new(5.0, -2.5));
    }

    #[test]
    fn test_viewport_degenerate_axis_is_centred() {
        let data = Bounds::from_points([Point::new(3.0, 1.0), Point::new(3.0, 2.0)]).unwrap();
        let viewport = Viewport::fit(data, Size::new(100.0, 100.0), Insets::uniform(0.0));

        let low = viewport.project(Point::new(3.0, 1.0));
        let high = viewport.project(Point::new(3.0, 2.0));
        assert_approx_eq!(f32, low.x(), 50.0);
        assert_approx_eq!(f32, high.x(), 50.0);
        assert_approx_eq!(f32, low.y(), 100.0);
        assert_approx_eq!(f32, high.y(), 0.0);
    }

    #[test]
    fn test_viewport_single_point() {
        let data = Bounds::from_point(Point::new(-7.0, 42.0));
        let viewport = Viewport::fit(data, Size::new(200.0, 100.0), Insets::uniform(10.0));
        assert_eq!(viewport.project(Point::new(-7.0, 42.0)), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_viewport_uniform_keeps_aspect_ratio() {
        let data = Bounds::from_points([Point::new(0.0, 0.0), Point::new(2.0, 1.0)]).unwrap();
        let viewport = Viewport::fit_uniform(data, Size::new(100.0, 100.0), Insets::uniform(0.0));

        let origin = viewport.project(Point::new(0.0, 0.0));
        let corner = viewport.project(Point::new(2.0, 1.0));
        assert_approx_eq!(f32, corner.x() - origin.x(), 100.0);
        assert_approx_eq!(f32, origin.y() - corner.y(), 50.0);
        assert_approx_eq!(f32, origin.y(), 75.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn grid_point_strategy() -> impl Strategy<Value = Point> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Point::new(x as f32, y as f32))
    }

    /// Including points in any order gives the same bounds.
    fn check_include_is_order_independent(points: Vec<Point>) -> Result<(), TestCaseError> {
        let forward = Bounds::from_points(points.iter().copied()).unwrap();
        let backward = Bounds::from_points(points.iter().rev().copied()).unwrap();

        prop_assert!(approx_eq!(f32, forward.min_x(), backward.min_x()));
        prop_assert!(approx_eq!(f32, forward.min_y(), backward.min_y()));
        prop_assert!(approx_eq!(f32, forward.max_x(), backward.max_x()));
        prop_assert!(approx_eq!(f32, forward.max_y(), backward.max_y()));
        Ok(())
    }

    /// Every point used to build the bounds is contained by them.
    fn check_from_points_contains_all(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_points(points.iter().copied()).unwrap();
        for point in points {
            prop_assert!(bounds.contains(point));
        }
        Ok(())
    }

    /// Projected data points land inside the padded canvas area.
    fn check_viewport_projects_inside_canvas(
        points: Vec<Point>,
        uniform: bool,
    ) -> Result<(), TestCaseError> {
        let data = Bounds::from_points(points.iter().copied()).unwrap();
        let canvas = Size::new(800.0, 600.0);
        let padding = Insets::uniform(20.0);
        let viewport = if uniform {
            Viewport::fit_uniform(data, canvas, padding)
        } else {
            Viewport::fit(data, canvas, padding)
        };

        for point in points {
            let projected = viewport.project(point);
            prop_assert!(projected.x() >= padding.left() - 0.01);
            prop_assert!(projected.x() <= canvas.width() - padding.right() + 0.01);
            prop_assert!(projected.y() >= padding.top() - 0.01);
            prop_assert!(projected.y() <= canvas.height() - padding.bottom() + 0.01);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn include_is_order_independent(points in prop::collection::vec(point_strategy(), 1..50)) {
            check_include_is_order_independent(points)?;
        }

        #[test]
        fn from_points_contains_all(points in prop::collection::vec(point_strategy(), 1..50)) {
            check_from_points_contains_all(points)?;
        }

        #[test]
        fn viewport_projects_inside_canvas(
            points in prop::collection::vec(grid_point_strategy(), 1..50),
            uniform in any::<bool>(),
        ) {
            check_viewport_projects_inside_canvas(points, uniform)?;
        }
    }
}
