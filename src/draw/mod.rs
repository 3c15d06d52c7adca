//! Raster engine: lines, rectangles, circles, triangles and polygons.
//!
//! Every primitive writes through [`Canvas::paint`], which silently clips
//! coordinates outside the image, so drawing never fails. Use
//! [`Image::set`](crate::Image::set) for bounds-checked single pixels.
//!
//! ```
//! use zenpbm::draw::{Draw, Point};
//! use zenpbm::{Encoding, Graymap};
//!
//! let mut img = Graymap::new(4, 4, Encoding::Binary)?;
//! img.draw_line(Point::new(0, 0), Point::new(3, 3), 255);
//! assert_eq!(img.get(2, 2)?, 255);
//! assert_eq!(img.get(2, 1)?, 0);
//! # Ok::<(), zenpbm::PnmError>(())
//! ```

mod circle;
mod line;
mod polygon;

pub use circle::circle_points;
pub use line::line_points;
pub use polygon::{SpanOrder, scanline_intersections};

use crate::buffer::PixelBuffer;
use crate::image::Image;
use crate::pixel::Sample;

/// Integer lattice point; only used as raster input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates widened for overflow-free raster arithmetic.
    #[inline]
    pub(crate) fn wide(self) -> (i64, i64) {
        (i64::from(self.x), i64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A surface the raster engine can write to.
pub trait Canvas {
    type Color: Copy;

    /// `(width, height)` of the paintable area.
    fn dimensions(&self) -> (usize, usize);

    /// Set `(x, y)` to `color`; a no-op outside the surface.
    fn paint(&mut self, x: i32, y: i32, color: Self::Color);
}

impl<T: Copy> Canvas for PixelBuffer<T> {
    type Color = T;

    fn dimensions(&self) -> (usize, usize) {
        self.size()
    }

    #[inline]
    fn paint(&mut self, x: i32, y: i32, color: T) {
        PixelBuffer::paint(self, x, y, color);
    }
}

/// Images clamp the color to their max value before writing.
impl<S: Sample> Canvas for Image<S> {
    type Color = S;

    fn dimensions(&self) -> (usize, usize) {
        self.size()
    }

    #[inline]
    fn paint(&mut self, x: i32, y: i32, color: S) {
        self.paint_clamped(x, y, color);
    }
}

/// Drawing primitives, available on every [`Canvas`].
///
/// Geometry is evaluated in `i64`, so any `i32` input is accepted. Fills are
/// clipped to the canvas before they are walked.
pub trait Draw: Canvas {
    /// Bresenham line from `p1` to `p2`, both endpoints included.
    fn draw_line(&mut self, p1: Point, p2: Point, color: Self::Color) {
        segment(self, p1.wide(), p2.wide(), color);
    }

    /// Outline with corners `corner`, `corner + (width, 0)`,
    /// `corner + (width, height)` and `corner + (0, height)`.
    fn draw_rectangle(&mut self, corner: Point, width: i32, height: i32, color: Self::Color) {
        let (x, y) = corner.wide();
        let (x2, y2) = (x + i64::from(width), y + i64::from(height));
        segment(self, (x, y), (x2, y), color);
        segment(self, (x2, y), (x2, y2), color);
        segment(self, (x2, y2), (x, y2), color);
        segment(self, (x, y2), (x, y), color);
    }

    /// Fill every cell with `x` in `[corner.x, corner.x + width)` and `y` in
    /// `[corner.y, corner.y + height)`. Non-positive sizes draw nothing.
    fn draw_filled_rectangle(&mut self, corner: Point, width: i32, height: i32, color: Self::Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (x, y) = corner.wide();
        let (_, rows) = extent(self);
        for yi in y.max(0)..(y + i64::from(height)).min(rows) {
            fill_row(self, yi, x, x + i64::from(width) - 1, color);
        }
    }

    /// Sampled circle outline; see [`circle_points`]. Negative radius is a no-op.
    fn draw_circle(&mut self, center: Point, radius: i32, color: Self::Color) {
        if !circle_visible(self, center, radius) {
            return;
        }
        circle::for_each_circle_point(center, radius, |x, y| plot(self, x, y, color));
    }

    /// Approximate disk: the center, plus for each sampled edge point the
    /// horizontal and vertical runs toward the center, mirrored across it.
    fn draw_filled_circle(&mut self, center: Point, radius: i32, color: Self::Color) {
        if !circle_visible(self, center, radius) {
            return;
        }
        let (cx, cy) = center.wide();
        plot(self, cx, cy, color);
        circle::for_each_circle_point(center, radius, |x, y| {
            if x < cx {
                fill_row(self, y, x, cx - 1, color);
                fill_row(self, y, cx + 1, 2 * cx - x, color);
            }
            if y < cy {
                fill_column(self, x, y, cy - 1, color);
                fill_column(self, x, cy + 1, 2 * cy - y, color);
            }
        });
    }

    fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Self::Color) {
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p3, color);
        self.draw_line(p3, p1, color);
    }

    /// Scanline triangle fill between the interpolated edges.
    fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Self::Color) {
        let (_, rows) = extent(self);
        polygon::fill_triangle(p1, p2, p3, 0, rows - 1, |y, a, b| {
            fill_row(self, y, a.min(b), a.max(b), color);
        });
    }

    /// Closed outline through `points`, last vertex joined to the first.
    fn draw_polygon(&mut self, points: &[Point], color: Self::Color) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color);
        }
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            self.draw_line(last, first, color);
        }
    }

    /// Even-odd scanline fill, pairing intersections in edge order.
    ///
    /// Same as `draw_filled_polygon_with(points, color, SpanOrder::EdgeOrder)`.
    fn draw_filled_polygon(&mut self, points: &[Point], color: Self::Color) {
        self.draw_filled_polygon_with(points, color, SpanOrder::EdgeOrder);
    }

    /// Even-odd scanline fill with an explicit intersection ordering.
    ///
    /// Only scanlines inside the canvas are computed.
    fn draw_filled_polygon_with(&mut self, points: &[Point], color: Self::Color, order: SpanOrder) {
        let (_, rows) = extent(self);
        for (y, xs) in polygon::edge_table(points, order, 0, rows - 1) {
            for pair in xs.chunks_exact(2) {
                fill_row(self, y, pair[0].min(pair[1]), pair[0].max(pair[1]), color);
            }
        }
    }
}

impl<C: Canvas + ?Sized> Draw for C {}

fn extent<C: Canvas + ?Sized>(canvas: &C) -> (i64, i64) {
    let (w, h) = canvas.dimensions();
    (
        i64::try_from(w).unwrap_or(i64::MAX),
        i64::try_from(h).unwrap_or(i64::MAX),
    )
}

/// Narrow to `i32` and paint; coordinates beyond `i32` are off every canvas.
#[inline]
fn plot<C: Canvas + ?Sized>(canvas: &mut C, x: i64, y: i64, color: C::Color) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        canvas.paint(x, y, color);
    }
}

/// Paint `x1..=x2` on row `y`, clipped to the canvas.
fn fill_row<C: Canvas + ?Sized>(canvas: &mut C, y: i64, x1: i64, x2: i64, color: C::Color) {
    let (w, h) = extent(canvas);
    if !(0..h).contains(&y) {
        return;
    }
    for x in x1.max(0)..=x2.min(w - 1) {
        plot(canvas, x, y, color);
    }
}

/// Paint `y1..=y2` on column `x`, clipped to the canvas.
fn fill_column<C: Canvas + ?Sized>(canvas: &mut C, x: i64, y1: i64, y2: i64, color: C::Color) {
    let (w, h) = extent(canvas);
    if !(0..w).contains(&x) {
        return;
    }
    for y in y1.max(0)..=y2.min(h - 1) {
        plot(canvas, x, y, color);
    }
}

/// Bresenham segment. Segments missing the canvas are skipped, axis-aligned
/// ones are clipped directly, and the walk stops once it has left the canvas
/// in its direction of travel.
fn segment<C: Canvas + ?Sized>(
    canvas: &mut C,
    (x1, y1): (i64, i64),
    (x2, y2): (i64, i64),
    color: C::Color,
) {
    let (w, h) = extent(canvas);
    if x1.max(x2) < 0 || y1.max(y2) < 0 || x1.min(x2) >= w || y1.min(y2) >= h {
        return;
    }
    if y1 == y2 {
        fill_row(canvas, y1, x1.min(x2), x1.max(x2), color);
        return;
    }
    if x1 == x2 {
        fill_column(canvas, x1, y1.min(y2), y1.max(y2), color);
        return;
    }
    let (sx, sy) = ((x2 - x1).signum(), (y2 - y1).signum());
    line::for_each_line_point((x1, y1), (x2, y2), |x, y| {
        let past = (sx > 0 && x >= w) || (sx < 0 && x < 0) || (sy > 0 && y >= h) || (sy < 0 && y < 0);
        if !past {
            plot(canvas, x, y, color);
        }
        !past
    });
}

/// Whether any sampled circle point can land on the canvas.
fn circle_visible<C: Canvas + ?Sized>(canvas: &C, center: Point, radius: i32) -> bool {
    if radius < 0 {
        return false;
    }
    let (w, h) = extent(canvas);
    let ((cx, cy), r) = (center.wide(), i64::from(radius));
    cx + r >= 0 && cy + r >= 0 && cx - r < w && cy - r < h
}
