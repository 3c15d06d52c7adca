use alloc::vec::Vec;

use super::Point;

/// Lattice points of the Bresenham line from `p1` to `p2`, in drawing order.
///
/// Both endpoints are included. Axis steps and diagonal steps follow the
/// classic error-term update: `2*err > -dy` steps x, `2*err < dx` steps y,
/// and both may fire in one iteration.
pub fn line_points(p1: Point, p2: Point) -> Vec<Point> {
    let dx = (p2.x - p1.x).unsigned_abs() as usize;
    let dy = (p2.y - p1.y).unsigned_abs() as usize;
    let mut pts = Vec::with_capacity(dx.max(dy) + 1);
    // every point lies between the two i32 endpoints
    for_each_line_point(p1.wide(), p2.wide(), |x, y| {
        pts.push(Point::new(x as i32, y as i32));
        true
    });
    pts
}

/// Walk the line in i64, calling `plot(x, y)` until it returns `false` or
/// the end point has been plotted.
pub(crate) fn for_each_line_point(
    (mut x, mut y): (i64, i64),
    (x2, y2): (i64, i64),
    mut plot: impl FnMut(i64, i64) -> bool,
) {
    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if !plot(x, y) || (x == x2 && y == y2) {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
