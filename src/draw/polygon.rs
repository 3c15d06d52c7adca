//! Scanline fills for triangles and polygons.

use alloc::vec::Vec;

use super::Point;

/// How intersections on one scanline are paired into spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpanOrder {
    /// Pair intersections in the order the edges produced them.
    ///
    /// Matches the classic behaviour of this fill, but concave and
    /// self-intersecting polygons can pair the wrong intersections and
    /// paint outside the shape.
    #[default]
    EdgeOrder,
    /// Sort each scanline's intersections by x before pairing.
    SortedX,
}

/// Per-scanline x intersections of the closed polygon through `points`.
///
/// Every edge is walked from its lower-y endpoint to its higher-y endpoint
/// (both included), recording `trunc(x + 0.5)` where
/// `x = start.x + (y - start.y) * dx / dy`. Horizontal edges contribute
/// their start x once. Rows are returned top to bottom; rows no edge
/// touches are omitted.
///
/// One row is allocated per scanline the polygon spans. Drawing through
/// [`Draw`](super::Draw) only walks the rows inside the canvas.
pub fn scanline_intersections(points: &[Point], order: SpanOrder) -> Vec<(i32, Vec<i32>)> {
    // y stays between the vertex extremes, x between the edge endpoints
    edge_table(points, order, i64::MIN, i64::MAX)
        .into_iter()
        .map(|(y, xs)| (y as i32, xs.into_iter().map(|x| x as i32).collect()))
        .collect()
}

/// Intersections for the scanlines in `top..=bottom` only.
pub(crate) fn edge_table(
    points: &[Point],
    order: SpanOrder,
    top: i64,
    bottom: i64,
) -> Vec<(i64, Vec<i64>)> {
    let Some(min_y) = points.iter().map(|p| i64::from(p.y)).min() else {
        return Vec::new();
    };
    let max_y = points.iter().map(|p| i64::from(p.y)).max().unwrap_or(min_y);
    let (lo, hi) = (min_y.max(top), max_y.min(bottom));
    if lo > hi {
        return Vec::new();
    }
    let mut xs: Vec<Vec<i64>> = alloc::vec![Vec::new(); (hi - lo + 1) as usize];

    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        let (start, end) = if p1.y <= p2.y { (p1, p2) } else { (p2, p1) };
        let slope = slope(start, end);
        let (sx, sy) = (f64::from(start.x), i64::from(start.y));
        for y in sy.max(lo)..=i64::from(end.y).min(hi) {
            xs[(y - lo) as usize].push(round_half_up(sx + slope * (y - sy) as f64));
        }
    }

    xs.into_iter()
        .enumerate()
        .filter(|(_, row)| !row.is_empty())
        .map(|(i, mut row)| {
            if order == SpanOrder::SortedX {
                row.sort_unstable();
            }
            (lo + i as i64, row)
        })
        .collect()
}

/// Fill a triangle with horizontal spans, calling `span(y, xa, xb)` for each
/// row in `top..=bottom`.
///
/// Vertices are sorted by y. The long edge (top to bottom) is paired with
/// the top-to-middle edge above the middle vertex, and with the
/// middle-to-bottom edge from the middle row down. This third slope differs
/// from the two-slopes-from-the-top description of the classic fill, which
/// leaves the lower half skewed; here the lower half meets the bottom vertex.
/// Each x is computed from its edge's start rather than accumulated.
pub(crate) fn fill_triangle(
    p1: Point,
    p2: Point,
    p3: Point,
    top: i64,
    bottom: i64,
    mut span: impl FnMut(i64, i64, i64),
) {
    let mut v = [p1, p2, p3];
    v.sort_by_key(|p| p.y);
    let [first, mid, last] = v;
    let (ty, my, by) = (i64::from(first.y), i64::from(mid.y), i64::from(last.y));

    if ty == by {
        if (top..=bottom).contains(&ty) {
            let left = first.x.min(mid.x).min(last.x);
            let right = first.x.max(mid.x).max(last.x);
            span(ty, i64::from(left), i64::from(right));
        }
        return;
    }

    let long = slope(first, last);
    let upper = slope(first, mid);
    let lower = slope(mid, last);
    for y in ty.max(top)..=by.min(bottom) {
        let xa = f64::from(first.x) + long * (y - ty) as f64;
        let xb = if y < my {
            f64::from(first.x) + upper * (y - ty) as f64
        } else {
            f64::from(mid.x) + lower * (y - my) as f64
        };
        span(y, round_half_up(xa), round_half_up(xb));
    }
}

/// `dx / dy` from `a` to `b`; zero for horizontal edges.
fn slope(a: Point, b: Point) -> f64 {
    if a.y == b.y {
        0.0
    } else {
        (f64::from(b.x) - f64::from(a.x)) / (f64::from(b.y) - f64::from(a.y))
    }
}

/// `x + 0.5` truncated toward zero.
#[inline]
fn round_half_up(x: f64) -> i64 {
    (x + 0.5) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn square_intersections_in_edge_order() {
        let square = pts(&[(1, 1), (4, 1), (4, 3), (1, 3)]);
        let rows = scanline_intersections(&square, SpanOrder::EdgeOrder);
        assert_eq!(
            rows,
            [
                // top edge, right edge start, left edge end
                (1, alloc::vec![1, 4, 1]),
                (2, alloc::vec![4, 1]),
                (3, alloc::vec![4, 4, 1]),
            ]
        );
    }

    #[test]
    fn sorted_order_sorts_each_row() {
        let square = pts(&[(1, 1), (4, 1), (4, 3), (1, 3)]);
        let rows = scanline_intersections(&square, SpanOrder::SortedX);
        assert_eq!(rows[1], (2, alloc::vec![1, 4]));
        assert_eq!(rows[0], (1, alloc::vec![1, 1, 4]));
    }

    #[test]
    fn empty_polygon() {
        assert!(scanline_intersections(&[], SpanOrder::EdgeOrder).is_empty());
    }

    #[test]
    fn edge_table_window_limits_rows() {
        let tall = pts(&[(0, -2_000_000_000), (0, 2_000_000_000), (5, 0)]);
        let rows = edge_table(&tall, SpanOrder::EdgeOrder, 0, 3);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], (0, alloc::vec![0, 5, 5]));
        assert_eq!(rows[3], (3, alloc::vec![0, 5]));

        assert!(edge_table(&tall, SpanOrder::EdgeOrder, 2_000_000_001, i64::MAX).is_empty());
    }

    #[test]
    fn triangle_spans_cover_rows() {
        let mut spans = Vec::new();
        fill_triangle(
            Point::new(0, 0),
            Point::new(4, 4),
            Point::new(0, 4),
            i64::MIN,
            i64::MAX,
            |y, a, b| spans.push((y, a, b)),
        );
        assert_eq!(
            spans,
            [(0, 0, 0), (1, 0, 1), (2, 0, 2), (3, 0, 3), (4, 0, 4)]
        );
    }

    #[test]
    fn flat_top_triangle_starts_from_middle() {
        let mut spans = Vec::new();
        fill_triangle(
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(2, 2),
            i64::MIN,
            i64::MAX,
            |y, a, b| spans.push((y, a.min(b), a.max(b))),
        );
        assert_eq!(spans, [(0, 0, 4), (1, 1, 3), (2, 2, 2)]);
    }

    #[test]
    fn triangle_rows_are_windowed() {
        let mut rows = Vec::new();
        fill_triangle(
            Point::new(0, i32::MIN),
            Point::new(10, 0),
            Point::new(0, i32::MAX),
            -1,
            1,
            |y, _, _| rows.push(y),
        );
        assert_eq!(rows, [-1, 0, 1]);
    }
}
