use zenpbm::draw::{Draw, Point, SpanOrder, circle_points, line_points, scanline_intersections};
use zenpbm::*;

fn ink(img: &Bitmap) -> Vec<(usize, usize)> {
    let (w, h) = img.size();
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if img.get(x, y).unwrap() {
                out.push((x, y));
            }
        }
    }
    out
}

fn canvas(w: usize, h: usize) -> Bitmap {
    Bitmap::new(w, h, Encoding::Ascii).unwrap()
}

#[test]
fn diagonal_line_on_4x4() {
    let mut img = canvas(4, 4);
    img.draw_line(Point::new(0, 0), Point::new(3, 3), true);
    assert_eq!(ink(&img), [(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn line_points_include_endpoints() {
    let pts = line_points(Point::new(5, 2), Point::new(-1, 0));
    assert_eq!(pts.first(), Some(&Point::new(5, 2)));
    assert_eq!(pts.last(), Some(&Point::new(-1, 0)));
    assert_eq!(pts.len(), 7);
}

#[test]
fn filled_rectangle_covers_width_by_height() {
    let mut img = canvas(5, 5);
    img.draw_filled_rectangle(Point::new(0, 0), 3, 2, true);
    assert_eq!(ink(&img), [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn rectangle_outline_reaches_far_corner() {
    let mut img = canvas(5, 5);
    img.draw_rectangle(Point::new(1, 1), 2, 2, true);
    let cells = ink(&img);
    assert_eq!(cells.len(), 8);
    assert!(cells.contains(&(3, 3)));
    assert!(!cells.contains(&(2, 2)));
}

#[test]
fn drawing_clips_but_set_does_not() {
    let mut img = canvas(3, 3);
    img.draw_line(Point::new(-5, 1), Point::new(10, 1), true);
    assert_eq!(ink(&img), [(0, 1), (1, 1), (2, 1)]);

    img.draw_filled_rectangle(Point::new(100, 100), 5, 5, true);
    assert_eq!(ink(&img).len(), 3);

    assert!(matches!(img.set(3, 0, true), Err(PnmError::OutOfBounds { .. })));
}

#[test]
fn circle_outline_is_symmetric_enough() {
    let c = Point::new(10, 10);
    let pts = circle_points(c, 6);
    assert!(pts.contains(&Point::new(16, 10)));
    assert!(pts.contains(&Point::new(10, 16)));
    assert!(pts.contains(&Point::new(4, 10)));
    assert!(pts.contains(&Point::new(10, 4)));

    let mut img = canvas(21, 21);
    img.draw_circle(c, 6, true);
    assert!(!img.get(10, 10).unwrap());
    assert!(img.get(16, 10).unwrap());
}

#[test]
fn filled_circle_covers_center_and_axes() {
    let mut img = Graymap::new(21, 21, Encoding::Binary).unwrap();
    img.draw_filled_circle(Point::new(10, 10), 5, 200);
    for d in 0..=4 {
        assert_eq!(img.get(10 + d, 10).unwrap(), 200, "+x {d}");
        assert_eq!(img.get(10 - d, 10).unwrap(), 200, "-x {d}");
        assert_eq!(img.get(10, 10 + d).unwrap(), 200, "+y {d}");
        assert_eq!(img.get(10, 10 - d).unwrap(), 200, "-y {d}");
    }
    assert_eq!(img.get(0, 0).unwrap(), 0);
    assert_eq!(img.get(18, 10).unwrap(), 0);
}

#[test]
fn negative_radius_draws_nothing() {
    let mut img = canvas(5, 5);
    img.draw_circle(Point::new(2, 2), -3, true);
    img.draw_filled_circle(Point::new(2, 2), -3, true);
    assert!(ink(&img).is_empty());
}

#[test]
fn filled_triangle_is_solid() {
    let mut img = canvas(6, 6);
    img.draw_filled_triangle(Point::new(0, 0), Point::new(4, 4), Point::new(0, 4), true);
    for y in 0..=4usize {
        for x in 0..=4usize {
            assert_eq!(img.get(x, y).unwrap(), x <= y, "({x}, {y})");
        }
    }
}

#[test]
fn triangle_outline_vertex_order_irrelevant() {
    let mut a = canvas(8, 8);
    let mut b = canvas(8, 8);
    let (p, q, r) = (Point::new(1, 1), Point::new(6, 2), Point::new(3, 6));
    a.draw_triangle(p, q, r, true);
    b.draw_triangle(r, p, q, true);
    assert_eq!(ink(&a).len(), ink(&b).len());
    assert!(a.get(1, 1).unwrap() && a.get(6, 2).unwrap() && a.get(3, 6).unwrap());
}

#[test]
fn filled_diamond_between_vertex_rows() {
    let diamond = [Point::new(3, 0), Point::new(6, 3), Point::new(3, 6), Point::new(0, 3)];
    for order in [SpanOrder::EdgeOrder, SpanOrder::SortedX] {
        let mut img = canvas(7, 7);
        img.draw_filled_polygon_with(&diamond, true, order);
        for (y, lo, hi) in [(1, 2, 4), (2, 1, 5), (4, 1, 5), (5, 2, 4)] {
            for x in 0..7usize {
                assert_eq!(img.get(x, y).unwrap(), (lo..=hi).contains(&x), "{order:?} ({x}, {y})");
            }
        }
        assert!(img.get(3, 0).unwrap() && img.get(3, 6).unwrap());
    }
}

#[test]
fn default_fill_pairs_in_edge_order() {
    let diamond = [Point::new(3, 0), Point::new(6, 3), Point::new(3, 6), Point::new(0, 3)];
    let mut a = canvas(7, 7);
    let mut b = canvas(7, 7);
    a.draw_filled_polygon(&diamond, true);
    b.draw_filled_polygon_with(&diamond, true, SpanOrder::EdgeOrder);
    assert_eq!(a, b);
}

#[test]
fn polygon_outline_closes() {
    let mut img = canvas(5, 5);
    img.draw_polygon(&[Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)], true);
    assert!(img.get(0, 2).unwrap());
    assert!(img.get(2, 2).unwrap());
    assert!(img.get(2, 0).unwrap());
    img.draw_polygon(&[], true);
}

#[test]
fn intersections_follow_edges() {
    let tri = [Point::new(0, 0), Point::new(4, 4), Point::new(0, 4)];
    let rows = scanline_intersections(&tri, SpanOrder::SortedX);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2], (2, vec![0, 2]));
}

#[test]
fn draw_on_pixel_buffer() {
    let mut buf: PixelBuffer<u16> = PixelBuffer::new(4, 4).unwrap();
    buf.draw_line(Point::new(0, 3), Point::new(3, 3), 1000);
    assert_eq!(buf.row(3), &[1000, 1000, 1000, 1000]);
}

#[test]
fn image_canvas_clamps_to_max_value() {
    let mut img = Graymap::decode(b"P2\n2 1\n9\n0 0\n").unwrap();
    img.draw_line(Point::new(0, 0), Point::new(1, 0), 200);
    assert_eq!(img.pixels().as_slice(), &[9, 9]);
    assert_eq!(img.encode().unwrap(), b"P2\n2 1\n9\n9 9\n");
}

#[test]
fn far_geometry_clips_without_overflow() {
    let mut img = canvas(4, 4);
    img.draw_filled_circle(Point::new(2_000_000_000, 0), 3, true);
    img.draw_circle(Point::new(i32::MIN, i32::MAX), i32::MAX, true);
    img.draw_rectangle(Point::new(i32::MAX - 1, 0), 5, 5, true);
    img.draw_filled_rectangle(Point::new(i32::MAX - 1, i32::MAX - 1), i32::MAX, i32::MAX, true);
    img.draw_line(Point::new(i32::MIN, -1), Point::new(i32::MAX, -1), true);
    assert!(ink(&img).is_empty());

    // huge outline whose left and top edges cross the canvas
    img.draw_rectangle(Point::new(1, 1), i32::MAX, i32::MAX, true);
    assert_eq!(
        ink(&img),
        [(1, 1), (2, 1), (3, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn extreme_triangle_fills_visible_rows() {
    let mut img = canvas(4, 4);
    img.draw_filled_triangle(
        Point::new(i32::MIN, 0),
        Point::new(i32::MAX, 1),
        Point::new(0, 2),
        true,
    );
    assert_eq!(ink(&img), [(0, 1), (1, 1), (2, 1), (3, 1), (0, 2)]);
}

#[test]
fn far_polygon_vertices_only_walk_canvas_rows() {
    let mut img = canvas(4, 4);
    let tall = [
        Point::new(0, -2_000_000_000),
        Point::new(0, 2_000_000_000),
        Point::new(5, 0),
    ];
    img.draw_filled_polygon(&tall, true);
    assert_eq!(ink(&img).len(), 16);
}

#[test]
fn concave_fill_depends_on_span_order() {
    // square with a notch cut up from the bottom edge to (3, 3); starting
    // at a notch vertex interleaves the inner and outer edges
    let notched = [
        Point::new(6, 6),
        Point::new(3, 3),
        Point::new(0, 6),
        Point::new(0, 0),
        Point::new(6, 0),
    ];
    let mut edge = canvas(7, 7);
    let mut sorted = canvas(7, 7);
    edge.draw_filled_polygon_with(&notched, true, SpanOrder::EdgeOrder);
    sorted.draw_filled_polygon_with(&notched, true, SpanOrder::SortedX);

    // row 4 intersections come out as [4, 2, 0, 6]
    assert!(edge.get(3, 4).unwrap());
    assert!(edge.get(3, 5).unwrap());
    assert!(!sorted.get(3, 4).unwrap());
    assert!(!sorted.get(3, 5).unwrap());
    for img in [&edge, &sorted] {
        assert!(img.get(0, 4).unwrap() && img.get(2, 4).unwrap());
        assert!(img.get(4, 4).unwrap() && img.get(6, 4).unwrap());
    }
}
