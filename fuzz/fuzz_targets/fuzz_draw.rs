#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::draw::{Draw, Point, SpanOrder};
use zenpbm::{Encoding, Graymap};

/// Any i32, read little-endian from four bytes.
fn coord(bytes: &[u8], i: usize) -> i32 {
    let mut raw = [0u8; 4];
    for (k, b) in raw.iter_mut().enumerate() {
        *b = bytes.get(i * 4 + k).copied().unwrap_or(0);
    }
    i32::from_le_bytes(raw)
}

/// Outline sampling is linear in the radius, so radii stay in i16 range.
fn radius(bytes: &[u8], i: usize) -> i32 {
    i32::from(coord(bytes, i) as i16)
}

fuzz_target!(|data: &[u8]| {
    // Drawing clips and must never panic, whatever the coordinates
    let Ok(mut img) = Graymap::new(64, 48, Encoding::Binary) else {
        return;
    };
    let p = |i| Point::new(coord(data, i), coord(data, i + 1));
    let color = data.first().copied().unwrap_or(255);

    img.draw_line(p(1), p(3), color);
    img.draw_rectangle(p(5), coord(data, 7), coord(data, 8), color);
    img.draw_filled_rectangle(p(9), coord(data, 11), coord(data, 12), color);
    img.draw_circle(p(13), radius(data, 15), color);
    img.draw_filled_circle(p(16), radius(data, 18), color);
    img.draw_triangle(p(19), p(21), p(23), color);
    img.draw_filled_triangle(p(19), p(21), p(23), color);

    let points: Vec<Point> = (25..49).step_by(2).map(p).collect();
    img.draw_polygon(&points, color);
    img.draw_filled_polygon(&points, color);
    img.draw_filled_polygon_with(&points, color, SpanOrder::SortedX);
});
