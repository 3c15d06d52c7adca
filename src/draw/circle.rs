use alloc::vec::Vec;
use core::f64::consts::PI;

use super::Point;

/// First sampled angle, slightly below zero.
const START_ANGLE: f64 = -0.01;

/// Last angle sampled (inclusive bound).
const END_ANGLE: f64 = 1.99 * PI;

/// Points of a parametric circle outline.
///
/// Angles run from `-0.01` up to `1.99 * PI` in steps of `1 / radius`
/// radians; each yields `(cx + round(r cos t), cy + round(r sin t))`.
/// Duplicates are kept and small radii may leave gaps. A zero radius
/// produces the center once; a negative radius produces nothing. Points
/// that fall outside the `i32` range are dropped.
pub fn circle_points(center: Point, radius: i32) -> Vec<Point> {
    let mut pts = Vec::new();
    for_each_circle_point(center, radius, |x, y| {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            pts.push(Point::new(x, y));
        }
    });
    pts
}

pub(crate) fn for_each_circle_point(center: Point, radius: i32, mut plot: impl FnMut(i64, i64)) {
    let (cx, cy) = center.wide();
    if radius < 0 {
        return;
    }
    if radius == 0 {
        plot(cx, cy);
        return;
    }
    let r = f64::from(radius);
    let step = 1.0 / r;
    let mut theta = START_ANGLE;
    while theta <= END_ANGLE {
        plot(cx + (r * theta.cos()).round() as i64, cy + (r * theta.sin()).round() as i64);
        theta += step;
    }
}
