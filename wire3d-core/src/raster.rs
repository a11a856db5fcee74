/// Screen-space rasterization: edges, containment test and scanline fill
use nalgebra::Point3;

use crate::canvas::{Canvas, Color};
use crate::geometry::Triangle;

/// A run of pixels on one scanline, `x_end` exclusive
///
/// Coordinates are `i64` so that far off-screen triangles can be scanned
/// without overflowing the row or column counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i64,
    pub x_start: i64,
    pub x_end: i64,
}

impl Span {
    pub fn width(&self) -> i64 {
        self.x_end - self.x_start
    }
}

/// Twice the triangle area, independent of winding
pub fn doubled_area(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> f32 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs()
}

/// Area-sum containment test, boundary included.
///
/// The three sub-triangles formed with `point` cover the triangle exactly
/// when the point is inside; both sums are rounded to whole units before
/// comparing.
pub fn inside_triangle(point: &Point3<f32>, triangle: &Triangle) -> bool {
    let [a, b, c] = &triangle.vertices;
    let full = doubled_area(a, b, c);

    let parts = doubled_area(a, point, b) + doubled_area(c, point, b) + doubled_area(a, point, c);

    parts.round() == full.round()
}

/// Scan the bounding box and return at most one span per row.
///
/// Rows run over `[y_min, y_max)`. Each row keeps only its first contiguous
/// run; a run still open at `x_max` is closed at the next integer. The box is
/// not clamped to any viewport.
pub fn scan_spans(triangle: &Triangle) -> Vec<Span> {
    let [a, b, c] = &triangle.vertices;
    let x_min = a.x.min(b.x).min(c.x);
    let x_max = a.x.max(b.x).max(c.x);
    let y_min = a.y.min(b.y).min(c.y);
    let y_max = a.y.max(b.y).max(c.y);

    let x_lo = x_min.floor() as i64;
    let x_hi = (x_max.floor() as i64).saturating_add(1);
    let y_lo = y_min.floor() as i64;
    let y_hi = y_max.ceil() as i64;

    let mut spans = Vec::new();

    for y in y_lo..y_hi {
        let mut start = None;
        let mut x_end = x_hi;

        for x in x_lo..x_hi {
            let inside = inside_triangle(&Point3::new(x as f32, y as f32, 0.0), triangle);
            match (inside, start) {
                (true, None) => start = Some(x),
                (false, Some(_)) => {
                    x_end = x;
                    break;
                }
                _ => {}
            }
        }

        if let Some(x_start) = start {
            spans.push(Span { y, x_start, x_end });
        }
    }

    spans
}

/// Fill a screen-space triangle with horizontal segments
pub fn fill_triangle<C: Canvas>(triangle: &Triangle, canvas: &mut C) {
    canvas.set_color(Color::GREEN);
    for span in scan_spans(triangle) {
        let y = saturate(span.y);
        canvas.draw_line((saturate(span.x_start), y), (saturate(span.x_end - 1), y));
    }
}

/// Narrow a scan coordinate to the canvas range, pinning at the i32 limits
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Draw the three edges of a screen-space triangle
pub fn draw_edges<C: Canvas>(triangle: &Triangle, canvas: &mut C) {
    let [a, b, c] = triangle.vertices.map(|p| (p.x as i32, p.y as i32));

    canvas.set_color(Color::RED);
    canvas.draw_line(a, b);
    canvas.draw_line(a, c);
    canvas.draw_line(b, c);
}
