use crate::consts::{MIN_STAMP_SPACING, STAMP_SPACING_FRACTION};
use crate::geometry::Point;
use crate::stroke::Stroke;

use super::mark_buffer::MarkBuffer;

/// Write `value` into every pixel whose centre lies within `radius` of `center`.
///
/// `radius` is half the stamped disc's width. Pixels outside the buffer are clipped.
pub fn stamp_disc(buffer: &mut MarkBuffer, center: Point, radius: f32, value: bool) {
    let w = buffer.width() as i64;
    let h = buffer.height() as i64;
    if w == 0 || h == 0 || !radius.is_finite() || radius < 0.0 {
        return;
    }
    if !center.x.is_finite() || !center.y.is_finite() {
        return;
    }

    // Pixel centres sit at (col + 0.5, row + 0.5).
    let min_col = ((center.x - radius - 0.5).ceil() as i64).max(0);
    let max_col = ((center.x + radius - 0.5).floor() as i64).min(w - 1);
    let min_row = ((center.y - radius - 0.5).ceil() as i64).max(0);
    let max_row = ((center.y + radius - 0.5).floor() as i64).min(h - 1);
    if min_col > max_col || min_row > max_row {
        return;
    }

    let r2 = radius * radius;
    let data = buffer.data_mut();
    for row in min_row..=max_row {
        let dy = row as f32 + 0.5 - center.y;
        let dy2 = dy * dy;
        for col in min_col..=max_col {
            let dx = col as f32 + 0.5 - center.x;
            if dx * dx + dy2 <= r2 {
                data[[row as usize, col as usize]] = value;
            }
        }
    }
}

/// Stamp discs along the segment `from -> to`, excluding `from` itself.
///
/// Stamps are spaced closely enough that consecutive discs overlap, so the
/// segment is covered without gaps. Only the part of the segment within
/// `radius` of the buffer is walked, so far off-surface endpoints cost no more
/// than the visible span.
pub fn stamp_segment(buffer: &mut MarkBuffer, from: Point, to: Point, radius: f32, value: bool) {
    if buffer.width() == 0 || buffer.height() == 0 || from == to {
        return;
    }
    let margin = f64::from(radius.max(0.0)) + 1.0;
    let lo = (-margin, -margin);
    let hi = (
        buffer.width() as f64 + margin,
        buffer.height() as f64 + margin,
    );
    let Some((t0, t1)) = clip_segment(from, to, lo, hi) else {
        return;
    };

    let start = point_at(from, to, t0);
    let end = point_at(from, to, t1);
    let dx = f64::from(end.x) - f64::from(start.x);
    let dy = f64::from(end.y) - f64::from(start.y);
    let spacing = f64::from((radius * STAMP_SPACING_FRACTION).max(MIN_STAMP_SPACING));
    let steps = ((dx * dx + dy * dy).sqrt() / spacing).ceil().max(1.0) as usize;

    // A clipped start is a fresh point and gets its own stamp.
    let first = if t0 > 0.0 { 0 } else { 1 };
    for i in first..=steps {
        let t = i as f32 / steps as f32;
        stamp_disc(buffer, start.lerp(end, t), radius, value);
    }
}

/// Liang-Barsky clip of `from -> to` against the rectangle `lo..hi`.
///
/// Returns the parameter range `(t0, t1)` inside the rectangle, or `None`
/// when the segment misses it or has a non-finite coordinate.
fn clip_segment(from: Point, to: Point, lo: (f64, f64), hi: (f64, f64)) -> Option<(f64, f64)> {
    let (x0, y0) = (f64::from(from.x), f64::from(from.y));
    let dx = f64::from(to.x) - x0;
    let dy = f64::from(to.y) - y0;
    if !(x0.is_finite() && y0.is_finite() && dx.is_finite() && dy.is_finite()) {
        return None;
    }

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x0 - lo.0), (dx, hi.0 - x0), (-dy, y0 - lo.1), (dy, hi.1 - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}

fn point_at(from: Point, to: Point, t: f64) -> Point {
    let x = f64::from(from.x) + (f64::from(to.x) - f64::from(from.x)) * t;
    let y = f64::from(from.y) + (f64::from(to.y) - f64::from(from.y)) * t;
    Point::new(x as f32, y as f32)
}

/// Rasterize a whole stroke into the buffer.
///
/// Paint sets covered pixels, erase clears them. Applying the same stroke
/// twice leaves the buffer as applying it once.
pub fn apply_stroke(buffer: &mut MarkBuffer, stroke: &Stroke) {
    let value = stroke.tool.mark_value();
    let points = stroke.points();
    let Some(&first) = points.first() else {
        return;
    };

    stamp_disc(buffer, first, stroke.radius, value);
    for pair in points.windows(2) {
        stamp_segment(buffer, pair[0], pair[1], stroke.radius, value);
    }
}

/// Rebuild a mark buffer from scratch by replaying strokes in order.
pub fn replay(width: u32, height: u32, strokes: &[Stroke]) -> MarkBuffer {
    let mut buffer = MarkBuffer::new(width, height);
    for stroke in strokes {
        apply_stroke(&mut buffer, stroke);
    }
    buffer
}
