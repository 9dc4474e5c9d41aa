use maskforge_core::geometry::Point;
use maskforge_core::raster::{apply_stroke, replay, stamp_disc, stamp_segment, MarkBuffer};
use maskforge_core::stroke::{Stroke, Tool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn diagonal_path() -> Vec<Point> {
    vec![
        Point::new(20.0, 20.0),
        Point::new(35.0, 28.0),
        Point::new(60.0, 40.0),
    ]
}

/// Distance from `p` to the segment `a -> b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}

// ---------------------------------------------------------------------------
// MarkBuffer
// ---------------------------------------------------------------------------

#[test]
fn test_new_buffer_is_clear() {
    let buf = MarkBuffer::new(30, 20);
    assert_eq!(buf.width(), 30);
    assert_eq!(buf.height(), 20);
    assert!(buf.is_empty());
    assert_eq!(buf.marked_count(), 0);
    assert_eq!(buf.coverage(), 0.0);
    assert_eq!(buf.get(29, 19), Some(false));
    assert_eq!(buf.get(30, 0), None);
}

#[test]
fn test_sample_clamped_uses_edge_pixels() {
    let mut buf = MarkBuffer::new(10, 10);
    stamp_disc(&mut buf, Point::new(9.5, 9.5), 0.5, true);
    assert_eq!(buf.get(9, 9), Some(true));
    assert!(buf.sample_clamped(100, 100));
    assert!(buf.sample_clamped(9, 50));
    assert!(!buf.sample_clamped(-5, -5));
}

#[test]
fn test_sample_clamped_on_empty_buffer() {
    let buf = MarkBuffer::new(0, 0);
    assert!(!buf.sample_clamped(0, 0));
}

// ---------------------------------------------------------------------------
// stamp_disc
// ---------------------------------------------------------------------------

#[test]
fn test_stamp_disc_covers_pixel_centres_within_radius() {
    let mut buf = MarkBuffer::new(50, 50);
    let center = Point::new(25.0, 25.0);
    let radius = 6.0;
    stamp_disc(&mut buf, center, radius, true);

    for row in 0..50 {
        for col in 0..50 {
            let c = Point::new(col as f32 + 0.5, row as f32 + 0.5);
            let expected = c.distance(center) <= radius;
            assert_eq!(buf.get(col, row), Some(expected), "pixel ({col},{row})");
        }
    }
}

#[test]
fn test_stamp_disc_area_close_to_circle() {
    let mut buf = MarkBuffer::new(100, 100);
    stamp_disc(&mut buf, Point::new(50.0, 50.0), 10.0, true);
    let area = buf.marked_count() as f32;
    let ideal = std::f32::consts::PI * 100.0;
    assert!((area - ideal).abs() / ideal < 0.05, "area {area}");
}

#[test]
fn test_stamp_disc_clips_at_edges() {
    let mut buf = MarkBuffer::new(20, 20);
    stamp_disc(&mut buf, Point::new(0.0, 0.0), 5.0, true);
    assert_eq!(buf.get(0, 0), Some(true));
    assert_eq!(buf.get(10, 10), Some(false));

    // Entirely outside: no effect, no panic.
    let mut buf = MarkBuffer::new(20, 20);
    stamp_disc(&mut buf, Point::new(-50.0, 300.0), 5.0, true);
    assert!(buf.is_empty());
}

#[test]
fn test_stamp_disc_ignores_non_finite_input() {
    let mut buf = MarkBuffer::new(20, 20);
    stamp_disc(&mut buf, Point::new(f32::NAN, 5.0), 5.0, true);
    stamp_disc(&mut buf, Point::new(5.0, 5.0), f32::INFINITY, true);
    assert!(buf.is_empty());
}

// ---------------------------------------------------------------------------
// stamp_segment / apply_stroke
// ---------------------------------------------------------------------------

#[test]
fn test_segment_has_no_gaps() {
    let mut buf = MarkBuffer::new(120, 40);
    let a = Point::new(10.0, 20.0);
    let b = Point::new(110.0, 20.0);
    stamp_disc(&mut buf, a, 5.0, true);
    stamp_segment(&mut buf, a, b, 5.0, true);

    // Every pixel on the centre line between the endpoints is marked.
    for col in 10..110 {
        assert_eq!(buf.get(col, 19), Some(true), "gap at column {col}");
        assert_eq!(buf.get(col, 20), Some(true), "gap at column {col}");
    }
}

#[test]
fn test_segment_to_far_point_marks_visible_span() {
    let mut buf = MarkBuffer::new(200, 150);
    let a = Point::new(10.0, 10.0);
    stamp_disc(&mut buf, a, 5.0, true);
    stamp_segment(&mut buf, a, Point::new(1e12, 10.0), 5.0, true);

    for col in 10..200 {
        assert_eq!(buf.get(col, 10), Some(true), "gap at column {col}");
    }
    assert_eq!(buf.get(100, 30), Some(false));
}

#[test]
fn test_segment_between_far_points_crosses_surface() {
    let mut buf = MarkBuffer::new(200, 150);
    stamp_segment(
        &mut buf,
        Point::new(-1e12, 75.0),
        Point::new(1e12, 75.0),
        5.0,
        true,
    );
    for col in 0..200 {
        assert_eq!(buf.get(col, 75), Some(true), "gap at column {col}");
    }
    assert_eq!(buf.get(100, 0), Some(false));
}

#[test]
fn test_segment_missing_surface_marks_nothing() {
    let mut buf = MarkBuffer::new(200, 150);
    stamp_segment(
        &mut buf,
        Point::new(-1e12, -500.0),
        Point::new(1e12, -500.0),
        20.0,
        true,
    );
    stamp_segment(
        &mut buf,
        Point::new(50.0, 50.0),
        Point::new(f32::INFINITY, 50.0),
        20.0,
        true,
    );
    assert!(buf.is_empty());
}

#[test]
fn test_stroke_covers_its_path_and_nothing_far_away() {
    let path = diagonal_path();
    let radius = 8.0;
    let stroke = Stroke::from_points(Tool::Paint, radius, path.clone());
    let mut buf = MarkBuffer::new(100, 80);
    apply_stroke(&mut buf, &stroke);

    for row in 0..80 {
        for col in 0..100 {
            let c = Point::new(col as f32 + 0.5, row as f32 + 0.5);
            let d = path
                .windows(2)
                .map(|s| segment_distance(c, s[0], s[1]))
                .fold(f32::MAX, f32::min);
            let marked = buf.get(col, row) == Some(true);
            if d <= radius - 1.0 {
                assert!(marked, "({col},{row}) at distance {d} should be marked");
            }
            if d > radius + 0.01 {
                assert!(!marked, "({col},{row}) at distance {d} should be clear");
            }
        }
    }
}

#[test]
fn test_single_point_stroke_stamps_one_disc() {
    let stroke = Stroke::new(Tool::Paint, 5.0, Point::new(10.0, 10.0));
    let mut a = MarkBuffer::new(30, 30);
    apply_stroke(&mut a, &stroke);

    let mut b = MarkBuffer::new(30, 30);
    stamp_disc(&mut b, Point::new(10.0, 10.0), 5.0, true);
    assert_eq!(a, b);
}

#[test]
fn test_empty_stroke_is_noop() {
    let stroke = Stroke::from_points(Tool::Paint, 5.0, Vec::new());
    let mut buf = MarkBuffer::new(10, 10);
    apply_stroke(&mut buf, &stroke);
    assert!(buf.is_empty());
}

#[test]
fn test_apply_stroke_is_idempotent() {
    let stroke = Stroke::from_points(Tool::Paint, 7.0, diagonal_path());
    let mut once = MarkBuffer::new(100, 80);
    apply_stroke(&mut once, &stroke);

    let mut twice = once.clone();
    apply_stroke(&mut twice, &stroke);
    assert_eq!(once, twice);
}

#[test]
fn test_erase_inverts_paint() {
    let mut buf = MarkBuffer::new(100, 100);
    // Unrelated earlier mark that must survive.
    stamp_disc(&mut buf, Point::new(90.0, 90.0), 5.0, true);
    let before = buf.clone();

    let path = diagonal_path();
    apply_stroke(&mut buf, &Stroke::from_points(Tool::Paint, 8.0, path.clone()));
    assert_ne!(buf, before);

    apply_stroke(&mut buf, &Stroke::from_points(Tool::Erase, 8.0, path));
    assert_eq!(buf, before);
}

#[test]
fn test_erase_only_clears_what_it_covers() {
    let mut buf = MarkBuffer::new(100, 40);
    apply_stroke(
        &mut buf,
        &Stroke::from_points(
            Tool::Paint,
            10.0,
            vec![Point::new(10.0, 20.0), Point::new(90.0, 20.0)],
        ),
    );
    apply_stroke(
        &mut buf,
        &Stroke::new(Tool::Erase, 5.0, Point::new(50.0, 20.0)),
    );
    assert_eq!(buf.get(50, 20), Some(false));
    assert_eq!(buf.get(20, 20), Some(true));
    assert_eq!(buf.get(80, 20), Some(true));
}

// ---------------------------------------------------------------------------
// replay
// ---------------------------------------------------------------------------

#[test]
fn test_replay_is_deterministic() {
    let strokes = vec![
        Stroke::from_points(Tool::Paint, 12.0, diagonal_path()),
        Stroke::new(Tool::Erase, 6.0, Point::new(35.0, 28.0)),
        Stroke::from_points(
            Tool::Paint,
            5.0,
            vec![Point::new(80.0, 10.0), Point::new(80.0, 70.0)],
        ),
    ];
    let a = replay(100, 80, &strokes);
    let b = replay(100, 80, &strokes);
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn test_replay_order_matters() {
    let paint = Stroke::new(Tool::Paint, 10.0, Point::new(50.0, 50.0));
    let erase = Stroke::new(Tool::Erase, 10.0, Point::new(50.0, 50.0));

    let paint_then_erase = replay(100, 100, &[paint.clone(), erase.clone()]);
    let erase_then_paint = replay(100, 100, &[erase, paint]);
    assert!(paint_then_erase.is_empty());
    assert!(!erase_then_paint.is_empty());
}
