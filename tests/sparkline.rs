use insider_term::ui::sparkline::{area, glyph_strip, polyline, PAD};

#[test]
fn fewer_than_two_samples_is_a_valid_empty_render() {
    assert!(polyline(&[], 80.0, 28.0).is_none());
    assert!(polyline(&[42.0], 80.0, 28.0).is_none());
}

#[test]
fn two_equal_samples_render_a_flat_line_across_the_drawable_width() {
    let points = polyline(&[5.0, 5.0], 80.0, 28.0).expect("two samples render");
    assert_eq!(points.len(), 2);
    let (x0, y0) = points[0];
    let (x1, y1) = points[1];
    assert!((x0 - PAD).abs() < 1e-9);
    assert!((x1 - (80.0 - PAD)).abs() < 1e-9);
    // Degenerate range falls back to 1, so both samples sit on one line.
    assert!((y0 - y1).abs() < 1e-9);
}

#[test]
fn higher_values_map_to_smaller_y() {
    let points = polyline(&[1.0, 3.0, 2.0], 80.0, 28.0).expect("renders");
    assert!(points[1].1 < points[0].1);
    assert!(points[1].1 < points[2].1);
    // Extremes touch the padded bounds.
    assert!((points[0].1 - (28.0 - PAD)).abs() < 1e-9);
    assert!((points[1].1 - PAD).abs() < 1e-9);
}

#[test]
fn points_stay_within_padded_bounds() {
    let samples: Vec<f64> = (0..50).map(|i| ((i * 37) % 11) as f64).collect();
    let points = polyline(&samples, 120.0, 40.0).expect("renders");
    for (x, y) in points {
        assert!((PAD..=120.0 - PAD).contains(&x));
        assert!((PAD..=40.0 - PAD).contains(&y));
    }
}

#[test]
fn area_closes_down_to_the_baseline() {
    let points = polyline(&[1.0, 2.0], 80.0, 28.0).expect("renders");
    let outline = area(&points, 28.0);
    assert_eq!(outline.len(), points.len() + 2);
    assert_eq!(outline[outline.len() - 2].1, 28.0);
    assert_eq!(outline[outline.len() - 1].1, 28.0);
    assert_eq!(outline[outline.len() - 1].0, points[0].0);
}

#[test]
fn glyph_strip_spans_levels() {
    let strip = glyph_strip(&[0.0, 7.0], 2);
    assert_eq!(strip, "▁█");
    assert_eq!(glyph_strip(&[1.0], 10), "");
    assert_eq!(glyph_strip(&[1.0, 2.0], 0), "");
}
