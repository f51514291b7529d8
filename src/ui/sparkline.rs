//! Sparkline geometry and rendering.
//!
//! The geometry is pure: sample index maps linearly to x across the padded
//! width, value maps to y across the padded height inverted (higher value,
//! smaller y), normalized by the sample min/max. Equal min and max fall back
//! to a range of 1, which degenerates to a flat line across the drawable
//! width. Fewer than two samples is a valid empty render, not an error.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::{layout::Rect, Frame};

pub const PAD: f64 = 2.0;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn normalized(samples: &[f64]) -> Vec<f64> {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    samples.iter().map(|v| (v - min) / range).collect()
}

/// Map samples onto a `width` x `height` plane. `None` below two samples.
pub fn polyline(samples: &[f64], width: f64, height: f64) -> Option<Vec<(f64, f64)>> {
    if samples.len() < 2 {
        return None;
    }
    let norm = normalized(samples);
    let span_x = width - PAD * 2.0;
    let span_y = height - PAD * 2.0;
    let last = (samples.len() - 1) as f64;
    Some(
        norm.iter()
            .enumerate()
            .map(|(i, v)| {
                let x = PAD + (i as f64 / last) * span_x;
                let y = PAD + (1.0 - v) * span_y;
                (x, y)
            })
            .collect(),
    )
}

/// Close a polyline down to the baseline, forming the filled area outline.
pub fn area(points: &[(f64, f64)], height: f64) -> Vec<(f64, f64)> {
    let mut outline = points.to_vec();
    if let (Some(&(last_x, _)), Some(&(first_x, _))) = (points.last(), points.first()) {
        outline.push((last_x, height));
        outline.push((first_x, height));
    }
    outline
}

/// One-cell-high inline strip using eight-level block glyphs, for table
/// rows. Resamples to `width` columns when there are more samples than
/// columns.
pub fn glyph_strip(samples: &[f64], width: usize) -> String {
    if samples.len() < 2 || width == 0 {
        return String::new();
    }
    let norm = normalized(samples);
    let columns = width.min(norm.len());
    (0..columns)
        .map(|col| {
            let idx = if columns == 1 {
                0
            } else {
                col * (norm.len() - 1) / (columns - 1)
            };
            let level = (norm[idx] * 7.0).round() as usize;
            SPARK_LEVELS[level.min(7)]
        })
        .collect()
}

pub fn trend_color(positive: bool) -> Color {
    if positive {
        Color::Green
    } else {
        Color::Red
    }
}

/// Draw the stroke and area paths onto a canvas filling `area_rect`.
pub fn render_chart(frame: &mut Frame, area_rect: Rect, samples: &[f64], positive: bool) {
    let width = f64::from(area_rect.width) * 2.0;
    let height = f64::from(area_rect.height) * 4.0;
    let Some(points) = polyline(samples, width, height) else {
        return;
    };
    let color = trend_color(positive);
    let fill = if positive {
        Color::Rgb(22, 62, 34)
    } else {
        Color::Rgb(70, 28, 28)
    };
    let baseline = area(&points, height);

    let canvas = Canvas::default()
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Canvas y grows upward; the geometry's y grows downward.
            draw_path(ctx, &baseline, height, fill);
            draw_path(ctx, &points, height, color);
        });
    frame.render_widget(canvas, area_rect);
}

fn draw_path(ctx: &mut Context<'_>, points: &[(f64, f64)], height: f64, color: Color) {
    for pair in points.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        ctx.draw(&CanvasLine {
            x1,
            y1: height - y1,
            x2,
            y2: height - y2,
            color,
        });
    }
}
