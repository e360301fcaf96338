// ============================================================
// Layer 7 — Emotion Distribution Bar Chart
// ============================================================
// One bar per emotion, counting every headline regardless of
// truth label. Theme colors come from the palette; each bar
// takes the next series color.
//
// Layout (1200×800):
//
//   ┌──────────────────────────────────────────────┐
//   │        DISTRIBUTION OF EMOTIONS ...          │
//   │  N                                           │
//   │  u  ┌──────────────────────────────────┐     │
//   │  m  │ grid        ██                   │     │
//   │  b  │ ██          ██        ██         │     │
//   │  e  │ ██   ██     ██   ██   ██    ██   │     │
//   │  r  └──────────────────────────────────┘     │
//   │       anger disgust fear  joy  sadness       │
//   │                   EMOTION                    │
//   └──────────────────────────────────────────────┘

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use crate::domain::summary::EmotionSummary;
use crate::viz::font::{draw_text, draw_text_centered, draw_text_up, text_height, text_width};
use crate::viz::{
    draw_filled_rect, draw_horizontal_line, draw_vertical_line, series_color, Palette,
};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;

// Plot area bounds
const LEFT: u32 = 110;
const RIGHT: u32 = 1160;
const TOP: u32 = 90;
const BOTTOM: u32 = 690;

const TITLE: &str = "Distribution of emotions across all headlines";
const X_LABEL: &str = "Emotion";
const Y_LABEL: &str = "Number of headlines";

/// Render the distribution chart and write it to `path` as PNG.
pub fn render_emotion_distribution(
    summary: &[EmotionSummary],
    palette: &Palette,
    path: &Path,
) -> Result<()> {
    let img = draw_emotion_distribution(summary, palette);
    img.save(path)
        .with_context(|| format!("Failed to write chart to '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "Wrote emotion distribution chart");
    Ok(())
}

/// Draw the distribution chart into a fresh image.
pub fn draw_emotion_distribution(summary: &[EmotionSummary], palette: &Palette) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, palette.background);
    let plot_width = RIGHT - LEFT;
    let plot_height = BOTTOM - TOP;

    // ── Step 1: plot canvas and title ──
    draw_filled_rect(&mut img, LEFT, TOP, plot_width, plot_height, palette.axes_background);
    draw_text_centered(&mut img, TITLE, (WIDTH / 2) as i64, 30, 3, palette.foreground);

    // ── Step 2: y-axis ticks, grid and labels ──
    let max_count = summary.iter().map(|row| row.all_headlines).max().unwrap_or(0);
    let ticks = y_axis_ticks(max_count);
    let top_value = *ticks.last().unwrap_or(&1);

    let half_line = text_height(2) as i64 / 2;
    for tick in &ticks {
        let y = value_to_y(*tick, top_value, plot_height);
        if *tick > 0 {
            draw_horizontal_line(&mut img, y, LEFT, RIGHT - 1, palette.grid);
        }
        let label = tick.to_string();
        let x = LEFT as i64 - 12 - text_width(&label, 2) as i64;
        draw_text(&mut img, &label, x, y as i64 - half_line, 2, palette.foreground);
    }

    // ── Step 3: one bar per emotion, plus its tick label ──
    if !summary.is_empty() {
        let band = plot_width / summary.len() as u32;
        for (i, row) in summary.iter().enumerate() {
            let bar_width = band * 8 / 10;
            let x = LEFT + i as u32 * band + (band - bar_width) / 2;
            let y = value_to_y(row.all_headlines, top_value, plot_height);
            draw_filled_rect(&mut img, x, y, bar_width, BOTTOM - y, series_color(i));

            let center = (x + bar_width / 2) as i64;
            draw_text_centered(
                &mut img,
                &row.predicted_emotion,
                center,
                BOTTOM as i64 + 14,
                2,
                palette.foreground,
            );
        }
    }

    // ── Step 4: axis spines and axis titles ──
    draw_vertical_line(&mut img, LEFT, TOP, BOTTOM, palette.axis);
    draw_horizontal_line(&mut img, BOTTOM, LEFT, RIGHT, palette.axis);
    draw_text_centered(&mut img, X_LABEL, (WIDTH / 2) as i64, BOTTOM as i64 + 52, 2, palette.foreground);
    let y_label_start = ((TOP + BOTTOM) / 2 + text_width(Y_LABEL, 2) / 2) as i64;
    draw_text_up(&mut img, Y_LABEL, 24, y_label_start, 2, palette.foreground);

    img
}

/// Screen y for a count, with `top_value` pinned to the plot top.
fn value_to_y(value: u64, top_value: u64, plot_height: u32) -> u32 {
    let fraction = value as f64 / top_value.max(1) as f64;
    BOTTOM - (fraction * plot_height as f64).round() as u32
}

/// Round tick positions covering 0..=max_count.
///
/// The step is the smallest of 1/2/5×10^k that needs at most five
/// steps, so axes stay readable for ten headlines or ten thousand.
fn y_axis_ticks(max_count: u64) -> Vec<u64> {
    if max_count == 0 {
        return vec![0, 1];
    }

    let raw = max_count as f64 / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|multiple| multiple * magnitude)
        .find(|step| max_count as f64 / step <= 5.0)
        .unwrap_or(10.0 * magnitude)
        .max(1.0) as u64;

    let top = (max_count + step - 1) / step * step;
    (0..=top / step).map(|i| i * step).collect()
}
