// ============================================================
// Layer 7 — Emotions by Truth Label Pie Charts
// ============================================================
// Two pies on one warm-brown canvas: real headlines on the
// left, fake on the right. Wedges start at twelve o'clock and
// sweep counter-clockwise in summary row order, separated by
// thin white edges. Every wedge gets its emotion name just
// outside the rim and its percentage share inside.
//
// Wedges are classified per pixel: a pixel inside the circle
// belongs to the wedge whose cumulative fraction interval
// contains the pixel's angle. A pie whose counts sum to zero
// has no well-defined shares and is left empty.

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use crate::domain::summary::EmotionSummary;
use crate::viz::font::{draw_text, draw_text_centered, text_height, text_width};
use crate::viz::{colors, series_color, Palette};

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 800;
const RADIUS: f64 = 230.0;

const REAL_CENTER: (u32, u32) = (400, 450);
const FAKE_CENTER: (u32, u32) = (1200, 450);

// Label distances as fractions of the radius
const PCT_DISTANCE: f64 = 0.75;
const NAME_DISTANCE: f64 = 1.05;

const SUPTITLE: &str = "Distribution of emotions across real and fake headlines";
const REAL_TITLE: &str = "Real headlines";
const FAKE_TITLE: &str = "Fake headlines";

/// Render both pies and write them to `path` as PNG.
pub fn render_emotions_by_label(
    summary: &[EmotionSummary],
    palette: &Palette,
    path: &Path,
) -> Result<()> {
    let img = draw_emotions_by_label(summary, palette);
    img.save(path)
        .with_context(|| format!("Failed to write chart to '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "Wrote emotions-by-label chart");
    Ok(())
}

/// Draw both pies into a fresh image.
pub fn draw_emotions_by_label(summary: &[EmotionSummary], palette: &Palette) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, colors::PIE_FIGURE);

    draw_text_centered(&mut img, SUPTITLE, (WIDTH / 2) as i64, 24, 4, palette.foreground);

    let real_counts: Vec<u64> = summary.iter().map(|row| row.real_only).collect();
    let fake_counts: Vec<u64> = summary.iter().map(|row| row.fake_only).collect();

    draw_pie(&mut img, summary, &real_counts, REAL_CENTER, REAL_TITLE, palette);
    draw_pie(&mut img, summary, &fake_counts, FAKE_CENTER, FAKE_TITLE, palette);

    img
}

/// Draw one pie with its title and labels.
fn draw_pie(
    img: &mut RgbImage,
    summary: &[EmotionSummary],
    counts: &[u64],
    center: (u32, u32),
    title: &str,
    palette: &Palette,
) {
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    draw_text_centered(img, title, center.0 as i64, 110, 3, palette.foreground);

    let total: u64 = counts.iter().sum();
    if total == 0 {
        return;
    }

    // ── Step 1: cumulative wedge boundaries as fractions of a turn ──
    let mut boundaries = Vec::with_capacity(counts.len() + 1);
    boundaries.push(0.0);
    let mut cumulative = 0.0;
    for count in counts {
        cumulative += *count as f64 / total as f64;
        boundaries.push(cumulative);
    }
    // Guard against the sum drifting a hair under 1.0
    if let Some(last) = boundaries.last_mut() {
        *last = 1.0;
    }

    // ── Step 2: classify every pixel in the bounding square ──
    let reach = RADIUS.ceil() as i64 + 1;
    for py in (center.1 as i64 - reach)..=(center.1 as i64 + reach) {
        for px in (center.0 as i64 - reach)..=(center.0 as i64 + reach) {
            if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                continue;
            }
            let dx = px as f64 - cx;
            let dy = py as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > RADIUS + 0.5 {
                continue;
            }

            let fraction = angle_fraction(dx, dy);
            let color = if dist >= RADIUS - 1.0 || near_boundary(fraction, &boundaries, dist) {
                colors::WHITE
            } else {
                wedge_at(fraction, &boundaries)
                    .map(series_color)
                    .unwrap_or(colors::PIE_FIGURE)
            };
            img.put_pixel(px as u32, py as u32, color);
        }
    }

    // ── Step 3: percentage inside each wedge, emotion name outside ──
    let half_line = text_height(2) as i64 / 2;
    for (i, row) in summary.iter().enumerate() {
        let share = counts[i] as f64 / total as f64;
        let mid = FRAC_PI_2 + 2.0 * PI * (boundaries[i] + boundaries[i + 1]) / 2.0;

        let pct = format!("{:.1}%", share * 100.0);
        let (px, py) = label_point(cx, cy, mid, PCT_DISTANCE * RADIUS);
        draw_text_centered(img, &pct, px, py - half_line, 2, palette.foreground);

        let (nx, ny) = label_point(cx, cy, mid, NAME_DISTANCE * RADIUS);
        draw_name_label(img, &row.predicted_emotion, nx, ny, mid, palette.foreground);
    }
}

/// Fraction of a full turn, counter-clockwise from twelve o'clock.
fn angle_fraction(dx: f64, dy: f64) -> f64 {
    // Screen y grows downward, so flip it for the math convention.
    let theta = (-dy).atan2(dx);
    (theta - FRAC_PI_2).rem_euclid(2.0 * PI) / (2.0 * PI)
}

/// Index of the wedge whose interval contains `fraction`.
fn wedge_at(fraction: f64, boundaries: &[f64]) -> Option<usize> {
    (0..boundaries.len().saturating_sub(1))
        .find(|i| fraction >= boundaries[*i] && fraction < boundaries[i + 1])
}

/// True when the pixel sits within edge width of a wedge boundary.
fn near_boundary(fraction: f64, boundaries: &[f64], dist: f64) -> bool {
    boundaries.iter().any(|boundary| {
        let delta = (fraction - boundary).abs();
        let delta = delta.min(1.0 - delta);
        delta * 2.0 * PI * dist < 0.75
    })
}

/// Screen point at `distance` from the center along angle `angle`.
fn label_point(cx: f64, cy: f64, angle: f64, distance: f64) -> (i64, i64) {
    let x = cx + angle.cos() * distance;
    let y = cy - angle.sin() * distance;
    (x.round() as i64, y.round() as i64)
}

/// Anchor a name label away from the pie, like a chart label that
/// hangs off whichever side of the circle it sits on.
fn draw_name_label(img: &mut RgbImage, name: &str, x: i64, y: i64, angle: f64, color: Rgb<u8>) {
    let cos = angle.cos();
    let top = y - text_height(2) as i64 / 2;
    if cos > 0.15 {
        draw_text(img, name, x, top, 2, color);
    } else if cos < -0.15 {
        draw_text(img, name, x - text_width(name, 2) as i64, top, 2, color);
    } else {
        draw_text_centered(img, name, x, top, 2, color);
    }
}
