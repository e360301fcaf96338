// ============================================================
// Layer 7 — Visualization / Chart Rendering
// ============================================================
// Renders the classification summary to PNG files. Everything
// is drawn pixel-by-pixel onto an `RgbImage` — axes, bars, pie
// wedges and the bitmap-font labels — so the charts need no
// display server and no system font.
//
// What's in this layer:
//
//   font.rs — 5×7 bitmap glyphs plus horizontal and rotated
//             text drawing
//   bar.rs  — distribution of emotions across all headlines
//   pie.rs  — emotions split into real and fake headlines,
//             side by side
//
// The `Palette` carries the theme colors (fetched and cached by
// the infra layer, or the built-in fallback); the slice colors
// for the series are fixed and sit in `colors` below.
//
// Reference: image crate docs (RgbImage, put_pixel)

pub mod bar;
pub mod font;
pub mod pie;

use image::{Rgb, RgbImage};

// ─── Colors ───────────────────────────────────────────────────────────────────

/// Fixed chart colors that do not come from the theme.
pub mod colors {
    use image::Rgb;

    /// Series palette, one color per emotion in row order.
    pub const SERIES: [Rgb<u8>; 7] = [
        Rgb([0xFF, 0x6E, 0x78]),
        Rgb([0xEA, 0x9E, 0x70]),
        Rgb([0xF6, 0xC1, 0x77]),
        Rgb([0xFA, 0xD4, 0x87]),
        Rgb([0xAB, 0xCB, 0x8E]),
        Rgb([0x87, 0xDF, 0xE4]),
        Rgb([0xB4, 0x8E, 0xAD]),
    ];

    /// Warm brown canvas behind the pie charts.
    pub const PIE_FIGURE: Rgb<u8> = Rgb([0x6E, 0x48, 0x27]);

    /// Wedge edge color.
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
}

/// Color for the i-th series slot, cycling past the palette end.
pub fn series_color(index: usize) -> Rgb<u8> {
    colors::SERIES[index % colors::SERIES.len()]
}

// ─── Theme Palette ────────────────────────────────────────────────────────────

/// Theme-driven colors shared by the charts.
///
/// Mirrors the handful of style keys the charts care about. The
/// default is the light "dawn" variant, which is also the fallback
/// when the theme cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Canvas behind the whole figure (`figure.facecolor`)
    pub background:      Rgb<u8>,
    /// Plot area behind the bars (`axes.facecolor`)
    pub axes_background: Rgb<u8>,
    /// Titles, labels and tick text (`text.color`)
    pub foreground:      Rgb<u8>,
    /// Axis spines and ticks (`axes.edgecolor`)
    pub axis:            Rgb<u8>,
    /// Horizontal grid lines (`grid.color`)
    pub grid:            Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background:      Rgb([0xFA, 0xF4, 0xED]),
            axes_background: Rgb([0xFF, 0xFA, 0xF3]),
            foreground:      Rgb([0x57, 0x52, 0x79]),
            axis:            Rgb([0x98, 0x93, 0xA5]),
            grid:            Rgb([0xDF, 0xDA, 0xD9]),
        }
    }
}

/// Parse a six-digit hex color, with or without a leading `#`.
pub fn parse_hex_color(value: &str) -> Option<Rgb<u8>> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb([r, g, b]))
}

// ─── Drawing Primitives ───────────────────────────────────────────────────────

/// Draw a filled rectangle, clipped to the image bounds
pub(crate) fn draw_filled_rect(
    img: &mut RgbImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    color: Rgb<u8>,
) {
    let img_width = img.width();
    let img_height = img.height();

    for dy in 0..height {
        for dx in 0..width {
            let px = x + dx;
            let py = y + dy;
            if px < img_width && py < img_height {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Draw a vertical line segment, clipped to the image bounds
pub(crate) fn draw_vertical_line(img: &mut RgbImage, x: u32, y1: u32, y2: u32, color: Rgb<u8>) {
    let (start, end) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    if x >= img.width() || img.height() == 0 {
        return;
    }
    let max_y = img.height() - 1;
    for y in start..=end.min(max_y) {
        img.put_pixel(x, y, color);
    }
}

/// Draw a horizontal line segment, clipped to the image bounds
pub(crate) fn draw_horizontal_line(img: &mut RgbImage, y: u32, x1: u32, x2: u32, color: Rgb<u8>) {
    let (start, end) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    if y >= img.height() || img.width() == 0 {
        return;
    }
    let max_x = img.width() - 1;
    for x in start..=end.min(max_x) {
        img.put_pixel(x, y, color);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_with_and_without_hash() {
        assert_eq!(parse_hex_color("#6E4827"), Some(Rgb([0x6E, 0x48, 0x27])));
        assert_eq!(parse_hex_color("faf4ed"), Some(Rgb([0xFA, 0xF4, 0xED])));
        assert_eq!(parse_hex_color("  575279  "), Some(Rgb([0x57, 0x52, 0x79])));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed_values() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
        assert_eq!(parse_hex_color("gggggg"), None);
    }

    #[test]
    fn test_series_colors_cycle() {
        assert_eq!(series_color(0), colors::SERIES[0]);
        assert_eq!(series_color(7), colors::SERIES[0]);
        assert_eq!(series_color(9), colors::SERIES[2]);
    }

    #[test]
    fn test_draw_filled_rect_is_clipped() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        draw_filled_rect(&mut img, 8, 8, 5, 5, colors::WHITE);
        assert_eq!(*img.get_pixel(9, 9), colors::WHITE);
        assert_eq!(*img.get_pixel(7, 7), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_line_endpoints_may_be_swapped() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        draw_horizontal_line(&mut img, 5, 8, 2, colors::WHITE);
        draw_vertical_line(&mut img, 3, 8, 2, colors::WHITE);
        assert_eq!(*img.get_pixel(2, 5), colors::WHITE);
        assert_eq!(*img.get_pixel(8, 5), colors::WHITE);
        assert_eq!(*img.get_pixel(3, 2), colors::WHITE);
        assert_eq!(*img.get_pixel(3, 8), colors::WHITE);
    }
}
