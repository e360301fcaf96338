// ============================================================
// Layer 7 — Bitmap Font
// ============================================================
// A 5×7 pixel font covering what the charts need: letters,
// digits, percent, dot, comma and hyphen. Text is rendered in
// uppercase — lowercase input is folded before glyph lookup,
// and characters with no glyph advance as blanks.
//
// Each glyph is seven row masks, bit 4 being the leftmost of
// the five columns.

use image::{Rgb, RgbImage};

/// Glyph cell width in pixels (before scaling)
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in pixels (before scaling)
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character (glyph plus one column gap)
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Row masks for a character, if the font covers it
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Pixel width of `text` at `scale`, including inter-glyph gaps
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * ADVANCE * scale - scale
}

/// Pixel height of a text line at `scale`
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Draw `text` with its top-left corner at (x, y)
pub fn draw_text(img: &mut RgbImage, text: &str, x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            draw_glyph(img, &rows, pen_x, y, scale, color);
        }
        pen_x += (ADVANCE * scale) as i64;
    }
}

/// Draw `text` horizontally centered on `center_x`, top at `y`
pub fn draw_text_centered(
    img: &mut RgbImage,
    text: &str,
    center_x: i64,
    y: i64,
    scale: u32,
    color: Rgb<u8>,
) {
    let x = center_x - text_width(text, scale) as i64 / 2;
    draw_text(img, text, x, y, scale, color);
}

/// Draw `text` rotated a quarter turn counter-clockwise, reading
/// bottom to top. (x, y) is the left edge of the glyph column and
/// the baseline of the first character.
pub fn draw_text_up(img: &mut RgbImage, text: &str, x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    let mut pen_y = y;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            // Glyph pixel (col, row) lands at (x + row, pen_y - col):
            // the top of each letter faces left.
            for (row, mask) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if mask & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        fill_scaled(
                            img,
                            x + (row as u32 * scale) as i64,
                            pen_y - (col * scale) as i64 - (scale as i64 - 1),
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        pen_y -= (ADVANCE * scale) as i64;
    }
}

fn draw_glyph(img: &mut RgbImage, rows: &[u8; 7], x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    for (row, mask) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if mask & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                fill_scaled(
                    img,
                    x + (col * scale) as i64,
                    y + (row as u32 * scale) as i64,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Fill one scale×scale block, clipped to the image bounds
fn fill_scaled(img: &mut RgbImage, x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    for dy in 0..scale as i64 {
        for dx in 0..scale as i64 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([255, 255, 255]);
    const PAPER: Rgb<u8> = Rgb([0, 0, 0]);

    fn ink_count(img: &RgbImage) -> usize {
        img.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_unknown_characters_have_no_glyph() {
        assert!(glyph('@').is_none());
        assert!(glyph('é').is_none());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 3), 33);
    }

    #[test]
    fn test_draw_text_marks_glyph_corners() {
        let mut img = RgbImage::from_pixel(20, 10, PAPER);
        draw_text(&mut img, "L", 0, 0, 1, INK);

        // 'L' has its vertical stroke at the left and a full last row.
        assert_eq!(*img.get_pixel(0, 0), INK);
        assert_eq!(*img.get_pixel(0, 6), INK);
        assert_eq!(*img.get_pixel(4, 6), INK);
        assert_eq!(*img.get_pixel(4, 0), PAPER);
    }

    #[test]
    fn test_scaling_multiplies_coverage() {
        let mut small = RgbImage::from_pixel(20, 20, PAPER);
        draw_text(&mut small, "O", 0, 0, 1, INK);
        let mut big = RgbImage::from_pixel(40, 40, PAPER);
        draw_text(&mut big, "O", 0, 0, 2, INK);

        assert_eq!(ink_count(&big), 4 * ink_count(&small));
    }

    #[test]
    fn test_rotated_text_covers_as_much_as_horizontal() {
        let mut flat = RgbImage::from_pixel(40, 40, PAPER);
        draw_text(&mut flat, "UP", 0, 0, 1, INK);
        let mut rotated = RgbImage::from_pixel(40, 40, PAPER);
        draw_text_up(&mut rotated, "UP", 10, 30, 1, INK);

        assert_eq!(ink_count(&rotated), ink_count(&flat));
    }

    #[test]
    fn test_drawing_off_canvas_does_not_panic() {
        let mut img = RgbImage::from_pixel(10, 10, PAPER);
        draw_text(&mut img, "CLIPPED", -3, 7, 2, INK);
        draw_text_up(&mut img, "CLIPPED", 8, 5, 2, INK);
    }
}
