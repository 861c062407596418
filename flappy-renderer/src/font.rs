//! A 5x7 pixel font, drawn as one rectangle per horizontal run of lit pixels.

use glam::{vec2, Vec2};

use crate::scene::Shape;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom, bit 4 is the leftmost column.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ' ' => [0x00; 7],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: f32) -> f32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0.0;
    }
    (chars * ADVANCE - 1) as f32 * scale
}

pub fn text_height(scale: f32) -> f32 {
    GLYPH_HEIGHT as f32 * scale
}

/// Appends the shapes for `text` with its top-left corner at `origin`.
/// Characters without a glyph leave a blank cell.
pub fn push_text(
    shapes: &mut Vec<Shape>,
    text: &str,
    origin: Vec2,
    scale: f32,
    color: [f32; 4],
) {
    for (index, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let cell = origin + vec2((index as u32 * ADVANCE) as f32 * scale, 0.0);

        for (row, bits) in rows.iter().enumerate() {
            let mut column = 0;
            while column < GLYPH_WIDTH {
                if !is_lit(*bits, column) {
                    column += 1;
                    continue;
                }
                let start = column;
                while column < GLYPH_WIDTH && is_lit(*bits, column) {
                    column += 1;
                }
                shapes.push(Shape::rect(
                    cell + vec2(start as f32, row as f32) * scale,
                    vec2((column - start) as f32, 1.0) * scale,
                    color,
                ));
            }
        }
    }
}

fn is_lit(bits: u8, column: u32) -> bool {
    bits & (1 << (GLYPH_WIDTH - 1 - column)) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn every_hud_character_has_a_glyph() {
        for c in "SCORE: 0123456789 LIVES GAME OVER - PRESS ENTER TO RESTART!".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('#'), None);
    }

    #[test]
    fn runs_are_merged_per_row() {
        let mut shapes = Vec::new();
        push_text(&mut shapes, "I", Vec2::ZERO, 1.0, WHITE);

        assert_eq!(shapes.len(), 7);
        assert_eq!(shapes[0].position, vec2(1.0, 0.0));
        assert_eq!(shapes[0].size, vec2(3.0, 1.0));
        assert_eq!(shapes[1].position, vec2(2.0, 1.0));
        assert_eq!(shapes[1].size, vec2(1.0, 1.0));
    }

    #[test]
    fn later_characters_advance_and_scale() {
        let mut shapes = Vec::new();
        push_text(&mut shapes, " -", vec2(10.0, 20.0), 2.0, WHITE);

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].position, vec2(22.0, 26.0));
        assert_eq!(shapes[0].size, vec2(10.0, 2.0));
    }

    #[test]
    fn width_excludes_trailing_spacing() {
        assert_eq!(text_width("", 3.0), 0.0);
        assert_eq!(text_width("A", 1.0), 5.0);
        assert_eq!(text_width("AB", 2.0), 22.0);
        assert_eq!(text_height(3.0), 21.0);
    }
}
