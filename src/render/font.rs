//! 字型
//!
//! 內建 5x7 字模（大寫字母、數字、常用符號），外加可選的 JSON 覆蓋檔。
//! 覆蓋檔缺失或損壞屬於 `ResourceUnavailable`，呼叫端降級到內建字模

use std::collections::HashMap;
use std::path::Path;

use crate::quantum::QuantumError;

use super::canvas::Canvas;

/// 每個字模 7 列，每列低 5 位有效
type Glyph = [u8; 7];

#[rustfmt::skip]
const BUILTIN: &[(char, Glyph)] = &[
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('|', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('<', [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010]),
    ('>', [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000]),
    ('=', [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('(', [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010]),
    (')', [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000]),
    ('[', [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110]),
    (']', [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    (',', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b01000]),
    (':', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
    ('/', [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
    ('^', [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('?', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
    ('_', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]),
];

/// 未知字元的替代字模（實心框）
const FALLBACK: Glyph = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

pub struct Font {
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn builtin() -> Self {
        Self {
            glyphs: BUILTIN.iter().copied().collect(),
        }
    }

    /// 內建字模加上 JSON 覆蓋檔（{"字元": [7 列位元值]}）
    pub fn with_overlay<P: AsRef<Path>>(path: P) -> Result<Self, QuantumError> {
        let data = std::fs::read_to_string(&path).map_err(|e| {
            QuantumError::ResourceUnavailable(format!("font {}: {}", path.as_ref().display(), e))
        })?;
        let overlay: HashMap<char, Glyph> = serde_json::from_str(&data).map_err(|e| {
            QuantumError::ResourceUnavailable(format!("font {}: {}", path.as_ref().display(), e))
        })?;

        let mut font = Self::builtin();
        font.glyphs.extend(overlay);
        Ok(font)
    }

    fn glyph(&self, c: char) -> &Glyph {
        self.glyphs.get(&c).unwrap_or(&FALLBACK)
    }

    /// 繪製一行文字，回傳佔用的像素寬度
    ///
    /// 小寫字母以大寫字模繪製；每字元佔 6 格（5 格字模 + 1 格間距）
    pub fn draw_text(
        &self,
        canvas: &mut Canvas,
        x: i64,
        y: i64,
        text: &str,
        scale: u32,
        color: [u8; 3],
    ) -> i64 {
        let scale = scale.max(1) as i64;
        let mut cursor = x;
        for c in text.chars() {
            let glyph = self.glyph(c.to_ascii_uppercase());
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..5 {
                    if bits & (1 << (4 - col)) != 0 {
                        for dy in 0..scale {
                            for dx in 0..scale {
                                canvas.set_pixel(
                                    cursor + col as i64 * scale + dx,
                                    y + row as i64 * scale + dy,
                                    color,
                                );
                            }
                        }
                    }
                }
            }
            cursor += 6 * scale;
        }
        cursor - x
    }

    /// 一行文字的像素寬度
    pub fn text_width(&self, text: &str, scale: u32) -> i64 {
        text.chars().count() as i64 * 6 * scale.max(1) as i64
    }

    /// 一行文字的像素高度
    pub fn text_height(&self, scale: u32) -> i64 {
        7 * scale.max(1) as i64
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_formula_charset() {
        let font = Font::builtin();
        for c in "|PSI> = A|X> + B|O> [01] ^2 (/),.".chars() {
            if c == ' ' {
                continue;
            }
            assert!(
                font.glyphs.contains_key(&c.to_ascii_uppercase()),
                "missing glyph for {:?}",
                c
            );
        }
    }

    #[test]
    fn test_draw_text_advances_cursor() {
        let font = Font::builtin();
        let mut canvas = Canvas::new(100, 20, [0, 0, 0]);
        let width = font.draw_text(&mut canvas, 2, 2, "XO", 1, [255, 255, 255]);
        assert_eq!(width, 12);
        assert_eq!(width, font.text_width("XO", 1));
    }

    #[test]
    fn test_missing_overlay_is_resource_error() {
        assert!(matches!(
            Font::with_overlay("/nonexistent/glyphs.json"),
            Err(QuantumError::ResourceUnavailable(_))
        ));
    }

    #[test]
    fn test_unknown_char_uses_fallback_box() {
        let font = Font::builtin();
        let mut canvas = Canvas::new(20, 20, [0, 0, 0]);
        font.draw_text(&mut canvas, 0, 0, "~", 1, [255, 255, 255]);
        // 實心框的左上角一定有像素
        assert_eq!(canvas.pixel(0, 0), [255, 255, 255, 255]);
    }
}
