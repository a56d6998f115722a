//! Glyph and background compositing.
//!
//! Both assets use the same bit addressing: bit `i` of an image lives in
//! byte `i / 8` at position `7 - i % 8`, with `i = row * width + col` and no
//! per-row padding. Fonts start counting at the glyph's `bitmap_offset`.

use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, TextColor};
use crate::asset::{BitmapAsset, FontTable};
use crate::display::DisplayConfig;

/// Rectangle of the background that is kept: `[x_start, x_end) × [y_start, y_end)`.
///
/// Everything outside is painted white, and the kept pixels stay where they
/// are in the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x_start: u32,
    pub y_start: u32,
    pub x_end: u32,
    pub y_end: u32,
}

impl CropRegion {
    /// The whole display.
    pub fn full(display: &DisplayConfig) -> Self {
        Self {
            x_start: 0,
            y_start: 0,
            x_end: u32::from(display.width),
            y_end: u32::from(display.height),
        }
    }

    /// Whether this region covers exactly a `width × height` canvas.
    pub fn is_full(&self, width: usize, height: usize) -> bool {
        self.x_start == 0
            && self.y_start == 0
            && self.x_end as usize == width
            && self.y_end as usize == height
    }
}

/// Draw the background bitmap, restricted to `crop`.
///
/// The canvas is repainted white first, so this is the first step of a pass.
pub fn render_bitmap(canvas: &mut Canvas, asset: &BitmapAsset, crop: CropRegion) {
    canvas.fill(false);

    let (x_range, y_range) = if crop.is_full(canvas.width(), canvas.height()) {
        (0..canvas.width() as u32, 0..canvas.height() as u32)
    } else {
        let x_end = crop.x_end.min(canvas.width() as u32);
        let y_end = crop.y_end.min(canvas.height() as u32);
        (crop.x_start..x_end, crop.y_start..y_end)
    };

    for y in y_range {
        for x in x_range.clone() {
            if asset.is_black(x, y) {
                canvas.set_pixel(x as i32, y as i32, true);
            }
        }
    }
}

/// Draw one character with its cursor at (x, y) and return the next cursor x.
///
/// Characters the font cannot render leave the canvas untouched and return
/// `x` unchanged.
pub fn render_glyph(
    canvas: &mut Canvas,
    font: &FontTable,
    ch: char,
    x: i32,
    y: i32,
    color: TextColor,
) -> i32 {
    let Some(glyph) = font.glyph(ch) else {
        return x;
    };

    let black = color.is_black();
    let width = usize::from(glyph.width);
    let origin_x = x + i32::from(glyph.x_offset);
    let origin_y = y + i32::from(glyph.y_offset);

    for row in 0..usize::from(glyph.height) {
        for col in 0..width {
            if font.glyph_bit(glyph, row * width + col) {
                canvas.set_pixel(origin_x + col as i32, origin_y + row as i32, black);
            }
        }
    }

    x + i32::from(glyph.x_advance)
}

/// Draw a string starting with the cursor at (x, y); returns the final cursor x.
pub fn render_text(
    canvas: &mut Canvas,
    font: &FontTable,
    text: &str,
    x: i32,
    y: i32,
    color: TextColor,
) -> i32 {
    text.chars()
        .fold(x, |cursor, ch| render_glyph(canvas, font, ch, cursor, y, color))
}
