//! # Text Metrics
//!
//! Bounding boxes for strings, computed the way Adafruit GFX's
//! `getTextBounds()` does for custom fonts with the cursor at (0, 0).
//!
//! ## Quirks Reproduced
//!
//! The box starts as the degenerate rectangle at the origin and is grown by
//! each glyph rectangle, so the origin is always inside it:
//!
//! ```text
//!   (0,0) ●─────────────┐          a glyph with x_offset = 3, y_offset = 2
//!         │   ┌───────┐ │          still yields min_x = 0, min_y = 0
//!         │   │ glyph │ │
//!         │   └───────┘ │
//!         └─────────────┘
//! ```
//!
//! Characters the font cannot render contribute nothing, not even advance.

use crate::asset::FontTable;

/// Bounding box of a string relative to its cursor origin.
///
/// `min_x`/`min_y` are the offsets to subtract from a desired top-left
/// corner to get the cursor position that draws the text there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub width: i32,
    pub height: i32,
}

/// Measure `text` in `font`.
pub fn measure(font: &FontTable, text: &str) -> TextBounds {
    let mut min_x = 0i32;
    let mut max_x = 0i32;
    let mut min_y = 0i32;
    let mut max_y = 0i32;
    let mut cursor_x = 0i32;

    for ch in text.chars() {
        let Some(glyph) = font.glyph(ch) else {
            continue;
        };

        let x = cursor_x + i32::from(glyph.x_offset);
        let y = i32::from(glyph.y_offset);

        min_x = min_x.min(x);
        max_x = max_x.max(x + i32::from(glyph.width));
        min_y = min_y.min(y);
        max_y = max_y.max(y + i32::from(glyph.height));

        cursor_x += i32::from(glyph.x_advance);
    }

    TextBounds {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Sum of advances for the renderable characters of `text`.
///
/// This is the pen travel, which differs from [`TextBounds::width`] when
/// glyphs have side bearings.
pub fn advance_width(font: &FontTable, text: &str) -> i32 {
    text.chars()
        .filter_map(|ch| font.glyph(ch))
        .map(|g| i32::from(g.x_advance))
        .sum()
}
