//! # Layout Engine
//!
//! Converts per-field position directives into cursor coordinates for the
//! rasterizer, using the same integer and floating point steps as the
//! watch firmware so previews land on exactly the same pixels.
//!
//! ## Directives
//!
//! Each axis of each text field carries one integer:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `< 0` | center the text's bounding box on that axis |
//! | `0..` | start the box at that percentage of the canvas |
//!
//! ## Modes
//!
//! ```text
//! SingleLine                          TwoLine
//! ┌────────────────────────┐          ┌────────────────────────┐
//! │                        │          │       6:24 AM          │ ← time x/y
//! │   6:24 AM ␣␣␣␣␣␣ Jun 24│          │                        │
//! │   └ time x/y only ┘    │          │         Jun 24         │ ← date x/y
//! └────────────────────────┘          └────────────────────────┘
//! ```
//!
//! In single-line mode the date directives are ignored: the date follows the
//! time after `line_gap` pixels and shares its top edge.

use serde::{Deserialize, Serialize};

use crate::display::DisplayConfig;
use crate::error::InkfaceError;
use crate::metrics::TextBounds;

/// Position instruction for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Center the bounding box on the canvas
    Center,
    /// Place the box edge at this percentage of the canvas extent
    Percent(i32),
}

impl Directive {
    /// Interpret a raw directive (`-1` style sentinel or percentage).
    pub fn from_raw(value: i32) -> Self {
        if value < 0 {
            Directive::Center
        } else {
            Directive::Percent(value)
        }
    }

    /// Box edge coordinate for an object of `size` on an axis of `extent`.
    pub fn resolve(self, extent: i32, size: i32) -> i32 {
        match self {
            Directive::Center => (extent - size) / 2,
            Directive::Percent(pct) => percent_of(extent, pct),
        }
    }
}

impl From<i32> for Directive {
    fn from(value: i32) -> Self {
        Self::from_raw(value)
    }
}

/// `extent * pct%`, truncated.
///
/// Computed in `f64` because the firmware does `(int)(screenW * (pct / 100.0))`;
/// some percentages (29, 57, 58 on a 200 px axis) land one pixel below the
/// exact integer result.
pub fn percent_of(extent: i32, pct: i32) -> i32 {
    (f64::from(extent) * (f64::from(pct) / 100.0)) as i32
}

/// How time and date are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LayoutMode {
    /// Time and date on one line, positioned by the time directives
    #[default]
    SingleLine,
    /// Time and date positioned independently
    TwoLine,
}

impl TryFrom<u8> for LayoutMode {
    type Error = InkfaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LayoutMode::SingleLine),
            1 => Ok(LayoutMode::TwoLine),
            other => Err(InkfaceError::Config(format!(
                "layout must be 0 (single line) or 1 (two lines), got {}",
                other
            ))),
        }
    }
}

impl From<LayoutMode> for u8 {
    fn from(mode: LayoutMode) -> u8 {
        match mode {
            LayoutMode::SingleLine => 0,
            LayoutMode::TwoLine => 1,
        }
    }
}

/// Directives for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDirectives {
    pub x: Directive,
    pub y: Directive,
}

impl FieldDirectives {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x: Directive::from_raw(x),
            y: Directive::from_raw(y),
        }
    }

    pub const CENTER: Self = Self {
        x: Directive::Center,
        y: Directive::Center,
    };
}

/// A measured text field waiting to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub bounds: TextBounds,
    pub directives: FieldDirectives,
}

/// Cursor position to hand to the rasterizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Resolved cursor positions for both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub time: Point,
    pub date: Point,
}

/// Place the time and date fields on the canvas.
pub fn resolve(display: &DisplayConfig, mode: LayoutMode, time: &Field, date: &Field) -> Placement {
    let screen_w = display.width_px();
    let screen_h = display.height_px();

    match mode {
        LayoutMode::SingleLine => {
            let t = &time.bounds;
            let d = &date.bounds;
            let total_w = t.width + d.width + display.line_gap;
            let total_h = t.height.max(d.height);

            let origin_x = time.directives.x.resolve(screen_w, total_w);
            let top_y = time.directives.y.resolve(screen_h, total_h);

            Placement {
                time: Point {
                    x: origin_x - t.min_x,
                    y: top_y - t.min_y,
                },
                date: Point {
                    x: origin_x + t.width + display.line_gap - d.min_x,
                    y: top_y - d.min_y,
                },
            }
        }
        LayoutMode::TwoLine => Placement {
            time: place_field(time, screen_w, screen_h),
            date: place_field(date, screen_w, screen_h),
        },
    }
}

fn place_field(field: &Field, screen_w: i32, screen_h: i32) -> Point {
    let b = &field.bounds;
    Point {
        x: field.directives.x.resolve(screen_w, b.width) - b.min_x,
        y: field.directives.y.resolve(screen_h, b.height) - b.min_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DISPLAY: DisplayConfig = DisplayConfig::GDEH0154D67;

    fn bounds(min_x: i32, min_y: i32, width: i32, height: i32) -> TextBounds {
        TextBounds {
            min_x,
            min_y,
            width,
            height,
        }
    }

    fn field(bounds: TextBounds, x: i32, y: i32) -> Field {
        Field {
            bounds,
            directives: FieldDirectives::new(x, y),
        }
    }

    #[test]
    fn test_center_directive() {
        assert_eq!(Directive::from_raw(-1).resolve(200, 50), 75);
        // Odd remainder goes to the right/bottom
        assert_eq!(Directive::Center.resolve(200, 51), 74);
        // Wider than the canvas: C-style truncation toward zero
        assert_eq!(Directive::Center.resolve(200, 203), -1);
    }

    #[test]
    fn test_percent_directive_ignores_size() {
        assert_eq!(Directive::from_raw(50).resolve(200, 10), 100);
        assert_eq!(Directive::from_raw(50).resolve(200, 150), 100);
        assert_eq!(Directive::from_raw(0).resolve(200, 10), 0);
        assert_eq!(Directive::from_raw(100).resolve(200, 10), 200);
    }

    #[test]
    fn test_percent_matches_firmware_float_truncation() {
        assert_eq!(percent_of(200, 29), 57);
        assert_eq!(percent_of(200, 57), 113);
        assert_eq!(percent_of(200, 58), 115);
        assert_eq!(percent_of(200, 30), 60);
    }

    #[test]
    fn test_two_line_center_subtracts_min() {
        let time = field(bounds(1, -20, 50, 21), -1, -1);
        let date = field(bounds(0, -10, 40, 12), 50, 90);
        let p = resolve(&DISPLAY, LayoutMode::TwoLine, &time, &date);
        // (200 - 50) / 2 - 1, (200 - 21) / 2 + 20
        assert_eq!(p.time, Point { x: 74, y: 109 });
        assert_eq!(p.date, Point { x: 100, y: 190 });
    }

    #[test]
    fn test_single_line_shares_top_edge() {
        let time = field(bounds(1, -20, 50, 21), -1, -1);
        let date = field(bounds(2, -10, 40, 12), 3, 90);
        let p = resolve(&DISPLAY, LayoutMode::SingleLine, &time, &date);
        // total_w = 50 + 40 + 6 = 96 → origin 52; total_h = 21 → top 89
        assert_eq!(p.time, Point { x: 51, y: 109 });
        assert_eq!(p.date, Point { x: 52 + 50 + 6 - 2, y: 99 });
    }

    #[test]
    fn test_single_line_ignores_date_directives() {
        let time = field(bounds(0, -20, 50, 20), 10, 10);
        let a = field(bounds(0, -10, 40, 10), 0, 0);
        let b = field(bounds(0, -10, 40, 10), 80, 95);
        assert_eq!(
            resolve(&DISPLAY, LayoutMode::SingleLine, &time, &a),
            resolve(&DISPLAY, LayoutMode::SingleLine, &time, &b)
        );
    }

    #[test]
    fn test_two_line_honors_date_y() {
        let time = field(bounds(0, -20, 50, 20), 10, 10);
        let date = field(bounds(0, -10, 40, 10), 10, 80);
        let single = resolve(&DISPLAY, LayoutMode::SingleLine, &time, &date);
        let two = resolve(&DISPLAY, LayoutMode::TwoLine, &time, &date);
        assert_ne!(single.date.y, two.date.y);
        assert_eq!(two.date.y, 160 + 10);
    }

    #[test]
    fn test_layout_mode_from_u8() {
        assert_eq!(LayoutMode::try_from(0).unwrap(), LayoutMode::SingleLine);
        assert_eq!(LayoutMode::try_from(1).unwrap(), LayoutMode::TwoLine);
        assert!(LayoutMode::try_from(2).is_err());
        assert_eq!(u8::from(LayoutMode::TwoLine), 1);
    }
}
