//! # Display Configuration
//!
//! Hardware constants for the target e-paper panel, plus the fallback values
//! used when a font header has no descriptor.
//!
//! ## Supported Panels
//!
//! | Model | Size (px) | Colors | Controller |
//! |-------|-----------|--------|------------|
//! | GDEH0154D67 | 200×200 | black/white | SSD1681 |
//!
//! ## Usage
//!
//! ```
//! use inkface::display::DisplayConfig;
//!
//! let display = DisplayConfig::GDEH0154D67;
//! assert_eq!((display.width, display.height), (200, 200));
//!
//! // Tests and other panels override fields with struct update syntax
//! let tiny = DisplayConfig { width: 16, height: 16, ..display };
//! assert_eq!(tiny.line_gap, 6);
//! ```

/// Values assumed for a font header that lacks a `GFXfont` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDefaults {
    /// First character code covered by the glyph table
    pub first_char: u8,

    /// Last character code covered by the glyph table (inclusive)
    pub last_char: u8,

    /// Line height
    pub y_advance: u16,
}

impl FontDefaults {
    /// Printable ASCII, no line height.
    pub const ASCII: Self = Self {
        first_char: 0x20,
        last_char: 0x7E,
        y_advance: 0,
    };
}

impl Default for FontDefaults {
    fn default() -> Self {
        Self::ASCII
    }
}

/// # Display Configuration
///
/// Everything the decoder, layout engine and rasterizer need to know about
/// the panel. Passed explicitly to each stage instead of living in globals.
///
/// - **width / height**: canvas size in pixels; background bitmaps are
///   always decoded at this size
/// - **line_gap**: horizontal gap between time and date in single-line layout
/// - **font_defaults**: code range used when a font has no descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Panel model name
    pub name: &'static str,

    /// Canvas width in pixels
    pub width: u16,

    /// Canvas height in pixels
    pub height: u16,

    /// Gap in pixels between time and date on a shared line
    pub line_gap: i32,

    /// Fallback font descriptor
    pub font_defaults: FontDefaults,
}

impl DisplayConfig {
    /// # GoodDisplay GDEH0154D67
    ///
    /// 1.54" 200×200 black/white panel driven by an SSD1681.
    pub const GDEH0154D67: Self = Self {
        name: "GDEH0154D67",
        width: 200,
        height: 200,
        line_gap: 6,
        font_defaults: FontDefaults::ASCII,
    };

    /// Canvas width as a signed coordinate.
    #[inline]
    pub fn width_px(&self) -> i32 {
        i32::from(self.width)
    }

    /// Canvas height as a signed coordinate.
    #[inline]
    pub fn height_px(&self) -> i32 {
        i32::from(self.height)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::GDEH0154D67
    }
}
