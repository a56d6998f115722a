//! # Asset Decoding
//!
//! Turns Adafruit GFX source headers into in-memory fonts and backgrounds.
//!
//! ## Modules
//!
//! - [`decode`]: regex scanner that extracts byte arrays, glyph records and
//!   the font descriptor from header text
//! - [`font`]: [`FontTable`] and [`Glyph`]
//! - [`bitmap`]: [`BitmapAsset`], the full-screen background
//!
//! ## Failure Policy
//!
//! Reading a file can fail and is reported as
//! [`InkfaceError::AssetRead`](crate::error::InkfaceError::AssetRead).
//! Decoding cannot: a header that lacks an expected declaration produces an
//! empty or default structure and a `debug!` line.
//!
//! ```
//! use inkface::asset::FontTable;
//! use inkface::display::DisplayConfig;
//!
//! let display = DisplayConfig::GDEH0154D67;
//! let font = FontTable::parse("/* not a font */", &display.font_defaults);
//! assert!(font.glyphs.is_empty());
//! assert_eq!(font.first_char, 0x20);
//! ```

pub mod bitmap;
pub mod decode;
pub mod font;

pub use bitmap::BitmapAsset;
pub use font::{FontTable, Glyph};
