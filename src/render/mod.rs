//! # Rendering Module
//!
//! Composites backgrounds and text onto a [`Canvas`] exactly as the e-paper
//! firmware would draw them.
//!
//! ## Modules
//!
//! - [`canvas`]: the two-level output raster and PNG export
//! - [`raster`]: background blitting with cropping, glyph and text drawing
//!
//! ## Usage Example
//!
//! ```
//! use inkface::asset::{FontTable, Glyph};
//! use inkface::render::{Canvas, TextColor, render_text};
//!
//! let font = FontTable {
//!     first_char: b'I',
//!     last_char: b'I',
//!     y_advance: 8,
//!     glyphs: vec![Some(Glyph { bitmap_offset: 0, width: 1, height: 4, x_advance: 3, x_offset: 0, y_offset: -4 })],
//!     bitmap: vec![0xF0],
//! };
//!
//! let mut canvas = Canvas::new(16, 8);
//! let end = render_text(&mut canvas, &font, "II", 2, 6, TextColor::Black);
//! assert_eq!(end, 8);
//! assert_eq!(canvas.black_count(), 8);
//! ```

pub mod canvas;
pub mod raster;

pub use canvas::{Canvas, TextColor};
pub use raster::{CropRegion, render_bitmap, render_glyph, render_text};
