//! Adafruit GFX font tables.
//!
//! A GFX font header carries three declarations: the packed glyph bitmaps,
//! one `GFXglyph` record per character, and a `GFXfont` descriptor naming
//! the covered code range. [`FontTable::parse`] turns the text into a
//! read-only table; missing pieces degrade to an empty table or to the
//! display's [`FontDefaults`] rather than failing.

use std::path::Path;

use tracing::debug;

use super::decode::{self, ByteArray};
use crate::display::FontDefaults;
use crate::error::InkfaceError;

/// Metrics and bitmap location for a single character.
///
/// ```text
///            cursor
///              │ x_offset
///              ├──►┌────────┐ ▲
///              │   │ bitmap │ │ height     y_offset is measured from
///   baseline ──┼───│        │ ▼            the baseline (negative = up)
///              │   └────────┘
///              ├──────────────────►  x_advance
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Byte offset of the first bitmap row in the font's shared buffer
    pub bitmap_offset: u32,
    pub width: u8,
    pub height: u8,
    /// Cursor advance after drawing
    pub x_advance: u8,
    pub x_offset: i8,
    pub y_offset: i8,
}

impl Glyph {
    /// Convert a raw `{offset, width, height, xAdvance, xOffset, yOffset}` record.
    ///
    /// Returns `None` when any field is out of range for its type.
    pub fn from_record(record: [i64; 6]) -> Option<Self> {
        let [offset, width, height, x_advance, x_offset, y_offset] = record;
        Some(Self {
            bitmap_offset: u32::try_from(offset).ok()?,
            width: u8::try_from(width).ok()?,
            height: u8::try_from(height).ok()?,
            x_advance: u8::try_from(x_advance).ok()?,
            x_offset: i8::try_from(x_offset).ok()?,
            y_offset: i8::try_from(y_offset).ok()?,
        })
    }

    /// Number of bitmap bytes the glyph occupies (`ceil(width * height / 8)`).
    pub fn byte_len(&self) -> usize {
        (usize::from(self.width) * usize::from(self.height)).div_ceil(8)
    }
}

/// A decoded GFX font.
///
/// `glyphs[i]` describes character code `first_char + i`. A record whose
/// fields do not fit their types keeps its slot as `None`. The table may hold
/// fewer slots than the code range when the header was truncated; such codes
/// simply have no glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    pub first_char: u8,
    pub last_char: u8,
    pub y_advance: u16,
    pub glyphs: Vec<Option<Glyph>>,
    pub bitmap: Vec<u8>,
}

impl FontTable {
    /// Decode a font from header text.
    pub fn parse(source: &str, defaults: &FontDefaults) -> Self {
        let bitmap = decode::byte_array(source, ByteArray::FontBitmaps).unwrap_or_else(|e| {
            debug!("font: {}, using empty bitmap", e);
            Vec::new()
        });

        let records = decode::glyph_records(source).unwrap_or_else(|e| {
            debug!("font: {}, no glyphs", e);
            Vec::new()
        });
        let glyphs = records
            .into_iter()
            .map(|r| {
                let glyph = Glyph::from_record(r);
                if glyph.is_none() {
                    debug!("font: out-of-range glyph record {:?} has no glyph", r);
                }
                glyph
            })
            .collect();

        let (first_char, last_char, y_advance) = match decode::font_descriptor(source) {
            Ok(d) => (d.first_char, d.last_char, d.y_advance),
            Err(e) => {
                debug!("font: {}, assuming {:?}", e, defaults);
                (defaults.first_char, defaults.last_char, defaults.y_advance)
            }
        };

        Self {
            first_char,
            last_char,
            y_advance,
            glyphs,
            bitmap,
        }
    }

    /// Read and decode a font header from disk.
    pub fn load(path: &Path, defaults: &FontDefaults) -> Result<Self, InkfaceError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| InkfaceError::asset_read(path, e))?;
        let font = Self::parse(&source, defaults);
        debug!(
            "loaded font {} ({} glyphs, 0x{:02X}..=0x{:02X})",
            path.display(),
            font.glyphs.len(),
            font.first_char,
            font.last_char
        );
        let clipped = font.clipped_glyphs();
        if clipped > 0 {
            debug!("{}: {} glyphs extend past the bitmap and will be clipped", path.display(), clipped);
        }
        Ok(font)
    }

    /// Number of glyphs whose bitmap runs past the end of the shared buffer.
    pub fn clipped_glyphs(&self) -> usize {
        self.glyphs
            .iter()
            .flatten()
            .filter(|g| g.bitmap_offset as usize + g.byte_len() > self.bitmap.len())
            .count()
    }

    /// Glyph for a character, if the font can render it.
    ///
    /// Codes outside `first_char..=last_char`, past the end of a truncated
    /// glyph table, or whose record was out of range all return `None`.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        let code = u32::from(ch);
        if code < u32::from(self.first_char) || code > u32::from(self.last_char) {
            return None;
        }
        let index = (code - u32::from(self.first_char)) as usize;
        self.glyphs.get(index).and_then(Option::as_ref)
    }

    /// Whether the bit at `bit_index` of a glyph's bitmap is set.
    ///
    /// Bits are packed MSB-first starting at `bitmap_offset`. Bits that fall
    /// past the end of the buffer read as unset.
    pub fn glyph_bit(&self, glyph: &Glyph, bit_index: usize) -> bool {
        let byte_index = glyph.bitmap_offset as usize + bit_index / 8;
        let bit_position = 7 - (bit_index % 8);
        self.bitmap
            .get(byte_index)
            .is_some_and(|b| (b >> bit_position) & 1 == 1)
    }
}
