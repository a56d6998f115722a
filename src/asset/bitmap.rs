//! Watchface background bitmaps.
//!
//! The header only carries the packed bytes. Dimensions come from the
//! display: every background is a full-screen 1-bpp image, packed row-major
//! and MSB-first with no row padding (`bit = y * width + x`).

use std::path::Path;

use tracing::debug;

use super::decode::{self, ByteArray};
use crate::display::DisplayConfig;
use crate::error::InkfaceError;

/// A packed 1-bit-per-pixel background image. Set bits are black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapAsset {
    pub width: u16,
    pub height: u16,
    pub bitmap: Vec<u8>,
}

impl BitmapAsset {
    /// Decode a background from watchface header text.
    ///
    /// A header without a bitmap array decodes to an all-white image.
    pub fn parse(source: &str, display: &DisplayConfig) -> Self {
        let bitmap = decode::byte_array(source, ByteArray::FaceBitmap).unwrap_or_else(|e| {
            debug!("bitmap: {}, rendering blank background", e);
            Vec::new()
        });
        Self {
            width: display.width,
            height: display.height,
            bitmap,
        }
    }

    /// Read and decode a watchface header from disk.
    pub fn load(path: &Path, display: &DisplayConfig) -> Result<Self, InkfaceError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| InkfaceError::asset_read(path, e))?;
        let asset = Self::parse(&source, display);
        let expected = asset.expected_len();
        if asset.bitmap.len() != expected {
            debug!(
                "{}: {} bitmap bytes, expected {}",
                path.display(),
                asset.bitmap.len(),
                expected
            );
        }
        Ok(asset)
    }

    /// Byte count of a complete image at this size.
    pub fn expected_len(&self) -> usize {
        (usize::from(self.width) * usize::from(self.height)).div_ceil(8)
    }

    /// Whether the pixel at (x, y) is black.
    ///
    /// Coordinates outside the image, or bits missing from a short buffer,
    /// read as white.
    pub fn is_black(&self, x: u32, y: u32) -> bool {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return false;
        }
        let bit_index = y as usize * usize::from(self.width) + x as usize;
        let bit_position = 7 - (bit_index % 8);
        self.bitmap
            .get(bit_index / 8)
            .is_some_and(|b| (b >> bit_position) & 1 == 1)
    }
}
