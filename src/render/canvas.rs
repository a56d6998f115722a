//! Two-level output raster.

use std::path::Path;

use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

use crate::display::DisplayConfig;
use crate::error::InkfaceError;

/// Text color flag as stored in watchface configs (`GxEPD_BLACK` = 0,
/// `GxEPD_WHITE` = 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TextColor {
    #[default]
    Black,
    White,
}

impl TextColor {
    /// Whether glyph pixels drawn in this color are black.
    pub fn is_black(self) -> bool {
        self == TextColor::Black
    }
}

impl TryFrom<u8> for TextColor {
    type Error = InkfaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TextColor::Black),
            1 => Ok(TextColor::White),
            other => Err(InkfaceError::Config(format!(
                "text color must be 0 (black) or 1 (white), got {}",
                other
            ))),
        }
    }
}

impl From<TextColor> for u8 {
    fn from(color: TextColor) -> u8 {
        match color {
            TextColor::Black => 0,
            TextColor::White => 1,
        }
    }
}

/// A black/white pixel buffer for one render pass.
///
/// Starts white. Draw calls take `&mut Canvas`, so a pass has exactly one
/// writer; writes outside the canvas are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    /// One byte per pixel, 1 = black
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a white canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width * height],
        }
    }

    /// Create a white canvas the size of the display.
    pub fn for_display(display: &DisplayConfig) -> Self {
        Self::new(usize::from(display.width), usize::from(display.height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Set a pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, black: bool) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = u8::from(black);
        }
    }

    /// Whether the pixel is black. Out-of-bounds reads as white.
    pub fn is_black(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.pixels[idx] != 0)
    }

    /// Paint every pixel.
    pub fn fill(&mut self, black: bool) {
        self.pixels.fill(u8::from(black));
    }

    /// Number of black pixels.
    pub fn black_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }

    /// Convert to an 8-bit grayscale image (black = 0, white = 255).
    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = if self.pixels[y * self.width + x] != 0 {
                    0u8
                } else {
                    255u8
                };
                img.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }
        img
    }

    /// Encode as PNG bytes.
    ///
    /// The PNG is 8-bit grayscale (`L8`), not 1-bit, but only ever holds the
    /// two levels 0 and 255.
    pub fn to_png(&self) -> Result<Vec<u8>, InkfaceError> {
        use image::ImageEncoder;

        let img = self.to_image();
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                img.as_raw(),
                self.width as u32,
                self.height as u32,
                image::ExtendedColorType::L8,
            )
            .map_err(|e: image::ImageError| InkfaceError::Image(e.to_string()))?;
        Ok(png_bytes)
    }

    /// Write the canvas as an 8-bit grayscale PNG file with two levels.
    pub fn save_png(&self, path: &Path) -> Result<(), InkfaceError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| InkfaceError::Image(format!("Failed to save {}: {}", path.display(), e)))
    }
}
