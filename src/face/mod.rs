//! # Watchface Configuration
//!
//! Everything a render pass needs besides the display strings: which
//! background and fonts to use, where the text goes and in which color.
//!
//! ## Sources
//!
//! A [`FaceConfig`] can come from:
//!
//! - a watchface header, whose `WatchFace` field assignments are scanned by
//!   [`FaceConfig::from_header`]
//! - a JSON file ([`FaceConfig::from_json`]), layered over the display's
//!   defaults
//! - the CLI, by overriding individual fields
//!
//! ## Header Fields
//!
//! | Assignment | Field | Default |
//! |------------|-------|---------|
//! | `text1font = &Name;` | `time_font` = `<fonts_dir>/Name.h` | none |
//! | `text2font = &Name;` | `date_font` | none |
//! | `text1x`, `text1y`, `text2x`, `text2y` | directives | `-1` (center) |
//! | `layout = 0\|1;` | `layout` | `0` |
//! | `noAMPM = true;` | `no_ampm` | `false` |
//! | `text1color = GxEPD_WHITE;` | `time_color` | black |
//! | `bitmap_x_start` … `bitmap_y_end` | `crop` | full display |

mod pipeline;

pub use pipeline::{FaceAssets, render_face, render_face_to_file};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asset::decode;
use crate::display::DisplayConfig;
use crate::error::InkfaceError;
use crate::layout::{FieldDirectives, LayoutMode};
use crate::render::{CropRegion, TextColor};

/// Render parameters for one watchface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceConfig {
    /// Header holding the background bitmap
    pub bitmap: PathBuf,
    pub time_font: Option<PathBuf>,
    pub date_font: Option<PathBuf>,
    pub layout: LayoutMode,
    pub time_x: i32,
    pub time_y: i32,
    pub date_x: i32,
    pub date_y: i32,
    pub time_color: TextColor,
    pub date_color: TextColor,
    pub crop: CropRegion,
    /// Drop the " AM"/" PM" suffix from the time string
    pub no_ampm: bool,
}

impl FaceConfig {
    /// Defaults for a background on the given display: everything centered,
    /// single line, black text, no crop.
    pub fn new(bitmap: impl Into<PathBuf>, display: &DisplayConfig) -> Self {
        Self {
            bitmap: bitmap.into(),
            time_font: None,
            date_font: None,
            layout: LayoutMode::SingleLine,
            time_x: -1,
            time_y: -1,
            date_x: -1,
            date_y: -1,
            time_color: TextColor::Black,
            date_color: TextColor::Black,
            crop: CropRegion::full(display),
            no_ampm: false,
        }
    }

    /// Read the `WatchFace` assignments from a watchface header.
    ///
    /// `bitmap` is where the background lives (normally the same header).
    /// Font names are resolved to `<fonts_dir>/<Name>.h`. Assignments that
    /// are missing or unreadable keep their defaults.
    pub fn from_header(
        source: &str,
        bitmap: impl Into<PathBuf>,
        fonts_dir: &Path,
        display: &DisplayConfig,
    ) -> Self {
        let mut config = Self::new(bitmap, display);

        config.time_font = font_assignment(source, "text1font", fonts_dir);
        config.date_font = font_assignment(source, "text2font", fonts_dir);

        set_parsed(source, "text1x", &mut config.time_x);
        set_parsed(source, "text1y", &mut config.time_y);
        set_parsed(source, "text2x", &mut config.date_x);
        set_parsed(source, "text2y", &mut config.date_y);

        let mut layout = u8::from(config.layout);
        set_parsed(source, "layout", &mut layout);
        match LayoutMode::try_from(layout) {
            Ok(mode) => config.layout = mode,
            Err(e) => debug!("face: {}, keeping {:?}", e, config.layout),
        }

        set_parsed(source, "noAMPM", &mut config.no_ampm);

        if let Some(color) = color_assignment(source, "text1color") {
            config.time_color = color;
        }
        if let Some(color) = color_assignment(source, "text2color") {
            config.date_color = color;
        }

        set_parsed(source, "bitmap_x_start", &mut config.crop.x_start);
        set_parsed(source, "bitmap_y_start", &mut config.crop.y_start);
        set_parsed(source, "bitmap_x_end", &mut config.crop.x_end);
        set_parsed(source, "bitmap_y_end", &mut config.crop.y_end);

        config
    }

    /// Read a watchface header from disk. The header is also the bitmap source.
    pub fn load_header(
        path: &Path,
        fonts_dir: &Path,
        display: &DisplayConfig,
    ) -> Result<Self, InkfaceError> {
        let source =
            std::fs::read_to_string(path).map_err(|e| InkfaceError::asset_read(path, e))?;
        Ok(Self::from_header(&source, path, fonts_dir, display))
    }

    /// Parse a JSON config. Omitted top-level fields take the defaults of
    /// [`FaceConfig::new`] for `display`; a `crop` object must be complete.
    pub fn from_json(json: &str, display: &DisplayConfig) -> Result<Self, InkfaceError> {
        let invalid = |e: serde_json::Error| InkfaceError::Config(format!("invalid face config: {}", e));

        let overrides: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(invalid)?;
        let mut merged = serde_json::to_value(Self::new(PathBuf::new(), display)).map_err(invalid)?;
        if let Some(fields) = merged.as_object_mut() {
            fields.extend(overrides);
        }
        serde_json::from_value(merged).map_err(invalid)
    }

    /// Read a JSON config file.
    pub fn load_json(path: &Path, display: &DisplayConfig) -> Result<Self, InkfaceError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| InkfaceError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&json, display)
    }

    pub fn time_directives(&self) -> FieldDirectives {
        FieldDirectives::new(self.time_x, self.time_y)
    }

    pub fn date_directives(&self) -> FieldDirectives {
        FieldDirectives::new(self.date_x, self.date_y)
    }

    /// Font paths for time and date, or a config error naming the missing one.
    pub fn font_paths(&self) -> Result<(&Path, &Path), InkfaceError> {
        let time = self
            .time_font
            .as_deref()
            .ok_or_else(|| InkfaceError::Config("no time font configured".to_string()))?;
        let date = self
            .date_font
            .as_deref()
            .ok_or_else(|| InkfaceError::Config("no date font configured".to_string()))?;
        Ok((time, date))
    }
}

fn set_parsed<T: std::str::FromStr>(source: &str, name: &str, slot: &mut T) {
    let Some(raw) = decode::assignment(source, name) else {
        return;
    };
    match raw.parse() {
        Ok(value) => *slot = value,
        Err(_) => debug!("face: ignoring {} = {}", name, raw),
    }
}

fn font_assignment(source: &str, name: &str, fonts_dir: &Path) -> Option<PathBuf> {
    let raw = decode::assignment(source, name)?;
    let font = raw.trim_start_matches('&').trim();
    if font.is_empty() || !font.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        debug!("face: ignoring {} = {}", name, raw);
        return None;
    }
    Some(fonts_dir.join(format!("{}.h", font)))
}

fn color_assignment(source: &str, name: &str) -> Option<TextColor> {
    match decode::assignment(source, name)? {
        "GxEPD_BLACK" => Some(TextColor::Black),
        "GxEPD_WHITE" => Some(TextColor::White),
        other => {
            debug!("face: ignoring {} = {}", name, other);
            None
        }
    }
}
