//! One render pass: decode → measure → layout → draw.

use std::path::Path;

use tracing::debug;

use super::FaceConfig;
use crate::asset::{BitmapAsset, FontTable};
use crate::clock::strip_meridiem;
use crate::display::DisplayConfig;
use crate::error::InkfaceError;
use crate::layout::{self, Field};
use crate::metrics::measure;
use crate::render::{Canvas, render_bitmap, render_text};

/// Decoded assets for one watchface.
#[derive(Debug, Clone)]
pub struct FaceAssets {
    pub background: BitmapAsset,
    pub time_font: FontTable,
    pub date_font: FontTable,
}

impl FaceAssets {
    /// Read and decode the background and both fonts named by `config`.
    ///
    /// A font shared by time and date is only decoded once.
    pub fn load(config: &FaceConfig, display: &DisplayConfig) -> Result<Self, InkfaceError> {
        let (time_path, date_path) = config.font_paths()?;

        let background = BitmapAsset::load(&config.bitmap, display)?;
        let time_font = FontTable::load(time_path, &display.font_defaults)?;
        let date_font = if date_path == time_path {
            time_font.clone()
        } else {
            FontTable::load(date_path, &display.font_defaults)?
        };

        Ok(Self {
            background,
            time_font,
            date_font,
        })
    }
}

/// Render a watchface showing `time` and `date`.
pub fn render_face(
    display: &DisplayConfig,
    assets: &FaceAssets,
    config: &FaceConfig,
    time: &str,
    date: &str,
) -> Canvas {
    let time = if config.no_ampm {
        strip_meridiem(time)
    } else {
        time.to_string()
    };

    let mut canvas = Canvas::for_display(display);
    render_bitmap(&mut canvas, &assets.background, config.crop);

    let time_field = Field {
        bounds: measure(&assets.time_font, &time),
        directives: config.time_directives(),
    };
    let date_field = Field {
        bounds: measure(&assets.date_font, date),
        directives: config.date_directives(),
    };
    let placement = layout::resolve(display, config.layout, &time_field, &date_field);
    debug!(
        "layout {:?}: time {:?} at {:?}, date {:?} at {:?}",
        config.layout, time_field.bounds, placement.time, date_field.bounds, placement.date
    );

    render_text(
        &mut canvas,
        &assets.time_font,
        &time,
        placement.time.x,
        placement.time.y,
        config.time_color,
    );
    render_text(
        &mut canvas,
        &assets.date_font,
        date,
        placement.date.x,
        placement.date.y,
        config.date_color,
    );

    canvas
}

/// Load the assets for `config`, render, and write a PNG to `output`.
pub fn render_face_to_file(
    display: &DisplayConfig,
    config: &FaceConfig,
    time: &str,
    date: &str,
    output: &Path,
) -> Result<Canvas, InkfaceError> {
    let assets = FaceAssets::load(config, display)?;
    let canvas = render_face(display, &assets, config, time, date);
    canvas.save_png(output)?;
    Ok(canvas)
}
