//! # Inkface - E-Paper Watchface Preview Renderer
//!
//! Inkface renders previews of 200×200 e-paper watchfaces from the same
//! Adafruit GFX source headers the firmware is built from. The goal is a
//! pixel-for-pixel match with the display. It provides:
//!
//! - **Asset decoding**: GFX font tables and packed 1-bpp background bitmaps
//! - **Text metrics**: `getTextBounds()`-compatible bounding boxes
//! - **Layout**: center/percentage directives, single- and two-line modes
//! - **Rasterizing**: glyph drawing, background cropping, PNG export
//! - **Batch rendering**: parallel previews for many watchfaces
//!
//! ## Quick Start
//!
//! ```no_run
//! use inkface::{DisplayConfig, FaceConfig};
//! use inkface::face::{FaceAssets, render_face};
//! use std::path::Path;
//!
//! let display = DisplayConfig::GDEH0154D67;
//!
//! // Read field assignments (fonts, positions, colors) from the watchface header
//! let config = FaceConfig::load_header(Path::new("faces/bird.h"), Path::new("fonts"), &display)?;
//!
//! // Decode background and fonts, then render
//! let assets = FaceAssets::load(&config, &display)?;
//! let canvas = render_face(&display, &assets, &config, "6:24 AM", "Jun 24");
//! canvas.save_png(Path::new("bird.png"))?;
//!
//! # Ok::<(), inkface::error::InkfaceError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`asset`] | Header scanner, font tables, background bitmaps |
//! | [`metrics`] | Text bounding boxes |
//! | [`layout`] | Position directives to cursor coordinates |
//! | [`render`] | Canvas and compositing |
//! | [`face`] | Watchface configuration and the render pipeline |
//! | [`batch`] | Parallel rendering of many watchfaces |
//! | [`clock`] | Time/date strings in the watch's format |
//! | [`display`] | Panel constants |
//! | [`error`] | Error types |

pub mod asset;
pub mod batch;
pub mod clock;
pub mod display;
pub mod error;
pub mod face;
pub mod layout;
pub mod metrics;
pub mod render;

// Re-exports for convenience
pub use display::DisplayConfig;
pub use error::InkfaceError;
pub use face::FaceConfig;
