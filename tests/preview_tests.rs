//! # Preview Tests
//!
//! End-to-end checks that go through header text, the way the tool is used:
//! synthetic GFX font and watchface headers are written to a temp directory,
//! decoded, laid out, rendered and compared pixel by pixel.

use std::fs;
use std::path::{Path, PathBuf};

use inkface::asset::{BitmapAsset, FontTable};
use inkface::batch::{BatchJob, render_batch};
use inkface::face::{FaceAssets, render_face, render_face_to_file};
use inkface::layout::LayoutMode;
use inkface::metrics::{TextBounds, measure};
use inkface::render::{Canvas, TextColor, render_text};
use inkface::{DisplayConfig, FaceConfig, InkfaceError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const DISPLAY: DisplayConfig = DisplayConfig::GDEH0154D67;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a GFX font header. `records` are listed from `first` upward.
fn font_header(name: &str, first: u8, last: u8, bitmap: &[u8], records: &[[i64; 6]]) -> String {
    let mut src = format!(
        "const uint8_t {name}Bitmaps[] PROGMEM = {{\n  {} }};\n\n",
        hex_list(bitmap)
    );
    src.push_str(&format!("const GFXglyph {name}Glyphs[] PROGMEM = {{\n"));
    for (i, r) in records.iter().enumerate() {
        let sep = if i + 1 == records.len() { " };" } else { "," };
        src.push_str(&format!(
            "  {{ {:5}, {:3}, {:3}, {:3}, {:4}, {:4} }}{}   // 0x{:02X}\n",
            r[0],
            r[1],
            r[2],
            r[3],
            r[4],
            r[5],
            sep,
            usize::from(first) + i
        ));
    }
    src.push_str(&format!(
        "\nconst GFXfont {name} PROGMEM = {{\n  (uint8_t  *){name}Bitmaps,\n  (GFXglyph *){name}Glyphs,\n  0x{:02X}, 0x{:02X}, 24 }};\n",
        first, last
    ));
    src
}

/// Printable-ASCII font whose only visible glyph is a solid 4x4 'A'.
fn block_a_font(x_offset: i64, y_offset: i64) -> String {
    let mut records = vec![[0, 0, 0, 0, 0, 0]; usize::from(b'A' - b' ')];
    records[0] = [0, 0, 0, 5, 0, 1]; // space advances but draws nothing
    records.push([0, 4, 4, 5, x_offset, y_offset]);
    font_header("BlockA8pt7b", 0x20, 0x7E, &[0xFF, 0xFF], &records)
}

fn face_header(name: &str, bitmap: &[u8], fields: &str) -> String {
    format!(
        "const unsigned char epd_bitmap_{name} [] PROGMEM = {{\n  {}\n}};\n\n{fields}\n",
        hex_list(bitmap)
    )
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// DECODE + RASTER
// ============================================================================

#[test]
fn test_block_glyph_end_to_end() {
    let font = FontTable::parse(&block_a_font(1, -4), &DISPLAY.font_defaults);
    assert_eq!(font.first_char, 0x20);
    assert_eq!(font.last_char, 0x7E);

    let mut canvas = Canvas::for_display(&DISPLAY);
    let next = render_text(&mut canvas, &font, "A", 10, 10, TextColor::Black);
    assert_eq!(next, 15);

    for y in 0..200 {
        for x in 0..200 {
            let expected = (11..15).contains(&x) && (6..10).contains(&y);
            assert_eq!(canvas.is_black(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn test_glyph_past_table_end_is_skipped() {
    // 'B' is within 0x20..=0x7E but the table stops at 'A'
    let font = FontTable::parse(&block_a_font(0, -4), &DISPLAY.font_defaults);
    assert_eq!(measure(&font, "B"), TextBounds::default());
    assert_eq!(measure(&font, "ABA"), measure(&font, "AA"));

    let mut canvas = Canvas::for_display(&DISPLAY);
    assert_eq!(render_text(&mut canvas, &font, "B", 3, 3, TextColor::Black), 3);
    assert_eq!(canvas.black_count(), 0);
}

#[test]
fn test_measure_from_header() {
    let font = FontTable::parse(&block_a_font(1, -4), &DISPLAY.font_defaults);
    assert_eq!(
        measure(&font, "A A"),
        TextBounds {
            min_x: 0,
            min_y: -4,
            width: 15,
            height: 5,
        }
    );
}

#[test]
fn test_centered_origin() {
    // A 50 px wide string centers at x = 75 before the min_x adjustment
    let font = FontTable::parse(&block_a_font(0, -4), &DISPLAY.font_defaults);
    let bounds = measure(&font, "AAAAAAAAAA");
    assert_eq!(bounds.width, 49);
    let config = FaceConfig {
        layout: LayoutMode::TwoLine,
        ..FaceConfig::new("bg.h", &DISPLAY)
    };
    let assets = FaceAssets {
        background: BitmapAsset::parse("", &DISPLAY),
        time_font: font.clone(),
        date_font: font,
    };
    let canvas = render_face(&DISPLAY, &assets, &config, "AAAAAAAAAA", "");
    // (200 - 49) / 2 = 75
    assert!(canvas.is_black(75, 98));
    assert!(!canvas.is_black(74, 98));
}

// ============================================================================
// FULL PIPELINE THROUGH FILES
// ============================================================================

#[test]
fn test_render_face_to_png() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "BlockA8pt7b.h", &block_a_font(0, -4));

    let mut bitmap = vec![0u8; 5000];
    bitmap[0] = 0x80;
    let face = write(
        dir.path(),
        "corner.h",
        &face_header(
            "corner",
            &bitmap,
            "  f.layout = 1;\n  f.text1x = 50;\n  f.text1y = 50;\n  f.text2x = 0;\n  f.text2y = 0;\n  f.text1font = &BlockA8pt7b;\n  f.text2font = &BlockA8pt7b;",
        ),
    );

    let config = FaceConfig::load_header(&face, dir.path(), &DISPLAY).unwrap();
    assert_eq!(config.layout, LayoutMode::TwoLine);

    let output = dir.path().join("corner.png");
    let canvas = render_face_to_file(&DISPLAY, &config, "A", "A", &output).unwrap();

    // Background pixel, time block at (100, 100), date block at (0, 0)
    assert!(canvas.is_black(0, 0));
    assert!(canvas.is_black(100, 100));
    assert!(canvas.is_black(103, 103));
    assert!(!canvas.is_black(104, 100));
    assert!(canvas.is_black(3, 3));
    assert_eq!(canvas.black_count(), 32);

    let png = image::open(&output).unwrap().to_luma8();
    assert_eq!(png.dimensions(), (200, 200));
    assert_eq!(png, canvas.to_image());
}

#[test]
fn test_single_line_ignores_date_position_in_header() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "BlockA8pt7b.h", &block_a_font(0, -4));
    let bitmap = vec![0u8; 5000];

    let render = |fields: &str| {
        let face = write(dir.path(), "f.h", &face_header("f", &bitmap, fields));
        let config = FaceConfig::load_header(&face, dir.path(), &DISPLAY).unwrap();
        let assets = FaceAssets::load(&config, &DISPLAY).unwrap();
        render_face(&DISPLAY, &assets, &config, "A", "AA")
    };

    let fonts = "text1font = &BlockA8pt7b; text2font = &BlockA8pt7b;";
    let a = render(&format!("{fonts} layout = 0; text2y = 10;"));
    let b = render(&format!("{fonts} layout = 0; text2y = 90;"));
    assert_eq!(a, b);

    let c = render(&format!("{fonts} layout = 1; text2y = 10;"));
    let d = render(&format!("{fonts} layout = 1; text2y = 90;"));
    assert_ne!(c, d);
}

#[test]
fn test_missing_font_file_is_asset_error() {
    let dir = TempDir::new().unwrap();
    let face = write(
        dir.path(),
        "lonely.h",
        &face_header("lonely", &[0x00], "text1font = &Nope; text2font = &Nope;"),
    );
    let config = FaceConfig::load_header(&face, dir.path(), &DISPLAY).unwrap();
    let err = FaceAssets::load(&config, &DISPLAY).unwrap_err();
    match err {
        InkfaceError::AssetRead { path, .. } => assert_eq!(path, dir.path().join("Nope.h")),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// BATCH
// ============================================================================

#[test]
fn test_batch_reports_per_face_results() {
    let dir = TempDir::new().unwrap();
    let fonts = dir.path().join("fonts");
    let out = dir.path().join("previews");
    fs::create_dir_all(&fonts).unwrap();
    fs::create_dir_all(&out).unwrap();
    write(&fonts, "BlockA8pt7b.h", &block_a_font(0, -4));

    let good = "text1font = &BlockA8pt7b; text2font = &BlockA8pt7b;";
    let bad = "text1font = &BlockA8pt7b; text2font = &Missing;";
    let names = ["one", "two", "three"];
    let faces: Vec<PathBuf> = names
        .iter()
        .map(|n| {
            let fields = if *n == "two" { bad } else { good };
            write(dir.path(), &format!("{n}.h"), &face_header(n, &[0xFF; 10], fields))
        })
        .collect();

    let jobs: Vec<BatchJob> = faces
        .iter()
        .map(|f| BatchJob::new(f, &fonts, &out, "A", "A"))
        .collect();
    let report = render_batch(&DISPLAY, &jobs).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded, vec!["one".to_string(), "three".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "two");
    assert!(out.join("one.png").exists());
    assert!(!out.join("two.png").exists());
    assert!(out.join("three.png").exists());
}

#[test]
fn test_json_config_overrides_header_defaults() {
    let dir = TempDir::new().unwrap();
    let font = write(dir.path(), "BlockA8pt7b.h", &block_a_font(0, -4));
    let face = write(dir.path(), "plain.h", &face_header("plain", &[0x00; 4], ""));

    let json = format!(
        r#"{{ "bitmap": {:?}, "time_font": {:?}, "date_font": {:?}, "layout": 1,
             "time_x": 0, "time_y": 0, "date_x": 90, "date_y": 90, "date_color": 1 }}"#,
        face.display().to_string(),
        font.display().to_string(),
        font.display().to_string()
    );
    let config = FaceConfig::from_json(&json, &DISPLAY).unwrap();
    assert_eq!(config.date_color, TextColor::White);

    let assets = FaceAssets::load(&config, &DISPLAY).unwrap();
    let canvas = render_face(&DISPLAY, &assets, &config, "A", "A");
    // White date on a white background leaves only the time block
    assert_eq!(canvas.black_count(), 16);
    assert!(canvas.is_black(0, 0));
}
