//! Pattern-based scanner for GFX header text.
//!
//! This is not a C parser. Each function looks for one kind of declaration
//! with a regular expression and pulls the numeric literals out of its body.
//! Anything that does not look like the expected declaration is reported as
//! a [`DecodeError`] and the builders decide which default to use.
//!
//! ```text
//! const uint8_t FooBitmaps[] PROGMEM = { 0xFF, 0x80, ... };      → byte_array(FontBitmaps)
//! const GFXglyph FooGlyphs[] PROGMEM = {
//!   {     0,   4,  14,   6,    1,  -13 },   // 0x21 '!'          → glyph_records()
//!   ... };
//! const GFXfont Foo PROGMEM = { (uint8_t *)FooBitmaps,
//!   (GFXglyph *)FooGlyphs, 0x20, 0x7E, 24 };                     → font_descriptor()
//! const unsigned char epd_bitmap_foo [] PROGMEM = { 0x00, ... }; → byte_array(FaceBitmap)
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DecodeError;

static FONT_BITMAPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+uint8_t\s+\w+Bitmaps\s*\[\s*\]\s*(?:PROGMEM\s*)?=\s*\{([^}]*)\}")
        .expect("font bitmap pattern")
});

static FACE_BITMAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"const\s+unsigned\s+char\s+\w+_bitmap_\w+\s*\[\s*\]\s*(?:PROGMEM\s*)?=\s*\{([^}]*)\}",
    )
    .expect("face bitmap pattern")
});

static GLYPH_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const\s+GFXglyph\s+\w+Glyphs\s*\[\s*\]\s*(?:PROGMEM\s*)?=\s*\{(.*?)\};")
        .expect("glyph table pattern")
});

static GLYPH_TUPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*\}",
    )
    .expect("glyph tuple pattern")
});

static FONT_DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"const\s+GFXfont\s+\w+\s*(?:PROGMEM\s*)?=\s*\{[^}]*0x([0-9A-Fa-f]{2})\s*,\s*0x([0-9A-Fa-f]{2})\s*,\s*(\d+)",
    )
    .expect("font descriptor pattern")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\w+)\s*=\s*([^;]+?)\s*;").expect("assignment pattern")
});

static HEX_BYTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0[xX]([0-9A-Fa-f]{2})").expect("hex byte pattern"));

/// Which byte-array declaration to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteArray {
    /// `const uint8_t <Name>Bitmaps[]` in a font header
    FontBitmaps,
    /// `const unsigned char <prefix>_bitmap_<name> []` in a watchface header
    FaceBitmap,
}

impl ByteArray {
    fn pattern(self) -> &'static Regex {
        match self {
            ByteArray::FontBitmaps => &*FONT_BITMAPS,
            ByteArray::FaceBitmap => &*FACE_BITMAP,
        }
    }

    fn section(self) -> &'static str {
        match self {
            ByteArray::FontBitmaps => "font bitmaps",
            ByteArray::FaceBitmap => "face bitmap",
        }
    }
}

/// The three numbers that follow the pointers in a `GFXfont` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDescriptor {
    pub first_char: u8,
    pub last_char: u8,
    pub y_advance: u16,
}

/// Extract the bytes of the first matching array declaration, in source order.
///
/// An array that is present but holds no hex literals yields `Ok(vec![])`.
pub fn byte_array(source: &str, kind: ByteArray) -> Result<Vec<u8>, DecodeError> {
    let caps = kind
        .pattern()
        .captures(source)
        .ok_or(DecodeError::MissingSection(kind.section()))?;
    Ok(hex_bytes(&caps[1]))
}

/// Tokenize every `0xNN` literal in `body` into a byte.
pub fn hex_bytes(body: &str) -> Vec<u8> {
    HEX_BYTE
        .captures_iter(body)
        .filter_map(|c| u8::from_str_radix(&c[1], 16).ok())
        .collect()
}

/// Extract the 6-integer records of the `GFXglyph` table, one per line.
///
/// Lines without a complete `{a, b, c, d, e, f}` group are skipped, so the
/// result may be shorter than the font's code range.
pub fn glyph_records(source: &str) -> Result<Vec<[i64; 6]>, DecodeError> {
    let caps = GLYPH_TABLE
        .captures(source)
        .ok_or(DecodeError::MissingSection("glyph table"))?;
    Ok(caps[1].lines().filter_map(tuple6).collect())
}

/// Parse the first six-integer brace group on a single line.
pub fn tuple6(line: &str) -> Option<[i64; 6]> {
    let caps = GLYPH_TUPLE.captures(line)?;
    let mut out = [0i64; 6];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = caps[i + 1].parse().ok()?;
    }
    Some(out)
}

/// Find the code range and line height in the `GFXfont` literal.
pub fn font_descriptor(source: &str) -> Result<RawDescriptor, DecodeError> {
    let caps = FONT_DESCRIPTOR
        .captures(source)
        .ok_or(DecodeError::MissingSection("font descriptor"))?;

    let hex = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| DecodeError::InvalidNumber {
            section: "font descriptor",
            token: caps[i].to_string(),
        })
    };
    let first_char = hex(1)?;
    let last_char = hex(2)?;
    let y_advance = caps[3]
        .parse::<u16>()
        .map_err(|_| DecodeError::InvalidNumber {
            section: "font descriptor",
            token: caps[3].to_string(),
        })?;

    Ok(RawDescriptor {
        first_char,
        last_char,
        y_advance,
    })
}

/// Value text of the first `name = value;` assignment, trimmed.
///
/// Matches whole identifiers only, so `text1x` does not match `mytext1x`.
pub fn assignment<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    ASSIGNMENT
        .captures_iter(source)
        .find(|c| &c[1] == name)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}
