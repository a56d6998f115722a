//! # Error Types
//!
//! This module defines error types used throughout the inkface library.
//!
//! Two families exist on purpose:
//!
//! - [`InkfaceError`] is what callers see. Only I/O failures on an asset,
//!   bad render parameters and image sink failures end up here.
//! - [`DecodeError`] is a soft failure from the header scanner. The font
//!   and bitmap builders catch it and fall back to documented defaults, so
//!   it never crosses the public loading API.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for inkface operations
#[derive(Debug, Error)]
pub enum InkfaceError {
    /// An asset header could not be read from disk
    #[error("Cannot read asset {}: {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid render parameters or config file
    #[error("Config error: {0}")]
    Config(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InkfaceError {
    /// Wrap an I/O error that happened while reading `path`.
    pub fn asset_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AssetRead {
            path: path.into(),
            source,
        }
    }
}

/// Soft failure while scanning header text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The expected declaration was not found in the source
    #[error("section not found: {0}")]
    MissingSection(&'static str),

    /// A numeric literal did not fit the field it feeds
    #[error("invalid number in {section}: {token}")]
    InvalidNumber {
        section: &'static str,
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_read_message_names_path() {
        let err = InkfaceError::asset_read(
            "fonts/Missing.h",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("fonts/Missing.h"), "{}", msg);
        assert!(msg.contains("no such file"), "{}", msg);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidNumber {
            section: "glyphs",
            token: "999".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number in glyphs: 999");
    }
}
