//! Error types for design-token loading and color derivation.
//!
//! All fallible operations in this crate return [`ThemeError`]. Font loading
//! is the exception: it is best-effort and never fails, see
//! [`load_google_font`](crate::load_google_font).

use std::io;
use std::path::PathBuf;

/// Errors that can occur when parsing colors or building catalogs and themes.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A color string is not of the form `#RRGGBB`.
    #[error("invalid color '{value}': {reason}")]
    InvalidColorFormat { value: String, reason: &'static str },

    /// A font pairing names a family that is missing from the font catalog.
    #[error("font pairing '{pairing}' references unknown font family '{family}'")]
    FontLookupFailure { pairing: String, family: String },

    /// A shade scale table lacks one of the fixed keys.
    #[error("shade scale is missing key {shade}")]
    MissingShade { shade: u16 },

    /// A shade scale table carries a key outside 50..950.
    #[error("unknown shade key {key} (expected one of 50, 100..900, 950)")]
    UnknownShade { key: u16 },

    /// Two catalog entries share the same identity.
    #[error("duplicate {kind} '{key}' in catalog")]
    DuplicateEntry { kind: &'static str, key: String },

    /// No palette with this id exists in the catalog.
    #[error("unknown color palette '{0}'")]
    UnknownPalette(String),

    /// No font pairing with this id exists in the catalog.
    #[error("unknown font pairing '{0}'")]
    UnknownFontPair(String),

    /// YAML or JSON could not be parsed into the expected shape.
    #[error("failed to parse {source_name}: {message}")]
    Parse { source_name: String, message: String },

    /// A catalog or configuration could not be written out.
    #[error("failed to serialize {target}: {message}")]
    Serialize { target: String, message: String },

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
            reason,
        }
    }

    /// Create a parse error for the named source.
    pub fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    /// Create a serialization error for the named output.
    pub fn serialize(target: impl Into<String>, message: impl ToString) -> Self {
        Self::Serialize {
            target: target.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for designkit operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
