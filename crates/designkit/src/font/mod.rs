//! Web font descriptors, heading/body pairings and the stylesheet loader.
//!
//! Fonts are served by Google Fonts. A [`GoogleFont`] knows how to build its
//! stylesheet URL; actually requesting it goes through a
//! [`StylesheetLoader`] so the rest of the crate stays host-agnostic.
//!
//! ```rust
//! use designkit::{load_google_font, FontCategory, GoogleFont, HeadStylesheets};
//!
//! let font = GoogleFont::new("Open Sans", ["400", "700"], FontCategory::SansSerif);
//! let mut head = HeadStylesheets::new();
//!
//! load_google_font(&mut head, &font, None);
//! load_google_font(&mut head, &font, Some(&["700"][..]));
//!
//! assert_eq!(head.hrefs().len(), 1);
//! assert_eq!(
//!     head.hrefs()[0],
//!     "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400&display=swap"
//! );
//! ```

mod loader;
#[cfg(feature = "web")]
mod web;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use loader::{load_google_font, FontLoad, HeadStylesheets, StylesheetLoader, DEFAULT_VARIANTS};
#[cfg(feature = "web")]
pub use web::DocumentHead;

/// Base URL of the Google Fonts CSS2 API.
pub const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";

/// Typeface classification used to group fonts in pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    Serif,
    SansSerif,
    Display,
    Handwriting,
    Monospace,
}

impl FontCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            FontCategory::Serif => "serif",
            FontCategory::SansSerif => "sans-serif",
            FontCategory::Display => "display",
            FontCategory::Handwriting => "handwriting",
            FontCategory::Monospace => "monospace",
        }
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A font family offered by Google Fonts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoogleFont {
    pub family: String,
    /// Available weights, e.g. `"400"`, in catalog order.
    pub variants: Vec<String>,
    pub category: FontCategory,
}

impl GoogleFont {
    pub fn new<I, S>(family: impl Into<String>, variants: I, category: FontCategory) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            family: family.into(),
            variants: variants.into_iter().map(Into::into).collect(),
            category,
        }
    }

    /// The family name as it appears in request URLs: spaces become `+`.
    ///
    /// No other characters are escaped.
    pub fn url_family(&self) -> String {
        self.family.replace(' ', "+")
    }

    /// Builds the CSS2 stylesheet URL requesting `weights` for this family.
    pub fn stylesheet_url<S: AsRef<str>>(&self, weights: &[S]) -> String {
        let weights: Vec<&str> = weights.iter().map(AsRef::as_ref).collect();
        format!(
            "{}?family={}:wght@{}&display=swap",
            GOOGLE_FONTS_CSS_URL,
            self.url_family(),
            weights.join(",")
        )
    }
}

/// A named heading + body font combination.
///
/// Both fonts are held by value; later catalog edits do not propagate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub id: String,
    pub name: String,
    pub heading: GoogleFont,
    pub body: GoogleFont,
    pub description: String,
}
