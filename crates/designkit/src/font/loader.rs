//! Idempotent web font loading through a stylesheet port.
//!
//! [`load_google_font`] asks a [`StylesheetLoader`] whether a stylesheet for
//! the family is already present and, if not, appends one. The actual fetch
//! is owned by the host (the browser, or whatever renders the head), so this
//! is best-effort: nothing here reports network or DOM failures.
//!
//! The presence check is a substring match on the `+`-encoded family name.
//! Any existing link whose href contains it counts, whatever weights it
//! requested.

use tracing::debug;

use super::GoogleFont;

/// Weights requested when the caller does not name any.
pub const DEFAULT_VARIANTS: &[&str] = &["400"];

/// Port to the document's stylesheet links.
pub trait StylesheetLoader {
    /// Returns true if any stylesheet link's href contains `needle`.
    fn has_stylesheet_containing(&self, needle: &str) -> bool;

    /// Appends a stylesheet link for `href`.
    ///
    /// Implementations must not fail loudly; log and move on.
    fn append_stylesheet(&mut self, href: &str);
}

/// What [`load_google_font`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontLoad {
    /// A new stylesheet link was appended.
    Requested { url: String },
    /// A link for this family already existed; nothing was done.
    AlreadyLoaded,
}

/// Ensures a stylesheet for `font` is requested exactly once.
///
/// `variants` defaults to [`DEFAULT_VARIANTS`] when `None`.
pub fn load_google_font<L>(loader: &mut L, font: &GoogleFont, variants: Option<&[&str]>) -> FontLoad
where
    L: StylesheetLoader + ?Sized,
{
    let family = font.url_family();
    if loader.has_stylesheet_containing(&family) {
        debug!(family = %font.family, "font stylesheet already present");
        return FontLoad::AlreadyLoaded;
    }

    let url = font.stylesheet_url(variants.unwrap_or(DEFAULT_VARIANTS));
    debug!(family = %font.family, %url, "requesting font stylesheet");
    loader.append_stylesheet(&url);
    FontLoad::Requested { url }
}

/// In-memory document head.
///
/// Used when there is no browser: in tests, and when rendering pages on the
/// server where the links are emitted as HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadStylesheets {
    hrefs: Vec<String>,
}

impl HeadStylesheets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stylesheet hrefs in insertion order.
    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }

    /// Renders the links as `<link rel="stylesheet">` tags, one per line.
    pub fn to_html(&self) -> String {
        self.hrefs
            .iter()
            .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, href.replace('&', "&amp;")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StylesheetLoader for HeadStylesheets {
    fn has_stylesheet_containing(&self, needle: &str) -> bool {
        self.hrefs.iter().any(|href| href.contains(needle))
    }

    fn append_stylesheet(&mut self, href: &str) {
        self.hrefs.push(href.to_string());
    }
}
