//! The design-token catalog: palettes, fonts and font pairings.
//!
//! The built-in catalog ships as three embedded YAML tables under `assets/`
//! and is parsed once, on first access. Parsing validates the whole catalog:
//! every palette role carries all eleven shade keys, identities are unique,
//! and every pairing resolves its fonts. A broken built-in table is a build
//! defect, so [`Catalog::builtin`] panics instead of returning an error.
//!
//! Pairings name their fonts in one of two ways:
//!
//! ```yaml
//! - id: elegant-serif
//!   name: "Elegant Serif"
//!   heading: "Playfair Display"          # looked up in the font table
//!   body: { family: "Figtree", variants: ["400"], category: sans-serif }
//!   description: "..."
//! ```
//!
//! Lookups copy the font into the pairing; the pairing does not follow later
//! edits to the font table.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::font::{FontCategory, FontPair, GoogleFont};
use crate::palette::ColorPalette;

const PALETTES_YAML: &str = include_str!("../assets/palettes.yaml");
const FONTS_YAML: &str = include_str!("../assets/fonts.yaml");
const PAIRINGS_YAML: &str = include_str!("../assets/pairings.yaml");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    match Catalog::from_yaml(PALETTES_YAML, FONTS_YAML, PAIRINGS_YAML) {
        Ok(catalog) => {
            debug!(
                palettes = catalog.palettes.len(),
                fonts = catalog.fonts.len(),
                pairings = catalog.pairings.len(),
                "loaded built-in design token catalog"
            );
            catalog
        }
        Err(e) => panic!("built-in design token catalog is invalid: {}", e),
    }
});

/// A font reference inside a pairing table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FontRef {
    Family(String),
    Inline(GoogleFont),
}

#[derive(Debug, Deserialize)]
struct PairingDef {
    id: String,
    name: String,
    heading: FontRef,
    body: FontRef,
    description: String,
}

/// Palettes, fonts and pairings offered to theme pickers.
#[derive(Debug, Clone)]
pub struct Catalog {
    palettes: Vec<ColorPalette>,
    /// Keyed by family name, in catalog order.
    fonts: IndexMap<String, GoogleFont>,
    pairings: Vec<FontPair>,
}

impl Catalog {
    /// Builds a catalog from already-resolved entries.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateEntry`] if two palettes or two
    /// pairings share an id, or two fonts share a family.
    pub fn new(
        palettes: Vec<ColorPalette>,
        fonts: Vec<GoogleFont>,
        pairings: Vec<FontPair>,
    ) -> Result<Self> {
        ensure_unique("palette", palettes.iter().map(|p| p.id.as_str()))?;
        ensure_unique("font pairing", pairings.iter().map(|p| p.id.as_str()))?;
        let fonts = index_fonts(fonts)?;
        Ok(Self {
            palettes,
            fonts,
            pairings,
        })
    }

    /// Parses and validates a catalog from its three YAML tables.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Parse`] for malformed YAML, including bad colors and
    ///   incomplete shade scales
    /// - [`ThemeError::FontLookupFailure`] when a pairing names an unknown family
    /// - [`ThemeError::DuplicateEntry`] as for [`Catalog::new`]
    pub fn from_yaml(palettes: &str, fonts: &str, pairings: &str) -> Result<Self> {
        let palettes: Vec<ColorPalette> =
            serde_yaml::from_str(palettes).map_err(|e| ThemeError::parse("palettes", e))?;
        let fonts: Vec<GoogleFont> =
            serde_yaml::from_str(fonts).map_err(|e| ThemeError::parse("fonts", e))?;
        let defs: Vec<PairingDef> =
            serde_yaml::from_str(pairings).map_err(|e| ThemeError::parse("pairings", e))?;

        let index = index_fonts(fonts)?;
        let pairings = defs
            .into_iter()
            .map(|def| resolve_pairing(def, &index))
            .collect::<Result<Vec<_>>>()?;

        Self::new(palettes, index.into_values().collect(), pairings)
    }

    /// The catalog compiled into this crate.
    ///
    /// # Panics
    ///
    /// Panics on first access if the embedded tables fail validation.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All palettes in catalog order.
    pub fn palettes(&self) -> &[ColorPalette] {
        &self.palettes
    }

    /// Finds a palette by id.
    pub fn palette(&self, id: &str) -> Option<&ColorPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// All fonts in catalog order.
    pub fn fonts(&self) -> impl ExactSizeIterator<Item = &GoogleFont> + '_ {
        self.fonts.values()
    }

    /// Finds a font by exact family name.
    pub fn font(&self, family: &str) -> Option<&GoogleFont> {
        self.fonts.get(family)
    }

    /// Fonts of one category, in catalog order.
    pub fn fonts_in(&self, category: FontCategory) -> impl Iterator<Item = &GoogleFont> + '_ {
        self.fonts.values().filter(move |f| f.category == category)
    }

    /// All font pairings in catalog order.
    pub fn pairings(&self) -> &[FontPair] {
        &self.pairings
    }

    /// Finds a font pairing by id.
    pub fn pairing(&self, id: &str) -> Option<&FontPair> {
        self.pairings.iter().find(|p| p.id == id)
    }

    /// Serializes the catalog as JSON tables for a JavaScript picker.
    ///
    /// The shape is `{ "palettes": [...], "fonts": [...], "pairings": [...] }`
    /// with shade scales as `{"50": "#...", ...}` objects.
    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Tables<'a> {
            palettes: &'a [ColorPalette],
            fonts: Vec<&'a GoogleFont>,
            pairings: &'a [FontPair],
        }

        let tables = Tables {
            palettes: &self.palettes,
            fonts: self.fonts.values().collect(),
            pairings: &self.pairings,
        };
        serde_json::to_string_pretty(&tables).map_err(|e| ThemeError::serialize("catalog json", e))
    }
}

/// Built-in color palettes.
pub fn default_color_palettes() -> &'static [ColorPalette] {
    Catalog::builtin().palettes()
}

/// Built-in Google Fonts families.
pub fn popular_google_fonts() -> impl ExactSizeIterator<Item = &'static GoogleFont> {
    Catalog::builtin().fonts()
}

/// Built-in heading/body pairings.
pub fn default_font_pairings() -> &'static [FontPair] {
    Catalog::builtin().pairings()
}

fn index_fonts(fonts: Vec<GoogleFont>) -> Result<IndexMap<String, GoogleFont>> {
    let mut index = IndexMap::with_capacity(fonts.len());
    for font in fonts {
        if index.contains_key(&font.family) {
            return Err(ThemeError::DuplicateEntry {
                kind: "font family",
                key: font.family,
            });
        }
        index.insert(font.family.clone(), font);
    }
    Ok(index)
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ThemeError::DuplicateEntry {
                kind,
                key: id.to_string(),
            });
        }
    }
    Ok(())
}

fn resolve_pairing(def: PairingDef, fonts: &IndexMap<String, GoogleFont>) -> Result<FontPair> {
    let resolve = |font_ref: FontRef| match font_ref {
        FontRef::Inline(font) => Ok(font),
        FontRef::Family(family) => {
            fonts
                .get(&family)
                .cloned()
                .ok_or_else(|| ThemeError::FontLookupFailure {
                    pairing: def.id.clone(),
                    family,
                })
        }
    };

    let heading = resolve(def.heading)?;
    let body = resolve(def.body)?;
    Ok(FontPair {
        id: def.id,
        name: def.name,
        heading,
        body,
        description: def.description,
    })
}
