//! YAML theme selection.
//!
//! A theme configuration names catalog entries by id and carries the
//! user's custom colors:
//!
//! ```yaml
//! palette: purple-teal
//! fonts: modern-clean
//! custom_colors:
//!   primary: "#ff0000"
//! ```
//!
//! Colors are validated while parsing, so a loaded configuration never
//! holds a malformed override.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CustomColors, CustomTheme};
use crate::catalog::Catalog;
use crate::error::{Result, ThemeError};

/// The serializable form of a [`CustomTheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Palette id.
    pub palette: String,
    /// Font pairing id.
    pub fonts: String,
    #[serde(default, skip_serializing_if = "CustomColors::is_empty")]
    pub custom_colors: CustomColors,
}

impl ThemeConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::parse("theme config", e))
    }

    /// Serializes this configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ThemeError::serialize("theme config", e))
    }
}

impl CustomTheme {
    /// Resolves a configuration against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownPalette`] or [`ThemeError::UnknownFontPair`]
    /// if an id is not in the catalog.
    pub fn from_config(config: &ThemeConfig, catalog: &Catalog) -> Result<Self> {
        let palette = catalog
            .palette(&config.palette)
            .ok_or_else(|| ThemeError::UnknownPalette(config.palette.clone()))?;
        let fonts = catalog
            .pairing(&config.fonts)
            .ok_or_else(|| ThemeError::UnknownFontPair(config.fonts.clone()))?;

        Ok(CustomTheme::new(palette.clone(), fonts.clone())
            .with_custom_colors(config.custom_colors))
    }

    /// Parses a YAML configuration and resolves it against a catalog.
    pub fn from_yaml(yaml: &str, catalog: &Catalog) -> Result<Self> {
        Self::from_config(&ThemeConfig::from_yaml(yaml)?, catalog)
    }

    /// Loads a YAML configuration file and resolves it against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, otherwise as
    /// for [`CustomTheme::from_yaml`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use designkit::{Catalog, CustomTheme};
    ///
    /// let theme = CustomTheme::from_file("./theme.yaml", Catalog::builtin())?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, catalog)
    }

    /// The configuration that selects this theme.
    pub fn to_config(&self) -> ThemeConfig {
        ThemeConfig {
            palette: self.palette.id.clone(),
            fonts: self.fonts.id.clone(),
            custom_colors: self.custom_colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::palette::Role;

    #[test]
    fn test_from_yaml_minimal() {
        let theme = CustomTheme::from_yaml("palette: neon\nfonts: retro\n", Catalog::builtin())
            .unwrap();
        assert_eq!(theme.palette.id, "neon");
        assert_eq!(theme.fonts.heading.family, "Abril Fatface");
        assert!(theme.custom_colors.is_empty());
    }

    #[test]
    fn test_from_yaml_with_overrides() {
        let yaml = r##"
palette: pastel
fonts: playful
custom_colors:
  primary: "#FF0000"
  surface: "#101010"
"##;
        let theme = CustomTheme::from_yaml(yaml, Catalog::builtin()).unwrap();
        assert_eq!(
            theme.custom_colors.get(Role::Primary),
            Some(HexColor::from_rgb(255, 0, 0))
        );
        assert_eq!(theme.custom_colors.get(Role::Secondary), None);
    }

    #[test]
    fn test_invalid_override_fails_at_load() {
        let yaml = "palette: pastel\nfonts: playful\ncustom_colors:\n  primary: \"#ff\"\n";
        let err = CustomTheme::from_yaml(yaml, Catalog::builtin()).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
        assert!(err.to_string().contains("#ff"));
    }

    #[test]
    fn test_unknown_ids() {
        let err = CustomTheme::from_yaml("palette: nope\nfonts: retro\n", Catalog::builtin())
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPalette(ref id) if id == "nope"));

        let err = CustomTheme::from_yaml("palette: neon\nfonts: nope\n", Catalog::builtin())
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownFontPair(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "palette: neon\nfonts: retro\naccent: \"#ffffff\"\n";
        assert!(ThemeConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let theme = CustomTheme::from_yaml("palette: neon\nfonts: retro\n", Catalog::builtin())
            .unwrap()
            .with_custom_color(Role::Tertiary, "#123456")
            .unwrap();
        let yaml = theme.to_config().to_yaml().unwrap();
        assert!(yaml.contains("tertiary: '#123456'") || yaml.contains("tertiary: \"#123456\""));
        assert!(!yaml.contains("primary"));

        let reloaded = CustomTheme::from_yaml(&yaml, Catalog::builtin()).unwrap();
        assert_eq!(reloaded, theme);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "palette: monochrome\nfonts: minimalist\n").unwrap();

        let theme = CustomTheme::from_file(&path, Catalog::builtin()).unwrap();
        assert_eq!(theme.palette.id, "monochrome");
    }

    #[test]
    fn test_from_missing_file() {
        let err = CustomTheme::from_file("/nonexistent/theme.yaml", Catalog::builtin())
            .unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
