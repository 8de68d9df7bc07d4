//! Eleven-step shade scales keyed 50 through 950.
//!
//! A [`ShadeScale`] holds one hue from near-white (50) to near-black (950).
//! Catalog palettes carry hand-tuned scales; [`generate_color_shades`]
//! derives one from a single base color for user-picked custom colors.
//!
//! ```rust
//! use designkit::{generate_color_shades, Shade};
//!
//! let scale = generate_color_shades("#808080").unwrap();
//! assert_eq!(scale[Shade::S500].to_string(), "#808080");
//! assert_eq!(scale[Shade::S50].to_string(), "#ffffff");
//! assert_eq!(scale[Shade::S950].to_string(), "#000000");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::hex::HexColor;
use crate::error::{Result, ThemeError};

/// One of the eleven fixed shade keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All shades in ascending key order.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// The numeric key, e.g. `500`.
    pub const fn key(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Looks up a shade by its numeric key.
    pub fn from_key(key: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// How this shade is derived from a base color.
    fn adjustment(self) -> Adjustment {
        match self {
            Shade::S50 => Adjustment::Lighten(0.95),
            Shade::S100 => Adjustment::Lighten(0.85),
            Shade::S200 => Adjustment::Lighten(0.75),
            Shade::S300 => Adjustment::Lighten(0.65),
            Shade::S400 => Adjustment::Lighten(0.35),
            Shade::S500 => Adjustment::Base,
            Shade::S600 => Adjustment::Darken(0.15),
            Shade::S700 => Adjustment::Darken(0.25),
            Shade::S800 => Adjustment::Darken(0.35),
            Shade::S900 => Adjustment::Darken(0.45),
            Shade::S950 => Adjustment::Darken(0.55),
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy)]
enum Adjustment {
    Lighten(f64),
    Base,
    Darken(f64),
}

/// A complete 50–950 scale for one hue.
///
/// Every key is always present. Iteration is in ascending key order.
///
/// In YAML and JSON a scale is a mapping from numeric key to color string;
/// deserialization rejects tables with missing or unknown keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<u16, HexColor>",
    into = "BTreeMap<u16, HexColor>"
)]
pub struct ShadeScale {
    colors: [HexColor; 11],
}

impl ShadeScale {
    /// Creates a scale from colors given in ascending key order.
    pub const fn new(colors: [HexColor; 11]) -> Self {
        Self { colors }
    }

    /// Derives a scale from a base color with the linear lighten/darken ramp.
    ///
    /// The 500 entry is `base` itself.
    pub fn from_base(base: HexColor) -> Self {
        let colors = Shade::ALL.map(|shade| match shade.adjustment() {
            Adjustment::Lighten(amount) => base.lighten(amount),
            Adjustment::Base => base,
            Adjustment::Darken(amount) => base.darken(amount),
        });
        Self { colors }
    }

    /// Returns the color for a shade.
    pub fn get(&self, shade: Shade) -> HexColor {
        self.colors[shade.index()]
    }

    /// Returns the color for a numeric key, if the key is one of the eleven.
    pub fn get_key(&self, key: u16) -> Option<HexColor> {
        Shade::from_key(key).map(|s| self.get(s))
    }

    /// Iterates `(shade, color)` pairs from 50 to 950.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, HexColor)> + '_ {
        Shade::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Index<Shade> for ShadeScale {
    type Output = HexColor;

    fn index(&self, shade: Shade) -> &HexColor {
        &self.colors[shade.index()]
    }
}

impl TryFrom<BTreeMap<u16, HexColor>> for ShadeScale {
    type Error = ThemeError;

    fn try_from(map: BTreeMap<u16, HexColor>) -> Result<Self> {
        if let Some(&key) = map.keys().find(|k| Shade::from_key(**k).is_none()) {
            return Err(ThemeError::UnknownShade { key });
        }

        let mut colors = [HexColor::from_rgb(0, 0, 0); 11];
        for shade in Shade::ALL {
            colors[shade.index()] = *map
                .get(&shade.key())
                .ok_or(ThemeError::MissingShade { shade: shade.key() })?;
        }
        Ok(Self { colors })
    }
}

impl From<ShadeScale> for BTreeMap<u16, HexColor> {
    fn from(scale: ShadeScale) -> Self {
        scale.iter().map(|(s, c)| (s.key(), c)).collect()
    }
}

/// Expands one `#RRGGBB` base color into an 11-step shade scale.
///
/// Keys below 500 are lightened by 0.95, 0.85, 0.75, 0.65 and 0.35; keys
/// above 500 are darkened by 0.15, 0.25, 0.35, 0.45 and 0.55. See
/// [`HexColor::lighten`] for the (deliberately crude) channel arithmetic.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`] if `base_color` is malformed.
pub fn generate_color_shades(base_color: &str) -> Result<ShadeScale> {
    Ok(ShadeScale::from_base(HexColor::parse(base_color)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn test_shade_keys_ascending() {
        let keys: Vec<u16> = Shade::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]
        );
    }

    #[test]
    fn test_shade_from_key() {
        assert_eq!(Shade::from_key(950), Some(Shade::S950));
        assert_eq!(Shade::from_key(150), None);
    }

    #[test]
    fn test_generate_gray() {
        let scale = generate_color_shades("#808080").unwrap();
        let rendered: Vec<String> = scale.iter().map(|(_, c)| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "#ffffff", "#ffffff", "#ffffff", "#ffffff", "#d9d9d9", "#808080", "#5a5a5a",
                "#404040", "#272727", "#0d0d0d", "#000000",
            ]
        );
    }

    #[test]
    fn test_generate_keeps_base_at_500() {
        let scale = generate_color_shades("#843dff").unwrap();
        assert_eq!(scale[Shade::S500], hex("#843dff"));
        assert_eq!(scale.get_key(500), Some(hex("#843dff")));
    }

    #[test]
    fn test_generate_invalid_input() {
        assert!(matches!(
            generate_color_shades("#84"),
            Err(ThemeError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_scale_from_yaml_map() {
        let yaml = r##"
50: "#f0fdfa"
100: "#ccfbf1"
200: "#99f6e4"
300: "#5eedd8"
400: "#2dd4bf"
500: "#14b8a6"
600: "#0d9488"
700: "#0f766e"
800: "#115e59"
900: "#134e4a"
950: "#042f2e"
"##;
        let scale: ShadeScale = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scale[Shade::S50], hex("#f0fdfa"));
        assert_eq!(scale[Shade::S950], hex("#042f2e"));
    }

    #[test]
    fn test_scale_missing_key() {
        let mut map: BTreeMap<u16, HexColor> = Shade::ALL
            .iter()
            .map(|s| (s.key(), hex("#000000")))
            .collect();
        map.remove(&700);
        assert!(matches!(
            ShadeScale::try_from(map),
            Err(ThemeError::MissingShade { shade: 700 })
        ));
    }

    #[test]
    fn test_scale_unknown_key() {
        let mut map: BTreeMap<u16, HexColor> = Shade::ALL
            .iter()
            .map(|s| (s.key(), hex("#000000")))
            .collect();
        map.insert(1000, hex("#000000"));
        assert!(matches!(
            ShadeScale::try_from(map),
            Err(ThemeError::UnknownShade { key: 1000 })
        ));
    }
}
