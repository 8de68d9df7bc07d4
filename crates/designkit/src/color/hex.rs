//! Hex color values and the linear lighten/darken primitives.
//!
//! Colors are written `#RRGGBB`. Parsing is case-insensitive; display is
//! always lowercase and zero-padded:
//!
//! ```rust
//! use designkit::HexColor;
//!
//! let c: HexColor = "#1E293B".parse().unwrap();
//! assert_eq!(c.to_string(), "#1e293b");
//! assert_eq!(c.rgb(), (30, 41, 59));
//! ```
//!
//! # Linear arithmetic
//!
//! [`HexColor::lighten`] and [`HexColor::darken`] move every channel by the
//! same absolute step, `round(amount * 255)`, clamped to `0..=255`. There is
//! no gamma correction and no HSL round-trip, so derived tints drift toward
//! gray and do not match hand-tuned palettes. Generated scales are only a
//! fallback for arbitrary custom colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// A 24-bit RGB color parsed from `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Creates a color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColorFormat`] when the `#` prefix is
    /// missing, the length is not six digits, or a digit is not hexadecimal.
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::invalid_color(s, "missing '#' prefix"))?;
        if hex.len() != 6 {
            return Err(ThemeError::invalid_color(s, "expected 6 hex digits"));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::invalid_color(s, "non-hex character"));
        }

        // All bytes are ASCII hex digits, so slicing on byte offsets is safe.
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ThemeError::invalid_color(s, "non-hex character"))
        };
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Returns the `(r, g, b)` channels.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Adds `round(amount * 255)` to every channel, saturating at 255.
    pub fn lighten(&self, amount: f64) -> Self {
        let step = channel_step(amount);
        self.map_channels(|c| c + step)
    }

    /// Subtracts `round(amount * 255)` from every channel, saturating at 0.
    pub fn darken(&self, amount: f64) -> Self {
        let step = channel_step(amount);
        self.map_channels(|c| c - step)
    }

    /// Rec. 709 relative luminance on the raw channel values.
    ///
    /// Only used to compare colors derived from the same base; no
    /// linearization is applied.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }

    fn map_channels(&self, f: impl Fn(i32) -> i32) -> Self {
        let apply = |c: u8| f(c as i32).clamp(0, 255) as u8;
        Self::from_rgb(apply(self.r), apply(self.g), apply(self.b))
    }
}

/// Any step beyond one full channel range saturates the same way, so the
/// step is bounded to `-255..=255` before the integer add.
fn channel_step(amount: f64) -> i32 {
    if amount.is_nan() {
        return 0;
    }
    (amount * 255.0).round().clamp(-255.0, 255.0) as i32
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ThemeError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Lightens a `#RRGGBB` color string.
///
/// ```rust
/// assert_eq!(designkit::lighten("#808080", 0.35).unwrap(), "#d9d9d9");
/// ```
pub fn lighten(color: &str, amount: f64) -> Result<String> {
    Ok(HexColor::parse(color)?.lighten(amount).to_string())
}

/// Darkens a `#RRGGBB` color string.
///
/// ```rust
/// assert_eq!(designkit::darken("#808080", 0.15).unwrap(), "#5a5a5a");
/// ```
pub fn darken(color: &str, amount: f64) -> Result<String> {
    Ok(HexColor::parse(color)?.darken(amount).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_lowercase() {
        assert_eq!(
            HexColor::parse("#ff6b35").unwrap(),
            HexColor::from_rgb(255, 107, 53)
        );
    }

    #[test]
    fn test_parse_uppercase() {
        assert_eq!(
            HexColor::parse("#FF6B35").unwrap(),
            HexColor::from_rgb(255, 107, 53)
        );
    }

    #[test]
    fn test_parse_missing_hash() {
        let err = HexColor::parse("ff6b35").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("#ff6b3").is_err());
        assert!(HexColor::parse("#ff6b3500").is_err());
        assert!(HexColor::parse("#").is_err());
    }

    #[test]
    fn test_parse_non_hex() {
        assert!(HexColor::parse("#gggggg").is_err());
        assert!(HexColor::parse("#12345z").is_err());
    }

    #[test]
    fn test_parse_multibyte_does_not_panic() {
        // 6 bytes but not 6 ASCII digits.
        assert!(HexColor::parse("#ééé").is_err());
    }

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(HexColor::from_rgb(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_serde_roundtrip_through_yaml() {
        let c: HexColor = serde_yaml::from_str("\"#0F766E\"").unwrap();
        assert_eq!(c.rgb(), (15, 118, 110));
        let out = serde_yaml::to_string(&c).unwrap();
        assert!(out.contains("#0f766e"));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: std::result::Result<HexColor, _> = serde_yaml::from_str("\"teal\"");
        assert!(result.is_err());
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    #[test]
    fn test_lighten_rounds_step() {
        // 0.85 * 255 = 216.75 -> 217
        let c = HexColor::from_rgb(0, 10, 20).lighten(0.85);
        assert_eq!(c.rgb(), (217, 227, 237));
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        let c = HexColor::from_rgb(200, 100, 0).lighten(0.95);
        assert_eq!(c.rgb(), (255, 255, 242));
    }

    #[test]
    fn test_darken_clamps_at_black() {
        let c = HexColor::from_rgb(100, 200, 150).darken(0.55);
        assert_eq!(c.rgb(), (0, 60, 10));
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let c = HexColor::from_rgb(12, 34, 56);
        assert_eq!(c.lighten(0.0), c);
        assert_eq!(c.darken(0.0), c);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        assert_eq!(lighten("#808080", 1e12).unwrap(), "#ffffff");
        assert_eq!(darken("#808080", 1e12).unwrap(), "#000000");
        let c = HexColor::from_rgb(1, 2, 3);
        assert_eq!(c.lighten(f64::INFINITY).rgb(), (255, 255, 255));
        assert_eq!(c.darken(f64::INFINITY).rgb(), (0, 0, 0));
        // Negative amounts move the other way.
        assert_eq!(c.darken(f64::NEG_INFINITY).rgb(), (255, 255, 255));
        assert_eq!(c.lighten(f64::NEG_INFINITY).rgb(), (0, 0, 0));
    }

    #[test]
    fn test_nan_amount_is_identity() {
        let c = HexColor::from_rgb(12, 34, 56);
        assert_eq!(c.lighten(f64::NAN), c);
        assert_eq!(c.darken(f64::NAN), c);
    }

    #[test]
    fn test_string_helpers() {
        assert_eq!(lighten("#000000", 1.0).unwrap(), "#ffffff");
        assert_eq!(darken("#FFFFFF", 1.0).unwrap(), "#000000");
        assert!(lighten("red", 0.5).is_err());
    }
}
