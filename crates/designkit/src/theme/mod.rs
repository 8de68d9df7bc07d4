//! User themes: a palette, a font pairing and optional custom colors.
//!
//! A [`CustomTheme`] starts from catalog choices. Each [`Role`] may be
//! overridden by a single base color; the override replaces the whole role
//! scale with one derived by [`ShadeScale::from_base`], never a mix of
//! palette and derived shades.
//!
//! ```rust
//! use designkit::{Catalog, CustomTheme, Role, Shade};
//!
//! let catalog = Catalog::builtin();
//! let theme = CustomTheme::new(
//!     catalog.palette("monochrome").unwrap().clone(),
//!     catalog.pairing("modern-clean").unwrap().clone(),
//! )
//! .with_custom_color(Role::Primary, "#ff0000")
//! .unwrap();
//!
//! assert_eq!(theme.scale(Role::Primary)[Shade::S500].to_string(), "#ff0000");
//! ```
//!
//! ## See Also
//!
//! - [`generate_css_variables`]: serializes the resolved scales to CSS
//! - [`ThemeConfig`]: the YAML form of a theme selection

mod config;
mod css;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{HexColor, ShadeScale};
use crate::error::Result;
use crate::font::FontPair;
use crate::palette::{ColorPalette, Role};

pub use config::ThemeConfig;
pub use css::generate_css_variables;

/// Optional per-role base colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<HexColor>,
}

impl CustomColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the override for a role.
    pub fn get(&self, role: Role) -> Option<HexColor> {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Tertiary => self.tertiary,
            Role::Surface => self.surface,
        }
    }

    /// Sets or clears the override for a role.
    pub fn set(&mut self, role: Role, color: Option<HexColor>) {
        let slot = match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Tertiary => &mut self.tertiary,
            Role::Surface => &mut self.surface,
        };
        *slot = color;
    }

    /// True if no role is overridden.
    pub fn is_empty(&self) -> bool {
        Role::ALL.iter().all(|r| self.get(*r).is_none())
    }
}

/// A palette and font pairing chosen by the user, plus color overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTheme {
    pub palette: ColorPalette,
    pub fonts: FontPair,
    pub custom_colors: CustomColors,
}

impl CustomTheme {
    /// Creates a theme with no overrides.
    pub fn new(palette: ColorPalette, fonts: FontPair) -> Self {
        Self {
            palette,
            fonts,
            custom_colors: CustomColors::default(),
        }
    }

    /// Overrides one role with a base color, returning `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColorFormat`](crate::ThemeError::InvalidColorFormat)
    /// if `color` is not `#RRGGBB`.
    pub fn with_custom_color(mut self, role: Role, color: &str) -> Result<Self> {
        let base = HexColor::parse(color)?;
        debug!(role = %role, base = %base, "overriding role with custom color");
        self.custom_colors.set(role, Some(base));
        Ok(self)
    }

    /// Replaces all overrides.
    pub fn with_custom_colors(mut self, colors: CustomColors) -> Self {
        for role in Role::ALL {
            if let Some(base) = colors.get(role) {
                debug!(role = %role, base = %base, "overriding role with custom color");
            }
        }
        self.custom_colors = colors;
        self
    }

    /// The effective scale for a role: derived from the override if one is
    /// set, otherwise the palette's own scale.
    pub fn scale(&self, role: Role) -> Cow<'_, ShadeScale> {
        match self.custom_colors.get(role) {
            Some(base) => Cow::Owned(ShadeScale::from_base(base)),
            None => Cow::Borrowed(self.palette.scale(role)),
        }
    }

    /// The 44 `--color-{role}-{shade}: {hex};` declarations, in emission order.
    pub fn css_declarations(&self) -> Vec<String> {
        Role::ALL
            .iter()
            .flat_map(|&role| {
                self.scale(role)
                    .iter()
                    .map(move |(shade, color)| format!("--color-{}-{}: {};", role, shade, color))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
