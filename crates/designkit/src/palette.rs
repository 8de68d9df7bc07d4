//! Color palettes and their semantic roles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ShadeScale;

/// A semantic color slot in a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
    Surface,
}

impl Role {
    /// All roles in emission order.
    pub const ALL: [Role; 4] = [Role::Primary, Role::Secondary, Role::Tertiary, Role::Surface];

    /// The lowercase name used in CSS variable names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Tertiary => "tertiary",
            Role::Surface => "surface",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named palette with a full shade scale for each [`Role`].
///
/// Palettes are catalog data: they are loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub id: String,
    pub name: String,
    pub primary: ShadeScale,
    pub secondary: ShadeScale,
    pub tertiary: ShadeScale,
    pub surface: ShadeScale,
}

impl ColorPalette {
    /// Returns the scale for a role.
    pub fn scale(&self, role: Role) -> &ShadeScale {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Tertiary => &self.tertiary,
            Role::Surface => &self.surface,
        }
    }
}
