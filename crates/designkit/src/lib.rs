//! # designkit - Design Tokens for Theming
//!
//! `designkit` supplies the static design tokens behind a theme picker (color
//! palettes, web fonts, heading/body font pairings) and the small utilities
//! that turn a user's choice into CSS.
//!
//! ## Core Concepts
//!
//! - [`Catalog`]: the built-in palettes, fonts and pairings, validated on load
//! - [`ColorPalette`]: four [`Role`]s, each an 11-step [`ShadeScale`] (50–950)
//! - [`CustomTheme`]: a palette, a [`FontPair`] and optional per-role base colors
//! - [`generate_css_variables`]: a theme as a `:root { --color-... }` block
//! - [`generate_color_shades`]: a full scale from one `#RRGGBB` color
//! - [`load_google_font`]: request a font stylesheet through a [`StylesheetLoader`]
//!
//! ## Quick Start
//!
//! ```rust
//! use designkit::{generate_css_variables, Catalog, CustomTheme, Role};
//!
//! let catalog = Catalog::builtin();
//! let theme = CustomTheme::new(
//!     catalog.palette("rose-blue").unwrap().clone(),
//!     catalog.pairing("friendly-rounded").unwrap().clone(),
//! )
//! .with_custom_color(Role::Primary, "#ff0000")
//! .unwrap();
//!
//! let css = generate_css_variables(&theme);
//! assert!(css.contains("--color-primary-500: #ff0000;"));
//! ```
//!
//! ## Loading Fonts
//!
//! Font loading is a side effect on the host document. The crate only talks
//! to a [`StylesheetLoader`]; [`HeadStylesheets`] keeps links in memory, and
//! with the `web` feature `DocumentHead` writes to the browser's
//! `document.head`.
//!
//! ```rust
//! use designkit::{load_google_font, Catalog, FontLoad, HeadStylesheets};
//!
//! let pair = Catalog::builtin().pairing("elegant-serif").unwrap();
//! let mut head = HeadStylesheets::new();
//!
//! load_google_font(&mut head, &pair.heading, Some(&["400", "700"][..]));
//! assert_eq!(
//!     load_google_font(&mut head, &pair.heading, None),
//!     FontLoad::AlreadyLoaded
//! );
//! ```
//!
//! ## Theme Configuration
//!
//! A user's selection is stored as YAML and resolved against a catalog:
//!
//! ```rust
//! use designkit::{Catalog, CustomTheme};
//!
//! let theme = CustomTheme::from_yaml(r##"
//! palette: forest-sunset
//! fonts: classic-readable
//! custom_colors:
//!   surface: "#1e293b"
//! "##, Catalog::builtin()).unwrap();
//!
//! assert_eq!(theme.fonts.body.family, "Lato");
//! ```

pub mod catalog;
pub mod color;
mod error;
pub mod font;
pub mod palette;
pub mod theme;

// Error type
pub use error::{Result, ThemeError};

// Color exports
pub use color::{darken, generate_color_shades, lighten, HexColor, Shade, ShadeScale};

// Catalog exports
pub use catalog::{default_color_palettes, default_font_pairings, popular_google_fonts, Catalog};

// Palette and font model
pub use font::{
    load_google_font, FontCategory, FontLoad, FontPair, GoogleFont, HeadStylesheets,
    StylesheetLoader, DEFAULT_VARIANTS, GOOGLE_FONTS_CSS_URL,
};
#[cfg(feature = "web")]
pub use font::DocumentHead;
pub use palette::{ColorPalette, Role};

// Theme exports
pub use theme::{generate_css_variables, CustomColors, CustomTheme, ThemeConfig};
