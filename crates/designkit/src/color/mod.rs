//! Color values and shade-scale derivation.
//!
//! - [`HexColor`]: validated `#RRGGBB` value with linear lighten/darken.
//! - [`ShadeScale`]: the eleven-step 50–950 ramp used by every palette role.
//! - [`generate_color_shades`]: derives a ramp from one base color.

mod hex;
mod shade;

pub use hex::{darken, lighten, HexColor};
pub use shade::{generate_color_shades, Shade, ShadeScale};
