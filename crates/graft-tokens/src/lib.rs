//! Conversion tables for the Graft engine.
//!
//! Pure nearest-match lookups from continuous pixel values to discrete
//! design-scale tokens, plus nearest-color matching against the fixed
//! palette. All tables are process-wide constants, initialized once and
//! read-only thereafter.

pub mod palette;
pub mod scale;

pub use palette::{classify, nearest_color, nearest_entry, palette, ColorInput, ColorSpec};
pub use scale::{
    line_height_token, Scale, CORNER_RADIUS, FONT_SIZE, LETTER_SPACING, LINE_HEIGHT,
    LINE_HEIGHT_RELATIVE, SPACING,
};
