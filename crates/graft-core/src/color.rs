//! Color values used by paints and text styles.

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// RGBA color with 8-bit channels and a fractional alpha.
///
/// Alpha is kept as a fraction (0..1) rather than a byte because design
/// snapshots carry paint opacity as a fraction and emitters print it as one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Create an opaque color from RGB values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from a hex string (`"#ff5500"`, `"ff5500"`, or `"#ff550080"`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim_start_matches('#');
        // Byte-indexed slicing below; multibyte input must fail as a
        // parse error, not a slice panic.
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)? as f64 / 255.0,
            )),
            _ => Err(ColorParseError::InvalidLength(hex.to_string())),
        }
    }

    /// Convert to a lowercase hex string, with an alpha pair only when
    /// not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        }
    }

    /// Render as a CSS `rgba(r, g, b, a)` expression.
    pub fn to_css_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, fmt_alpha(self.a))
    }

    /// Whether the alpha channel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Squared Euclidean distance to another color in RGB space.
    ///
    /// Alpha is ignored; palette matching operates on opaque entries.
    pub fn distance_sq(&self, other: &Rgba) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Format an alpha fraction without trailing zeros (`1`, `0.5`, `0.25`).
fn fmt_alpha(a: f64) -> String {
    let clamped = a.clamp(0.0, 1.0);
    let rounded = (clamped * 100.0).round() / 100.0;
    if (rounded - rounded.round()).abs() < f64::EPSILON {
        format!("{}", rounded.round() as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
