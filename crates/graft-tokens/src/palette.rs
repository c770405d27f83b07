//! The fixed color palette and nearest-color matching.
//!
//! The palette is organized as named hues, each with an ordered list of
//! shades. Declaration order is load-bearing: ties between equally distant
//! candidates resolve to the first-declared entry, so a hex value exactly
//! between two adjacent shades snaps to the earlier one.

use std::sync::OnceLock;

use graft_core::Rgba;
use indexmap::IndexMap;

/// One palette entry: a semantic name, its canonical hex, and RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: [u8; 3],
}

static WHITE: &[ColorSpec] = &[
    ColorSpec { name: "white", hex: "#ffffff", rgb: [255, 255, 255] },
];

static BLACK: &[ColorSpec] = &[
    ColorSpec { name: "black", hex: "#000000", rgb: [0, 0, 0] },
];

static GRAY: &[ColorSpec] = &[
    ColorSpec { name: "gray-50", hex: "#f9fafb", rgb: [249, 250, 251] },
    ColorSpec { name: "gray-100", hex: "#f3f4f6", rgb: [243, 244, 246] },
    ColorSpec { name: "gray-200", hex: "#e5e7eb", rgb: [229, 231, 235] },
    ColorSpec { name: "gray-300", hex: "#d1d5db", rgb: [209, 213, 219] },
    ColorSpec { name: "gray-400", hex: "#9ca3af", rgb: [156, 163, 175] },
    ColorSpec { name: "gray-500", hex: "#6b7280", rgb: [107, 114, 128] },
    ColorSpec { name: "gray-600", hex: "#4b5563", rgb: [75, 85, 99] },
    ColorSpec { name: "gray-700", hex: "#374151", rgb: [55, 65, 81] },
    ColorSpec { name: "gray-800", hex: "#1f2937", rgb: [31, 41, 55] },
    ColorSpec { name: "gray-900", hex: "#111827", rgb: [17, 24, 39] },
];

static RED: &[ColorSpec] = &[
    ColorSpec { name: "red-50", hex: "#fef2f2", rgb: [254, 242, 242] },
    ColorSpec { name: "red-100", hex: "#fee2e2", rgb: [254, 226, 226] },
    ColorSpec { name: "red-200", hex: "#fecaca", rgb: [254, 202, 202] },
    ColorSpec { name: "red-300", hex: "#fca5a5", rgb: [252, 165, 165] },
    ColorSpec { name: "red-400", hex: "#f87171", rgb: [248, 113, 113] },
    ColorSpec { name: "red-500", hex: "#ef4444", rgb: [239, 68, 68] },
    ColorSpec { name: "red-600", hex: "#dc2626", rgb: [220, 38, 38] },
    ColorSpec { name: "red-700", hex: "#b91c1c", rgb: [185, 28, 28] },
    ColorSpec { name: "red-800", hex: "#991b1b", rgb: [153, 27, 27] },
    ColorSpec { name: "red-900", hex: "#7f1d1d", rgb: [127, 29, 29] },
];

static YELLOW: &[ColorSpec] = &[
    ColorSpec { name: "yellow-50", hex: "#fffbeb", rgb: [255, 251, 235] },
    ColorSpec { name: "yellow-100", hex: "#fef3c7", rgb: [254, 243, 199] },
    ColorSpec { name: "yellow-200", hex: "#fde68a", rgb: [253, 230, 138] },
    ColorSpec { name: "yellow-300", hex: "#fcd34d", rgb: [252, 211, 77] },
    ColorSpec { name: "yellow-400", hex: "#fbbf24", rgb: [251, 191, 36] },
    ColorSpec { name: "yellow-500", hex: "#f59e0b", rgb: [245, 158, 11] },
    ColorSpec { name: "yellow-600", hex: "#d97706", rgb: [217, 119, 6] },
    ColorSpec { name: "yellow-700", hex: "#b45309", rgb: [180, 83, 9] },
    ColorSpec { name: "yellow-800", hex: "#92400e", rgb: [146, 64, 14] },
    ColorSpec { name: "yellow-900", hex: "#78350f", rgb: [120, 53, 15] },
];

static GREEN: &[ColorSpec] = &[
    ColorSpec { name: "green-50", hex: "#ecfdf5", rgb: [236, 253, 245] },
    ColorSpec { name: "green-100", hex: "#d1fae5", rgb: [209, 250, 229] },
    ColorSpec { name: "green-200", hex: "#a7f3d0", rgb: [167, 243, 208] },
    ColorSpec { name: "green-300", hex: "#6ee7b7", rgb: [110, 231, 183] },
    ColorSpec { name: "green-400", hex: "#34d399", rgb: [52, 211, 153] },
    ColorSpec { name: "green-500", hex: "#10b981", rgb: [16, 185, 129] },
    ColorSpec { name: "green-600", hex: "#059669", rgb: [5, 150, 105] },
    ColorSpec { name: "green-700", hex: "#047857", rgb: [4, 120, 87] },
    ColorSpec { name: "green-800", hex: "#065f46", rgb: [6, 95, 70] },
    ColorSpec { name: "green-900", hex: "#064e3b", rgb: [6, 78, 59] },
];

static BLUE: &[ColorSpec] = &[
    ColorSpec { name: "blue-50", hex: "#eff6ff", rgb: [239, 246, 255] },
    ColorSpec { name: "blue-100", hex: "#dbeafe", rgb: [219, 234, 254] },
    ColorSpec { name: "blue-200", hex: "#bfdbfe", rgb: [191, 219, 254] },
    ColorSpec { name: "blue-300", hex: "#93c5fd", rgb: [147, 197, 253] },
    ColorSpec { name: "blue-400", hex: "#60a5fa", rgb: [96, 165, 250] },
    ColorSpec { name: "blue-500", hex: "#3b82f6", rgb: [59, 130, 246] },
    ColorSpec { name: "blue-600", hex: "#2563eb", rgb: [37, 99, 235] },
    ColorSpec { name: "blue-700", hex: "#1d4ed8", rgb: [29, 78, 216] },
    ColorSpec { name: "blue-800", hex: "#1e40af", rgb: [30, 64, 175] },
    ColorSpec { name: "blue-900", hex: "#1e3a8a", rgb: [30, 58, 138] },
];

static INDIGO: &[ColorSpec] = &[
    ColorSpec { name: "indigo-50", hex: "#eef2ff", rgb: [238, 242, 255] },
    ColorSpec { name: "indigo-100", hex: "#e0e7ff", rgb: [224, 231, 255] },
    ColorSpec { name: "indigo-200", hex: "#c7d2fe", rgb: [199, 210, 254] },
    ColorSpec { name: "indigo-300", hex: "#a5b4fc", rgb: [165, 180, 252] },
    ColorSpec { name: "indigo-400", hex: "#818cf8", rgb: [129, 140, 248] },
    ColorSpec { name: "indigo-500", hex: "#6366f1", rgb: [99, 102, 241] },
    ColorSpec { name: "indigo-600", hex: "#4f46e5", rgb: [79, 70, 229] },
    ColorSpec { name: "indigo-700", hex: "#4338ca", rgb: [67, 56, 202] },
    ColorSpec { name: "indigo-800", hex: "#3730a3", rgb: [55, 48, 163] },
    ColorSpec { name: "indigo-900", hex: "#312e81", rgb: [49, 46, 129] },
];

static PURPLE: &[ColorSpec] = &[
    ColorSpec { name: "purple-50", hex: "#f5f3ff", rgb: [245, 243, 255] },
    ColorSpec { name: "purple-100", hex: "#ede9fe", rgb: [237, 233, 254] },
    ColorSpec { name: "purple-200", hex: "#ddd6fe", rgb: [221, 214, 254] },
    ColorSpec { name: "purple-300", hex: "#c4b5fd", rgb: [196, 181, 253] },
    ColorSpec { name: "purple-400", hex: "#a78bfa", rgb: [167, 139, 250] },
    ColorSpec { name: "purple-500", hex: "#8b5cf6", rgb: [139, 92, 246] },
    ColorSpec { name: "purple-600", hex: "#7c3aed", rgb: [124, 58, 237] },
    ColorSpec { name: "purple-700", hex: "#6d28d9", rgb: [109, 40, 217] },
    ColorSpec { name: "purple-800", hex: "#5b21b6", rgb: [91, 33, 182] },
    ColorSpec { name: "purple-900", hex: "#4c1d95", rgb: [76, 29, 149] },
];

static PINK: &[ColorSpec] = &[
    ColorSpec { name: "pink-50", hex: "#fdf2f8", rgb: [253, 242, 248] },
    ColorSpec { name: "pink-100", hex: "#fce7f3", rgb: [252, 231, 243] },
    ColorSpec { name: "pink-200", hex: "#fbcfe8", rgb: [251, 207, 232] },
    ColorSpec { name: "pink-300", hex: "#f9a8d4", rgb: [249, 168, 212] },
    ColorSpec { name: "pink-400", hex: "#f472b6", rgb: [244, 114, 182] },
    ColorSpec { name: "pink-500", hex: "#ec4899", rgb: [236, 72, 153] },
    ColorSpec { name: "pink-600", hex: "#db2777", rgb: [219, 39, 119] },
    ColorSpec { name: "pink-700", hex: "#be185d", rgb: [190, 24, 93] },
    ColorSpec { name: "pink-800", hex: "#9d174d", rgb: [157, 23, 77] },
    ColorSpec { name: "pink-900", hex: "#831843", rgb: [131, 24, 67] },
];

/// Hue families in declaration order. Iteration order is the tie-break
/// order for nearest matching.
pub fn palette() -> &'static IndexMap<&'static str, &'static [ColorSpec]> {
    static PALETTE: OnceLock<IndexMap<&'static str, &'static [ColorSpec]>> = OnceLock::new();
    PALETTE.get_or_init(|| {
        IndexMap::from([
            ("white", WHITE),
            ("black", BLACK),
            ("gray", GRAY),
            ("red", RED),
            ("yellow", YELLOW),
            ("green", GREEN),
            ("blue", BLUE),
            ("indigo", INDIGO),
            ("purple", PURPLE),
            ("pink", PINK),
        ])
    })
}

/// The closest palette entry to a color by Euclidean distance in RGB
/// space. Strictly-closer entries displace the running best, so the
/// first-declared entry wins exact ties.
pub fn nearest_entry(rgb: [u8; 3]) -> &'static ColorSpec {
    let target = Rgba::rgb(rgb[0], rgb[1], rgb[2]);
    let mut best: Option<(&'static ColorSpec, u32)> = None;
    for shades in palette().values() {
        for spec in *shades {
            let candidate = Rgba::rgb(spec.rgb[0], spec.rgb[1], spec.rgb[2]);
            let dist = target.distance_sq(&candidate);
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((spec, dist)),
            }
        }
    }
    // The palette is a non-empty constant table.
    best.map(|(spec, _)| spec).unwrap_or(&WHITE[0])
}

/// Canonical hex of the nearest palette entry, or `None` when the input
/// hex does not parse. The result is always itself a palette member.
pub fn nearest_color(hex: &str) -> Option<&'static str> {
    let color = Rgba::from_hex(hex).ok()?;
    Some(nearest_entry([color.r, color.g, color.b]).hex)
}

/// Input to [`classify`]: either a hex string or an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    Hex(&'a str),
    Rgb([u8; 3]),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(hex: &'a str) -> Self {
        ColorInput::Hex(hex)
    }
}

impl From<[u8; 3]> for ColorInput<'_> {
    fn from(rgb: [u8; 3]) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<Rgba> for ColorInput<'_> {
    fn from(color: Rgba) -> Self {
        ColorInput::Rgb([color.r, color.g, color.b])
    }
}

/// Semantic "hue-shade" name of the nearest palette entry. Total over
/// every RGB triple; `None` only for unparseable hex input.
pub fn classify<'a>(color: impl Into<ColorInput<'a>>) -> Option<&'static str> {
    let rgb = match color.into() {
        ColorInput::Hex(hex) => {
            let parsed = Rgba::from_hex(hex).ok()?;
            [parsed.r, parsed.g, parsed.b]
        }
        ColorInput::Rgb(rgb) => rgb,
    };
    Some(nearest_entry(rgb).name)
}
