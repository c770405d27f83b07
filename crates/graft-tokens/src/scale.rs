//! Nearest-match conversion scales.
//!
//! Each scale is an immutable ordered sequence of (pixel breakpoint,
//! token) pairs. Lookup is total over all real inputs: values outside the
//! bounds clamp to the nearest bound, and exact ties resolve to the
//! earlier-declared entry.

/// An ordered nearest-match scale from pixel values to discrete tokens.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    entries: &'static [(f64, &'static str)],
}

impl Scale {
    /// Build from breakpoint/token pairs. Callers declare entries in
    /// ascending breakpoint order; declaration order is the tie-break.
    pub const fn new(entries: &'static [(f64, &'static str)]) -> Self {
        Self { entries }
    }

    /// The token whose breakpoint is nearest to `value` by absolute
    /// difference. Earlier entries win exact ties, so
    /// `nearest(1.0)` on breakpoints `[0, 2]` yields the `0` token.
    pub fn nearest(&self, value: f64) -> &'static str {
        let mut best = self.entries[0];
        for &entry in &self.entries[1..] {
            if (entry.0 - value).abs() < (best.0 - value).abs() {
                best = entry;
            }
        }
        best.1
    }

    /// The breakpoint the value snaps to; used to verify idempotence.
    pub fn snap(&self, value: f64) -> f64 {
        let mut best = self.entries[0];
        for &entry in &self.entries[1..] {
            if (entry.0 - value).abs() < (best.0 - value).abs() {
                best = entry;
            }
        }
        best.0
    }

    /// All tokens, in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(_, token)| token)
    }
}

/// Spacing and layout sizes. Small pixel deltas map 1:1 onto quarter-rem
/// steps; past 48px the scale compresses.
pub static SPACING: Scale = Scale::new(&[
    (0.0, "0"),
    (1.0, "px"),
    (2.0, "0.5"),
    (4.0, "1"),
    (6.0, "1.5"),
    (8.0, "2"),
    (10.0, "2.5"),
    (12.0, "3"),
    (14.0, "3.5"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
    (44.0, "11"),
    (48.0, "12"),
    (56.0, "14"),
    (64.0, "16"),
    (80.0, "20"),
    (96.0, "24"),
    (112.0, "28"),
    (128.0, "32"),
    (144.0, "36"),
    (160.0, "40"),
    (176.0, "44"),
    (192.0, "48"),
    (208.0, "52"),
    (224.0, "56"),
    (240.0, "60"),
    (256.0, "64"),
    (288.0, "72"),
    (320.0, "80"),
    (384.0, "96"),
]);

/// Font sizes onto the t-shirt scale.
pub static FONT_SIZE: Scale = Scale::new(&[
    (12.0, "xs"),
    (14.0, "sm"),
    (16.0, "base"),
    (18.0, "lg"),
    (20.0, "xl"),
    (24.0, "2xl"),
    (30.0, "3xl"),
    (36.0, "4xl"),
    (48.0, "5xl"),
    (64.0, "6xl"),
]);

/// Letter spacing onto the qualitative tracking tokens.
pub static LETTER_SPACING: Scale = Scale::new(&[
    (-0.4, "tighter"),
    (-0.2, "tight"),
    (0.0, "normal"),
    (0.2, "wide"),
    (0.4, "wider"),
    (0.8, "widest"),
]);

/// Line heights onto the numeric leading steps (quarter-rem units).
pub static LINE_HEIGHT: Scale = Scale::new(&[
    (12.0, "3"),
    (16.0, "4"),
    (20.0, "5"),
    (24.0, "6"),
    (28.0, "7"),
    (32.0, "8"),
    (36.0, "9"),
    (40.0, "10"),
]);

/// Relative (percent-based) line heights onto the named leading tokens.
/// Keyed by the line-height multiplier rather than pixels.
pub static LINE_HEIGHT_RELATIVE: Scale = Scale::new(&[
    (1.0, "none"),
    (1.25, "tight"),
    (1.375, "snug"),
    (1.5, "normal"),
    (1.625, "relaxed"),
    (2.0, "loose"),
]);

/// Corner radii onto the rounding scale. The empty token is the default
/// rounding step (`rounded` with no suffix).
pub static CORNER_RADIUS: Scale = Scale::new(&[
    (0.0, "none"),
    (2.0, "sm"),
    (4.0, ""),
    (6.0, "md"),
    (8.0, "lg"),
    (12.0, "xl"),
    (16.0, "2xl"),
    (24.0, "3xl"),
]);

/// Line-height token for a pixel value.
///
/// Exact multiples of the 4px base unit inside the leading range map
/// straight to their step name; everything else snaps to the nearest step.
pub fn line_height_token(px: f64) -> &'static str {
    if px.fract() == 0.0 && (px as i64) % 4 == 0 && (12.0..=40.0).contains(&px) {
        match px as i64 / 4 {
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            _ => "10",
        }
    } else {
        LINE_HEIGHT.nearest(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static TWO: Scale = Scale::new(&[(0.0, "0"), (2.0, "2")]);
    static GAP: Scale = Scale::new(&[(0.0, "0"), (3.0, "3")]);
    static HALF: Scale = Scale::new(&[(0.0, "0"), (0.5, "0.5")]);

    #[test]
    fn test_tie_resolves_low() {
        assert_eq!(TWO.nearest(1.0), "0");
        assert_eq!(HALF.nearest(0.25), "0");
    }

    #[test]
    fn test_nearest_prefers_closer() {
        assert_eq!(GAP.nearest(2.0), "3");
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(SPACING.nearest(-50.0), "0");
        assert_eq!(SPACING.nearest(10_000.0), "96");
        assert_eq!(FONT_SIZE.nearest(0.0), "xs");
        assert_eq!(FONT_SIZE.nearest(500.0), "6xl");
    }

    #[test]
    fn test_font_size_vectors() {
        assert_eq!(FONT_SIZE.nearest(14.0), "sm");
        assert_eq!(FONT_SIZE.nearest(18.0), "lg");
    }

    #[test]
    fn test_spacing_vectors() {
        assert_eq!(SPACING.nearest(4.0), "1");
        assert_eq!(SPACING.nearest(256.0), "64");
    }

    #[test]
    fn test_letter_spacing_tokens() {
        assert_eq!(LETTER_SPACING.nearest(-0.5), "tighter");
        assert_eq!(LETTER_SPACING.nearest(0.0), "normal");
        assert_eq!(LETTER_SPACING.nearest(1.2), "widest");
    }

    #[test]
    fn test_line_height_exact_multiples() {
        assert_eq!(line_height_token(24.0), "6");
        assert_eq!(line_height_token(40.0), "10");
    }

    #[test]
    fn test_line_height_snaps_otherwise() {
        assert_eq!(line_height_token(22.0), "5");
        assert_eq!(line_height_token(13.5), "3");
        assert_eq!(line_height_token(200.0), "10");
    }

    #[test]
    fn test_corner_radius_default_step() {
        assert_eq!(CORNER_RADIUS.nearest(4.0), "");
        assert_eq!(CORNER_RADIUS.nearest(8.0), "lg");
    }

    proptest! {
        #[test]
        fn nearest_is_member(v in -1_000.0..10_000.0f64) {
            let token = SPACING.nearest(v);
            prop_assert!(SPACING.tokens().any(|t| t == token));
        }

        #[test]
        fn nearest_is_idempotent(v in -1_000.0..10_000.0f64) {
            let snapped = SPACING.snap(v);
            prop_assert_eq!(SPACING.nearest(snapped), SPACING.nearest(v));
        }

        #[test]
        fn font_size_total(v in proptest::num::f64::NORMAL) {
            // Any finite input yields a token.
            let _ = FONT_SIZE.nearest(v);
        }
    }
}
