//! Hex color helpers shared by every generator.
//!
//! Settings carry colors as the text the user typed, so everything here works
//! on strings and degrades gracefully: malformed input is handed back
//! unchanged rather than reported as an error.
//!
//! ## Supported Input
//!
//! - **Short hex**: `#RGB`
//! - **Long hex**: `#RRGGBB`
//!
//! Anything else (named colors, `#RRGGBBAA`, `rgb(...)`) is passed through
//! by [`with_alpha`] and [`adjust_lightness`] after [`css_color`] has checked
//! that it is a single, self-contained value token.

use std::borrow::Cow;
use std::fmt;

/// Alpha at or above this threshold is treated as fully opaque.
const OPAQUE_THRESHOLD: f64 = 0.99;

/// Stand-in for color text that cannot be embedded in style text.
pub const UNSAFE_COLOR: &str = "transparent";

/// An opaque sRGB color decoded from `#RGB` or `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB` (case-insensitive). Returns `None` for
    /// anything else, including 4- and 8-digit forms.
    pub fn parse_hex(input: &str) -> Option<Self> {
        let hex = input.trim().strip_prefix('#')?;
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()?;

        match digits.as_slice() {
            // #RGB -> #RRGGBB
            [r, g, b] => Some(Self::new(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Some(Self::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => None,
        }
    }

    /// Calculates the relative luminance of this color.
    ///
    /// Uses the sRGB luminance formula (ITU-R BT.709).
    /// Returns a value between 0.0 (black) and 1.0 (white).
    pub fn luminance(&self) -> f64 {
        let r = srgb_to_linear(self.r as f64 / 255.0);
        let g = srgb_to_linear(self.g as f64 / 255.0);
        let b = srgb_to_linear(self.b as f64 / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Checks that `color` can be dropped into a declaration value, a gradient
/// stop list or a quoted SVG attribute as-is.
///
/// Accepts ASCII letters, digits, `#`, `%`, `.`, `-`, `+`, `/` and spaces,
/// plus balanced parentheses with commas only inside them. The result is
/// trimmed. Anything else (empty text, `;`, braces, quotes, `*/`, a bare
/// comma) is logged and replaced by [`UNSAFE_COLOR`].
///
/// ```
/// use tilecss::color::css_color;
///
/// assert_eq!(css_color(" #abc "), "#abc");
/// assert_eq!(css_color("rgb(1, 2, 3 / 50%)"), "rgb(1, 2, 3 / 50%)");
/// assert_eq!(css_color(""), "transparent");
/// assert_eq!(css_color("red; color: blue"), "transparent");
/// ```
pub fn css_color(color: &str) -> Cow<'_, str> {
    let trimmed = color.trim();
    if is_color_token(trimmed) {
        Cow::Borrowed(trimmed)
    } else {
        log::warn!("cannot embed color {color:?}, using {UNSAFE_COLOR}");
        Cow::Borrowed(UNSAFE_COLOR)
    }
}

fn is_color_token(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            ',' if depth == 0 => return false,
            ',' => {}
            c if c.is_ascii_alphanumeric() => {}
            '#' | '%' | '.' | '-' | '+' | '/' | ' ' => {}
            _ => return false,
        }
    }
    depth == 0
}

/// Returns `color` with an alpha byte appended for `opacity`.
///
/// The input comes back unchanged (but trimmed and run through [`css_color`])
/// when `opacity >= 0.99` or when it is not a
/// `#RGB`/`#RRGGBB` string. Shorthand is expanded before the alpha byte is
/// appended.
///
/// ```
/// use tilecss::color::with_alpha;
///
/// assert_eq!(with_alpha("#3b82f6", 0.8), "#3b82f6cc");
/// assert_eq!(with_alpha("#abc", 0.5), "#aabbcc80");
/// assert_eq!(with_alpha("#3b82f6", 1.0), "#3b82f6");
/// assert_eq!(with_alpha("tomato", 0.5), "tomato");
/// ```
pub fn with_alpha(color: &str, opacity: f64) -> String {
    if opacity >= OPAQUE_THRESHOLD || Rgb::parse_hex(color).is_none() {
        return css_color(color).into_owned();
    }

    let hex = color.trim();
    let expanded = if hex.len() == 4 {
        let mut long = String::with_capacity(7);
        long.push('#');
        for c in hex[1..].chars() {
            long.push(c);
            long.push(c);
        }
        long
    } else {
        hex.to_string()
    };

    // NaN saturates to 0 in the cast, which is the most conservative alpha.
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{expanded}{alpha:02x}")
}

/// Scales each RGB channel of `color` by `1 + percent / 100`.
///
/// Channels are rounded and clamped to `0..=255`; the result is lowercase
/// `#rrggbb`. Input that does not decode is logged and returned as
/// [`css_color`] leaves it.
///
/// ```
/// use tilecss::color::adjust_lightness;
///
/// assert_eq!(adjust_lightness("#808080", 50.0), "#c0c0c0");
/// assert_eq!(adjust_lightness("#808080", -50.0), "#404040");
/// assert_eq!(adjust_lightness("#ffffff", 20.0), "#ffffff");
/// ```
pub fn adjust_lightness(color: &str, percent: f64) -> String {
    let Some(rgb) = Rgb::parse_hex(color) else {
        log::warn!("adjust_lightness: cannot decode color {color:?}, leaving it unchanged");
        return css_color(color).into_owned();
    };

    let factor = 1.0 + percent / 100.0;
    let scale = |channel: u8| (channel as f64 * factor).round().clamp(0.0, 255.0) as u8;

    Rgb::new(scale(rgb.r), scale(rgb.g), scale(rgb.b)).to_string()
}

/// Draws a uniformly random opaque color as lowercase `#rrggbb`.
pub fn random_hex(rng: &mut fastrand::Rng) -> String {
    Rgb::new(rng.u8(..), rng.u8(..), rng.u8(..)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== HEX PARSING ====================

    #[test]
    fn test_parse_hex_short_and_long() {
        assert_eq!(Rgb::parse_hex("#f00"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse_hex("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::parse_hex("#9932CC"), Some(Rgb::new(0x99, 0x32, 0xcc)));
        assert_eq!(Rgb::parse_hex("  #00ff00  "), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_other_forms() {
        assert_eq!(Rgb::parse_hex("ff0000"), None); // missing '#'
        assert_eq!(Rgb::parse_hex("#ff00000"), None); // 7 digits
        assert_eq!(Rgb::parse_hex("#ff0000ff"), None); // alpha already present
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
        assert_eq!(Rgb::parse_hex("#"), None);
        assert_eq!(Rgb::parse_hex("red"), None);
    }

    #[test]
    fn test_display_is_lowercase_long_hex() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    // ==================== WITH ALPHA ====================

    #[test]
    fn test_with_alpha_appends_byte() {
        assert_eq!(with_alpha("#3b82f6", 0.8), "#3b82f6cc");
        assert_eq!(with_alpha("#000000", 0.0), "#00000000");
        assert_eq!(with_alpha("#000000", 0.5), "#00000080");
    }

    #[test]
    fn test_with_alpha_expands_shorthand() {
        assert_eq!(with_alpha("#f0a", 0.8), "#ff00aacc");
    }

    #[test]
    fn test_with_alpha_opaque_is_identity() {
        assert_eq!(with_alpha("#3b82f6", 1.0), "#3b82f6");
        assert_eq!(with_alpha("#3b82f6", 0.995), "#3b82f6");
        assert_eq!(with_alpha("#abc", 1.0), "#abc");
    }

    #[test]
    fn test_with_alpha_trims_on_both_paths() {
        assert_eq!(with_alpha(" #abc ", 0.5), "#aabbcc80");
        assert_eq!(with_alpha(" #abc ", 1.0), "#abc");
        assert_eq!(with_alpha("  tomato\n", 0.5), "tomato");
    }

    #[test]
    fn test_with_alpha_passes_through_malformed() {
        for input in ["#", "red", "#12", "#12345", "#1234567890", "rgb(1,2,3)", "#ff0000ff"] {
            assert_eq!(with_alpha(input, 0.5), input);
        }
    }

    #[test]
    fn test_with_alpha_replaces_unembeddable_text() {
        for input in ["", "   ", "red; color: blue", "a}b", "x'y"] {
            assert_eq!(with_alpha(input, 0.5), UNSAFE_COLOR, "{input:?}");
            assert_eq!(with_alpha(input, 1.0), UNSAFE_COLOR, "{input:?}");
        }
    }

    // ==================== EMBEDDING ====================

    #[test]
    fn test_css_color_accepts_value_tokens() {
        for input in [
            "#3b82f6",
            "tomato",
            "currentColor",
            "rgb(59, 130, 246)",
            "hsl(217 91% 60% / 0.5)",
            "color-mix(in srgb, red 40%, blue)",
        ] {
            assert_eq!(css_color(input), input);
        }
    }

    #[test]
    fn test_css_color_rejects_breakouts() {
        for input in [
            "",
            "red;",
            "red; } body { color: blue",
            "{",
            "red */",
            "'red'",
            "\"red\"",
            "<svg>",
            "red, blue",
            "rgb(1, 2",
            "rgb)1(",
            "red\nblue",
        ] {
            assert_eq!(css_color(input), UNSAFE_COLOR, "{input:?}");
        }
    }

    #[test]
    fn test_with_alpha_clamps_out_of_range_opacity() {
        assert_eq!(with_alpha("#102030", -3.0), "#10203000");
        assert_eq!(with_alpha("#102030", f64::NAN), "#10203000");
    }

    // ==================== LIGHTNESS ====================

    #[test]
    fn test_adjust_lightness_scales_channels() {
        assert_eq!(adjust_lightness("#646464", 10.0), "#6e6e6e");
        assert_eq!(adjust_lightness("#646464", -10.0), "#5a5a5a");
        assert_eq!(adjust_lightness("#102030", 0.0), "#102030");
    }

    #[test]
    fn test_adjust_lightness_clamps() {
        assert_eq!(adjust_lightness("#f0f0f0", 100.0), "#ffffff");
        assert_eq!(adjust_lightness("#f0f0f0", -200.0), "#000000");
    }

    #[test]
    fn test_adjust_lightness_expands_shorthand() {
        assert_eq!(adjust_lightness("#FFF", 0.0), "#ffffff");
    }

    #[test]
    fn test_adjust_lightness_malformed_unchanged() {
        assert_eq!(adjust_lightness("not-a-color", 25.0), "not-a-color");
        assert_eq!(adjust_lightness("#12345678", 25.0), "#12345678");
        assert_eq!(adjust_lightness("red; x: y", 25.0), UNSAFE_COLOR);
    }

    // ==================== LUMINANCE / RANDOM ====================

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Rgb::BLACK.luminance(), 0.0);
        assert!((Rgb::new(255, 255, 255).luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_hex_is_parseable() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let color = random_hex(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(Rgb::parse_hex(&color).is_some(), "bad color {color}");
        }
    }
}
