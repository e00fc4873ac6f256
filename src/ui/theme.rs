//! Theme system
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in presets (light, dark)
//! - Hex color parsing

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Page background behind everything
    pub background: Color,
    /// Default text color
    pub foreground: Color,
    /// Dialog surface
    pub surface: Color,
    /// Backdrop tint blended over the page while the dialog is open
    pub overlay: Color,
    /// Primary accent (trigger button, checked marks, switch thumb)
    pub accent: Color,
    /// Light accent tint behind checked boxes
    pub accent_tint: Color,
    /// Text drawn on top of the accent (header band, button label)
    pub on_accent: Color,
    /// Option labels
    pub label: Color,
    /// Section titles
    pub title: Color,
    /// Divider between sections
    pub divider: Color,
    /// Background of the focused control
    pub focus_bg: Color,
    /// DISABLED badge text
    pub badge_fg: Color,
    /// DISABLED badge background
    pub badge_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme - default
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),   // #ffffff
            foreground: Color::Rgb(33, 37, 41),      // #212529
            surface: Color::Rgb(255, 255, 255),      // #ffffff
            overlay: Color::Rgb(0, 0, 0),            // #000000
            accent: Color::Rgb(64, 192, 87),         // #40c057 (green.6)
            accent_tint: Color::Rgb(211, 249, 216),  // #d3f9d8 (green.1)
            on_accent: Color::Rgb(248, 249, 250),    // #f8f9fa (gray.0)
            label: Color::Rgb(134, 142, 150),        // #868e96 (gray.6)
            title: Color::Rgb(73, 80, 87),           // #495057 (gray.7)
            divider: Color::Rgb(222, 226, 230),      // #dee2e6 (gray.3)
            focus_bg: Color::Rgb(241, 243, 245),     // #f1f3f5 (gray.1)
            badge_fg: Color::Rgb(224, 49, 49),       // #e03131 (red.8)
            badge_bg: Color::Rgb(255, 227, 227),     // #ffe3e3 (red.1)
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(26, 27, 30),      // #1a1b1e
            foreground: Color::Rgb(193, 194, 197),   // #c1c2c5
            surface: Color::Rgb(37, 38, 43),         // #25262b
            overlay: Color::Rgb(0, 0, 0),            // #000000
            accent: Color::Rgb(47, 158, 68),         // #2f9e44 (green.8)
            accent_tint: Color::Rgb(43, 138, 62),    // #2b8a3e (green.9)
            on_accent: Color::Rgb(248, 249, 250),    // #f8f9fa
            label: Color::Rgb(144, 146, 150),        // #909296
            title: Color::Rgb(193, 194, 197),        // #c1c2c5
            divider: Color::Rgb(55, 58, 64),         // #373a40
            focus_bg: Color::Rgb(44, 46, 51),        // #2c2e33
            badge_fg: Color::Rgb(255, 135, 135),     // #ff8787
            badge_bg: Color::Rgb(80, 30, 30),        // #501e1e
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

/// Theme resolution error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("unknown theme preset '{0}' (expected light or dark)")]
    UnknownPreset(String),
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa (alpha ignored)
pub fn parse_hex_color(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ThemeError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ThemeError::InvalidHex)
    };

    match s.len() {
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => {
            channel(6..8)?;
            Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        _ => Err(ThemeError::InvalidLength),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("40c057"), Ok(Color::Rgb(64, 192, 87)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_8() {
        assert_eq!(parse_hex_color("#ff0000ff"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#40c05780"), Ok(Color::Rgb(64, 192, 87)));
    }

    #[test]
    fn test_parse_hex_8_rejects_bad_alpha() {
        assert_eq!(parse_hex_color("#ff0000zz"), Err(ThemeError::InvalidHex));
        assert_eq!(parse_hex_color("ff0000g0"), Err(ThemeError::InvalidHex));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("invalid"), Err(ThemeError::InvalidLength));
        assert_eq!(parse_hex_color("#gg0000"), Err(ThemeError::InvalidHex));
        assert_eq!(parse_hex_color("#ff00"), Err(ThemeError::InvalidLength));
        assert_eq!(parse_hex_color("ééé"), Err(ThemeError::InvalidHex));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Theme::from_preset("light"), Some(Theme::light()));
        assert_eq!(Theme::from_preset("DARK"), Some(Theme::dark()));
        assert!(Theme::from_preset("nord").is_none());
    }
}
