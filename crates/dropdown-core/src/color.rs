//! Color representation and CSS-style color parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
///
/// Serializes as `#rrggbbaa` and deserializes from any string accepted by
/// [`Color::parse`], so themes can be written the way designers write them:
/// `"rgba(0, 0, 0, .87)"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from RGB values and alpha.
    #[must_use]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r, g, b, a)
    }

    /// Create a color from 8-bit channels and a float alpha.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a,
        )
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or(ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
            8 => Ok(Self::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                f32::from(channel(6..8)?) / 255.0,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Parse a CSS-style color: `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` or one of `black`, `white`, `transparent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a recognised color.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        let (body, expected) = if let Some(rest) = input.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = input.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return Err(ColorParseError::Unrecognized(input.to_string()));
        };

        let body = body
            .strip_suffix(')')
            .ok_or_else(|| ColorParseError::Unrecognized(input.to_string()))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != expected {
            return Err(ColorParseError::ComponentCount {
                expected,
                found: parts.len(),
            });
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidComponent((*part).to_string()))?;
        }
        let alpha = match parts.get(3) {
            Some(part) => part
                .parse::<f32>()
                .map_err(|_| ColorParseError::InvalidComponent((*part).to_string()))?,
            None => 1.0,
        };

        Ok(Self::from_rgba8(channels[0], channels[1], channels[2], alpha))
    }

    /// Convert to hex string with alpha.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8
        )
    }

    /// Same color with its alpha multiplied by `factor`.
    #[must_use]
    pub fn fade(&self, factor: f32) -> Self {
        Self::new(self.r, self.g, self.b, self.a * factor)
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_with_alpha()
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
    /// Wrong number of components inside `rgb()`/`rgba()`
    #[error("expected {expected} color components, found {found}")]
    ComponentCount {
        /// Components required by the notation
        expected: usize,
        /// Components present in the input
        found: usize,
    },
    /// A component that is not a number in range
    #[error("invalid color component: {0}")]
    InvalidComponent(String),
    /// Not a color notation we understand
    #[error("unrecognized color: {0}")]
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

        let c = Color::from_hex("0000ff80").unwrap();
        assert_eq!(c.b, 1.0);
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
    }

    #[test]
    fn test_color_parse_rgba() {
        let c = Color::parse("rgba(0, 0, 0, .87)").unwrap();
        assert_eq!(c.r, 0.0);
        assert!((c.a - 0.87).abs() < 1e-6);
    }

    #[test]
    fn test_color_parse_rgb() {
        let c = Color::parse("rgb(255, 0, 255)").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_parse_named() {
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
        assert_eq!(Color::parse(" Transparent ").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn test_color_parse_errors() {
        assert_eq!(
            Color::parse("rgba(0, 0, 0)"),
            Err(ColorParseError::ComponentCount {
                expected: 4,
                found: 3
            })
        );
        assert!(matches!(
            Color::parse("rgb(300, 0, 0)"),
            Err(ColorParseError::InvalidComponent(_))
        ));
        assert!(matches!(
            Color::parse("hsl(0, 0%, 0%)"),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            Color::parse("rgba(0, 0, 0, 1"),
            Err(ColorParseError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_color_fade() {
        let c = Color::parse("rgba(0, 0, 0, .5)").unwrap().fade(0.5);
        assert!((c.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_color_serde_roundtrip_as_string() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#ffffffff\"");
        let back: Color = serde_json::from_str("\"rgba(255, 255, 255, 1)\"").unwrap();
        assert_eq!(back, Color::WHITE);
    }

    #[test]
    fn test_color_deserialize_rejects_garbage() {
        let result: Result<Color, _> = serde_json::from_str("\"not a color\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }

    proptest! {
        #[test]
        fn prop_lerp_stays_in_range(t in -1.0f32..2.0) {
            let c = Color::BLACK.lerp(&Color::WHITE, t);
            prop_assert!(c.r >= 0.0 && c.r <= 1.0);
        }

        #[test]
        fn prop_parse_rgba8(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let c = Color::parse(&format!("rgb({r}, {g}, {b})")).unwrap();
            prop_assert_eq!(c, Color::from_rgba8(r, g, b, 1.0));
        }
    }
}
