//! Fill colors and hex parsing.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accent fill the factory assigns to every item it creates.
pub const ACCENT_FILL: SerializableColor = SerializableColor::rgb(0xF4, 0x43, 0x36);

/// Fill a strategy falls back to when an item carries no fill option.
pub const DEFAULT_FILL: SerializableColor = SerializableColor::rgb(0x00, 0xFF, 0x00);

/// Color parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color must start with '#': {0}")]
    MissingHash(String),
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;
        let invalid = || ColorError::InvalidHex(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                // Short form: each digit is doubled (#f43 == #ff4433)
                let mut channels = [0u8; 3];
                for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *channel = v * 17;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            8 => Ok(Self::new(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                byte(&digits[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Lowercase hex, with the alpha byte only when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::Display for SerializableColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for SerializableColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color = SerializableColor::from_hex("#F44336").unwrap();
        assert_eq!(color, SerializableColor::rgb(0xF4, 0x43, 0x36));
        assert_eq!(color, ACCENT_FILL);
    }

    #[test]
    fn test_parse_short_form() {
        let color = SerializableColor::from_hex("#0f0").unwrap();
        assert_eq!(color, DEFAULT_FILL);
    }

    #[test]
    fn test_parse_with_alpha() {
        let color: SerializableColor = "#00000080".parse().unwrap();
        assert_eq!(color.a, 0x80);
        assert_eq!(color.to_hex(), "#00000080");
    }

    #[test]
    fn test_invalid_colors() {
        assert!(matches!(
            SerializableColor::from_hex("F44336"),
            Err(ColorError::MissingHash(_))
        ));
        assert!(matches!(
            SerializableColor::from_hex("#F4433"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            SerializableColor::from_hex("#zzzzzz"),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hex_is_lowercase() {
        assert_eq!(ACCENT_FILL.to_hex(), "#f44336");
        assert_eq!(DEFAULT_FILL.to_string(), "#00ff00");
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = ACCENT_FILL.into();
        let back: SerializableColor = color.into();
        assert_eq!(back, ACCENT_FILL);
    }
}
