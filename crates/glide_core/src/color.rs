//! RGBA colors
//!
//! Colors are stored as linear `f32` channels in `0.0..=1.0` and travel
//! through configuration documents as `#rgb`, `#rrggbb`, or `#rrggbbaa`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Format as `#rrggbbaa`
    pub fn to_hex_string(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let nibble = |i: usize| {
                    let v = digits[i..i + 1]
                        .chars()
                        .next()
                        .and_then(|c| c.to_digit(16))
                        .unwrap_or(0);
                    (v * 17) as f32 / 255.0
                };
                Ok(Color::rgb(nibble(0), nibble(1), nibble(2)))
            }
            6 => Ok(Color::rgb(
                byte(0) as f32 / 255.0,
                byte(2) as f32 / 255.0,
                byte(4) as f32 / 255.0,
            )),
            8 => Ok(Color::rgba(
                byte(0) as f32 / 255.0,
                byte(2) as f32 / 255.0,
                byte(4) as f32 / 255.0,
                byte(6) as f32 / 255.0,
            )),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_parse_six_digits() {
        let c: Color = "#3f3f3f".parse().unwrap();
        assert!(approx(c.r, 63.0 / 255.0));
        assert!(approx(c.g, 63.0 / 255.0));
        assert!(approx(c.b, 63.0 / 255.0));
        assert_eq!(c.a, 1.0);
        assert_eq!(c, Color::from_hex(0x3f3f3f));
    }

    #[test]
    fn test_parse_short_and_alpha() {
        let c: Color = "#fff".parse().unwrap();
        assert_eq!(c, Color::WHITE);

        let c: Color = "#00ff0080".parse().unwrap();
        assert!(approx(c.g, 1.0));
        assert!(approx(c.a, 128.0 / 255.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "3f3f3f".parse::<Color>(),
            Err(ColorParseError::MissingHash("3f3f3f".into()))
        );
        assert_eq!(
            "#3f3f".parse::<Color>(),
            Err(ColorParseError::InvalidLength("#3f3f".into()))
        );
        assert_eq!(
            "#zzzzzz".parse::<Color>(),
            Err(ColorParseError::InvalidDigit("#zzzzzz".into()))
        );
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(Color::from_hex(0xb3b3b3).to_hex_string(), "#b3b3b3ff");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }
}
