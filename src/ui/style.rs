use crate::core::constants::{MARKER_FILL_OPACITY, MARKER_STROKE_WEIGHT};
use crate::MapError;
use serde::{Deserialize, Serialize};

/// RGBA color that serializes as a CSS hex string (`#rrggbb` or `#rrggbbaa`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || MapError::Render(format!("invalid hex color: {hex:?}"));

        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, i) in rgb.iter_mut().zip(0..3) {
                    let nibble = channel(&digits[i..i + 1])?;
                    *slot = nibble * 17;
                }
                Ok(Self::rgb(rgb[0], rgb[1], rgb[2]))
            }
            6 | 8 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                let a = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    /// Lowercase CSS hex; the alpha pair is only written when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = MapError;

    fn try_from(value: String) -> crate::Result<Self> {
        Color::from_hex(&value)
    }
}

/// Style of a circle marker, in Leaflet's path option terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Radius in pixels
    pub radius: f64,
    /// Outline color
    pub color: Color,
    /// Outline width in pixels
    pub weight: f64,
    pub fill_color: Color,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = fill_color;
        self
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 10.0,
            color: Color::BLACK,
            weight: MARKER_STROKE_WEIGHT,
            fill_color: Color::rgb(0x33, 0x88, 0xff),
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#a2dc00").unwrap(), Color::rgb(0xa2, 0xdc, 0x00));
        assert_eq!(Color::from_hex("000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_hex("#ff081980").unwrap(),
            Color::new(0xff, 0x08, 0x19, 0x80)
        );
    }

    #[test]
    fn test_hex_parsing_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::rgb(0x52, 0xfd, 0x06).to_hex(), "#52fd06");
        assert_eq!(Color::new(0, 0, 0, 0x80).to_string(), "#00000080");
    }

    #[test]
    fn test_color_serializes_as_hex() {
        let json = serde_json::to_string(&Color::rgb(0xec, 0x8f, 0x00)).unwrap();
        assert_eq!(json, "\"#ec8f00\"");
        let back: Color = serde_json::from_str("\"#fc5e00\"").unwrap();
        assert_eq!(back, Color::rgb(0xfc, 0x5e, 0x00));
    }

    #[test]
    fn test_default_marker_style() {
        let style = MarkerStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.weight, 1.0);
        assert_eq!(style.fill_opacity, 0.7);
    }
}
