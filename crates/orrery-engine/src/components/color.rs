use crate::error::{OrreryError, OrreryResult};

/// Linear RGB color, each channel 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self::rgb8(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        )
    }

    /// Create a color from RGB u8 values (0-255).
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional). Exactly six hex digits.
    pub fn parse(value: &str) -> OrreryResult<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OrreryError::InvalidColor { value: value.to_string() });
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_hex)
            .map_err(|_| OrreryError::InvalidColor { value: value.to_string() })
    }

    /// Multiply every channel by `k`, clamped to 0.0 - 1.0.
    pub fn scale(self, k: f32) -> Self {
        Self {
            r: (self.r * k).clamp(0.0, 1.0),
            g: (self.g * k).clamp(0.0, 1.0),
            b: (self.b * k).clamp(0.0, 1.0),
        }
    }

    /// Channel-wise product (light color applied to a surface color).
    pub fn modulate(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Channel-wise sum, clamped.
    pub fn saturating_add(self, other: Self) -> Self {
        Self::new(
            (self.r + other.r).min(1.0),
            (self.g + other.g).min(1.0),
            (self.b + other.b).min(1.0),
        )
    }

    /// CSS `rgb()` string for the 2D canvas API.
    pub fn to_css(self) -> String {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({}, {}, {})", c(self.r), c(self.g), c(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}
