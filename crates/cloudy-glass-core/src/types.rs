//! Basic geometric and color types.

use serde::Serialize;

/// A 2D vector, used for shadow offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Components are in the 0.0-1.0 range. Solid paints ignore `a` and carry
/// their transparency in the layer opacity instead; gradient stops use it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components (0-255 range).
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if len != 6 && len != 8 {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .map(|v| v as f32 / 255.0)
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if len == 8 { channel(6..8)? } else { 1.0 };

        Some(Self::new(r, g, b, a))
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Format as an uppercase hex string, omitting alpha when opaque.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));

        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Convert to an array [r, g, b, a].
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
}

/// A 2x3 affine matrix positioning a gradient inside a node's bounds.
///
/// Rows are `[a, c, tx]` and `[b, d, ty]` in the host's normalized
/// node-space convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientTransform(pub [[f32; 3]; 2]);

impl GradientTransform {
    /// The identity transform (left-to-right gradient).
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// Create a transform from its two rows.
    #[inline]
    pub const fn new(row0: [f32; 3], row1: [f32; 3]) -> Self {
        Self([row0, row1])
    }

    /// Get the rows of the matrix.
    #[inline]
    pub fn rows(&self) -> &[[f32; 3]; 2] {
        &self.0
    }
}

impl Default for GradientTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_is_normalized() {
        let c = Color::from_rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.2);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_round_trip_keeps_alpha() {
        let c = Color::from_hex("#FFFFFF66").unwrap();
        assert_eq!(c.to_hex(), "#FFFFFF66");
        assert_eq!(Color::from_hex("#A6A6A6").unwrap().to_hex(), "#A6A6A6");
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("#ÿÿÿ").is_none());
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::WHITE.with_alpha(0.4);
        assert_eq!(c, Color::new(1.0, 1.0, 1.0, 0.4));
    }
}
