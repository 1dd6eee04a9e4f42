//! Paint styles for fills and strokes.
//!
//! A [`Paint`] describes *what* a layer draws (a color, a gradient or an
//! image). How strongly and with which compositing it draws is carried by the
//! surrounding [`FillLayer`](crate::FillLayer).

use serde::Serialize;

use crate::image::ImageSource;
use crate::types::{Color, GradientTransform};

/// A paint source for a fill or stroke layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
    /// Linear gradient fill.
    LinearGradient(Gradient),
    /// Radial gradient fill.
    RadialGradient(Gradient),
    /// Raster image fill.
    Image(ImagePaint),
}

impl Paint {
    /// Create a solid color paint.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a linear gradient paint.
    #[inline]
    pub fn linear_gradient(transform: GradientTransform, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient(Gradient { transform, stops })
    }

    /// Create a radial gradient paint.
    #[inline]
    pub fn radial_gradient(transform: GradientTransform, stops: Vec<GradientStop>) -> Self {
        Self::RadialGradient(Gradient { transform, stops })
    }

    /// Check if this is a solid color paint.
    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// Get the solid color, if this is a solid paint.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the gradient definition, if this is a gradient paint.
    pub fn as_gradient(&self) -> Option<&Gradient> {
        match self {
            Self::LinearGradient(g) | Self::RadialGradient(g) => Some(g),
            _ => None,
        }
    }

    /// Get the image paint, if this is an image paint.
    pub fn as_image(&self) -> Option<&ImagePaint> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// A gradient definition shared by linear and radial paints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    /// Placement of the gradient within the node.
    pub transform: GradientTransform,
    /// Color stops, strictly ordered by position.
    pub stops: Vec<GradientStop>,
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0).
    pub position: f32,
    /// Color at this stop, including alpha.
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[inline]
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// How an image paint covers the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ScaleMode {
    /// Scale to cover the whole node, cropping overflow.
    #[default]
    Fill,
    /// Scale to fit inside the node.
    Fit,
    /// Crop without scaling.
    Crop,
    /// Repeat the image at its natural size.
    Tile,
}

/// An image paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePaint {
    /// Where the image comes from.
    pub source: ImageSource,
    /// How the image covers the node.
    pub scale_mode: ScaleMode,
}

/// Blend mode for compositing a layer over the layers beneath it.
///
/// Mirrors the separable and non-separable modes design hosts expose on
/// paints and effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    /// Normal (source-over) blending.
    #[default]
    Normal,
    /// Darken (min).
    Darken,
    /// Multiply colors.
    Multiply,
    /// Color burn.
    ColorBurn,
    /// Lighten (max).
    Lighten,
    /// Screen colors.
    Screen,
    /// Color dodge.
    ColorDodge,
    /// Overlay.
    Overlay,
    /// Soft light.
    SoftLight,
    /// Hard light.
    HardLight,
    /// Difference.
    Difference,
    /// Exclusion.
    Exclusion,
    /// Hue of the source, saturation and luminosity of the backdrop.
    Hue,
    /// Saturation of the source.
    Saturation,
    /// Hue and saturation of the source, luminosity of the backdrop.
    Color,
    /// Luminosity of the source.
    Luminosity,
}

impl BlendMode {
    /// The host-side identifier for this blend mode.
    pub fn host_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Darken => "DARKEN",
            Self::Multiply => "MULTIPLY",
            Self::ColorBurn => "COLOR_BURN",
            Self::Lighten => "LIGHTEN",
            Self::Screen => "SCREEN",
            Self::ColorDodge => "COLOR_DODGE",
            Self::Overlay => "OVERLAY",
            Self::SoftLight => "SOFT_LIGHT",
            Self::HardLight => "HARD_LIGHT",
            Self::Difference => "DIFFERENCE",
            Self::Exclusion => "EXCLUSION",
            Self::Hue => "HUE",
            Self::Saturation => "SATURATION",
            Self::Color => "COLOR",
            Self::Luminosity => "LUMINOSITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_paint() {
        let p = Paint::solid(Color::WHITE);
        assert!(p.is_solid());
        assert_eq!(p.as_solid(), Some(Color::WHITE));
        assert!(p.as_gradient().is_none());
    }

    #[test]
    fn test_gradient_paint() {
        let stops = vec![
            GradientStop::new(0.0, Color::WHITE.with_alpha(0.4)),
            GradientStop::new(1.0, Color::WHITE.with_alpha(0.1)),
        ];
        let paint = Paint::linear_gradient(GradientTransform::IDENTITY, stops);

        assert!(!paint.is_solid());
        assert_eq!(paint.as_gradient().map(|g| g.stops.len()), Some(2));
    }

    #[test]
    fn test_blend_mode_host_names() {
        assert_eq!(BlendMode::ColorDodge.host_name(), "COLOR_DODGE");
        assert_eq!(BlendMode::Luminosity.host_name(), "LUMINOSITY");
        assert_eq!(BlendMode::default().host_name(), "NORMAL");
    }
}
