//! Fill, effect and stroke layers.
//!
//! Layers are ordered: later fill layers composite over earlier ones, and
//! effect order is preserved exactly as declared.

use serde::Serialize;

use crate::image::ImageSource;
use crate::paint::{BlendMode, GradientStop, ImagePaint, Paint, ScaleMode};
use crate::types::{Color, GradientTransform, Vec2};

/// The kind of a fill layer, derived from its paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FillKind {
    Solid,
    LinearGradient,
    RadialGradient,
    Image,
}

/// One element of a node's fill (or stroke paint) stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillLayer {
    /// What the layer draws.
    pub paint: Paint,
    /// Layer opacity (0.0 to 1.0).
    pub opacity: f32,
    /// Compositing mode; `None` leaves the host default.
    pub blend_mode: Option<BlendMode>,
}

impl FillLayer {
    /// Create a fully opaque layer from any paint.
    pub fn new(paint: impl Into<Paint>) -> Self {
        Self {
            paint: paint.into(),
            opacity: 1.0,
            blend_mode: None,
        }
    }

    /// Create a solid color layer.
    pub fn solid(color: Color) -> Self {
        Self::new(Paint::solid(color))
    }

    /// Create a linear gradient layer.
    pub fn linear_gradient(transform: GradientTransform, stops: Vec<GradientStop>) -> Self {
        Self::new(Paint::linear_gradient(transform, stops))
    }

    /// Create a radial gradient layer.
    pub fn radial_gradient(transform: GradientTransform, stops: Vec<GradientStop>) -> Self {
        Self::new(Paint::radial_gradient(transform, stops))
    }

    /// Create an image layer.
    pub fn image(source: ImageSource, scale_mode: ScaleMode) -> Self {
        Self::new(Paint::Image(ImagePaint { source, scale_mode }))
    }

    /// Set the layer opacity.
    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the blend mode.
    #[inline]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = Some(blend_mode);
        self
    }

    /// The kind of this layer.
    pub fn kind(&self) -> FillKind {
        match self.paint {
            Paint::Solid(_) => FillKind::Solid,
            Paint::LinearGradient(_) => FillKind::LinearGradient,
            Paint::RadialGradient(_) => FillKind::RadialGradient,
            Paint::Image(_) => FillKind::Image,
        }
    }
}

/// A drop shadow definition.
///
/// # Example
///
/// ```
/// use cloudy_glass_core::{Color, DropShadow};
///
/// let shadow = DropShadow::new(Color::BLACK.with_alpha(0.19))
///     .with_offset(0.0, 32.0)
///     .with_blur(64.0);
///
/// assert_eq!(shadow.offset.y, 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DropShadow {
    /// Shadow color, with alpha for transparency.
    pub color: Color,
    /// Offset of the shadow from the node.
    pub offset: Vec2,
    /// Blur radius.
    pub radius: f32,
    /// Spread. Expands (positive) or contracts (negative) the shadow shape.
    pub spread: f32,
    /// Compositing mode.
    pub blend_mode: BlendMode,
    /// Whether the shadow is visible.
    pub visible: bool,
}

impl DropShadow {
    /// Create a new visible shadow with no offset, blur or spread.
    #[inline]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            offset: Vec2::ZERO,
            radius: 0.0,
            spread: 0.0,
            blend_mode: BlendMode::Normal,
            visible: true,
        }
    }

    /// Set the shadow offset.
    #[inline]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }

    /// Set the blur radius.
    #[inline]
    pub fn with_blur(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    /// Set the spread.
    #[inline]
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    /// Set the blend mode.
    #[inline]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }
}

/// One element of a node's effect stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EffectLayer {
    /// Blur whatever lies behind the node.
    BackgroundBlur { radius: f32, visible: bool },
    /// Cast a shadow beneath the node.
    DropShadow(DropShadow),
}

impl EffectLayer {
    /// Create a visible background blur.
    pub fn background_blur(radius: f32) -> Self {
        Self::BackgroundBlur {
            radius,
            visible: true,
        }
    }

    /// The blur radius of the effect.
    pub fn radius(&self) -> f32 {
        match self {
            Self::BackgroundBlur { radius, .. } => *radius,
            Self::DropShadow(shadow) => shadow.radius,
        }
    }

    /// Whether the effect is visible.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::BackgroundBlur { visible, .. } => *visible,
            Self::DropShadow(shadow) => shadow.visible,
        }
    }

    /// Check if this is a background blur.
    pub fn is_background_blur(&self) -> bool {
        matches!(self, Self::BackgroundBlur { .. })
    }
}

impl From<DropShadow> for EffectLayer {
    fn from(shadow: DropShadow) -> Self {
        Self::DropShadow(shadow)
    }
}

/// Where a stroke sits relative to the node outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    Inside,
    #[default]
    Center,
    Outside,
}

/// Stroke settings applied together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeSpec {
    /// Ordered stroke paint layers.
    pub paints: Vec<FillLayer>,
    /// Stroke weight.
    pub weight: f32,
    /// Stroke alignment.
    pub align: StrokeAlign,
}

impl StrokeSpec {
    /// Create a stroke from a single paint layer.
    pub fn new(paint: FillLayer, weight: f32, align: StrokeAlign) -> Self {
        Self {
            paints: vec![paint],
            weight,
            align,
        }
    }
}
