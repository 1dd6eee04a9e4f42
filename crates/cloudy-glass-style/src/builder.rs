//! Fluent builder for catalog descriptors.

use cloudy_glass_core::{
    BlendMode, Color, CornerTreatment, DropShadow, EffectLayer, FillLayer, StrokeAlign, StrokeSpec,
    StyleDescriptor,
};

/// Builder for creating style descriptors with a fluent API.
///
/// # Example
///
/// ```
/// use cloudy_glass_core::{BlendMode, Color};
/// use cloudy_glass_style::DescriptorBuilder;
///
/// let descriptor = DescriptorBuilder::new()
///     .solid(Color::from_rgb8(166, 166, 166), 0.7)
///     .blended(Color::from_rgb8(51, 51, 51), 1.0, BlendMode::ColorDodge)
///     .background_blur(35.0)
///     .corners(32.0, 0.6)
///     .build();
///
/// assert_eq!(descriptor.fills.len(), 2);
/// assert_eq!(descriptor.corners.and_then(|c| c.radius), Some(32.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    descriptor: StyleDescriptor,
}

impl DescriptorBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final descriptor.
    pub fn build(self) -> StyleDescriptor {
        self.descriptor
    }

    // === Fills ===

    /// Push an arbitrary fill layer.
    pub fn fill(mut self, layer: FillLayer) -> Self {
        self.descriptor.fills.push(layer);
        self
    }

    /// Push a solid fill with the given opacity and the host's default blending.
    pub fn solid(self, color: Color, opacity: f32) -> Self {
        self.fill(FillLayer::solid(color).with_opacity(opacity))
    }

    /// Push a solid fill with an explicit blend mode.
    pub fn blended(self, color: Color, opacity: f32, blend_mode: BlendMode) -> Self {
        self.fill(
            FillLayer::solid(color)
                .with_opacity(opacity)
                .with_blend_mode(blend_mode),
        )
    }

    // === Effects ===

    /// Push an arbitrary effect layer.
    pub fn effect(mut self, effect: impl Into<EffectLayer>) -> Self {
        self.descriptor.effects.push(effect.into());
        self
    }

    /// Push a visible background blur.
    pub fn background_blur(self, radius: f32) -> Self {
        self.effect(EffectLayer::background_blur(radius))
    }

    /// Push a drop shadow.
    pub fn drop_shadow(self, shadow: DropShadow) -> Self {
        self.effect(shadow)
    }

    // === Stroke ===

    /// Set a single-paint stroke.
    pub fn stroke(mut self, paint: FillLayer, weight: f32, align: StrokeAlign) -> Self {
        self.descriptor.stroke = Some(StrokeSpec::new(paint, weight, align));
        self
    }

    /// Empty the node's strokes before anything else is applied.
    pub fn clear_strokes(mut self) -> Self {
        self.descriptor.clear_strokes = true;
        self
    }

    /// Mark nodes without stroke support as ineligible.
    pub fn requires_stroke(mut self) -> Self {
        self.descriptor.requires_stroke = true;
        self
    }

    // === Corners ===

    /// Set corner radius and smoothing.
    pub fn corners(mut self, radius: f32, smoothing: f32) -> Self {
        self.descriptor.corners = Some(CornerTreatment::new(radius, smoothing));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_default() {
        assert_eq!(DescriptorBuilder::new().build(), StyleDescriptor::default());
    }

    #[test]
    fn layers_keep_insertion_order() {
        let descriptor = DescriptorBuilder::new()
            .background_blur(60.0)
            .drop_shadow(DropShadow::new(Color::BLACK.with_alpha(0.15)).with_blur(21.0))
            .build();

        assert!(descriptor.effects[0].is_background_blur());
        assert_eq!(descriptor.effects[1].radius(), 21.0);
    }

    #[test]
    fn flags_and_stroke() {
        let descriptor = DescriptorBuilder::new()
            .clear_strokes()
            .stroke(FillLayer::solid(Color::WHITE), 1.0, StrokeAlign::Inside)
            .build();

        assert!(descriptor.clear_strokes);
        assert!(!descriptor.requires_stroke);
        let stroke = descriptor.stroke.as_ref().map(|s| (s.weight, s.align));
        assert_eq!(stroke, Some((1.0, StrokeAlign::Inside)));
    }
}
