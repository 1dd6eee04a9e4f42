//! Apple platform materials: the iOS tiers, visionOS, tvOS and macOS.

use cloudy_glass_core::{
    BlendMode, Color, FillLayer, GradientStop, GradientTransform, StrokeAlign, StyleDescriptor,
};

use crate::builder::DescriptorBuilder;

const CORNER_RADIUS: f32 = 32.0;
const CORNER_SMOOTHING: f32 = 0.6;

/// Shared base color of every dark iOS tier.
const DARK_BASE: Color = Color::from_rgb8(0x25, 0x25, 0x25);

/// Light-mode tiers blur at 35 unless stated otherwise.
const LIGHT_BLUR: f32 = 35.0;
const DARK_BLUR: f32 = 50.0;

/// Literal data for one iOS material tier in one mode.
struct Material {
    base: Color,
    opacity: f32,
    tint: Color,
    blend_mode: BlendMode,
    blur: f32,
}

impl Material {
    const fn light(base: u8, opacity: f32, tint: u8) -> Self {
        Self {
            base: gray(base),
            opacity,
            tint: gray(tint),
            blend_mode: BlendMode::ColorDodge,
            blur: LIGHT_BLUR,
        }
    }

    const fn dark(opacity: f32, tint: u8) -> Self {
        Self {
            base: DARK_BASE,
            opacity,
            tint: gray(tint),
            blend_mode: BlendMode::Overlay,
            blur: DARK_BLUR,
        }
    }

    const fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    /// Translucent base, fully opaque tint on top, one background blur.
    fn build(self) -> StyleDescriptor {
        DescriptorBuilder::new()
            .solid(self.base, self.opacity)
            .blended(self.tint, 1.0, self.blend_mode)
            .background_blur(self.blur)
            .corners(CORNER_RADIUS, CORNER_SMOOTHING)
            .build()
    }
}

const fn gray(level: u8) -> Color {
    Color::from_rgb8(level, level, level)
}

pub(super) fn ultrathin_light() -> StyleDescriptor {
    Material::light(0xBF, 0.44, 0x0D).with_blur(20.0).build()
}

pub(super) fn ultrathin_dark() -> StyleDescriptor {
    Material::dark(0.55, 0x9C).build()
}

pub(super) fn thin_light() -> StyleDescriptor {
    Material::light(0xA6, 0.7, 0x33).build()
}

pub(super) fn thin_dark() -> StyleDescriptor {
    Material::dark(0.7, 0x9C).build()
}

pub(super) fn regular_light() -> StyleDescriptor {
    Material::light(0xB3, 0.82, 0x38).build()
}

pub(super) fn regular_dark() -> StyleDescriptor {
    Material::dark(0.82, 0x8C).build()
}

pub(super) fn thick_light() -> StyleDescriptor {
    Material::light(0x99, 0.97, 0x5C).build()
}

pub(super) fn thick_dark() -> StyleDescriptor {
    Material::dark(0.9, 0x7C).build()
}

/// Chrome light is a single hard-light layer; its dark variant follows the
/// regular two-layer tier structure.
pub(super) fn chrome_light() -> StyleDescriptor {
    DescriptorBuilder::new()
        .blended(Color::WHITE, 0.75, BlendMode::HardLight)
        .background_blur(LIGHT_BLUR)
        .corners(CORNER_RADIUS, CORNER_SMOOTHING)
        .build()
}

pub(super) fn chrome_dark() -> StyleDescriptor {
    Material {
        base: gray(0x1C),
        ..Material::dark(0.9, 0x7C)
    }
    .build()
}

pub(super) fn vision_os() -> StyleDescriptor {
    let edge = FillLayer::linear_gradient(
        GradientTransform::new([0.0, 1.0, 0.0], [-1.0, 0.6, 0.6]),
        vec![
            GradientStop::new(0.0, Color::WHITE.with_alpha(0.4)),
            GradientStop::new(0.41, Color::WHITE.with_alpha(0.0)),
            GradientStop::new(0.57, Color::WHITE.with_alpha(0.0)),
            GradientStop::new(1.0, Color::WHITE.with_alpha(0.1)),
        ],
    );

    DescriptorBuilder::new()
        .blended(gray(0x80), 0.3, BlendMode::Luminosity)
        .background_blur(70.0)
        .stroke(edge, 0.7, StrokeAlign::Inside)
        .corners(CORNER_RADIUS, CORNER_SMOOTHING)
        .build()
}

/// Single translucent layer over a wide blur, strokes removed.
fn flat_panel(color: Color, opacity: f32, blur: f32) -> StyleDescriptor {
    DescriptorBuilder::new()
        .clear_strokes()
        .solid(color, opacity)
        .background_blur(blur)
        .corners(CORNER_RADIUS, CORNER_SMOOTHING)
        .build()
}

pub(super) fn tv_os_light() -> StyleDescriptor {
    flat_panel(Color::from_rgb8(0xFE, 0xFD, 0xFF), 0.5, 135.0)
}

pub(super) fn tv_os_dark() -> StyleDescriptor {
    flat_panel(gray(0x1E), 0.5, 135.0)
}

pub(super) fn mac_os_light() -> StyleDescriptor {
    flat_panel(gray(0xF6), 0.6, 82.0)
}

pub(super) fn mac_os_dark() -> StyleDescriptor {
    flat_panel(gray(0x28), 0.6, 82.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudy_glass_core::EffectLayer;

    #[test]
    fn thin_light_literals() {
        let descriptor = thin_light();

        assert_eq!(descriptor.fills[0].opacity, 0.7);
        assert_eq!(descriptor.fills[0].paint.as_solid(), Some(gray(0xA6)));
        assert_eq!(descriptor.fills[1].blend_mode, Some(BlendMode::ColorDodge));
        assert_eq!(descriptor.effects, vec![EffectLayer::background_blur(35.0)]);
    }

    #[test]
    fn ultrathin_light_uses_narrow_blur() {
        assert_eq!(ultrathin_light().effects[0].radius(), 20.0);
    }

    #[test]
    fn dark_tiers_share_base_color() {
        for descriptor in [ultrathin_dark(), thin_dark(), regular_dark(), thick_dark()] {
            assert_eq!(descriptor.fills[0].paint.as_solid(), Some(DARK_BASE));
            assert_eq!(descriptor.fills[1].blend_mode, Some(BlendMode::Overlay));
            assert_eq!(descriptor.effects[0].radius(), DARK_BLUR);
        }
        assert_eq!(chrome_dark().fills[0].paint.as_solid(), Some(gray(0x1C)));
    }

    #[test]
    fn vision_os_has_gradient_edge() {
        let descriptor = vision_os();
        let stroke = descriptor.stroke.as_ref().unwrap();

        assert_eq!(stroke.weight, 0.7);
        assert_eq!(stroke.align, StrokeAlign::Inside);
        assert_eq!(stroke.paints[0].paint.as_gradient().unwrap().stops.len(), 4);
        assert!(!descriptor.clear_strokes);
    }

    #[test]
    fn flat_panels_clear_strokes() {
        for descriptor in [tv_os_light(), tv_os_dark(), mac_os_light(), mac_os_dark()] {
            assert!(descriptor.clear_strokes);
            assert!(descriptor.stroke.is_none());
            assert_eq!(descriptor.fills.len(), 1);
        }
    }
}
