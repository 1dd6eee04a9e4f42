//! Microsoft materials: acrylic, mica and aero. None of them has a dark entry.

use cloudy_glass_core::{
    BlendMode, Color, DropShadow, FillLayer, GradientStop, GradientTransform, ImageSource,
    ScaleMode, StrokeAlign, StyleDescriptor,
};

use super::noise::NOISE_TILE;
use crate::builder::DescriptorBuilder;

const NOISE_OPACITY: f32 = 0.02;

fn shadow(alpha: f32, offset_y: f32, blur: f32) -> DropShadow {
    DropShadow::new(Color::BLACK.with_alpha(alpha))
        .with_offset(0.0, offset_y)
        .with_blur(blur)
}

/// Luminosity tint, a transparent color layer and tiled noise, edged by a
/// thin gray stroke and lifted by two shadows.
fn acrylic(tint: Color, tint_opacity: f32) -> StyleDescriptor {
    let noise = FillLayer::image(ImageSource::Embedded(&NOISE_TILE), ScaleMode::Tile)
        .with_opacity(NOISE_OPACITY);

    DescriptorBuilder::new()
        .clear_strokes()
        .stroke(
            FillLayer::solid(Color::from_rgb8(0x75, 0x75, 0x75)).with_opacity(0.4),
            1.0,
            StrokeAlign::Inside,
        )
        .blended(tint, tint_opacity, BlendMode::Luminosity)
        .blended(tint, 0.0, BlendMode::Color)
        .fill(noise)
        .background_blur(60.0)
        .drop_shadow(shadow(0.15, 2.0, 21.0))
        .drop_shadow(shadow(0.19, 32.0, 64.0))
        .corners(7.0, 0.6)
        .build()
}

pub(super) fn acrylic_thin() -> StyleDescriptor {
    acrylic(Color::from_rgb8(0xD3, 0xD3, 0xD3), 0.44)
}

pub(super) fn acrylic_base() -> StyleDescriptor {
    acrylic(Color::from_rgb8(0xF3, 0xF3, 0xF3), 0.9)
}

pub(super) fn mica() -> StyleDescriptor {
    let tint = Color::from_rgb8(0xF3, 0xF3, 0xF3);

    DescriptorBuilder::new()
        .clear_strokes()
        .blended(tint, 1.0, BlendMode::Luminosity)
        .blended(tint, 1.0, BlendMode::Color)
        .background_blur(240.0)
        .drop_shadow(shadow(0.28, 32.0, 64.0))
        .drop_shadow(shadow(0.22, 2.0, 21.0))
        .corners(8.0, 0.5)
        .build()
}

/// Dark radial wash with a bright gradient rim. The shadow is declared
/// before the blur.
pub(super) fn aero() -> StyleDescriptor {
    let wash = FillLayer::radial_gradient(
        GradientTransform::new([0.5, 1.0, -0.5], [-1.0, 1.0, 0.5]),
        vec![
            GradientStop::new(0.0, Color::BLACK.with_alpha(0.13)),
            GradientStop::new(1.0, Color::BLACK.with_alpha(0.19)),
        ],
    );
    let rim = FillLayer::linear_gradient(
        GradientTransform::new([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        vec![
            GradientStop::new(0.0, Color::WHITE.with_alpha(0.67)),
            GradientStop::new(0.96, Color::WHITE.with_alpha(0.22)),
            GradientStop::new(1.0, Color::WHITE.with_alpha(0.71)),
        ],
    );

    DescriptorBuilder::new()
        .requires_stroke()
        .fill(wash)
        .stroke(rim, 1.5, StrokeAlign::Inside)
        .drop_shadow(shadow(0.4, 0.0, 13.0).with_spread(6.0))
        .background_blur(12.0)
        .corners(8.0, 0.5)
        .build()
}
