//! Style descriptors: the pure-data unit applied to nodes.

use serde::Serialize;

use crate::error::DescriptorError;
use crate::image::ImageSource;
use crate::layer::{EffectLayer, FillLayer, StrokeSpec};
use crate::paint::Paint;

/// Corner radius and smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CornerTreatment {
    /// Uniform corner radius in absolute units.
    pub radius: Option<f32>,
    /// Corner smoothing factor (0.0 to 1.0).
    pub smoothing: Option<f32>,
}

impl CornerTreatment {
    /// Create a treatment with both radius and smoothing set.
    pub const fn new(radius: f32, smoothing: f32) -> Self {
        Self {
            radius: Some(radius),
            smoothing: Some(smoothing),
        }
    }
}

/// A complete, immutable description of a visual style.
///
/// Descriptors never reference a live node. They are produced by the preset
/// resolver, applied to a batch of nodes, and dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleDescriptor {
    /// Fill stack, bottom layer first.
    pub fills: Vec<FillLayer>,
    /// Effect stack in declared order.
    pub effects: Vec<EffectLayer>,
    /// Stroke to set, if any.
    pub stroke: Option<StrokeSpec>,
    /// Corner radius and smoothing to set, if any.
    pub corners: Option<CornerTreatment>,
    /// Empty the node's stroke list before anything else is applied.
    pub clear_strokes: bool,
    /// Nodes without stroke support are ineligible for this style.
    pub requires_stroke: bool,
}

impl StyleDescriptor {
    /// Check the descriptor invariants.
    ///
    /// Gradients need at least two stops, strictly increasing within [0, 1];
    /// opacities lie in [0, 1]; radii, spreads excluded, are non-negative;
    /// smoothing lies in [0, 1]; a declared stroke has at least one paint.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        for (i, fill) in self.fills.iter().enumerate() {
            validate_layer(fill, || format!("fill[{i}]"))?;
        }

        for effect in &self.effects {
            non_negative("effect radius", effect.radius())?;
        }

        if let Some(stroke) = &self.stroke {
            if stroke.paints.is_empty() {
                return Err(DescriptorError::EmptyStroke);
            }
            non_negative("stroke weight", stroke.weight)?;
            for (i, paint) in stroke.paints.iter().enumerate() {
                validate_layer(paint, || format!("stroke[{i}]"))?;
            }
        }

        if let Some(corners) = &self.corners {
            if let Some(radius) = corners.radius {
                non_negative("corner radius", radius)?;
            }
            if let Some(smoothing) = corners.smoothing {
                if !(0.0..=1.0).contains(&smoothing) {
                    return Err(DescriptorError::SmoothingOutOfRange(smoothing));
                }
            }
        }

        Ok(())
    }

    /// Iterate over every image source referenced by fills and strokes.
    pub fn image_sources(&self) -> impl Iterator<Item = &ImageSource> {
        let stroke_paints = self.stroke.iter().flat_map(|s| s.paints.iter());
        self.fills
            .iter()
            .chain(stroke_paints)
            .filter_map(|layer| layer.paint.as_image().map(|image| &image.source))
    }

    /// Mutable access to every image source referenced by fills and strokes.
    pub fn image_sources_mut(&mut self) -> impl Iterator<Item = &mut ImageSource> {
        let stroke_paints = self.stroke.iter_mut().flat_map(|s| s.paints.iter_mut());
        self.fills
            .iter_mut()
            .chain(stroke_paints)
            .filter_map(|layer| match &mut layer.paint {
                Paint::Image(image) => Some(&mut image.source),
                _ => None,
            })
    }

    /// Whether any image paint still needs registering with the host.
    pub fn has_unresolved_images(&self) -> bool {
        self.image_sources()
            .any(|source| matches!(source, ImageSource::Embedded(_)))
    }
}

fn validate_layer(layer: &FillLayer, name: impl Fn() -> String) -> Result<(), DescriptorError> {
    if !(0.0..=1.0).contains(&layer.opacity) {
        return Err(DescriptorError::OpacityOutOfRange {
            layer: name(),
            opacity: layer.opacity,
        });
    }

    let Some(gradient) = layer.paint.as_gradient() else {
        return Ok(());
    };

    if gradient.stops.len() < 2 {
        return Err(DescriptorError::TooFewStops {
            layer: name(),
            count: gradient.stops.len(),
        });
    }

    for (index, stop) in gradient.stops.iter().enumerate() {
        if !(0.0..=1.0).contains(&stop.position) {
            return Err(DescriptorError::StopOutOfRange {
                layer: name(),
                position: stop.position,
            });
        }
        if index > 0 && stop.position <= gradient.stops[index - 1].position {
            return Err(DescriptorError::UnorderedStops {
                layer: name(),
                index,
            });
        }
    }

    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<(), DescriptorError> {
    if value < 0.0 {
        Err(DescriptorError::Negative { field, value })
    } else {
        Ok(())
    }
}
