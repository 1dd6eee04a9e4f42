//! Writes descriptors onto nodes.

use cloudy_glass_core::logging::{span_names, targets};
use cloudy_glass_core::{
    ImageSource, NodeCapabilities, NodeError, NodeResult, StyleDescriptor, StyleTarget,
};

use super::outcome::{ApplyStatus, BatchOutcome, NodeOutcome, SkipReason};
use crate::selection::Selection;

/// Applies a resolved descriptor to nodes, one at a time.
///
/// Each node is handled independently. A host error on one node ends work on
/// that node only and is recorded in its outcome; there is no rollback of
/// attributes already written to it, and other nodes are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetApplicator;

impl PresetApplicator {
    /// Create a new applicator.
    pub fn new() -> Self {
        Self
    }

    /// Apply `descriptor` to a single node.
    ///
    /// Attributes the node does not expose are left alone. A node that
    /// supports neither fills nor effects is skipped without being touched.
    pub fn apply(&self, descriptor: &StyleDescriptor, node: &mut dyn StyleTarget) -> ApplyStatus {
        let caps = NodeCapabilities::probe(&*node);

        if !caps.is_paintable() {
            return ApplyStatus::Skipped(SkipReason::NotPaintable);
        }
        if descriptor.requires_stroke && !caps.supports_stroke {
            return ApplyStatus::Skipped(SkipReason::StrokeRequired);
        }

        match write(descriptor, node, caps) {
            Ok(()) => ApplyStatus::Applied,
            Err(err) => ApplyStatus::Failed(err),
        }
    }

    /// Apply `descriptor` to every node of `selection`, in order.
    pub fn apply_all(
        &self,
        descriptor: &StyleDescriptor,
        selection: &mut Selection<'_>,
    ) -> BatchOutcome {
        let mut batch = BatchOutcome::default();

        for node in selection.iter_mut() {
            let node_id = node.node_id().to_string();
            let span = tracing::debug_span!(
                target: targets::APPLY,
                span_names::APPLY_NODE,
                node = %node_id,
                kind = %node.kind()
            );
            let _enter = span.enter();

            let status = self.apply(descriptor, node);
            match &status {
                ApplyStatus::Applied => {
                    tracing::trace!(target: targets::APPLY, "applied");
                }
                ApplyStatus::Skipped(reason) => {
                    tracing::debug!(target: targets::APPLY, %reason, "skipped node");
                }
                ApplyStatus::Failed(err) => {
                    tracing::warn!(target: targets::APPLY, error = %err, "failed to style node");
                }
            }

            batch.push(NodeOutcome { node_id, status });
        }

        batch
    }
}

/// Write every supported attribute, stopping at the first host error.
fn write(
    descriptor: &StyleDescriptor,
    node: &mut dyn StyleTarget,
    caps: NodeCapabilities,
) -> NodeResult<()> {
    if let Some(ImageSource::Embedded(image)) = descriptor
        .image_sources()
        .find(|source| source.handle().is_none())
    {
        return Err(NodeError::UnresolvedImage {
            name: image.name().to_string(),
        });
    }

    if descriptor.clear_strokes && caps.supports_stroke {
        node.set_strokes(Vec::new())?;
    }

    if caps.supports_fill {
        node.set_fills(descriptor.fills.clone())?;
    }
    if caps.supports_effects {
        node.set_effects(descriptor.effects.clone())?;
    }

    if let Some(stroke) = &descriptor.stroke
        && caps.supports_stroke
    {
        node.set_stroke_weight(stroke.weight)?;
        node.set_stroke_align(stroke.align)?;
        node.set_strokes(stroke.paints.clone())?;
    }

    if let Some(corners) = &descriptor.corners {
        if let Some(radius) = corners.radius.filter(|_| caps.supports_corner_radius) {
            node.set_corner_radius(radius)?;
        }
        if let Some(smoothing) = corners.smoothing.filter(|_| caps.supports_corner_smoothing) {
            node.set_corner_smoothing(smoothing)?;
        }
    }

    Ok(())
}
