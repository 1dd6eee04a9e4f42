//! Node capability probing.

use serde::Serialize;

use crate::node::{NodeAttribute, StyleTarget};

/// Which style attributes are settable on a node.
///
/// Capabilities are a structural property of the node kind, so they are
/// probed fresh for every application rather than cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NodeCapabilities {
    pub supports_fill: bool,
    pub supports_effects: bool,
    pub supports_stroke: bool,
    pub supports_corner_radius: bool,
    pub supports_corner_smoothing: bool,
}

impl NodeCapabilities {
    /// Inspect a node. Never fails: a missing attribute is a normal result.
    pub fn probe<T: StyleTarget + ?Sized>(node: &T) -> Self {
        Self {
            supports_fill: node.has_attribute(NodeAttribute::Fills),
            supports_effects: node.has_attribute(NodeAttribute::Effects),
            supports_stroke: node.has_attribute(NodeAttribute::Strokes),
            supports_corner_radius: node.has_attribute(NodeAttribute::CornerRadius),
            supports_corner_smoothing: node.has_attribute(NodeAttribute::CornerSmoothing),
        }
    }

    /// Every capability set.
    pub const fn all() -> Self {
        Self {
            supports_fill: true,
            supports_effects: true,
            supports_stroke: true,
            supports_corner_radius: true,
            supports_corner_smoothing: true,
        }
    }

    /// Whether a preset can paint the node at all.
    pub fn is_paintable(&self) -> bool {
        self.supports_fill || self.supports_effects
    }
}
