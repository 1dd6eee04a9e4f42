//! Error types for the core data model and host contracts.

use crate::node::NodeAttribute;

/// Result type alias for node mutations.
pub type NodeResult<T> = std::result::Result<T, NodeError>;

/// Result type alias for host services.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors raised by the host while mutating a single node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NodeError {
    /// The node does not expose the attribute at all.
    #[error("node does not support {attribute}")]
    Unsupported { attribute: NodeAttribute },

    /// The host refused the new value.
    #[error("{attribute} rejected: {message}")]
    Rejected {
        attribute: NodeAttribute,
        message: String,
    },

    /// The node is locked or otherwise read-only.
    #[error("node is locked")]
    Locked,

    /// An image paint reached the node without a host handle.
    #[error("image '{name}' was not registered with the host")]
    UnresolvedImage { name: String },
}

impl NodeError {
    /// Create a rejection error.
    pub fn rejected(attribute: NodeAttribute, message: impl Into<String>) -> Self {
        Self::Rejected {
            attribute,
            message: message.into(),
        }
    }
}

/// Errors raised by host services other than node mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// Image bytes could not be decoded or registered.
    #[error("invalid image '{name}': {message}")]
    InvalidImage { name: String, message: String },
}

impl HostError {
    /// Create an invalid-image error.
    pub fn invalid_image(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidImage {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Violations of the [`StyleDescriptor`](crate::StyleDescriptor) invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    /// A gradient has fewer than two stops.
    #[error("gradient in {layer} has {count} stop(s), at least 2 required")]
    TooFewStops { layer: String, count: usize },

    /// Gradient stops are not strictly increasing.
    #[error("gradient stops in {layer} are not strictly ordered at index {index}")]
    UnorderedStops { layer: String, index: usize },

    /// A gradient stop lies outside [0, 1].
    #[error("gradient stop {position} in {layer} is outside [0, 1]")]
    StopOutOfRange { layer: String, position: f32 },

    /// A layer opacity lies outside [0, 1].
    #[error("opacity {opacity} in {layer} is outside [0, 1]")]
    OpacityOutOfRange { layer: String, opacity: f32 },

    /// A radius or weight is negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    /// Corner smoothing lies outside [0, 1].
    #[error("corner smoothing {0} is outside [0, 1]")]
    SmoothingOutOfRange(f32),

    /// A stroke was declared with no paint layers.
    #[error("stroke has no paint layers")]
    EmptyStroke,
}
