//! Error types for preset resolution.

use cloudy_glass_core::{DescriptorError, HostError};

use crate::id::{ColorMode, StyleId};

/// Result type alias for preset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a preset.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog has no entry for this style in this mode.
    #[error("unknown style {id} in {mode} mode")]
    UnknownStyle { id: StyleId, mode: ColorMode },

    /// The style name does not match any catalog id.
    #[error("unknown style name '{0}'")]
    UnknownStyleName(String),

    /// An embedded image could not be registered with the host.
    #[error("failed to register preset image: {0}")]
    Image(#[from] HostError),

    /// A catalog entry violates the descriptor invariants.
    #[error("catalog entry {id} ({mode}) is malformed: {source}")]
    InvalidDescriptor {
        id: StyleId,
        mode: ColorMode,
        #[source]
        source: DescriptorError,
    },
}

impl Error {
    /// Create an unknown-style error.
    pub fn unknown_style(id: StyleId, mode: ColorMode) -> Self {
        Self::UnknownStyle { id, mode }
    }

    /// Whether this error means the caller asked for something the catalog
    /// does not contain.
    pub fn is_unknown_style(&self) -> bool {
        matches!(self, Self::UnknownStyle { .. } | Self::UnknownStyleName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_display() {
        let err = Error::unknown_style(StyleId::AcrylicThin, ColorMode::Dark);
        assert_eq!(err.to_string(), "unknown style AcrylicThin in dark mode");
        assert!(err.is_unknown_style());
    }

    #[test]
    fn image_error_is_not_unknown_style() {
        let err: Error = HostError::invalid_image("noise", "bad png").into();
        assert!(!err.is_unknown_style());
        assert!(err.to_string().contains("noise"));
    }
}
