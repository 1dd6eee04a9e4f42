//! Image handles and embedded image payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::error::{HostError, HostResult};

/// An opaque, reusable reference to an image registered with the host.
///
/// The wrapped string is whatever identifier the host hands back (typically
/// a content hash), so two uploads of the same bytes may share a reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a host-provided image identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A raster payload compiled into the binary as base64 text.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EmbeddedImage {
    name: &'static str,
    #[serde(skip)]
    encoded: &'static str,
}

impl EmbeddedImage {
    /// Declare an embedded image from its base64 encoding.
    pub const fn new(name: &'static str, encoded: &'static str) -> Self {
        Self { name, encoded }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Decode the payload into raw encoded image bytes (e.g. a PNG file).
    pub fn decode(&self) -> HostResult<Vec<u8>> {
        STANDARD
            .decode(self.encoded)
            .map_err(|err| HostError::invalid_image(self.name, err.to_string()))
    }
}

/// Where an image paint gets its pixels.
///
/// Catalog data only ever contains [`ImageSource::Embedded`]; the resolver
/// replaces it with a [`ImageSource::Handle`] before a descriptor reaches a
/// node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImageSource {
    /// A payload that still has to be registered with the host.
    Embedded(&'static EmbeddedImage),
    /// An image already registered with the host.
    Handle(ImageRef),
}

impl ImageSource {
    /// Get the host handle, if the image has been registered.
    pub fn handle(&self) -> Option<&ImageRef> {
        match self {
            Self::Handle(handle) => Some(handle),
            Self::Embedded(_) => None,
        }
    }
}

/// Host service that turns raw encoded bytes into a reusable image handle.
pub trait ImageStore {
    /// Register an image and return a handle usable in image paints.
    fn create_image(&mut self, bytes: &[u8]) -> HostResult<ImageRef>;
}
