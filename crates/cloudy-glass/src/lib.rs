//! Cloudy Glass - glass material presets for design-tool selections.
//!
//! This is the umbrella crate. It re-exports the data model and the preset
//! engine, and adds the pieces that face the outside world:
//!
//! - [`GlassSession`]: dispatches host events and UI requests
//! - [`UiRequest`] / [`UiMessage`]: the JSON protocol spoken with the UI panel
//! - [`GlassConfig`]: TOML configuration for notices and selection gating
//! - [`memory`]: an in-memory document host
//!
//! # Example
//!
//! ```
//! use cloudy_glass::memory::{MemoryDocument, MemoryNode};
//! use cloudy_glass::{ColorMode, GlassSession, NodeKind, StyleId};
//!
//! let mut doc = MemoryDocument::new();
//! let frame = doc.add(MemoryNode::new("1:2", NodeKind::Frame));
//! doc.select([frame]);
//!
//! let session = GlassSession::default();
//! let batch = session.apply(StyleId::Thin, ColorMode::Light, &mut doc).unwrap();
//!
//! assert_eq!(batch.summary().applied, 1);
//! assert_eq!(doc.node(frame).unwrap().corner_radius(), 32.0);
//! ```

pub use cloudy_glass_core::*;

/// The preset engine: catalog, resolver, applicator and gatekeeper.
pub mod style {
    pub use cloudy_glass_style::*;
}

pub use cloudy_glass_style::{ColorMode, Error as StyleError, StyleId};

mod config;
mod dispatch;
pub mod memory;
mod message;
pub mod prelude;

pub use config::{ConfigError, GlassConfig, NoticeConfig, SelectionConfig};
pub use dispatch::{DispatchError, GlassHost, GlassSession, HostContext};
pub use message::{UiMessage, UiRequest};
