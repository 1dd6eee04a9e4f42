//! Prelude module for Cloudy Glass.
//!
//! ```ignore
//! use cloudy_glass::prelude::*;
//! ```

// ============================================================================
// Session and Protocol
// ============================================================================

pub use crate::{DispatchError, GlassConfig, GlassHost, GlassSession, HostContext};
pub use crate::{UiMessage, UiRequest};

// ============================================================================
// Preset Engine
// ============================================================================

pub use cloudy_glass_style::prelude::*;

// ============================================================================
// Host Contract
// ============================================================================

pub use crate::{ImageStore, NodeAttribute, NodeKind, Notice, Notifier, Signal, StyleTarget};
