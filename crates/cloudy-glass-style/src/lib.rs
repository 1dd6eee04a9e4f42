//! Glass preset engine for Cloudy Glass.
//!
//! This crate turns a `(style, color mode)` pair into a concrete
//! [`StyleDescriptor`](cloudy_glass_core::StyleDescriptor) and applies it to
//! the nodes of a selection:
//!
//! - **Catalog**: Literal preset data for iOS materials, visionOS, tvOS,
//!   macOS and the Microsoft acrylic/mica/aero families
//! - **Resolver**: Looks up a preset and registers its embedded images with
//!   the host, once per application
//! - **Applicator**: Writes a descriptor onto each node, skipping attributes
//!   the node lacks and containing failures to the node that raised them
//! - **Gatekeeper**: Decides whether the current selection may be styled
//!
//! # Example
//!
//! ```ignore
//! use cloudy_glass_style::prelude::*;
//!
//! let resolver = PresetResolver::new();
//! let descriptor = resolver.resolve(StyleId::Thin, ColorMode::Light, &mut images)?;
//!
//! let outcome = PresetApplicator::new().apply_all(&descriptor, &mut selection);
//! println!("{}", outcome.summary());
//! ```

pub mod apply;
mod builder;
pub mod catalog;
mod id;
pub mod resolve;
pub mod selection;

mod error;

pub use builder::DescriptorBuilder;
pub use error::{Error, Result};
pub use id::{ColorMode, StyleId};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::apply::{ApplyStatus, ApplySummary, BatchOutcome, NodeOutcome, PresetApplicator, SkipReason};
    pub use crate::builder::DescriptorBuilder;
    pub use crate::catalog::{Catalog, DarkSupport};
    pub use crate::id::{ColorMode, StyleId};
    pub use crate::resolve::PresetResolver;
    pub use crate::selection::{Selection, SelectionGatekeeper, SelectionStatus};
}
