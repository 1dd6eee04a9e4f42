//! Core data model for Cloudy Glass.
//!
//! This crate holds everything the preset engine needs that is independent of
//! any particular preset:
//!
//! - **Paint model**: [`Color`], [`Paint`], [`GradientStop`], [`BlendMode`]
//! - **Layers**: [`FillLayer`], [`EffectLayer`], [`StrokeSpec`]
//! - **Descriptors**: [`StyleDescriptor`] and [`CornerTreatment`], the pure-data
//!   unit applied to nodes
//! - **Host contract**: [`StyleTarget`] for mutable design nodes and
//!   [`ImageStore`] for turning raw bytes into reusable image handles
//! - **Capability probing**: [`NodeCapabilities::probe`]
//! - **Notices**: [`Notice`] and the [`Notifier`] host primitive
//! - **Signals**: [`Signal`] for publishing outbound notifications
//!
//! # Example
//!
//! ```
//! use cloudy_glass_core::{BlendMode, Color, EffectLayer, FillLayer, StyleDescriptor};
//!
//! let descriptor = StyleDescriptor {
//!     fills: vec![
//!         FillLayer::solid(Color::from_rgb8(166, 166, 166)).with_opacity(0.7),
//!         FillLayer::solid(Color::from_rgb8(51, 51, 51)).with_blend_mode(BlendMode::ColorDodge),
//!     ],
//!     effects: vec![EffectLayer::background_blur(35.0)],
//!     ..Default::default()
//! };
//!
//! assert!(descriptor.validate().is_ok());
//! ```

mod capabilities;
mod descriptor;
mod error;
mod image;
mod layer;
pub mod logging;
mod node;
mod notice;
mod paint;
pub mod signal;
mod types;

pub use capabilities::NodeCapabilities;
pub use descriptor::{CornerTreatment, StyleDescriptor};
pub use error::{DescriptorError, HostError, HostResult, NodeError, NodeResult};
pub use image::{EmbeddedImage, ImageRef, ImageSource, ImageStore};
pub use layer::{DropShadow, EffectLayer, FillKind, FillLayer, StrokeAlign, StrokeSpec};
pub use node::{NodeAttribute, NodeKind, StyleTarget};
pub use notice::{Notice, NoticeKind, Notifier};
pub use paint::{BlendMode, Gradient, GradientStop, ImagePaint, Paint, ScaleMode};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Color, GradientTransform, Vec2};
