//! Host node contract.
//!
//! This module provides the trait the preset engine uses to talk to nodes of
//! the host's document model, without knowing anything about how that model
//! is stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NodeResult;
use crate::layer::{EffectLayer, FillLayer, StrokeAlign};

/// The structural kind of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Vector,
    Text,
    Group,
    Component,
    Instance,
    BooleanOperation,
    Section,
    Slice,
}

impl NodeKind {
    /// The host-side type name.
    pub fn host_name(self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Polygon => "POLYGON",
            Self::Star => "STAR",
            Self::Line => "LINE",
            Self::Vector => "VECTOR",
            Self::Text => "TEXT",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Section => "SECTION",
            Self::Slice => "SLICE",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_name())
    }
}

/// A visual attribute a style may mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeAttribute {
    Fills,
    Effects,
    Strokes,
    StrokeWeight,
    StrokeAlign,
    CornerRadius,
    CornerSmoothing,
}

impl fmt::Display for NodeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fills => "fills",
            Self::Effects => "effects",
            Self::Strokes => "strokes",
            Self::StrokeWeight => "strokeWeight",
            Self::StrokeAlign => "strokeAlign",
            Self::CornerRadius => "cornerRadius",
            Self::CornerSmoothing => "cornerSmoothing",
        })
    }
}

/// Trait for host nodes that presets can be applied to.
///
/// Implementations report which attributes their node kind exposes and
/// overwrite them wholesale. Setters may fail; a failure only concerns the
/// node it was raised on.
///
/// # Example
///
/// ```ignore
/// impl StyleTarget for HostRectangle {
///     fn node_id(&self) -> &str {
///         &self.id
///     }
///
///     fn kind(&self) -> NodeKind {
///         NodeKind::Rectangle
///     }
///
///     fn has_attribute(&self, _attribute: NodeAttribute) -> bool {
///         true
///     }
///
///     fn set_fills(&mut self, fills: Vec<FillLayer>) -> NodeResult<()> {
///         self.fills = fills;
///         Ok(())
///     }
///
///     // ...
/// }
/// ```
pub trait StyleTarget {
    /// Stable identifier of the node, used in outcomes and diagnostics.
    fn node_id(&self) -> &str;

    /// The node's structural kind.
    fn kind(&self) -> NodeKind;

    /// Whether the node exposes the given attribute.
    fn has_attribute(&self, attribute: NodeAttribute) -> bool;

    /// Replace the fill stack.
    fn set_fills(&mut self, fills: Vec<FillLayer>) -> NodeResult<()>;

    /// Replace the effect stack.
    fn set_effects(&mut self, effects: Vec<EffectLayer>) -> NodeResult<()>;

    /// Replace the stroke paint stack.
    fn set_strokes(&mut self, strokes: Vec<FillLayer>) -> NodeResult<()>;

    /// Set the stroke weight.
    fn set_stroke_weight(&mut self, weight: f32) -> NodeResult<()>;

    /// Set the stroke alignment.
    fn set_stroke_align(&mut self, align: StrokeAlign) -> NodeResult<()>;

    /// Set a uniform corner radius.
    fn set_corner_radius(&mut self, radius: f32) -> NodeResult<()>;

    /// Set corner smoothing (0 = circular arcs, 1 = fully continuous).
    fn set_corner_smoothing(&mut self, smoothing: f32) -> NodeResult<()>;
}
