//! An in-memory document host.
//!
//! [`MemoryDocument`] stands in for a design tool's document model: it owns
//! nodes, tracks a selection, registers images and collects notices. It is
//! what the tests and the demo program drive a [`GlassSession`] against.
//!
//! [`GlassSession`]: crate::GlassSession

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use cloudy_glass_core::{
    EffectLayer, FillLayer, HostError, HostResult, ImageRef, ImageStore, NodeAttribute, NodeError,
    NodeKind, NodeResult, Notice, StrokeAlign, StyleTarget,
};
use cloudy_glass_style::selection::Selection;

use crate::dispatch::{GlassHost, HostContext};

const SHAPE: &[NodeAttribute] = &[
    NodeAttribute::Fills,
    NodeAttribute::Effects,
    NodeAttribute::Strokes,
    NodeAttribute::StrokeWeight,
    NodeAttribute::StrokeAlign,
    NodeAttribute::CornerRadius,
    NodeAttribute::CornerSmoothing,
];

const PAINTED: &[NodeAttribute] = &[
    NodeAttribute::Fills,
    NodeAttribute::Effects,
    NodeAttribute::Strokes,
    NodeAttribute::StrokeWeight,
    NodeAttribute::StrokeAlign,
];

const STROKED: &[NodeAttribute] = &[
    NodeAttribute::Effects,
    NodeAttribute::Strokes,
    NodeAttribute::StrokeWeight,
    NodeAttribute::StrokeAlign,
];

/// Style attributes a node of `kind` exposes.
pub fn attributes_for(kind: NodeKind) -> &'static [NodeAttribute] {
    match kind {
        NodeKind::Frame
        | NodeKind::Rectangle
        | NodeKind::Component
        | NodeKind::Instance
        | NodeKind::Polygon
        | NodeKind::Star
        | NodeKind::Vector => SHAPE,
        NodeKind::Ellipse | NodeKind::Text | NodeKind::BooleanOperation => PAINTED,
        NodeKind::Line => STROKED,
        NodeKind::Group => &[NodeAttribute::Effects],
        NodeKind::Section => &[NodeAttribute::Fills],
        NodeKind::Slice => &[],
    }
}

/// A node whose visual state lives in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    id: String,
    kind: NodeKind,
    attributes: &'static [NodeAttribute],
    fills: Vec<FillLayer>,
    effects: Vec<EffectLayer>,
    strokes: Vec<FillLayer>,
    stroke_weight: f32,
    stroke_align: StrokeAlign,
    corner_radius: f32,
    corner_smoothing: f32,
    locked: bool,
    fail_on: Option<NodeAttribute>,
}

impl MemoryNode {
    /// Create a node with the attributes its kind exposes.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            attributes: attributes_for(kind),
            fills: Vec::new(),
            effects: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 1.0,
            stroke_align: StrokeAlign::default(),
            corner_radius: 0.0,
            corner_smoothing: 0.0,
            locked: false,
            fail_on: None,
        }
    }

    /// Start with the given strokes.
    pub fn with_strokes(mut self, strokes: Vec<FillLayer>) -> Self {
        self.strokes = strokes;
        self
    }

    /// Start with the given fills.
    pub fn with_fills(mut self, fills: Vec<FillLayer>) -> Self {
        self.fills = fills;
        self
    }

    /// Reject every write.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Reject writes to one attribute.
    pub fn failing_on(mut self, attribute: NodeAttribute) -> Self {
        self.fail_on = Some(attribute);
        self
    }

    pub fn fills(&self) -> &[FillLayer] {
        &self.fills
    }

    pub fn effects(&self) -> &[EffectLayer] {
        &self.effects
    }

    pub fn strokes(&self) -> &[FillLayer] {
        &self.strokes
    }

    pub fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    pub fn stroke_align(&self) -> StrokeAlign {
        self.stroke_align
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn corner_smoothing(&self) -> f32 {
        self.corner_smoothing
    }

    fn writable(&self, attribute: NodeAttribute) -> NodeResult<()> {
        if self.locked {
            return Err(NodeError::Locked);
        }
        if !self.has_attribute(attribute) {
            return Err(NodeError::Unsupported { attribute });
        }
        if self.fail_on == Some(attribute) {
            return Err(NodeError::rejected(attribute, "write refused by host"));
        }
        Ok(())
    }
}

impl StyleTarget for MemoryNode {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn has_attribute(&self, attribute: NodeAttribute) -> bool {
        self.attributes.contains(&attribute)
    }

    fn set_fills(&mut self, fills: Vec<FillLayer>) -> NodeResult<()> {
        self.writable(NodeAttribute::Fills)?;
        self.fills = fills;
        Ok(())
    }

    fn set_effects(&mut self, effects: Vec<EffectLayer>) -> NodeResult<()> {
        self.writable(NodeAttribute::Effects)?;
        self.effects = effects;
        Ok(())
    }

    fn set_strokes(&mut self, strokes: Vec<FillLayer>) -> NodeResult<()> {
        self.writable(NodeAttribute::Strokes)?;
        self.strokes = strokes;
        Ok(())
    }

    fn set_stroke_weight(&mut self, weight: f32) -> NodeResult<()> {
        self.writable(NodeAttribute::StrokeWeight)?;
        self.stroke_weight = weight;
        Ok(())
    }

    fn set_stroke_align(&mut self, align: StrokeAlign) -> NodeResult<()> {
        self.writable(NodeAttribute::StrokeAlign)?;
        self.stroke_align = align;
        Ok(())
    }

    fn set_corner_radius(&mut self, radius: f32) -> NodeResult<()> {
        self.writable(NodeAttribute::CornerRadius)?;
        self.corner_radius = radius;
        Ok(())
    }

    fn set_corner_smoothing(&mut self, smoothing: f32) -> NodeResult<()> {
        self.writable(NodeAttribute::CornerSmoothing)?;
        self.corner_smoothing = smoothing;
        Ok(())
    }
}

/// Image store that decodes uploads and keys them by content hash.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    images: HashMap<ImageRef, (u32, u32)>,
    uploads: usize,
}

impl MemoryImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `create_image` calls.
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// Number of distinct images held.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check if no image has been stored.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Pixel dimensions of a stored image.
    pub fn dimensions(&self, handle: &ImageRef) -> Option<(u32, u32)> {
        self.images.get(handle).copied()
    }
}

impl ImageStore for MemoryImageStore {
    fn create_image(&mut self, bytes: &[u8]) -> HostResult<ImageRef> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|err| HostError::invalid_image("upload", err.to_string()))?;

        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        let handle = ImageRef::new(format!("{:016x}", hasher.finish()));

        self.images
            .insert(handle.clone(), (decoded.width(), decoded.height()));
        self.uploads += 1;
        Ok(handle)
    }
}

/// A document with nodes, a selection, an image store and a notice log.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
    selection: Vec<usize>,
    images: MemoryImageStore,
    notices: Vec<Notice>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index.
    pub fn add(&mut self, node: MemoryNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Replace the selection. Out-of-range and repeated indices are ignored.
    pub fn select(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.selection.clear();
        for index in indices {
            if index < self.nodes.len() && !self.selection.contains(&index) {
                self.selection.push(index);
            }
        }
    }

    /// Select every node, in insertion order.
    pub fn select_all(&mut self) {
        self.selection = (0..self.nodes.len()).collect();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected node indices, in selection order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn node(&self, index: usize) -> Option<&MemoryNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[MemoryNode] {
        &self.nodes
    }

    pub fn images(&self) -> &MemoryImageStore {
        &self.images
    }

    /// Notices raised so far, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the notice log.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl GlassHost for MemoryDocument {
    fn context(&mut self) -> HostContext<'_> {
        let mut slots: Vec<Option<&mut MemoryNode>> = self.nodes.iter_mut().map(Some).collect();
        let selection: Selection<'_> = self
            .selection
            .iter()
            .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
            .map(|node| node as &mut dyn StyleTarget)
            .collect();

        HostContext {
            selection,
            images: &mut self.images,
            notifier: &mut self.notices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudy_glass_core::{Color, NodeCapabilities};

    #[test]
    fn kind_decides_capabilities() {
        let frame = NodeCapabilities::probe(&MemoryNode::new("f", NodeKind::Frame));
        assert_eq!(frame, NodeCapabilities::all());

        let text = NodeCapabilities::probe(&MemoryNode::new("t", NodeKind::Text));
        assert!(text.is_paintable());
        assert!(!text.supports_corner_radius);

        let slice = NodeCapabilities::probe(&MemoryNode::new("s", NodeKind::Slice));
        assert!(!slice.is_paintable());
    }

    #[test]
    fn locked_node_rejects_writes() {
        let mut node = MemoryNode::new("f", NodeKind::Frame).locked();
        assert_eq!(node.set_fills(Vec::new()), Err(NodeError::Locked));
    }

    #[test]
    fn unsupported_write_is_an_error() {
        let mut node = MemoryNode::new("t", NodeKind::Text);
        assert_eq!(
            node.set_corner_radius(4.0),
            Err(NodeError::Unsupported {
                attribute: NodeAttribute::CornerRadius
            })
        );
    }

    #[test]
    fn image_store_rejects_garbage() {
        let mut store = MemoryImageStore::new();
        assert!(store.create_image(b"not an image").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn context_follows_selection_order() {
        let mut doc = MemoryDocument::new();
        let a = doc.add(MemoryNode::new("a", NodeKind::Frame));
        let b = doc.add(MemoryNode::new("b", NodeKind::Text));
        doc.select([b, a, b, 99]);
        assert_eq!(doc.selection(), &[b, a]);

        let context = doc.context();
        let ids: Vec<_> = context.selection.iter().map(|n| n.node_id().to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn notices_are_collected() {
        let mut doc = MemoryDocument::new();
        doc.context().notifier.notify(Notice::info("hi"));
        assert_eq!(doc.take_notices(), vec![Notice::info("hi")]);
        assert!(doc.notices().is_empty());

        let node = MemoryNode::new("r", NodeKind::Rectangle)
            .with_fills(vec![FillLayer::solid(Color::WHITE)]);
        assert_eq!(node.fills().len(), 1);
    }
}
