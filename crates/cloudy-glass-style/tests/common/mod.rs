//! Shared test node for the integration tests.

#![allow(dead_code)]

use cloudy_glass_core::{
    EffectLayer, FillLayer, HostResult, ImageRef, ImageStore, NodeAttribute, NodeError, NodeKind,
    NodeResult, StrokeAlign, StyleTarget,
};

/// A node that stores whatever is written to it.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub id: String,
    pub kind: NodeKind,
    pub attributes: Vec<NodeAttribute>,
    pub fills: Vec<FillLayer>,
    pub effects: Vec<EffectLayer>,
    pub strokes: Vec<FillLayer>,
    pub stroke_weight: f32,
    pub stroke_align: StrokeAlign,
    pub corner_radius: f32,
    pub corner_smoothing: f32,
    /// Fail every write to this attribute.
    pub fail_on: Option<NodeAttribute>,
}

impl TestNode {
    /// A node exposing every style attribute.
    pub fn frame(id: &str) -> Self {
        Self::with_attributes(id, NodeKind::Frame, &ALL)
    }

    pub fn with_attributes(id: &str, kind: NodeKind, attributes: &[NodeAttribute]) -> Self {
        Self {
            id: id.to_string(),
            kind,
            attributes: attributes.to_vec(),
            fills: Vec::new(),
            effects: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            stroke_align: StrokeAlign::Center,
            corner_radius: 0.0,
            corner_smoothing: 0.0,
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, attribute: NodeAttribute) -> Self {
        self.fail_on = Some(attribute);
        self
    }

    fn check(&self, attribute: NodeAttribute) -> NodeResult<()> {
        if self.fail_on == Some(attribute) {
            return Err(NodeError::rejected(attribute, "injected failure"));
        }
        if !self.attributes.contains(&attribute) {
            return Err(NodeError::Unsupported { attribute });
        }
        Ok(())
    }
}

pub const ALL: [NodeAttribute; 7] = [
    NodeAttribute::Fills,
    NodeAttribute::Effects,
    NodeAttribute::Strokes,
    NodeAttribute::StrokeWeight,
    NodeAttribute::StrokeAlign,
    NodeAttribute::CornerRadius,
    NodeAttribute::CornerSmoothing,
];

impl StyleTarget for TestNode {
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
        self.check(NodeAttribute::Fills)?;
        self.fills = fills;
        Ok(())
    }

    fn set_effects(&mut self, effects: Vec<EffectLayer>) -> NodeResult<()> {
        self.check(NodeAttribute::Effects)?;
        self.effects = effects;
        Ok(())
    }

    fn set_strokes(&mut self, strokes: Vec<FillLayer>) -> NodeResult<()> {
        self.check(NodeAttribute::Strokes)?;
        self.strokes = strokes;
        Ok(())
    }

    fn set_stroke_weight(&mut self, weight: f32) -> NodeResult<()> {
        self.check(NodeAttribute::StrokeWeight)?;
        self.stroke_weight = weight;
        Ok(())
    }

    fn set_stroke_align(&mut self, align: StrokeAlign) -> NodeResult<()> {
        self.check(NodeAttribute::StrokeAlign)?;
        self.stroke_align = align;
        Ok(())
    }

    fn set_corner_radius(&mut self, radius: f32) -> NodeResult<()> {
        self.check(NodeAttribute::CornerRadius)?;
        self.corner_radius = radius;
        Ok(())
    }

    fn set_corner_smoothing(&mut self, smoothing: f32) -> NodeResult<()> {
        self.check(NodeAttribute::CornerSmoothing)?;
        self.corner_smoothing = smoothing;
        Ok(())
    }
}

/// Image store handing out sequential handles.
#[derive(Debug, Default)]
pub struct SequentialImages {
    pub created: usize,
}

impl ImageStore for SequentialImages {
    fn create_image(&mut self, _bytes: &[u8]) -> HostResult<ImageRef> {
        self.created += 1;
        Ok(ImageRef::new(format!("image-{}", self.created)))
    }
}
