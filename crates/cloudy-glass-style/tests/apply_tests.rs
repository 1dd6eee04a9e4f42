//! Applying presets to selections of nodes.

mod common;

use cloudy_glass_core::{
    BlendMode, Color, FillLayer, NodeAttribute, NodeError, NodeKind, StrokeAlign, StyleTarget,
};
use cloudy_glass_style::prelude::*;

use common::{SequentialImages, TestNode};

fn resolve(id: StyleId, mode: ColorMode) -> cloudy_glass_core::StyleDescriptor {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    PresetResolver::new()
        .resolve(id, mode, &mut SequentialImages::default())
        .unwrap()
}

#[test]
fn thin_light_on_a_frame() {
    let mut frame = TestNode::frame("1:2");
    let descriptor = resolve(StyleId::Thin, ColorMode::Light);

    let status = PresetApplicator::new().apply(&descriptor, &mut frame);

    assert_eq!(status, ApplyStatus::Applied);
    assert_eq!(frame.fills.len(), 2);
    assert_eq!(frame.fills[0].opacity, 0.7);
    assert_eq!(frame.fills[1].opacity, 1.0);
    assert_eq!(frame.fills[1].blend_mode, Some(BlendMode::ColorDodge));
    assert_eq!(frame.effects.len(), 1);
    assert!(frame.effects[0].is_background_blur());
    assert_eq!(frame.effects[0].radius(), 35.0);
    assert_eq!(frame.corner_radius, 32.0);
    assert_eq!(frame.corner_smoothing, 0.6);
}

#[test]
fn unpaintable_node_is_left_unchanged() {
    let mut line = TestNode::with_attributes(
        "4:1",
        NodeKind::Line,
        &[NodeAttribute::Strokes, NodeAttribute::StrokeWeight],
    );
    line.strokes = vec![FillLayer::solid(Color::BLACK)];
    let before = line.clone();

    for (id, mode) in cloudy_glass_style::catalog::Catalog::entries() {
        let status = PresetApplicator::new().apply(&resolve(id, mode), &mut line);
        assert_eq!(status, ApplyStatus::Skipped(SkipReason::NotPaintable), "{id} {mode}");
    }

    assert_eq!(line.strokes, before.strokes);
    assert_eq!(line.stroke_weight, before.stroke_weight);
}

#[test]
fn clearing_strokes_empties_existing_strokes() {
    let mut node = TestNode::frame("2:7");
    node.strokes = vec![
        FillLayer::solid(Color::BLACK),
        FillLayer::solid(Color::WHITE),
    ];

    let descriptor = resolve(StyleId::MacOs, ColorMode::Dark);
    assert!(descriptor.clear_strokes);
    assert!(descriptor.stroke.is_none());

    PresetApplicator::new().apply(&descriptor, &mut node);
    assert!(node.strokes.is_empty());
}

#[test]
fn acrylic_replaces_strokes_with_its_own() {
    let mut node = TestNode::frame("2:8");
    node.strokes = vec![FillLayer::solid(Color::BLACK), FillLayer::solid(Color::WHITE)];

    PresetApplicator::new().apply(&resolve(StyleId::AcrylicBase, ColorMode::Light), &mut node);

    assert_eq!(node.strokes.len(), 1);
    assert_eq!(node.strokes[0].opacity, 0.4);
    assert_eq!(node.stroke_weight, 1.0);
    assert_eq!(node.stroke_align, StrokeAlign::Inside);
    assert_eq!(node.fills.len(), 3);
    assert_eq!(node.effects.len(), 3);
}

#[test]
fn aero_skips_nodes_without_strokes() {
    let mut node = TestNode::with_attributes(
        "3:3",
        NodeKind::Frame,
        &[NodeAttribute::Fills, NodeAttribute::Effects],
    );

    let status = PresetApplicator::new().apply(&resolve(StyleId::Aero, ColorMode::Light), &mut node);

    assert_eq!(status, ApplyStatus::Skipped(SkipReason::StrokeRequired));
    assert!(node.fills.is_empty());
}

#[test]
fn one_failing_node_does_not_abort_the_batch() {
    let mut nodes: Vec<TestNode> = (1..=5).map(|i| TestNode::frame(&format!("n{i}"))).collect();
    nodes[2] = TestNode::frame("n3").failing_on(NodeAttribute::Effects);

    let descriptor = resolve(StyleId::Regular, ColorMode::Dark);
    let mut selection: Selection<'_> = nodes
        .iter_mut()
        .map(|node| node as &mut dyn StyleTarget)
        .collect();

    let batch = PresetApplicator::new().apply_all(&descriptor, &mut selection);
    drop(selection);

    assert_eq!(batch.len(), 5);
    let summary = batch.summary();
    assert_eq!(summary.applied, 4);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 5);

    let failures: Vec<_> = batch.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "n3");
    assert!(matches!(
        failures[0].1,
        NodeError::Rejected { attribute: NodeAttribute::Effects, .. }
    ));

    // Writes before the failure stay on the failed node.
    assert_eq!(nodes[2].fills.len(), 2);
    assert!(nodes[2].effects.is_empty());
    assert_eq!(nodes[4].effects.len(), 1);
}

#[test]
fn mixed_selection_skips_unpaintable_members() {
    let mut frame = TestNode::frame("f");
    let mut slice = TestNode::with_attributes("s", NodeKind::Slice, &[]);
    let mut rect = TestNode::frame("r");

    let mut selection = Selection::new(vec![
        &mut frame as &mut dyn StyleTarget,
        &mut slice,
        &mut rect,
    ]);
    let batch = PresetApplicator::new()
        .apply_all(&resolve(StyleId::Thick, ColorMode::Light), &mut selection);

    let statuses: Vec<_> = batch.outcomes().iter().map(|o| o.status.clone()).collect();
    assert_eq!(
        statuses,
        vec![
            ApplyStatus::Applied,
            ApplyStatus::Skipped(SkipReason::NotPaintable),
            ApplyStatus::Applied,
        ]
    );
}
