//! Apply a glass preset to a small in-memory document.
//!
//! Run with: cargo run -p cloudy-glass --example apply_preset -- Thin dark

use cloudy_glass::memory::{MemoryDocument, MemoryNode};
use cloudy_glass::prelude::*;
use cloudy_glass::{Color, FillLayer};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let style = args.next().unwrap_or_else(|| "AcrylicBase".to_string());
    let dark = args.next().is_some_and(|mode| mode == "dark");

    let mut doc = MemoryDocument::new();
    let card = doc.add(MemoryNode::new("1:2", NodeKind::Frame));
    let badge = doc.add(
        MemoryNode::new("1:3", NodeKind::Ellipse)
            .with_strokes(vec![FillLayer::solid(Color::BLACK)]),
    );
    let slice = doc.add(MemoryNode::new("1:4", NodeKind::Slice));
    doc.select([card, badge, slice]);

    let session = GlassSession::default();
    session.outbox().connect(|message: &UiMessage| match message.to_json() {
        Ok(json) => println!("ui <- {json}"),
        Err(err) => eprintln!("cannot encode message: {err}"),
    });

    session.start(&mut doc);

    let request = serde_json::json!({
        "type": "apply-effect",
        "selectedStyle": style,
        "isDarkMode": dark,
    })
    .to_string();
    println!("ui -> {request}");

    if let Err(err) = session.handle_json(&request, &mut doc) {
        eprintln!("request failed: {err}");
    }

    for node in doc.nodes() {
        println!(
            "{} {:?}: {} fill(s), {} effect(s), {} stroke(s), radius {}",
            node.node_id(),
            node.kind(),
            node.fills().len(),
            node.effects().len(),
            node.strokes().len(),
            node.corner_radius(),
        );
    }
    for notice in doc.take_notices() {
        println!("notice [{:?}] {}", notice.kind, notice.text);
    }
}
