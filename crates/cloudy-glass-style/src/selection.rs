//! Selection snapshots and eligibility checks.

use std::fmt;

use cloudy_glass_core::logging::targets;
use cloudy_glass_core::{NodeKind, StyleTarget};

/// An ordered snapshot of the nodes a request targets.
///
/// The snapshot is taken once per request; the nodes are borrowed mutably for
/// its whole duration, so the host cannot change them mid-batch.
#[derive(Default)]
pub struct Selection<'a> {
    nodes: Vec<&'a mut dyn StyleTarget>,
}

impl<'a> Selection<'a> {
    /// Create a snapshot from borrowed nodes.
    pub fn new(nodes: Vec<&'a mut dyn StyleTarget>) -> Self {
        Self { nodes }
    }

    /// Create an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a node.
    pub fn push(&mut self, node: &'a mut dyn StyleTarget) {
        self.nodes.push(node);
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first selected node.
    pub fn first(&self) -> Option<&(dyn StyleTarget + 'a)> {
        self.nodes.first().map(|node| &**node)
    }

    /// Iterate over the nodes in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn StyleTarget + 'a)> + '_ {
        self.nodes.iter().map(|node| &**node)
    }

    /// Iterate mutably over the nodes in selection order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn StyleTarget + 'a)> + '_ {
        self.nodes.iter_mut().map(|node| &mut **node)
    }
}

impl<'a> FromIterator<&'a mut dyn StyleTarget> for Selection<'a> {
    fn from_iter<I: IntoIterator<Item = &'a mut dyn StyleTarget>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes.iter().map(|node| (node.node_id(), node.kind())))
            .finish()
    }
}

/// Result of validating a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionStatus {
    /// At least one node is selected.
    pub has_selection: bool,
    /// The first selected node is of an eligible kind.
    pub eligible: bool,
}

impl SelectionStatus {
    /// A non-empty selection whose first node is ineligible.
    pub fn needs_advisory(&self) -> bool {
        self.has_selection && !self.eligible
    }
}

impl fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match (self.has_selection, self.eligible) {
            (false, _) => "nothing is selected",
            (true, false) => "first selected node is not an eligible kind",
            (true, true) => "selection is eligible",
        })
    }
}

/// Decides whether a selection may be styled.
///
/// Only the first selected node is inspected: its kind gates the whole batch.
/// Nodes further down the selection that cannot be painted are skipped by the
/// applicator instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionGatekeeper {
    eligible_kinds: Vec<NodeKind>,
}

impl Default for SelectionGatekeeper {
    fn default() -> Self {
        Self::new([NodeKind::Rectangle, NodeKind::Frame])
    }
}

impl SelectionGatekeeper {
    /// Create a gatekeeper accepting the given node kinds.
    pub fn new(eligible_kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        Self {
            eligible_kinds: eligible_kinds.into_iter().collect(),
        }
    }

    /// Node kinds accepted as the first selected node.
    pub fn eligible_kinds(&self) -> &[NodeKind] {
        &self.eligible_kinds
    }

    /// Check a single kind.
    pub fn is_eligible_kind(&self, kind: NodeKind) -> bool {
        self.eligible_kinds.contains(&kind)
    }

    /// Validate a selection snapshot.
    pub fn validate(&self, selection: &Selection<'_>) -> SelectionStatus {
        let status = match selection.first() {
            None => SelectionStatus::default(),
            Some(first) => SelectionStatus {
                has_selection: true,
                eligible: self.is_eligible_kind(first.kind()),
            },
        };

        tracing::trace!(
            target: targets::SELECTION,
            nodes = selection.len(),
            has_selection = status.has_selection,
            eligible = status.eligible,
            "validated selection"
        );
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudy_glass_core::{EffectLayer, FillLayer, NodeAttribute, NodeResult, StrokeAlign};

    struct Stub(NodeKind);

    impl StyleTarget for Stub {
        fn node_id(&self) -> &str {
            "stub"
        }
        fn kind(&self) -> NodeKind {
            self.0
        }
        fn has_attribute(&self, _: NodeAttribute) -> bool {
            true
        }
        fn set_fills(&mut self, _: Vec<FillLayer>) -> NodeResult<()> {
            Ok(())
        }
        fn set_effects(&mut self, _: Vec<EffectLayer>) -> NodeResult<()> {
            Ok(())
        }
        fn set_strokes(&mut self, _: Vec<FillLayer>) -> NodeResult<()> {
            Ok(())
        }
        fn set_stroke_weight(&mut self, _: f32) -> NodeResult<()> {
            Ok(())
        }
        fn set_stroke_align(&mut self, _: StrokeAlign) -> NodeResult<()> {
            Ok(())
        }
        fn set_corner_radius(&mut self, _: f32) -> NodeResult<()> {
            Ok(())
        }
        fn set_corner_smoothing(&mut self, _: f32) -> NodeResult<()> {
            Ok(())
        }
    }

    #[test]
    fn empty_selection() {
        let status = SelectionGatekeeper::default().validate(&Selection::empty());
        assert_eq!(status, SelectionStatus { has_selection: false, eligible: false });
        assert!(!status.needs_advisory());
    }

    #[test]
    fn first_node_gates_the_batch() {
        let gatekeeper = SelectionGatekeeper::default();

        let mut text = Stub(NodeKind::Text);
        let mut frame = Stub(NodeKind::Frame);
        let selection: Selection<'_> = [&mut text as &mut dyn StyleTarget, &mut frame]
            .into_iter()
            .collect();
        let status = gatekeeper.validate(&selection);
        assert!(status.has_selection);
        assert!(!status.eligible);
        assert!(status.needs_advisory());

        let mut frame = Stub(NodeKind::Frame);
        let mut text = Stub(NodeKind::Text);
        let selection = Selection::new(vec![&mut frame as &mut dyn StyleTarget, &mut text]);
        assert!(gatekeeper.validate(&selection).eligible);
    }

    #[test]
    fn custom_kinds() {
        let gatekeeper = SelectionGatekeeper::new([NodeKind::Ellipse]);
        assert!(gatekeeper.is_eligible_kind(NodeKind::Ellipse));
        assert!(!gatekeeper.is_eligible_kind(NodeKind::Frame));
    }

    #[test]
    fn status_display() {
        let status = SelectionStatus { has_selection: true, eligible: false };
        assert_eq!(status.to_string(), "first selected node is not an eligible kind");
    }
}
