//! Per-node outcomes and batch summaries.

use std::fmt;

use cloudy_glass_core::NodeError;
use serde::Serialize;

/// Why a node was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The node supports neither fills nor effects.
    NotPaintable,
    /// The style needs a stroke and the node has none.
    StrokeRequired,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotPaintable => "node supports neither fills nor effects",
            Self::StrokeRequired => "style requires stroke support",
        })
    }
}

/// Result of applying a descriptor to one node.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyStatus {
    /// Every supported attribute was written.
    Applied,
    /// The node is ineligible; nothing was written.
    Skipped(SkipReason),
    /// The host raised an error part way through; earlier writes remain.
    Failed(NodeError),
}

impl ApplyStatus {
    /// Check if the node was styled.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Check if the node was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// The error, if the node failed.
    pub fn error(&self) -> Option<&NodeError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcome for one node of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutcome {
    /// Host identifier of the node.
    pub node_id: String,
    /// What happened to it.
    pub status: ApplyStatus,
}

/// Aggregate counts for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ApplySummary {
    #[serde(rename = "appliedCount")]
    pub applied: usize,
    #[serde(rename = "skippedCount")]
    pub skipped: usize,
    #[serde(rename = "failedCount")]
    pub failed: usize,
}

impl ApplySummary {
    /// Number of nodes accounted for.
    pub fn total(&self) -> usize {
        self.applied + self.skipped + self.failed
    }

    fn record(&mut self, status: &ApplyStatus) {
        match status {
            ApplyStatus::Applied => self.applied += 1,
            ApplyStatus::Skipped(_) => self.skipped += 1,
            ApplyStatus::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for ApplySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "applied {}, skipped {}, failed {}",
            self.applied, self.skipped, self.failed
        )
    }
}

/// Outcomes of one batch, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    outcomes: Vec<NodeOutcome>,
}

impl BatchOutcome {
    pub(crate) fn push(&mut self, outcome: NodeOutcome) {
        self.outcomes.push(outcome);
    }

    /// Outcomes in selection order.
    pub fn outcomes(&self) -> &[NodeOutcome] {
        &self.outcomes
    }

    /// Number of nodes attempted.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Nodes that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &NodeError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.status.error().map(|err| (o.node_id.as_str(), err)))
    }

    /// Aggregate counts.
    pub fn summary(&self) -> ApplySummary {
        let mut summary = ApplySummary::default();
        for outcome in &self.outcomes {
            summary.record(&outcome.status);
        }
        summary
    }
}

impl IntoIterator for BatchOutcome {
    type Item = NodeOutcome;
    type IntoIter = std::vec::IntoIter<NodeOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: &str, status: ApplyStatus) -> NodeOutcome {
        NodeOutcome {
            node_id: id.to_string(),
            status,
        }
    }

    #[test]
    fn summary_counts_each_status() {
        let mut batch = BatchOutcome::default();
        batch.push(outcome("1:1", ApplyStatus::Applied));
        batch.push(outcome("1:2", ApplyStatus::Skipped(SkipReason::NotPaintable)));
        batch.push(outcome("1:3", ApplyStatus::Failed(NodeError::Locked)));
        batch.push(outcome("1:4", ApplyStatus::Applied));

        let summary = batch.summary();
        assert_eq!(summary, ApplySummary { applied: 2, skipped: 1, failed: 1 });
        assert_eq!(summary.total(), batch.len());
        assert_eq!(summary.to_string(), "applied 2, skipped 1, failed 1");

        let failures: Vec<_> = batch.failures().collect();
        assert_eq!(failures, vec![("1:3", &NodeError::Locked)]);
    }

    #[test]
    fn status_predicates() {
        assert!(ApplyStatus::Applied.is_applied());
        assert!(ApplyStatus::Skipped(SkipReason::StrokeRequired).is_skipped());
        assert_eq!(ApplyStatus::Failed(NodeError::Locked).error(), Some(&NodeError::Locked));
        assert_eq!(ApplyStatus::Applied.error(), None);
    }
}
