//! Applying descriptors to nodes.

mod applicator;
mod outcome;

pub use applicator::PresetApplicator;
pub use outcome::{ApplyStatus, ApplySummary, BatchOutcome, NodeOutcome, SkipReason};
