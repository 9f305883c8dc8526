//! Refuses to start a checkout when the working copy has local modifications.

use tracing::debug;

use crate::git::WorktreeStatus;

/// Outcome of inspecting the working copy before the menu opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// Every modified path, in the order git reported them
    Block(Vec<String>),
}

/// Decide whether it is safe to enter the branch menu
pub fn evaluate(status: &WorktreeStatus) -> GuardDecision {
    if status.is_clean() {
        return GuardDecision::Proceed;
    }

    for entry in status.entries() {
        debug!(code = %entry.code, path = %entry.path, "local change");
    }
    GuardDecision::Block(status.paths().map(str::to_string).collect())
}
