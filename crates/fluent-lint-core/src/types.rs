//! Core types for chain-lint findings.

use serde::{Deserialize, Serialize};

/// A byte offset into the analyzed source.
///
/// Offsets are assigned by whatever built the tree (typically a parser);
/// the analysis only carries them through to violations, stepping one back
/// for the trigger-adjacent fallback position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Offset(usize);

impl Offset {
    /// Creates an offset from a raw byte count.
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Returns the raw byte count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the offset one byte back, saturating at zero.
    ///
    /// This is the fallback report position directly before a trigger
    /// whose chain has no resolvable base: for `view.gesture(tap)` it
    /// lands on the dot.
    #[must_use]
    pub const fn preceding(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lint finding: one trigger call whose chain lacks a companion.
///
/// Produced once per unmatched trigger occurrence and never mutated
/// afterwards. Severity, rule enablement and presentation all belong to
/// the embedding tool, so none of them appear here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Where to point the report: the chain's base identifier when one
    /// resolves, otherwise one byte before the trigger itself.
    pub position: Offset,
    /// Human-readable explanation, taken from the rule configuration.
    pub reason: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(position: Offset, reason: impl Into<String>) -> Self {
        Self {
            position,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offset {}: {}", self.position, self.reason)
    }
}
