//! The configurable companion-presence rule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ascent;
use crate::tree::SyntaxTree;
use crate::types::Violation;

/// Reason used when a rule is built without one.
const DEFAULT_REASON: &str = "modifier call requires a companion modifier in the same chain";

/// A set of member names, matched exactly and case-sensitively.
///
/// The same type serves both halves of a rule: the triggers that demand a
/// companion and the companions that satisfy the demand. Names are kept
/// sorted so iteration, serialization and logs stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierSet(BTreeSet<String>);

impl ModifierSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests membership by exact comparison. `gesture` and `Gesture` are
    /// different names.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns the number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the set holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Requires that certain modifier calls be accompanied, later in their
/// fluent chain, by a call from a companion set.
///
/// One algorithm serves every trigger/companion pairing; concrete rules
/// differ only in configuration, which also makes them loadable from
/// serialized form. Severity and enablement belong to the embedding tool
/// and have no representation here.
///
/// # Example
///
/// ```
/// use fluent_lint_core::RequireCompanion;
///
/// let rule = RequireCompanion::new("require-teardown")
///     .triggers(["setup"])
///     .companions(["teardown"])
///     .reason("setup must be paired with teardown in the same chain");
///
/// assert!(rule.triggers.contains("setup"));
/// assert!(!rule.triggers.contains("teardown"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequireCompanion {
    /// Rule name, used in logs and by external tooling.
    pub name: String,
    /// Member names whose calls demand a companion.
    pub triggers: ModifierSet,
    /// Member names whose presence above a trigger satisfies it.
    pub companions: ModifierSet,
    /// Reason attached to every violation this rule produces.
    pub reason: String,
}

impl RequireCompanion {
    /// Creates a rule with empty sets and a generic reason.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triggers: ModifierSet::new(),
            companions: ModifierSet::new(),
            reason: DEFAULT_REASON.to_owned(),
        }
    }

    /// Sets the trigger names.
    #[must_use]
    pub fn triggers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = names.into_iter().collect();
        self
    }

    /// Sets the companion names.
    #[must_use]
    pub fn companions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companions = names.into_iter().collect();
        self
    }

    /// Sets the violation reason text.
    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Runs the rule over a tree, returning violations in traversal
    /// order.
    ///
    /// One post-order pass visits every identifier once. Each trigger
    /// occurrence is judged independently and yields at most one
    /// violation, so the result is a pure function of the tree and this
    /// configuration; repeated unmatched triggers report repeatedly.
    #[must_use]
    pub fn check(&self, tree: &SyntaxTree) -> Vec<Violation> {
        debug!(rule = %self.name, nodes = tree.len(), "checking tree");
        let mut violations = Vec::new();

        for id in tree.post_order() {
            let Some(name) = tree.identifier_name(id) else {
                continue;
            };
            if !self.triggers.contains(name) {
                continue;
            }
            trace!(rule = %self.name, trigger = name, "trigger found");
            if ascent::companion_above(tree, id, &self.companions) {
                continue;
            }
            let position = ascent::report_position(tree, id);
            debug!(
                rule = %self.name,
                trigger = name,
                %position,
                "no companion above trigger"
            );
            violations.push(Violation::new(position, self.reason.clone()));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeId, TreeBuilder};
    use crate::types::Offset;

    fn off(n: usize) -> Offset {
        Offset::new(n)
    }

    fn rule() -> RequireCompanion {
        RequireCompanion::new("require-companion-test")
            .triggers(["gesture", "onTapGesture"])
            .companions(["accessibilityAction"])
            .reason("gesture without accessibility companion")
    }

    /// Builds `Base().n1().n2()...` rooted at offset `base_offset`,
    /// leaving the builder open for further nodes.
    fn chain_at(base_offset: usize, names: &[&str]) -> (TreeBuilder, NodeId) {
        let mut b = TreeBuilder::new();
        let base = b.identifier("Base", off(base_offset));
        let mut current = b.call(base, vec![]).unwrap();
        for (i, name) in names.iter().enumerate() {
            let member = b
                .member_access(current, *name, off(base_offset + 10 * (i + 1)))
                .unwrap();
            current = b.call(member, vec![]).unwrap();
        }
        (b, current)
    }

    fn chain(names: &[&str]) -> SyntaxTree {
        let (b, root) = chain_at(0, names);
        b.build(root).unwrap()
    }

    // --- ModifierSet ---

    #[test]
    fn membership_is_case_sensitive() {
        let set: ModifierSet = ["gesture"].into_iter().collect();
        assert!(set.contains("gesture"));
        assert!(!set.contains("Gesture"));
        assert!(!set.contains("gestures"));
    }

    #[test]
    fn duplicate_names_collapse() {
        let set: ModifierSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn iteration_is_lexicographic() {
        let set: ModifierSet = ["onTapGesture", "gesture", "highPriorityGesture"]
            .into_iter()
            .collect();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(
            names,
            vec!["gesture", "highPriorityGesture", "onTapGesture"]
        );
    }

    // --- RequireCompanion ---

    #[test]
    fn builder_replaces_sets_and_reason() {
        let rule = rule();
        assert_eq!(rule.name, "require-companion-test");
        assert_eq!(rule.triggers.len(), 2);
        assert_eq!(rule.companions.len(), 1);
        assert_eq!(rule.reason, "gesture without accessibility companion");
    }

    #[test]
    fn new_rule_reports_nothing() {
        let tree = chain(&["gesture"]);
        let empty = RequireCompanion::new("empty");
        assert!(empty.check(&tree).is_empty());
    }

    #[test]
    fn companion_above_suppresses_the_violation() {
        let tree = chain(&["gesture", "accessibilityAction"]);
        assert!(rule().check(&tree).is_empty());
    }

    #[test]
    fn unmatched_trigger_reports_at_the_chain_base() {
        let tree = chain(&["gesture", "padding"]);
        let violations = rule().check(&tree);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].position, off(0));
        assert_eq!(
            violations[0].reason,
            "gesture without accessibility companion"
        );
    }

    #[test]
    fn each_unmatched_trigger_reports_separately() {
        // Two triggers in one chain, no companion, no deduplication: both
        // report, and both resolve the same base.
        let tree = chain(&["gesture", "onTapGesture"]);
        let violations = rule().check(&tree);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].position, off(0));
        assert_eq!(violations[1].position, off(0));
    }

    #[test]
    fn violations_follow_traversal_order() {
        // Two separate chains under one opaque root; the earlier chain's
        // violation comes out first.
        let (mut b, first_chain) = chain_at(0, &["gesture"]);
        let second_base = b.identifier("Base", off(100));
        let second_call = b.call(second_base, vec![]).unwrap();
        let member = b
            .member_access(second_call, "onTapGesture", off(110))
            .unwrap();
        let second_chain = b.call(member, vec![]).unwrap();
        let root = b.other(vec![first_chain, second_chain], off(0)).unwrap();
        let tree = b.build(root).unwrap();

        let violations = rule().check(&tree);
        let positions: Vec<Offset> = violations.iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![off(0), off(100)]);
    }

    #[test]
    fn trigger_name_outside_a_call_still_reports() {
        // A bare `gesture` identifier that is not the member name of any
        // call has no base to resolve, so it reports with the fallback
        // position.
        let mut b = TreeBuilder::new();
        let gesture = b.identifier("gesture", off(4));
        let root = b.other(vec![gesture], off(0)).unwrap();
        let tree = b.build(root).unwrap();

        let violations = rule().check(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].position, off(3));
    }

    #[test]
    fn default_reason_is_attached_when_unset() {
        let tree = chain(&["gesture"]);
        let bare = RequireCompanion::new("bare").triggers(["gesture"]);
        let violations = bare.check(&tree);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].reason, DEFAULT_REASON);
    }
}
