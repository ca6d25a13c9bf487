//! Upward companion search and chain-base resolution.
//!
//! Both walks operate around a trigger identifier. A fluent chain parses
//! as a right-leaning nest of calls where each modifier wraps the
//! expression built so far, so ascending through parents visits exactly
//! the modifiers applied after the trigger, and descending through `base`
//! edges visits the ones applied before it.

use crate::rule::ModifierSet;
use crate::tree::{ExprKind, NodeId, SyntaxTree};
use crate::types::Offset;

/// Reports whether any call enclosing `trigger` invokes a member named in
/// `companions`.
///
/// Walks the parent chain starting at the trigger's parent and stops at
/// the first hit; a companion anywhere above satisfies the requirement,
/// so near and far matches are equivalent. Ancestors that are not calls,
/// and calls of bare (non-member) callees, contribute nothing and are
/// walked past. The trigger's own call is an ancestor like any other, so
/// a name listed in both sets satisfies itself.
pub(crate) fn companion_above(
    tree: &SyntaxTree,
    trigger: NodeId,
    companions: &ModifierSet,
) -> bool {
    tree.ancestors(trigger)
        .filter_map(|ancestor| called_member_name(tree, ancestor))
        .any(|name| companions.contains(name))
}

/// Picks the position a violation for `trigger` reports at: the chain
/// base when one resolves, otherwise one byte before the trigger itself.
pub(crate) fn report_position(tree: &SyntaxTree, trigger: NodeId) -> Offset {
    base_identifier(tree, trigger)
        .and_then(|base| tree.position(base))
        .unwrap_or_else(|| {
            tree.position(trigger)
                .map_or(Offset::new(0), Offset::preceding)
        })
}

/// Resolves the identifier the whole chain is rooted on, such as the
/// `Text` in `Text("x").padding().gesture(tap)`.
///
/// Starts at the base of the trigger's own member access and descends
/// while the current node is a call: a bare-identifier callee is the
/// root, a member-access callee shifts descent to its base, and anything
/// else ends the search without a base. A trigger that is not a member
/// name has no member access to start from and likewise resolves
/// nothing.
pub(crate) fn base_identifier(tree: &SyntaxTree, trigger: NodeId) -> Option<NodeId> {
    let mut current = enclosing_member_base(tree, trigger)?;
    loop {
        let ExprKind::Call { callee, .. } = tree.kind(current)? else {
            return None;
        };
        match tree.kind(*callee)? {
            ExprKind::Identifier { .. } => return Some(*callee),
            ExprKind::MemberAccess { base, .. } => current = *base,
            _ => return None,
        }
    }
}

/// Returns the member name invoked by `id`, when `id` is a call whose
/// callee is a member access.
fn called_member_name(tree: &SyntaxTree, id: NodeId) -> Option<&str> {
    match tree.kind(id)? {
        ExprKind::Call { callee, .. } => tree.member_name(*callee),
        _ => None,
    }
}

/// Returns the base of the member access whose member name is `trigger`.
fn enclosing_member_base(tree: &SyntaxTree, trigger: NodeId) -> Option<NodeId> {
    let parent = tree.parent(trigger)?;
    match tree.kind(parent)? {
        ExprKind::MemberAccess { base, member } if *member == trigger => Some(*base),
        _ => None,
    }
}
