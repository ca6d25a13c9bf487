//! The syntax tree consumed by the analysis.
//!
//! Trees are immutable once built: an external parser (or a test fixture)
//! assembles one through [`TreeBuilder`], and analysis only ever reads it.
//! Nodes live in a flat table indexed by [`NodeId`]; child edges carry
//! ownership downward while parent links are plain back-indices, so
//! upward walks need no shared references.

use crate::types::Offset;
use crate::walk::PostOrder;

/// Index of a node in its tree's flat node table.
///
/// Ids are only meaningful for the tree that minted them. Accessors on
/// [`SyntaxTree`] return `None` for out-of-range ids rather than
/// panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// The expression kinds the analysis understands.
///
/// The set is closed on purpose: consumers match exhaustively, so adding
/// a kind forces every match site to decide how to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// An invocation such as `callee(args...)`.
    Call {
        /// The invoked expression, typically a member access or a bare
        /// identifier.
        callee: NodeId,
        /// Argument expressions in source order. Opaque to the analysis
        /// but still traversed.
        args: Vec<NodeId>,
    },
    /// A member access such as `base.name`.
    MemberAccess {
        /// The accessed expression.
        base: NodeId,
        /// The member name. Always an [`ExprKind::Identifier`] node, so
        /// member names are visited like any other identifier and carry
        /// their own position.
        member: NodeId,
    },
    /// A bare identifier reference.
    Identifier {
        /// The referenced name.
        name: String,
    },
    /// Any expression the analysis does not interpret (closures,
    /// literals, operators). Its children are still traversed.
    Other {
        /// Child expressions in source order.
        children: Vec<NodeId>,
    },
}

/// A single immutable node: kind, source position, and a back-link to its
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: ExprKind,
    position: Offset,
    parent: Option<NodeId>,
}

impl SyntaxNode {
    /// Returns the node's kind.
    #[must_use]
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Returns the node's source position.
    #[must_use]
    pub fn position(&self) -> Offset {
        self.position
    }

    /// Returns the parent id, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An immutable expression tree over a flat node table.
///
/// Obtained from [`TreeBuilder::build`], which guarantees every node is
/// reachable from the root and owned by exactly one parent edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    root: NodeId,
}

impl SyntaxTree {
    /// Returns the root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when the tree holds no nodes. Built trees always
    /// contain at least their root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for `id`, or `None` if `id` is not from this
    /// tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    /// Returns the kind of `id`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&ExprKind> {
        self.get(id).map(SyntaxNode::kind)
    }

    /// Returns the source position of `id`.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Offset> {
        self.get(id).map(SyntaxNode::position)
    }

    /// Returns the parent of `id`, or `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(SyntaxNode::parent)
    }

    /// Returns the name of `id` when it is an identifier node.
    #[must_use]
    pub fn identifier_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            ExprKind::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Returns the member name of `id` when it is a member access.
    #[must_use]
    pub fn member_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            ExprKind::MemberAccess { member, .. } => self.identifier_name(*member),
            _ => None,
        }
    }

    /// Returns the `index`-th child of `id` in source order.
    ///
    /// Source order is: callee before arguments for calls, base before
    /// member name for member accesses.
    pub(crate) fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        match self.kind(id)? {
            ExprKind::Call { callee, args } => {
                if index == 0 {
                    Some(*callee)
                } else {
                    args.get(index - 1).copied()
                }
            }
            ExprKind::MemberAccess { base, member } => match index {
                0 => Some(*base),
                1 => Some(*member),
                _ => None,
            },
            ExprKind::Identifier { .. } => None,
            ExprKind::Other { children } => children.get(index).copied(),
        }
    }

    /// Iterates the children of `id` in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            id,
            index: 0,
        }
    }

    /// Iterates the ancestors of `id`, nearest first, ending at the root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterates every node in post order: children before their parent,
    /// siblings in source order.
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self)
    }
}

/// Iterator over a node's children in source order.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
    index: usize,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let child = self.tree.child_at(self.id, self.index)?;
        self.index += 1;
        Some(child)
    }
}

/// Iterator over a node's ancestor chain, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Structural defects rejected by [`TreeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A referenced id was not created by this builder.
    #[error("node {0:?} was not created by this builder")]
    UnknownNode(NodeId),
    /// A node was attached under a second parent.
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
    /// The designated root already sits under a parent.
    #[error("root {0:?} must not have a parent")]
    AttachedRoot(NodeId),
    /// Nodes were created but never attached under the root.
    #[error("{count} node(s) unreachable from the root")]
    Unreachable {
        /// How many nodes the root's subtree does not cover.
        count: usize,
    },
}

/// Assembles a [`SyntaxTree`] bottom-up.
///
/// Children must exist before the node that owns them, which makes cycles
/// unrepresentable. Attaching a node twice, or leaving one dangling, is
/// rejected, so a built tree always forms a single-rooted hierarchy where
/// traversal reaches every node exactly once.
///
/// Composite nodes take their position from their leftmost part: a call
/// sits at its callee, a member access at its base. Only identifiers and
/// [`ExprKind::Other`] nodes carry positions of their own.
///
/// # Example
///
/// ```
/// use fluent_lint_core::{Offset, TreeBuilder};
///
/// // Text("hi").gesture(tap)
/// let mut builder = TreeBuilder::new();
/// let text = builder.identifier("Text", Offset::new(0));
/// let lit = builder.other(vec![], Offset::new(5))?;
/// let constructed = builder.call(text, vec![lit])?;
/// let gesture = builder.member_access(constructed, "gesture", Offset::new(11))?;
/// let tap = builder.identifier("tap", Offset::new(19));
/// let chain = builder.call(gesture, vec![tap])?;
///
/// let tree = builder.build(chain)?;
/// assert_eq!(tree.member_name(gesture), Some("gesture"));
/// assert_eq!(tree.position(chain), Some(Offset::new(0)));
/// # Ok::<(), fluent_lint_core::TreeError>(())
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bare identifier node.
    pub fn identifier(&mut self, name: impl Into<String>, position: Offset) -> NodeId {
        self.push(ExprKind::Identifier { name: name.into() }, position)
    }

    /// Adds a member access `base.name`.
    ///
    /// The member name becomes its own identifier node at
    /// `name_position`; the member-access node itself inherits `base`'s
    /// position.
    ///
    /// # Errors
    ///
    /// Fails when `base` is foreign to this builder or already attached.
    pub fn member_access(
        &mut self,
        base: NodeId,
        name: impl Into<String>,
        name_position: Offset,
    ) -> Result<NodeId, TreeError> {
        self.validate_children(&[base])?;
        let member = self.push(ExprKind::Identifier { name: name.into() }, name_position);
        let position = self.nodes[base.index()].position;
        let id = NodeId(self.nodes.len());
        self.nodes[base.index()].parent = Some(id);
        self.nodes[member.index()].parent = Some(id);
        self.nodes.push(SyntaxNode {
            kind: ExprKind::MemberAccess { base, member },
            position,
            parent: None,
        });
        Ok(id)
    }

    /// Adds a call `callee(args...)`, inheriting `callee`'s position.
    ///
    /// # Errors
    ///
    /// Fails when the callee or an argument is foreign, already attached,
    /// or repeated.
    pub fn call(&mut self, callee: NodeId, args: Vec<NodeId>) -> Result<NodeId, TreeError> {
        let mut children = Vec::with_capacity(args.len() + 1);
        children.push(callee);
        children.extend_from_slice(&args);
        self.validate_children(&children)?;
        let position = self.nodes[callee.index()].position;
        let id = NodeId(self.nodes.len());
        for &child in &children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(SyntaxNode {
            kind: ExprKind::Call { callee, args },
            position,
            parent: None,
        });
        Ok(id)
    }

    /// Adds an uninterpreted node with the given children.
    ///
    /// # Errors
    ///
    /// Fails when a child is foreign, already attached, or repeated.
    pub fn other(&mut self, children: Vec<NodeId>, position: Offset) -> Result<NodeId, TreeError> {
        self.validate_children(&children)?;
        let id = NodeId(self.nodes.len());
        for &child in &children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(SyntaxNode {
            kind: ExprKind::Other { children },
            position,
            parent: None,
        });
        Ok(id)
    }

    /// Finalizes the tree with `root` at its top.
    ///
    /// # Errors
    ///
    /// Fails when `root` is foreign or attached under a parent, or when
    /// any node is not part of `root`'s subtree.
    pub fn build(self, root: NodeId) -> Result<SyntaxTree, TreeError> {
        let Some(node) = self.nodes.get(root.index()) else {
            return Err(TreeError::UnknownNode(root));
        };
        if node.parent.is_some() {
            return Err(TreeError::AttachedRoot(root));
        }
        let tree = SyntaxTree {
            nodes: self.nodes,
            root,
        };
        let reachable = tree.post_order().count();
        if reachable != tree.len() {
            return Err(TreeError::Unreachable {
                count: tree.len() - reachable,
            });
        }
        Ok(tree)
    }

    fn push(&mut self, kind: ExprKind, position: Offset) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind,
            position,
            parent: None,
        });
        id
    }

    /// Rejects any child that is foreign, already attached, or repeated
    /// in the batch, before any state changes.
    fn validate_children(&self, children: &[NodeId]) -> Result<(), TreeError> {
        for (i, &child) in children.iter().enumerate() {
            if child.index() >= self.nodes.len() {
                return Err(TreeError::UnknownNode(child));
            }
            if self.nodes[child.index()].parent.is_some() || children[..i].contains(&child) {
                return Err(TreeError::AlreadyAttached(child));
            }
        }
        Ok(())
    }
}
