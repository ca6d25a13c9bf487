//! Post-order traversal over a syntax tree.

use crate::tree::{NodeId, SyntaxTree};

/// Iterator yielding every node of a tree in post order: children before
/// their parent, siblings in source order.
///
/// The walk keeps an explicit stack instead of recursing. Fluent chains
/// nest one call per modifier, so tree depth grows linearly with chain
/// length and recursion would cap the walkable chain at the thread's
/// stack size.
#[derive(Debug, Clone)]
pub struct PostOrder<'a> {
    tree: &'a SyntaxTree,
    /// Pending nodes, each with the index of its next unvisited child.
    stack: Vec<(NodeId, usize)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(tree: &'a SyntaxTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root(), 0)],
        }
    }
}

impl Iterator for PostOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let &(id, child_index) = self.stack.last()?;
            match self.tree.child_at(id, child_index) {
                Some(child) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.1 += 1;
                    }
                    self.stack.push((child, 0));
                }
                None => {
                    self.stack.pop();
                    return Some(id);
                }
            }
        }
    }
}
