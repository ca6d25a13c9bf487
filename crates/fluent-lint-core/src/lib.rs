//! # fluent-lint-core
//!
//! Core framework for linting fluent modifier chains.
//!
//! A fluent chain such as `Text("hi").gesture(tap)` parses into a
//! right-leaning nest of call and member-access nodes. This crate models
//! that shape and ships one configurable analysis over it:
//!
//! - [`SyntaxTree`] and [`TreeBuilder`] for the immutable expression tree
//! - [`PostOrder`] traversal visiting every node exactly once
//! - [`RequireCompanion`], which reports a [`Violation`] for each trigger
//!   call whose chain lacks a companion call above it
//!
//! Trees come from an external parser; this crate neither reads source
//! text nor formats findings, and severity is the embedding tool's
//! concern.
//!
//! ## Example
//!
//! ```
//! use fluent_lint_core::{Offset, RequireCompanion, TreeBuilder};
//!
//! // Text("hi").gesture(tap) - no accessibility companion in the chain.
//! let mut builder = TreeBuilder::new();
//! let text = builder.identifier("Text", Offset::new(0));
//! let lit = builder.other(vec![], Offset::new(5))?;
//! let constructed = builder.call(text, vec![lit])?;
//! let gesture = builder.member_access(constructed, "gesture", Offset::new(11))?;
//! let tap = builder.identifier("tap", Offset::new(19));
//! let chain = builder.call(gesture, vec![tap])?;
//! let tree = builder.build(chain)?;
//!
//! let rule = RequireCompanion::new("accessibility-representation-for-gestures")
//!     .triggers(["gesture", "onTapGesture"])
//!     .companions(["accessibilityRepresentation", "accessibilityAction"])
//!     .reason("gestures need an accessibility companion");
//!
//! let violations = rule.check(&tree);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].position, Offset::new(0)); // points at `Text`
//! # Ok::<(), fluent_lint_core::TreeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ascent;
mod rule;
mod tree;
mod types;
mod walk;

pub use rule::{ModifierSet, RequireCompanion};
pub use tree::{Ancestors, Children, ExprKind, NodeId, SyntaxNode, SyntaxTree, TreeBuilder, TreeError};
pub use types::{Offset, Violation};
pub use walk::PostOrder;
