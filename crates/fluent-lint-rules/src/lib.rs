//! # fluent-lint-rules
//!
//! Built-in rules for fluent-lint.
//!
//! Both rules run the same chain analysis from `fluent-lint-core` over
//! the SwiftUI gesture modifiers and differ only in which companions
//! satisfy a gesture:
//!
//! | Name | Accepted companions |
//! |------|---------------------|
//! | `accessibility-representation-for-gestures` | `accessibilityRepresentation`, `accessibilityAction` |
//! | `accessibility-trait-for-gestures` | the above plus `accessibilityHidden` |
//!
//! ## Usage
//!
//! ```
//! use fluent_lint_rules::accessibility_representation_for_gestures;
//!
//! let rule = accessibility_representation_for_gestures();
//! assert!(rule.triggers.contains("onTapGesture"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod accessibility_representation;
mod accessibility_trait;
mod gestures;
mod presets;

pub use accessibility_representation::accessibility_representation_for_gestures;
pub use accessibility_trait::accessibility_trait_for_gestures;
pub use gestures::GESTURE_MODIFIERS;
pub use presets::all_rules;

/// Re-export core types for convenience.
pub use fluent_lint_core::{Offset, RequireCompanion, Violation};
