//! Rule requiring gestures to be represented to, or hidden from,
//! assistive technology.
//!
//! # Rationale
//!
//! The lenient sibling of
//! [`accessibility-representation-for-gestures`](crate::accessibility_representation_for_gestures):
//! a gesture is also acceptable when the whole view is explicitly
//! removed from the accessibility tree, since a purely decorative
//! interaction has nothing to represent.
//!
//! # Non-triggering
//!
//! ```swift
//! Image("sparkle")
//!     .onTapGesture { twinkle() }
//!     .accessibilityHidden(true)
//! ```
//!
//! # Triggering
//!
//! ```swift
//! Image("sparkle")
//!     .onTapGesture { twinkle() }
//! ```

use fluent_lint_core::RequireCompanion;

use crate::gestures::GESTURE_MODIFIERS;

/// Rule name for accessibility-trait-for-gestures.
pub const NAME: &str = "accessibility-trait-for-gestures";

/// Modifiers that satisfy a gesture under this rule.
pub const COMPANIONS: [&str; 3] = [
    "accessibilityAction",
    "accessibilityHidden",
    "accessibilityRepresentation",
];

/// Reason attached to violations of this rule.
pub const REASON: &str = "All views with gestures should include an accessibility \
     representation, an accessibility action, or be hidden from accessibility";

/// Builds the configured rule.
#[must_use]
pub fn accessibility_trait_for_gestures() -> RequireCompanion {
    RequireCompanion::new(NAME)
        .triggers(GESTURE_MODIFIERS)
        .companions(COMPANIONS)
        .reason(REASON)
}
