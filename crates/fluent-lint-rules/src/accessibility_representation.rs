//! Rule requiring an accessibility representation alongside gesture
//! modifiers.
//!
//! # Rationale
//!
//! A gesture attached with `.gesture(...)` or one of its siblings is
//! invisible to assistive technology: VoiceOver users can neither
//! discover nor perform it. Declaring `.accessibilityRepresentation` or
//! `.accessibilityAction` on the same chain restores an accessible
//! equivalent.
//!
//! # Non-triggering
//!
//! ```swift
//! Text("Pay")
//!     .onTapGesture { pay() }
//!     .accessibilityAction(named: "Pay") { pay() }
//! ```
//!
//! # Triggering
//!
//! ```swift
//! Text("Pay")
//!     .onTapGesture { pay() }
//! ```

use fluent_lint_core::RequireCompanion;

use crate::gestures::GESTURE_MODIFIERS;

/// Rule name for accessibility-representation-for-gestures.
pub const NAME: &str = "accessibility-representation-for-gestures";

/// Modifiers that satisfy a gesture under this rule.
pub const COMPANIONS: [&str; 2] = ["accessibilityAction", "accessibilityRepresentation"];

/// Reason attached to violations of this rule.
pub const REASON: &str = "Gesture modifiers should be accompanied by an accessibility \
     modifier like accessibilityRepresentation or accessibilityAction";

/// Builds the configured rule.
#[must_use]
pub fn accessibility_representation_for_gestures() -> RequireCompanion {
    RequireCompanion::new(NAME)
        .triggers(GESTURE_MODIFIERS)
        .companions(COMPANIONS)
        .reason(REASON)
}
