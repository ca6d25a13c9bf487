//! The SwiftUI gesture modifiers shared by every rule in this crate.

/// Gesture-attaching modifiers, as SwiftUI names them.
///
/// Each of these makes a view interactive without telling assistive
/// technology anything about it, which is what the rules here exist to
/// catch. `.onTapGesture` and `.onLongPressGesture` are the closure
/// conveniences; the other three attach a gesture value directly.
pub const GESTURE_MODIFIERS: [&str; 5] = [
    "gesture",
    "highPriorityGesture",
    "onLongPressGesture",
    "onTapGesture",
    "simultaneousGesture",
];
