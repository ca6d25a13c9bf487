//! Rule presets for common configurations.

use fluent_lint_core::RequireCompanion;

use crate::{accessibility_representation_for_gestures, accessibility_trait_for_gestures};

/// Returns every built-in rule.
///
/// The two variants encode one policy question: whether hiding a view
/// from accessibility is an acceptable answer to an unrepresented
/// gesture. Embedding tools typically enable one of them, not both.
#[must_use]
pub fn all_rules() -> Vec<RequireCompanion> {
    vec![
        accessibility_representation_for_gestures(),
        accessibility_trait_for_gestures(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_have_distinct_names() {
        let rules = all_rules();
        assert_eq!(rules.len(), 2);
        assert_ne!(rules[0].name, rules[1].name);
    }

    #[test]
    fn every_rule_watches_the_same_triggers() {
        let rules = all_rules();
        for rule in &rules {
            assert_eq!(rule.triggers, rules[0].triggers);
            assert!(!rule.companions.is_empty());
        }
    }
}
