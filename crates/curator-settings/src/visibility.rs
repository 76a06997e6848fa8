//! Tier-based visibility resolution
//!
//! Pure functions, decoupled from any rendering surface: the UI asks
//! whether a field gated at some tier is active under the user's current
//! tier, and which feature names are currently suppressed.

use crate::registry::{required_tier, SettingField};
use crate::types::FormComplexity;

/// Feature names suppressed below the `enhanced` tier, in declaration
/// order
const ENHANCED_FEATURES: [&str; 5] = [
    "Email & Institution settings",
    "AI Integration preferences",
    "Detailed answer key options",
    "Instructor guide options",
    "AI Configuration wizard",
];

/// Feature names suppressed below the `advanced` tier, in declaration
/// order
const ADVANCED_FEATURES: [&str; 4] = [
    "Point value suggestions",
    "Discussion prompts & extensions",
    "Advanced Template Editor",
    "Learning Insights dashboard",
];

/// Whether a field requiring `required` is active at `current`
///
/// Visible iff the current tier's ordinal is at or above the required
/// tier's ordinal. Total order, no failure mode.
pub fn is_visible(required: FormComplexity, current: FormComplexity) -> bool {
    current.ordinal() >= required.ordinal()
}

/// Whether a registered field is active at `current`
pub fn is_field_visible(field: SettingField, current: FormComplexity) -> bool {
    is_visible(required_tier(field), current)
}

/// Human-readable names of the features hidden at `current`
///
/// Enhanced-gated names always precede advanced-gated names; within each
/// group declaration order is fixed. At `Advanced` the list is empty.
/// Idempotent: the same tier always yields the same list.
pub fn hidden_feature_names(current: FormComplexity) -> Vec<&'static str> {
    let mut hidden = Vec::new();

    if !is_visible(FormComplexity::Enhanced, current) {
        hidden.extend_from_slice(&ENHANCED_FEATURES);
    }
    if !is_visible(FormComplexity::Advanced, current) {
        hidden.extend_from_slice(&ADVANCED_FEATURES);
    }

    hidden
}
