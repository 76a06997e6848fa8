use curator_settings::registry::{required_tier, SettingField};
use curator_settings::visibility::{hidden_feature_names, is_field_visible, is_visible};
use curator_settings::FormComplexity;

const TIERS: [FormComplexity; 3] = [
    FormComplexity::Essential,
    FormComplexity::Enhanced,
    FormComplexity::Advanced,
];

#[test]
fn test_visibility_is_monotonic_in_current_tier() {
    // Visible exactly when the current tier is at or above the required one
    for required in TIERS {
        for current in TIERS {
            assert_eq!(is_visible(required, current), current >= required);
        }
    }
}

#[test]
fn test_essential_fields_always_visible() {
    for current in TIERS {
        assert!(is_visible(FormComplexity::Essential, current));
    }
}

#[test]
fn test_registered_fields_hidden_at_essential() {
    for field in SettingField::all() {
        assert!(!is_field_visible(*field, FormComplexity::Essential));
    }
}

#[test]
fn test_enhanced_unlocks_only_enhanced_fields() {
    assert!(is_field_visible(SettingField::Email, FormComplexity::Enhanced));
    assert!(is_field_visible(SettingField::AiConfigurationWizard, FormComplexity::Enhanced));
    assert!(!is_field_visible(SettingField::PointValues, FormComplexity::Enhanced));
    assert!(!is_field_visible(SettingField::TemplateEditor, FormComplexity::Enhanced));
}

#[test]
fn test_hidden_feature_lists_are_nested() {
    let at_essential = hidden_feature_names(FormComplexity::Essential);
    let at_enhanced = hidden_feature_names(FormComplexity::Enhanced);
    let at_advanced = hidden_feature_names(FormComplexity::Advanced);

    assert_eq!(at_essential.len(), 9);
    assert_eq!(at_enhanced.len(), 4);
    assert!(at_advanced.is_empty());

    // Each lower tier hides a superset of what the next tier hides
    for name in &at_enhanced {
        assert!(at_essential.contains(name));
    }
}

#[test]
fn test_hidden_feature_ordering() {
    let hidden = hidden_feature_names(FormComplexity::Essential);
    assert_eq!(
        hidden,
        vec![
            "Email & Institution settings",
            "AI Integration preferences",
            "Detailed answer key options",
            "Instructor guide options",
            "AI Configuration wizard",
            "Point value suggestions",
            "Discussion prompts & extensions",
            "Advanced Template Editor",
            "Learning Insights dashboard",
        ]
    );
}

#[test]
fn test_hidden_feature_names_is_idempotent() {
    for tier in TIERS {
        assert_eq!(hidden_feature_names(tier), hidden_feature_names(tier));
    }
}

#[test]
fn test_required_tiers_match_declared_gating() {
    assert_eq!(required_tier(SettingField::Email), FormComplexity::Enhanced);
    assert_eq!(required_tier(SettingField::Institution), FormComplexity::Enhanced);
    assert_eq!(required_tier(SettingField::AiPreference), FormComplexity::Enhanced);
    assert_eq!(
        required_tier(SettingField::AnswerKeyDetailOptions),
        FormComplexity::Enhanced
    );
    assert_eq!(
        required_tier(SettingField::InstructorGuideDetailOptions),
        FormComplexity::Enhanced
    );
    assert_eq!(required_tier(SettingField::PointValues), FormComplexity::Advanced);
    assert_eq!(
        required_tier(SettingField::DiscussionPromptsAndExtensions),
        FormComplexity::Advanced
    );
}
