//! Partial-update merge engine
//!
//! Each domain has a typed partial-update struct whose fields are
//! `Option`s: `None` leaves the corresponding domain field unchanged,
//! `Some` overwrites it. Merging is shallow except for the two nested
//! option-groups ([`AnswerKeyOptionsUpdate`],
//! [`InstructorGuideOptionsUpdate`]), which merge field-wise against the
//! group's current value so that toggling one sub-option never resets its
//! siblings.
//!
//! Merge performs no validation; the option registry is the caller's
//! validation concern. Updates over disjoint fields commute; overlapping
//! updates are last-applied-wins, since the caller always presents the
//! new values as authoritative.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::registry::{answer_key_defaults, instructor_guide_defaults};
use crate::types::{
    AdvancedSettings, AiIntegrationPreference, ContentComplexity, ContentDefaults, CustomTemplate,
    EducationLevel, FormComplexity, TeachingStyle, UiPreferences, UserProfile,
};

/// Partial update to [`UserProfile`]
///
/// Email and institution are doubly optional so the typed API can
/// distinguish "leave unchanged" (`None`) from "clear" (`Some(None)`).
/// The JSON form of an update cannot express clearing: a `null` there is
/// indistinguishable from an absent key and leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub institution: Option<Option<String>>,
    pub subject: Option<String>,
    pub level: Option<EducationLevel>,
    pub teaching_style: Option<TeachingStyle>,
    pub ai_preference: Option<AiIntegrationPreference>,
}

/// Partial update to the answer-key option-group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerKeyOptionsUpdate {
    pub include_explanations: Option<bool>,
    pub include_difficulty: Option<bool>,
    pub include_points: Option<bool>,
}

/// Partial update to the instructor-guide option-group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorGuideOptionsUpdate {
    pub include_timing: Option<bool>,
    pub include_grading_tips: Option<bool>,
    pub include_discussion_prompts: Option<bool>,
    pub include_extensions: Option<bool>,
}

/// Partial update to [`ContentDefaults`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultsUpdate {
    pub duration: Option<String>,
    pub complexity: Option<ContentComplexity>,
    pub content_types: Option<Vec<String>>,
    pub include_answer_keys: Option<bool>,
    pub include_instructor_guides: Option<bool>,
    pub include_rubrics: Option<bool>,
    pub include_accessibility_features: Option<bool>,
    pub answer_key_options: Option<AnswerKeyOptionsUpdate>,
    pub instructor_guide_options: Option<InstructorGuideOptionsUpdate>,
}

/// Partial update to [`UiPreferences`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesUpdate {
    pub form_complexity: Option<FormComplexity>,
    pub show_advanced_options: Option<bool>,
    pub auto_save_settings: Option<bool>,
    pub use_settings_by_default: Option<bool>,
}

/// Partial update to [`AdvancedSettings`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedUpdate {
    pub ai_customization: Option<Value>,
    pub custom_templates: Option<Vec<CustomTemplate>>,
    pub custom_content_types: Option<Vec<String>>,
}

/// Settings merger
pub struct SettingsMerger;

impl SettingsMerger {
    /// Apply a partial update to a profile in place
    pub fn apply_profile(profile: &mut UserProfile, update: ProfileUpdate) {
        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(email) = update.email {
            profile.email = email;
        }
        if let Some(institution) = update.institution {
            profile.institution = institution;
        }
        if let Some(subject) = update.subject {
            profile.subject = subject;
        }
        if let Some(level) = update.level {
            profile.level = level;
        }
        if let Some(style) = update.teaching_style {
            profile.teaching_style = style;
        }
        if let Some(preference) = update.ai_preference {
            profile.ai_preference = preference;
        }
        debug!(domain = "profile", "settings update applied");
    }

    /// Apply a partial update to content defaults in place
    ///
    /// The two option-groups get one level of deep merge: a group named in
    /// the update merges against its current value, falling back to the
    /// registry defaults when the group was never set.
    pub fn apply_defaults(defaults: &mut ContentDefaults, update: DefaultsUpdate) {
        if let Some(duration) = update.duration {
            defaults.duration = duration;
        }
        if let Some(complexity) = update.complexity {
            defaults.complexity = complexity;
        }
        if let Some(content_types) = update.content_types {
            defaults.content_types = content_types;
        }
        if let Some(value) = update.include_answer_keys {
            defaults.include_answer_keys = value;
        }
        if let Some(value) = update.include_instructor_guides {
            defaults.include_instructor_guides = value;
        }
        if let Some(value) = update.include_rubrics {
            defaults.include_rubrics = value;
        }
        if let Some(value) = update.include_accessibility_features {
            defaults.include_accessibility_features = value;
        }
        if let Some(group_update) = update.answer_key_options {
            let mut group = defaults
                .answer_key_options
                .take()
                .unwrap_or_else(answer_key_defaults);
            if let Some(value) = group_update.include_explanations {
                group.include_explanations = value;
            }
            if let Some(value) = group_update.include_difficulty {
                group.include_difficulty = value;
            }
            if let Some(value) = group_update.include_points {
                group.include_points = value;
            }
            defaults.answer_key_options = Some(group);
        }
        if let Some(group_update) = update.instructor_guide_options {
            let mut group = defaults
                .instructor_guide_options
                .take()
                .unwrap_or_else(instructor_guide_defaults);
            if let Some(value) = group_update.include_timing {
                group.include_timing = value;
            }
            if let Some(value) = group_update.include_grading_tips {
                group.include_grading_tips = value;
            }
            if let Some(value) = group_update.include_discussion_prompts {
                group.include_discussion_prompts = value;
            }
            if let Some(value) = group_update.include_extensions {
                group.include_extensions = value;
            }
            defaults.instructor_guide_options = Some(group);
        }
        debug!(domain = "defaults", "settings update applied");
    }

    /// Apply a partial update to UI preferences in place
    pub fn apply_preferences(preferences: &mut UiPreferences, update: PreferencesUpdate) {
        if let Some(complexity) = update.form_complexity {
            preferences.form_complexity = complexity;
        }
        if let Some(value) = update.show_advanced_options {
            preferences.show_advanced_options = value;
        }
        if let Some(value) = update.auto_save_settings {
            preferences.auto_save_settings = value;
        }
        if let Some(value) = update.use_settings_by_default {
            preferences.use_settings_by_default = value;
        }
        debug!(domain = "preferences", "settings update applied");
    }

    /// Apply a partial update to the advanced block in place
    pub fn apply_advanced(advanced: &mut AdvancedSettings, update: AdvancedUpdate) {
        if let Some(customization) = update.ai_customization {
            advanced.ai_customization = Some(customization);
        }
        if let Some(templates) = update.custom_templates {
            advanced.custom_templates = templates;
        }
        if let Some(content_types) = update.custom_content_types {
            advanced.custom_content_types = content_types;
        }
        debug!(domain = "advanced", "settings update applied");
    }
}
