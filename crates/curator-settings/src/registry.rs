//! Static option registry
//!
//! Declares the minimum form-complexity tier each gated field or entry
//! point requires, and owns the documented defaults for the two nested
//! option-groups. This is a lookup table, not computed state: any field
//! not enumerated in [`SettingField`] is essential and always visible.

use crate::types::{AnswerKeyOptions, FormComplexity, InstructorGuideOptions};

/// Tier-gated user-settable fields and wizard entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    /// Profile email field
    Email,
    /// Profile institution field
    Institution,
    /// Profile AI integration preference
    AiPreference,
    /// The detailed answer-key option-group
    AnswerKeyDetailOptions,
    /// The detailed instructor-guide option-group
    InstructorGuideDetailOptions,
    /// Entry point to the AI configuration wizard
    AiConfigurationWizard,
    /// Point-value suggestions inside the answer-key options
    PointValues,
    /// Discussion prompts and extension activities inside the
    /// instructor-guide options
    DiscussionPromptsAndExtensions,
    /// Entry point to the advanced template editor
    TemplateEditor,
    /// Entry point to the learning-insights dashboard
    LearningInsights,
}

impl SettingField {
    /// All registered fields, in declaration order
    pub fn all() -> &'static [SettingField] {
        &[
            SettingField::Email,
            SettingField::Institution,
            SettingField::AiPreference,
            SettingField::AnswerKeyDetailOptions,
            SettingField::InstructorGuideDetailOptions,
            SettingField::AiConfigurationWizard,
            SettingField::PointValues,
            SettingField::DiscussionPromptsAndExtensions,
            SettingField::TemplateEditor,
            SettingField::LearningInsights,
        ]
    }
}

/// Minimum tier at which a registered field becomes active
pub fn required_tier(field: SettingField) -> FormComplexity {
    match field {
        SettingField::Email
        | SettingField::Institution
        | SettingField::AiPreference
        | SettingField::AnswerKeyDetailOptions
        | SettingField::InstructorGuideDetailOptions
        | SettingField::AiConfigurationWizard => FormComplexity::Enhanced,
        SettingField::PointValues
        | SettingField::DiscussionPromptsAndExtensions
        | SettingField::TemplateEditor
        | SettingField::LearningInsights => FormComplexity::Advanced,
    }
}

/// Documented defaults for the answer-key option-group, applied when a
/// partial update names a group that was never set
pub fn answer_key_defaults() -> AnswerKeyOptions {
    AnswerKeyOptions::default()
}

/// Documented defaults for the instructor-guide option-group
pub fn instructor_guide_defaults() -> InstructorGuideOptions {
    InstructorGuideOptions::default()
}
