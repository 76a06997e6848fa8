//! Core settings types and data structures
//!
//! Field names serialize in the camelCase wire format the desktop app has
//! always written, so exported files remain interchangeable across
//! versions. Every wire enum except [`FormComplexity`] is permissive: an
//! unrecognized string is preserved verbatim in an `Other` variant rather
//! than rejected, so import tolerates forward/backward schema drift.

use serde::{Deserialize, Serialize};

/// The fixed set of lesson durations offered by the defaults form
pub const DURATIONS: [&str; 6] = [
    "30 minutes",
    "50 minutes",
    "75 minutes",
    "90 minutes",
    "2 hours",
    "3 hours",
];

/// The built-in content types; custom types live in
/// [`AdvancedSettings::custom_content_types`]
pub const BUILTIN_CONTENT_TYPES: [&str; 5] =
    ["Slides", "InstructorNotes", "Worksheet", "Quiz", "ActivityGuide"];

/// Education level of the audience the user teaches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
    College,
    Graduate,
    Professional,
    AdultLearning,
    /// Unrecognized wire value, preserved as-is
    Other(String),
}

impl EducationLevel {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            EducationLevel::Elementary => "elementary",
            EducationLevel::MiddleSchool => "middle-school",
            EducationLevel::HighSchool => "high-school",
            EducationLevel::College => "college",
            EducationLevel::Graduate => "graduate",
            EducationLevel::Professional => "professional",
            EducationLevel::AdultLearning => "adult-learning",
            EducationLevel::Other(value) => value,
        }
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "elementary" => EducationLevel::Elementary,
            "middle-school" => EducationLevel::MiddleSchool,
            "high-school" => EducationLevel::HighSchool,
            "college" => EducationLevel::College,
            "graduate" => EducationLevel::Graduate,
            "professional" => EducationLevel::Professional,
            "adult-learning" => EducationLevel::AdultLearning,
            _ => EducationLevel::Other(value),
        }
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        value.as_str().to_string()
    }
}

impl Default for EducationLevel {
    fn default() -> Self {
        EducationLevel::College
    }
}

/// The user's primary teaching style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeachingStyle {
    TraditionalLecture,
    Constructivist,
    DirectInstruction,
    InquiryBased,
    FlippedClassroom,
    ProjectBased,
    CompetencyBased,
    CulturallyResponsive,
    MixedApproach,
    /// Unrecognized wire value, preserved as-is
    Other(String),
}

impl TeachingStyle {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            TeachingStyle::TraditionalLecture => "traditional-lecture",
            TeachingStyle::Constructivist => "constructivist",
            TeachingStyle::DirectInstruction => "direct-instruction",
            TeachingStyle::InquiryBased => "inquiry-based",
            TeachingStyle::FlippedClassroom => "flipped-classroom",
            TeachingStyle::ProjectBased => "project-based",
            TeachingStyle::CompetencyBased => "competency-based",
            TeachingStyle::CulturallyResponsive => "culturally-responsive",
            TeachingStyle::MixedApproach => "mixed-approach",
            TeachingStyle::Other(value) => value,
        }
    }
}

impl From<String> for TeachingStyle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "traditional-lecture" => TeachingStyle::TraditionalLecture,
            "constructivist" => TeachingStyle::Constructivist,
            "direct-instruction" => TeachingStyle::DirectInstruction,
            "inquiry-based" => TeachingStyle::InquiryBased,
            "flipped-classroom" => TeachingStyle::FlippedClassroom,
            "project-based" => TeachingStyle::ProjectBased,
            "competency-based" => TeachingStyle::CompetencyBased,
            "culturally-responsive" => TeachingStyle::CulturallyResponsive,
            "mixed-approach" => TeachingStyle::MixedApproach,
            _ => TeachingStyle::Other(value),
        }
    }
}

impl From<TeachingStyle> for String {
    fn from(value: TeachingStyle) -> Self {
        value.as_str().to_string()
    }
}

impl Default for TeachingStyle {
    fn default() -> Self {
        TeachingStyle::MixedApproach
    }
}

/// How the user wants AI integrated into generated content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AiIntegrationPreference {
    AiEnhanced,
    AiResistant,
    AiLiterate,
    MixedApproach,
    ContextDependent,
    /// Unrecognized wire value, preserved as-is
    Other(String),
}

impl AiIntegrationPreference {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            AiIntegrationPreference::AiEnhanced => "ai-enhanced",
            AiIntegrationPreference::AiResistant => "ai-resistant",
            AiIntegrationPreference::AiLiterate => "ai-literate",
            AiIntegrationPreference::MixedApproach => "mixed-approach",
            AiIntegrationPreference::ContextDependent => "context-dependent",
            AiIntegrationPreference::Other(value) => value,
        }
    }
}

impl From<String> for AiIntegrationPreference {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ai-enhanced" => AiIntegrationPreference::AiEnhanced,
            "ai-resistant" => AiIntegrationPreference::AiResistant,
            "ai-literate" => AiIntegrationPreference::AiLiterate,
            "mixed-approach" => AiIntegrationPreference::MixedApproach,
            "context-dependent" => AiIntegrationPreference::ContextDependent,
            _ => AiIntegrationPreference::Other(value),
        }
    }
}

impl From<AiIntegrationPreference> for String {
    fn from(value: AiIntegrationPreference) -> Self {
        value.as_str().to_string()
    }
}

impl Default for AiIntegrationPreference {
    fn default() -> Self {
        AiIntegrationPreference::MixedApproach
    }
}

/// Complexity of generated content (not to be confused with
/// [`FormComplexity`], which controls form visibility)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentComplexity {
    Basic,
    Intermediate,
    Advanced,
    /// Unrecognized wire value, preserved as-is
    Other(String),
}

impl ContentComplexity {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            ContentComplexity::Basic => "basic",
            ContentComplexity::Intermediate => "intermediate",
            ContentComplexity::Advanced => "advanced",
            ContentComplexity::Other(value) => value,
        }
    }
}

impl From<String> for ContentComplexity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "basic" => ContentComplexity::Basic,
            "intermediate" => ContentComplexity::Intermediate,
            "advanced" => ContentComplexity::Advanced,
            _ => ContentComplexity::Other(value),
        }
    }
}

impl From<ContentComplexity> for String {
    fn from(value: ContentComplexity) -> Self {
        value.as_str().to_string()
    }
}

impl Default for ContentComplexity {
    fn default() -> Self {
        ContentComplexity::Intermediate
    }
}

/// Form complexity tier controlling which settings fields are visible
///
/// Tiers form a total order: `Essential < Enhanced < Advanced`. Variant
/// declaration order carries the derived `Ord`. Unlike the other wire
/// enums this one is strict about its three values; an unrecognized tier
/// string on import is defaulted to `Essential` rather than preserved,
/// because the visibility resolver needs the total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormComplexity {
    Essential,
    Enhanced,
    Advanced,
}

impl FormComplexity {
    /// Ordinal used for tier comparison (essential=0, enhanced=1,
    /// advanced=2)
    pub fn ordinal(self) -> u8 {
        match self {
            FormComplexity::Essential => 0,
            FormComplexity::Enhanced => 1,
            FormComplexity::Advanced => 2,
        }
    }

    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            FormComplexity::Essential => "essential",
            FormComplexity::Enhanced => "enhanced",
            FormComplexity::Advanced => "advanced",
        }
    }
}

impl From<String> for FormComplexity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "essential" => FormComplexity::Essential,
            "enhanced" => FormComplexity::Enhanced,
            "advanced" => FormComplexity::Advanced,
            // Unknown tier: fall back to the lowest tier instead of
            // rejecting the whole import
            _ => FormComplexity::Essential,
        }
    }
}

impl From<FormComplexity> for String {
    fn from(value: FormComplexity) -> Self {
        value.as_str().to_string()
    }
}

impl Default for FormComplexity {
    fn default() -> Self {
        FormComplexity::Essential
    }
}

/// The user's teaching profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Contact email; `None` means never provided, not an error
    pub email: Option<String>,
    /// Institution name; `None` means never provided
    pub institution: Option<String>,
    /// Subject area taught
    pub subject: String,
    /// Education level of the audience
    pub level: EducationLevel,
    /// Primary teaching style
    pub teaching_style: TeachingStyle,
    /// AI integration preference
    pub ai_preference: AiIntegrationPreference,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: None,
            institution: None,
            subject: String::new(),
            level: EducationLevel::default(),
            teaching_style: TeachingStyle::default(),
            ai_preference: AiIntegrationPreference::default(),
        }
    }
}

/// Answer-key sub-options, meaningful while
/// [`ContentDefaults::include_answer_keys`] is on but retained either way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerKeyOptions {
    /// Include detailed explanations for answers
    pub include_explanations: bool,
    /// Mark question difficulty levels
    pub include_difficulty: bool,
    /// Suggest point values for each question
    pub include_points: bool,
}

impl Default for AnswerKeyOptions {
    fn default() -> Self {
        Self {
            include_explanations: true,
            include_difficulty: true,
            include_points: false,
        }
    }
}

/// Instructor-guide sub-options, meaningful while
/// [`ContentDefaults::include_instructor_guides`] is on but retained
/// either way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorGuideOptions {
    /// Suggested timing for each section
    pub include_timing: bool,
    /// Grading tips and common mistakes
    pub include_grading_tips: bool,
    /// Discussion prompts for reviewing answers
    pub include_discussion_prompts: bool,
    /// Extension activities for advanced students
    pub include_extensions: bool,
}

impl Default for InstructorGuideOptions {
    fn default() -> Self {
        Self {
            include_timing: true,
            include_grading_tips: true,
            include_discussion_prompts: false,
            include_extensions: false,
        }
    }
}

/// Content-generation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDefaults {
    /// Default lesson duration, one of [`DURATIONS`]
    pub duration: String,
    /// Default content complexity
    pub complexity: ContentComplexity,
    /// Content types generated by default; built-in names plus any custom
    /// ones
    pub content_types: Vec<String>,
    /// Generate answer keys
    pub include_answer_keys: bool,
    /// Generate instructor guides
    pub include_instructor_guides: bool,
    /// Generate rubrics
    pub include_rubrics: bool,
    /// Generate accessibility features
    pub include_accessibility_features: bool,
    /// Answer-key sub-options; `None` means the documented defaults apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_key_options: Option<AnswerKeyOptions>,
    /// Instructor-guide sub-options; `None` means the documented defaults
    /// apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_guide_options: Option<InstructorGuideOptions>,
}

impl Default for ContentDefaults {
    fn default() -> Self {
        Self {
            duration: "50 minutes".to_string(),
            complexity: ContentComplexity::default(),
            content_types: vec![
                "Slides".to_string(),
                "InstructorNotes".to_string(),
                "Worksheet".to_string(),
            ],
            include_answer_keys: true,
            include_instructor_guides: true,
            include_rubrics: false,
            include_accessibility_features: false,
            answer_key_options: None,
            instructor_guide_options: None,
        }
    }
}

/// UI presentation preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiPreferences {
    /// Form complexity tier gating field visibility
    pub form_complexity: FormComplexity,
    /// Show advanced options by default
    pub show_advanced_options: bool,
    /// Auto-save settings changes
    pub auto_save_settings: bool,
    /// Use saved settings by default when generating content
    pub use_settings_by_default: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            form_complexity: FormComplexity::Essential,
            show_advanced_options: false,
            auto_save_settings: true,
            use_settings_by_default: true,
        }
    }
}

/// A user-defined content template managed by the template editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomTemplate {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Content type this template applies to
    pub content_type: String,
    /// Template body
    pub template: String,
}

impl Default for CustomTemplate {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            content_type: String::new(),
            template: String::new(),
        }
    }
}

/// Advanced extension block: collaborator-owned data carried by the
/// aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSettings {
    /// AI customization produced by the integration wizard; the schema
    /// belongs to the wizard, this core stores it opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_customization: Option<serde_json::Value>,
    /// Custom templates managed by the template editor
    pub custom_templates: Vec<CustomTemplate>,
    /// Custom content-type names beyond [`BUILTIN_CONTENT_TYPES`]
    pub custom_content_types: Vec<String>,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            ai_customization: None,
            custom_templates: Vec::new(),
            custom_content_types: Vec::new(),
        }
    }
}

/// Result handed back by the teaching-style detection collaborator
///
/// The core consumes only `primary_style`, via a profile partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingStyleDetectionResult {
    /// Detected primary style
    pub primary_style: TeachingStyle,
    /// Detector confidence in the 0.0..=1.0 range
    pub confidence: f32,
}

/// The settings aggregate root: the unit of persistence and of
/// export/import
///
/// Created with defaults on first use, mutated only through
/// domain-scoped partial updates, and replaced wholesale on import.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Teaching profile
    pub profile: UserProfile,
    /// Content-generation defaults
    pub defaults: ContentDefaults,
    /// UI presentation preferences
    pub preferences: UiPreferences,
    /// Advanced extension block
    pub advanced: AdvancedSettings,
}
