//! Curriculum Curator Settings Core
//!
//! This crate provides the settings data model for Curriculum Curator,
//! including the complexity-tiered visibility resolver, the partial-update
//! merge engine, and JSON export/import for the whole aggregate.
//!
//! The aggregate root is [`Settings`], which owns a teaching profile,
//! content-generation defaults, UI preferences, and an advanced extension
//! block. Mutation happens exclusively through domain-scoped partial
//! updates applied by [`SettingsStore`].

pub mod error;
pub mod merge;
pub mod registry;
pub mod serializer;
pub mod store;
pub mod types;
pub mod visibility;

pub use error::{SettingsError, SettingsResult};
pub use merge::{
    AdvancedUpdate, AnswerKeyOptionsUpdate, DefaultsUpdate, InstructorGuideOptionsUpdate,
    PreferencesUpdate, ProfileUpdate, SettingsMerger,
};
pub use registry::SettingField;
pub use store::{GatewayError, PersistenceGateway, SettingsStore};
pub use types::{
    AdvancedSettings, AiIntegrationPreference, AnswerKeyOptions, ContentComplexity,
    ContentDefaults, CustomTemplate, EducationLevel, FormComplexity, InstructorGuideOptions,
    Settings, TeachingStyle, TeachingStyleDetectionResult, UiPreferences, UserProfile,
};
