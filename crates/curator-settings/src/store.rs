//! Settings store: owner of the aggregate and its persistence seam
//!
//! The store is single-threaded and `&mut self`-driven: discrete user
//! actions apply one partial update at a time, so the aggregate is never
//! observed in a torn state. Persistence is a single-shot async call with
//! no retry; the caller keeps at most one save or import in flight.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{SettingsError, SettingsResult};
use crate::merge::{
    AdvancedUpdate, DefaultsUpdate, PreferencesUpdate, ProfileUpdate, SettingsMerger,
};
use crate::serializer;
use crate::types::{
    AdvancedSettings, ContentDefaults, CustomTemplate, Settings, TeachingStyleDetectionResult,
    UiPreferences, UserProfile,
};

/// Boxed error produced by a persistence gateway
pub type GatewayError = Box<dyn std::error::Error + Send + Sync>;

/// Durable save/load collaborator invoked by the store
///
/// Failures are surfaced to the caller, never retried; the in-memory
/// aggregate stays authoritative regardless of the persistence outcome.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Load previously persisted settings; `None` when nothing was ever
    /// saved
    async fn load(&self) -> Result<Option<Settings>, GatewayError>;

    /// Persist the full aggregate
    async fn save(&self, settings: &Settings) -> Result<(), GatewayError>;
}

/// Owner of the settings aggregate
pub struct SettingsStore<G: PersistenceGateway> {
    settings: Settings,
    gateway: G,
}

impl<G: PersistenceGateway> SettingsStore<G> {
    /// Load persisted settings through the gateway, falling back to
    /// defaults when nothing was saved yet
    pub async fn initialize(gateway: G) -> SettingsResult<Self> {
        let settings = match gateway.load().await.map_err(SettingsError::persistence)? {
            Some(settings) => {
                info!("Loaded persisted settings");
                settings
            }
            None => {
                info!("No persisted settings found, starting from defaults");
                Settings::default()
            }
        };

        Ok(Self { settings, gateway })
    }

    /// The full aggregate
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The teaching profile
    pub fn profile(&self) -> &UserProfile {
        &self.settings.profile
    }

    /// Content-generation defaults
    pub fn defaults(&self) -> &ContentDefaults {
        &self.settings.defaults
    }

    /// UI presentation preferences
    pub fn preferences(&self) -> &UiPreferences {
        &self.settings.preferences
    }

    /// Advanced extension block
    pub fn advanced(&self) -> &AdvancedSettings {
        &self.settings.advanced
    }

    /// Apply a partial update to the profile
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> SettingsResult<()> {
        SettingsMerger::apply_profile(&mut self.settings.profile, update);
        self.autosave().await
    }

    /// Apply a partial update to the content defaults
    pub async fn update_defaults(&mut self, update: DefaultsUpdate) -> SettingsResult<()> {
        SettingsMerger::apply_defaults(&mut self.settings.defaults, update);
        self.autosave().await
    }

    /// Apply a partial update to the UI preferences
    pub async fn update_preferences(&mut self, update: PreferencesUpdate) -> SettingsResult<()> {
        SettingsMerger::apply_preferences(&mut self.settings.preferences, update);
        self.autosave().await
    }

    /// Apply a partial update to the advanced block
    pub async fn update_advanced(&mut self, update: AdvancedUpdate) -> SettingsResult<()> {
        SettingsMerger::apply_advanced(&mut self.settings.advanced, update);
        self.autosave().await
    }

    /// Accept a detection result from the teaching-style collaborator
    ///
    /// Only the primary style is consumed, as a profile partial update.
    pub async fn apply_detected_style(
        &mut self,
        result: &TeachingStyleDetectionResult,
    ) -> SettingsResult<()> {
        debug!(
            style = result.primary_style.as_str(),
            confidence = result.confidence,
            "Applying detected teaching style"
        );
        self.update_profile(ProfileUpdate {
            teaching_style: Some(result.primary_style.clone()),
            ..ProfileUpdate::default()
        })
        .await
    }

    /// Accept the AI-integration wizard's output and persist immediately
    pub async fn apply_ai_customization(&mut self, customization: Value) -> SettingsResult<()> {
        self.settings.advanced.ai_customization = Some(customization);
        self.save().await
    }

    /// Replace the custom-template list
    ///
    /// The template editor persists templates itself; this only refreshes
    /// the in-memory aggregate.
    pub fn set_custom_templates(&mut self, templates: Vec<CustomTemplate>) {
        self.settings.advanced.custom_templates = templates;
    }

    /// Serialize the aggregate for export
    pub fn export(&self) -> SettingsResult<String> {
        serializer::export(&self.settings)
    }

    /// Replace the aggregate from an exported payload and persist
    ///
    /// Atomic replace-or-keep: a failed parse leaves the current settings
    /// untouched.
    pub async fn import(&mut self, payload: &str) -> SettingsResult<()> {
        let imported = match serializer::import(payload) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Settings import rejected: {e}");
                return Err(e);
            }
        };

        self.settings = imported;
        info!("Settings imported");
        self.save().await
    }

    /// Persist the aggregate through the gateway
    pub async fn save(&self) -> SettingsResult<()> {
        self.gateway
            .save(&self.settings)
            .await
            .map_err(SettingsError::persistence)?;
        debug!("Settings saved");
        Ok(())
    }

    async fn autosave(&self) -> SettingsResult<()> {
        if self.settings.preferences.auto_save_settings {
            self.save().await
        } else {
            Ok(())
        }
    }
}
