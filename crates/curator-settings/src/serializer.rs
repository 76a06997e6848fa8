//! Settings export/import
//!
//! The aggregate serializes to pretty-printed JSON, the format the
//! desktop app offers as a downloadable artifact. Import is strict about
//! structure (malformed JSON or a wrong top-level shape fails) but
//! permissive about content: unrecognized enum strings are preserved and
//! absent optional fields are defaulted, so files survive schema drift in
//! both directions.

use crate::error::{SettingsError, SettingsResult};
use crate::types::Settings;

/// Base name of the export artifact
pub const EXPORT_FILE_BASENAME: &str = "curriculum-curator-settings";

/// Extension of the export artifact
pub const EXPORT_FILE_EXTENSION: &str = "json";

/// Full file name of the export artifact
pub fn export_file_name() -> String {
    format!("{}.{}", EXPORT_FILE_BASENAME, EXPORT_FILE_EXTENSION)
}

/// Serialize the full aggregate to pretty JSON
///
/// Round-trip law: `import(&export(s)?)? == s` for every valid aggregate.
pub fn export(settings: &Settings) -> SettingsResult<String> {
    serde_json::to_string_pretty(settings)
        .map_err(|e| SettingsError::serialization(e.to_string()))
}

/// Parse an exported payload back into a full aggregate
///
/// Fails only when the payload is not well-formed JSON or does not
/// resolve into the settings shape. The caller keeps its previous
/// settings on failure (replace-or-keep).
pub fn import(payload: &str) -> SettingsResult<Settings> {
    serde_json::from_str(payload).map_err(|e| SettingsError::deserialization(e.to_string()))
}
