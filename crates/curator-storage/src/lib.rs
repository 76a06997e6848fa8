//! Curriculum Curator Settings Persistence
//!
//! File-backed implementation of the settings core's persistence gateway:
//! cross-platform path resolution, async load/save of the settings
//! aggregate, and helpers for writing/reading export artifacts.

pub mod error;
pub mod gateway;
pub mod paths;

pub use error::{StorageError, StorageResult};
pub use gateway::{read_import_file, write_export_file, FileSettingsGateway};
pub use paths::PathResolver;
