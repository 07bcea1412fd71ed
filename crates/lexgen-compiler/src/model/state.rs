//! The wizard state aggregate and its persisted JSON form.
//!
//! The builder saves this document after every step. The engine only ever
//! reads it; editing cursors (`currentStep`, `currentRecordTypeIndex`) are
//! carried through untouched so a saved file can be handed back to the UI.

use std::path::Path;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{ProcedureMethod, QueryMethod, RecordType};
use crate::diagnostic::CompilerError;

/// Current wizard-state format version.
pub const STATE_VERSION: &str = "1.0";

/// Saved states older than this are reported as stale.
pub const STALE_DAYS: i64 = 30;

/// App metadata from the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppInfo {
    pub app_name: String,
    /// Seed of every namespaced identifier.
    pub domain: String,
    pub description: String,
    pub author_name: String,
}

/// Where the generated files go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMethod {
    #[default]
    #[serde(rename = "zip", alias = "archive")]
    Archive,
    #[serde(rename = "github", alias = "remote-repository")]
    RemoteRepository,
}

/// Display configuration of the generated app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Record type driving the list/detail/form views.
    pub primary_record_type: String,

    /// Fields shown per item in the list view. `None` or empty falls back to
    /// the first three fields of the primary record type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_display_fields: Option<Vec<String>>,

    pub output_method: OutputMethod,
}

/// Everything the wizard collected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardState {
    pub version: String,
    pub last_saved: String,
    pub current_step: u32,
    pub current_record_type_index: usize,
    pub app_info: AppInfo,
    pub record_types: Vec<RecordType>,
    pub query_methods: Vec<QueryMethod>,
    pub procedure_methods: Vec<ProcedureMethod>,
    pub app_config: AppConfig,
}

/// A state read from disk together with its freshness.
#[derive(Debug, Clone)]
pub struct LoadedState {
    pub state: WizardState,
    pub is_stale: bool,
}

impl WizardState {
    /// The empty state a fresh wizard session starts from.
    pub fn new() -> Self {
        Self {
            version: STATE_VERSION.to_string(),
            last_saved: now_timestamp(),
            current_step: 1,
            ..Default::default()
        }
    }

    /// Looks up a record type by exact name.
    pub fn record_type(&self, name: &str) -> Option<&RecordType> {
        self.record_types.iter().find(|r| r.name == name)
    }

    /// The app config used for generation: the primary record type defaults
    /// to the first record type when none was picked.
    pub fn effective_config(&self) -> AppConfig {
        let mut config = self.app_config.clone();
        if config.primary_record_type.is_empty() {
            if let Some(first) = self.record_types.first() {
                config.primary_record_type = first.name.clone();
            }
        }
        config
    }

    /// Whether `last_saved` lies more than [`STALE_DAYS`] before `now`.
    /// Unparseable timestamps count as fresh.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        match DateTime::parse_from_rfc3339(&self.last_saved) {
            Ok(saved) => now.signed_duration_since(saved.with_timezone(&Utc)) > Duration::days(STALE_DAYS),
            Err(_) => false,
        }
    }
}

/// Parses a wizard state from its JSON text.
pub fn parse_state(json: &str, path: &Path) -> Result<WizardState, CompilerError> {
    serde_json::from_str(json).map_err(|e| CompilerError::StateParseFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads a wizard state from disk.
pub fn load_state(path: &Path) -> Result<LoadedState, CompilerError> {
    let content = std::fs::read_to_string(path).map_err(|e| CompilerError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let state = parse_state(&content, path)?;
    let is_stale = state.is_stale_at(Utc::now());
    if is_stale {
        tracing::warn!(path = %path.display(), last_saved = %state.last_saved, "wizard state is stale");
    }

    Ok(LoadedState { state, is_stale })
}

/// Saves a wizard state to disk, refreshing its `lastSaved` timestamp.
pub fn save_state(path: &Path, state: &mut WizardState) -> Result<(), CompilerError> {
    state.last_saved = now_timestamp();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CompilerError::IoError {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    let content = serde_json::to_string_pretty(state).map_err(|e| CompilerError::IoError {
        path: path.to_path_buf(),
        message: format!("Failed to serialize wizard state: {}", e),
    })?;

    std::fs::write(path, content).map_err(|e| CompilerError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
