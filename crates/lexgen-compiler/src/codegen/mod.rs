//! TypeScript app generation from a wizard state.
//!
//! Each emitter produces one file's full text; [`generate_all_files`] calls
//! them in a fixed order and collects the results. Emitters never fail on odd
//! input. The one hard precondition, at least one record type, is checked
//! here.

mod entry;
mod markup;
pub mod paths;
pub mod project;
pub mod services;
mod ts_types;
pub mod views;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::GeneratorOptions;
use crate::diagnostic::CompilerError;
use crate::lexicon::{emit_procedure_schema, emit_query_schema, emit_record_schema, LexiconDoc};
use crate::model::{AppConfig, Field, RecordType, WizardState};
use crate::naming::RecordNames;
use crate::validate::reference_warnings;

pub use entry::generate_app_ts;
pub use markup::{generate_index_html, generate_styles};

/// Fields shown per list item when none were picked.
pub const DEFAULT_LIST_FIELDS: usize = 3;

/// Generated files, keyed by path relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCode {
    files: Vec<(String, String)>,
}

impl GeneratedCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file. A path that is already present keeps its position and
    /// takes the new content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        debug!(path = %path, bytes = content.len(), "emitted file");

        match self.files.iter_mut().find(|(existing, _)| *existing == path) {
            Some(slot) => {
                warn!(path = %path, "generated path emitted twice; keeping the later content");
                slot.1 = content;
            }
            None => self.files.push((path, content)),
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(p, _)| p.as_str())
    }

    /// `(path, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Writes every file under `root`, creating parent directories.
    pub fn write_to(&self, root: &Path) -> Result<(), CompilerError> {
        std::fs::create_dir_all(root).map_err(|e| CompilerError::io(root, e.to_string()))?;

        for (relative, content) in self.iter() {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CompilerError::io(parent, e.to_string()))?;
            }
            std::fs::write(&path, content).map_err(|e| CompilerError::io(&path, e.to_string()))?;
            debug!(path = %path.display(), "wrote file");
        }

        Ok(())
    }
}

/// The record type driving the entry point, navigation and views: the one
/// named by `primary_record_type`, else the first. `None` only when there are
/// no record types.
pub fn primary_record<'a>(records: &'a [RecordType], config: &AppConfig) -> Option<&'a RecordType> {
    records
        .iter()
        .find(|r| r.name == config.primary_record_type)
        .or_else(|| records.first())
}

/// Fields of `primary` shown in the list view.
///
/// Names from `list_display_fields` that match no field are skipped. An
/// unset or empty selection falls back to the first three fields.
pub fn display_fields<'a>(primary: &'a RecordType, config: &AppConfig) -> Vec<&'a Field> {
    match config.list_display_fields.as_deref() {
        Some(names) if !names.is_empty() => names
            .iter()
            .filter_map(|name| {
                let field = primary.field(name);
                if field.is_none() {
                    debug!(record = %primary.name, field = %name, "display field not found; skipped");
                }
                field
            })
            .collect(),
        _ => primary.fields.iter().take(DEFAULT_LIST_FIELDS).collect(),
    }
}

/// Generates every file of the app.
///
/// `config` is the effective app configuration (see
/// [`WizardState::effective_config`]). The state is only read.
pub fn generate_all_files(
    state: &WizardState,
    config: &AppConfig,
    options: &GeneratorOptions,
) -> Result<GeneratedCode, CompilerError> {
    let records = state.record_types.as_slice();
    let domain = state.app_info.domain.as_str();

    let primary = primary_record(records, config).ok_or(CompilerError::NoRecordTypes)?;
    if !config.primary_record_type.is_empty() && primary.name != config.primary_record_type {
        warn!(
            requested = %config.primary_record_type,
            using = %primary.name,
            "primary record type not found; using the first record type"
        );
    }
    for warning in reference_warnings(state) {
        warn!("{}", warning);
    }

    let primary_names = RecordNames::new(&primary.name, domain);
    let mut files = GeneratedCode::new();

    // Root files
    let package_json = project::generate_package_json(&state.app_info).map_err(|e| {
        CompilerError::CodegenFailed {
            path: paths::PACKAGE_JSON.to_string(),
            message: e.to_string(),
        }
    })?;
    files.insert(paths::PACKAGE_JSON, package_json);
    files.insert(paths::VITE_CONFIG, project::generate_vite_config());
    files.insert(paths::TSCONFIG, project::generate_tsconfig());
    files.insert(paths::INDEX_HTML, generate_index_html(&state.app_info));
    files.insert(paths::STYLES, generate_styles());
    files.insert(paths::APP_ENTRY, generate_app_ts(&primary_names));

    // Services
    files.insert(paths::AUTH, services::generate_auth_ts());
    files.insert(paths::TYPES, services::generate_types_ts(records, domain));
    files.insert(paths::STORE, services::generate_store_ts(records, domain));
    files.insert(paths::API, services::generate_api_ts(records, domain));
    files.insert(paths::UI_STATE, services::generate_ui_state_ts());
    files.insert(paths::UI_COMPONENTS, services::generate_ui_components_ts());
    files.insert(paths::NAVIGATION, services::generate_navigation_ts(&primary_names));
    files.insert(
        paths::SESSION_MANAGER,
        services::generate_session_manager_ts(records, domain),
    );

    // Views
    let shown = display_fields(primary, config);
    files.insert(
        paths::LIST_VIEW,
        views::generate_list_view_ts(primary, &primary_names, &shown),
    );
    files.insert(
        paths::DETAIL_VIEW,
        views::generate_detail_view_ts(primary, &primary_names),
    );
    files.insert(
        paths::FORM_VIEW,
        views::generate_form_view_ts(primary, &primary_names),
    );

    // Lexicons
    for record in records {
        insert_lexicon(&mut files, emit_record_schema(record, domain))?;
    }
    if options.method_lexicons {
        for query in &state.query_methods {
            insert_lexicon(&mut files, emit_query_schema(query, domain))?;
        }
        for procedure in &state.procedure_methods {
            insert_lexicon(&mut files, emit_procedure_schema(procedure, domain))?;
        }
    }

    files.insert(paths::README, project::generate_readme(state));

    info!(
        app = %state.app_info.app_name,
        files = files.len(),
        primary = %primary.name,
        "generated app"
    );

    Ok(files)
}

fn insert_lexicon(files: &mut GeneratedCode, doc: LexiconDoc) -> Result<(), CompilerError> {
    let path = paths::lexicon_path(&doc.id);
    let json = doc.to_json().map_err(|e| CompilerError::CodegenFailed {
        path: path.clone(),
        message: e.to_string(),
    })?;
    files.insert(path, json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldType, ProcedureMethod, ProcedureOutput, QueryMethod};

    fn state() -> WizardState {
        let mut state = WizardState::new();
        state.app_info.app_name = "Todo App".to_string();
        state.app_info.domain = "example.com".to_string();
        state.record_types.push(
            RecordType::new("todo")
                .with_field(Field::new("title", FieldType::Text).required())
                .with_field(Field::new("done", FieldType::Boolean))
                .with_field(Field::new("tags", FieldType::StringArray))
                .with_field(Field::new("notes", FieldType::Text)),
        );
        state.record_types.push(
            RecordType::new("note").with_field(Field::new("body", FieldType::Text).required()),
        );
        state
    }

    fn generate(state: &WizardState) -> GeneratedCode {
        generate_all_files(state, &state.effective_config(), &GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn test_file_order() {
        let files = generate(&state());
        let paths: Vec<&str> = files.paths().collect();
        assert_eq!(
            paths,
            vec![
                "package.json",
                "vite.config.ts",
                "tsconfig.json",
                "index.html",
                "styles.css",
                "app.ts",
                "services/Auth.ts",
                "services/types.ts",
                "services/Store.ts",
                "services/API.ts",
                "services/UIState.ts",
                "services/UIComponents.ts",
                "services/Navigation.ts",
                "services/SessionManager.ts",
                "services/views/ListView.ts",
                "services/views/DetailView.ts",
                "services/views/FormView.ts",
                "lexicons/com/example/todo.json",
                "lexicons/com/example/note.json",
                "README.md",
            ]
        );
    }

    #[test]
    fn test_no_record_types_is_rejected() {
        let mut state = state();
        state.record_types.clear();
        let err = generate_all_files(&state, &state.effective_config(), &GeneratorOptions::default())
            .unwrap_err();
        assert!(matches!(err, CompilerError::NoRecordTypes));
    }

    #[test]
    fn test_primary_record_selection() {
        let state = state();
        let mut config = state.effective_config();
        assert_eq!(primary_record(&state.record_types, &config).unwrap().name, "todo");

        config.primary_record_type = "note".to_string();
        assert_eq!(primary_record(&state.record_types, &config).unwrap().name, "note");

        config.primary_record_type = "missing".to_string();
        assert_eq!(primary_record(&state.record_types, &config).unwrap().name, "todo");

        assert!(primary_record(&[], &config).is_none());
    }

    #[test]
    fn test_views_follow_primary_record() {
        let mut state = state();
        state.app_config.primary_record_type = "note".to_string();
        let files = generate(&state);

        let list = files.get("services/views/ListView.ts").unwrap();
        assert!(list.contains("items: NoteData[]"));
        assert!(files.get("app.ts").unwrap().contains("'View All Notes'"));
        // Non-primary records still get types and CRUD.
        assert!(files.get("services/API.ts").unwrap().contains("export async function createTodo("));
    }

    #[test]
    fn test_display_fields() {
        let state = state();
        let primary = &state.record_types[0];
        let mut config = state.effective_config();

        let names = |fields: Vec<&Field>| fields.iter().map(|f| f.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(display_fields(primary, &config)), vec!["title", "done", "tags"]);

        config.list_display_fields = Some(vec!["notes".to_string(), "gone".to_string(), "title".to_string()]);
        assert_eq!(names(display_fields(primary, &config)), vec!["notes", "title"]);

        config.list_display_fields = Some(Vec::new());
        assert_eq!(display_fields(primary, &config).len(), 3);
    }

    #[test]
    fn test_method_lexicons_opt_in() {
        let mut state = state();
        state.query_methods.push(QueryMethod {
            id: String::new(),
            name: "listTodos".to_string(),
            description: String::new(),
            returns_record_type: "todo".to_string(),
            returns_list: true,
        });
        state.procedure_methods.push(ProcedureMethod {
            id: String::new(),
            name: "archive".to_string(),
            description: String::new(),
            input_record_type: Some("todo".to_string()),
            output_type: ProcedureOutput::Success,
            output_record_type: None,
        });

        let default = generate(&state);
        assert!(!default.contains("lexicons/com/example/listtodos.json"));

        let options = GeneratorOptions {
            method_lexicons: true,
            ..GeneratorOptions::default()
        };
        let files = generate_all_files(&state, &state.effective_config(), &options).unwrap();
        let paths: Vec<&str> = files.paths().collect();
        let note = paths.iter().position(|p| *p == "lexicons/com/example/note.json").unwrap();
        let query = paths.iter().position(|p| *p == "lexicons/com/example/listtodos.json").unwrap();
        let procedure = paths.iter().position(|p| *p == "lexicons/com/example/archive.json").unwrap();
        assert!(note < query && query < procedure);
        assert_eq!(paths.last(), Some(&"README.md"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let state = state();
        assert_eq!(generate(&state), generate(&state));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut files = GeneratedCode::new();
        files.insert("a", "1");
        files.insert("b", "2");
        files.insert("a", "3");
        assert_eq!(files.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_write_to_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut files = GeneratedCode::new();
        files.insert("services/views/ListView.ts", "export {};\n");
        files.insert("README.md", "# App\n");

        files.write_to(&dir.path().join("app")).unwrap();

        let list = std::fs::read_to_string(dir.path().join("app/services/views/ListView.ts")).unwrap();
        assert_eq!(list, "export {};\n");
        assert!(dir.path().join("app/README.md").is_file());
    }
}
