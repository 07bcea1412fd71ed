//! Paths of the generated file set and the import specifiers between them.

use std::path::{Component, Path};

pub const PACKAGE_JSON: &str = "package.json";
pub const VITE_CONFIG: &str = "vite.config.ts";
pub const TSCONFIG: &str = "tsconfig.json";
pub const INDEX_HTML: &str = "index.html";
pub const STYLES: &str = "styles.css";
pub const APP_ENTRY: &str = "app.ts";

pub const AUTH: &str = "services/Auth.ts";
pub const TYPES: &str = "services/types.ts";
pub const STORE: &str = "services/Store.ts";
pub const API: &str = "services/API.ts";
pub const UI_STATE: &str = "services/UIState.ts";
pub const UI_COMPONENTS: &str = "services/UIComponents.ts";
pub const NAVIGATION: &str = "services/Navigation.ts";
pub const SESSION_MANAGER: &str = "services/SessionManager.ts";

pub const LIST_VIEW: &str = "services/views/ListView.ts";
pub const DETAIL_VIEW: &str = "services/views/DetailView.ts";
pub const FORM_VIEW: &str = "services/views/FormView.ts";

pub const README: &str = "README.md";

/// Lexicon path mirroring a namespaced identifier:
/// `com.example.todo` lives at `lexicons/com/example/todo.json`.
pub fn lexicon_path(nsid: &str) -> String {
    format!("lexicons/{}.json", nsid.replace('.', "/"))
}

/// Module specifier that `from` uses to import `to`.
///
/// Both are paths in the generated tree. The extension is dropped and the
/// result always starts with `./` or `../`.
pub fn import_path(from: &str, to: &str) -> String {
    let target = Path::new(to).with_extension("");
    let base = Path::new(from).parent().unwrap_or_else(|| Path::new(""));

    let relative = match pathdiff::diff_paths(&target, base) {
        Some(rel) => rel,
        None => return format!("./{}", target.display()),
    };

    let segments: Vec<String> = relative
        .components()
        .map(|c| match c {
            Component::ParentDir => "..".to_string(),
            other => other.as_os_str().to_string_lossy().into_owned(),
        })
        .collect();
    let joined = segments.join("/");

    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_path() {
        assert_eq!(lexicon_path("com.example.todo"), "lexicons/com/example/todo.json");
    }

    #[test]
    fn test_import_path_same_directory() {
        assert_eq!(import_path(API, TYPES), "./types");
        assert_eq!(import_path(NAVIGATION, STORE), "./Store");
    }

    #[test]
    fn test_import_path_into_subdirectory() {
        assert_eq!(import_path(APP_ENTRY, STORE), "./services/Store");
        assert_eq!(import_path(NAVIGATION, LIST_VIEW), "./views/ListView");
    }

    #[test]
    fn test_import_path_to_parent() {
        assert_eq!(import_path(LIST_VIEW, TYPES), "../types");
        assert_eq!(import_path(FORM_VIEW, API), "../API");
    }
}
