//! Session manager module: profile display and initial data load.

use crate::codegen::paths::{import_path, API, AUTH, SESSION_MANAGER, STORE};
use crate::codegen::ts_types::js_str;
use crate::model::RecordType;
use crate::naming::RecordNames;

/// Generates services/SessionManager.ts.
///
/// `loadUserData` fetches the first page of every record type into the store.
pub fn generate_session_manager_ts(records: &[RecordType], domain: &str) -> String {
    let names: Vec<RecordNames> = records
        .iter()
        .map(|r| RecordNames::new(&r.name, domain))
        .collect();

    let list_fns: Vec<String> = names.iter().map(|n| n.list_fn()).collect();

    let mut loaders = String::new();
    for n in &names {
        let response = format!("{}Response", n.collection_key());
        loaders.push_str(&format!("\n    const {} = await {}();\n", response, n.list_fn()));
        loaders.push_str(&format!(
            "    storeManager.{}({}.{});\n",
            n.setter_fn(),
            response,
            n.collection_key()
        ));
        loaders.push_str(&format!(
            "    console.log('Loaded ' + {}.{}.length + ' ' + {});\n",
            response,
            n.collection_key(),
            js_str(&format!("{} records", n.raw))
        ));
    }

    format!(
        r#"/**
 * Session management for user authentication and data loading
 */

import {{ {list_fns} }} from '{api}';
import {{ storeManager }} from '{store}';
import {{
  restoreSession as restoreAuthSession,
  getUserProfile,
  getSession,
  SessionRestoreResult,
}} from '{auth}';

export async function updateUserInfo(): Promise<void> {{
  try {{
    const profile = await getUserProfile();

    const userDisplayNameEl = document.getElementById('userDisplayName') as HTMLElement;
    const userHandleEl = document.getElementById('userHandle') as HTMLElement;
    const userDidEl = document.getElementById('userDid') as HTMLElement;

    userDisplayNameEl.textContent = profile.displayName;
    userHandleEl.textContent = profile.handle;
    userDidEl.textContent = profile.did;
  }} catch (error) {{
    console.error('Failed to update user info:', error);
  }}
}}

export async function loadUserData(): Promise<void> {{
  if (!getSession()) return;

  try {{{loaders}  }} catch (error) {{
    const errorMsg = error instanceof Error ? error.message : 'Unknown error';
    console.error('Failed to load user data:', errorMsg);
  }}
}}

export async function restoreSession(): Promise<SessionRestoreResult | null> {{
  try {{
    return await restoreAuthSession();
  }} catch (error) {{
    console.error('Session restoration error:', error);
    return null;
  }}
}}
"#,
        list_fns = list_fns.join(", "),
        api = import_path(SESSION_MANAGER, API),
        store = import_path(SESSION_MANAGER, STORE),
        auth = import_path(SESSION_MANAGER, AUTH),
        loaders = loaders,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType};

    #[test]
    fn test_loads_every_record_type() {
        let records = vec![
            RecordType::new("todo").with_field(Field::new("title", FieldType::Text)),
            RecordType::new("note").with_field(Field::new("body", FieldType::Text)),
        ];
        let ts = generate_session_manager_ts(&records, "example.com");

        assert!(ts.contains("import { getTodos, getNotes } from './API';"));
        assert!(ts.contains("    const todosResponse = await getTodos();\n    storeManager.setTodos(todosResponse.todos);\n"));
        assert!(ts.contains("storeManager.setNotes(notesResponse.notes);"));
    }

    #[test]
    fn test_record_name_is_quoted_in_log() {
        let records = vec![RecordType::new("Bob's item").with_field(Field::new("x", FieldType::Text))];
        let ts = generate_session_manager_ts(&records, "example.com");
        assert!(ts.contains(r"'Bob\'s item records'"));
    }
}
