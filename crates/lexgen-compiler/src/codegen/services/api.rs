//! Record CRUD client module.
//!
//! Every record type gets four functions against the user's repository:
//!
//! - `create<Name>(data)`: `createRecord` in the record's collection
//! - `update<Name>(uri, data)`: `putRecord`, keyed by the last URI segment
//! - `delete<Name>(uri)`: `deleteRecord`, keyed the same way
//! - `get<Name>s(options)`: `listRecords`, paginated
//!
//! The list function rejects a `limit` outside `1..=100` before touching the
//! network, and maps each raw record into the declared data shape.

use crate::codegen::paths::{import_path, API, AUTH, TYPES};
use crate::codegen::ts_types::{comment_text, js_str, prop_access, prop_key};
use crate::field_types::{ts_missing_default, ts_type};
use crate::model::{Field, RecordType};
use crate::naming::RecordNames;

/// Default page size of generated list functions.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Largest page size the repository API accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Generates services/API.ts.
pub fn generate_api_ts(records: &[RecordType], domain: &str) -> String {
    let mut output = String::new();

    output.push_str("import { OAuthSession } from '@atproto/oauth-client-browser';\n");
    output.push_str("import { Agent } from '@atproto/api';\n");
    output.push_str(&format!("import {{ session }} from '{}';\n", import_path(API, AUTH)));
    output.push_str("import {\n  PaginationOptions,\n  CreateRecordResponse,\n");
    for record in records {
        let names = RecordNames::new(&record.name, domain);
        output.push_str(&format!("  {},\n", names.data_type()));
        output.push_str(&format!("  {},\n", names.response_type()));
    }
    output.push_str(&format!("}} from '{}';\n\n", import_path(API, TYPES)));

    output.push_str(
        r#"// Helper: Validate session exists
function ensureSession(): OAuthSession {
  if (!session) {
    throw new Error('User not logged in. Please sign in first.');
  }
  return session;
}

// Helper: Create agent instance
function createAgent(): Agent {
  return new Agent(ensureSession());
}

"#,
    );

    for record in records {
        generate_record_crud(&mut output, record, domain);
    }

    output
}

fn generate_record_crud(output: &mut String, record: &RecordType, domain: &str) {
    let names = RecordNames::new(&record.name, domain);
    let label = comment_text(&record.name);
    let collection = js_str(&names.nsid);
    let data = names.data_type();

    // Create
    output.push_str(&format!(
        r#"/**
 * Create a new {label} record
 */
export async function {create}(data: Omit<{data}, 'uri' | 'cid'>): Promise<CreateRecordResponse> {{
  const record: Record<string, unknown> = {{
    $type: {collection},
    ...data,
  }};

  const agent = createAgent();
  const response = await agent.com.atproto.repo.createRecord({{
    repo: ensureSession().sub,
    collection: {collection},
    record: record,
  }});

  return {{
    uri: response.data.uri,
    cid: response.data.cid,
    validationStatus: response.data.validationStatus,
  }};
}}

"#,
        label = label,
        create = names.create_fn(),
        data = data,
        collection = collection,
    ));

    // Update
    output.push_str(&format!(
        r#"/**
 * Update an existing {label} record
 */
export async function {update}(uri: string, data: Omit<{data}, 'uri' | 'cid'>): Promise<CreateRecordResponse> {{
  const uriParts = uri.split('/');
  const rkey = uriParts[uriParts.length - 1];

  const record: Record<string, unknown> = {{
    $type: {collection},
    ...data,
  }};

  const agent = createAgent();
  const response = await agent.com.atproto.repo.putRecord({{
    repo: ensureSession().sub,
    collection: {collection},
    rkey: rkey,
    record: record,
  }});

  return {{
    uri: response.data.uri,
    cid: response.data.cid,
    validationStatus: response.data.validationStatus,
  }};
}}

"#,
        label = label,
        update = names.update_fn(),
        data = data,
        collection = collection,
    ));

    // Delete
    output.push_str(&format!(
        r#"/**
 * Delete a {label} record
 */
export async function {delete}(uri: string): Promise<void> {{
  const uriParts = uri.split('/');
  const rkey = uriParts[uriParts.length - 1];

  const agent = createAgent();
  await agent.com.atproto.repo.deleteRecord({{
    repo: ensureSession().sub,
    collection: {collection},
    rkey: rkey,
  }});
}}

"#,
        label = label,
        delete = names.delete_fn(),
        collection = collection,
    ));

    // List
    output.push_str(&format!(
        r#"/**
 * Retrieve all {label} records
 */
export async function {list}(options: PaginationOptions = {{}}): Promise<{response}> {{
  const {{ limit = {default_limit}, cursor = null, reverse = false }} = options;

  if (limit < 1 || limit > {max_limit}) {{
    throw new Error('limit must be between 1 and {max_limit}');
  }}

  const agent = createAgent();

  const queryParams = {{
    repo: ensureSession().sub,
    collection: {collection},
    limit: limit,
    reverse: reverse,
    ...(cursor ? {{ cursor }} : {{}}),
  }};

  const response = await agent.com.atproto.repo.listRecords(queryParams);

  return {{
    {key}: response.data.records.map((record) => {{
      const value = record.value as Record<string, unknown>;
      return {{
        uri: record.uri,
        cid: record.cid,
"#,
        label = label,
        list = names.list_fn(),
        response = names.response_type(),
        default_limit = DEFAULT_PAGE_LIMIT,
        max_limit = MAX_PAGE_LIMIT,
        collection = collection,
        key = names.collection_key(),
    ));

    for field in &record.fields {
        output.push_str(&format!("        {},\n", field_mapping(field)));
    }

    output.push_str(
        r#"      };
    }),
    cursor: response.data.cursor ?? null,
    total: response.data.records.length,
  };
}

"#,
    );
}

/// One property of the object a raw listed record is mapped into.
fn field_mapping(field: &Field) -> String {
    let key = prop_key(&field.name);
    let raw = prop_access("value", &field.name);
    let typ = ts_type(field);

    if field.required {
        return format!("{}: {} as {}", key, raw, typ);
    }

    match ts_missing_default(field) {
        Some(default) => format!("{}: ({} as {} | undefined) ?? {}", key, raw, typ, default),
        None => format!("{}: {} as {} | undefined", key, raw, typ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    fn todo() -> RecordType {
        RecordType::new("todo")
            .with_field(Field::new("title", FieldType::Text).required())
            .with_field(Field::new("done", FieldType::Boolean))
            .with_field(Field::new("tags", FieldType::StringArray))
    }

    #[test]
    fn test_crud_functions_per_record() {
        let records = vec![todo(), RecordType::new("note").with_field(Field::new("body", FieldType::Text))];
        let ts = generate_api_ts(&records, "example.com");

        for name in ["Todo", "Note"] {
            assert!(ts.contains(&format!("export async function create{}(", name)));
            assert!(ts.contains(&format!("export async function update{}(uri: string", name)));
            assert!(ts.contains(&format!("export async function delete{}(uri: string)", name)));
            assert!(ts.contains(&format!("export async function get{}s(options: PaginationOptions = {{}})", name)));
        }
        assert!(ts.contains("import { session } from './Auth';"));
        assert!(ts.contains("  TodoData,\n  TodoResponse,\n  NoteData,\n  NoteResponse,\n} from './types';"));
    }

    #[test]
    fn test_collection_uses_namespaced_identifier() {
        let ts = generate_api_ts(&[todo()], "example.com");
        assert!(ts.contains("$type: 'com.example.todo',"));
        assert_eq!(ts.matches("collection: 'com.example.todo',").count(), 4);
    }

    #[test]
    fn test_pagination_bounds() {
        let ts = generate_api_ts(&[todo()], "example.com");
        assert!(ts.contains("const { limit = 50, cursor = null, reverse = false } = options;"));
        assert!(ts.contains("if (limit < 1 || limit > 100) {\n    throw new Error("));
        // The bounds check runs before the agent (and any network call) exists.
        assert!(ts.find("limit < 1").unwrap() < ts.find("const agent = createAgent();\n\n  const queryParams").unwrap());
    }

    #[test]
    fn test_rkey_from_last_uri_segment() {
        let ts = generate_api_ts(&[todo()], "example.com");
        assert_eq!(ts.matches("const rkey = uriParts[uriParts.length - 1];").count(), 2);
    }

    #[test]
    fn test_field_defaults() {
        let ts = generate_api_ts(&[todo()], "example.com");
        assert!(ts.contains("        title: value.title as string,\n"));
        assert!(ts.contains("        done: value.done as boolean | undefined,\n"));
        assert!(ts.contains("        tags: (value.tags as string[] | undefined) ?? [],\n"));
    }

    #[test]
    fn test_unusual_field_names_are_quoted() {
        let record = RecordType::new("event").with_field(Field::new("start-time", FieldType::Text).required());
        let ts = generate_api_ts(&[record], "example.com");
        assert!(ts.contains("'start-time': value['start-time'] as string,"));
    }
}
