//! Shared type declarations module.

use crate::codegen::ts_types::format_field;
use crate::model::RecordType;
use crate::naming::RecordNames;

/// Generates services/types.ts.
///
/// Per record type: a data interface (its fields plus `uri` and `cid`) and a
/// paginated response interface. Then the shared pagination and creation
/// shapes and the store shape with one list per record type.
pub fn generate_types_ts(records: &[RecordType], domain: &str) -> String {
    let mut output = String::new();

    output.push_str("/**\n * Shared type definitions for the app\n */\n\n");

    for record in records {
        let names = RecordNames::new(&record.name, domain);

        output.push_str(&format!("/** {} ({}) */\n", names.pascal, names.nsid));
        output.push_str(&format!("export interface {} {{\n", names.data_type()));
        output.push_str("  uri: string;\n");
        output.push_str("  cid: string;\n");
        for field in &record.fields {
            output.push_str(&format!("  {};\n", format_field(field)));
        }
        output.push_str("}\n\n");
    }

    output.push_str(
        r#"export interface PaginationOptions {
  limit?: number;
  cursor?: string | null;
  reverse?: boolean;
}

export interface CreateRecordResponse {
  uri: string;
  cid: string;
  validationStatus?: string;
}

"#,
    );

    for record in records {
        let names = RecordNames::new(&record.name, domain);
        output.push_str(&format!("export interface {} {{\n", names.response_type()));
        output.push_str(&format!("  {}: {}[];\n", names.collection_key(), names.data_type()));
        output.push_str("  cursor: string | null;\n");
        output.push_str("  total: number;\n");
        output.push_str("}\n\n");
    }

    output.push_str("export interface StoreType {\n");
    for record in records {
        let names = RecordNames::new(&record.name, domain);
        output.push_str(&format!("  {}: {}[];\n", names.collection_key(), names.data_type()));
    }
    output.push_str("}\n");

    output
}
