//! Record-type references from queries and procedures.

use crate::model::{ProcedureOutput, WizardState};

/// One message per query or procedure reference that names no existing
/// record type. Never an error: generation points at the stale name.
pub fn reference_warnings(state: &WizardState) -> Vec<String> {
    let exists = |name: &str| state.record_type(name).is_some();
    let mut warnings = Vec::new();

    for query in &state.query_methods {
        if query.returns_record_type.is_empty() {
            warnings.push(format!("query '{}' does not name a record type to return", query.name));
        } else if !exists(&query.returns_record_type) {
            warnings.push(format!(
                "query '{}' returns unknown record type '{}'",
                query.name, query.returns_record_type
            ));
        }
    }

    for procedure in &state.procedure_methods {
        for name in procedure.referenced_record_types() {
            if !exists(name) {
                warnings.push(format!(
                    "procedure '{}' references unknown record type '{}'",
                    procedure.name, name
                ));
            }
        }
        if procedure.output_type == ProcedureOutput::Record && procedure.output_record_type().is_none() {
            warnings.push(format!(
                "procedure '{}' returns a record but names no record type; its output is omitted",
                procedure.name
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType, ProcedureMethod, QueryMethod, RecordType};

    fn state() -> WizardState {
        let mut state = WizardState::new();
        state.app_info.domain = "example.com".to_string();
        state
            .record_types
            .push(RecordType::new("post").with_field(Field::new("text", FieldType::Text)));
        state
    }

    fn query(returns: &str) -> QueryMethod {
        QueryMethod {
            id: String::new(),
            name: "getThing".to_string(),
            description: String::new(),
            returns_record_type: returns.to_string(),
            returns_list: false,
        }
    }

    #[test]
    fn test_resolved_references_are_silent() {
        let mut state = state();
        state.query_methods.push(query("post"));
        state.procedure_methods.push(ProcedureMethod {
            id: String::new(),
            name: "publish".to_string(),
            description: String::new(),
            input_record_type: Some("post".to_string()),
            output_type: ProcedureOutput::Record,
            output_record_type: Some("post".to_string()),
        });
        assert!(reference_warnings(&state).is_empty());
    }

    #[test]
    fn test_dangling_references_warn() {
        let mut state = state();
        state.query_methods.push(query("comment"));
        state.query_methods.push(query(""));
        state.procedure_methods.push(ProcedureMethod {
            id: String::new(),
            name: "archive".to_string(),
            description: String::new(),
            input_record_type: Some("draft".to_string()),
            output_type: ProcedureOutput::Record,
            output_record_type: None,
        });

        let warnings = reference_warnings(&state);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("'comment'"));
        assert!(warnings[2].contains("'draft'"));
        assert!(warnings[3].contains("output is omitted"));
    }
}
