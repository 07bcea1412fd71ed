//! Query and procedure lexicons.

use super::{Body, DefKind, LexiconDoc, MainDef, Properties, SchemaNode};
use crate::model::{ProcedureMethod, ProcedureOutput, QueryMethod};
use crate::naming::nsid;

/// Builds the lexicon document of a query.
///
/// A list query responds with `{ items: [ref] }`, a single-record query with
/// the record reference itself. The referenced record type is not checked.
pub fn emit_query_schema(query: &QueryMethod, domain: &str) -> LexiconDoc {
    let record_ref = SchemaNode::reference(nsid(domain, &query.returns_record_type));

    let schema = if query.returns_list {
        let mut properties = Properties::new();
        properties.insert("items", SchemaNode::array(record_ref));
        SchemaNode::object(vec!["items".to_string()], properties)
    } else {
        record_ref
    };

    LexiconDoc::new(
        nsid(domain, &query.name),
        MainDef {
            kind: DefKind::Query,
            description: fallback(&query.description, "Query", &query.name),
            key: None,
            record: None,
            input: None,
            output: Some(Body::json(schema)),
        },
    )
}

/// Builds the lexicon document of a procedure.
///
/// Record output without a named record type produces no output body.
pub fn emit_procedure_schema(procedure: &ProcedureMethod, domain: &str) -> LexiconDoc {
    let input = procedure
        .input_record_type()
        .map(|name| Body::json(SchemaNode::reference(nsid(domain, name))));

    let output = match procedure.output_type {
        ProcedureOutput::Record => procedure
            .output_record_type()
            .map(|name| Body::json(SchemaNode::reference(nsid(domain, name)))),
        ProcedureOutput::Success => {
            let mut properties = Properties::new();
            properties.insert("success", SchemaNode::of_type("boolean"));
            Some(Body::json(SchemaNode::object(
                vec!["success".to_string()],
                properties,
            )))
        }
    };

    LexiconDoc::new(
        nsid(domain, &procedure.name),
        MainDef {
            kind: DefKind::Procedure,
            description: fallback(&procedure.description, "Procedure", &procedure.name),
            key: None,
            record: None,
            input,
            output,
        },
    )
}

fn fallback(description: &str, kind: &str, name: &str) -> String {
    if description.is_empty() {
        format!("{} for {}", kind, name)
    } else {
        description.to_string()
    }
}
