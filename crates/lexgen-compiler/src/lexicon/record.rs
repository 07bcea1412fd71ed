//! Record lexicons.

use super::{DefKind, LexiconDoc, MainDef, Properties, SchemaNode};
use crate::field_types::schema_fragment;
use crate::model::RecordType;
use crate::naming::nsid;

/// Builds the lexicon document of a record type.
///
/// Records are keyed by timestamp identifiers (`tid`). A required field whose
/// type has no lexicon representation stays listed in `required` even though
/// it gets no property.
pub fn emit_record_schema(record: &RecordType, domain: &str) -> LexiconDoc {
    let id = nsid(domain, &record.name);

    let required: Vec<String> = record
        .fields
        .iter()
        .filter(|f| f.required)
        .map(|f| f.name.clone())
        .collect();

    let mut properties = Properties::new();
    for field in &record.fields {
        match schema_fragment(field) {
            Some(schema) => properties.insert(field.name.clone(), schema),
            None => tracing::warn!(
                record = %record.name,
                field = %field.name,
                field_type = %field.typ,
                "field type has no lexicon representation; property omitted"
            ),
        }
    }

    let description = if record.description.is_empty() {
        format!("{} record", record.name)
    } else {
        record.description.clone()
    };

    LexiconDoc::new(
        id,
        MainDef {
            kind: DefKind::Record,
            description,
            key: Some("tid".to_string()),
            record: Some(SchemaNode::object(required, properties)),
            input: None,
            output: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType};
    use serde_json::json;

    fn todo() -> RecordType {
        RecordType::new("todo")
            .with_field(Field::new("title", FieldType::Text).required().with_max_length(300))
            .with_field(Field::new("tags", FieldType::StringArray))
    }

    #[test]
    fn test_record_document() {
        let doc = emit_record_schema(&todo(), "example.com");
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            json!({
                "lexicon": 1,
                "id": "com.example.todo",
                "defs": {
                    "main": {
                        "type": "record",
                        "description": "todo record",
                        "key": "tid",
                        "record": {
                            "type": "object",
                            "required": ["title"],
                            "properties": {
                                "title": { "type": "string", "maxLength": 300 },
                                "tags": { "type": "array", "items": { "type": "string" } }
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_properties_follow_field_order() {
        let record = RecordType::new("post")
            .with_field(Field::new("zeta", FieldType::Text))
            .with_field(Field::new("alpha", FieldType::Integer))
            .with_field(Field::new("mid", FieldType::Boolean));
        let doc = emit_record_schema(&record, "example.com");
        let props = doc.defs.main.record.unwrap().properties.unwrap();
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_description_and_required_order() {
        let record = RecordType::new("post")
            .with_description("A blog post")
            .with_field(Field::new("body", FieldType::Text).required())
            .with_field(Field::new("draft", FieldType::Boolean))
            .with_field(Field::new("title", FieldType::Text).required());
        let doc = emit_record_schema(&record, "example.com");
        assert_eq!(doc.defs.main.description, "A blog post");
        let schema = doc.defs.main.record.unwrap();
        assert_eq!(schema.required.unwrap(), vec!["body", "title"]);
    }

    #[test]
    fn test_unrepresentable_required_field_stays_required() {
        let record = RecordType::new("file")
            .with_field(Field::new("data", FieldType::ByteBlob).required())
            .with_field(Field::new("name", FieldType::Text));
        let schema = emit_record_schema(&record, "example.com").defs.main.record.unwrap();
        let props = schema.properties.unwrap();

        assert_eq!(schema.required.unwrap(), vec!["data"]);
        assert!(props.get("data").is_none());
        assert!(props.get("name").is_some());
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let json = emit_record_schema(&todo(), "example.com").to_json().unwrap();
        assert!(json.starts_with("{\n  \"lexicon\": 1,\n  \"id\": \"com.example.todo\""));
    }
}
