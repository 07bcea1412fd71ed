//! Field-type mapping.
//!
//! | field type        | TypeScript   | lexicon fragment                         |
//! |-------------------|--------------|------------------------------------------|
//! | text              | `string`     | `string` (+ format, maxLength)           |
//! | integer           | `number`     | `integer`                                |
//! | boolean           | `boolean`    | `boolean`                                |
//! | string-array      | `string[]`   | `array` of `string`                      |
//! | number-array      | `number[]`   | `array` of `integer`                     |
//! | media-reference   | `string`     | `string`, format `uri`                   |
//! | byte-blob         | `Uint8Array` | none                                     |
//! | content-hash-link | `string`     | none                                     |
//!
//! Integers are `number` in TypeScript but `integer` in the lexicon.
//! Unrecognized tags map to `unknown` and pass through to the lexicon as-is.

use crate::lexicon::SchemaNode;
use crate::model::{Field, FieldType};

/// TypeScript annotation for a field's value.
pub fn ts_type(field: &Field) -> &'static str {
    match &field.typ {
        FieldType::Text => "string",
        FieldType::Integer => "number",
        FieldType::Boolean => "boolean",
        FieldType::StringArray => "string[]",
        FieldType::NumberArray => "number[]",
        FieldType::MediaReference => "string",
        FieldType::ByteBlob => "Uint8Array",
        FieldType::ContentHashLink => "string",
        FieldType::Unknown(_) => "unknown",
    }
}

/// TypeScript expression substituted when an optional field is missing from
/// a fetched record. Only sequences get one; other fields stay absent.
pub fn ts_missing_default(field: &Field) -> Option<&'static str> {
    field.typ.is_array().then_some("[]")
}

/// Lexicon fragment for a field, or `None` when the type has no lexicon
/// representation.
pub fn schema_fragment(field: &Field) -> Option<SchemaNode> {
    let description = field.description().map(str::to_string);

    let node = match &field.typ {
        FieldType::Text => SchemaNode {
            typ: "string".to_string(),
            format: field.format().map(str::to_string),
            max_length: field.max_length(),
            description,
            ..Default::default()
        },
        FieldType::Integer => SchemaNode::of_type("integer").with_description(description),
        FieldType::Boolean => SchemaNode::of_type("boolean"),
        FieldType::StringArray => {
            SchemaNode::array(SchemaNode::of_type("string")).with_description(description)
        }
        FieldType::NumberArray => {
            SchemaNode::array(SchemaNode::of_type("integer")).with_description(description)
        }
        FieldType::MediaReference => {
            let media = field.media_type.map(|m| m.as_str()).unwrap_or("media");
            SchemaNode {
                typ: "string".to_string(),
                format: Some("uri".to_string()),
                description: description.map(|d| format!("{} ({} URL)", d, media)),
                ..Default::default()
            }
        }
        FieldType::ByteBlob | FieldType::ContentHashLink => return None,
        FieldType::Unknown(tag) => SchemaNode {
            typ: tag.clone(),
            format: field.format().map(str::to_string),
            max_length: field.max_length(),
            description,
            ..Default::default()
        },
    };

    Some(node)
}
