//! Lexicon (schema document) generation.
//!
//! A lexicon is the versioned JSON contract of one record collection or one
//! endpoint:
//!
//! ```json
//! { "lexicon": 1, "id": "com.example.todo", "defs": { "main": { ... } } }
//! ```
//!
//! The document shape is public and versioned, so serialization is exact:
//! keys appear in a fixed order and absent parts are omitted rather than
//! written as `null`.

mod method;
mod record;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub use method::{emit_procedure_schema, emit_query_schema};
pub use record::emit_record_schema;

/// Lexicon format version written to every document.
pub const LEXICON_VERSION: u32 = 1;

/// Body encoding of query and procedure payloads.
pub const JSON_ENCODING: &str = "application/json";

/// A complete lexicon document.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LexiconDoc {
    pub lexicon: u32,
    pub id: String,
    pub defs: Defs,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Defs {
    pub main: MainDef,
}

/// What a lexicon describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefKind {
    Record,
    Query,
    Procedure,
}

/// The `defs.main` entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MainDef {
    #[serde(rename = "type")]
    pub kind: DefKind,

    pub description: String,

    /// Record key scheme; records only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<SchemaNode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Body>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Body>,
}

/// Request or response body of an endpoint.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Body {
    pub encoding: String,
    pub schema: SchemaNode,
}

impl Body {
    pub fn json(schema: SchemaNode) -> Self {
        Self {
            encoding: JSON_ENCODING.to_string(),
            schema,
        }
    }
}

/// One node of a lexicon type tree.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub typ: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaNode {
    pub fn of_type(typ: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            ..Default::default()
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        Self {
            typ: "array".to_string(),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    pub fn reference(nsid: impl Into<String>) -> Self {
        Self {
            typ: "ref".to_string(),
            reference: Some(nsid.into()),
            ..Default::default()
        }
    }

    pub fn object(required: Vec<String>, properties: Properties) -> Self {
        Self {
            typ: "object".to_string(),
            required: Some(required),
            properties: Some(properties),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Object properties in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, SchemaNode)>);

impl Properties {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a property; a repeated name replaces the earlier schema in place.
    pub fn insert(&mut self, name: impl Into<String>, schema: SchemaNode) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.0.push((name, schema)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

impl LexiconDoc {
    pub fn new(id: String, main: MainDef) -> Self {
        Self {
            lexicon: LEXICON_VERSION,
            id,
            defs: Defs { main },
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
