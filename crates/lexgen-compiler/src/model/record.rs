//! Record types and their fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract field type chosen in the wizard.
///
/// The set is closed, but tags the builder does not know are kept verbatim in
/// [`FieldType::Unknown`] so that a state file written by a newer builder
/// still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Integer,
    Boolean,
    StringArray,
    NumberArray,
    MediaReference,
    ByteBlob,
    ContentHashLink,
    Unknown(String),
}

impl FieldType {
    /// Parses a wire tag. Both the builder's tags (`string`, `array-string`,
    /// `media-url`, ...) and the descriptive names (`text`, `string-array`,
    /// `media-reference`, ...) are accepted.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" | "text" => FieldType::Text,
            "integer" => FieldType::Integer,
            "boolean" => FieldType::Boolean,
            "array-string" | "string-array" => FieldType::StringArray,
            "array-number" | "number-array" => FieldType::NumberArray,
            "media-url" | "media-reference" => FieldType::MediaReference,
            "bytes" | "byte-blob" => FieldType::ByteBlob,
            "cid-link" | "content-hash-link" => FieldType::ContentHashLink,
            other => FieldType::Unknown(other.to_string()),
        }
    }

    /// The tag written to wizard-state JSON.
    pub fn tag(&self) -> &str {
        match self {
            FieldType::Text => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::StringArray => "array-string",
            FieldType::NumberArray => "array-number",
            FieldType::MediaReference => "media-url",
            FieldType::ByteBlob => "bytes",
            FieldType::ContentHashLink => "cid-link",
            FieldType::Unknown(tag) => tag,
        }
    }

    /// True for the two sequence types.
    pub fn is_array(&self) -> bool {
        matches!(self, FieldType::StringArray | FieldType::NumberArray)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        FieldType::from_tag(&tag)
    }
}

impl From<FieldType> for String {
    fn from(typ: FieldType) -> Self {
        typ.tag().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Kind of media a media-reference field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Audio,
    Video,
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Other => "other",
        }
    }
}

/// A single field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub typ: FieldType,

    /// Refinement for text fields (`datetime`, `uri`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    pub required: bool,
}

impl Field {
    /// Creates an optional field with no refinements.
    pub fn new(name: impl Into<String>, typ: FieldType) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            typ,
            format: None,
            max_length: None,
            media_type: None,
            description: String::new(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Format refinement, ignoring empty strings.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.is_empty())
    }

    /// Length limit, ignoring zero.
    pub fn max_length(&self) -> Option<u32> {
        self.max_length.filter(|len| *len > 0)
    }

    /// Description, ignoring empty strings.
    pub fn description(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.is_empty())
    }
}

/// A record type: one collection of user data in the generated app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordType {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

impl RecordType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
