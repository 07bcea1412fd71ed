//! Query and procedure endpoints.

use serde::{Deserialize, Serialize};

/// A read endpoint returning one record or a list of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMethod {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Name of the record type returned. Not checked against the model.
    #[serde(default)]
    pub returns_record_type: String,

    #[serde(default)]
    pub returns_list: bool,
}

/// What a procedure responds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureOutput {
    #[default]
    Success,
    Record,
}

/// A write endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureMethod {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_record_type: Option<String>,

    #[serde(default)]
    pub output_type: ProcedureOutput,

    /// Required when `output_type` is [`ProcedureOutput::Record`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_record_type: Option<String>,
}

impl ProcedureMethod {
    /// Input record type name, ignoring empty strings.
    pub fn input_record_type(&self) -> Option<&str> {
        self.input_record_type.as_deref().filter(|s| !s.is_empty())
    }

    /// Output record type name, ignoring empty strings.
    pub fn output_record_type(&self) -> Option<&str> {
        self.output_record_type.as_deref().filter(|s| !s.is_empty())
    }

    /// Every record type name this procedure refers to.
    pub fn referenced_record_types(&self) -> impl Iterator<Item = &str> {
        let output = match self.output_type {
            ProcedureOutput::Record => self.output_record_type(),
            ProcedureOutput::Success => None,
        };
        self.input_record_type().into_iter().chain(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedure_deserialize() {
        let json = r#"{
            "id": "p1",
            "name": "archivePost",
            "description": "",
            "inputRecordType": "",
            "outputType": "record",
            "outputRecordType": "post"
        }"#;
        let proc: ProcedureMethod = serde_json::from_str(json).unwrap();
        assert_eq!(proc.input_record_type(), None);
        assert_eq!(proc.output_type, ProcedureOutput::Record);
        assert_eq!(proc.referenced_record_types().collect::<Vec<_>>(), vec!["post"]);
    }

    #[test]
    fn test_success_output_ignores_stale_record_name() {
        let proc = ProcedureMethod {
            id: String::new(),
            name: "ping".to_string(),
            description: String::new(),
            input_record_type: Some("todo".to_string()),
            output_type: ProcedureOutput::Success,
            output_record_type: Some("gone".to_string()),
        };
        assert_eq!(proc.referenced_record_types().collect::<Vec<_>>(), vec!["todo"]);
    }
}
