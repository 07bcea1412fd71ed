//! Compiler error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while loading, validating or generating an app.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum CompilerError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access '{}': {message}", path.display())]
    #[diagnostic(code(lexgen::io::access_failed))]
    IoError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Wizard State Errors
    // =========================================================================
    #[error("Failed to parse wizard state '{}': {message}", path.display())]
    #[diagnostic(
        code(lexgen::state::parse_failed),
        help("The wizard state must be the JSON document saved by the app builder (see `lexgen init`).")
    )]
    StateParseFailed {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Structure Errors
    // =========================================================================
    #[error("No record types defined")]
    #[diagnostic(
        code(lexgen::structure::no_record_types),
        help("Define at least one record type before generating the app.")
    )]
    NoRecordTypes,

    #[error("Duplicate record type name: {name}")]
    #[diagnostic(
        code(lexgen::structure::duplicate_record_type),
        help("Record type names are compared case-insensitively.")
    )]
    DuplicateRecordType {
        name: String,
    },

    #[error("Record type '{record}' has no fields")]
    #[diagnostic(code(lexgen::structure::empty_record_type))]
    EmptyRecordType {
        record: String,
    },

    #[error("Record type '{record}' has duplicate field: {field}")]
    #[diagnostic(
        code(lexgen::structure::duplicate_field),
        help("Field names are compared case-insensitively within a record type.")
    )]
    DuplicateField {
        record: String,
        field: String,
    },

    #[error("Record type '{record}' uses reserved field name: {field}")]
    #[diagnostic(
        code(lexgen::structure::reserved_field),
        help("Every record already carries `uri` and `cid`; pick another field name.")
    )]
    ReservedFieldName {
        record: String,
        field: String,
    },

    #[error("Record type name '{name}' does not yield a valid identifier")]
    #[diagnostic(
        code(lexgen::structure::invalid_record_name),
        help("Start the name with a letter, e.g. 'model 3d' instead of '3d model'.")
    )]
    InvalidRecordName {
        name: String,
    },

    #[error("Invalid domain: '{domain}'")]
    #[diagnostic(
        code(lexgen::structure::invalid_domain),
        help("Use a DNS-style domain you control, e.g. example.com")
    )]
    InvalidDomain {
        domain: String,
    },

    #[error("Record types '{first}' and '{second}' both derive the identifier '{identifier}'")]
    #[diagnostic(
        code(lexgen::structure::name_collision),
        help("Rename one of them; generated type names and lexicon paths would overwrite each other.")
    )]
    NameCollision {
        first: String,
        second: String,
        identifier: String,
    },

    // =========================================================================
    // Code Generation Errors
    // =========================================================================
    #[error("Failed to generate '{path}': {message}")]
    #[diagnostic(code(lexgen::codegen::generation_failed))]
    CodegenFailed {
        path: String,
        message: String,
    },
}

impl CompilerError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }
}
