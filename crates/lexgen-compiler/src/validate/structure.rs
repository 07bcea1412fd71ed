//! Structure validation for record types and app info.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::diagnostic::CompilerError;
use crate::model::{RecordType, WizardState};

/// Identity members every generated record interface carries.
const RESERVED_FIELDS: [&str; 2] = ["uri", "cid"];

const DOMAIN_PATTERN: &str = r"(?i)^[a-z0-9]+([-.][a-z0-9]+)*\.[a-z]{2,}$";

static DOMAIN_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Whether `domain` looks like a DNS name: alphanumeric labels joined by
/// single `-` or `.`, ending in a top-level label of two or more letters.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_RE
        .get_or_init(|| Regex::new(DOMAIN_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(domain))
}

/// Validates the structure of the wizard state.
pub fn validate_structure(state: &WizardState) -> Result<(), CompilerError> {
    if state.record_types.is_empty() {
        return Err(CompilerError::NoRecordTypes);
    }

    if !is_valid_domain(&state.app_info.domain) {
        return Err(CompilerError::InvalidDomain {
            domain: state.app_info.domain.clone(),
        });
    }

    let mut seen = HashSet::new();
    for record in &state.record_types {
        if !seen.insert(record.name.to_lowercase()) {
            return Err(CompilerError::DuplicateRecordType {
                name: record.name.clone(),
            });
        }
        validate_record_structure(record)?;
    }

    Ok(())
}

/// Validates a record type has fields, that their names are unique, and that
/// none shadows an identity member.
fn validate_record_structure(record: &RecordType) -> Result<(), CompilerError> {
    if record.fields.is_empty() {
        return Err(CompilerError::EmptyRecordType {
            record: record.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for field in &record.fields {
        let lower = field.name.to_lowercase();
        if RESERVED_FIELDS.contains(&lower.as_str()) {
            return Err(CompilerError::ReservedFieldName {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }
        if !seen.insert(lower) {
            return Err(CompilerError::DuplicateField {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}
