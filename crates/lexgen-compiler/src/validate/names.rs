//! Derived-identifier collisions.
//!
//! Two record types may have distinct names yet derive the same type name
//! (`To-Do` and `ToDo`) or the same namespaced identifier (`to do` and
//! `todo`). Generated files would then silently overwrite each other, so
//! this is rejected before generation. A name whose type name is empty or
//! starts with a digit cannot be emitted as a TypeScript identifier at all.

use crate::diagnostic::CompilerError;
use crate::model::WizardState;
use crate::naming::RecordNames;

pub fn validate_derived_names(state: &WizardState) -> Result<(), CompilerError> {
    let domain = &state.app_info.domain;
    let names: Vec<RecordNames> = state
        .record_types
        .iter()
        .map(|r| RecordNames::new(&r.name, domain))
        .collect();

    for record in &names {
        if !record.pascal.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(CompilerError::InvalidRecordName {
                name: record.raw.clone(),
            });
        }
    }

    for (i, first) in names.iter().enumerate() {
        for second in &names[i + 1..] {
            let identifier = if first.pascal == second.pascal {
                Some(&first.pascal)
            } else if first.nsid == second.nsid {
                Some(&first.nsid)
            } else {
                None
            };

            if let Some(identifier) = identifier {
                return Err(CompilerError::NameCollision {
                    first: first.raw.clone(),
                    second: second.raw.clone(),
                    identifier: identifier.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType, RecordType};

    fn state(names: &[&str]) -> WizardState {
        let mut state = WizardState::new();
        state.app_info.domain = "example.com".to_string();
        for name in names {
            state
                .record_types
                .push(RecordType::new(*name).with_field(Field::new("x", FieldType::Text)));
        }
        state
    }

    #[test]
    fn test_distinct_names_pass() {
        assert!(validate_derived_names(&state(&["todo", "note", "blog post"])).is_ok());
    }

    #[test]
    fn test_type_name_collision() {
        let err = validate_derived_names(&state(&["To-Do", "ToDo"])).unwrap_err();
        assert!(matches!(
            err,
            CompilerError::NameCollision { first, second, identifier }
                if first == "To-Do" && second == "ToDo" && identifier == "ToDo"
        ));
    }

    #[test]
    fn test_namespaced_identifier_collision() {
        let err = validate_derived_names(&state(&["to do", "todo"])).unwrap_err();
        assert!(matches!(
            err,
            CompilerError::NameCollision { identifier, .. } if identifier == "com.example.todo"
        ));
    }

    #[test]
    fn test_names_must_yield_an_identifier() {
        for name in ["3d model", "!!!", ""] {
            let err = validate_derived_names(&state(&["todo", name])).unwrap_err();
            assert!(matches!(
                err,
                CompilerError::InvalidRecordName { name: raw } if raw == name
            ));
        }
        assert!(validate_derived_names(&state(&["model 3d"])).is_ok());
    }
}
