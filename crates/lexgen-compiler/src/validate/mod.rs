//! Validation of a wizard state before generation.
//!
//! Structural problems (no record types, duplicate or colliding names, bad
//! domain) are errors. Dangling record-type references from queries and
//! procedures are only warnings: generation still succeeds and the emitted
//! documents point at the stale name.

mod names;
mod references;
mod structure;

use crate::diagnostic::CompilerError;
use crate::model::WizardState;

pub use references::reference_warnings;
pub use structure::is_valid_domain;

/// Validates the entire wizard state.
pub fn validate_state(state: &WizardState) -> Result<(), CompilerError> {
    structure::validate_structure(state)?;
    names::validate_derived_names(state)?;
    Ok(())
}
