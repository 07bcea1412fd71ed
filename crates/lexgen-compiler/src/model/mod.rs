//! In-memory model of an app description.
//!
//! The wizard mutates this model step by step; code generation consumes it
//! read-only. Types serialize to the same camelCase JSON the builder saves.

mod method;
mod record;
mod state;

pub use method::{ProcedureMethod, ProcedureOutput, QueryMethod};
pub use record::{Field, FieldType, MediaType, RecordType};
pub use state::{
    load_state, parse_state, save_state, AppConfig, AppInfo, LoadedState, OutputMethod,
    WizardState, STALE_DAYS, STATE_VERSION,
};
