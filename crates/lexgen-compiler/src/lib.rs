//! # Lexgen Compiler
//!
//! This crate turns an app description saved by the app builder wizard
//! (record types, query and procedure endpoints, display settings) into a
//! complete AT Protocol client app: Vite/TypeScript sources, markup, styles
//! and one lexicon document per record type.
//!
//! ## Architecture
//!
//! ```text
//! Wizard state (JSON)
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Model     │  serde load, stale check
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Structure & derived-name checks
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Naming → field types → lexicons + TS modules
//! └──────┬───────┘
//!        │
//!        ▼
//!  path → content map
//! ```
//!
//! Generation itself is pure: the same state always yields the same files in
//! the same order. Only [`Compiler::compile`] touches the filesystem.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lexgen_compiler::{Compiler, CompilerConfig};
//!
//! let config = CompilerConfig {
//!     state_path: "lexgen.json".into(),
//!     out_dir: "my-app".into(),
//!     ..Default::default()
//! };
//!
//! let result = Compiler::new(config).compile()?;
//! println!("wrote {} files", result.files);
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod field_types;
pub mod lexicon;
pub mod model;
pub mod naming;
pub mod validate;

use tracing::debug;

pub use codegen::{generate_all_files, GeneratedCode};
pub use config::{CompilerConfig, GeneratorOptions};
pub use diagnostic::CompilerError;
pub use model::{load_state, save_state, WizardState};

/// The main compiler struct that drives load, validate, generate and write.
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Creates a new compiler with the given configuration.
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Loads the wizard state and generates every file in memory.
    pub fn generate(&self) -> Result<(WizardState, GeneratedCode), CompilerError> {
        let state = self.load()?;
        let generated = self.generate_state(&state)?;
        Ok((state, generated))
    }

    /// Generates every file for an already loaded state.
    pub fn generate_state(&self, state: &WizardState) -> Result<GeneratedCode, CompilerError> {
        if self.config.generator.validate {
            debug!("validating wizard state");
            validate::validate_state(state)?;
        }

        let app_config = state.effective_config();
        generate_all_files(state, &app_config, &self.config.generator)
    }

    /// Generates the app and writes it under `out_dir`.
    pub fn compile(&self) -> Result<CompileResult, CompilerError> {
        let (state, generated) = self.generate()?;
        self.write_output(&generated)?;
        Ok(CompileResult::new(&state, &generated))
    }

    /// Loads and validates the wizard state without generating code.
    pub fn check(&self) -> Result<CompileResult, CompilerError> {
        let state = self.load()?;
        validate::validate_state(&state)?;
        Ok(CompileResult::new(&state, &GeneratedCode::new()))
    }

    fn load(&self) -> Result<WizardState, CompilerError> {
        debug!(path = %self.config.state_path.display(), "loading wizard state");
        Ok(load_state(&self.config.state_path)?.state)
    }

    /// Writes generated code to the output directory.
    fn write_output(&self, generated: &GeneratedCode) -> Result<(), CompilerError> {
        generated.write_to(&self.config.out_dir)
    }
}

/// Result of a successful compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileResult {
    /// Number of record types in the state.
    pub record_types: usize,
    pub queries: usize,
    pub procedures: usize,
    /// Number of files generated (zero for a check).
    pub files: usize,
}

impl CompileResult {
    fn new(state: &WizardState, generated: &GeneratedCode) -> Self {
        Self {
            record_types: state.record_types.len(),
            queries: state.query_methods.len(),
            procedures: state.procedure_methods.len(),
            files: generated.len(),
        }
    }
}
