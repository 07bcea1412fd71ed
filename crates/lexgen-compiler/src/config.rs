//! Compiler configuration.

use std::path::PathBuf;

/// Configuration for the lexgen compiler.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Wizard state JSON saved by the app builder.
    pub state_path: PathBuf,

    /// Directory to write the generated app into.
    pub out_dir: PathBuf,

    pub generator: GeneratorOptions,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from("lexgen.json"),
            out_dir: PathBuf::from("app"),
            generator: GeneratorOptions::default(),
        }
    }
}

/// Knobs for a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Also emit a lexicon per query and procedure.
    pub method_lexicons: bool,

    /// Run structural validation before generating.
    pub validate: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            method_lexicons: false,
            validate: true,
        }
    }
}
