//! Delivery of a generated file set.
//!
//! An exporter receives the finished path → content map and puts it
//! somewhere: a directory, a zip archive, or a new remote repository. It
//! never looks at the wizard state beyond what it was constructed with.

mod archive;
mod directory;
mod github;

use std::path::PathBuf;

use lexgen_compiler::{CompilerError, GeneratedCode};
use miette::Diagnostic;
use thiserror::Error;

pub use archive::{archive_bytes, ArchiveExporter};
pub use directory::DirectoryExporter;
pub use github::{repo_description, GithubPusher};

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Path or URL of the result.
    pub destination: String,
    pub files: usize,
}

pub trait Exporter {
    fn export(&self, files: &GeneratedCode) -> Result<ExportReport, ExportError>;
}

#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("Failed to write '{}': {message}", path.display())]
    #[diagnostic(code(lexgen::export::io))]
    Io { path: PathBuf, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Write(#[from] CompilerError),

    #[error("Failed to build archive: {0}")]
    #[diagnostic(code(lexgen::export::archive))]
    Archive(#[from] zip::result::ZipError),

    #[error("No access token for the remote repository")]
    #[diagnostic(
        code(lexgen::export::missing_token),
        help("Pass --token or set GITHUB_TOKEN to a personal access token with repo scope.")
    )]
    MissingToken,

    #[error("Remote repository request failed: {message}")]
    #[diagnostic(code(lexgen::export::remote))]
    Remote { message: String },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
