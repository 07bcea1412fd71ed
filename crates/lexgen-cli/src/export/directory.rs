use std::path::PathBuf;

use lexgen_compiler::GeneratedCode;
use tracing::info;

use super::{ExportError, ExportReport, Exporter};

/// Writes each file under a root directory, creating parents as needed.
pub struct DirectoryExporter {
    root: PathBuf,
}

impl DirectoryExporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Exporter for DirectoryExporter {
    fn export(&self, files: &GeneratedCode) -> Result<ExportReport, ExportError> {
        files.write_to(&self.root)?;

        info!(root = %self.root.display(), files = files.len(), "exported directory");
        Ok(ExportReport {
            destination: self.root.display().to_string(),
            files: files.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_nested_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut files = GeneratedCode::new();
        files.insert("services/views/ListView.ts", "export {};\n");
        files.insert("README.md", "# App\n");

        let report = DirectoryExporter::new(dir.path().join("app")).export(&files).unwrap();

        assert_eq!(report.files, 2);
        let list = std::fs::read_to_string(dir.path().join("app/services/views/ListView.ts")).unwrap();
        assert_eq!(list, "export {};\n");
    }

    #[test]
    fn test_write_failure_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("app");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut files = GeneratedCode::new();
        files.insert("README.md", "# App\n");

        let err = DirectoryExporter::new(&blocker).export(&files).unwrap_err();
        assert!(matches!(err, ExportError::Write(_)));
        assert!(err.to_string().contains("app"));
    }
}
