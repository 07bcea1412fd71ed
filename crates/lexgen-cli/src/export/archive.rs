use std::io::{Cursor, Write};
use std::path::PathBuf;

use lexgen_compiler::naming::package_name;
use lexgen_compiler::GeneratedCode;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::{ExportError, ExportReport, Exporter};

/// Writes the file set into a single `.zip`.
pub struct ArchiveExporter {
    path: PathBuf,
}

impl ArchiveExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/<package-name>.zip`, or `my-app.zip` for an unnamed app.
    pub fn for_app(dir: impl Into<PathBuf>, app_name: &str) -> Self {
        let mut stem = package_name(app_name);
        if stem.is_empty() {
            stem = "my-app".to_string();
        }
        let dir: PathBuf = dir.into();
        Self::new(dir.join(format!("{}.zip", stem)))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Exporter for ArchiveExporter {
    fn export(&self, files: &GeneratedCode) -> Result<ExportReport, ExportError> {
        let bytes = archive_bytes(files)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| ExportError::io(&self.path, e))?;

        info!(path = %self.path.display(), files = files.len(), "wrote archive");
        Ok(ExportReport {
            destination: self.path.display().to_string(),
            files: files.len(),
        })
    }
}

/// Deflated zip with one member per file, in generation order.
pub fn archive_bytes(files: &GeneratedCode) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (path, content) in files.iter() {
        zip.start_file(path, options)?;
        zip.write_all(content.as_bytes())
            .map_err(|e| ExportError::io(path, e))?;
    }

    Ok(zip.finish()?.into_inner())
}
