use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the document inside the output directory
pub const OUTPUT_FILE_NAME: &str = "spdx.jsonld";

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output. Content
/// goes to a temporary file next to the target, which is renamed into place
/// only after everything was written.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Writer targeting `<output_dir>/spdx.jsonld`
    pub fn in_directory(output_dir: &Path) -> Self {
        Self::new(output_dir.join(OUTPUT_FILE_NAME))
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn parent_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(SbomError::FileWriteError {
                path: self.output_path.clone(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
        Ok(())
    }

    /// Refuses to replace an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if self.output_path.symlink_metadata().is_ok() {
            validate_not_symlink(&self.output_path, "write")?;
        }
        Ok(())
    }

    fn write_error(&self, details: impl std::fmt::Display) -> SbomError {
        SbomError::FileWriteError {
            path: self.output_path.clone(),
            details: details.to_string(),
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        let mut temp_file =
            NamedTempFile::new_in(self.parent_directory()).map_err(|e| self.write_error(e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp_file.flush().map_err(|e| self.write_error(e))?;
        temp_file
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::in_directory(temp_dir.path());

        writer.present("{\"@graph\": []}").unwrap();

        let written = fs::read_to_string(temp_dir.path().join("spdx.jsonld")).unwrap();
        assert_eq!(written, "{\"@graph\": []}");
    }

    #[test]
    fn test_file_writer_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("spdx.jsonld");
        fs::write(&output_path, "a much longer previous document").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("new")
            .unwrap();
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_leaves_no_temporary_files() {
        let temp_dir = TempDir::new().unwrap();
        FileSystemWriter::in_directory(temp_dir.path())
            .present("content")
            .unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/spdx.jsonld"));
        let err = writer.present("test content").unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("elsewhere.json");
        fs::write(&target, "original").unwrap();
        let link = temp_dir.path().join("spdx.jsonld");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("new");
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }
}
