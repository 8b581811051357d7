use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build pipelines to tell argument mistakes apart from
/// failures that happened while assembling the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The document was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, hashing, configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Invalid source root: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing source directory with --source-root")]
    InvalidSourceRoot { path: PathBuf, reason: String },

    #[error("Failed to hash file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable")]
    FileHashError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to create output directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the parent directory")]
    OutputDirectoryError { path: PathBuf, details: String },

    /// Validation error for domain values and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_source_root_display() {
        let error = SbomError::InvalidSourceRoot {
            path: PathBuf::from("/invalid/root"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid source root"));
        assert!(display.contains("/invalid/root"));
        assert!(display.contains("Directory does not exist"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_hash_error_display() {
        let error = SbomError::FileHashError {
            path: PathBuf::from("/src/hello.c"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to hash file"));
        assert!(display.contains("/src/hello.c"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/test/spdx.jsonld"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/spdx.jsonld"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_output_directory_error_display() {
        let error = SbomError::OutputDirectoryError {
            path: PathBuf::from("/readonly/out"),
            details: "Read-only file system".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to create output directory"));
        assert!(display.contains("/readonly/out"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = SbomError::Validation {
            message: "hash value must be 64 hex characters".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Validation error: hash value must be 64 hex characters"
        );
    }

    #[test]
    fn test_security_error_display() {
        let error = SbomError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular directory instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular directory instead"));
    }
}
