use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Point the tool at the real path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates the source root handed to the scanner
///
/// The root must exist, must not be a symbolic link and must be a directory.
pub fn validate_source_root(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::InvalidSourceRoot {
        path: path.to_path_buf(),
        reason: if e.kind() == std::io::ErrorKind::NotFound {
            "Directory does not exist".to_string()
        } else {
            format!("Failed to read path metadata: {}", e)
        },
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidSourceRoot {
            path: path.to_path_buf(),
            reason: "Security: Source root is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(SbomError::InvalidSourceRoot {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
