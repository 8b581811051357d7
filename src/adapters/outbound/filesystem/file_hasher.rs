use crate::ports::outbound::ContentHasher;
use crate::sbom_generation::domain::Hash;
use crate::shared::error::SbomError;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Sha256FileHasher adapter for digesting files on the local file system
///
/// This adapter implements the ContentHasher port, streaming file contents
/// through SHA-256 so large artifacts are never held in memory.
pub struct Sha256FileHasher;

impl Sha256FileHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256FileHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher for Sha256FileHasher {
    fn exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SbomError::FileHashError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()),
        }
    }

    fn hash_file(&self, path: &Path) -> Result<Hash> {
        let hash_error = |details: String| SbomError::FileHashError {
            path: path.to_path_buf(),
            details,
        };

        let metadata = fs::metadata(path).map_err(|e| hash_error(e.to_string()))?;
        if !metadata.is_file() {
            return Err(hash_error("Not a regular file".to_string()).into());
        }

        let file = File::open(path).map_err(|e| hash_error(e.to_string()))?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher).map_err(|e| hash_error(e.to_string()))?;

        Hash::sha256(hex::encode(hasher.finalize()))
    }
}
