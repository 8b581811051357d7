use crate::sbom_generation::domain::Hash;
use crate::shared::Result;
use std::path::Path;

/// ContentHasher port for digesting files on disk
///
/// This port abstracts how file contents are read and hashed so the scanner
/// can be exercised without touching real files.
pub trait ContentHasher {
    /// Returns true if `path` names something present on disk
    ///
    /// # Errors
    /// Returns an error if presence cannot be determined, for example when a
    /// parent directory is not searchable. Only a path that is definitely
    /// absent yields `Ok(false)`.
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Computes the content digest of the file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read. Callers treat
    /// this as fatal: a file is only hashed after it was found to exist.
    fn hash_file(&self, path: &Path) -> Result<Hash>;
}
