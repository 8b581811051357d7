use spdx_builder::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ContentHasher serving digests from memory
#[derive(Default)]
pub struct MockContentHasher {
    digests: HashMap<PathBuf, String>,
    failing: Vec<PathBuf>,
    inaccessible: Vec<PathBuf>,
}

#[allow(dead_code)]
impl MockContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` as present with the given hex digest
    pub fn with_file(mut self, path: impl Into<PathBuf>, digest: &str) -> Self {
        self.digests.insert(path.into(), digest.to_string());
        self
    }

    /// Marks `path` as present but unreadable
    pub fn with_failing_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.push(path.into());
        self
    }

    /// Marks `path` as one whose presence cannot be determined
    pub fn with_inaccessible_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.inaccessible.push(path.into());
        self
    }
}

impl ContentHasher for MockContentHasher {
    fn exists(&self, path: &Path) -> Result<bool> {
        if self.inaccessible.iter().any(|p| p == path) {
            anyhow::bail!("Mock permission denied: {}", path.display());
        }
        Ok(self.digests.contains_key(path) || self.failing.iter().any(|p| p == path))
    }

    fn hash_file(&self, path: &Path) -> Result<Hash> {
        match self.digests.get(path) {
            Some(digest) => Hash::sha256(digest.clone()),
            None => anyhow::bail!("Mock read failure: {}", path.display()),
        }
    }
}
