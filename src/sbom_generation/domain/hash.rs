use crate::shared::error::SbomError;
use crate::shared::Result;

/// Hash algorithms the document can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
}

impl HashAlgorithm {
    /// SPDX 3 vocabulary name of the algorithm
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
        }
    }

    /// Length of the hex-encoded digest
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 64,
        }
    }
}

/// Hash value object: an algorithm plus a lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hash {
    algorithm: HashAlgorithm,
    value: String,
}

impl Hash {
    pub fn new(algorithm: HashAlgorithm, value: String) -> Result<Self> {
        if value.len() != algorithm.hex_len() {
            return Err(SbomError::Validation {
                message: format!(
                    "{} digest must be {} hex characters, got {}",
                    algorithm.as_str(),
                    algorithm.hex_len(),
                    value.len()
                ),
            }
            .into());
        }

        if !value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(SbomError::Validation {
                message: format!(
                    "{} digest must be lowercase hex: {}",
                    algorithm.as_str(),
                    value
                ),
            }
            .into());
        }

        Ok(Self { algorithm, value })
    }

    pub fn sha256(value: String) -> Result<Self> {
        Self::new(HashAlgorithm::Sha256, value)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
