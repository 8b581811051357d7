//! Configuration file support for spdx-builder.
//!
//! Provides YAML-based configuration through `spdx-builder.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "spdx-builder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Logical files to register instead of the built-in list.
    pub files: Option<Vec<String>>,
    pub strip_prefixes: Option<Vec<String>>,
    pub package_name: Option<String>,
    pub package_comment: Option<String>,
    pub package_version: Option<String>,
    /// Comment of the creation-info record.
    pub comment: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    let found = config_path.try_exists().with_context(|| {
        format!(
            "Failed to check for config file: {}\n\n💡 Hint: Check the permissions of the source root.",
            config_path.display()
        )
    })?;
    if !found {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref files) = config.files {
        for (i, file) in files.iter().enumerate() {
            if file.trim().is_empty() {
                bail!(
                    "Invalid config: files[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a path relative to the source root (e.g., \"src/main.c\").",
                    i
                );
            }
        }
    }
    if let Some(ref prefixes) = config.strip_prefixes {
        if let Some(i) = prefixes.iter().position(|p| p.is_empty()) {
            bail!(
                "Invalid config: strip_prefixes[{}] must not be empty.\n\n\
                 💡 Hint: An empty prefix would match every path.",
                i
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
