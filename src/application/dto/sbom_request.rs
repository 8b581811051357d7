use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// Logical files registered when no file list is configured
pub const DEFAULT_SOURCE_FILES: &[&str] = &["src/hello.c", "src/hello.o"];

/// Creation-info comment used when none is configured
pub const DEFAULT_COMMENT: &str = "Generated by spdx-builder from the build tree";

/// Package metadata attached to the distribution artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageOptions {
    /// Package name; defaults to the artifact file name
    pub name: Option<String>,
    pub version: Option<String>,
    pub comment: Option<String>,
}

/// SbomRequest - Internal request DTO for the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Directory logical file paths are resolved against
    pub source_root: PathBuf,
    /// Prefixes stripped from paths before they enter the document
    pub strip_prefixes: Vec<String>,
    /// Logical files to register, in order
    pub files: Vec<String>,
    /// Optional build artifact described by a package
    pub artifact: Option<String>,
    pub package: PackageOptions,
    /// Comment of the shared creation-info record
    pub comment: String,
    /// Whether the full graph is dumped before writing
    pub verbose: bool,
}

impl SbomRequest {
    pub fn builder() -> SbomRequestBuilder {
        SbomRequestBuilder::default()
    }
}

/// Builder for [`SbomRequest`]
#[derive(Debug, Default)]
pub struct SbomRequestBuilder {
    source_root: Option<PathBuf>,
    strip_prefixes: Vec<String>,
    files: Option<Vec<String>>,
    artifact: Option<String>,
    package: PackageOptions,
    comment: Option<String>,
    verbose: bool,
}

impl SbomRequestBuilder {
    pub fn source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(source_root.into());
        self
    }

    pub fn strip_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.strip_prefixes = prefixes;
        self
    }

    pub fn files(mut self, files: Vec<String>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn artifact(mut self, artifact: Option<String>) -> Self {
        self.artifact = artifact;
        self
    }

    pub fn package(mut self, package: PackageOptions) -> Self {
        self.package = package;
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<SbomRequest> {
        let source_root = self.source_root.ok_or_else(|| SbomError::Validation {
            message: "source root is required".to_string(),
        })?;

        let files = self.files.unwrap_or_else(|| {
            DEFAULT_SOURCE_FILES
                .iter()
                .map(|f| f.to_string())
                .collect()
        });

        if let Some(index) = files.iter().position(|f| f.trim().is_empty()) {
            return Err(SbomError::Validation {
                message: format!("files[{}] must not be empty", index),
            }
            .into());
        }

        if let Some(index) = self.strip_prefixes.iter().position(|p| p.is_empty()) {
            return Err(SbomError::Validation {
                message: format!(
                    "strip_prefixes[{}] must not be empty; an empty prefix would match every path",
                    index
                ),
            }
            .into());
        }

        if matches!(self.artifact.as_deref(), Some(a) if a.trim().is_empty()) {
            return Err(SbomError::Validation {
                message: "artifact path must not be empty".to_string(),
            }
            .into());
        }

        Ok(SbomRequest {
            source_root,
            strip_prefixes: self.strip_prefixes,
            files,
            artifact: self.artifact,
            package: self.package,
            comment: self.comment.unwrap_or_else(|| DEFAULT_COMMENT.to_string()),
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = SbomRequest::builder().source_root("/src").build().unwrap();
        assert_eq!(request.source_root, PathBuf::from("/src"));
        assert_eq!(request.files, vec!["src/hello.c", "src/hello.o"]);
        assert!(request.strip_prefixes.is_empty());
        assert!(request.artifact.is_none());
        assert_eq!(request.package, PackageOptions::default());
        assert_eq!(request.comment, DEFAULT_COMMENT);
        assert!(!request.verbose);
    }

    #[test]
    fn test_builder_requires_source_root() {
        let err = SbomRequest::builder().build().unwrap_err();
        assert!(err.to_string().contains("source root is required"));
    }

    #[test]
    fn test_builder_rejects_empty_file_entry() {
        let err = SbomRequest::builder()
            .source_root("/src")
            .files(vec!["a.c".to_string(), "  ".to_string()])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("files[1] must not be empty"));
    }

    #[test]
    fn test_builder_rejects_empty_strip_prefix() {
        let err = SbomRequest::builder()
            .source_root("/src")
            .strip_prefixes(vec!["/build".to_string(), String::new()])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("strip_prefixes[1] must not be empty"));
    }

    #[test]
    fn test_builder_rejects_empty_artifact() {
        let result = SbomRequest::builder()
            .source_root("/src")
            .artifact(Some(String::new()))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let request = SbomRequest::builder()
            .source_root("/src")
            .strip_prefixes(vec!["/build".to_string()])
            .files(vec!["main.c".to_string()])
            .artifact(Some("out/app".to_string()))
            .package(PackageOptions {
                name: Some("app".to_string()),
                version: Some("1.0".to_string()),
                comment: None,
            })
            .comment(Some("ci build".to_string()))
            .verbose(true)
            .build()
            .unwrap();

        assert_eq!(request.files, vec!["main.c"]);
        assert_eq!(request.artifact.as_deref(), Some("out/app"));
        assert_eq!(request.package.name.as_deref(), Some("app"));
        assert_eq!(request.comment, "ci build");
        assert!(request.verbose);
    }
}
