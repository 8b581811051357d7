/// Character that replaces path separators and other non-alphanumerics in
/// identifier suffixes
const SUFFIX_SEPARATOR: char = '-';

/// PathSanitizer service for making build-system paths portable
///
/// Absolute paths produced by the build are rewritten relative to the first
/// matching prefix so the emitted document does not leak machine-local
/// directories.
///
/// The root, when set, is tried after the configured prefixes and only
/// matches at a path-component boundary.
#[derive(Debug, Clone)]
pub struct PathSanitizer {
    prefixes: Vec<String>,
    root: Option<String>,
}

impl PathSanitizer {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self {
            prefixes,
            root: None,
        }
    }

    /// Adds the directory paths are relative to as the final prefix
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Rewrites `path` as `"." + remainder` for the first prefix it starts
    /// with, or returns it unchanged
    pub fn sanitize(&self, path: &str) -> String {
        for prefix in &self.prefixes {
            if let Some(remainder) = path.strip_prefix(prefix.as_str()) {
                return format!(".{}", remainder);
            }
        }
        if let Some(root) = self.root.as_deref() {
            if let Some(remainder) = path.strip_prefix(root) {
                if root.ends_with('/') {
                    return format!("./{}", remainder);
                }
                if remainder.is_empty() || remainder.starts_with('/') {
                    return format!(".{}", remainder);
                }
            }
        }
        path.to_string()
    }

    /// Derives the stable identifier suffix of a sanitized file path
    ///
    /// `./src/hello.c` and `src/hello.c` both become `file-src-hello-c`.
    pub fn file_suffix(sanitized: &str) -> String {
        let trimmed = sanitized.strip_prefix("./").unwrap_or(sanitized);
        let slug: String = trimmed
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c
                } else {
                    SUFFIX_SEPARATOR
                }
            })
            .collect();
        format!("file-{}", slug)
    }
}
