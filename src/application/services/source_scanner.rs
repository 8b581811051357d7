use crate::application::services::SbomBuilder;
use crate::ports::outbound::{ContentHasher, ProgressReporter};
use crate::sbom_generation::domain::Element;
use crate::sbom_generation::services::PathSanitizer;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SourceDirectoryScanner - turns logical file paths into file elements
///
/// Paths are made portable with the configured strip prefixes, then the
/// source root itself, resolved against the source root and digested when
/// present.
pub struct SourceDirectoryScanner<'a, H> {
    source_root: PathBuf,
    sanitizer: PathSanitizer,
    hasher: &'a H,
}

impl<'a, H: ContentHasher> SourceDirectoryScanner<'a, H> {
    pub fn new(hasher: &'a H, source_root: PathBuf, strip_prefixes: Vec<String>) -> Self {
        let sanitizer = PathSanitizer::new(strip_prefixes).with_root(root_prefix(&source_root));

        Self {
            source_root,
            sanitizer,
            hasher,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn strip_prefixes(&self) -> &[String] {
        self.sanitizer.prefixes()
    }

    pub fn sanitize(&self, path: &str) -> String {
        self.sanitizer.sanitize(path)
    }

    /// Local path of a sanitized logical path
    pub fn resolve(&self, sanitized: &str) -> PathBuf {
        let relative = sanitized.strip_prefix("./").unwrap_or(sanitized);
        self.source_root.join(relative)
    }

    /// Registers one logical file with the builder
    ///
    /// A missing file is reported as a warning and registered without a
    /// digest. A file that cannot be examined or hashed aborts the run. A
    /// different file already holding the path-derived identifier is
    /// reported, and the newcomer gets the next free suffix.
    pub fn register_file<'b, R: ProgressReporter>(
        &self,
        builder: &'b mut SbomBuilder,
        reporter: &R,
        raw_path: &str,
    ) -> Result<&'b Element> {
        let sanitized = self.sanitize(raw_path);
        let local_path = self.resolve(&sanitized);

        let hash = if self.hasher.exists(&local_path)? {
            Some(self.hasher.hash_file(&local_path)?)
        } else {
            reporter.report_warning(&format!(
                "⚠️  Warning: File not found: {} (registered without a digest)",
                local_path.display()
            ));
            None
        };

        let suffix = PathSanitizer::file_suffix(&sanitized);
        let element = Element::file(sanitized, hash);
        let unique = builder.unique_suffix(&element, &suffix);
        if unique != suffix {
            reporter.report_warning(&format!(
                "⚠️  Warning: Identifier '{}' already names a different file; registering {} as '{}'",
                suffix, raw_path, unique
            ));
        }
        Ok(builder.register(element, Some(&unique)))
    }
}

/// String form of the source root used as the final strip prefix
///
/// Trailing separators are dropped so `/src/project/` and `/src/project`
/// both sanitize `/src/project/foo.c` to `./foo.c`.
fn root_prefix(source_root: &Path) -> String {
    let root = source_root.to_string_lossy();
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() {
        root.into_owned()
    } else {
        trimmed.to_string()
    }
}
