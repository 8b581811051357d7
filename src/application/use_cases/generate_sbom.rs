use crate::application::dto::{SbomRequest, SbomResponse};
use crate::application::services::{SbomBuilder, SourceDirectoryScanner};
use crate::ports::outbound::{ContentHasher, ProgressReporter};
use crate::sbom_generation::domain::{
    Element, PackageElement, RelationshipElement, RelationshipType,
};
use crate::shared::Result;
use std::path::Path;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates one run: identity, source files, the optional
/// artifact with its package, and the verbose dump. Infrastructure is
/// injected through generics.
///
/// # Type Parameters
/// * `H` - ContentHasher implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<H, PR> {
    content_hasher: H,
    progress_reporter: PR,
}

impl<H, PR> GenerateSbomUseCase<H, PR>
where
    H: ContentHasher,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(content_hasher: H, progress_reporter: PR) -> Self {
        Self {
            content_hasher,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Returns
    /// SbomResponse holding the builder with the complete graph
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Run identity
        let builder = SbomBuilder::initialize(request.verbose, &request.comment);
        self.progress_reporter.report(&format!(
            "🔑 Run token: {}",
            builder.context().token().simple()
        ));

        let mut response = SbomResponse::new(builder);
        let scanner = SourceDirectoryScanner::new(
            &self.content_hasher,
            request.source_root.clone(),
            request.strip_prefixes.clone(),
        );

        // Step 2: Source files
        self.progress_reporter.report(&format!(
            "📖 Registering {} file(s) from: {}",
            request.files.len(),
            request.source_root.display()
        ));

        let total = request.files.len();
        for (index, path) in request.files.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(path.as_str()));

            let element = scanner.register_file(
                &mut response.builder,
                &self.progress_reporter,
                path,
            )?;
            if let Some(file) = element.as_file() {
                if file.hash.is_none() {
                    response.missing_files.push(file.name.clone());
                }
            }
            if let Some(id) = element.id() {
                response.file_ids.push(id.clone());
            }
        }

        // Step 3: Distribution artifact
        if let Some(artifact) = request.artifact.as_deref() {
            self.register_artifact(&scanner, &mut response, &request, artifact)?;
        }

        // Step 4: Debug dump
        if let Some(dump) = response.builder.debug_dump() {
            self.progress_reporter.report_debug(&dump);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Assembled {} element(s)",
            response.builder.document().elements().len()
        ));

        Ok(response)
    }

    fn register_artifact(
        &self,
        scanner: &SourceDirectoryScanner<'_, H>,
        response: &mut SbomResponse,
        request: &SbomRequest,
        artifact: &str,
    ) -> Result<()> {
        self.progress_reporter
            .report(&format!("📦 Registering artifact: {}", artifact));

        let artifact_id = scanner
            .register_file(&mut response.builder, &self.progress_reporter, artifact)?
            .id()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("artifact element has no identifier"))?;

        let package = PackageElement {
            name: request
                .package
                .name
                .clone()
                .unwrap_or_else(|| default_package_name(artifact)),
            version: request.package.version.clone(),
            comment: request.package.comment.clone(),
        };
        let package_id = response
            .builder
            .register(Element::package(package), None)
            .id()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("package element has no identifier"))?;

        let relationship = RelationshipElement::new(
            package_id.clone(),
            vec![artifact_id],
            RelationshipType::HasDistributionArtifact,
        )?;
        let relationship_id = response
            .builder
            .register(Element::relationship(relationship), None)
            .id()
            .cloned();

        response.builder.add_root_element(package_id.clone());
        response.package_id = Some(package_id);
        response.relationship_id = relationship_id;
        Ok(())
    }
}

/// File name of the artifact, or the whole path when it has none
fn default_package_name(artifact: &str) -> String {
    Path::new(artifact)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| artifact.to_string())
}
