use crate::application::services::SbomBuilder;
use crate::sbom_generation::domain::SpdxId;

/// SbomResponse - Internal response DTO from the SBOM generation use case
///
/// Carries the finished builder so the caller decides where the document is
/// written.
#[derive(Debug)]
pub struct SbomResponse {
    /// Builder holding the run identity and the complete graph
    pub builder: SbomBuilder,
    /// File elements registered for the logical files, in order
    pub file_ids: Vec<SpdxId>,
    /// Logical files that were not found on disk
    pub missing_files: Vec<String>,
    /// Package describing the artifact, when one was given
    pub package_id: Option<SpdxId>,
    /// `hasDistributionArtifact` edge, when an artifact was given
    pub relationship_id: Option<SpdxId>,
}

impl SbomResponse {
    pub fn new(builder: SbomBuilder) -> Self {
        Self {
            builder,
            file_ids: Vec::new(),
            missing_files: Vec::new(),
            package_id: None,
            relationship_id: None,
        }
    }
}
