//! spdx-builder - SPDX 3 SBOM generation for build trees
//!
//! This library assembles an SPDX 3 JSON-LD document describing the source
//! files of a build and, optionally, the artifact it produced. It follows a
//! hexagonal layout.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): run identity, graph elements, path sanitizing
//! - **Application Layer** (`application`): the graph builder, the source scanner and the use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use spdx_builder::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(Sha256FileHasher::new(), StderrProgressReporter::new());
//!
//! let request = SbomRequest::builder()
//!     .source_root("/src/project")
//!     .artifact(Some("build/hello".to_string()))
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let writer = FileSystemWriter::in_directory(Path::new("out"));
//! response.builder.write(&SpdxJsonLdFormatter::new(), &writer)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{init_logging, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, Sha256FileHasher};
    pub use crate::adapters::outbound::formatters::SpdxJsonLdFormatter;
    pub use crate::application::dto::{PackageOptions, SbomRequest, SbomResponse};
    pub use crate::application::services::{SbomBuilder, SourceDirectoryScanner};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        ContentHasher, OutputPresenter, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        CreationInfo, Element, ElementKind, Hash, HashAlgorithm, PackageElement,
        RelationshipElement, RelationshipType, RunContext, SpdxDocument, SpdxId,
    };
    pub use crate::sbom_generation::services::PathSanitizer;
    pub use crate::shared::Result;
}
