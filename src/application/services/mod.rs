/// Application services that own the run's mutable graph state
mod sbom_builder;
mod source_scanner;

pub use sbom_builder::{SbomBuilder, AGENT_SUFFIX, DOCUMENT_SUFFIX, TOOL_NAME};
pub use source_scanner::SourceDirectoryScanner;
