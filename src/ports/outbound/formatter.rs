use crate::sbom_generation::domain::{CreationInfo, SpdxDocument};
use crate::shared::Result;

/// SbomFormatter port for serializing the finished document graph
pub trait SbomFormatter {
    /// Serializes the document and its shared creation-info record
    ///
    /// # Arguments
    /// * `document` - The document with every registered element
    /// * `creation_info` - The run's creation-info, emitted once in the graph
    ///
    /// # Returns
    /// Serialized document content
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocument, creation_info: &CreationInfo) -> Result<String>;
}
