use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the serialized document
/// ends up.
pub trait OutputPresenter {
    /// Presents the serialized document to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory of the destination does not exist
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn present(&self, content: &str) -> Result<()>;
}
