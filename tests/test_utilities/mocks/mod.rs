/// Mock implementations for testing
mod mock_content_hasher;
mod mock_progress_reporter;

pub use mock_content_hasher::MockContentHasher;
pub use mock_progress_reporter::MockProgressReporter;
