/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, serializers).
pub mod content_hasher;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use content_hasher::ContentHasher;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
