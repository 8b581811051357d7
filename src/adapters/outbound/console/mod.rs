/// Console adapters: logging setup and progress reporting
mod logging;
mod progress_reporter;

pub use logging::{default_directive, init_logging};
pub use progress_reporter::StderrProgressReporter;
