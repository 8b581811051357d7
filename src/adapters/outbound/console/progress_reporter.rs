use crate::ports::outbound::ProgressReporter;
use tracing::{debug, info, warn};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port on top of `tracing`;
/// the subscriber installed by [`init_logging`](super::init_logging) sends
/// every event to stderr so it never mixes with document output.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        info!("{}", message);
    }

    fn report_debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        match message {
            Some(msg) => debug!("[{}/{}] {}", current, total, msg),
            None => debug!("[{}/{}]", current, total),
        }
    }

    fn report_warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        info!("{}", message);
    }
}
