//! Progress reporting

/// Receives progress checkpoints: a percentage and a status line
pub trait ProgressReporter {
    fn report(&self, percent: u8, status: &str);
}

impl<F: Fn(u8, &str)> ProgressReporter for F {
    fn report(&self, percent: u8, status: &str) {
        self(percent, status)
    }
}

/// Logs each checkpoint at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, percent: u8, status: &str) {
        log::info!("[{:>3}%] {}", percent, status);
    }
}
