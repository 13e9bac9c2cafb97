//! Report configuration

use std::path::PathBuf;

/// Configuration for one report run
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Output directory (None = `<input dir>/<input stem>`)
    pub output_dir: Option<PathBuf>,

    /// Class names for the audience line; only the first two are used
    pub classes: Vec<String>,

    pub instructor: Option<String>,

    /// Actual teaching hours
    pub teaching_hours: Option<u32>,

    /// Number of lab sessions held
    pub lab_sessions: Option<u32>,

    /// Header logo image
    pub logo: Option<PathBuf>,

    /// Write `<stem>_summary.json` next to the report
    pub write_summary: bool,
}

impl ReportConfig {
    /// Create a configuration with default output placement
    pub fn new() -> Self {
        Self {
            write_summary: true,
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    /// Set class names (at most two are kept)
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .take(2)
            .collect();
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    pub fn with_teaching_hours(mut self, hours: u32) -> Self {
        self.teaching_hours = Some(hours);
        self
    }

    pub fn with_lab_sessions(mut self, sessions: u32) -> Self {
        self.lab_sessions = Some(sessions);
        self
    }

    pub fn with_logo(mut self, logo: PathBuf) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_summary(mut self, enable: bool) -> Self {
        self.write_summary = enable;
        self
    }
}
