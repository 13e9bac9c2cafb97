//! Report generation orchestration and output layout

pub mod config;
pub mod organizer;
pub mod pipeline;
pub mod progress;

pub use config::ReportConfig;
pub use organizer::OutputLayout;
pub use pipeline::{ReportOutcome, ReportPipeline};
pub use progress::{LogProgress, ProgressReporter};
