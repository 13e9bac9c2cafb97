//! Distribution chart rendering
//!
//! One bar chart per score category, drawn from the coarse distribution and
//! written as a PNG next to the report.

mod renderer;

pub use renderer::{ChartRenderer, ChartStyle, PlottersRenderer};
