//! Unified data model for a class roster
//!
//! These types are independent of the spreadsheet layout the grades were
//! read from and of the report format they are written to.

mod category;
mod grade;
mod roster;

pub use category::ScoreCategory;
pub use grade::GradeRow;
pub use roster::{CourseInfo, Roster};
