// File: crates/burndown-core/src/error.rs
// Summary: Error taxonomy for the burndown pipeline.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BurndownError {
    /// The project end date (last milestone) precedes the start date.
    #[error("end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Structurally well-formed input with values the pipeline cannot
    /// compute a correct curve from (negative points, empty milestone list).
    #[error("invalid project data: {0}")]
    InvalidData(String),
}
