// File: crates/burndown-core/src/model.rs
// Summary: Input data model (tasks, milestones, project root) as deserialized from JSON.

use chrono::NaiveDate;
use serde::Deserialize;

/// A unit of planned work. Immutable once loaded.
///
/// A task without `completed_at` contributes to scope but never to the
/// actual-progress curve.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub points: f64,
    #[serde(default, rename = "completedAt")]
    pub completed_at: Option<NaiveDate>,
}

/// A labeled point in project time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub date: NaiveDate,
}

/// Root input; read-only for the whole pipeline.
///
/// The last milestone *by list order* defines the project end date. This is
/// a positional convention carried over from the ledger format, not a
/// sorted-by-date guarantee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub start_date: NaiveDate,
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
}

impl ProjectData {
    /// End date per the positional last-milestone convention.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.milestones.last().map(|m| m.date)
    }
}
