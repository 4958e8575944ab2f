// File: crates/burndown-core/src/report.rs
// Summary: Pipeline entry point producing the renderer-facing report.

use crate::annotate::{annotate_milestones, MilestoneAnnotation};
use crate::error::BurndownError;
use crate::model::ProjectData;
use crate::scope::total_scope;
use crate::series::{actual_series, ideal_series, SeriesPoint};
use crate::timeline::{Timeline, TimelinePoint};

/// Everything a renderer needs: numeric series and labels, never raw task
/// or milestone records.
#[derive(Debug, Clone, PartialEq)]
pub struct BurndownReport {
    /// One entry per calendar day, start through end inclusive.
    pub timeline: Vec<TimelinePoint>,
    /// Theoretical linear burndown, one point per timeline day.
    pub ideal: Vec<SeriesPoint>,
    /// Measured curve: anchor at {0, total_scope} plus one point per
    /// completed task, ascending by day offset.
    pub actual: Vec<SeriesPoint>,
    /// Milestone labels resolved to whole-day offsets, in ledger order.
    pub milestones: Vec<MilestoneAnnotation>,
    /// Total planned effort; axis scaling hint for the renderer.
    pub total_scope: f64,
}

/// Run the full transformation. Deterministic and pure: identical input
/// yields bit-identical series, so there is nothing to retry on failure.
pub fn build_report(project: &ProjectData) -> Result<BurndownReport, BurndownError> {
    let end = project.end_date().ok_or_else(|| {
        BurndownError::InvalidData(
            "at least one milestone is required to define the project end date".into(),
        )
    })?;

    let total_scope = total_scope(&project.tasks)?;
    let timeline = Timeline::build(project.start_date, end)?;

    let ideal = ideal_series(total_scope, &timeline);
    let actual = actual_series(&project.tasks, project.start_date, total_scope);
    let milestones = annotate_milestones(&project.milestones, project.start_date);

    Ok(BurndownReport {
        timeline: timeline.points().to_vec(),
        ideal,
        actual,
        milestones,
        total_scope,
    })
}

impl BurndownReport {
    /// Last timeline day offset (0 for a single-day project).
    pub fn last_day_offset(&self) -> i64 {
        self.timeline.last().map(|p| p.day_offset).unwrap_or(0)
    }
}
