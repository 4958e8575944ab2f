// File: crates/burndown-core/src/annotate.rs
// Summary: Milestone-to-day-offset annotation mapping.

use chrono::NaiveDate;

use crate::model::Milestone;
use crate::timeline::days_between;

/// A milestone label resolved to a whole-day timeline offset. The renderer
/// maps `day_offset` through its linear x-scale to a pixel position and
/// draws the label plus a short tick at the axis baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneAnnotation {
    pub label: String,
    pub day_offset: i64,
}

/// Annotations for every milestone, in list order.
///
/// Offsets snap to whole-day ticks with round-half-away-from-zero
/// (`f64::round`), so a sub-day timestamp component never lands a label
/// between ticks.
pub fn annotate_milestones(milestones: &[Milestone], start: NaiveDate) -> Vec<MilestoneAnnotation> {
    milestones
        .iter()
        .map(|m| MilestoneAnnotation {
            label: m.name.clone(),
            day_offset: days_between(start, m.date).round() as i64,
        })
        .collect()
}
