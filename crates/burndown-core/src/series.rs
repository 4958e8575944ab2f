// File: crates/burndown-core/src/series.rs
// Summary: Ideal and actual remaining-effort series builders.

use chrono::NaiveDate;

use crate::model::Task;
use crate::timeline::{days_between, Timeline};

/// One point of a remaining-effort curve. `x` is a day offset from project
/// start (real-valued for the actual series), `y` is remaining points,
/// clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// Theoretical linear burndown: a constant daily rate applied across the
/// timeline, one point per day.
///
/// The rate divisor is the elapsed-day span (`end − start`), not the point
/// count, so a 5-day project burns scope/5 per day over its 6 timeline days.
pub fn ideal_series(total_scope: f64, timeline: &Timeline) -> Vec<SeriesPoint> {
    let duration = timeline.duration_days();
    if duration == 0 {
        // Single-day project: the whole scope burns on day 0.
        return vec![SeriesPoint { x: 0.0, y: 0.0 }];
    }
    let daily_burn_rate = total_scope / duration as f64;
    (0..timeline.len())
        .map(|i| SeriesPoint {
            x: i as f64,
            y: (total_scope - daily_burn_rate * i as f64).max(0.0),
        })
        .collect()
}

/// Actual remaining-effort curve replayed from task completion events.
///
/// Each completed task contributes one point: `x` is its completion day
/// offset, `y` is the scope left immediately after it finishes, having
/// subtracted everything that finished *strictly* earlier plus the task
/// itself. Tasks completing on the same day must not count each other as
/// finished, so each task re-scans the ledger with a strict `<` rather than
/// sharing a running total; two same-day tasks each report a remainder that
/// excludes the other's points. Quadratic, fine at task-ledger scale.
///
/// A completion before `start` yields a negative `x`; it is kept, not
/// clamped or dropped, and surfaces as an out-of-timeline point.
pub fn actual_series(tasks: &[Task], start: NaiveDate, total_scope: f64) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = tasks
        .iter()
        .filter_map(|task| {
            let completed = task.completed_at?;
            let finished_before = points_finished_before(tasks, completed);
            Some(SeriesPoint {
                x: days_between(start, completed),
                y: (total_scope - finished_before - task.points).max(0.0),
            })
        })
        .collect();
    // Stable sort: same-day completions keep ledger order.
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points.insert(0, SeriesPoint { x: 0.0, y: total_scope });
    points
}

/// Sum of points across tasks completed strictly before `cutoff`.
/// Monotonically non-decreasing as `cutoff` advances.
pub fn points_finished_before(tasks: &[Task], cutoff: NaiveDate) -> f64 {
    tasks
        .iter()
        .filter(|t| matches!(t.completed_at, Some(done) if done < cutoff))
        .map(|t| t.points)
        .sum()
}
