// File: crates/burndown-core/src/scope.rs
// Summary: Total planned effort aggregation with point-value validation.

use crate::error::BurndownError;
use crate::model::Task;

/// Sum of all task points. Computed once per run; the constant baseline the
/// ideal and actual series burn down from.
///
/// Rejects negative and non-finite point values. Every later subtraction
/// assumes points are well-formed.
pub fn total_scope(tasks: &[Task]) -> Result<f64, BurndownError> {
    let mut total = 0.0_f64;
    for (index, task) in tasks.iter().enumerate() {
        if !task.points.is_finite() || task.points < 0.0 {
            return Err(BurndownError::InvalidData(format!(
                "task {index}: points must be a non-negative number, got {}",
                task.points
            )));
        }
        total += task.points;
    }
    Ok(total)
}
