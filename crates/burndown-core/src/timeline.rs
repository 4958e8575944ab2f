// File: crates/burndown-core/src/timeline.rs
// Summary: Daily project timeline built by calendar-day stepping.

use chrono::NaiveDate;

use crate::error::BurndownError;

/// One calendar day of the project timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub day_offset: i64,
    pub calendar_date: NaiveDate,
}

/// Ordered sequence of calendar days spanning start..=end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    start: NaiveDate,
    end: NaiveDate,
    points: Vec<TimelinePoint>,
}

impl Timeline {
    /// Build the inclusive daily timeline from `start` through `end`.
    ///
    /// Stepping is "add one calendar day" (`NaiveDate` successor), never a
    /// fixed millisecond increment, so the sequence stays one-per-day across
    /// daylight-saving transitions.
    pub fn build(start: NaiveDate, end: NaiveDate) -> Result<Self, BurndownError> {
        if end < start {
            return Err(BurndownError::InvalidRange { start, end });
        }
        let mut points = Vec::with_capacity((end - start).num_days() as usize + 1);
        let mut date = start;
        let mut day_offset = 0_i64;
        loop {
            points.push(TimelinePoint { day_offset, calendar_date: date });
            if date == end {
                break;
            }
            date = date.succ_opt().ok_or_else(|| {
                BurndownError::InvalidData(format!("calendar overflow stepping past {date}"))
            })?;
            day_offset += 1;
        }
        Ok(Self { start, end, points })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Elapsed span in days (end − start). One less than `len` — this is the
    /// divisor for the ideal burn rate, not the point count.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Number of timeline days (both ends inclusive).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }
}

/// Real-valued day offset of `date` from `start`. Negative when `date`
/// precedes `start`.
pub fn days_between(start: NaiveDate, date: NaiveDate) -> f64 {
    (date - start).num_days() as f64
}
