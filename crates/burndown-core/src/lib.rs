// File: crates/burndown-core/src/lib.rs
// Summary: Core library entry point; exports the burndown data pipeline.

pub mod annotate;
pub mod error;
pub mod model;
pub mod report;
pub mod scope;
pub mod series;
pub mod timeline;

pub use annotate::{annotate_milestones, MilestoneAnnotation};
pub use error::BurndownError;
pub use model::{Milestone, ProjectData, Task};
pub use report::{build_report, BurndownReport};
pub use scope::total_scope;
pub use series::{actual_series, ideal_series, points_finished_before, SeriesPoint};
pub use timeline::{days_between, Timeline, TimelinePoint};
