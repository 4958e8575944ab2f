// File: crates/burndown-core/tests/pipeline.rs
// Purpose: End-to-end report construction from JSON input, including edge cases.

use burndown_core::{build_report, BurndownError, ProjectData};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load(json: &str) -> ProjectData {
    serde_json::from_str(json).expect("valid project JSON")
}

#[test]
fn full_report_from_json() {
    let project = load(
        r#"{
            "startDate": "2024-01-01",
            "tasks": [
                { "points": 5, "completedAt": "2024-01-03" },
                { "points": 3, "completedAt": "2024-01-05" },
                { "points": 2 }
            ],
            "milestones": [
                { "name": "Alpha", "date": "2024-01-04" },
                { "name": "Launch", "date": "2024-01-06" }
            ]
        }"#,
    );
    let report = build_report(&project).unwrap();

    assert_eq!(report.total_scope, 10.0);
    assert_eq!(report.timeline.len(), 6);
    assert_eq!(report.last_day_offset(), 5);

    // Ideal: one point per day, scope/5 per day.
    assert_eq!(report.ideal.len(), 6);
    assert_eq!(report.ideal[0].y, 10.0);
    assert_eq!(report.ideal[5].y, 0.0);

    // Actual: anchor + two completions in chronological order.
    assert_eq!(report.actual.len(), 3);
    assert_eq!((report.actual[0].x, report.actual[0].y), (0.0, 10.0));
    assert_eq!((report.actual[1].x, report.actual[1].y), (2.0, 5.0));
    assert_eq!((report.actual[2].x, report.actual[2].y), (4.0, 2.0));

    // Milestones keep ledger order with whole-day offsets.
    assert_eq!(report.milestones.len(), 2);
    assert_eq!(report.milestones[0].label, "Alpha");
    assert_eq!(report.milestones[0].day_offset, 3);
    assert_eq!(report.milestones[1].label, "Launch");
    assert_eq!(report.milestones[1].day_offset, 5);
}

#[test]
fn scenario_single_task_no_completions() {
    let project = load(
        r#"{
            "startDate": "2024-01-01",
            "tasks": [ { "points": 10 } ],
            "milestones": [ { "name": "End", "date": "2024-01-06" } ]
        }"#,
    );
    let report = build_report(&project).unwrap();

    assert_eq!(report.actual.len(), 1);
    assert_eq!((report.actual[0].x, report.actual[0].y), (0.0, 10.0));
    assert_eq!(report.ideal.len(), 6);
    for (i, p) in report.ideal.iter().enumerate() {
        assert!((p.y - (10.0 - 2.0 * i as f64).max(0.0)).abs() < 1e-12);
    }
}

#[test]
fn scenario_degenerate_duration() {
    // Start equals the last milestone date: one timeline day, ideal [{0, 0}].
    let project = load(
        r#"{
            "startDate": "2024-03-15",
            "tasks": [ { "points": 7 } ],
            "milestones": [ { "name": "Ship", "date": "2024-03-15" } ]
        }"#,
    );
    let report = build_report(&project).unwrap();

    assert_eq!(report.timeline.len(), 1);
    assert_eq!(report.ideal, vec![burndown_core::SeriesPoint { x: 0.0, y: 0.0 }]);
    assert_eq!(report.actual[0].y, 7.0);
}

#[test]
fn last_milestone_by_list_order_defines_end() {
    // Milestones out of date order: the *positional* last one wins, so the
    // timeline ends 2024-01-03 even though a later date appears earlier.
    let project = load(
        r#"{
            "startDate": "2024-01-01",
            "tasks": [],
            "milestones": [
                { "name": "Late", "date": "2024-01-09" },
                { "name": "End", "date": "2024-01-03" }
            ]
        }"#,
    );
    let report = build_report(&project).unwrap();
    assert_eq!(report.last_day_offset(), 2);
    // The out-of-timeline milestone annotation is still produced.
    assert_eq!(report.milestones[0].day_offset, 8);
}

#[test]
fn end_before_start_fails() {
    let project = load(
        r#"{
            "startDate": "2024-05-01",
            "tasks": [],
            "milestones": [ { "name": "Past", "date": "2024-04-01" } ]
        }"#,
    );
    assert!(matches!(
        build_report(&project),
        Err(BurndownError::InvalidRange { .. })
    ));
}

#[test]
fn missing_milestones_fail() {
    let project = load(
        r#"{ "startDate": "2024-01-01", "tasks": [], "milestones": [] }"#,
    );
    assert!(matches!(build_report(&project), Err(BurndownError::InvalidData(_))));
}

#[test]
fn negative_points_fail() {
    let project = load(
        r#"{
            "startDate": "2024-01-01",
            "tasks": [ { "points": -1 } ],
            "milestones": [ { "name": "End", "date": "2024-01-02" } ]
        }"#,
    );
    assert!(matches!(build_report(&project), Err(BurndownError::InvalidData(_))));
}

#[test]
fn malformed_dates_rejected_at_deserialization() {
    let result: Result<ProjectData, _> = serde_json::from_str(
        r#"{
            "startDate": "not-a-date",
            "tasks": [],
            "milestones": [ { "name": "End", "date": "2024-01-02" } ]
        }"#,
    );
    assert!(result.is_err());

    // Missing required fields raise instead of defaulting.
    let result: Result<ProjectData, _> =
        serde_json::from_str(r#"{ "tasks": [], "milestones": [] }"#);
    assert!(result.is_err());
}

#[test]
fn transformation_is_idempotent() {
    let project = load(
        r#"{
            "startDate": "2024-01-01",
            "tasks": [
                { "points": 2, "completedAt": "2024-01-02" },
                { "points": 3, "completedAt": "2024-01-02" },
                { "points": 5 }
            ],
            "milestones": [ { "name": "End", "date": "2024-01-08" } ]
        }"#,
    );
    let first = build_report(&project).unwrap();
    let second = build_report(&project).unwrap();
    assert_eq!(first, second);
}

#[test]
fn completion_after_end_preserved_as_anomalous_point() {
    let project = load(
        r#"{
            "startDate": "2024-01-01",
            "tasks": [ { "points": 4, "completedAt": "2024-01-20" } ],
            "milestones": [ { "name": "End", "date": "2024-01-05" } ]
        }"#,
    );
    let report = build_report(&project).unwrap();
    // Past-the-end completion stays in the series; interpretation is the
    // renderer's concern.
    assert_eq!(report.actual[1].x, 19.0);
    assert_eq!(report.actual[1].y, 0.0);
}
