// File: crates/burndown-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use burndown_chart::{BurndownChart, RenderOptions};
use burndown_core::{build_report, Milestone, ProjectData, Task};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_project() -> ProjectData {
    ProjectData {
        start_date: date(2024, 1, 1),
        tasks: vec![
            Task { points: 5.0, completed_at: Some(date(2024, 1, 3)) },
            Task { points: 3.0, completed_at: Some(date(2024, 1, 5)) },
            Task { points: 2.0, completed_at: None },
        ],
        milestones: vec![
            Milestone { name: "Alpha".into(), date: date(2024, 1, 4) },
            Milestone { name: "Launch".into(), date: date(2024, 1, 8) },
        ],
    }
}

#[test]
fn render_smoke_png() {
    let report = build_report(&sample_project()).expect("report");
    let chart = BurndownChart::from_report(report);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Decoded dimensions match the requested surface
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width(), opts.width as u32);
    assert_eq!(img.height(), opts.height as u32);
}

#[test]
fn render_degenerate_single_day_project() {
    // Start equals the only milestone: one timeline day, single-point series.
    let project = ProjectData {
        start_date: date(2024, 3, 15),
        tasks: vec![Task { points: 7.0, completed_at: None }],
        milestones: vec![Milestone { name: "Ship".into(), date: date(2024, 3, 15) }],
    };
    let report = build_report(&project).expect("report");
    let chart = BurndownChart::from_report(report);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn axis_ranges_cover_report() {
    let report = build_report(&sample_project()).expect("report");
    let scope = report.total_scope;
    let last_day = report.last_day_offset();
    let chart = BurndownChart::from_report(report);

    assert_eq!(chart.x_axis.min, 0.0);
    assert!(chart.x_axis.max >= last_day as f64);
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max >= scope);
}
