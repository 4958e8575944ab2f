// File: crates/burndown-cli/src/main.rs
// Summary: CLI entry point; loads a project ledger JSON and writes the burndown chart PNG.

use anyhow::{Context, Result};
use burndown_chart::{theme, BurndownChart, RenderOptions};
use burndown_core::{build_report, ProjectData};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: burndown <data-file.json> [output-file-path] [--theme light|dark] [--size WxH]";

/// Run configuration assembled from argv. Passed explicitly into the
/// pipeline; nothing in the core reads ambient state.
#[derive(Debug, Clone, PartialEq)]
struct Config {
    input: PathBuf,
    output: PathBuf,
    theme: String,
    width: i32,
    height: i32,
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut positional: Vec<&str> = Vec::new();
    let mut theme = String::from("light");
    let mut width = burndown_chart::types::WIDTH;
    let mut height = burndown_chart::types::HEIGHT;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--theme" => {
                theme = iter
                    .next()
                    .with_context(|| format!("--theme needs a value\n{USAGE}"))?
                    .clone();
            }
            "--size" => {
                let raw = iter
                    .next()
                    .with_context(|| format!("--size needs a value like 1000x600\n{USAGE}"))?;
                (width, height) = parse_size(raw)?;
            }
            other if other.starts_with("--") => {
                anyhow::bail!("unknown option '{other}'\n{USAGE}");
            }
            other => positional.push(other),
        }
    }

    let input = positional
        .first()
        .map(PathBuf::from)
        .with_context(|| format!("missing input file\n{USAGE}"))?;
    let output = ensure_png_extension(
        positional.get(1).copied().unwrap_or("chart.png").into(),
    );

    Ok(Config { input, output, theme, width, height })
}

fn parse_size(raw: &str) -> Result<(i32, i32)> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .with_context(|| format!("--size must look like 1000x600, got '{raw}'"))?;
    let width: i32 = w.trim().parse().with_context(|| format!("bad width '{w}'"))?;
    let height: i32 = h.trim().parse().with_context(|| format!("bad height '{h}'"))?;
    anyhow::ensure!(width > 0 && height > 0, "--size must be positive, got '{raw}'");
    Ok((width, height))
}

/// Append `.png` unless the path already ends with it.
fn ensure_png_extension(path: PathBuf) -> PathBuf {
    let s = path.to_string_lossy();
    if s.ends_with(".png") {
        path
    } else {
        PathBuf::from(format!("{s}.png"))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    debug!(?config, "parsed arguments");

    let raw = std::fs::read_to_string(&config.input)
        .with_context(|| format!("reading input file '{}'", config.input.display()))?;
    let project: ProjectData = serde_json::from_str(&raw)
        .with_context(|| format!("parsing project JSON '{}'", config.input.display()))?;
    info!(
        tasks = project.tasks.len(),
        milestones = project.milestones.len(),
        start = %project.start_date,
        "loaded project ledger"
    );

    let report = build_report(&project).context("building burndown report")?;
    debug!(
        total_scope = report.total_scope,
        days = report.timeline.len(),
        completions = report.actual.len() - 1,
        "computed series"
    );

    let chart = BurndownChart::from_report(report);
    let opts = RenderOptions {
        width: config.width,
        height: config.height,
        theme: theme::find(&config.theme),
        ..RenderOptions::default()
    };
    chart
        .render_to_png(&opts, &config.output)
        .with_context(|| format!("rendering chart to '{}'", config.output.display()))?;

    println!("Wrote {}", config.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_output_to_chart_png() {
        let config = parse_args(&strings(&["data.json"])).unwrap();
        assert_eq!(config.input, PathBuf::from("data.json"));
        assert_eq!(config.output, PathBuf::from("chart.png"));
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn appends_png_extension() {
        let config = parse_args(&strings(&["data.json", "out/burn"])).unwrap();
        assert_eq!(config.output, PathBuf::from("out/burn.png"));

        let config = parse_args(&strings(&["data.json", "out/burn.png"])).unwrap();
        assert_eq!(config.output, PathBuf::from("out/burn.png"));
    }

    #[test]
    fn parses_theme_and_size() {
        let config =
            parse_args(&strings(&["data.json", "--theme", "dark", "--size", "800x400"])).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!((config.width, config.height), (800, 400));
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn rejects_unknown_options_and_bad_sizes() {
        assert!(parse_args(&strings(&["data.json", "--bogus"])).is_err());
        assert!(parse_args(&strings(&["data.json", "--size", "800"])).is_err());
        assert!(parse_args(&strings(&["data.json", "--size", "0x600"])).is_err());
    }
}
