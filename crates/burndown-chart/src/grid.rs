// File: crates/burndown-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Whole-day tick positions from 0 through `max_day` at the given step.
/// The final partial interval gets no tick, matching a fixed-step axis.
pub fn day_ticks(max_day: f64, step: usize) -> Vec<f64> {
    let step = step.max(1);
    let mut out = Vec::new();
    let mut d = 0usize;
    while (d as f64) <= max_day {
        out.push(d as f64);
        d += step;
    }
    out
}
