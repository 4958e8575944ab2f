// File: crates/burndown-chart/src/chart.rs
// Summary: BurndownChart and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use burndown_core::{BurndownReport, MilestoneAnnotation, SeriesPoint};

use crate::axis::Axis;
use crate::grid::{day_ticks, linspace};
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const IDEAL_LEGEND: &str = "Ideal Burndown";
const ACTUAL_LEGEND: &str = "Actual Progress";
/// Day spacing between x-axis tick labels.
const X_TICK_STEP: usize = 5;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub title: String,
    /// Disable to keep output free of font variance (golden/pixel tests).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            title: "Task-Granularity Burndown Chart".to_string(),
            draw_labels: true,
        }
    }
}

pub struct BurndownChart {
    pub report: BurndownReport,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl BurndownChart {
    /// Derive axis ranges from the report: x pinned at day 0 and spanning the
    /// timeline plus any completion past the end, y from zero to total scope
    /// with a little headroom.
    pub fn from_report(report: BurndownReport) -> Self {
        let mut x_axis = Axis::default_x();
        let mut y_axis = Axis::default_y();

        let mut x_max = report.last_day_offset() as f64;
        for p in &report.actual {
            x_max = x_max.max(p.x);
        }
        x_axis.min = 0.0;
        x_axis.max = x_max.max(1.0);

        y_axis.min = 0.0;
        y_axis.max = if report.total_scope > 0.0 { report.total_scope * 1.05 } else { 1.0 };

        Self { report, x_axis, y_axis }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and return the raw RGBA8 pixel buffer as (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        let x_scale = LinearScale::new(
            self.x_axis.min,
            self.x_axis.max,
            plot_left as f32,
            plot_right as f32,
        );
        // Bottom pixel first so larger values land higher.
        let y_scale = LinearScale::new(
            self.y_axis.min,
            self.y_axis.max,
            plot_bottom as f32,
            plot_top as f32,
        );

        draw_grid(canvas, theme, plot_left, plot_top, plot_right, plot_bottom);
        draw_axis_lines(canvas, theme, plot_left, plot_top, plot_right, plot_bottom);

        // Series are clipped to the plot rect so pre-start (negative-x)
        // completions stay out of the margins.
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(
                plot_left as f32,
                plot_top as f32,
                plot_right as f32,
                plot_bottom as f32,
            ),
            None,
            Some(true),
        );
        draw_ideal_series(canvas, theme, &x_scale, &y_scale, &self.report.ideal);
        draw_actual_series(canvas, theme, &x_scale, &y_scale, &self.report.actual);
        canvas.restore();

        draw_milestone_ticks(canvas, theme, &x_scale, plot_bottom, &self.report.milestones);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(
                canvas, theme, &shaper, &x_scale, &y_scale,
                self.x_axis.max, plot_left, plot_top, plot_bottom,
            );
            draw_milestone_labels(canvas, theme, &shaper, &x_scale, plot_bottom, &self.report.milestones);
            draw_titles(canvas, theme, &shaper, opts, plot_left, plot_top, plot_right, plot_bottom);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // Horizontal value gridlines only; the time axis stays clean.
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, theme: &Theme, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
}

fn draw_ideal_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    data: &[SeriesPoint],
) {
    if data.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to((x_scale.to_px(data[0].x), y_scale.to_px(data[0].y)));
    for p in data.iter().skip(1) {
        path.line_to((x_scale.to_px(p.x), y_scale.to_px(p.y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.ideal_stroke);
    canvas.draw_path(&path, &stroke);
}

fn draw_actual_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    data: &[SeriesPoint],
) {
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        // Translucent area between the curve and the zero baseline.
        let baseline = y_scale.to_px(0.0);
        let mut area = skia::Path::new();
        area.move_to((x_scale.to_px(data[0].x), y_scale.to_px(data[0].y)));
        for p in data.iter().skip(1) {
            area.line_to((x_scale.to_px(p.x), y_scale.to_px(p.y)));
        }
        area.line_to((x_scale.to_px(data[data.len() - 1].x), baseline));
        area.line_to((x_scale.to_px(data[0].x), baseline));
        area.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.actual_fill);
        canvas.draw_path(&area, &fill);

        let mut path = skia::Path::new();
        path.move_to((x_scale.to_px(data[0].x), y_scale.to_px(data[0].y)));
        for p in data.iter().skip(1) {
            path.line_to((x_scale.to_px(p.x), y_scale.to_px(p.y)));
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(3.0);
        stroke.set_color(theme.actual_stroke);
        canvas.draw_path(&path, &stroke);
    }

    // Round markers on every completion event (and the anchor).
    let mut marker_fill = skia::Paint::default();
    marker_fill.set_anti_alias(true);
    marker_fill.set_style(skia::paint::Style::Fill);
    marker_fill.set_color(theme.marker_fill);

    let mut marker_ring = skia::Paint::default();
    marker_ring.set_anti_alias(true);
    marker_ring.set_style(skia::paint::Style::Stroke);
    marker_ring.set_stroke_width(2.0);
    marker_ring.set_color(theme.actual_stroke);

    for p in data {
        let center = (x_scale.to_px(p.x), y_scale.to_px(p.y));
        canvas.draw_circle(center, 3.0, &marker_fill);
        canvas.draw_circle(center, 3.0, &marker_ring);
    }
}

fn draw_milestone_ticks(
    canvas: &skia::Canvas,
    theme: &Theme,
    x_scale: &LinearScale,
    plot_bottom: i32,
    milestones: &[MilestoneAnnotation],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.milestone);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for m in milestones {
        let x = x_scale.to_px(m.day_offset as f64);
        canvas.draw_line((x, plot_bottom as f32), (x, plot_bottom as f32 + 5.0), &paint);
    }
}

fn draw_milestone_labels(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    x_scale: &LinearScale,
    plot_bottom: i32,
    milestones: &[MilestoneAnnotation],
) {
    for m in milestones {
        let x = x_scale.to_px(m.day_offset as f64);
        shaper.draw_center_top(canvas, &m.label, x, plot_bottom as f32 + 24.0, 12.0, theme.milestone, true);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    x_max: f64,
    plot_left: i32,
    plot_top: i32,
    plot_bottom: i32,
) {
    // Day numbers along the time axis.
    for d in day_ticks(x_max, X_TICK_STEP) {
        shaper.draw_center_top(
            canvas,
            &format!("{}", d as i64),
            x_scale.to_px(d),
            plot_bottom as f32 + 7.0,
            12.0,
            theme.axis_label,
            false,
        );
    }
    // Remaining-effort values at each gridline.
    for y in linspace(plot_top as f64, plot_bottom as f64, 6) {
        let value = y_scale.from_px(y as f32);
        shaper.draw_right(
            canvas,
            &format_tick(value),
            plot_left as f32 - 8.0,
            y as f32 + 5.0,
            12.0,
            theme.tick_label,
        );
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    theme: &Theme,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot_left: i32,
    plot_top: i32,
    plot_right: i32,
    plot_bottom: i32,
) {
    let center_x = (plot_left + plot_right) as f32 * 0.5;

    shaper.draw_center_top(canvas, &opts.title, opts.width as f32 * 0.5, 8.0, 18.0, theme.title, true);
    draw_legend(canvas, theme, shaper, opts.width as f32 * 0.5, 34.0);

    // Axis titles: time along the bottom, effort at the top-left.
    shaper.draw_center_top(canvas, "Timeline (Days)", center_x, plot_bottom as f32 + 46.0, 14.0, theme.axis_label, false);
    shaper.draw_left(canvas, "Remaining Effort (Points)", 8.0, plot_top as f32 - 8.0, 14.0, theme.tick_label);
}

fn draw_legend(canvas: &skia::Canvas, theme: &Theme, shaper: &TextShaper, center_x: f32, y: f32) {
    let size = 12.0f32;
    let swatch = 18.0f32;
    let gap = 6.0f32;
    let spacing = 28.0f32;

    let ideal_w = swatch + gap + shaper.measure_width(IDEAL_LEGEND, size, false);
    let actual_w = swatch + gap + shaper.measure_width(ACTUAL_LEGEND, size, false);
    let total = ideal_w + spacing + actual_w;
    let mut x = center_x - total * 0.5;

    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(3.0);

    let mid = y + size * 0.5;
    line.set_color(theme.ideal_stroke);
    canvas.draw_line((x, mid), (x + swatch, mid), &line);
    shaper.draw_center_top(canvas, IDEAL_LEGEND, x + swatch + gap + (ideal_w - swatch - gap) * 0.5, y, size, theme.tick_label, false);
    x += ideal_w + spacing;

    line.set_color(theme.actual_stroke);
    canvas.draw_line((x, mid), (x + swatch, mid), &line);
    shaper.draw_center_top(canvas, ACTUAL_LEGEND, x + swatch + gap + (actual_w - swatch - gap) * 0.5, y, size, theme.tick_label, false);
}

fn format_tick(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 0.05 {
        format!("{}", rounded as i64)
    } else {
        format!("{value:.1}")
    }
}
