// File: crates/burndown-chart/src/theme.rs
// Summary: Light/Dark theming for burndown chart colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub ideal_stroke: skia::Color,
    pub actual_stroke: skia::Color,
    pub actual_fill: skia::Color,
    pub marker_fill: skia::Color,
    pub milestone: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 224, 224, 224),
            axis_line: skia::Color::from_argb(255, 120, 120, 130),
            axis_label: skia::Color::from_argb(255, 102, 102, 102),
            tick_label: skia::Color::from_argb(255, 51, 51, 51),
            title: skia::Color::from_argb(255, 51, 51, 51),
            ideal_stroke: skia::Color::from_argb(255, 0x4f, 0x46, 0xe5), // royal blue
            actual_stroke: skia::Color::from_argb(255, 0xef, 0x44, 0x44), // vibrant red
            actual_fill: skia::Color::from_argb(26, 0xef, 0x44, 0x44),
            marker_fill: skia::Color::from_argb(255, 255, 255, 255),
            milestone: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 170, 170, 180),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            ideal_stroke: skia::Color::from_argb(255, 0x81, 0x8c, 0xf8),
            actual_stroke: skia::Color::from_argb(255, 0xf8, 0x71, 0x71),
            actual_fill: skia::Color::from_argb(40, 0xf8, 0x71, 0x71),
            marker_fill: skia::Color::from_argb(255, 18, 18, 20),
            milestone: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
