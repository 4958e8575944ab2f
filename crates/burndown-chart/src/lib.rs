// File: crates/burndown-chart/src/lib.rs
// Summary: Renderer library entry point; exports the burndown chart rendering API.

pub mod axis;
pub mod chart;
pub mod grid;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{BurndownChart, RenderOptions};
pub use scale::LinearScale;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
