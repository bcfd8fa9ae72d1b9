// File: crates/benchplot-chart/src/lib.rs
// Summary: Chart library entry point; exports the line-chart model and headless rendering API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod view;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions, encode_png, new_surface, read_rgba8};
pub use series::Series;
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;

/// Skia types appear in the public API (`Chart::draw`, surfaces).
pub use skia_safe;
