// File: crates/benchplot/src/render.rs
// Summary: Benchmark file to PNG line chart on a reusable Skia canvas.

use std::fs;
use std::path::{Path, PathBuf};

use benchplot_chart::skia_safe as skia;
use benchplot_chart::{encode_png, new_surface, read_rgba8, Axis, Chart, RenderOptions, Series, TextShaper};
use tracing::{debug, info};

use crate::error::RenderError;
use crate::output::output_path;
use crate::parse::{parse_file, BenchmarkData};

pub const X_LABEL: &str = "Number of elements";
pub const Y_LABEL: &str = "Time(ms)";

/// Padding added around the data range, as a fraction of its span.
const AXIS_MARGIN: f64 = 0.05;

/// Chart for one parsed benchmark file: title from the header, one line per
/// series in first-seen order, legend and grid on.
pub fn build_chart(data: &BenchmarkData) -> Chart {
    let mut chart = Chart::with_title(data.title.as_str());
    chart.x_axis = Axis::labeled(X_LABEL);
    chart.y_axis = Axis::labeled(Y_LABEL);
    chart.show_grid = true;
    chart.show_legend = true;
    for (label, series) in data.results.iter() {
        chart.add_series(Series::from_columns(label, &series.xs, &series.ys));
    }
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}

/// Renders benchmark files one at a time onto a single reusable canvas.
pub struct ChartRenderer {
    opts: RenderOptions,
    surface: skia::Surface,
    shaper: TextShaper,
}

impl ChartRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(opts: RenderOptions) -> Result<Self, RenderError> {
        let surface = new_surface(&opts).map_err(RenderError::canvas)?;
        Ok(Self { opts, surface, shaper: TextShaper::new() })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Parse `path`, draw its chart and write it next to the input, replacing
    /// any existing image. Returns the written path.
    pub fn render(&mut self, path: &Path) -> Result<PathBuf, RenderError> {
        let out = output_path(path);
        let data = parse_file(path)?;
        for (label, series) in data.results.iter() {
            debug!(file = %path.display(), series = label, points = series.len(), "series parsed");
        }

        let chart = build_chart(&data);
        let png = self.render_chart(&chart)?;
        fs::write(&out, png).map_err(|source| RenderError::Write { path: out.clone(), source })?;

        info!(
            input = %path.display(),
            output = %out.display(),
            series = data.results.len(),
            "chart written"
        );
        Ok(out)
    }

    /// Draw `chart` on the cleared canvas and encode it as PNG.
    pub fn render_chart(&mut self, chart: &Chart) -> Result<Vec<u8>, RenderError> {
        self.draw(chart);
        encode_png(&mut self.surface).map_err(RenderError::canvas)
    }

    /// Draw `chart` on the cleared canvas and read it back as RGBA8:
    /// (pixels, width, height, row stride).
    pub fn render_chart_rgba8(&mut self, chart: &Chart) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        self.draw(chart);
        read_rgba8(&mut self.surface).map_err(RenderError::canvas)
    }

    fn draw(&mut self, chart: &Chart) {
        self.reset_canvas();
        chart.draw(self.surface.canvas(), &self.opts, &self.shaper);
    }

    /// Drop any leftover clip/transform state and paint the background, so
    /// nothing from the previous chart survives.
    fn reset_canvas(&mut self) {
        let background = self.opts.theme.background;
        let canvas = self.surface.canvas();
        canvas.restore_to_count(1);
        canvas.reset_matrix();
        canvas.clear(background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_reader;

    const SCENARIO: &str = "MyBenchmark,\nN,Algorithm A\n10,5\n100,42\nN,Algorithm B\n10,3\n100,39\n";

    #[test]
    fn scenario_chart_layout() {
        let data = parse_reader(SCENARIO.as_bytes()).unwrap();
        let chart = build_chart(&data);
        assert_eq!(chart.title, "MyBenchmark");
        assert_eq!(chart.x_axis.label, "Number of elements");
        assert_eq!(chart.y_axis.label, "Time(ms)");
        assert!(chart.show_grid);
        assert!(chart.show_legend);
        let series: Vec<_> = chart.series.iter().map(|s| (s.label.as_str(), s.data_xy.clone())).collect();
        assert_eq!(
            series,
            vec![
                ("Algorithm A", vec![(10.0, 5.0), (100.0, 42.0)]),
                ("Algorithm B", vec![(10.0, 3.0), (100.0, 39.0)]),
            ]
        );
    }

    #[test]
    fn axes_cover_all_points() {
        let data = parse_reader(SCENARIO.as_bytes()).unwrap();
        let chart = build_chart(&data);
        assert!(chart.x_axis.min < 10.0 && chart.x_axis.max > 100.0);
        assert!(chart.y_axis.min < 3.0 && chart.y_axis.max > 42.0);
    }
}
