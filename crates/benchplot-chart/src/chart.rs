// File: crates/benchplot-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::series::Series;
use crate::text::TextShaper;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::{Axis, Theme};

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;
const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 11.0;
const LEGEND_SIZE: f32 = 12.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text. Off in pixel tests
    /// to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            show_grid: false,
            show_legend: false,
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padded by `margin` (fraction of span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Draw the chart onto `canvas`. The canvas is not cleared first; callers
    /// own the background.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: &TextShaper) {
        let plot = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
        let theme = &opts.theme;

        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET);

        if self.show_grid {
            draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
        }
        draw_frame(canvas, &plot, theme);
        draw_ticks(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme.series_color(i));
        }
        canvas.restore();

        if opts.draw_labels {
            draw_tick_labels(canvas, shaper, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
            draw_titles(canvas, shaper, &plot, self, opts);
        }
        if self.show_legend && !self.series.is_empty() {
            draw_legend(canvas, shaper, &plot, &self.series, opts);
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        encode_png(&mut surface)
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        read_rgba8(&mut surface)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = new_surface(opts)?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        self.draw(canvas, opts, &TextShaper::new());
        Ok(surface)
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- surfaces ---------------------------------------------------------------

/// CPU raster surface sized per `opts`.
pub fn new_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))
}

/// Snapshot `surface` and encode it as PNG.
pub fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Copy `surface` pixels out as unpremultiplied RGBA8.
pub fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let w = surface.width();
    let h = surface.height();
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back {}x{} pixels", w, h);
    }
    Ok((pixels, w as u32, h as u32, stride))
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, 1.0);
    for &v in x_ticks {
        let x = x_axis.to_px(v, plot.left, plot.right);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for &v in y_ticks {
        let y = y_axis.to_px(v, plot.bottom, plot.top);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_rect(skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom), &paint);
}

fn draw_ticks(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.tick, 1.0);
    for &v in x_ticks {
        let x = x_axis.to_px(v, plot.left, plot.right);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + 5.0), &paint);
    }
    for &v in y_ticks {
        let y = y_axis.to_px(v, plot.bottom, plot.top);
        canvas.draw_line((plot.left - 5.0, y), (plot.left, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let x_step = nice_step(x_axis.max - x_axis.min, X_TICK_TARGET);
    for &v in x_ticks {
        let x = x_axis.to_px(v, plot.left, plot.right);
        shaper.draw_centered(canvas, &format_tick(v, x_step), x, plot.bottom + 20.0, TICK_SIZE, theme.tick, true);
    }
    let y_step = nice_step(y_axis.max - y_axis.min, Y_TICK_TARGET);
    for &v in y_ticks {
        let y = y_axis.to_px(v, plot.bottom, plot.top);
        shaper.draw_right(canvas, &format_tick(v, y_step), plot.left - 8.0, y + TICK_SIZE * 0.4, TICK_SIZE, theme.tick, true);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, plot: &PlotRect, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    let cx = plot.left + plot.width() * 0.5;
    let cy = plot.top + plot.height() * 0.5;
    if !chart.title.is_empty() {
        shaper.draw_centered(canvas, &chart.title, cx, plot.top - 18.0, TITLE_SIZE, theme.title, false);
    }
    if !chart.x_axis.label.is_empty() {
        shaper.draw_centered(canvas, &chart.x_axis.label, cx, plot.bottom + 48.0, LABEL_SIZE, theme.axis_label, false);
    }
    if !chart.y_axis.label.is_empty() {
        let x = (plot.left - opts.insets.left as f32 * 0.75).max(LABEL_SIZE);
        shaper.draw_vertical(canvas, &chart.y_axis.label, x, cy, LABEL_SIZE, theme.axis_label);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let data = &series.data_xy;
    let sx = |x: f64| -> f32 { x_axis.to_px(x, plot.left, plot.right) };
    let sy = |y: f64| -> f32 { y_axis.to_px(y, plot.bottom, plot.top) };

    match data.len() {
        0 => {}
        1 => {
            let (x, y) = data[0];
            canvas.draw_circle((sx(x), sy(y)), 3.0, &fill_paint(color));
        }
        _ => {
            let mut path = skia::Path::new();
            let (x0, y0) = data[0];
            path.move_to((sx(x0), sy(y0)));
            for &(x, y) in data.iter().skip(1) {
                path.line_to((sx(x), sy(y)));
            }
            canvas.draw_path(&path, &stroke_paint(color, 2.0));
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, plot: &PlotRect, series: &[Series], opts: &RenderOptions) {
    let theme = &opts.theme;
    let pad = 8.0f32;
    let swatch = 24.0f32;
    let row_h = LEGEND_SIZE + 8.0;

    let text_w = if opts.draw_labels {
        series
            .iter()
            .map(|s| shaper.measure_width(&s.label, LEGEND_SIZE, false))
            .fold(0.0f32, f32::max)
    } else {
        0.0
    };

    let left = plot.left + 10.0;
    let top = plot.top + 10.0;
    let w = pad * 3.0 + swatch + text_w;
    let h = pad * 2.0 + row_h * series.len() as f32;
    let rect = skia::Rect::from_xywh(left, top, w, h);
    let mut bg = fill_paint(theme.legend_background);
    canvas.draw_round_rect(rect, 3.0, 3.0, &bg);
    bg = stroke_paint(theme.legend_border, 1.0);
    canvas.draw_round_rect(rect, 3.0, 3.0, &bg);

    for (i, s) in series.iter().enumerate() {
        let mid = top + pad + row_h * i as f32 + row_h * 0.5;
        let x0 = left + pad;
        canvas.draw_line((x0, mid), (x0 + swatch, mid), &stroke_paint(theme.series_color(i), 2.0));
        if opts.draw_labels {
            shaper.draw_left(canvas, &s.label, x0 + swatch + pad, mid + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label, false);
        }
    }
}
