// File: crates/benchplot-chart/src/theme.rs
// Summary: Light/Dark theming for chart colors and the series palette.

use skia_safe as skia;

/// Number of distinct series colors before the palette repeats.
pub const PALETTE_LEN: usize = 10;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    /// White background report style; the default for saved benchmark charts.
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 226),
            axis_line: skia::Color::from_argb(255, 40, 40, 48),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 70, 70, 80),
            title: skia::Color::from_argb(255, 10, 10, 20),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b), // brown
                skia::Color::from_argb(255, 0xe3, 0x77, 0xc2), // pink
                skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f), // gray
                skia::Color::from_argb(255, 0xbc, 0xbd, 0x22), // olive
                skia::Color::from_argb(255, 0x17, 0xbe, 0xcf), // cyan
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 160, 64),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 130, 255),
                skia::Color::from_argb(255, 200, 150, 110),
                skia::Color::from_argb(255, 255, 130, 210),
                skia::Color::from_argb(255, 170, 170, 170),
                skia::Color::from_argb(255, 220, 220, 70),
                skia::Color::from_argb(255, 60, 220, 230),
            ],
        }
    }

    /// Color of the `index`-th series, cycling through the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % PALETTE_LEN]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
