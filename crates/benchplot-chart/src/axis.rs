// File: crates/benchplot-chart/src/axis.rs
// Summary: Axis model with label and data range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis with a label and the unit range; call `Chart::autoscale_axes` to fit data.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    /// Range width, never zero.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Map a data value onto `[start_px, end_px]`. `end_px` may be smaller than
    /// `start_px` (Y axes grow upwards).
    #[inline]
    pub fn to_px(&self, v: f64, start_px: f32, end_px: f32) -> f32 {
        start_px + ((v - self.min) / self.span()) as f32 * (end_px - start_px)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::labeled("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_range_endpoints() {
        let a = Axis::new("x", 10.0, 110.0);
        assert_eq!(a.to_px(10.0, 0.0, 100.0), 0.0);
        assert_eq!(a.to_px(110.0, 0.0, 100.0), 100.0);
        assert_eq!(a.to_px(60.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn maps_inverted_pixel_range() {
        let a = Axis::new("y", 0.0, 4.0);
        assert_eq!(a.to_px(0.0, 400.0, 0.0), 400.0);
        assert_eq!(a.to_px(4.0, 400.0, 0.0), 0.0);
    }
}
