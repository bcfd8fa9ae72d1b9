// File: crates/benchplot-chart/src/series.rs
// Summary: Labeled line series of (x, y) points.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    /// Build from parallel x and y sequences. Extra values on the longer side are dropped.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(label, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_zips_in_order() {
        let s = Series::from_columns("a", &[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(s.data_xy, vec![(1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(s.label, "a");
    }
}
