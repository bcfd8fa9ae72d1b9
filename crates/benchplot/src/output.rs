// File: crates/benchplot/src/output.rs
// Summary: Output image path derivation.

use std::path::{Path, PathBuf};

/// Extension of rendered charts.
pub const IMAGE_EXTENSION: &str = "png";

/// Chart path for a benchmark file: same directory and stem, `.png` extension.
/// Only the last extension is replaced (`run.tar.csv` -> `run.tar.png`).
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(IMAGE_EXTENSION)
}
