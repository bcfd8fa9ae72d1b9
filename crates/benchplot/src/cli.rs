// File: crates/benchplot/src/cli.rs
// Summary: Command-line front end: argument parsing and the per-file batch loop.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use crate::error::{RenderError, UsageError};
use crate::render::ChartRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "benchplot",
    version,
    about = "Render CSV benchmark results as line charts (time vs. number of elements)"
)]
pub struct Cli {
    /// Benchmark CSV files; each one is written as <stem>.png beside it.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> Result<(), UsageError> {
        if self.files.is_empty() {
            return Err(UsageError);
        }
        Ok(())
    }
}

/// Outcome of one run over all input files.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, RenderError)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One stderr line per failed file. Printed directly so that a `RUST_LOG`
    /// filter cannot hide which files were skipped.
    pub fn report_failures(&self) {
        for (_, err) in &self.failed {
            eprintln!("error: {err}");
        }
    }
}

/// Render every file in order. A failing file is recorded in the summary and
/// skipped; only a canvas that cannot be created at all aborts the run.
pub fn run(files: &[PathBuf]) -> anyhow::Result<BatchSummary> {
    let mut renderer = ChartRenderer::new().context("creating the chart canvas")?;
    Ok(run_with(&mut renderer, files))
}

pub fn run_with(renderer: &mut ChartRenderer, files: &[PathBuf]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for path in files {
        match renderer.render(path) {
            Ok(out) => summary.written.push(out),
            Err(err) => {
                debug!(file = %path.display(), "render failed");
                summary.failed.push((path.clone(), err));
            }
        }
    }
    if !summary.failed.is_empty() {
        warn!(
            failed = summary.failed.len(),
            written = summary.written.len(),
            "some benchmark files were skipped"
        );
    }
    summary
}
