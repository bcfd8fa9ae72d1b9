// File: crates/benchplot/src/lib.rs

//! Renders CSV benchmark results as PNG line charts.
//!
//! Each input file yields one chart of time (ms) against number of elements,
//! one line per `N,<label>` series, saved as `<stem>.png` beside the input.

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parse;
pub mod render;

pub use error::{MalformedInput, ParseError, RenderError, UsageError};
pub use output::output_path;
pub use parse::{parse_file, parse_reader, BenchmarkData, ResultSet, SeriesData};
pub use render::{build_chart, ChartRenderer};
