// File: crates/benchplot/src/parse.rs

//! Benchmark CSV reader.
//!
//! A file starts with a header row whose first cell is the chart title. Every
//! later row is either a marker row `N,<label>` opening a series, or a data row
//! `<elements>,<time_ms>` appended to the series opened last.

use std::fs::File;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{MalformedInput, ParseError, RenderError};

/// First cell of a row that declares a new series.
pub const MARKER: &str = "N";

/// Parallel x (element count) and y (time in ms) sequences of one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SeriesData {
    pub fn len(&self) -> usize { self.xs.len() }

    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Series of one file keyed by label, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    series: IndexMap<String, SeriesData>,
}

impl ResultSet {
    pub fn new() -> Self { Self::default() }

    /// Open `label` as an empty series and return its index. A label that
    /// already exists is reset in place and keeps its position; the second
    /// value is true in that case.
    pub fn mark(&mut self, label: &str) -> (usize, bool) {
        let (index, previous) = self.series.insert_full(label.to_owned(), SeriesData::default());
        (index, previous.is_some())
    }

    /// Append a point to the series at `index`, as returned by `mark`.
    pub fn append(&mut self, index: usize, x: f64, y: f64) {
        if let Some((_, data)) = self.series.get_index_mut(index) {
            data.xs.push(x);
            data.ys.push(y);
        }
    }

    pub fn get(&self, label: &str) -> Option<&SeriesData> {
        self.series.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesData)> {
        self.series.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }
}

/// Parsed content of one benchmark file.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkData {
    pub title: String,
    pub results: ResultSet,
}

/// Open and parse the CSV file at `path`.
pub fn parse_file(path: &Path) -> Result<BenchmarkData, RenderError> {
    let file = File::open(path)
        .map_err(|source| RenderError::NotFound { path: path.to_path_buf(), source })?;
    parse_reader(file).map_err(|err| RenderError::from_parse(path, err))
}

/// Parse benchmark CSV from any reader in a single pass.
pub fn parse_reader<R: io::Read>(reader: R) -> Result<BenchmarkData, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    // The header is the first row that is not blank, under the same rule as
    // every later row.
    let mut header = None;
    for rec in records.by_ref() {
        let rec = rec?;
        if !is_blank(&rec) {
            header = Some(rec);
            break;
        }
    }
    let header = header.ok_or_else(|| ParseError::malformed(1, MalformedInput::MissingHeader))?;
    let title = header.get(0).unwrap_or_default().to_owned();

    let mut results = ResultSet::new();
    let mut cursor: Option<usize> = None;

    for rec in records {
        let rec = rec?;
        if is_blank(&rec) {
            continue;
        }
        let line = line_of(&rec);
        let first = rec.get(0).unwrap_or_default();

        if first == MARKER {
            let label = rec
                .get(1)
                .ok_or_else(|| ParseError::malformed(line, MalformedInput::MissingLabel))?;
            let (index, reset) = results.mark(label);
            if reset {
                debug!(line, series = label, "series marked again, discarding earlier points");
            }
            cursor = Some(index);
        } else {
            let index = cursor.ok_or_else(|| ParseError::malformed(line, MalformedInput::NoActiveSeries))?;
            let y = rec
                .get(1)
                .ok_or_else(|| ParseError::malformed(line, MalformedInput::MissingValue))?;
            let x = parse_number(first, "x", line)?;
            let y = parse_number(y, "y", line)?;
            results.append(index, x, y);
        }
    }

    Ok(BenchmarkData { title, results })
}

/// No cells, or only empty ones.
fn is_blank(rec: &csv::StringRecord) -> bool {
    rec.iter().all(str::is_empty)
}

fn line_of(rec: &csv::StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_number(cell: &str, column: &'static str, line: u64) -> Result<f64, ParseError> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ParseError::malformed(line, MalformedInput::NotANumber { column, value: cell.to_owned() })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_then_append() {
        let mut set = ResultSet::new();
        let (a, reset) = set.mark("a");
        assert!(!reset);
        set.append(a, 1.0, 2.0);
        set.append(a, 3.0, 4.0);
        let data = set.get("a").unwrap();
        assert_eq!(data.xs, vec![1.0, 3.0]);
        assert_eq!(data.ys, vec![2.0, 4.0]);
    }

    #[test]
    fn remark_resets_in_place() {
        let mut set = ResultSet::new();
        let (a, _) = set.mark("a");
        set.append(a, 1.0, 1.0);
        set.mark("b");
        let (again, reset) = set.mark("a");
        assert!(reset);
        assert_eq!(again, a);
        assert!(set.get("a").unwrap().is_empty());
        assert_eq!(set.labels().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(parse_number(" 42 ", "x", 1).unwrap(), 42.0);
        assert_eq!(parse_number("0.0012345", "y", 1).unwrap(), 0.0012345);
    }

    #[test]
    fn rejects_non_finite() {
        for bad in ["abc", "", "inf", "NaN"] {
            let err = parse_number(bad, "y", 7).unwrap_err();
            assert!(matches!(
                err,
                ParseError::Malformed { line: 7, reason: MalformedInput::NotANumber { column: "y", .. } }
            ));
        }
    }
}
