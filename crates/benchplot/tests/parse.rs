// File: crates/benchplot/tests/parse.rs
// Purpose: Grouping of data rows under marker rows, blank-row handling, malformed input.

use benchplot::{parse_reader, MalformedInput, ParseError};

fn points(csv: &str, label: &str) -> Vec<(f64, f64)> {
    let data = parse_reader(csv.as_bytes()).expect("parse");
    data.results.get(label).expect("series present").points().collect()
}

fn malformed(csv: &str) -> (u64, MalformedInput) {
    match parse_reader(csv.as_bytes()) {
        Err(ParseError::Malformed { line, reason }) => (line, reason),
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn scenario_groups_rows_by_nearest_marker() {
    let csv = "MyBenchmark,\nN,Algorithm A\n10,5\n100,42\nN,Algorithm B\n10,3\n100,39\n";
    let data = parse_reader(csv.as_bytes()).expect("parse");
    assert_eq!(data.title, "MyBenchmark");
    assert_eq!(data.results.labels().collect::<Vec<_>>(), vec!["Algorithm A", "Algorithm B"]);
    assert_eq!(points(csv, "Algorithm A"), vec![(10.0, 5.0), (100.0, 42.0)]);
    assert_eq!(points(csv, "Algorithm B"), vec![(10.0, 3.0), (100.0, 39.0)]);
}

#[test]
fn rows_keep_file_order_within_series() {
    let csv = "t\nN,s\n1000,9\n10,1\n100,4\n";
    assert_eq!(points(csv, "s"), vec![(1000.0, 9.0), (10.0, 1.0), (100.0, 4.0)]);
}

#[test]
fn many_series_in_first_seen_order() {
    let mut csv = String::from("title\n");
    let labels = ["zeta", "alpha", "mid", "beta"];
    for (i, label) in labels.iter().enumerate() {
        csv.push_str(&format!("N,{label}\n"));
        for n in 1..=3 {
            csv.push_str(&format!("{},{}\n", n * 10, i * 100 + n));
        }
    }
    let data = parse_reader(csv.as_bytes()).expect("parse");
    assert_eq!(data.results.labels().collect::<Vec<_>>(), labels.to_vec());
    for (i, label) in labels.iter().enumerate() {
        let ys = &data.results.get(label).unwrap().ys;
        assert_eq!(ys, &vec![(i * 100 + 1) as f64, (i * 100 + 2) as f64, (i * 100 + 3) as f64]);
    }
}

#[test]
fn blank_rows_do_not_change_series() {
    let plain = "t\nN,s\n10,1\n20,2\nN,u\n10,3\n";
    let blanks = "t\n\nN,s\n10,1\n\n\n20,2\n\nN,u\n10,3\n\n";
    assert_eq!(parse_reader(plain.as_bytes()).unwrap(), parse_reader(blanks.as_bytes()).unwrap());
}

#[test]
fn rows_of_empty_cells_are_skipped() {
    let csv = "t\nN,s\n10,1\n,\n20,2\n";
    assert_eq!(points(csv, "s"), vec![(10.0, 1.0), (20.0, 2.0)]);
}

#[test]
fn crlf_line_endings() {
    let csv = "t\r\nN,s\r\n10,1\r\n20,2\r\n";
    assert_eq!(points(csv, "s"), vec![(10.0, 1.0), (20.0, 2.0)]);
}

#[test]
fn repeated_marker_resets_series() {
    let csv = "t\nN,a\n1,1\nN,b\n1,2\nN,a\n5,5\n";
    let data = parse_reader(csv.as_bytes()).expect("parse");
    assert_eq!(data.results.labels().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(points(csv, "a"), vec![(5.0, 5.0)]);
    assert_eq!(points(csv, "b"), vec![(1.0, 2.0)]);
}

#[test]
fn marker_without_rows_is_kept_empty() {
    let csv = "t\nN,empty\nN,full\n1,1\n";
    let data = parse_reader(csv.as_bytes()).expect("parse");
    assert_eq!(data.results.len(), 2);
    assert!(data.results.get("empty").unwrap().is_empty());
}

#[test]
fn title_and_labels_are_verbatim() {
    let csv = " Sorting (std) ,ignored,cells\nN, quick sort \n1,2,extra\n";
    let data = parse_reader(csv.as_bytes()).expect("parse");
    assert_eq!(data.title, " Sorting (std) ");
    assert_eq!(points(csv, " quick sort "), vec![(1.0, 2.0)]);
}

#[test]
fn header_only_file_has_no_series() {
    let data = parse_reader("Just a title\n".as_bytes()).expect("parse");
    assert_eq!(data.title, "Just a title");
    assert!(data.results.is_empty());
}

#[test]
fn fractional_times_from_benchmark_export() {
    let csv = "Maps\nN,HashMap insert\n1000,0.0001234567\n10000,0.001302\n";
    assert_eq!(points(csv, "HashMap insert"), vec![(1000.0, 0.0001234567), (10000.0, 0.001302)]);
}

#[test]
fn empty_input_has_no_header() {
    assert_eq!(malformed(""), (1, MalformedInput::MissingHeader));
}

#[test]
fn rows_of_empty_cells_before_header_are_skipped() {
    let data = parse_reader(",,\n\nTitle\nN,s\n1,2\n".as_bytes()).expect("parse");
    assert_eq!(data.title, "Title");
    assert_eq!(points(",,\nTitle\nN,s\n1,2\n", "s"), vec![(1.0, 2.0)]);
}

#[test]
fn only_blank_rows_has_no_header() {
    assert_eq!(malformed(",\n,,\n\n"), (1, MalformedInput::MissingHeader));
}

#[test]
fn data_before_marker_is_rejected() {
    assert_eq!(malformed("t\n10,5\n"), (2, MalformedInput::NoActiveSeries));
}

#[test]
fn marker_needs_label() {
    assert_eq!(malformed("t\nN\n"), (2, MalformedInput::MissingLabel));
}

#[test]
fn data_row_needs_time() {
    assert_eq!(malformed("t\nN,s\n10\n"), (3, MalformedInput::MissingValue));
}

#[test]
fn non_numeric_cells_are_rejected() {
    let (line, reason) = malformed("t\nN,s\n10,5\nten,6\n");
    assert_eq!(line, 4);
    assert_eq!(reason, MalformedInput::NotANumber { column: "x", value: "ten".into() });
}

#[test]
fn invalid_utf8_is_malformed() {
    let bytes: &[u8] = b"t\nN,s\n10,\xff\n";
    match parse_reader(bytes) {
        Err(ParseError::Malformed { reason: MalformedInput::Csv(_), .. }) => {}
        other => panic!("expected csv error, got {other:?}"),
    }
}
