use std::path::PathBuf;

use tourplot::{Error, Grid, ParseError, RecordLine, RenderConfig, plot, read_record_file};

const TEST_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/data/records");

fn record_path(name: &str) -> PathBuf {
    PathBuf::from(TEST_DATA).join(name)
}

#[test]
fn triangle_record() {
    let data = read_record_file(record_path("triangle.txt")).unwrap();

    assert_eq!(data.x, vec![0., 10., 10., 0.]);
    assert_eq!(data.y, vec![0., 0., 10., 0.]);
    assert_eq!(data.dx, vec![5., 0., -5., 0.]);
    assert_eq!(data.dy, vec![0., 5., -5., 0.]);
    assert_eq!(data.path_length, "30");
    assert_eq!(data.elapsed_time, "5");
}

#[test]
fn solver_export_record() {
    let data = read_record_file(record_path("rectangle_export.txt")).unwrap();

    assert_eq!(data.x, vec![1., 1., 5., 5., 1.]);
    assert_eq!(data.y, vec![1., 4., 4., 1., 1.]);
    assert_eq!(data.dx, vec![0., 2., 0., -2., 0.]);
    assert_eq!(data.dy, vec![1.5, 0., -1.5, 0., 0.]);
    assert_eq!(data.path_length, "14.000000");
}

#[test]
fn single_point_record() {
    let data = read_record_file(record_path("single.txt")).unwrap();

    assert_eq!(data.x, vec![2.5, 2.5]);
    assert_eq!(data.y, vec![7.5, 7.5]);
    assert_eq!(data.dx, vec![0., 0.]);
    assert_eq!(data.dy, vec![0., 0.]);
}

#[test]
fn out_of_range_record() {
    let result = read_record_file(record_path("out_of_range.txt"));
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::IndexOutOfRange {
            position: 2,
            index: 3,
            len: 3
        }))
    ));
}

#[test]
fn expression_is_not_evaluated() {
    let result = read_record_file(record_path("expression.txt"));
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::Malformed {
            line: RecordLine::Tour,
            ..
        }))
    ));
}

#[test]
fn three_panel_figure() {
    let files = ["triangle.txt", "rectangle_export.txt", "single.txt"].map(record_path);
    let figure = plot(&files, &RenderConfig::default()).unwrap();

    assert_eq!(figure.grid, Grid { rows: 2, cols: 2 });
    assert_eq!(figure.panels.len(), 3);
    assert_eq!(figure.panels[2].arrows.len(), 2);
    assert!(figure.panels[1].title.ends_with(": length: 14.000000, time [ms]: 3"));

    let json = serde_json::to_value(&figure).unwrap();
    assert_eq!(json["panels"][0]["arrows"][1]["dy"], 5.0);
}

#[test]
fn figure_fails_on_any_bad_record() {
    let files = ["triangle.txt", "out_of_range.txt"].map(record_path);
    assert!(plot(&files, &RenderConfig::default()).is_err());
}
