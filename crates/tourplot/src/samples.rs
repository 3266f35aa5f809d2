//! Record samples for tests

use std::path::PathBuf;

use crate::geometry::Point;
use crate::record::Record;

/// Temporary directory to hold record files
///
/// The directory is removed when the returned value is dropped.
pub(crate) fn records_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// A 4x4 square visited counterclockwise
pub(crate) fn square() -> Record {
    Record::new(
        vec![
            Point::new(0., 0.),
            Point::new(4., 4.),
            Point::new(4., 0.),
            Point::new(0., 4.),
        ],
        vec![0, 2, 1, 3],
        "16.000000",
        "2",
    )
    .unwrap()
}

pub(crate) fn write_record(dir: &tempfile::TempDir, name: &str, record: &Record) -> PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    record.write(std::io::BufWriter::new(file)).unwrap();
    path
}

pub(crate) fn write_text(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}
