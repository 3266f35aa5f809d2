//! Solved tour records
//!
//! A record is the four line text file written by the tour solver for
//! a single instance:
//!
//! ```text
//! [[x1,y1],[x2,y2],...,[xN,yN]]
//! [p0,p1,...,p(N-1)]
//! <path length>
//! <elapsed time>
//! ```
//!
//! The first two lines are decoded as strictly typed numeric arrays,
//! anything else is rejected. The solver's own exporter writes the
//! coordinates as parenthesised pairs, e.g. `[(1.000000,2.000000)]`,
//! so parentheses are accepted as pair delimiters. The last two lines
//! are labels, kept as given.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::{Error, ParseError, Result};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// Position of a line inside a record
pub enum RecordLine {
    Points,
    Tour,
    PathLength,
    ElapsedTime,
}

impl fmt::Display for RecordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordLine::Points => "point set",
            RecordLine::Tour => "tour",
            RecordLine::PathLength => "path length",
            RecordLine::ElapsedTime => "elapsed time",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A parsed record, validated but not yet reconstructed
pub struct Record {
    pub(crate) points: Vec<Point>,
    pub(crate) tour: Vec<usize>,
    pub(crate) path_length: String,
    pub(crate) elapsed_time: String,
}

impl Record {
    /// Create a record, checking the tour against the point set
    ///
    /// Labels must fit on a single line.
    pub fn new(
        points: Vec<Point>,
        tour: Vec<usize>,
        path_length: impl Into<String>,
        elapsed_time: impl Into<String>,
    ) -> Result<Self> {
        validate(&points, &tour)?;
        let path_length = label(path_length.into(), RecordLine::PathLength)?;
        let elapsed_time = label(elapsed_time.into(), RecordLine::ElapsedTime)?;
        Ok(Self {
            points,
            tour,
            path_length,
            elapsed_time,
        })
    }

    /// Read a record from its four line text form
    ///
    /// Only the first four lines are consumed, anything after that is
    /// ignored. Line terminators are removed from the labels.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let mut next_line = |line: RecordLine| -> Result<String> {
            match lines.next() {
                Some(Ok(text)) => Ok(text),
                Some(Err(err)) if err.kind() == std::io::ErrorKind::InvalidData => {
                    Err(ParseError::Encoding(line).into())
                }
                Some(Err(err)) => Err(err.into()),
                None => Err(ParseError::MissingLine(line).into()),
            }
        };

        let points = decode_points(&next_line(RecordLine::Points)?)?;
        let tour = decode_tour(&next_line(RecordLine::Tour)?)?;
        let path_length = next_line(RecordLine::PathLength)?;
        let elapsed_time = next_line(RecordLine::ElapsedTime)?;
        trace!(
            "Decoded {} points, {} tour positions, path length {:?}, elapsed time {:?}",
            points.len(),
            tour.len(),
            path_length,
            elapsed_time
        );

        Self::new(points, tour, path_length, elapsed_time)
    }

    /// Write the record in its four line text form
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let points: Vec<[f64; 2]> = self.points.iter().copied().map(Into::into).collect();

        writeln!(writer, "{}", encode(&points)?)?;
        writeln!(writer, "{}", encode(&self.tour)?)?;
        writeln!(writer, "{}", self.path_length)?;
        writeln!(writer, "{}", self.elapsed_time)?;
        writer.flush()?;
        Ok(())
    }

    /// Coordinates of every point, in index order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Visiting order as indices into the point set
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    #[allow(missing_docs)]
    pub fn path_length(&self) -> &str {
        &self.path_length
    }

    #[allow(missing_docs)]
    pub fn elapsed_time(&self) -> &str {
        &self.elapsed_time
    }
}

fn encode<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| Error::Undefined(err.to_string()))
}

fn label(text: String, line: RecordLine) -> Result<String> {
    if text.contains(['\n', '\r']) {
        return Err(ParseError::MultilineLabel(line).into());
    }
    Ok(text)
}

fn validate(points: &[Point], tour: &[usize]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    if tour.len() != points.len() {
        return Err(ParseError::TourLength {
            expected: points.len(),
            found: tour.len(),
        }
        .into());
    }
    if let Some((position, &index)) = tour
        .iter()
        .enumerate()
        .find(|&(_, &index)| index >= points.len())
    {
        debug!("Tour position {position} is out of range ({index})");
        return Err(ParseError::IndexOutOfRange {
            position,
            index,
            len: points.len(),
        }
        .into());
    }
    Ok(())
}

/// Decode the point set line
///
/// Accepts `[[x, y], ...]` as well as `[(x, y), ...]`.
pub(crate) fn decode_points(line: &str) -> Result<Vec<Point>> {
    let normalized: String = line
        .chars()
        .map(|c| match c {
            '(' => '[',
            ')' => ']',
            c => c,
        })
        .collect();
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(&normalized).map_err(|source| ParseError::Malformed {
            line: RecordLine::Points,
            source,
        })?;
    Ok(pairs.into_iter().map(Point::from).collect())
}

/// Decode the tour line, a list of non-negative integers
pub(crate) fn decode_tour(line: &str) -> Result<Vec<usize>> {
    let tour = serde_json::from_str(line).map_err(|source| ParseError::Malformed {
        line: RecordLine::Tour,
        source,
    })?;
    Ok(tour)
}
