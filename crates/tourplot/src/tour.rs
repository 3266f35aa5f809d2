//! Tour reconstruction
//!
//! Rebuilds the closed path visited by a tour and the direction vectors
//! used to draw arrows along it. For N points the path has N + 1 positions,
//! the first visited point being repeated at the end to close the loop.
//!
//! Every direction vector is half of the displacement to the next path
//! position, so that arrows stop midway between two cities. The last one
//! is the exception: it is the full displacement from the closing position
//! back to the first position, which is always the zero vector.

use tracing::trace;

use crate::error::Result;
use crate::geometry::Point;
use crate::record::Record;

#[derive(Clone, Debug, PartialEq)]
/// Geometry of a closed tour
pub struct Reconstruction {
    path: Vec<Point>,
    directions: Vec<Point>,
}

impl Reconstruction {
    /// Reconstruct the geometry of a validated record
    pub fn new(record: &Record) -> Self {
        let path = closed_path(&record.points, &record.tour);
        let directions = directions(&path);
        trace!(
            "Reconstructed {} path positions from {} points",
            path.len(),
            record.points.len()
        );

        Self { path, directions }
    }

    /// Visited positions, closed by repeating the first one
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Arrow vector for each path position
    pub fn directions(&self) -> &[Point] {
        &self.directions
    }
}

/// Reconstructed tour split in parallel columns, ready to be plotted
///
/// `x`, `y`, `dx` and `dy` all have one entry per path position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub dx: Vec<f64>,
    pub dy: Vec<f64>,
    pub path_length: String,
    pub elapsed_time: String,
}

impl PlotData {
    /// Reconstruct a validated record and split it in columns
    pub fn from_record(record: Record) -> Self {
        let reconstruction = Reconstruction::new(&record);
        let (x, y) = unzip(reconstruction.path());
        let (dx, dy) = unzip(reconstruction.directions());

        Self {
            x,
            y,
            dx,
            dy,
            path_length: record.path_length,
            elapsed_time: record.elapsed_time,
        }
    }

    /// Number of path positions, i.e. number of points plus one
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl TryFrom<&str> for PlotData {
    type Error = crate::Error;

    fn try_from(text: &str) -> Result<Self> {
        let record = Record::from_reader(text.as_bytes())?;
        Ok(PlotData::from_record(record))
    }
}

/// Points in visiting order, with the first visited point appended again
///
/// The tour must be non-empty with every index inside `points`, as
/// guaranteed by `Record`.
fn closed_path(points: &[Point], tour: &[usize]) -> Vec<Point> {
    let mut path = Vec::with_capacity(tour.len() + 1);
    path.extend(tour.iter().map(|&index| points[index]));
    path.push(points[tour[0]]);
    path
}

fn directions(path: &[Point]) -> Vec<Point> {
    let Some((&first, &last)) = path.first().zip(path.last()) else {
        return vec![];
    };

    let mut directions: Vec<Point> = path
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).half())
        .collect();
    // Closing vector goes back to the very first position, unhalved.
    directions.push(last - first);
    directions
}

fn unzip(points: &[Point]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|&point| <(f64, f64)>::from(point)).unzip()
}
