//! # Visual inspection of solved tours
//!
//! Reads the records written by a tour solver, one per problem instance,
//! and reconstructs the closed tour of each one: visited coordinates plus
//! the direction vectors used to draw arrows along the path. Up to four
//! instances are arranged side by side as panels of a `Figure`, which an
//! external viewer draws.

mod error;
mod geometry;
mod layout;
mod record;
mod render;
#[cfg(test)]
mod samples;
mod tour;

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

pub use error::{Error, ParseError, Result};
pub use geometry::Point;
pub use layout::Grid;
pub use record::{Record, RecordLine};
pub use render::{Arrow, ArrowScale, Figure, Panel, RenderConfig, RenderConfigBuilder};
pub use tour::{PlotData, Reconstruction};

/// Largest number of records shown in a single figure
pub const MAX_RECORDS: usize = 4;

/// Parse one record and reconstruct its tour
///
/// # Arguments
/// `reader`: The four line record, see `Record`.
///
/// # Returns
/// The `x`, `y`, `dx` and `dy` columns of the closed tour, with one entry
/// per point plus the closing one, and the path length and elapsed time
/// labels as given in the record.
pub fn parse_record<R: BufRead>(reader: R) -> Result<PlotData> {
    let record = Record::from_reader(reader)?;
    Ok(PlotData::from_record(record))
}

/// Parse the record stored at `path`
pub fn read_record_file<P: AsRef<Path>>(path: P) -> Result<PlotData> {
    debug!("Reading record: {:?}", path.as_ref());
    let file = std::fs::File::open(path.as_ref())?;
    let data = parse_record(std::io::BufReader::new(file))?;
    debug!(
        "Record {:?} has {} points",
        path.as_ref(),
        data.len().saturating_sub(1)
    );
    Ok(data)
}

/// Build the figure for a collection of record files
///
/// Between 1 and `MAX_RECORDS` files are accepted, any other count fails
/// before a file is opened. Records are read in order and the first
/// invalid one aborts the whole figure.
pub fn plot<P: AsRef<Path>>(files: &[P], config: &RenderConfig) -> Result<Figure> {
    if files.is_empty() || files.len() > MAX_RECORDS {
        return Err(Error::Usage(files.len()));
    }

    let tours = files
        .iter()
        .map(|path| {
            let data = read_record_file(path)?;
            Ok((path.as_ref().to_string_lossy().into_owned(), data))
        })
        .collect::<Result<Vec<_>>>()?;

    let figure = Figure::new(&tours, config)?;
    info!("Figure ready with {} panels", figure.panels.len());
    Ok(figure)
}
