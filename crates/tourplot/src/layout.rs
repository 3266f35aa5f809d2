//! Panel grid layout

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
/// Rows and columns of panels in a figure
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    /// Smallest near-square grid holding `n` panels
    ///
    /// One or two panels are stacked in a single column. Larger counts use
    /// `ceil(sqrt(n))` columns, so three and four panels share a 2x2 grid.
    pub fn for_panels(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::Usage(n));
        }
        if n <= 2 {
            return Ok(Self { rows: n, cols: 1 });
        }

        let mut cols = n.isqrt();
        if cols * cols < n {
            cols += 1;
        }
        let rows = n.div_ceil(cols);
        Ok(Self { rows, cols })
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Row and column of the i-th panel, filling rows first
    pub fn cell(&self, i: usize) -> (usize, usize) {
        (i / self.cols, i % self.cols)
    }
}
