//! Binary actuator matrix shared by the statistics engine and exporters

use crate::io::error::{Result, invalid_pattern};
use ndarray::{Array2, ArrayView1, Axis};

/// Fixed-size grid of raised (1) and lowered (0) actuator states
///
/// Every cell is 0 or 1 and both dimensions are positive. Operations never
/// mutate a matrix in place; inversion returns a new matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TactileMatrix {
    cells: Array2<u8>,
}

impl TactileMatrix {
    /// Cell value of a raised ball
    pub const RAISED: u8 = 1;
    /// Cell value of a lowered ball
    pub const LOWERED: u8 = 0;

    /// Wrap an array after checking the matrix invariants
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - Any cell holds a value other than 0 or 1
    pub fn from_array(cells: Array2<u8>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_pattern(&format!(
                "pattern must have at least one row and column, got {rows}x{cols}"
            )));
        }
        if let Some(((row, col), value)) = cells
            .indexed_iter()
            .find(|(_, value)| **value > Self::RAISED)
        {
            return Err(invalid_pattern(&format!(
                "cell ({row}, {col}) holds {value}, expected 0 or 1"
            )));
        }
        Ok(Self { cells })
    }

    /// Build from row-major nested rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or the matrix invariants of
    /// [`TactileMatrix::from_array`] do not hold
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(invalid_pattern(&format!(
                "row {index} has {} cells, expected {cols}",
                row.len()
            )));
        }
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|error| invalid_pattern(&error))?;
        Self::from_array(cells)
    }

    /// Matrix with every cell set to the same state
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(rows: usize, cols: usize, raised: bool) -> Result<Self> {
        let value = if raised { Self::RAISED } else { Self::LOWERED };
        Self::from_array(Array2::from_elem((rows, cols), value))
    }

    /// Build from a per-cell predicate; callers guarantee positive dimensions
    pub(crate) fn from_fn(
        rows: usize,
        cols: usize,
        mut is_raised: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            if is_raised(row, col) {
                Self::RAISED
            } else {
                Self::LOWERED
            }
        });
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of actuator points
    pub fn total_points(&self) -> usize {
        self.cells.len()
    }

    /// Cell value at (row, col), if in range
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Check whether the ball at (row, col) is raised
    pub fn is_raised(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Self::RAISED)
    }

    /// Number of raised balls
    pub fn raised_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&value| value == Self::RAISED)
            .count()
    }

    /// Number of lowered balls
    pub fn lowered_count(&self) -> usize {
        self.total_points() - self.raised_count()
    }

    /// New matrix with every cell flipped
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            cells: self.cells.mapv(|value| Self::RAISED - value),
        }
    }

    /// Rows in top-to-bottom order
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, u8>> {
        self.cells.axis_iter(Axis(0))
    }

    /// Row-major nested copy of the cells
    pub fn to_nested(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<u8> {
        &self.cells
    }
}
