//! Resampling of binary images down to the actuator grid
//!
//! The output always has exactly the requested dimensions. The source is
//! stretched or squashed as needed; there is no letterboxing or cropping.

use crate::analysis::binarize::BinaryImage;
use crate::io::configuration::GRID_MIDPOINT;
use crate::io::error::{Result, TactileError, invalid_input};
use crate::spatial::matrix::TactileMatrix;
use image::imageops::{self, FilterType};
use std::fmt;
use tracing::debug;

/// Target actuator grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl GridSize {
    /// Grid with explicit row and column counts
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Square grid of side `size`
    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Total number of actuator points
    pub const fn total_points(self) -> usize {
        self.rows * self.cols
    }

    /// Check that both dimensions are positive and fit an image dimension
    ///
    /// # Errors
    ///
    /// Returns [`TactileError::InvalidGridSize`] if either dimension is zero
    /// or too large to resample to
    pub fn validate(self) -> Result<Self> {
        let fits = u32::try_from(self.rows).is_ok() && u32::try_from(self.cols).is_ok();
        if self.rows == 0 || self.cols == 0 || !fits {
            return Err(TactileError::InvalidGridSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Resample a binary image to `target_rows x target_cols` and threshold it
///
/// Uses a windowed Lanczos filter so sparse foreground still darkens the
/// cells it falls in. A resampled intensity below the midpoint becomes a
/// raised point. `invert` flips every cell afterwards.
///
/// # Errors
///
/// Returns an error if:
/// - Either target dimension is zero ([`TactileError::InvalidGridSize`])
/// - The binary image has no pixels ([`TactileError::InvalidInput`])
pub fn to_grid(
    binary: &BinaryImage,
    target_rows: usize,
    target_cols: usize,
    invert: bool,
) -> Result<TactileMatrix> {
    let size = GridSize::new(target_rows, target_cols).validate()?;
    if binary.width() == 0 || binary.height() == 0 {
        return Err(invalid_input(&"binary image has no pixels"));
    }

    debug!(
        source_width = binary.width(),
        source_height = binary.height(),
        grid = %size,
        invert,
        "Mapping binary image to grid"
    );

    let resized = imageops::resize(
        binary.as_gray(),
        size.cols as u32,
        size.rows as u32,
        FilterType::Lanczos3,
    );

    let matrix = TactileMatrix::from_fn(size.rows, size.cols, |row, col| {
        resized
            .get_pixel_checked(col as u32, row as u32)
            .is_some_and(|pixel| pixel.0[0] < GRID_MIDPOINT)
    });

    Ok(if invert { matrix.inverted() } else { matrix })
}
