//! End-to-end conversion: load, binarize, map to grid, then report or export
//!
//! A converter owns its configuration and keeps no state between calls, so
//! separate converters (or separate calls on one) never share an image or
//! matrix.

use crate::analysis::binarize::{Method, binarize};
use crate::analysis::enhance::description_boost;
use crate::analysis::statistics::{Statistics, statistics};
use crate::io::configuration::ConverterConfig;
use crate::io::error::Result;
use crate::io::export::{ExportFormat, Exporter};
use crate::io::image::{ImageSource, load};
use crate::io::visualization::{PreviewStyle, render_preview};
use crate::spatial::grid::{GridSize, to_grid};
use crate::spatial::matrix::TactileMatrix;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Converts images into tactile patterns for one grid size and display
#[derive(Debug, Clone)]
pub struct TactileConverter {
    grid: GridSize,
    config: ConverterConfig,
    content_analysis: bool,
}

impl TactileConverter {
    /// Create a converter for a fixed grid size
    ///
    /// # Errors
    ///
    /// Returns an error if either grid dimension is zero
    pub fn new(grid: GridSize, config: ConverterConfig) -> Result<Self> {
        let grid = grid.validate()?;
        debug!(%grid, "Tactile converter initialized");
        Ok(Self {
            grid,
            config,
            content_analysis: false,
        })
    }

    /// Create a converter with the configured default square grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configured default grid size is zero
    pub fn with_defaults(config: ConverterConfig) -> Result<Self> {
        let grid = GridSize::square(config.default_grid_size);
        Self::new(grid, config)
    }

    /// Let a content description steer preprocessing
    ///
    /// When enabled and a non-empty description is passed to
    /// [`TactileConverter::process`], contrast is boosted before
    /// binarization. The description text itself is never interpreted.
    #[must_use]
    pub fn with_content_analysis(mut self, enabled: bool) -> Self {
        self.content_analysis = enabled;
        self
    }

    /// Grid size every conversion produces
    pub const fn grid(&self) -> GridSize {
        self.grid
    }

    /// Configuration this converter was built with
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the full pipeline on one image
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded or is empty
    pub fn process(
        &self,
        source: impl Into<ImageSource>,
        method: Method,
        invert: bool,
        description: Option<&str>,
    ) -> Result<TactileMatrix> {
        let image = load(source.into(), &self.config)?;
        let contrast_boost = if self.content_analysis {
            description_boost(description)
        } else {
            None
        };
        let binary = binarize(&image, method, contrast_boost);
        to_grid(&binary, self.grid.rows, self.grid.cols, invert)
    }

    /// Statistics of a matrix on this converter's display
    pub fn statistics(&self, matrix: &TactileMatrix) -> Statistics {
        statistics(matrix, &self.config.display)
    }

    /// Render a matrix in a hardware format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn export(&self, matrix: &TactileMatrix, format: ExportFormat) -> Result<String> {
        self.exporter().export(matrix, format)
    }

    /// Write a matrix to a hardware file
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing the file fails
    pub fn write_hardware_file(
        &self,
        matrix: &TactileMatrix,
        output_path: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf> {
        self.exporter()
            .write_hardware_file(matrix, output_path, format)
    }

    /// Text preview of a matrix
    pub fn preview(&self, matrix: &TactileMatrix, style: PreviewStyle) -> String {
        render_preview(matrix, style)
    }

    fn exporter(&self) -> Exporter {
        Exporter::new(self.config.display)
    }
}
