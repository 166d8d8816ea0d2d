//! Serialization of tactile patterns into hardware file formats
//!
//! Export is purely textual: nothing here compiles or validates the output
//! against a firmware toolchain, and the matrix is never modified.

use crate::analysis::statistics::{Statistics, statistics};
use crate::io::configuration::{ARDUINO_ARRAY_NAME, DisplaySpec};
use crate::io::error::{Result, TactileError, invalid_pattern};
use crate::spatial::grid::GridSize;
use crate::spatial::matrix::TactileMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Hardware file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Digits only, one line per row
    Txt,
    /// Comma-separated digits, one line per row
    Csv,
    /// Self-describing document with pattern and statistics
    Json,
    /// Microcontroller source with a 2-D array literal
    Arduino,
}

impl ExportFormat {
    /// All formats in presentation order
    pub const ALL: [Self; 4] = [Self::Txt, Self::Arduino, Self::Json, Self::Csv];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Arduino => "arduino",
        }
    }

    /// File extension (without dot) for written files
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Arduino => "ino",
            other => other.name(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = TactileError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == normalized || format.extension() == normalized)
            .ok_or_else(|| TactileError::UnsupportedFormat {
                format: s.to_string(),
            })
    }
}

/// Row and column counts as written to JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

/// JSON snapshot of a pattern, sufficient to rebuild it and its metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDocument {
    /// Pattern dimensions
    pub grid_size: GridDimensions,
    /// Row-major cells
    pub pattern: Vec<Vec<u8>>,
    /// Metrics computed at export time
    pub statistics: Statistics,
    /// Display the metrics were computed for
    pub display: DisplaySpec,
}

impl PatternDocument {
    /// Snapshot a matrix on a display
    pub fn new(matrix: &TactileMatrix, display: DisplaySpec) -> Self {
        Self {
            grid_size: GridDimensions {
                rows: matrix.rows(),
                cols: matrix.cols(),
            },
            pattern: matrix.to_nested(),
            statistics: statistics(matrix, &display),
            display,
        }
    }

    /// Parse and validate a document produced by the JSON exporter
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid JSON for a pattern document
    /// - The pattern violates the matrix invariants
    /// - `grid_size` disagrees with the pattern's dimensions
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(text)?;
        let matrix = document.matrix()?;
        if matrix.dimensions() != (document.grid_size.rows, document.grid_size.cols) {
            return Err(invalid_pattern(&format!(
                "grid_size {}x{} does not match pattern {}x{}",
                document.grid_size.rows,
                document.grid_size.cols,
                matrix.rows(),
                matrix.cols()
            )));
        }
        Ok(document)
    }

    /// Rebuild the matrix from the stored pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern violates the matrix invariants
    pub fn matrix(&self) -> Result<TactileMatrix> {
        TactileMatrix::from_rows(&self.pattern)
    }
}

/// Writes tactile patterns in the supported hardware formats
#[derive(Debug, Clone, PartialEq)]
pub struct Exporter {
    display: DisplaySpec,
}

impl Exporter {
    /// Create an exporter for a display
    pub const fn new(display: DisplaySpec) -> Self {
        Self { display }
    }

    /// Render a matrix as text in `format`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn export(&self, matrix: &TactileMatrix, format: ExportFormat) -> Result<String> {
        debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            %format,
            "Exporting pattern"
        );
        match format {
            ExportFormat::Txt => Ok(render_rows(matrix, "")),
            ExportFormat::Csv => Ok(render_rows(matrix, ",")),
            ExportFormat::Json => self.render_json(matrix),
            ExportFormat::Arduino => Ok(self.render_arduino(matrix)),
        }
    }

    /// Render a matrix in a format given by name
    ///
    /// # Errors
    ///
    /// Returns [`TactileError::UnsupportedFormat`] for unknown names, or any
    /// error from [`Exporter::export`]
    pub fn export_named(&self, matrix: &TactileMatrix, format: &str) -> Result<String> {
        self.export(matrix, format.parse()?)
    }

    /// Export to a file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Rendering the format fails
    /// - The parent directory cannot be created
    /// - The file cannot be written
    pub fn write_hardware_file(
        &self,
        matrix: &TactileMatrix,
        output_path: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf> {
        let contents = self.export(matrix, format)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TactileError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(output_path, contents).map_err(|e| TactileError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write hardware file",
            source: e,
        })?;

        Ok(output_path.to_path_buf())
    }

    fn render_json(&self, matrix: &TactileMatrix) -> Result<String> {
        let document = PatternDocument::new(matrix, self.display);
        let mut text = serde_json::to_string_pretty(&document)?;
        text.push('\n');
        Ok(text)
    }

    fn render_arduino(&self, matrix: &TactileMatrix) -> String {
        let (rows, cols) = matrix.dimensions();
        let body: Vec<String> = matrix
            .iter_rows()
            .map(|row| format!("  {{{}}}", join_cells(row.iter(), ", ")))
            .collect();

        format!(
            "// Tactile Display Pattern - {rows}x{cols}\n\
             // {diameter:.1}mm balls, {spacing:.1}mm spacing\n\
             \n\
             const int ROWS = {rows};\n\
             const int COLS = {cols};\n\
             \n\
             const int {ARDUINO_ARRAY_NAME}[ROWS][COLS] = {{\n\
             {body}\n\
             }};\n\
             \n\
             // Usage: if ({ARDUINO_ARRAY_NAME}[row][col] == 1) raiseBall(row, col);\n",
            diameter = self.display.ball_diameter_mm,
            spacing = self.display.ball_spacing_mm,
            body = body.join(",\n"),
        )
    }
}

/// File name for a hardware export: `<stem>_<rows>x<cols>.<ext>`
pub fn hardware_file_name(stem: &str, grid: GridSize, format: ExportFormat) -> String {
    format!("{stem}_{grid}.{}", format.extension())
}

fn render_rows(matrix: &TactileMatrix, separator: &str) -> String {
    let mut out = String::with_capacity(matrix.total_points() * (separator.len() + 1));
    for row in matrix.iter_rows() {
        out.push_str(&join_cells(row.iter(), separator));
        out.push('\n');
    }
    out
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a u8>, separator: &str) -> String {
    cells
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
