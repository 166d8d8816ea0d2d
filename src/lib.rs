//! Image to tactile display pattern conversion
//!
//! A raster image is reduced to foreground/background, resampled onto a fixed
//! actuator grid, and emitted as a 0/1 matrix (1 = ball raised). Statistics
//! and hardware file exports are derived from that matrix.
//!
//! ```no_run
//! use tactilegrid::analysis::binarize::Method;
//! use tactilegrid::converter::TactileConverter;
//! use tactilegrid::io::configuration::ConverterConfig;
//! use tactilegrid::io::export::ExportFormat;
//! use tactilegrid::spatial::GridSize;
//! use std::path::Path;
//!
//! # fn main() -> tactilegrid::Result<()> {
//! let converter = TactileConverter::new(GridSize::square(8), ConverterConfig::default())?;
//! let matrix = converter.process(Path::new("shape.png"), Method::Threshold, false, None)?;
//! let sketch = converter.export(&matrix, ExportFormat::Arduino)?;
//! # let _ = sketch;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Binarization, enhancement and pattern statistics
pub mod analysis;
/// Load-binarize-map pipeline
pub mod converter;
/// Input/output operations and error handling
pub mod io;
/// Filtering and rounding helpers
pub mod math;
/// Tactile matrix and grid mapping
pub mod spatial;

pub use converter::TactileConverter;
pub use io::error::{Result, TactileError};
pub use spatial::{GridSize, TactileMatrix};
