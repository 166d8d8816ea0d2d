//! Conversion constants and the injected display/converter configuration

use crate::analysis::binarize::Method;
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::ExportFormat;

// Binarization cutoffs, dark pixels are the subject
/// Intensity below which a pixel counts as foreground
pub const FOREGROUND_THRESHOLD: u8 = 200;
/// Contrast factor applied before the high-contrast threshold
pub const HIGH_CONTRAST_FACTOR: f32 = 2.5;
/// Contrast factor applied before edge detection
pub const EDGE_CONTRAST_FACTOR: f32 = 2.0;
/// Edge magnitude above which a pixel is an edge
pub const EDGE_THRESHOLD: u8 = 20;
/// Side length of the adaptive threshold neighbourhood (must be odd)
pub const ADAPTIVE_WINDOW: usize = 11;
/// Amount subtracted from the local mean before comparison
pub const ADAPTIVE_OFFSET: f64 = 2.0;
/// Pivot intensity for contrast stretching
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Resampled intensity below which a grid cell is raised
pub const GRID_MIDPOINT: u8 = 128;

// Content description handling
/// Contrast factor applied when a content description is present
pub const DESCRIPTION_CONTRAST_FACTOR: f32 = 2.0;
/// Maximum description characters echoed to the log
pub const DESCRIPTION_LOG_CHARS: usize = 100;

// Physical display defaults, 3mm steel balls
/// Ball diameter in millimetres
pub const DEFAULT_BALL_DIAMETER_MM: f64 = 3.0;
/// Center-to-center ball spacing in millimetres
pub const DEFAULT_BALL_SPACING_MM: f64 = 3.5;
/// Weight of a single ball in grams
pub const DEFAULT_BALL_WEIGHT_G: f64 = 0.11;

/// Square grid sizes offered for the actuator array
pub const GRID_SIZES: [usize; 4] = [4, 8, 16, 32];
/// Grid size used when none is requested
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Image file extensions the loader accepts
pub const SUPPORTED_IMAGE_FORMATS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

/// Name of the array emitted in microcontroller exports
pub const ARDUINO_ARRAY_NAME: &str = "tactilePattern";

/// Physical constants of the tactile display
///
/// Only ever used as multipliers by the statistics engine and echoed into
/// hardware file headers; never derived from an image.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplaySpec {
    /// Ball diameter in millimetres
    pub ball_diameter_mm: f64,
    /// Center-to-center spacing in millimetres
    pub ball_spacing_mm: f64,
    /// Weight of one ball in grams
    pub ball_weight_g: f64,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self {
            ball_diameter_mm: DEFAULT_BALL_DIAMETER_MM,
            ball_spacing_mm: DEFAULT_BALL_SPACING_MM,
            ball_weight_g: DEFAULT_BALL_WEIGHT_G,
        }
    }
}

/// Immutable configuration handed to a converter at construction
///
/// Each converter owns its copy, so conversions with different
/// configurations can run side by side in one process.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Physical display constants
    pub display: DisplaySpec,
    /// Allowed square grid sizes
    pub grid_sizes: Vec<usize>,
    /// Grid size used when none is requested
    pub default_grid_size: usize,
    /// Accepted image file extensions (lowercase, no dot)
    pub supported_image_formats: Vec<String>,
    /// Binarization method used when none is requested
    pub default_method: Method,
    /// Export format used when none is requested
    pub default_export_format: ExportFormat,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            display: DisplaySpec::default(),
            grid_sizes: GRID_SIZES.to_vec(),
            default_grid_size: DEFAULT_GRID_SIZE,
            supported_image_formats: SUPPORTED_IMAGE_FORMATS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            default_method: Method::Threshold,
            default_export_format: ExportFormat::Arduino,
        }
    }
}

impl ConverterConfig {
    /// Replace the display constants
    #[must_use]
    pub fn with_display(mut self, display: DisplaySpec) -> Self {
        self.display = display;
        self
    }

    /// Check that a square grid size is one of the configured sizes
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not in `grid_sizes`
    pub fn validate_grid_size(&self, size: usize) -> Result<usize> {
        if self.grid_sizes.contains(&size) {
            Ok(size)
        } else {
            Err(invalid_parameter(
                "grid_size",
                &size,
                &format!("must be one of {:?}", self.grid_sizes),
            ))
        }
    }

    /// Check whether a file extension is an accepted image format
    pub fn supports_extension(&self, extension: &str) -> bool {
        let lowered = extension.to_ascii_lowercase();
        self.supported_image_formats
            .iter()
            .any(|format| *format == lowered)
    }
}
