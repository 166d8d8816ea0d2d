//! Command-line interface for converting images into tactile hardware files

use crate::analysis::binarize::Method;
use crate::converter::TactileConverter;
use crate::io::configuration::{
    ConverterConfig, DEFAULT_BALL_DIAMETER_MM, DEFAULT_BALL_SPACING_MM, DEFAULT_BALL_WEIGHT_G,
    DisplaySpec,
};
use crate::io::error::{Result, TactileError, invalid_parameter};
use crate::io::export::{ExportFormat, hardware_file_name};
use crate::io::image::is_supported_image;
use crate::io::progress::ProgressManager;
use crate::io::visualization::PreviewStyle;
use crate::spatial::grid::GridSize;
use crate::spatial::matrix::TactileMatrix;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "tactilegrid")]
#[command(
    author,
    version,
    about = "Convert images into tactile display patterns and hardware files"
)]
/// Command-line arguments for the tactile conversion tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory of images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Side length of the square actuator grid: 4, 8, 16 or 32 [default: 4]
    #[arg(short, long)]
    pub grid_size: Option<usize>,

    /// Binarization method: edge, threshold, high_contrast or adaptive [default: threshold]
    #[arg(short, long)]
    pub method: Option<String>,

    /// Flip raised and lowered points
    #[arg(short, long)]
    pub invert: bool,

    /// Export format: txt, csv, json or arduino [default: arduino]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Directory for hardware files (defaults to each input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print a text preview: unicode, ascii, emoji or digits
    #[arg(short, long, value_name = "STYLE")]
    pub preview: Option<String>,

    /// Print pattern statistics
    #[arg(short, long)]
    pub stats: bool,

    /// Free-text description of the image content; enables contrast boosting
    #[arg(short, long, value_name = "TEXT")]
    pub describe: Option<String>,

    /// Ball diameter in millimetres
    #[arg(long, default_value_t = DEFAULT_BALL_DIAMETER_MM)]
    pub ball_diameter: f64,

    /// Center-to-center ball spacing in millimetres
    #[arg(long, default_value_t = DEFAULT_BALL_SPACING_MM)]
    pub ball_spacing: f64,

    /// Weight of a single ball in grams
    #[arg(long, default_value_t = DEFAULT_BALL_WEIGHT_G)]
    pub ball_weight: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Requested grid size, validated against the configured sizes
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not one of `config.grid_sizes`
    pub fn grid_size(&self, config: &ConverterConfig) -> Result<usize> {
        config.validate_grid_size(self.grid_size.unwrap_or(config.default_grid_size))
    }

    /// Binarization method, unknown names falling back to threshold
    pub fn method(&self, config: &ConverterConfig) -> Method {
        self.method
            .as_deref()
            .map_or(config.default_method, Method::from_name_lenient)
    }

    /// Requested export format
    ///
    /// # Errors
    ///
    /// Returns [`TactileError::UnsupportedFormat`] for unknown names
    pub fn export_format(&self, config: &ConverterConfig) -> Result<ExportFormat> {
        self.format
            .as_deref()
            .map_or(Ok(config.default_export_format), str::parse)
    }

    /// Display constants assembled from the ball flags
    ///
    /// # Errors
    ///
    /// Returns an error if any measurement is not a positive finite number
    pub fn display_spec(&self) -> Result<DisplaySpec> {
        let measurements = [
            ("ball_diameter", self.ball_diameter),
            ("ball_spacing", self.ball_spacing),
            ("ball_weight", self.ball_weight),
        ];
        for (parameter, value) in measurements {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a positive number",
                ));
            }
        }
        Ok(DisplaySpec {
            ball_diameter_mm: self.ball_diameter,
            ball_spacing_mm: self.ball_spacing,
            ball_weight_g: self.ball_weight,
        })
    }

    /// Default log filter for this invocation
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            "tactilegrid=debug"
        } else {
            "warn"
        }
    }
}

/// Orchestrates batch conversion of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    converter: TactileConverter,
    format: ExportFormat,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Validate CLI arguments and build the converter
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid size is not one of the configured sizes
    /// - The export format is unknown
    /// - A ball measurement is not positive
    pub fn new(cli: Cli) -> Result<Self> {
        let config = ConverterConfig::default().with_display(cli.display_spec()?);
        let grid_size = cli.grid_size(&config)?;
        let format = cli.export_format(&config)?;
        let converter = TactileConverter::new(GridSize::square(grid_size), config)?
            .with_content_analysis(cli.describe.is_some());
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            converter,
            format,
            progress_manager,
        })
    }

    /// Convert every image named by the CLI target
    ///
    /// Returns the paths of the hardware files written.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any conversion fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;
        let mut written = Vec::new();

        if files.is_empty() {
            return Ok(written);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(path) = self.process_file(file)? {
                written.push(path);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let config = self.converter.config();
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target, config) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &format!(
                        "must be an image with one of the extensions {:?}",
                        config.supported_image_formats
                    ),
                ))
            }
        } else if self.cli.target.is_dir() {
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| TactileError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && is_supported_image(&path, config) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    // Previews and statistics are the tool's primary terminal output
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path) -> Result<Option<PathBuf>> {
        let output_path = self.output_path(input_path);

        if self.cli.skip_existing() && output_path.exists() {
            debug!(input = %input_path.display(), "Skipping, output exists");
            if let Some(ref mut pm) = self.progress_manager {
                pm.skip_file();
            }
            return Ok(None);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let matrix = self.converter.process(
            input_path,
            self.cli.method(self.converter.config()),
            self.cli.invert,
            self.cli.describe.as_deref(),
        )?;
        let written = self
            .converter
            .write_hardware_file(&matrix, &output_path, self.format)?;

        if let Some(ref style) = self.cli.preview {
            let style = style.parse::<PreviewStyle>().unwrap_or_default();
            println!("{}", input_path.display());
            println!("{}", self.converter.preview(&matrix, style));
        }

        if self.cli.stats {
            print_statistics(&self.converter, &matrix);
        }

        if matrix.raised_count() == 0 {
            warn!(input = %input_path.display(), "Pattern has no raised points");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(Some(written))
    }

    /// Where the hardware file for `input_path` is written
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
        let file_name = hardware_file_name(&stem, self.converter.grid(), self.format);

        let directory = self
            .cli
            .output
            .clone()
            .or_else(|| input_path.parent().map(Path::to_path_buf));
        directory.map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
    }
}

#[allow(clippy::print_stdout)]
fn print_statistics(converter: &TactileConverter, matrix: &TactileMatrix) {
    let stats = converter.statistics(matrix);
    println!("  grid:      {}x{}", matrix.rows(), matrix.cols());
    println!(
        "  raised:    {} of {} ({}%)",
        stats.points_raised, stats.total_points, stats.coverage_percent
    );
    println!("  lowered:   {}", stats.points_lowered);
    println!(
        "  size:      {} x {} mm",
        stats.display_width_mm, stats.display_height_mm
    );
    println!("  weight:    {} g", stats.display_weight_g);
}
