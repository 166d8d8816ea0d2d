//! Input/output: loading, export, configuration, errors and the CLI

/// Command-line batch front end
pub mod cli;
/// Constants and injected converter configuration
pub mod configuration;
/// Error taxonomy shared by every stage
pub mod error;
/// Hardware file formats and JSON snapshots
pub mod export;
/// Source image loading
pub mod image;
/// Batch progress display
pub mod progress;
/// Text previews of patterns
pub mod visualization;
