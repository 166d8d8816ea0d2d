//! Image analysis stages and pattern statistics

/// Two-level foreground/background reduction of source images
pub mod binarize;
/// Intensity enhancement applied ahead of binarization
pub mod enhance;
/// Physical and coverage metrics derived from tactile patterns
pub mod statistics;
