//! Spatial data structures for the actuator grid
//!
//! This module contains:
//! - The binary tactile matrix and its invariants
//! - Resampling of binary images onto the grid

/// Grid sizing and image-to-grid resampling
pub mod grid;
/// Tactile matrix storage and queries
pub mod matrix;

pub use grid::{GridSize, to_grid};
pub use matrix::TactileMatrix;
