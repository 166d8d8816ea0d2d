//! Physical, geometric and coverage metrics of a tactile pattern

use crate::io::configuration::DisplaySpec;
use crate::math::rounding::{percentage, round_to_tenth};
use crate::spatial::matrix::TactileMatrix;
use serde::{Deserialize, Serialize};

/// Derived, read-only summary of one pattern on one display
///
/// Recomputed on demand; lengths are in millimetres, weight in grams, and
/// every fractional value is rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of actuator points (rows x cols)
    pub total_points: usize,
    /// Points set to 1
    pub points_raised: usize,
    /// Points set to 0
    pub points_lowered: usize,
    /// Raised points as a percentage of all points
    pub coverage_percent: f64,
    /// Physical width of the array
    pub display_width_mm: f64,
    /// Physical height of the array
    pub display_height_mm: f64,
    /// Combined weight of all balls
    pub display_weight_g: f64,
}

impl Statistics {
    /// Compute statistics from a matrix and the two physical multipliers
    pub fn compute(matrix: &TactileMatrix, ball_spacing_mm: f64, ball_weight_g: f64) -> Self {
        let (rows, cols) = matrix.dimensions();
        let total_points = rows * cols;
        let points_raised = matrix.raised_count();

        Self {
            total_points,
            points_raised,
            points_lowered: total_points - points_raised,
            coverage_percent: percentage(points_raised, total_points),
            display_width_mm: round_to_tenth(cols as f64 * ball_spacing_mm),
            display_height_mm: round_to_tenth(rows as f64 * ball_spacing_mm),
            display_weight_g: round_to_tenth(total_points as f64 * ball_weight_g),
        }
    }
}

/// Compute statistics for a matrix on the given display
pub fn statistics(matrix: &TactileMatrix, display: &DisplaySpec) -> Statistics {
    Statistics::compute(matrix, display.ball_spacing_mm, display.ball_weight_g)
}
