//! Tests for pattern statistics on the physical display

#[cfg(test)]
mod tests {
    use tactilegrid::analysis::statistics::{Statistics, statistics};
    use tactilegrid::io::configuration::DisplaySpec;
    use tactilegrid::spatial::matrix::TactileMatrix;

    // Tests the all-lowered 4x4 pattern on the default display
    // Verified by computing width from rows
    #[test]
    fn test_empty_four_by_four() {
        if let Ok(matrix) = TactileMatrix::filled(4, 4, false) {
            let stats = statistics(&matrix, &DisplaySpec::default());

            assert_eq!(stats.total_points, 16);
            assert_eq!(stats.points_raised, 0);
            assert_eq!(stats.points_lowered, 16);
            assert!((stats.coverage_percent - 0.0).abs() < f64::EPSILON);
            assert!((stats.display_width_mm - 14.0).abs() < f64::EPSILON);
            assert!((stats.display_height_mm - 14.0).abs() < f64::EPSILON);
            assert!((stats.display_weight_g - 1.8).abs() < 1e-9);
        } else {
            unreachable!("4x4 matrix is valid");
        }
    }

    // Tests weight scales with every ball, raised or not
    // Verified by multiplying weight by raised count only
    #[test]
    fn test_weight_counts_all_balls() {
        if let Ok(matrix) = TactileMatrix::filled(8, 8, true) {
            let stats = statistics(&matrix, &DisplaySpec::default());
            assert!((stats.display_weight_g - 7.0).abs() < 1e-9);
            assert!((stats.coverage_percent - 100.0).abs() < f64::EPSILON);
        } else {
            unreachable!("8x8 matrix is valid");
        }
    }

    // Tests width follows columns and height follows rows
    // Verified by swapping the two
    #[test]
    fn test_non_square_geometry() {
        if let Ok(matrix) = TactileMatrix::from_rows(&[vec![1, 0, 0], vec![0, 0, 1]]) {
            let stats = Statistics::compute(&matrix, 3.5, 0.11);

            assert_eq!(stats.total_points, 6);
            assert_eq!(stats.points_raised, 2);
            assert!((stats.display_width_mm - 10.5).abs() < 1e-9);
            assert!((stats.display_height_mm - 7.0).abs() < 1e-9);
            assert!((stats.coverage_percent - 33.3).abs() < 1e-9);
        } else {
            unreachable!("2x3 matrix is valid");
        }
    }

    // Tests raised and lowered always partition the total
    // Verified by counting lowered as total minus one
    #[test]
    fn test_counts_partition_total() {
        let rows = vec![vec![1, 0, 1, 1], vec![0, 0, 0, 1], vec![1, 1, 1, 1]];
        if let Ok(matrix) = TactileMatrix::from_rows(&rows) {
            let stats = statistics(&matrix, &DisplaySpec::default());
            assert_eq!(stats.points_raised + stats.points_lowered, stats.total_points);
            assert_eq!(stats.points_raised, 8);
            assert!((stats.coverage_percent - 66.7).abs() < 1e-9);
        } else {
            unreachable!("3x4 matrix is valid");
        }
    }

    // Tests a single raised ball on the default grid reports exact-half coverage rounded to even
    // Verified by rounding halves away from zero
    #[test]
    fn test_single_raised_ball_coverage() {
        let mut rows = vec![vec![0; 4]; 4];
        if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
            *first = 1;
        }
        if let Ok(matrix) = TactileMatrix::from_rows(&rows) {
            let stats = statistics(&matrix, &DisplaySpec::default());
            assert_eq!(stats.points_raised, 1);
            assert!((stats.coverage_percent - 6.2).abs() < 1e-9);
        } else {
            unreachable!("4x4 matrix is valid");
        }

        if let Ok(matrix) = TactileMatrix::from_rows(&[vec![1, 1, 1, 1], vec![1, 0, 0, 0], vec![0; 4], vec![0; 4]]) {
            let stats = statistics(&matrix, &DisplaySpec::default());
            assert!((stats.coverage_percent - 31.2).abs() < 1e-9);
        } else {
            unreachable!("4x4 matrix is valid");
        }
    }

    // Tests custom display constants act as plain multipliers
    // Verified by ignoring the spacing argument
    #[test]
    fn test_custom_display() {
        let display = DisplaySpec {
            ball_diameter_mm: 2.0,
            ball_spacing_mm: 2.5,
            ball_weight_g: 0.2,
        };
        if let Ok(matrix) = TactileMatrix::filled(16, 16, false) {
            let stats = statistics(&matrix, &display);
            assert!((stats.display_width_mm - 40.0).abs() < 1e-9);
            assert!((stats.display_weight_g - 51.2).abs() < 1e-9);
        } else {
            unreachable!("16x16 matrix is valid");
        }
    }
}
