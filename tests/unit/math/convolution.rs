//! Tests for the Laplacian and Gaussian neighbourhood filters

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use ndarray::Array2;
    use tactilegrid::math::convolution::{
        gaussian_kernel, gaussian_local_mean, gaussian_sigma_for_window, intensity_array,
        laplacian_magnitude,
    };

    // Tests intensities land at (row, col) = (y, x)
    // Verified by transposing the array
    #[test]
    fn test_intensity_array_layout() {
        let mut image = GrayImage::new(3, 2);
        image.put_pixel(2, 1, Luma([77]));
        let data = intensity_array(&image);

        assert_eq!(data.dim(), (2, 3));
        assert_eq!(data.get((1, 2)).copied(), Some(77.0));
        assert_eq!(data.get((0, 0)).copied(), Some(0.0));
    }

    // Tests a flat field has no Laplacian response, borders included
    // Verified by zero-padding the border
    #[test]
    fn test_laplacian_uniform() {
        let data = Array2::from_elem((6, 9), 180.0);
        let magnitude = laplacian_magnitude(&data);
        assert!(magnitude.iter().all(|&value| value.abs() < 1e-9));
    }

    // Tests an isolated bright pixel saturates and its neighbours clamp to zero
    // Verified by taking the absolute value instead of clamping
    #[test]
    fn test_laplacian_point() {
        let mut data: Array2<f64> = Array2::zeros((5, 5));
        if let Some(center) = data.get_mut((2, 2)) {
            *center = 255.0;
        }
        let magnitude = laplacian_magnitude(&data);

        assert_eq!(magnitude.get((2, 2)).copied(), Some(255.0));
        assert_eq!(magnitude.get((1, 2)).copied(), Some(0.0));
        assert_eq!(magnitude.get((0, 0)).copied(), Some(0.0));
    }

    // Tests the conventional sigma for the adaptive window
    // Verified by using window / 6
    #[test]
    fn test_sigma_for_window() {
        assert!((gaussian_sigma_for_window(11) - 2.0).abs() < 1e-12);
        assert!((gaussian_sigma_for_window(3) - 0.8).abs() < 1e-12);
    }

    // Tests the kernel is normalized, symmetric and peaked at the center
    // Verified by skipping normalization
    #[test]
    fn test_gaussian_kernel_shape() {
        let kernel = gaussian_kernel(11, 2.0);

        assert_eq!(kernel.len(), 11);
        assert!((kernel.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        for (left, right) in kernel.iter().zip(kernel.iter().rev()) {
            assert!((left - right).abs() < 1e-12);
        }
        assert!(kernel.iter().all(|&weight| weight <= kernel[5]));
    }

    // Tests the local mean of a flat field is the field itself
    // Verified by dropping the vertical pass
    #[test]
    fn test_local_mean_uniform() {
        let data = Array2::from_elem((20, 7), 90.0);
        let mean = gaussian_local_mean(&data, 11);

        assert_eq!(mean.dim(), (20, 7));
        assert!(mean.iter().all(|&value| (value - 90.0).abs() < 1e-9));
    }

    // Tests the local mean blurs a step between its two levels
    // Verified by returning the input unchanged
    #[test]
    fn test_local_mean_step() {
        let data = Array2::from_shape_fn((1, 20), |(_, col)| if col < 10 { 0.0 } else { 255.0 });
        let mean = gaussian_local_mean(&data, 11);

        let at = |col: usize| mean.get((0, col)).copied().unwrap_or(f64::NAN);
        assert!(at(0) < 1e-9);
        assert!(at(9) > 0.0 && at(9) < 127.5);
        assert!(at(10) > 127.5 && at(10) < 255.0);
        assert!((at(19) - 255.0).abs() < 1e-9);
    }
}
