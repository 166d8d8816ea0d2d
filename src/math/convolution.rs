//! Neighbourhood filters over grayscale intensity arrays
//!
//! All filters treat out-of-range neighbours as copies of the nearest edge
//! pixel (replicated border), so a uniform image produces a uniform response.

use image::GrayImage;
use ndarray::Array2;

/// 8-neighbour Laplacian used for edge magnitude
const LAPLACIAN_KERNEL: [[f64; 3]; 3] = [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]];

/// Copy a grayscale image into a `(height, width)` array of intensities
pub fn intensity_array(image: &GrayImage) -> Array2<f64> {
    let (width, height) = image.dimensions();
    let mut data: Array2<f64> = Array2::zeros((height as usize, width as usize));
    for (x, y, pixel) in image.enumerate_pixels() {
        if let Some(value) = data.get_mut((y as usize, x as usize)) {
            *value = f64::from(pixel.0[0]);
        }
    }
    data
}

/// Read a cell with replicated-border semantics
fn sample(data: &Array2<f64>, row: isize, col: isize) -> f64 {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return 0.0;
    }
    let r = row.clamp(0, rows as isize - 1) as usize;
    let c = col.clamp(0, cols as isize - 1) as usize;
    data.get((r, c)).copied().unwrap_or(0.0)
}

/// Laplacian edge magnitude clamped to the displayable range `[0, 255]`
///
/// Negative responses (the dark side of an edge) clamp to zero, matching the
/// usual "find edges" image filter.
pub fn laplacian_magnitude(data: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = data.dim();
    let mut output: Array2<f64> = Array2::zeros((rows, cols));

    for ((row, col), out) in output.indexed_iter_mut() {
        let mut sum = 0.0_f64;
        for (dr, kernel_row) in LAPLACIAN_KERNEL.iter().enumerate() {
            for (dc, weight) in kernel_row.iter().enumerate() {
                let r = row as isize + dr as isize - 1;
                let c = col as isize + dc as isize - 1;
                sum += weight * sample(data, r, c);
            }
        }
        *out = sum.clamp(0.0, 255.0);
    }

    output
}

/// Standard deviation conventionally paired with a Gaussian window size
pub fn gaussian_sigma_for_window(window: usize) -> f64 {
    0.3 * ((window as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian kernel of odd length `window`
pub fn gaussian_kernel(window: usize, sigma: f64) -> Vec<f64> {
    let radius = (window / 2) as f64;
    let weights: Vec<f64> = (0..window)
        .map(|i| {
            let x = i as f64 - radius;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Gaussian-weighted mean of each pixel's `window x window` neighbourhood
///
/// Applied as two separable passes (rows then columns).
pub fn gaussian_local_mean(data: &Array2<f64>, window: usize) -> Array2<f64> {
    let kernel = gaussian_kernel(window, gaussian_sigma_for_window(window));
    let radius = (window / 2) as isize;
    let (rows, cols) = data.dim();

    let mut horizontal: Array2<f64> = Array2::zeros((rows, cols));
    for ((row, col), out) in horizontal.indexed_iter_mut() {
        *out = kernel
            .iter()
            .enumerate()
            .map(|(k, weight)| {
                weight * sample(data, row as isize, col as isize + k as isize - radius)
            })
            .sum();
    }

    let mut output: Array2<f64> = Array2::zeros((rows, cols));
    for ((row, col), out) in output.indexed_iter_mut() {
        *out = kernel
            .iter()
            .enumerate()
            .map(|(k, weight)| {
                weight * sample(&horizontal, row as isize + k as isize - radius, col as isize)
            })
            .sum();
    }

    output
}
