//! Two-level reduction of source images
//!
//! Every method works on a luminance copy of the input and follows the same
//! convention: dark subject on a light background is foreground. Foreground
//! pixels are stored dark so the grid mapper can treat every method alike.

use crate::analysis::enhance::{stretch_contrast, to_grayscale};
use crate::io::configuration::{
    ADAPTIVE_OFFSET, ADAPTIVE_WINDOW, EDGE_CONTRAST_FACTOR, EDGE_THRESHOLD, FOREGROUND_THRESHOLD,
    HIGH_CONTRAST_FACTOR,
};
use crate::math::convolution::{gaussian_local_mean, intensity_array, laplacian_magnitude};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array2;
use std::fmt;
use tracing::debug;

/// Binarization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Outline detection: contrast boost, Laplacian, low magnitude cutoff
    Edge,
    /// Global cutoff on intensity
    #[default]
    Threshold,
    /// Contrast stretch followed by the global cutoff
    HighContrast,
    /// Cutoff against a Gaussian-weighted local mean
    Adaptive,
}

impl Method {
    /// All methods in presentation order
    pub const ALL: [Self; 4] = [
        Self::Edge,
        Self::Threshold,
        Self::HighContrast,
        Self::Adaptive,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Threshold => "threshold",
            Self::HighContrast => "high_contrast",
            Self::Adaptive => "adaptive",
        }
    }

    /// Parse a method name, falling back to [`Method::Threshold`] for anything unknown
    ///
    /// Matching ignores case and accepts `-` in place of `_`. Unknown names
    /// are not an error: they select the default threshold method.
    pub fn from_name_lenient(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|method| method.name() == normalized)
            .unwrap_or_default()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Foreground/background image with the same dimensions as its source
///
/// Foreground is stored as intensity 0 and background as 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    pixels: GrayImage,
}

impl BinaryImage {
    /// Stored intensity of foreground pixels
    pub const FOREGROUND: u8 = 0;
    /// Stored intensity of background pixels
    pub const BACKGROUND: u8 = 255;

    /// Build from a per-pixel foreground predicate
    pub fn from_fn(width: u32, height: u32, mut is_foreground: impl FnMut(u32, u32) -> bool) -> Self {
        let pixels = GrayImage::from_fn(width, height, |x, y| {
            if is_foreground(x, y) {
                Luma([Self::FOREGROUND])
            } else {
                Luma([Self::BACKGROUND])
            }
        });
        Self { pixels }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Check whether the pixel at `(x, y)` is foreground
    ///
    /// Out-of-range coordinates read as background.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.pixels
            .get_pixel_checked(x, y)
            .is_some_and(|pixel| pixel.0[0] == Self::FOREGROUND)
    }

    /// Number of foreground pixels
    pub fn foreground_count(&self) -> usize {
        self.pixels
            .pixels()
            .filter(|pixel| pixel.0[0] == Self::FOREGROUND)
            .count()
    }

    /// Underlying grayscale rendition
    pub const fn as_gray(&self) -> &GrayImage {
        &self.pixels
    }
}

/// Reduce an image to foreground/background using `method`
///
/// `contrast_boost`, when present, stretches contrast before the method runs.
pub fn binarize(image: &DynamicImage, method: Method, contrast_boost: Option<f32>) -> BinaryImage {
    let mut gray = to_grayscale(image);
    if let Some(factor) = contrast_boost {
        gray = stretch_contrast(&gray, factor);
    }

    debug!(
        width = gray.width(),
        height = gray.height(),
        %method,
        "Binarizing image"
    );

    match method {
        Method::Threshold => threshold(&gray),
        Method::HighContrast => threshold(&stretch_contrast(&gray, HIGH_CONTRAST_FACTOR)),
        Method::Edge => edges(&gray),
        Method::Adaptive => adaptive(&gray),
    }
}

fn threshold(gray: &GrayImage) -> BinaryImage {
    BinaryImage::from_fn(gray.width(), gray.height(), |x, y| {
        gray.get_pixel(x, y).0[0] < FOREGROUND_THRESHOLD
    })
}

fn edges(gray: &GrayImage) -> BinaryImage {
    let boosted = stretch_contrast(gray, EDGE_CONTRAST_FACTOR);
    let magnitude = laplacian_magnitude(&intensity_array(&boosted));
    from_array(gray, &magnitude, |value| value > f64::from(EDGE_THRESHOLD))
}

fn adaptive(gray: &GrayImage) -> BinaryImage {
    let data = intensity_array(gray);
    let local_mean = gaussian_local_mean(&data, ADAPTIVE_WINDOW);
    BinaryImage::from_fn(gray.width(), gray.height(), |x, y| {
        let index = (y as usize, x as usize);
        match (data.get(index), local_mean.get(index)) {
            (Some(&value), Some(&mean)) => value <= mean - ADAPTIVE_OFFSET,
            _ => false,
        }
    })
}

fn from_array(
    gray: &GrayImage,
    data: &Array2<f64>,
    is_foreground: impl Fn(f64) -> bool,
) -> BinaryImage {
    BinaryImage::from_fn(gray.width(), gray.height(), |x, y| {
        data.get((y as usize, x as usize))
            .copied()
            .is_some_and(&is_foreground)
    })
}
