//! Loading source images from files, memory buffers, or decoded handles

use crate::io::configuration::ConverterConfig;
use crate::io::error::{Result, TactileError, invalid_input};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a conversion gets its image from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image file on disk
    Path(PathBuf),
    /// Encoded image bytes, e.g. an upload
    Bytes(Vec<u8>),
    /// Already decoded image
    Decoded(DynamicImage),
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(image: DynamicImage) -> Self {
        Self::Decoded(image)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Normalize any image source into one decoded image
///
/// # Errors
///
/// Returns an error if:
/// - The path has no extension or one outside the configured formats
/// - The file cannot be opened or decoded
/// - The bytes are not a recognizable image
/// - The image has zero width or height
pub fn load(source: ImageSource, config: &ConverterConfig) -> Result<DynamicImage> {
    let image = match source {
        ImageSource::Path(path) => load_path(&path, config)?,
        ImageSource::Bytes(bytes) => image::load_from_memory(&bytes)
            .map_err(|error| invalid_input(&format!("bytes are not a supported image: {error}")))?,
        ImageSource::Decoded(image) => image,
    };

    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_input(&format!(
            "image is empty ({}x{})",
            image.width(),
            image.height()
        )));
    }

    debug!(
        width = image.width(),
        height = image.height(),
        "Loaded source image"
    );
    Ok(image)
}

fn load_path(path: &Path, config: &ConverterConfig) -> Result<DynamicImage> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !config.supports_extension(extension) {
        return Err(invalid_input(&format!(
            "'{}' is not one of the supported image formats {:?}",
            path.display(),
            config.supported_image_formats
        )));
    }

    image::open(path).map_err(|error| TactileError::ImageLoad {
        path: path.to_path_buf(),
        source: error,
    })
}

/// Check whether a path looks like a loadable image
pub fn is_supported_image(path: &Path, config: &ConverterConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.supports_extension(ext))
}
