//! Decoded source images tagged with their origin

use crate::io::error::{Result, WithPath};
use crate::layout::Size;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A decoded image from the input directory
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// File the pixels came from
    pub path: PathBuf,
    /// Decoded pixels
    pub image: DynamicImage,
}

impl SourceImage {
    /// Decode the image at `path`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConversionError::UnreadableImage`] if the file cannot
    /// be opened or decoded
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).with_path(path, "decode")?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Decoded source image"
        );
        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Wrap an already decoded image
    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    /// Pixel dimensions
    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}
