//! Page image encoding

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{ConversionError, Result};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use std::fmt;

/// Encoding used for rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Lossy JPEG
    Jpeg,
    /// Lossless PNG
    #[default]
    Png,
}

impl OutputFormat {
    /// Short name used in messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
        }
    }

    /// Whether decoding the output reproduces the input pixels
    pub const fn is_lossless(self) -> bool {
        matches!(self, Self::Png)
    }

    /// Encode `image` into a byte buffer
    ///
    /// Alpha is discarded for JPEG, which has no alpha channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder rejects the image
    pub fn encode(self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let written = match self {
            Self::Jpeg => {
                let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY))
            }
            Self::Png => image.write_with_encoder(PngEncoder::new(&mut bytes)),
        };
        written.map_err(|source| ConversionError::ImageEncode {
            format: self.name(),
            source,
        })?;
        Ok(bytes)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
