//! Raster canvas that images are fitted and pasted onto

use crate::compose::color::Color;
use crate::layout::{Rect, Size};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Fixed-size RGB surface with a uniform background
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled with `background`
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            pixels: RgbImage::from_pixel(size.width, size.height, background.to_rgb()),
        }
    }

    /// Canvas dimensions
    pub fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    /// Scale and crop `image` to exactly cover `rect`, then paste it
    ///
    /// Pixels replace what is underneath; nothing is blended.
    pub fn paste_fitted(&mut self, image: &DynamicImage, rect: Rect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let fitted = fit_to_fill(image, rect.size()).to_rgb8();
        imageops::replace(
            &mut self.pixels,
            &fitted,
            i64::from(rect.x),
            i64::from(rect.y),
        );
    }

    /// Borrow the pixels
    pub const fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Consume the canvas into a dynamic image
    pub fn into_image(self) -> DynamicImage {
        DynamicImage::ImageRgb8(self.pixels)
    }
}

/// Scale `image` to cover `target` and crop the overflow around the center
pub fn fit_to_fill(image: &DynamicImage, target: Size) -> DynamicImage {
    if image.width() == target.width && image.height() == target.height {
        return image.clone();
    }
    image.resize_to_fill(target.width, target.height, FilterType::Lanczos3)
}
