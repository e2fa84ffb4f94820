//! Page geometry derived from the layout mode

use crate::io::configuration::{
    DOCUMENT_IMAGE_WIDTH_MM, LayoutMode, PAGE_IMAGE_WIDTH_MM, Resolution,
};
use crate::io::pdf::Orientation;
use crate::layout::Size;

/// Orientation and raster sizes used for every page of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSettings {
    /// Paper orientation
    pub orientation: Orientation,
    /// Collage canvas size
    pub canvas: Size,
    /// Bounding box document pages are shrunk into, if any
    pub shrink_to: Option<Size>,
    /// Printed width of each page image
    pub image_width_mm: f32,
    /// Images per page actually used when partitioning
    pub images_per_page: usize,
}

impl PageSettings {
    /// Derive page settings for `mode`
    ///
    /// Lane and document modes print in portrait and rotate the configured
    /// resolution to match. Document mode places one image per page and
    /// shrinks oversized images instead of composing a collage.
    pub fn for_mode(mode: LayoutMode, resolution: Resolution, images_per_page: usize) -> Self {
        let canvas = if mode.is_portrait() {
            resolution.size().swapped()
        } else {
            resolution.size()
        };
        let orientation = if mode.is_portrait() {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        };

        match mode {
            LayoutMode::Document => Self {
                orientation,
                canvas,
                shrink_to: Some(canvas),
                image_width_mm: DOCUMENT_IMAGE_WIDTH_MM,
                images_per_page: 1,
            },
            LayoutMode::Grid | LayoutMode::Auto | LayoutMode::Lane => Self {
                orientation,
                canvas,
                shrink_to: None,
                image_width_mm: PAGE_IMAGE_WIDTH_MM,
                images_per_page,
            },
        }
    }
}
