//! Caption rendering onto images

use crate::compose::color::Color;
use crate::io::configuration::{
    ANNOTATION_ANCHOR, ANNOTATION_BOX_MARGIN, ANNOTATION_FONT_SIZE, FONT_SEARCH_PATHS,
};
use crate::io::error::{ConversionError, Result, WithPath};
use crate::layout::Rect;
use ab_glyph::{FontVec, PxScale};
use image::DynamicImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect as PixelRect;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Burns captions into images at a fixed position
///
/// Text is drawn in white over a filled black box so it stays legible on any
/// photograph.
pub struct Annotator {
    font: FontVec,
    scale: PxScale,
    anchor: (u32, u32),
    margin: u32,
    text_color: Color,
    box_color: Color,
}

impl Annotator {
    /// Build an annotator from font file contents
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidFont`] if the bytes are not a usable font
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(bytes).map_err(|_invalid| ConversionError::InvalidFont {
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(ANNOTATION_FONT_SIZE),
            anchor: ANNOTATION_ANCHOR,
            margin: ANNOTATION_BOX_MARGIN,
            text_color: Color::WHITE,
            box_color: Color::BLACK,
        })
    }

    /// Load the font at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_path(path, "read font")?;
        let annotator = Self::from_bytes(path, bytes)?;
        info!(font = %path.display(), "Loaded annotation font");
        Ok(annotator)
    }

    /// Load `explicit` if given, otherwise the first well-known system font
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::FontUnavailable`] if no candidate exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidates: Vec<PathBuf> = FONT_SEARCH_PATHS.iter().map(PathBuf::from).collect();
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(path),
            None => Err(ConversionError::FontUnavailable {
                searched: candidates,
            }),
        }
    }

    /// Return a copy of `image` with `text` drawn near its top-left corner
    ///
    /// Each line of `text` is drawn on its own row. Empty text leaves the image
    /// unchanged.
    pub fn annotate(&self, image: &DynamicImage, text: &str) -> DynamicImage {
        let lines: Vec<&str> = text.lines().collect();
        let line_height = self.scale.y.ceil() as u32;
        let widths: Vec<u32> = lines
            .iter()
            .map(|line| text_size(self.scale, &self.font, line).0)
            .collect();

        let Some(backdrop) = label_box(self.anchor, &widths, line_height, self.margin) else {
            return image.clone();
        };

        let mut pixels = image.to_rgb8();
        draw_filled_rect_mut(
            &mut pixels,
            PixelRect::at(backdrop.x as i32, backdrop.y as i32)
                .of_size(backdrop.width, backdrop.height),
            self.box_color.to_rgb(),
        );

        let (x, y) = self.anchor;
        for (row, line) in lines.iter().enumerate() {
            draw_text_mut(
                &mut pixels,
                self.text_color.to_rgb(),
                x as i32,
                (y + row as u32 * line_height) as i32,
                self.scale,
                &self.font,
                line,
            );
        }

        debug!(lines = lines.len(), "Annotation drawn");
        DynamicImage::ImageRgb8(pixels)
    }
}

/// Backdrop rectangle behind a block of text lines
///
/// The box surrounds the widest line and all rows by `margin` on each side of
/// the text anchored at `anchor`. Returns `None` when there is nothing to draw.
pub fn label_box(
    anchor: (u32, u32),
    line_widths: &[u32],
    line_height: u32,
    margin: u32,
) -> Option<Rect> {
    let widest = line_widths.iter().copied().max()?;
    if widest == 0 || line_height == 0 {
        return None;
    }
    let (x, y) = anchor;
    Some(Rect::new(
        x.saturating_sub(margin),
        y.saturating_sub(margin),
        widest + 2 * margin,
        line_widths.len() as u32 * line_height + 2 * margin,
    ))
}
