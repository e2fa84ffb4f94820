//! Conversion constants, defaults and typed parameter values

use crate::io::error::{ConversionError, invalid_parameter};
use crate::layout::{LaneOrientation, Layout, Size};
use std::fmt;
use std::str::FromStr;

// Batch sizing defaults
/// Images composed onto one page
pub const DEFAULT_IMAGES_PER_PAGE: usize = 10;
/// Pages written into one PDF before a new file is started
pub const DEFAULT_MAX_PAGES_PER_PDF: usize = 20;

// Canvas defaults
/// Canvas background
pub const DEFAULT_BACKGROUND: &str = "#000000";
/// Gap between collage images
pub const DEFAULT_PADDING: u32 = 0;
/// Largest accepted canvas side
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

// Encoding
/// Quality used for lossy page encoding
pub const JPEG_QUALITY: u8 = 90;

// PDF layout, in millimetres
/// A4 paper in portrait orientation (width, height)
pub const A4_PORTRAIT_MM: (f32, f32) = (210.0, 297.0);
/// Printed width of a collage page image
pub const PAGE_IMAGE_WIDTH_MM: f32 = 300.0;
/// Printed width of a shrunk document page image
pub const DOCUMENT_IMAGE_WIDTH_MM: f32 = 210.0;
/// Nominal resolution used when embedding page images
pub const PAGE_IMAGE_DPI: f32 = 150.0;

// Discovery
/// File extensions treated as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

// Annotation
/// Sequence in a file name that becomes a line break in its caption
pub const DEFAULT_NEWLINE_DELIMITER: &str = "__";
/// Caption glyph height in pixels
pub const ANNOTATION_FONT_SIZE: f32 = 32.0;
/// Top-left corner of the first caption line
pub const ANNOTATION_ANCHOR: (u32, u32) = (20, 20);
/// Space between caption text and the edge of its backdrop
pub const ANNOTATION_BOX_MARGIN: u32 = 6;
/// Fonts tried in order when none is configured
pub const FONT_SEARCH_PATHS: [&str; 7] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// How images are arranged on PDF pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LayoutMode {
    /// Uniform grid collage
    #[default]
    Grid,
    /// Layout chosen per page from image aspect ratios
    Auto,
    /// Stacked full-width lanes on a portrait page
    Lane,
    /// One unmodified image per page, no collage
    Document,
}

impl LayoutMode {
    /// Collage algorithm for this mode, `None` for document mode
    pub const fn collage_layout(self) -> Option<Layout> {
        match self {
            Self::Grid => Some(Layout::Grid),
            Self::Auto => Some(Layout::Auto),
            Self::Lane => Some(Layout::Lane(LaneOrientation::Horizontal)),
            Self::Document => None,
        }
    }

    /// Whether pages are printed in portrait orientation
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Lane | Self::Document)
    }
}

/// Canvas resolution as configured, before orientation is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Resolution {
    /// Large pages, the default
    pub const BIG: Self = Self::new(1754, 1240);
    /// Medium pages
    pub const MEDIUM: Self = Self::new(877, 620);
    /// Small pages, smallest files
    pub const SMALL: Self = Self::new(584, 413);

    /// Create a resolution
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resolution as a layout size
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::BIG
    }
}

impl FromStr for Resolution {
    type Err = ConversionError;

    /// Accepts `big`, `medium`, `small` or `WIDTHxHEIGHT`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" => return Ok(Self::BIG),
            "medium" => return Ok(Self::MEDIUM),
            "small" => return Ok(Self::SMALL),
            _ => {}
        }

        let reject = |reason: &str| invalid_parameter("resolution", &s, &reason);
        let (width, height) = s
            .trim()
            .split_once(['x', 'X', '×'])
            .ok_or_else(|| reject("expected big, medium, small or WIDTHxHEIGHT"))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_err| reject("dimensions must be positive integers"))
        };
        let resolution = Self::new(parse(width)?, parse(height)?);

        if resolution.width == 0 || resolution.height == 0 {
            return Err(reject("dimensions must be positive integers"));
        }
        if resolution.width > MAX_CANVAS_DIMENSION || resolution.height > MAX_CANVAS_DIMENSION {
            return Err(reject(&format!(
                "dimensions must not exceed {MAX_CANVAS_DIMENSION}"
            )));
        }
        Ok(resolution)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
