//! Sizes, rectangles and placements shared by all layout algorithms

/// Pixel dimensions of an image or canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Aspect ratio class of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// Width equals height
    Square,
    /// Wider than tall
    Landscape,
    /// Taller than wide
    Portrait,
}

impl Size {
    /// Create a size from width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Classify by comparing the actual pixel dimensions
    pub const fn aspect(self) -> Aspect {
        if self.width == self.height {
            Aspect::Square
        } else if self.width > self.height {
            Aspect::Landscape
        } else {
            Aspect::Portrait
        }
    }

    /// Same size rotated by a quarter turn
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether either dimension is zero
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned target region on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its origin and extent
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from signed layout arithmetic
    ///
    /// Returns `None` when the origin is negative or the extent is not positive,
    /// which is how underflowing cell sizes surface to the caller.
    pub fn from_signed(x: i64, y: i64, width: i64, height: i64) -> Option<Self> {
        if x < 0 || y < 0 || width <= 0 || height <= 0 {
            return None;
        }
        Some(Self {
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
        })
    }

    /// Exclusive right edge
    pub const fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Extent of the rectangle
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rectangle lies entirely inside a canvas of `canvas` size
    pub const fn fits_within(&self, canvas: Size) -> bool {
        self.right() <= canvas.width as u64 && self.bottom() <= canvas.height as u64
    }

    /// Whether two rectangles share any pixel
    pub const fn overlaps(&self, other: &Self) -> bool {
        (self.x as u64) < other.right()
            && (other.x as u64) < self.right()
            && (self.y as u64) < other.bottom()
            && (other.y as u64) < self.bottom()
    }
}

/// One entry of a placement directive: which source image goes where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the batch the layout was planned for
    pub source: usize,
    /// Region of the canvas the image is fitted to
    pub rect: Rect,
}

/// Tuning shared by every layout algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Gap between images (and between images and canvas edges for grid and lane)
    pub padding: u32,
    /// Shuffle image order and, for golden-ratio, the starting sides
    pub randomize: bool,
    /// Center the arrangement when it does not fill the canvas exactly
    pub centered: bool,
}
