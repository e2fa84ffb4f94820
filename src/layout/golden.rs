//! Golden-ratio subdivision of a shrinking working area
//!
//! Each step carves a slice of `1/φ` of the working area's longer side for the
//! next image, on alternating sides, and returns the remaining area as a new
//! state. The arrangement therefore spirals inward until the area is used up.

use crate::layout::geometry::{LayoutOptions, Placement, Rect, Size};
use crate::layout::placement_order;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// The golden ratio φ = (1 + √5) / 2
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Side of a wide working area that receives the next image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    /// Slice is taken from the left edge
    Left,
    /// Slice is taken from the right edge
    Right,
}

impl HorizontalSide {
    const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Side of a tall working area that receives the next image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    /// Slice is taken from the top edge
    Top,
    /// Slice is taken from the bottom edge
    Bottom,
}

impl VerticalSide {
    const fn flipped(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Remaining unallocated canvas region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingArea {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Remaining width, non-positive once exhausted
    pub width: i64,
    /// Remaining height, non-positive once exhausted
    pub height: i64,
}

/// Subdivision state threaded through each placement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldenState {
    /// Region still available for placement
    pub area: WorkingArea,
    /// Side used by the next horizontal split
    pub horizontal: HorizontalSide,
    /// Side used by the next vertical split
    pub vertical: VerticalSide,
}

impl GoldenState {
    /// Initial state covering the whole canvas
    pub const fn new(canvas: Size, horizontal: HorizontalSide, vertical: VerticalSide) -> Self {
        Self {
            area: WorkingArea {
                x: 0,
                y: 0,
                width: canvas.width as i64,
                height: canvas.height as i64,
            },
            horizontal,
            vertical,
        }
    }

    /// Whether no further image can be placed
    pub const fn is_exhausted(&self) -> bool {
        self.area.width <= 0 || self.area.height <= 0
    }

    /// Carve the next slice, returning its rectangle and the successor state
    ///
    /// Returns `None` once the area is exhausted or the slice would be empty.
    pub fn step(self, padding: u32) -> Option<(Rect, Self)> {
        if self.is_exhausted() {
            return None;
        }
        let padding = i64::from(padding);
        let WorkingArea {
            x,
            y,
            width,
            height,
        } = self.area;
        let mut next = self;

        let rect = if width > height {
            let slice = (width as f64 / GOLDEN_RATIO) as i64;
            let rect = match self.horizontal {
                HorizontalSide::Left => {
                    next.area.x += slice + padding;
                    Rect::from_signed(x, y, slice, height)?
                }
                HorizontalSide::Right => Rect::from_signed(x + width - slice, y, slice, height)?,
            };
            next.area.width -= slice + padding;
            next.horizontal = self.horizontal.flipped();
            rect
        } else {
            let slice = (height as f64 / GOLDEN_RATIO) as i64;
            let rect = match self.vertical {
                VerticalSide::Top => {
                    next.area.y += slice + padding;
                    Rect::from_signed(x, y, width, slice)?
                }
                VerticalSide::Bottom => Rect::from_signed(x, y + height - slice, width, slice)?,
            };
            next.area.height -= slice + padding;
            next.vertical = self.vertical.flipped();
            rect
        };

        Some((rect, next))
    }
}

/// Place up to `count` images by golden-ratio subdivision
///
/// Placement stops when the working area is exhausted; the remaining images
/// are dropped from the page.
pub fn plan_golden_ratio(
    count: usize,
    canvas: Size,
    options: &LayoutOptions,
    rng: &mut StdRng,
) -> Vec<Placement> {
    let (horizontal, vertical) = if options.randomize {
        (
            if rng.random_bool(0.5) {
                HorizontalSide::Left
            } else {
                HorizontalSide::Right
            },
            if rng.random_bool(0.5) {
                VerticalSide::Top
            } else {
                VerticalSide::Bottom
            },
        )
    } else {
        (HorizontalSide::Left, VerticalSide::Top)
    };

    let initial = GoldenState::new(canvas, horizontal, vertical);
    let placements: Vec<Placement> = placement_order(count, options.randomize, rng)
        .into_iter()
        .scan(initial, |state, source| {
            let (rect, next) = state.step(options.padding)?;
            *state = next;
            Some(Placement { source, rect })
        })
        .collect();

    if placements.len() < count {
        debug!(
            placed = placements.len(),
            dropped = count - placements.len(),
            "Working area exhausted"
        );
    }
    placements
}
