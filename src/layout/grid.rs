//! Uniform grid placement with square cells on square canvases

use crate::layout::geometry::{LayoutOptions, Placement, Rect, Size};
use crate::layout::placement_order;
use rand::rngs::StdRng;
use tracing::warn;

/// Cell arrangement computed for a grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Cell width in pixels (may be non-positive when the canvas is too small)
    pub cell_width: i64,
    /// Cell height in pixels (may be non-positive when the canvas is too small)
    pub cell_height: i64,
    /// Horizontal offset of the whole grid
    pub offset_x: i64,
    /// Vertical offset of the whole grid
    pub offset_y: i64,
}

impl GridGeometry {
    /// Compute the grid for `count` images on `canvas`
    ///
    /// Square canvases get `ceil(sqrt(count))` rows and columns of square cells.
    /// Other canvases get `ceil(sqrt(count))` slots on the dominant axis, and
    /// when centering is requested the cells are made square and the grid is
    /// centered in the leftover space.
    pub fn for_canvas(count: usize, canvas: Size, options: &LayoutOptions) -> Self {
        let padding = i64::from(options.padding);
        let width = i64::from(canvas.width);
        let height = i64::from(canvas.height);
        let grid_size = ceil_sqrt(count).max(1);

        if canvas.width == canvas.height {
            let cell = (width - (grid_size as i64 + 1) * padding) / grid_size as i64;
            return Self {
                cols: grid_size,
                rows: grid_size,
                cell_width: cell,
                cell_height: cell,
                offset_x: 0,
                offset_y: 0,
            };
        }

        let mut cols = grid_size;
        let mut rows = count.div_ceil(cols).max(1);
        if (canvas.width > canvas.height && cols < rows)
            || (canvas.width < canvas.height && cols > rows)
        {
            std::mem::swap(&mut cols, &mut rows);
        }

        let mut cell_width = (width - (cols as i64 + 1) * padding) / cols as i64;
        let mut cell_height = (height - (rows as i64 + 1) * padding) / rows as i64;
        let (mut offset_x, mut offset_y) = (0, 0);

        if options.centered {
            let cell = cell_width.min(cell_height);
            cell_width = cell;
            cell_height = cell;
            let extent_x = cols as i64 * cell + (cols as i64 + 1) * padding;
            let extent_y = rows as i64 * cell + (rows as i64 + 1) * padding;
            offset_x = ((width - extent_x) / 2).max(0);
            offset_y = ((height - extent_y) / 2).max(0);
        }

        Self {
            cols,
            rows,
            cell_width,
            cell_height,
            offset_x,
            offset_y,
        }
    }

    /// Canvas region of the cell at `slot` in row-major order
    pub fn cell(&self, slot: usize, padding: u32) -> Option<Rect> {
        let padding = i64::from(padding);
        let col = (slot % self.cols) as i64;
        let row = (slot / self.cols) as i64;
        Rect::from_signed(
            col * (self.cell_width + padding) + padding + self.offset_x,
            row * (self.cell_height + padding) + padding + self.offset_y,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Whether the cells have a drawable size
    pub const fn is_degenerate(&self) -> bool {
        self.cell_width <= 0 || self.cell_height <= 0
    }
}

/// Place `count` images in a grid
///
/// Randomization permutes which image lands in which cell; the cell geometry
/// is independent of it. Images that do not fit are dropped.
pub fn plan_grid(
    count: usize,
    canvas: Size,
    options: &LayoutOptions,
    rng: &mut StdRng,
) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }

    let geometry = GridGeometry::for_canvas(count, canvas, options);
    if geometry.is_degenerate() {
        warn!(
            count,
            width = canvas.width,
            height = canvas.height,
            "Grid cells collapse on this canvas, dropping batch"
        );
        return Vec::new();
    }

    placement_order(count, options.randomize, rng)
        .into_iter()
        .enumerate()
        .filter_map(|(slot, source)| {
            geometry
                .cell(slot, options.padding)
                .filter(|rect| rect.fits_within(canvas))
                .map(|rect| Placement { source, rect })
        })
        .collect()
}

/// Smallest `n` with `n * n >= value`
pub fn ceil_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root * root < value {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= value {
        root -= 1;
    }
    root
}
