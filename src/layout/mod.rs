//! Collage layout engine
//!
//! Layouts are pure: they map image sizes and a canvas size to a placement
//! directive without touching pixels. The compositor applies the directive.

/// Aspect-ratio based layout selection
pub mod auto;
/// Rectangles, sizes and placement directives
pub mod geometry;
/// Golden-ratio subdivision layout
pub mod golden;
/// Uniform grid layout
pub mod grid;
/// Lane (single row or column) layout
pub mod lane;

pub use geometry::{LayoutOptions, Placement, Rect, Size};
pub use lane::LaneOrientation;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Collage layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Rows and columns of equal cells
    Grid,
    /// Equal blocks along one axis
    Lane(LaneOrientation),
    /// Recursive golden-ratio subdivision
    GoldenRatio,
    /// Pick one of the above from the batch's aspect ratios
    Auto,
}

impl Layout {
    /// Replace [`Layout::Auto`] with the layout chosen for `sizes`
    pub fn resolve(self, sizes: &[Size]) -> Self {
        match self {
            Self::Auto => auto::select_layout(sizes),
            concrete => concrete,
        }
    }

    /// Compute where each of the images with the given `sizes` goes
    ///
    /// Every returned rectangle lies inside `canvas` and each source index
    /// appears at most once. Images the layout cannot fit are left out.
    pub fn plan(
        self,
        sizes: &[Size],
        canvas: Size,
        options: &LayoutOptions,
        rng: &mut StdRng,
    ) -> Vec<Placement> {
        let count = sizes.len();
        match self {
            Self::Grid => grid::plan_grid(count, canvas, options, rng),
            Self::Lane(orientation) => lane::plan_lanes(count, canvas, orientation, options, rng),
            Self::GoldenRatio => golden::plan_golden_ratio(count, canvas, options, rng),
            Self::Auto => auto::select_layout(sizes).plan(sizes, canvas, options, rng),
        }
    }
}

/// Order in which batch images are assigned to layout slots
pub(crate) fn placement_order(count: usize, randomize: bool, rng: &mut StdRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..count).collect();
    if randomize {
        order.shuffle(rng);
    }
    order
}
