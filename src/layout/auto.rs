//! Layout selection from the aspect ratios of a batch

use crate::layout::Layout;
use crate::layout::geometry::{Aspect, Size};
use crate::layout::lane::LaneOrientation;

/// Choose a concrete layout from actual image dimensions
///
/// Uniformly square batches use a grid, uniformly landscape batches use
/// horizontal lanes, uniformly portrait batches use vertical lanes and mixed
/// batches use golden-ratio subdivision. An empty batch counts as square.
/// Never returns [`Layout::Auto`].
pub fn select_layout(sizes: &[Size]) -> Layout {
    let mut aspects = sizes.iter().map(|size| size.aspect());
    let Some(first) = aspects.next() else {
        return Layout::Grid;
    };
    if !aspects.all(|aspect| aspect == first) {
        return Layout::GoldenRatio;
    }

    match first {
        Aspect::Square => Layout::Grid,
        Aspect::Landscape => Layout::Lane(LaneOrientation::Horizontal),
        Aspect::Portrait => Layout::Lane(LaneOrientation::Vertical),
    }
}
