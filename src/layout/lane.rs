//! Single row or single column of equally sized blocks

use crate::layout::geometry::{LayoutOptions, Placement, Rect, Size};
use crate::layout::placement_order;
use rand::rngs::StdRng;
use tracing::warn;

/// Direction in which lanes are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneOrientation {
    /// Wide blocks stacked top to bottom, each spanning the canvas width
    Horizontal,
    /// Tall blocks side by side, each spanning the canvas height
    Vertical,
}

/// Block extent for `count` lanes on `canvas`
///
/// The lane axis is split into `count` blocks separated and surrounded by
/// `padding`; the cross axis is used in full. Returns `None` when the blocks
/// would have no area.
pub fn block_size(
    count: usize,
    canvas: Size,
    orientation: LaneOrientation,
    padding: u32,
) -> Option<Size> {
    if count == 0 {
        return None;
    }
    let along = match orientation {
        LaneOrientation::Horizontal => i64::from(canvas.height),
        LaneOrientation::Vertical => i64::from(canvas.width),
    };
    let block = (along - (count as i64 + 1) * i64::from(padding)) / count as i64;
    let block = u32::try_from(block).ok().filter(|&b| b > 0)?;

    let size = match orientation {
        LaneOrientation::Horizontal => Size::new(canvas.width, block),
        LaneOrientation::Vertical => Size::new(block, canvas.height),
    };
    (!size.is_empty()).then_some(size)
}

/// Place `count` images as lanes
pub fn plan_lanes(
    count: usize,
    canvas: Size,
    orientation: LaneOrientation,
    options: &LayoutOptions,
    rng: &mut StdRng,
) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }
    let Some(block) = block_size(count, canvas, orientation, options.padding) else {
        warn!(
            count,
            ?orientation,
            width = canvas.width,
            height = canvas.height,
            "Lanes collapse on this canvas, dropping batch"
        );
        return Vec::new();
    };

    let padding = u64::from(options.padding);
    let (step, along) = match orientation {
        LaneOrientation::Horizontal => (u64::from(block.height) + padding, canvas.height),
        LaneOrientation::Vertical => (u64::from(block.width) + padding, canvas.width),
    };
    let used = count as u64 * step;
    let offset = if options.centered && used < u64::from(along) {
        (u64::from(along) - used) / 2
    } else {
        0
    };

    placement_order(count, options.randomize, rng)
        .into_iter()
        .enumerate()
        .filter_map(|(slot, source)| {
            let start = u32::try_from(slot as u64 * step + padding + offset).ok()?;
            let rect = match orientation {
                LaneOrientation::Horizontal => Rect::new(0, start, block.width, block.height),
                LaneOrientation::Vertical => Rect::new(start, 0, block.width, block.height),
            };
            rect.fits_within(canvas)
                .then_some(Placement { source, rect })
        })
        .collect()
}
