//! Ordered anchor-position candidate generation
//!
//! Produces, for a given `(area, block)` pair, an ordered list of anchor
//! positions to try: an initial corner anchor, column-wise vertical
//! stacking, new-column initiation, and — for crane blocks — the same
//! three rules repeated against the 90°-rotated footprint view.

use crate::spatial::area::{Anchor, PlacementArea};
use crate::spatial::block::{Orientation, VoxelBlock};

/// A candidate anchor/orientation pair to test with `PlacementArea::can_place`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate anchor position
    pub anchor: Anchor,
    /// Orientation the candidate was generated for
    pub orientation: Orientation,
}

/// Generate an ordered, capped candidate list for `block` on `area`
///
/// Rule order: R1 (initial corner), R2 (column-wise stacking), R3 (new
/// column to the left), then — for crane blocks only — R1–R3 again
/// against the rotated footprint (R4). The result is truncated to
/// `max_candidates`.
pub fn generate(area: &PlacementArea, block: &VoxelBlock, max_candidates: usize) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    generate_for_orientation(area, block, Orientation::Deg0, &mut candidates);

    if block.supports_rotation() {
        generate_for_orientation(area, block, Orientation::Deg90, &mut candidates);
    }

    candidates.truncate(max_candidates);
    candidates
}

fn generate_for_orientation(
    area: &PlacementArea,
    block: &VoxelBlock,
    orientation: Orientation,
    out: &mut Vec<Candidate>,
) {
    let actual_width = i32::try_from(block.actual_width(orientation)).unwrap_or(i32::MAX);
    let actual_height = i32::try_from(block.actual_height(orientation)).unwrap_or(i32::MAX);

    let tops = area.column_tops();

    // R1 — initial anchor, only meaningful when the deck is still empty.
    if tops.is_empty() {
        let x = area.width() - area.config().bow_clearance - actual_width;
        out.push(Candidate {
            anchor: Anchor::new(x, 0),
            orientation,
        });
    }

    // R2 — column-wise vertical stacking, rightmost columns first.
    for (&x, &top_y) in tops.iter().rev() {
        let y = top_y + area.block_spacing();
        if y + actual_height <= area.height() {
            out.push(Candidate {
                anchor: Anchor::new(x, y),
                orientation,
            });
        }
    }

    // R3 — new column to the left of the leftmost occupied column.
    if let Some((&x_min, _)) = tops.iter().next() {
        let x = x_min - actual_width - area.block_spacing();
        if x >= area.usable_x_range().start {
            out.push(Candidate {
                anchor: Anchor::new(x, 0),
                orientation,
            });
        }
    }
}
