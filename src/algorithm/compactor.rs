//! Post-placement right-shift and down-shift of a freshly placed block
//! toward obstacles, preserving all constraints
//!
//! Applies only to the block that was just placed; earlier placements are
//! never revisited.

use std::rc::Rc;

use crate::spatial::area::{Anchor, PlacementArea};
use crate::spatial::block::{Orientation, VoxelBlock};

/// Attempt to right-shift, then down-shift, the block most recently placed
/// at `anchor`/`orientation`
///
/// Each shift direction is attempted independently: the block is removed,
/// the largest safe shift computed, and candidate shifts `Δ, Δ-1, ..., 1`
/// are tried via `can_place` until one succeeds or all are exhausted, in
/// which case the original anchor is restored.
pub fn compact(area: &mut PlacementArea, block: &Rc<VoxelBlock>, anchor: Anchor, orientation: Orientation) -> Anchor {
    let anchor = shift_right(area, block, anchor, orientation);
    shift_down(area, block, anchor, orientation)
}

fn shift_right(area: &mut PlacementArea, block: &Rc<VoxelBlock>, anchor: Anchor, orientation: Orientation) -> Anchor {
    let Some(max_shift) = max_right_shift(area, block, anchor, orientation) else {
        return anchor;
    };

    area.remove(block.id());

    for delta in (1..=max_shift).rev() {
        let candidate = Anchor::new(anchor.x + delta, anchor.y);
        if area.can_place(block, candidate, orientation) {
            area.place(Rc::clone(block), candidate, orientation);
            return candidate;
        }
    }

    area.place(Rc::clone(block), anchor, orientation);
    anchor
}

fn shift_down(area: &mut PlacementArea, block: &Rc<VoxelBlock>, anchor: Anchor, orientation: Orientation) -> Anchor {
    let Some(max_shift) = max_down_shift(area, block, anchor, orientation) else {
        return anchor;
    };

    area.remove(block.id());

    for delta in (1..=max_shift).rev() {
        let candidate = Anchor::new(anchor.x, anchor.y - delta);
        if area.can_place(block, candidate, orientation) {
            area.place(Rc::clone(block), candidate, orientation);
            return candidate;
        }
    }

    area.place(Rc::clone(block), anchor, orientation);
    anchor
}

/// Largest shift that could plausibly clear every right-edge row, before
/// per-shift feasibility is retested by `can_place`
///
/// The per-row obstacle is the nearest occupied cell (or the bow boundary,
/// accounting for `bow_clearance` and, for crane blocks,
/// `ring_bow_clearance`) strictly to the right of that row's rightmost
/// footprint cell. Returns `None` when there is no row to shift.
fn max_right_shift(area: &PlacementArea, block: &VoxelBlock, anchor: Anchor, orientation: Orientation) -> Option<i32> {
    let delta = area.block_spacing();
    let ring_reserve = ring_bow_reserve(area, block);
    let bow_edge = area.usable_x_range().end - ring_reserve;

    let mut min_shift: Option<i32> = None;
    for (&ry, &max_rx) in block.right_boundary(orientation) {
        let edge_x = anchor.x + i32::try_from(max_rx).unwrap_or(i32::MAX);
        let row_y = anchor.y + i32::try_from(ry).unwrap_or(i32::MAX);

        let obstacle_x = nearest_obstacle_right(area, block.id(), edge_x, row_y).unwrap_or(bow_edge);
        let safe = (obstacle_x - edge_x - 1 - delta).max(0);
        min_shift = Some(min_shift.map_or(safe, |prev: i32| prev.min(safe)));
    }

    min_shift.filter(|&shift| shift > 0)
}

/// Symmetric to [`max_right_shift`] for the bottom edge (the cells nearest
/// `y = 0`), scanning toward `y = 0` — there is no clearance band on this
/// axis, so the floor itself is the default boundary
fn max_down_shift(area: &PlacementArea, block: &VoxelBlock, anchor: Anchor, orientation: Orientation) -> Option<i32> {
    let delta = area.block_spacing();

    let mut min_shift: Option<i32> = None;
    for (&rx, &min_ry) in block.bottom_boundary(orientation) {
        let edge_y = anchor.y + i32::try_from(min_ry).unwrap_or(i32::MAX);
        let col_x = anchor.x + i32::try_from(rx).unwrap_or(i32::MAX);

        let obstacle_y = nearest_obstacle_down(area, block.id(), col_x, edge_y).unwrap_or(-1);
        let safe = (edge_y - obstacle_y - 1 - delta).max(0);
        min_shift = Some(min_shift.map_or(safe, |prev: i32| prev.min(safe)));
    }

    min_shift.filter(|&shift| shift > 0)
}

fn ring_bow_reserve(area: &PlacementArea, block: &VoxelBlock) -> i32 {
    use crate::spatial::block::BlockType;
    if block.block_type() == BlockType::Crane {
        area.config().ring_bow_clearance
    } else {
        0
    }
}

/// Nearest occupied cell's x at or to the right of `edge_x + 1` on row `y`,
/// ignoring `self_id`'s own cells
fn nearest_obstacle_right(area: &PlacementArea, self_id: &crate::spatial::block::BlockId, edge_x: i32, y: i32) -> Option<i32> {
    area.placed()
        .filter(|placement| placement.block.id() != self_id)
        .flat_map(|placement| placement.absolute_cells())
        .filter(|&(x, cell_y)| cell_y == y && x > edge_x)
        .map(|(x, _)| x)
        .min()
}

/// Nearest occupied cell's y strictly below `edge_y` in column `x`
/// (largest such y), ignoring `self_id`'s own cells
fn nearest_obstacle_down(area: &PlacementArea, self_id: &crate::spatial::block::BlockId, x: i32, edge_y: i32) -> Option<i32> {
    area.placed()
        .filter(|placement| placement.block.id() != self_id)
        .flat_map(|placement| placement.absolute_cells())
        .filter(|&(cell_x, y)| cell_x == x && y < edge_y)
        .map(|(_, y)| y)
        .max()
}
