//! Type-specific placement rules and voxel-boundary spacing
//!
//! Two block-type rules (crane bow-ring clearance, trestle horizontal
//! access corridor) are dispatched on the tagged [`BlockType`] enum rather
//! than through a trait hierarchy: each rule is small enough to encode
//! as a tagged variant, no virtual hierarchy needed.

use crate::spatial::area::{absolute_cells, Anchor, PlacementArea};
use crate::spatial::block::{BlockType, Orientation, VoxelBlock};

/// Dispatch the crane ring / trestle corridor rule for this block
pub fn type_constraints_ok(
    area: &PlacementArea,
    block: &VoxelBlock,
    anchor: Anchor,
    orientation: Orientation,
) -> bool {
    match block.block_type() {
        BlockType::Crane => crane_ring_ok(area, block, anchor, orientation),
        BlockType::Trestle => trestle_corridor_ok(area, block, anchor, orientation),
    }
}

/// Crane bow-ring constraint
///
/// `far_x = ax + actual_width - 1`; `total_x = width + bow_clearance`;
/// requires `total_x - far_x - 1 >= ring_bow_clearance`. Applies only to
/// crane-typed blocks and is a no-op for trestle blocks.
pub fn crane_ring_ok(
    area: &PlacementArea,
    block: &VoxelBlock,
    anchor: Anchor,
    orientation: Orientation,
) -> bool {
    if block.block_type() != BlockType::Crane {
        return true;
    }

    let actual_width = i32::try_from(block.actual_width(orientation)).unwrap_or(i32::MAX);
    let far_x = anchor.x + actual_width - 1;
    let total_x = area.width() + area.config().bow_clearance;

    total_x - far_x - 1 >= area.config().ring_bow_clearance
}

/// Trestle horizontal access corridor constraint
///
/// Every cell `(x, y)` with `0 <= x < ax` and `ay <= y < ay + actual_height`
/// must be empty. Applies only to trestle-typed blocks.
pub fn trestle_corridor_ok(
    area: &PlacementArea,
    block: &VoxelBlock,
    anchor: Anchor,
    orientation: Orientation,
) -> bool {
    if block.block_type() != BlockType::Trestle {
        return true;
    }

    let actual_height = i32::try_from(block.actual_height(orientation)).unwrap_or(i32::MAX);

    for y in anchor.y..(anchor.y + actual_height) {
        for x in 0..anchor.x {
            if cell_occupied(area, x, y) {
                return false;
            }
        }
    }

    true
}

fn cell_occupied(area: &PlacementArea, x: i32, y: i32) -> bool {
    area.placed()
        .any(|placement| placement.absolute_cells().contains(&(x, y)))
}

/// Chessboard distance between two perimeter cells:
/// `max(dx, dy) - 1` for non-coincident cells, `0` for coincident ones.
fn chessboard_distance(p: (i32, i32), q: (i32, i32)) -> i32 {
    if p == q {
        return 0;
    }
    let dx = (p.0 - q.0).abs();
    let dy = (p.1 - q.1).abs();
    dx.max(dy) - 1
}

/// Voxel-boundary spacing constraint
///
/// For every pair of a candidate perimeter cell and an already-placed
/// block's perimeter cell, requires chessboard distance `>= block_spacing`.
/// Skips placements whose bounding box is farther than `block_spacing`
/// from the candidate's bounding box.
pub fn spacing_ok(
    area: &PlacementArea,
    block: &VoxelBlock,
    anchor: Anchor,
    orientation: Orientation,
) -> bool {
    let delta = area.block_spacing();
    let candidate_perimeter: Vec<(i32, i32)> = block
        .perimeter_cells(orientation)
        .iter()
        .map(|&(rx, ry)| (anchor.x + rx as i32, anchor.y + ry as i32))
        .collect();

    let candidate_bbox = bounding_box(&candidate_perimeter);

    for placed in area.placed() {
        let other_perimeter = placed.absolute_perimeter_cells();
        let other_bbox = bounding_box(&other_perimeter);

        if bbox_chessboard_gap(candidate_bbox, other_bbox) > delta {
            continue;
        }

        for &p in &candidate_perimeter {
            for &q in &other_perimeter {
                if chessboard_distance(p, q) < delta {
                    return false;
                }
            }
        }
    }

    true
}

type BBox = (i32, i32, i32, i32);

fn bounding_box(cells: &[(i32, i32)]) -> BBox {
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let max_x = cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
    (min_x, max_x, min_y, max_y)
}

/// Minimum possible chessboard distance between any two cells drawn one
/// from each bounding box; used as a cheap pre-filter before the O(n*m)
/// perimeter-pair scan.
fn bbox_chessboard_gap(a: BBox, b: BBox) -> i32 {
    let (a_min_x, a_max_x, a_min_y, a_max_y) = a;
    let (b_min_x, b_max_x, b_min_y, b_max_y) = b;

    let dx = if a_max_x < b_min_x {
        b_min_x - a_max_x
    } else if b_max_x < a_min_x {
        a_min_x - b_max_x
    } else {
        0
    };
    let dy = if a_max_y < b_min_y {
        b_min_y - a_max_y
    } else if b_max_y < a_min_y {
        a_min_y - b_max_y
    } else {
        0
    };

    (dx.max(dy) - 1).max(0)
}
