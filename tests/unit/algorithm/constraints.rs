//! Tests for type-specific placement rules and voxel-boundary spacing

#[cfg(test)]
mod tests {
    use deckpack::algorithm::constraints::{crane_ring_ok, trestle_corridor_ok};
    use deckpack::{Anchor, BlockType, Orientation, PlacementArea, PlacementAreaConfig, VoxelBlock};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    fn rect_block(id: &str, w: u32, h: u32, block_type: BlockType) -> Rc<VoxelBlock> {
        let mut cells = Vec::new();
        for y in 0..h {
            for x in 0..w {
                cells.push((x, y));
            }
        }
        Rc::new(
            VoxelBlock::new(id, block_type, cells, BTreeMap::new())
                .unwrap_or_else(|e| panic!("construction failed: {e}")),
        )
    }

    // Tests a crane placed too close to the bow violates its ring clearance
    // Verified by comparing against total_x instead of total_x - far_x - 1
    #[test]
    fn test_crane_ring_clearance_rejects_when_too_close_to_bow() {
        let area = PlacementArea::new(PlacementAreaConfig {
            width: 30,
            height: 10,
            bow_clearance: 0,
            stern_clearance: 0,
            block_spacing: 0,
            ring_bow_clearance: 5,
        })
        .unwrap_or_else(|e| panic!("construction failed: {e}"));
        let crane = rect_block("C", 4, 4, BlockType::Crane);

        assert!(!crane_ring_ok(&area, &crane, Anchor::new(26, 0), Orientation::Deg0));
        assert!(crane_ring_ok(&area, &crane, Anchor::new(21, 0), Orientation::Deg0));
    }

    // Tests the ring constraint is a no-op for trestle-typed blocks
    // Verified by applying the ring check regardless of block type
    #[test]
    fn test_crane_ring_rule_does_not_apply_to_trestle() {
        let area = PlacementArea::new(PlacementAreaConfig {
            width: 10,
            height: 10,
            bow_clearance: 0,
            stern_clearance: 0,
            block_spacing: 0,
            ring_bow_clearance: 5,
        })
        .unwrap_or_else(|e| panic!("construction failed: {e}"));
        let trestle = rect_block("T", 4, 4, BlockType::Trestle);

        assert!(crane_ring_ok(&area, &trestle, Anchor::new(9, 0), Orientation::Deg0));
    }

    // Tests a trestle is blocked when a crane occupies its horizontal access corridor
    // Verified by scanning only the column directly to the trestle's left
    #[test]
    fn test_trestle_corridor_blocked_by_prior_crane() {
        let mut area = PlacementArea::new(PlacementAreaConfig {
            width: 20,
            height: 10,
            bow_clearance: 0,
            stern_clearance: 0,
            block_spacing: 0,
            ring_bow_clearance: 0,
        })
        .unwrap_or_else(|e| panic!("construction failed: {e}"));

        let crane = rect_block("C", 4, 4, BlockType::Crane);
        area.place(Rc::clone(&crane), Anchor::new(4, 3), Orientation::Deg0);

        let trestle = rect_block("T", 4, 4, BlockType::Trestle);
        assert!(!trestle_corridor_ok(&area, &trestle, Anchor::new(10, 3), Orientation::Deg0));
    }

    // Tests the corridor check passes when nothing occupies it
    // Verified by returning false unconditionally
    #[test]
    fn test_trestle_corridor_accepts_when_clear() {
        let area = PlacementArea::new(PlacementAreaConfig {
            width: 20,
            height: 10,
            bow_clearance: 0,
            stern_clearance: 0,
            block_spacing: 0,
            ring_bow_clearance: 0,
        })
        .unwrap_or_else(|e| panic!("construction failed: {e}"));

        let trestle = rect_block("T", 4, 4, BlockType::Trestle);
        assert!(trestle_corridor_ok(&area, &trestle, Anchor::new(10, 3), Orientation::Deg0));
    }

    // Tests two blocks may touch exactly when spacing is zero
    // Verified by requiring a chessboard distance of at least one always
    #[test]
    fn test_spacing_zero_allows_touching_blocks() {
        let mut area = PlacementArea::new(PlacementAreaConfig {
            width: 10,
            height: 10,
            bow_clearance: 0,
            stern_clearance: 0,
            block_spacing: 0,
            ring_bow_clearance: 0,
        })
        .unwrap_or_else(|e| panic!("construction failed: {e}"));

        let a = rect_block("A", 3, 2, BlockType::Trestle);
        area.place(Rc::clone(&a), Anchor::new(0, 0), Orientation::Deg0);

        let b = rect_block("B", 3, 2, BlockType::Trestle);
        assert!(area.can_place(&b, Anchor::new(3, 0), Orientation::Deg0));
    }

    // Tests spacing of one rejects touching blocks but accepts a one-cell gap
    // Verified by comparing distance > delta instead of distance < delta
    #[test]
    fn test_spacing_one_requires_a_gap() {
        let mut area = PlacementArea::new(PlacementAreaConfig {
            width: 10,
            height: 10,
            bow_clearance: 0,
            stern_clearance: 0,
            block_spacing: 1,
            ring_bow_clearance: 0,
        })
        .unwrap_or_else(|e| panic!("construction failed: {e}"));

        let a = rect_block("A", 3, 2, BlockType::Trestle);
        area.place(Rc::clone(&a), Anchor::new(0, 0), Orientation::Deg0);

        let b = rect_block("B", 3, 2, BlockType::Trestle);
        assert!(!area.can_place(&b, Anchor::new(3, 0), Orientation::Deg0));
        assert!(area.can_place(&b, Anchor::new(4, 0), Orientation::Deg0));
    }
}
