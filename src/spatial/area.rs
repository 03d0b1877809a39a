//! Mutable deck state: the occupancy grid, placed-block bookkeeping, and
//! the primitive `can_place` / `place` / `remove` / `column_tops` operations
//!
//! Grid cells hold arena slot indices rather than block references
//! `remove()` tombstones a slot instead of compacting the
//! slot vector, so indices already written into the grid stay valid
//! across a compactor's trial remove/place cycle.

use std::collections::BTreeMap;
use std::ops::Range;
use std::rc::Rc;

use ndarray::Array2;

use crate::algorithm::constraints;
use crate::io::error::{invalid_parameter, Result};
use crate::spatial::block::{BlockId, Orientation, VoxelBlock};

/// Anchor position: the block's local (0, 0) origin in deck coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Absolute x coordinate of the block's origin
    pub x: i32,
    /// Absolute y coordinate of the block's origin
    pub y: i32,
}

impl Anchor {
    /// Build an anchor from raw coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A block placed on the deck, with its committed anchor and orientation
#[derive(Debug, Clone)]
pub struct Placement {
    /// The placed block
    pub block: Rc<VoxelBlock>,
    /// Anchor the block was committed at
    pub anchor: Anchor,
    /// Orientation the block was committed at
    pub orientation: Orientation,
}

impl Placement {
    /// Absolute footprint cells of this placement, in deck coordinates
    pub fn absolute_cells(&self) -> Vec<(i32, i32)> {
        absolute_cells(&self.block, self.anchor, self.orientation)
    }

    /// Absolute perimeter cells of this placement, in deck coordinates
    pub fn absolute_perimeter_cells(&self) -> Vec<(i32, i32)> {
        self.block
            .perimeter_cells(self.orientation)
            .iter()
            .map(|&(rx, ry)| (self.anchor.x + rx as i32, self.anchor.y + ry as i32))
            .collect()
    }
}

/// Compute a block's absolute footprint cells for a candidate anchor/orientation
pub fn absolute_cells(block: &VoxelBlock, anchor: Anchor, orientation: Orientation) -> Vec<(i32, i32)> {
    block
        .footprint(orientation)
        .iter()
        .map(|&(rx, ry)| (anchor.x + rx as i32, anchor.y + ry as i32))
        .collect()
}

/// Immutable deck parameters, validated once at `PlacementArea::new`
#[derive(Debug, Clone, Copy)]
pub struct PlacementAreaConfig {
    /// Deck width in cells
    pub width: i32,
    /// Deck height in cells
    pub height: i32,
    /// Reserved cell band at the bow (+x) side
    pub bow_clearance: i32,
    /// Reserved cell band at the stern (-x) side
    pub stern_clearance: i32,
    /// Minimum chessboard gap between perimeter cells of distinct placed blocks
    pub block_spacing: i32,
    /// Additional bow-side exclusion for crane-type blocks
    pub ring_bow_clearance: i32,
}

/// Mutable deck state
pub struct PlacementArea {
    config: PlacementAreaConfig,
    grid: Array2<Option<usize>>,
    slots: Vec<Option<Placement>>,
    index_of: BTreeMap<BlockId, usize>,
}

impl PlacementArea {
    /// Construct an empty deck
    ///
    /// # Errors
    ///
    /// Returns [`crate::PackingError::InvalidParameter`] if `width`/`height`
    /// are not positive, if `bow_clearance + stern_clearance >= width`, or
    /// if `block_spacing` is negative.
    pub fn new(config: PlacementAreaConfig) -> Result<Self> {
        if config.width <= 0 {
            return Err(invalid_parameter("width", &config.width, &"must be > 0"));
        }
        if config.height <= 0 {
            return Err(invalid_parameter("height", &config.height, &"must be > 0"));
        }
        if config.bow_clearance < 0 {
            return Err(invalid_parameter(
                "bow_clearance",
                &config.bow_clearance,
                &"must be >= 0",
            ));
        }
        if config.stern_clearance < 0 {
            return Err(invalid_parameter(
                "stern_clearance",
                &config.stern_clearance,
                &"must be >= 0",
            ));
        }
        if config.bow_clearance + config.stern_clearance >= config.width {
            return Err(invalid_parameter(
                "bow_clearance + stern_clearance",
                &(config.bow_clearance + config.stern_clearance),
                &"must be < width",
            ));
        }
        if config.block_spacing < 0 {
            return Err(invalid_parameter(
                "block_spacing",
                &config.block_spacing,
                &"must be >= 0",
            ));
        }
        if config.ring_bow_clearance < 0 {
            return Err(invalid_parameter(
                "ring_bow_clearance",
                &config.ring_bow_clearance,
                &"must be >= 0",
            ));
        }

        let grid = Array2::from_elem((config.height as usize, config.width as usize), None);

        Ok(Self {
            config,
            grid,
            slots: Vec::new(),
            index_of: BTreeMap::new(),
        })
    }

    /// Deck configuration
    pub const fn config(&self) -> &PlacementAreaConfig {
        &self.config
    }

    /// Deck width in cells
    pub const fn width(&self) -> i32 {
        self.config.width
    }

    /// Deck height in cells
    pub const fn height(&self) -> i32 {
        self.config.height
    }

    /// Usable x-range `[stern_clearance, width - bow_clearance)`
    pub const fn usable_x_range(&self) -> Range<i32> {
        self.config.stern_clearance..(self.config.width - self.config.bow_clearance)
    }

    /// Minimum chessboard gap required between distinct placed blocks
    pub const fn block_spacing(&self) -> i32 {
        self.config.block_spacing
    }

    /// Placements currently on the deck, in insertion order
    pub fn placed(&self) -> impl Iterator<Item = &Placement> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Number of blocks currently placed
    pub fn placed_count(&self) -> usize {
        self.index_of.len()
    }

    /// Look up a placement by block id
    pub fn get(&self, id: &BlockId) -> Option<&Placement> {
        self.index_of
            .get(id)
            .and_then(|&slot| self.slots.get(slot).and_then(Option::as_ref))
    }

    fn cell_in_bounds(&self, x: i32, y: i32) -> bool {
        let usable = self.usable_x_range();
        x >= usable.start && x < usable.end && y >= 0 && y < self.config.height
    }

    fn cell_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.grid
            .get((y as usize, x as usize))
            .copied()
            .flatten()
            .is_some()
    }

    /// Test whether placing `block` at `anchor`/`orientation` would preserve
    /// invariants I1–I5
    ///
    /// Checks bounds, occupancy, type-specific constraints, then spacing, in
    /// that order, failing fast.
    pub fn can_place(&self, block: &VoxelBlock, anchor: Anchor, orientation: Orientation) -> bool {
        let cells = absolute_cells(block, anchor, orientation);

        if !cells.iter().all(|&(x, y)| self.cell_in_bounds(x, y)) {
            return false;
        }
        if cells.iter().any(|&(x, y)| self.cell_occupied(x, y)) {
            return false;
        }
        if !constraints::type_constraints_ok(self, block, anchor, orientation) {
            return false;
        }
        constraints::spacing_ok(self, block, anchor, orientation)
    }

    /// Commit a placement
    ///
    /// # Panics
    ///
    /// Panics if `block.id()` is already placed: that is a programming
    /// error, not a recoverable outcome.
    /// Callers must call [`Self::can_place`] first; this is not re-checked
    /// here for cost reasons.
    pub fn place(&mut self, block: Rc<VoxelBlock>, anchor: Anchor, orientation: Orientation) {
        assert!(
            !self.index_of.contains_key(block.id()),
            "AlreadyPlaced: block '{}' is already on the deck",
            block.id()
        );

        let cells = absolute_cells(&block, anchor, orientation);
        debug_assert!(
            cells.iter().all(|&(x, y)| self.cell_in_bounds(x, y) && !self.cell_occupied(x, y)),
            "InternalInvariantViolation: place('{}') called without a preceding can_place() that held",
            block.id(),
        );
        let slot = self.slots.len();

        for (x, y) in cells {
            if let Some(cell) = self.grid.get_mut((y as usize, x as usize)) {
                *cell = Some(slot);
            }
        }

        self.index_of.insert(block.id().clone(), slot);
        self.slots.push(Some(Placement {
            block,
            anchor,
            orientation,
        }));
    }

    /// Remove a placed block, clearing its grid cells
    ///
    /// Returns the removed placement, or `None` if the id was not placed.
    pub fn remove(&mut self, id: &BlockId) -> Option<Placement> {
        let slot = self.index_of.remove(id)?;
        let placement = self.slots.get_mut(slot).and_then(Option::take)?;

        for (x, y) in placement.absolute_cells() {
            if x >= 0 && y >= 0 {
                if let Some(cell) = self.grid.get_mut((y as usize, x as usize)) {
                    *cell = None;
                }
            }
        }

        Some(placement)
    }

    /// For each occupied column `x` in the usable range, the smallest `y`
    /// strictly above the topmost occupied cell in that column
    ///
    /// Backed by a `BTreeMap` so ascending/descending iteration is the
    /// map's native order, keeping iteration deterministic.
    pub fn column_tops(&self) -> BTreeMap<i32, i32> {
        let mut tops = BTreeMap::new();
        let usable = self.usable_x_range();

        for x in usable {
            let mut max_occupied_y: Option<i32> = None;
            for y in 0..self.config.height {
                if self.cell_occupied(x, y) {
                    max_occupied_y = Some(max_occupied_y.map_or(y, |prev| prev.max(y)));
                }
            }
            if let Some(top_y) = max_occupied_y {
                tops.insert(x, top_y + 1);
            }
        }

        tops
    }
}
