//! Two-phase greedy placement loop
//!
//! Phase 1 sorts blocks by descending area and attempts each against a
//! capped candidate list; blocks that fail roll into phase 2, which
//! retries them ascending by area against a wider, placed-count-scaled
//! cap. The wall-clock budget is checked cooperatively at the top of each
//! per-block iteration and before each candidate attempt;
//! exceeding it is informational, never fatal.

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::algorithm::candidates;
use crate::algorithm::compactor;
use crate::io::config::{
    DEFAULT_TIME_BUDGET, PHASE1_CANDIDATE_CAP, PHASE2_CANDIDATE_CAP_BASE, PHASE2_CANDIDATE_CAP_CEILING,
    PHASE2_CANDIDATE_CAP_PLACED_FACTOR,
};
use crate::spatial::area::{Anchor, PlacementArea};
use crate::spatial::block::{BlockId, Orientation, VoxelBlock};

enum Outcome {
    Placed,
    Unplaced,
}

/// Outcome of a full `place_all` invocation
#[derive(Debug, Clone)]
pub struct PlacementResult {
    /// Accepted placements, in the order they were committed
    pub placed: Vec<(BlockId, Anchor, Orientation)>,
    /// Ids that could not be placed in either phase
    pub unplaced: Vec<BlockId>,
    /// How many of `placed` were accepted during the primary descending-area pass
    pub phase1_placed_count: usize,
    /// How many of `placed` were accepted during the ascending-area retry pass
    pub phase2_placed_count: usize,
    /// Total candidate positions that reached a feasibility test, across all blocks and phases
    pub candidates_considered: usize,
    /// Whether the wall-clock budget was exhausted before every block was tried
    pub time_budget_exceeded: bool,
    /// Wall-clock time spent in `place_all`
    pub elapsed: Duration,
}

impl PlacementResult {
    /// Number of blocks placed
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Number of blocks left unplaced
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }
}

/// Orchestrates the two-phase greedy placement loop
pub struct GreedyPlacer {
    max_time: Duration,
}

impl GreedyPlacer {
    /// Build a placer with an explicit wall-clock budget
    pub const fn new(max_time: Duration) -> Self {
        Self { max_time }
    }

    /// Place every block in `blocks` onto `area`, maximising count placed
    ///
    /// Consumes `blocks`; ids must be unique (duplicate ids are a caller
    /// error and will panic inside [`PlacementArea::place`]).
    #[allow(clippy::print_stderr)]
    pub fn place_all(&self, area: &mut PlacementArea, blocks: Vec<Rc<VoxelBlock>>) -> PlacementResult {
        let start = Instant::now();
        let mut candidates_considered = 0usize;
        let mut placed_list = Vec::new();
        let mut time_budget_exceeded = false;

        let mut phase1_order = blocks;
        phase1_order.sort_by(|a, b| b.area().cmp(&a.area()).then_with(|| a.id().cmp(b.id())));

        let mut retry: Vec<Rc<VoxelBlock>> = Vec::new();
        let mut phase1_placed_count = 0usize;

        for block in phase1_order {
            if start.elapsed() >= self.max_time {
                if !time_budget_exceeded {
                    eprintln!("Warning: time budget exceeded before block '{}'; remaining blocks marked unplaced", block.id());
                }
                time_budget_exceeded = true;
                retry.push(block);
                continue;
            }

            match self.try_place(area, &block, PHASE1_CANDIDATE_CAP, &mut candidates_considered, &start) {
                Outcome::Placed => {
                    phase1_placed_count += 1;
                    placed_list.push(committed(area, &block));
                }
                Outcome::Unplaced => retry.push(block),
            }
        }

        retry.sort_by(|a, b| a.area().cmp(&b.area()).then_with(|| a.id().cmp(b.id())));

        let mut unplaced = Vec::new();
        let mut phase2_placed_count = 0usize;

        for block in retry {
            if time_budget_exceeded || start.elapsed() >= self.max_time {
                if !time_budget_exceeded {
                    eprintln!("Warning: time budget exceeded before block '{}'; remaining blocks marked unplaced", block.id());
                }
                time_budget_exceeded = true;
                unplaced.push(block.id().clone());
                continue;
            }

            let cap = (PHASE2_CANDIDATE_CAP_PLACED_FACTOR * area.placed_count() + PHASE2_CANDIDATE_CAP_BASE)
                .min(PHASE2_CANDIDATE_CAP_CEILING);

            match self.try_place(area, &block, cap, &mut candidates_considered, &start) {
                Outcome::Placed => {
                    phase2_placed_count += 1;
                    placed_list.push(committed(area, &block));
                }
                Outcome::Unplaced => unplaced.push(block.id().clone()),
            }
        }

        PlacementResult {
            placed: placed_list,
            unplaced,
            phase1_placed_count,
            phase2_placed_count,
            candidates_considered,
            time_budget_exceeded,
            elapsed: start.elapsed(),
        }
    }

    fn try_place(
        &self,
        area: &mut PlacementArea,
        block: &Rc<VoxelBlock>,
        cap: usize,
        candidates_considered: &mut usize,
        start: &Instant,
    ) -> Outcome {
        for candidate in candidates::generate(area, block, cap) {
            if start.elapsed() >= self.max_time {
                break;
            }
            *candidates_considered += 1;

            if area.can_place(block, candidate.anchor, candidate.orientation) {
                area.place(Rc::clone(block), candidate.anchor, candidate.orientation);
                compactor::compact(area, block, candidate.anchor, candidate.orientation);
                return Outcome::Placed;
            }
        }

        Outcome::Unplaced
    }
}

impl Default for GreedyPlacer {
    /// A placer using [`DEFAULT_TIME_BUDGET`]
    fn default() -> Self {
        Self::new(DEFAULT_TIME_BUDGET)
    }
}

/// Reads back a block's post-compaction anchor/orientation
///
/// # Panics
///
/// Panics if `block` is not on `area`: `try_place` only calls this immediately
/// after a successful `place` + `compact`, so absence here indicates a bug
/// in those, not a reachable user error.
#[allow(clippy::panic)]
fn committed(area: &PlacementArea, block: &VoxelBlock) -> (BlockId, Anchor, Orientation) {
    let Some(placement) = area.get(block.id()) else {
        panic!("block '{}' missing from area after place+compact", block.id());
    };
    (block.id().clone(), placement.anchor, placement.orientation)
}
