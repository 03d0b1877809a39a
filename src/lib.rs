//! Greedy 2-D voxel packing engine for a self-propelled floating dock deck
//!
//! Given a rectangular deck and a set of heterogeneous blocks described as
//! 2.5-D voxel footprints, [`GreedyPlacer`] decides which blocks can be
//! placed and where, maximising the count placed subject to boundary,
//! clearance and block-type constraints. The voxelisation pipeline, the
//! higher scheduling layers that pick which blocks to offer per voyage,
//! and any visualisation are out of scope: callers hand this engine a
//! block list and a deck spec, and consume the result.

#![forbid(unsafe_code)]

/// Candidate generation, constraint checking, compaction, and the greedy loop
pub mod algorithm;
/// Error types, configuration constants, and external-record loading
pub mod io;
/// Deck and block geometry: `PlacementArea` and `VoxelBlock`
pub mod spatial;

pub use algorithm::placer::{GreedyPlacer, PlacementResult};
pub use io::error::{PackingError, Result};
pub use spatial::area::{absolute_cells, Anchor, Placement, PlacementArea, PlacementAreaConfig};
pub use spatial::block::{BlockId, BlockType, Cell, HeightInfo, Orientation, VoxelBlock};
