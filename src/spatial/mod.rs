//! Deck and block geometry
//!
//! This module contains the two core data structures: the immutable
//! [`block::VoxelBlock`] descriptor and the mutable [`area::PlacementArea`]
//! deck state.

/// Mutable deck state: occupancy grid, placed blocks, `can_place`/`place`/`remove`/`column_tops`
pub mod area;
/// Immutable block descriptors and their derived geometry
pub mod block;
