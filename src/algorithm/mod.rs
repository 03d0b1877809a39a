/// Fixed-size bitset used for O(1) footprint/perimeter cell membership tests
pub mod bitset;
/// Ordered anchor-position candidate generation
pub mod candidates;
/// Post-placement right-shift and down-shift compaction
pub mod compactor;
/// Type-specific placement rules and voxel-boundary spacing
pub mod constraints;
/// Two-phase greedy placement loop and its orchestration
pub mod placer;
