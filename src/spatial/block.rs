//! Immutable block descriptors and their derived geometry
//!
//! A [`VoxelBlock`] is built once from a voxel record and never mutated
//! afterwards. All geometry the packer needs — width, height, area,
//! boundary rings, perimeter cells, and (for crane blocks) a precomputed
//! 90°-rotated view — is derived at construction time so the placement
//! hot path never recomputes it.

use std::collections::BTreeMap;
use std::fmt;

use crate::algorithm::bitset::FootprintBitset;
use crate::io::error::{input_invalid, PackingError, Result};

/// Opaque block identifier
///
/// Wraps the `block_id` string from the external voxel record. `Ord` is
/// derived so blocks can be stored in sorted containers, which keeps
/// tie-breaks in the greedy loop deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(String);

impl BlockId {
    /// Wrap a raw identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Block type, governing which type-specific constraint applies
///
/// `"support"`-typed and any other unrecognised `block_type` string from
/// the voxel record are folded into [`BlockType::Trestle`] at the loader
/// boundary; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Crane block: subject to the bow-ring clearance constraint
    Crane,
    /// Trestle (or support) block: subject to the horizontal access corridor constraint
    Trestle,
}

/// Rotation applied to a block's footprint before placement
///
/// Only ever non-zero for crane blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Footprint as stored on the `VoxelBlock`
    Deg0,
    /// Footprint rotated 90° from the stored view
    Deg90,
}

/// Layer extent of a single footprint cell, carried through for visualisation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightInfo {
    /// Lowest occupied grid layer at this cell
    pub min_layer: i32,
    /// Highest occupied grid layer at this cell
    pub max_layer: i32,
}

/// Cell coordinates relative to a block's own (0, 0) origin
pub type Cell = (u32, u32);

/// Derived geometry shared by a block's unrotated and (if present) rotated view
#[derive(Debug, Clone)]
struct Geometry {
    footprint: Vec<Cell>,
    actual_width: u32,
    actual_height: u32,
    /// y -> max rx among cells with that ry
    right_boundary: BTreeMap<u32, u32>,
    /// x -> min ry among cells with that rx
    bottom_boundary: BTreeMap<u32, u32>,
    perimeter_cells: Vec<Cell>,
}

impl Geometry {
    fn from_cells(mut footprint: Vec<Cell>) -> Result<Self> {
        if footprint.is_empty() {
            return Err(input_invalid("footprint is empty"));
        }
        footprint.sort_unstable();
        footprint.dedup();

        let min_rx = footprint.iter().map(|&(rx, _)| rx).min().unwrap_or(0);
        let min_ry = footprint.iter().map(|&(_, ry)| ry).min().unwrap_or(0);
        if min_rx != 0 || min_ry != 0 {
            return Err(input_invalid(
                "footprint must be normalised so that min rx = min ry = 0",
            ));
        }

        let actual_width = footprint.iter().map(|&(rx, _)| rx).max().unwrap_or(0) + 1;
        let actual_height = footprint.iter().map(|&(_, ry)| ry).max().unwrap_or(0) + 1;

        let mut filled = FootprintBitset::new(actual_width, actual_height);
        for &(rx, ry) in &footprint {
            filled.insert(rx, ry);
        }

        let mut right_boundary: BTreeMap<u32, u32> = BTreeMap::new();
        let mut bottom_boundary: BTreeMap<u32, u32> = BTreeMap::new();
        for &(rx, ry) in &footprint {
            right_boundary
                .entry(ry)
                .and_modify(|max_rx| *max_rx = (*max_rx).max(rx))
                .or_insert(rx);
            bottom_boundary
                .entry(rx)
                .and_modify(|min_ry| *min_ry = (*min_ry).min(ry))
                .or_insert(ry);
        }

        let mut perimeter_cells = Vec::new();
        for &(rx, ry) in &footprint {
            let neighbours = four_neighbours(rx, ry);
            let has_empty_neighbour = neighbours
                .into_iter()
                .any(|maybe| maybe.is_none_or(|(nx, ny)| !filled.contains(nx, ny)));
            if has_empty_neighbour {
                perimeter_cells.push((rx, ry));
            }
        }

        Ok(Self {
            footprint,
            actual_width,
            actual_height,
            right_boundary,
            bottom_boundary,
            perimeter_cells,
        })
    }

    /// Rotate this geometry 90° clockwise within its own bounding box
    fn rotated(&self) -> Result<Self> {
        let width = self.actual_width;
        let rotated_cells: Vec<Cell> = self
            .footprint
            .iter()
            .map(|&(rx, ry)| (ry, width - 1 - rx))
            .collect();
        Self::from_cells(rotated_cells)
    }
}

fn four_neighbours(rx: u32, ry: u32) -> [Option<Cell>; 4] {
    [
        rx.checked_sub(1).map(|x| (x, ry)),
        Some((rx + 1, ry)),
        ry.checked_sub(1).map(|y| (rx, y)),
        Some((rx, ry + 1)),
    ]
}

/// Immutable block descriptor
///
/// Constructed once from a voxel record (see `io::loader`) and never
/// mutated. Cloning is cheap-ish but `PlacementArea` holds blocks behind
/// `Rc` rather than cloning the footprint repeatedly.
#[derive(Debug, Clone)]
pub struct VoxelBlock {
    id: BlockId,
    block_type: BlockType,
    height_info: BTreeMap<Cell, HeightInfo>,
    geometry: Geometry,
    rotated_geometry: Option<Geometry>,
}

impl VoxelBlock {
    /// Construct a block from its footprint and per-cell height extents
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::InputInvalid`] if the footprint is empty or
    /// not normalised so that `min rx = min ry = 0`.
    pub fn new(
        id: impl Into<BlockId>,
        block_type: BlockType,
        footprint: Vec<Cell>,
        height_info: BTreeMap<Cell, HeightInfo>,
    ) -> Result<Self> {
        let geometry = Geometry::from_cells(footprint)?;
        let rotated_geometry = match block_type {
            BlockType::Crane => Some(geometry.rotated()?),
            BlockType::Trestle => None,
        };

        Ok(Self {
            id: id.into(),
            block_type,
            height_info,
            geometry,
            rotated_geometry,
        })
    }

    /// Opaque block identifier
    pub const fn id(&self) -> &BlockId {
        &self.id
    }

    /// Block type
    pub const fn block_type(&self) -> BlockType {
        self.block_type
    }

    /// Per-cell height extent, keyed by the unrotated footprint's relative coordinates
    pub const fn height_info(&self) -> &BTreeMap<Cell, HeightInfo> {
        &self.height_info
    }

    fn geometry_for(&self, orientation: Orientation) -> &Geometry {
        match orientation {
            Orientation::Deg0 => &self.geometry,
            Orientation::Deg90 => self.rotated_geometry.as_ref().unwrap_or(&self.geometry),
        }
    }

    /// Whether a 90°-rotated view exists for this block (crane blocks only)
    pub const fn supports_rotation(&self) -> bool {
        matches!(self.block_type, BlockType::Crane)
    }

    /// Filled footprint cells for the given orientation, relative to the anchor
    pub fn footprint(&self, orientation: Orientation) -> &[Cell] {
        &self.geometry_for(orientation).footprint
    }

    /// Perimeter cells (at least one empty 4-neighbour) for the given orientation
    pub fn perimeter_cells(&self, orientation: Orientation) -> &[Cell] {
        &self.geometry_for(orientation).perimeter_cells
    }

    /// `max rx` for each occupied `ry`, for the given orientation
    pub fn right_boundary(&self, orientation: Orientation) -> &BTreeMap<u32, u32> {
        &self.geometry_for(orientation).right_boundary
    }

    /// `min ry` for each occupied `rx`, for the given orientation
    pub fn bottom_boundary(&self, orientation: Orientation) -> &BTreeMap<u32, u32> {
        &self.geometry_for(orientation).bottom_boundary
    }

    /// Width in cells for the given orientation
    pub fn actual_width(&self, orientation: Orientation) -> u32 {
        self.geometry_for(orientation).actual_width
    }

    /// Height in cells for the given orientation
    pub fn actual_height(&self, orientation: Orientation) -> u32 {
        self.geometry_for(orientation).actual_height
    }

    /// Number of filled footprint cells (orientation-independent)
    pub fn area(&self) -> usize {
        self.geometry.footprint.len()
    }
}
