//! Fallible conversion of external voxel/deck records into core types
//!
//! Deliberately thin: deserialize, validate, hand off to the constructors.
//! This module owns no retry logic, no caching, no file-watching.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::io::error::{input_invalid, invalid_parameter, io_error, PackingError, Result};
use crate::spatial::area::PlacementAreaConfig;
use crate::spatial::block::{BlockType, HeightInfo, VoxelBlock};

/// Per-block voxel record, as produced by the (out-of-scope) voxelisation pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct RawVoxelRecord {
    /// Identifier string, carried through unchanged into [`crate::spatial::block::BlockId`]
    pub block_id: String,
    /// `"crane"` | `"trestle"` | anything else, folded to trestle
    pub block_type: String,
    /// Voxel geometry payload
    pub voxel_data: RawVoxelData,
}

/// Voxel geometry payload of a [`RawVoxelRecord`]
#[derive(Debug, Clone, Deserialize)]
pub struct RawVoxelData {
    /// Metres per cell; informational only, the packer works in cells
    pub resolution: f64,
    /// `(x, y, [min_layer, max_layer])` tuples, non-negative cells relative to the block origin
    pub voxel_positions: Vec<(u32, u32, [i32; 2])>,
    /// Optional precomputed area, must equal `voxel_positions.len()` when present
    pub footprint_area: Option<usize>,
}

impl TryFrom<RawVoxelRecord> for VoxelBlock {
    type Error = PackingError;

    /// Validate and convert a voxel record into a [`VoxelBlock`]
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::InputInvalid`] if `footprint_area` disagrees
    /// with the length of `voxel_positions`, or if the underlying
    /// [`VoxelBlock::new`] construction fails.
    fn try_from(record: RawVoxelRecord) -> Result<Self> {
        let positions = &record.voxel_data.voxel_positions;

        if let Some(area) = record.voxel_data.footprint_area {
            if area != positions.len() {
                return Err(input_invalid(format!(
                    "footprint_area {area} does not match voxel_positions length {}",
                    positions.len()
                )));
            }
        }

        let block_type = match record.block_type.as_str() {
            "crane" => BlockType::Crane,
            _ => BlockType::Trestle,
        };

        let mut footprint = Vec::with_capacity(positions.len());
        let mut height_info = BTreeMap::new();
        for &(x, y, [min_layer, max_layer]) in positions {
            footprint.push((x, y));
            height_info.insert((x, y), HeightInfo { min_layer, max_layer });
        }

        Self::new(record.block_id, block_type, footprint, height_info)
    }
}

/// Deck configuration, as produced by the (out-of-scope) config generation layer
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeckConfig {
    /// Deck extent and cell size, in metres
    pub grid_size: RawGridSize,
    /// Boundary reservations and spacing, in cells
    pub constraints: RawConstraints,
}

/// `grid_size` section of a [`RawDeckConfig`]
#[derive(Debug, Clone, Deserialize)]
pub struct RawGridSize {
    /// Deck width in metres
    pub width: f64,
    /// Deck height in metres
    pub height: f64,
    /// Cell size in metres per cell
    pub grid_unit: f64,
}

/// `constraints` section of a [`RawDeckConfig`]
#[derive(Debug, Clone, Deserialize)]
pub struct RawConstraints {
    /// Boundary reservation cell bands
    pub margin: RawMargin,
    /// Minimum chessboard gap between placed blocks, in cells (δ)
    pub block_clearance: i32,
    /// Additional bow-side exclusion for crane-type blocks, in cells
    pub ring_bow_clearance: i32,
}

/// `constraints.margin` section of a [`RawDeckConfig`]
#[derive(Debug, Clone, Deserialize)]
pub struct RawMargin {
    /// Reserved cell band at the bow (+x) side
    pub bow: i32,
    /// Reserved cell band at the stern (-x) side
    pub stern: i32,
}

impl TryFrom<RawDeckConfig> for PlacementAreaConfig {
    type Error = PackingError;

    /// Validate and convert a deck record into a [`PlacementAreaConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::InvalidParameter`] if `grid_unit` is not
    /// positive, or if `width`/`height` do not convert to a positive cell
    /// count. Clearance/spacing validation is deferred to
    /// [`crate::spatial::area::PlacementArea::new`].
    fn try_from(raw: RawDeckConfig) -> Result<Self> {
        if raw.grid_size.grid_unit <= 0.0 {
            return Err(invalid_parameter(
                "grid_size.grid_unit",
                &raw.grid_size.grid_unit,
                &"must be > 0",
            ));
        }

        let width = cells_from_metres(raw.grid_size.width, raw.grid_size.grid_unit, "grid_size.width")?;
        let height = cells_from_metres(raw.grid_size.height, raw.grid_size.grid_unit, "grid_size.height")?;

        Ok(Self {
            width,
            height,
            bow_clearance: raw.constraints.margin.bow,
            stern_clearance: raw.constraints.margin.stern,
            block_spacing: raw.constraints.block_clearance,
            ring_bow_clearance: raw.constraints.ring_bow_clearance,
        })
    }
}

fn cells_from_metres(metres: f64, grid_unit: f64, parameter: &'static str) -> Result<i32> {
    if metres <= 0.0 {
        return Err(invalid_parameter(parameter, &metres, &"must be > 0"));
    }

    let cells = (metres / grid_unit).round();
    if !cells.is_finite() || cells < 1.0 || cells > f64::from(i32::MAX) {
        return Err(invalid_parameter(
            parameter,
            &metres,
            &"does not convert to a valid cell count",
        ));
    }

    #[allow(clippy::cast_possible_truncation)]
    Ok(cells as i32)
}

/// Parse and validate a voxel record from its JSON form
///
/// # Errors
///
/// Returns [`PackingError::RecordParse`] if `json` does not deserialize to
/// a [`RawVoxelRecord`], or [`PackingError::InputInvalid`] if the
/// `TryFrom<RawVoxelRecord>` conversion rejects it.
pub fn parse_voxel_record(source_name: &str, json: &str) -> Result<VoxelBlock> {
    let raw: RawVoxelRecord = serde_json::from_str(json).map_err(|source| PackingError::RecordParse {
        source_name: source_name.to_string(),
        source,
    })?;
    VoxelBlock::try_from(raw)
}

/// Parse and validate a deck configuration from its JSON form
///
/// # Errors
///
/// Returns [`PackingError::RecordParse`] if `json` does not deserialize to
/// a [`RawDeckConfig`], or [`PackingError::InvalidParameter`] if the
/// `TryFrom<RawDeckConfig>` conversion rejects it.
pub fn parse_deck_config(source_name: &str, json: &str) -> Result<PlacementAreaConfig> {
    let raw: RawDeckConfig = serde_json::from_str(json).map_err(|source| PackingError::RecordParse {
        source_name: source_name.to_string(),
        source,
    })?;
    PlacementAreaConfig::try_from(raw)
}

/// Read and parse a voxel record from a file on disk
///
/// # Errors
///
/// Returns [`PackingError::Io`] if `path` cannot be read, otherwise the
/// same errors as [`parse_voxel_record`].
pub fn load_voxel_record(path: &Path) -> Result<VoxelBlock> {
    let json = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    parse_voxel_record(&path.display().to_string(), &json)
}

/// Read and parse a deck configuration from a file on disk
///
/// # Errors
///
/// Returns [`PackingError::Io`] if `path` cannot be read, otherwise the
/// same errors as [`parse_deck_config`].
pub fn load_deck_config(path: &Path) -> Result<PlacementAreaConfig> {
    let json = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    parse_deck_config(&path.display().to_string(), &json)
}
