//! Fixed-size bitset for O(1) footprint/perimeter cell membership tests
//!
//! Backed by a flat `bitvec`, indexed by flattened `(rx, ry)` cell
//! coordinates within a block's own bounding box.

use bitvec::prelude::*;

/// Membership set over the cells of a `width * height` bounding box
#[derive(Clone, Debug)]
pub struct FootprintBitset {
    bits: BitVec,
    width: u32,
}

impl FootprintBitset {
    /// Create an empty bitset sized for a `width x height` bounding box
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bits: bitvec![0; (width as usize) * (height as usize)],
            width,
        }
    }

    fn index(&self, rx: u32, ry: u32) -> usize {
        (ry as usize) * (self.width as usize) + (rx as usize)
    }

    /// Mark a cell as filled
    pub fn insert(&mut self, rx: u32, ry: u32) {
        let index = self.index(rx, ry);
        if let Some(mut bit) = self.bits.get_mut(index) {
            *bit = true;
        }
    }

    /// Test whether a cell is filled
    ///
    /// Cells outside the bounding box are always absent. `rx` must be
    /// bounds-checked against `width` explicitly: the backing storage is
    /// flat, so an out-of-range `rx` would otherwise silently alias the
    /// next row.
    pub fn contains(&self, rx: u32, ry: u32) -> bool {
        if rx >= self.width {
            return false;
        }
        let index = self.index(rx, ry);
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Count filled cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
