//! Cell storage implementation
//!
//! Sparse, row-major storage: only addressed cells are kept, in a
//! `BTreeMap<row, BTreeMap<col, CellData>>` so iteration order is always
//! row-then-column. The serializers depend on that order for byte-stable output.

use std::collections::BTreeMap;

use super::{CellAddress, CellRange, CellType, CellValue};

/// Complete data for a single cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Content hash of the applied style, if any
    pub style_hash: Option<u64>,
    /// Set when the cell lies inside a merged range
    pub merged: bool,
    /// Relationship id of the hyperlink attached to this cell
    pub hyperlink: Option<String>,
}

impl CellData {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Serializer-facing data type
    pub fn data_type(&self) -> CellType {
        self.value.data_type()
    }

    /// Whether a non-default style is applied
    pub fn has_style(&self) -> bool {
        self.style_hash.is_some()
    }

    /// Whether the cell is part of a merged range
    pub fn is_merged(&self) -> bool {
        self.merged
    }

    /// Whether a hyperlink relationship is attached
    pub fn has_hyperlink(&self) -> bool {
        self.hyperlink.is_some()
    }

    /// A cell that carries no information at all and can be dropped from storage
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() && self.style_hash.is_none() && !self.merged && self.hyperlink.is_none()
    }
}

/// Sparse row-based storage for worksheet cells
#[derive(Debug, Default, Clone)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,
}

impl CellStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|cols| cols.get(&col))
    }

    /// Get a cell mutably
    pub fn get_mut(&mut self, row: u32, col: u16) -> Option<&mut CellData> {
        self.rows.get_mut(&row).and_then(|cols| cols.get_mut(&col))
    }

    /// Get a cell, creating a blank one if it does not exist
    pub fn get_or_create(&mut self, row: u32, col: u16) -> &mut CellData {
        self.rows.entry(row).or_default().entry(col).or_default()
    }

    /// Set a cell value, keeping style, merge and hyperlink information
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        self.get_or_create(row, col).value = value;
    }

    /// Remove a cell entirely
    pub fn remove(&mut self, row: u32, col: u16) -> Option<CellData> {
        let cols = self.rows.get_mut(&row)?;
        let removed = cols.remove(&col);
        if cols.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Check if no cell is stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all stored cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, cell)| (row, col, cell)))
    }

    /// Iterate over stored rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u16, CellData>)> {
        self.rows.iter().map(|(&row, cols)| (row, cols))
    }

    /// Minimal range covering every stored cell
    pub fn bounds(&self) -> Option<CellRange> {
        let mut iter = self.iter();
        let (row, col, _) = iter.next()?;
        let mut range = CellRange::single(CellAddress::new(row, col));
        for (row, col, _) in iter {
            range.extend_to(CellAddress::new(row, col));
        }
        Some(range)
    }
}
