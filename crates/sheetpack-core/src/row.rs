//! Row types

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData};

/// Per-row formatting overrides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowProperties {
    /// Custom height in points
    pub height: f64,
}

impl RowProperties {
    /// Row properties with a custom height
    pub fn with_height(height: f64) -> Self {
        Self { height }
    }
}

/// A borrowed view of one stored row, yielded by [`crate::Worksheet::rows`]
#[derive(Debug, Clone, Copy)]
pub struct RowData<'a> {
    /// Row index (0-based)
    pub index: u32,
    cells: &'a BTreeMap<u16, CellData>,
}

impl<'a> RowData<'a> {
    pub(crate) fn new(index: u32, cells: &'a BTreeMap<u16, CellData>) -> Self {
        Self { index, cells }
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&'a CellData> {
        self.cells.get(&col)
    }

    /// Iterate over the row's cells in column order, with their addresses
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &'a CellData)> + 'a {
        let row = self.index;
        self.cells
            .iter()
            .map(move |(&col, cell)| (CellAddress::new(row, col), cell))
    }

    /// Number of stored cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row holds no stored cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
