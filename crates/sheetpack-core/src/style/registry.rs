//! Style registry: content hash → style index

use ahash::AHashMap;

use crate::workbook::Workbook;

/// Maps each distinct style content hash to the index it is exported under.
///
/// Index 0 is the default format and never appears in the map; styled cells
/// are numbered from 1 in first-seen order (sheet order, then row-major).
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    style_id_by_hash: AHashMap<u64, u32>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every style hash used by the workbook's cells
    pub fn build(workbook: &Workbook) -> Self {
        let mut registry = Self::new();
        for sheet in workbook.worksheets() {
            for (_, _, cell) in sheet.iter_cells() {
                if let Some(hash) = cell.style_hash {
                    registry.get_or_insert(hash);
                }
            }
        }
        registry
    }

    /// Get the index for a hash, assigning the next one if it is new
    pub fn get_or_insert(&mut self, hash: u64) -> u32 {
        let next = self.style_id_by_hash.len() as u32 + 1;
        *self.style_id_by_hash.entry(hash).or_insert(next)
    }

    /// Look up the index assigned to a hash
    pub fn get(&self, hash: u64) -> Option<u32> {
        self.style_id_by_hash.get(&hash).copied()
    }

    /// Check if a hash is registered
    pub fn contains(&self, hash: u64) -> bool {
        self.style_id_by_hash.contains_key(&hash)
    }

    /// Number of registered (non-default) styles
    pub fn len(&self) -> usize {
        self.style_id_by_hash.len()
    }

    /// Check if no style is registered
    pub fn is_empty(&self) -> bool {
        self.style_id_by_hash.is_empty()
    }
}
