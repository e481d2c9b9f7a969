//! Worksheet type

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::relationship::Relationship;
use crate::row::{RowData, RowProperties};
use crate::style::Style;
use crate::{MAX_COLS, MAX_ROWS};

/// Default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Styles referenced by cells, keyed by content hash
    styles: AHashMap<u64, Style>,
    /// Merged ranges in insertion order
    merged_regions: Vec<CellRange>,
    /// Freeze pane settings
    freeze_panes: Option<FreezePanes>,
    /// Auto-filter range
    auto_filter: Option<CellRange>,
    /// Print margins
    page_margins: PageMargins,
    /// Print settings
    page_setup: PageSetup,
    /// Sheet-level relationships (hyperlink targets)
    relationships: Vec<Relationship>,
    /// Custom row properties
    row_properties: BTreeMap<u32, RowProperties>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            styles: AHashMap::new(),
            merged_regions: Vec::new(),
            freeze_panes: None,
            auto_filter: None,
            page_margins: PageMargins::default(),
            page_setup: PageSetup::default(),
            relationships: Vec::new(),
            row_properties: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get cell value by indices
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell formula by address string
    pub fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_formula_at(addr.row, addr.col, formula)
    }

    /// Set a cell formula by indices; a missing leading `=` is added
    pub fn set_cell_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        if formula.trim_start_matches('=').is_empty() {
            return Err(Error::FormulaParse("empty formula".into()));
        }
        self.set_cell_value_at(row, col, CellValue::formula(formula))
    }

    /// Apply a style to a cell by address
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Apply a style to a cell; the default style clears any existing one
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        validate_cell_position(row, col)?;
        if style.is_default() {
            if let Some(cell) = self.cells.get_mut(row, col) {
                cell.style_hash = None;
            }
            self.drop_if_blank(row, col);
            return Ok(());
        }

        let hash = style.content_hash();
        self.styles.entry(hash).or_insert_with(|| style.clone());
        self.cells.get_or_create(row, col).style_hash = Some(hash);
        Ok(())
    }

    /// Look up a style referenced by this sheet's cells
    pub fn style_by_hash(&self, hash: u64) -> Option<&Style> {
        self.styles.get(&hash)
    }

    /// Get the non-default style applied to a cell, if any
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        self.cells
            .get(row, col)
            .and_then(|c| c.style_hash)
            .and_then(|hash| self.style_by_hash(hash))
    }

    /// Clear a cell's value by address
    pub fn clear_cell(&mut self, address: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.clear_cell_at(addr.row, addr.col);
        Ok(())
    }

    /// Clear a cell's value; merged placeholders and hyperlinks are kept
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        if let Some(cell) = self.cells.get_mut(row, col) {
            cell.value = CellValue::Empty;
        }
        self.drop_if_blank(row, col);
    }

    fn drop_if_blank(&mut self, row: u32, col: u16) {
        if self.cells.get(row, col).is_some_and(CellData::is_blank) {
            self.cells.remove(row, col);
        }
    }

    /// Minimal range covering all stored cells
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells.bounds()
    }

    /// The sheet's dimension: the used range, or `A1` when nothing is stored
    pub fn calculate_dimension(&self) -> CellRange {
        self.used_range()
            .unwrap_or_else(|| CellRange::single(CellAddress::new(0, 0)))
    }

    // === Rows ===

    /// Custom properties of a row, if any
    pub fn row_properties(&self, row: u32) -> Option<&RowProperties> {
        self.row_properties.get(&row)
    }

    /// Check if a row has custom properties
    pub fn has_row_properties(&self, row: u32) -> bool {
        self.row_properties.contains_key(&row)
    }

    /// Get row height (default if not set)
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_properties
            .get(&row)
            .map(|p| p.height)
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Set a custom row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(Error::other(format!("invalid row height {}", height)));
        }
        self.row_properties
            .insert(row, RowProperties::with_height(height));
        Ok(())
    }

    /// Iterate over stored rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = RowData<'_>> {
        self.cells.rows().map(|(index, cells)| RowData::new(index, cells))
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge cells.
    ///
    /// Every cell of the range is materialized and flagged as merged so the
    /// range geometry survives serialization even where cells hold no value.
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        validate_cell_position(range.end.row, range.end.col)?;
        if self.merged_regions.iter().any(|existing| range.overlaps(existing)) {
            return Err(Error::MergedCellConflict(range.to_string()));
        }

        for addr in range.cells() {
            self.cells.get_or_create(addr.row, addr.col).merged = true;
        }
        self.merged_regions.push(*range);
        Ok(())
    }

    /// Unmerge cells; returns false if the range was not merged
    pub fn unmerge_cells(&mut self, range: &CellRange) -> bool {
        let Some(pos) = self.merged_regions.iter().position(|r| r == range) else {
            return false;
        };
        self.merged_regions.remove(pos);

        for addr in range.cells() {
            if let Some(cell) = self.cells.get_mut(addr.row, addr.col) {
                cell.merged = false;
            }
            self.drop_if_blank(addr.row, addr.col);
        }
        true
    }

    /// Check if a cell lies in a merged range
    pub fn is_merged_at(&self, row: u32, col: u16) -> bool {
        self.cells.get(row, col).is_some_and(CellData::is_merged)
    }

    // === Freeze Panes ===

    /// Get freeze pane settings
    pub fn freeze_panes(&self) -> Option<&FreezePanes> {
        self.freeze_panes.as_ref()
    }

    /// Freeze the given number of leading rows and columns
    pub fn set_freeze_panes(&mut self, row: u32, col: u16) {
        if row == 0 && col == 0 {
            self.freeze_panes = None;
        } else {
            self.freeze_panes = Some(FreezePanes { row, col });
        }
    }

    /// Freeze everything above and left of `top_left_cell` (e.g. "B2")
    pub fn set_freeze_panes_at(&mut self, top_left_cell: &str) -> Result<()> {
        let addr = CellAddress::parse(top_left_cell)?;
        self.set_freeze_panes(addr.row, addr.col);
        Ok(())
    }

    /// Remove freeze panes
    pub fn unfreeze_panes(&mut self) {
        self.freeze_panes = None;
    }

    // === Auto Filter ===

    /// Get the auto-filter range
    pub fn auto_filter(&self) -> Option<&CellRange> {
        self.auto_filter.as_ref()
    }

    /// Set the auto-filter range
    pub fn set_auto_filter(&mut self, range: CellRange) {
        self.auto_filter = Some(range);
    }

    /// Remove the auto-filter
    pub fn clear_auto_filter(&mut self) {
        self.auto_filter = None;
    }

    // === Hyperlinks & Relationships ===

    /// Attach an external hyperlink to a cell.
    ///
    /// Returns the relationship id. Re-linking a cell retargets its existing
    /// relationship instead of adding a new one. An empty cell takes the
    /// target as its displayed value.
    pub fn set_hyperlink(&mut self, address: &str, target_uri: &str) -> Result<String> {
        let addr = CellAddress::parse(address)?;
        validate_cell_position(addr.row, addr.col)?;

        let existing = self
            .cells
            .get(addr.row, addr.col)
            .and_then(|c| c.hyperlink.clone());
        if let Some(id) = existing {
            if let Some(rel) = self.relationships.iter_mut().find(|r| r.id == id) {
                *rel = Relationship::new(id.clone(), target_uri);
                return Ok(id);
            }
        }

        let id = self.next_relationship_id();
        self.relationships
            .push(Relationship::new(id.clone(), target_uri));
        let cell = self.cells.get_or_create(addr.row, addr.col);
        cell.hyperlink = Some(id.clone());
        // An empty cell displays its link target
        if cell.value.is_empty() {
            cell.value = CellValue::String(target_uri.to_string());
        }
        Ok(id)
    }

    /// Attach an existing relationship id to a cell without creating the relationship
    pub fn set_cell_hyperlink_id(&mut self, address: &str, id: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        validate_cell_position(addr.row, addr.col)?;
        self.cells.get_or_create(addr.row, addr.col).hyperlink = Some(id.to_string());
        Ok(())
    }

    /// Add a raw sheet-level relationship
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Sheet-level relationships, in insertion order
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    fn next_relationship_id(&self) -> String {
        let mut n = self.relationships.len();
        loop {
            let id = Relationship::positional_id(n);
            if !self.relationships.iter().any(|r| r.id == id) {
                return id;
            }
            n += 1;
        }
    }

    // === Page Layout ===

    /// Get page margins
    pub fn page_margins(&self) -> &PageMargins {
        &self.page_margins
    }

    /// Set page margins
    pub fn set_page_margins(&mut self, margins: PageMargins) {
        self.page_margins = margins;
    }

    /// Get page setup
    pub fn page_setup(&self) -> &PageSetup {
        &self.page_setup
    }

    /// Get mutable page setup
    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.page_setup
    }

    // === Iteration ===

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet stores no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all stored cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }
}

/// Validate cell position
fn validate_cell_position(row: u32, col: u16) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
    }
    Ok(())
}

/// Freeze pane settings: the number of frozen rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezePanes {
    /// Number of frozen rows
    pub row: u32,
    /// Number of frozen columns
    pub col: u16,
}

impl FreezePanes {
    /// First scrollable cell (e.g. "B2" for one frozen row and column)
    pub fn top_left_cell(&self) -> CellAddress {
        CellAddress::new(self.row, self.col)
    }

    /// Columns are frozen
    pub fn has_column_split(&self) -> bool {
        self.col > 0
    }

    /// Rows are frozen
    pub fn has_row_split(&self) -> bool {
        self.row > 0
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            left: 0.7,
            right: 0.7,
            top: 0.75,
            bottom: 0.75,
            header: 0.3,
            footer: 0.3,
        }
    }
}

/// Print settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    /// Paper size code (1 = Letter, 9 = A4)
    pub paper_size: u32,
    /// Page orientation
    pub orientation: PageOrientation,
    /// Scale the sheet to fit the page
    pub fit_to_page: bool,
    /// Fit to page height
    pub fit_to_height: bool,
    /// Fit to page width
    pub fit_to_width: bool,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_size: 1, // Letter
            orientation: PageOrientation::Portrait,
            fit_to_page: false,
            fit_to_height: false,
            fit_to_width: false,
        }
    }
}

impl PageSetup {
    /// Check if every setting matches the format default
    pub fn is_default(&self) -> bool {
        *self == PageSetup::default()
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    /// Attribute value used in `pageSetup`
    pub fn as_str(&self) -> &'static str {
        match self {
            PageOrientation::Portrait => "portrait",
            PageOrientation::Landscape => "landscape",
        }
    }
}
