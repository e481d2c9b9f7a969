//! Workbook type - the main document structure

use ahash::AHashSet;

use crate::cell::CellValue;
use crate::content_type::{mime, ContentType};
use crate::error::{Error, Result};
use crate::relationship::{rel_types, Relationship};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
///
/// A workbook contains zero or more worksheets and global settings.
/// Package relationships and content types are derived from the sheet list,
/// so sheet positions and relationship ids can never drift apart.
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Workbook settings
    settings: WorkbookSettings,
    /// Active sheet index
    active_sheet: usize,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            settings: WorkbookSettings::default(),
            active_sheet: 0,
        }
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
            settings: WorkbookSettings::default(),
            active_sheet: 0,
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with default name
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.add_existing_worksheet(Worksheet::new(name))
    }

    /// Add an existing worksheet to the workbook
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.validate_sheet_name(worksheet.name(), None)?;
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }

    /// Remove a worksheet by index
    pub fn remove_worksheet(&mut self, index: usize) -> Result<Worksheet> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }

        let worksheet = self.worksheets.remove(index);
        if self.active_sheet >= self.worksheets.len() {
            self.active_sheet = self.worksheets.len().saturating_sub(1);
        }

        Ok(worksheet)
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.validate_sheet_name(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    /// Get the active sheet index
    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    /// Set the active sheet index
    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.active_sheet = index;
        Ok(())
    }

    /// Get workbook settings
    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    /// Get mutable workbook settings
    pub fn settings_mut(&mut self) -> &mut WorkbookSettings {
        &mut self.settings
    }

    // ==================== Package wiring ====================

    /// Workbook-level relationships.
    ///
    /// Sheet `i` is always `rId{i+1}` targeting `worksheets/sheet{i+1}.xml`;
    /// styles, theme and shared strings follow.
    pub fn relationships(&self) -> Vec<Relationship> {
        let mut rels: Vec<Relationship> = (0..self.worksheets.len())
            .map(|i| {
                Relationship::new(
                    Relationship::positional_id(i),
                    format!("worksheets/sheet{}.xml", i + 1),
                )
                .with_type(rel_types::WORKSHEET)
            })
            .collect();

        let n = rels.len();
        rels.push(
            Relationship::new(Relationship::positional_id(n), "styles.xml")
                .with_type(rel_types::STYLES),
        );
        rels.push(
            Relationship::new(Relationship::positional_id(n + 1), "theme/theme1.xml")
                .with_type(rel_types::THEME),
        );
        rels.push(
            Relationship::new(Relationship::positional_id(n + 2), "sharedStrings.xml")
                .with_type(rel_types::SHARED_STRINGS),
        );
        rels
    }

    /// Declared content-type entries for the package
    pub fn content_types(&self) -> Vec<ContentType> {
        let mut types = vec![
            ContentType::default_for("rels", mime::RELATIONSHIPS),
            ContentType::default_for("xml", mime::XML),
            ContentType::override_for("/xl/workbook.xml", mime::WORKBOOK),
            ContentType::override_for("/xl/styles.xml", mime::STYLES),
            ContentType::override_for("/xl/theme/theme1.xml", mime::THEME),
            ContentType::override_for("/xl/sharedStrings.xml", mime::SHARED_STRINGS),
        ];
        types.extend((0..self.worksheets.len()).map(|i| {
            ContentType::override_for(format!("/xl/worksheets/sheet{}.xml", i + 1), mime::WORKSHEET)
        }));
        types
    }

    /// Collect every distinct string cell value in first-seen order
    /// (sheet order, then row-major).
    pub fn shared_strings(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut table = Vec::new();
        for sheet in &self.worksheets {
            for (_, _, cell) in sheet.iter_cells() {
                if let CellValue::String(s) = &cell.value {
                    if seen.insert(s.as_str()) {
                        table.push(s.clone());
                    }
                }
            }
        }
        table
    }

    /// Validate a sheet name, optionally excluding a sheet from duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Duplicate names are compared case-insensitively
        let name_lower = name.to_lowercase();
        let duplicate = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != exclude_index && ws.name().to_lowercase() == name_lower);
        if duplicate {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    /// Generate a unique sheet name
    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name(&name, None).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Workbook-level settings
#[derive(Debug, Clone)]
pub struct WorkbookSettings {
    /// Date system: false = 1900 (Windows), true = 1904 (Mac)
    pub date_1904: bool,
    /// Ask the application to recalculate every formula on open
    pub calc_on_open: bool,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            date_1904: false,
            calc_on_open: true,
        }
    }
}
