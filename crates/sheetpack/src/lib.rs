//! # sheetpack
//!
//! Build spreadsheet workbooks in memory and write them as Office Open XML
//! (`.xlsx`) packages.
//!
//! ## Features
//!
//! - Typed cell values: text, numbers, booleans and formulas
//! - Merged ranges, frozen panes, auto-filters and row heights
//! - External hyperlinks
//! - Page margins and print setup
//! - CSV import (`csv` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use sheetpack::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Hello").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//! sheet.set_cell_value("C1", true).unwrap();
//! sheet.set_cell_formula("D1", "=B1*2").unwrap();
//!
//! let mut buf = Vec::new();
//! XlsxWriter::write(&workbook, std::io::Cursor::new(&mut buf)).unwrap();
//! assert!(!buf.is_empty());
//! ```

pub mod prelude;

pub use sheetpack_core::{
    CellAddress, CellData, CellRange, CellType, CellValue, ContentType, Error, FreezePanes,
    PageMargins, PageOrientation, PageSetup, Relationship, Result, RowData, RowProperties, Style,
    StyleRegistry, Workbook, WorkbookSettings, Worksheet, MAX_COLS, MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

pub use sheetpack_xlsx::{
    write_content_types, write_relationships, write_root_rels, write_shared_strings, write_theme,
    write_workbook, write_workbook_rels, write_worksheet, write_worksheet_rels, PackagePart,
    XlsxError, XlsxWriter,
};

#[cfg(feature = "csv")]
pub use sheetpack_csv::{CsvError, CsvReadOptions, CsvReader};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file.
    ///
    /// Only CSV input is supported; the data lands in a single worksheet.
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook as an XLSX package
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();

        match extension(path).as_deref() {
            #[cfg(feature = "csv")]
            Some("csv") | Some("tsv") => {
                let mut options = CsvReadOptions::default();
                if extension(path).as_deref() == Some("tsv") {
                    options.delimiter = b'\t';
                }
                let worksheet = CsvReader::read_file(path, &options)
                    .map_err(|e| Error::other(e.to_string()))?;

                let mut workbook = Workbook::empty();
                workbook.add_existing_worksheet(worksheet)?;
                Ok(workbook)
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        match extension(path).as_deref() {
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
