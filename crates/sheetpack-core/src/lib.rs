//! # sheetpack-core
//!
//! Document model for the sheetpack spreadsheet writer.
//!
//! This crate provides the types the OOXML serializers read from:
//! - [`CellValue`] - Cell values (numbers, strings, booleans, formulas)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`Style`] and [`StyleRegistry`] - Cell styles keyed by content hash
//! - [`Relationship`] and [`ContentType`] - Package wiring records
//! - [`Workbook`], [`Worksheet`] - The main document structures
//!
//! ## Example
//!
//! ```rust
//! use sheetpack_core::{CellRange, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Hello").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//! sheet.merge_cells(&CellRange::parse("A2:B2").unwrap()).unwrap();
//! sheet.set_hyperlink("C1", "https://example.com").unwrap();
//!
//! // The linked cell was empty, so it shows its target
//! assert_eq!(workbook.shared_strings(), vec!["Hello", "https://example.com"]);
//! ```

pub mod cell;
pub mod content_type;
pub mod error;
pub mod relationship;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellRange, CellType, CellValue};
pub use content_type::ContentType;
pub use error::{Error, Result};
pub use relationship::Relationship;
pub use row::{RowData, RowProperties};
pub use style::{Style, StyleRegistry};
pub use workbook::{Workbook, WorkbookSettings};
pub use worksheet::{FreezePanes, PageMargins, PageOrientation, PageSetup, Worksheet};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
