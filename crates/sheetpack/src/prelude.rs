//! Prelude module - common imports for sheetpack users
//!
//! ```rust
//! use sheetpack::prelude::*;
//! ```

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvReader};

pub use crate::{
    CellAddress, CellRange, CellValue, Error, PageOrientation, Result, Style, Workbook,
    WorkbookExt, Worksheet, XlsxError, XlsxWriter,
};
