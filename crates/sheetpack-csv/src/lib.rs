//! # sheetpack-csv
//!
//! Reads delimited text into a [`sheetpack_core::Worksheet`].

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
