//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use sheetpack_core::{CellValue, Worksheet, MAX_COLS, MAX_ROWS};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a worksheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a worksheet.
    ///
    /// Header fields are always stored as text. Records may have differing
    /// lengths.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.as_str());
        let mut row_idx = 0u32;

        if options.has_header {
            let headers = csv_reader.headers()?.clone();
            for (col, value) in headers.iter().enumerate() {
                let col = Self::column_index(row_idx, col)?;
                if !value.is_empty() {
                    worksheet.set_cell_value_at(row_idx, col, CellValue::string(value))?;
                }
            }
            row_idx += 1;
        }

        for result in csv_reader.records() {
            let record = result?;
            if row_idx >= MAX_ROWS {
                return Err(CsvError::Parse {
                    row: row_idx as usize + 1,
                    column: 1,
                    message: format!("more than {} rows", MAX_ROWS),
                });
            }

            for (col, field) in record.iter().enumerate() {
                let col = Self::column_index(row_idx, col)?;
                let value = if options.auto_detect_types {
                    Self::detect_type(field)
                } else {
                    CellValue::string(field)
                };

                if !value.is_empty() {
                    worksheet.set_cell_value_at(row_idx, col, value)?;
                }
            }

            row_idx += 1;
        }

        log::debug!(
            "read {} rows into '{}' ({} cells)",
            row_idx,
            worksheet.name(),
            worksheet.cell_count()
        );
        Ok(worksheet)
    }

    fn column_index(row: u32, col: usize) -> CsvResult<u16> {
        u16::try_from(col)
            .ok()
            .filter(|&c| c < MAX_COLS)
            .ok_or_else(|| CsvError::Parse {
                row: row as usize + 1,
                column: col + 1,
                message: format!("more than {} columns", MAX_COLS),
            })
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // "inf" and "NaN" parse as floats but are text in a spreadsheet
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        if trimmed.len() > 1 && trimmed.starts_with('=') {
            return CellValue::formula(trimmed);
        }

        CellValue::string(field)
    }
}
