//! # sheetpack-xlsx
//!
//! Serializers that turn a [`sheetpack_core::Workbook`] into the XML parts of
//! an Office Open XML spreadsheet package, plus [`XlsxWriter`], which places
//! those parts into a ZIP archive.
//!
//! Each `write_*` function is a pure function from a model snapshot to the
//! string destined for one part. They share nothing but the values passed in:
//! the shared-string table and the style registry.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::{
    write_content_types, write_properties_app, write_properties_core, write_relationships,
    write_root_rels, write_shared_strings, write_theme, write_workbook, write_workbook_rels,
    write_worksheet, write_worksheet_rels, PackagePart, XlsxWriter,
};
