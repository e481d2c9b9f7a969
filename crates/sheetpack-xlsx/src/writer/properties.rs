//! Document properties (`docProps/core.xml`, `docProps/app.xml`)
//!
//! Property serialization is not implemented. Both functions return an empty
//! string, which the package writer treats as "no part".

use sheetpack_core::Workbook;

/// Core properties part
pub fn write_properties_core(_workbook: &Workbook) -> String {
    String::new()
}

/// Extended (application) properties part
pub fn write_properties_app(_workbook: &Workbook) -> String {
    String::new()
}
