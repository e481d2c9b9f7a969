//! XLSX writer

mod content_types;
mod properties;
mod relationships;
mod shared_strings;
mod theme;
mod workbook;
mod worksheet;

use std::borrow::Cow;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::XlsxResult;
use crate::styles::write_stylesheet;
use sheetpack_core::{StyleRegistry, Workbook};

pub use content_types::write_content_types;
pub use properties::{write_properties_app, write_properties_core};
pub use relationships::{
    write_relationships, write_root_rels, write_workbook_rels, write_worksheet_rels,
};
pub use shared_strings::write_shared_strings;
pub use theme::write_theme;
pub use workbook::write_workbook;
pub use worksheet::write_worksheet;

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Namespaces used by the emitted parts
pub(crate) mod ns {
    pub const SPREADSHEETML: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    pub const OFFICE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    pub const DRAWINGML: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
}

/// Escape text for use in element content or a quoted attribute
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// `<t>` element for a string; edge whitespace is marked as significant
pub(crate) fn text_element(s: &str) -> String {
    let padded = s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace);
    if padded {
        format!("<t xml:space=\"preserve\">{}</t>", escape_xml(s))
    } else {
        format!("<t>{}</t>", escape_xml(s))
    }
}

/// One serialized part and its path inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    /// Archive path, e.g. `xl/workbook.xml`
    pub path: String,
    /// XML text
    pub content: String,
}

impl PackagePart {
    fn new<P: Into<String>>(path: P, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer.
    ///
    /// Every part is serialized before the archive is started, so a workbook
    /// that cannot be serialized leaves `writer` untouched.
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        let parts = Self::parts(workbook)?;

        let mut zip = zip::ZipWriter::new(writer);
        for part in &parts {
            log::debug!("writing {} ({} bytes)", part.path, part.content.len());
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file(part.path.as_str(), options)?;
            zip.write_all(part.content.as_bytes())?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Serialize every part of the package, in archive order.
    ///
    /// Parts whose serializer produced no content are left out.
    pub fn parts(workbook: &Workbook) -> XlsxResult<Vec<PackagePart>> {
        let strings = workbook.shared_strings();
        let styles = StyleRegistry::build(workbook);

        let mut parts = vec![
            PackagePart::new(
                "[Content_Types].xml",
                write_content_types(&workbook.content_types()),
            ),
            PackagePart::new("_rels/.rels", write_root_rels()),
            PackagePart::new("docProps/core.xml", write_properties_core(workbook)),
            PackagePart::new("docProps/app.xml", write_properties_app(workbook)),
            PackagePart::new("xl/workbook.xml", write_workbook(workbook)),
            PackagePart::new("xl/_rels/workbook.xml.rels", write_workbook_rels(workbook)),
            PackagePart::new("xl/styles.xml", write_stylesheet()),
            PackagePart::new("xl/theme/theme1.xml", write_theme()),
            PackagePart::new("xl/sharedStrings.xml", write_shared_strings(&strings)),
        ];

        for (i, sheet) in workbook.worksheets().enumerate() {
            parts.push(PackagePart::new(
                format!("xl/worksheets/sheet{}.xml", i + 1),
                write_worksheet(sheet, &strings, &styles)?,
            ));

            if !sheet.relationships().is_empty() {
                parts.push(PackagePart::new(
                    format!("xl/worksheets/_rels/sheet{}.xml.rels", i + 1),
                    write_worksheet_rels(sheet),
                ));
            }
        }

        parts.retain(|part| !part.content.is_empty());
        Ok(parts)
    }
}
