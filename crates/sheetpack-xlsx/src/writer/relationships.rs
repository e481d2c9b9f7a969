//! Relationship parts (`*.rels`)

use sheetpack_core::relationship::rel_types;
use sheetpack_core::{Relationship, Workbook, Worksheet};

use super::{escape_xml, ns, XML_DECLARATION};

/// Serialize a list of relationships, in the order given.
pub fn write_relationships(relationships: &[Relationship]) -> String {
    let mut content = String::with_capacity(128 + relationships.len() * 160);
    content.push_str(XML_DECLARATION);
    content.push_str(&format!(
        "\n<Relationships xmlns=\"{}\">",
        ns::PACKAGE_RELATIONSHIPS
    ));

    for rel in relationships {
        content.push_str(&format!(
            "\n    <Relationship Id=\"{}\" Target=\"{}\" Type=\"{}\"/>",
            escape_xml(&rel.id),
            escape_xml(&rel.target_uri),
            escape_xml(&rel.rel_type)
        ));
    }

    content.push_str("\n</Relationships>");
    content
}

/// Package-level relationships (`_rels/.rels`)
pub fn write_root_rels() -> String {
    write_relationships(&[
        Relationship::new("rId1", "xl/workbook.xml").with_type(rel_types::OFFICE_DOCUMENT),
    ])
}

/// Workbook relationships (`xl/_rels/workbook.xml.rels`)
pub fn write_workbook_rels(workbook: &Workbook) -> String {
    write_relationships(&workbook.relationships())
}

/// Worksheet relationships (`xl/worksheets/_rels/sheetN.xml.rels`)
pub fn write_worksheet_rels(sheet: &Worksheet) -> String {
    write_relationships(sheet.relationships())
}
