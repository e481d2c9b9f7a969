//! Content-type manifest (`[Content_Types].xml`)

use sheetpack_core::ContentType;

use super::{escape_xml, ns, XML_DECLARATION};

/// Serialize the content-type manifest, one element per entry in the order of
/// `types`.
pub fn write_content_types(types: &[ContentType]) -> String {
    let mut content = String::with_capacity(256 + types.len() * 128);
    content.push_str(XML_DECLARATION);
    content.push_str(&format!("\n<Types xmlns=\"{}\">", ns::CONTENT_TYPES));

    for entry in types {
        match entry {
            ContentType::Default {
                extension,
                content_type,
            } => content.push_str(&format!(
                "\n    <Default Extension=\"{}\" ContentType=\"{}\"/>",
                escape_xml(extension),
                escape_xml(content_type)
            )),
            ContentType::Override {
                part_name,
                content_type,
            } => content.push_str(&format!(
                "\n    <Override PartName=\"{}\" ContentType=\"{}\"/>",
                escape_xml(part_name),
                escape_xml(content_type)
            )),
        }
    }

    content.push_str("\n</Types>");
    content
}
