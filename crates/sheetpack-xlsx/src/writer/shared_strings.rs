//! Shared string table (`xl/sharedStrings.xml`)

use super::{ns, text_element, XML_DECLARATION};

/// Serialize the workbook's shared string table.
///
/// Entry `i` of `strings` becomes the `i`-th `<si>`; worksheets refer to
/// strings by that position.
pub fn write_shared_strings(strings: &[String]) -> String {
    let mut content = String::with_capacity(128 + strings.len() * 32);
    content.push_str(XML_DECLARATION);
    content.push_str(&format!(
        "\n<sst xmlns=\"{}\" uniqueCount=\"{}\">",
        ns::SPREADSHEETML,
        strings.len()
    ));

    for s in strings {
        content.push_str("\n    <si>");
        content.push_str(&text_element(s));
        content.push_str("</si>");
    }

    content.push_str("\n</sst>");
    log::trace!("shared string table: {} entries", strings.len());
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_strings() {
        let xml = write_shared_strings(&["alpha".to_string(), "beta".to_string()]);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <sst xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" uniqueCount=\"2\">\n    \
             <si><t>alpha</t></si>\n    \
             <si><t>beta</t></si>\n\
             </sst>"
        );
    }

    #[test]
    fn test_empty_table() {
        let xml = write_shared_strings(&[]);
        assert!(xml.contains("uniqueCount=\"0\""));
        assert!(!xml.contains("<si>"));
    }

    #[test]
    fn test_escaping_and_whitespace() {
        let xml = write_shared_strings(&["a<b & c".to_string(), " padded ".to_string()]);
        assert!(xml.contains("<si><t>a&lt;b &amp; c</t></si>"));
        assert!(xml.contains("<si><t xml:space=\"preserve\"> padded </t></si>"));
    }
}
