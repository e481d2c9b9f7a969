//! Content-type manifest entries

/// Content type strings for the parts a workbook package contains
pub mod mime {
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const WORKBOOK: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
    pub const WORKSHEET: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const SHARED_STRINGS: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml";
}

/// One entry of `[Content_Types].xml`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Applies to every part with the given file extension
    Default {
        extension: String,
        content_type: String,
    },
    /// Applies to exactly one part
    Override {
        part_name: String,
        content_type: String,
    },
}

impl ContentType {
    /// Create an extension default
    pub fn default_for<E: Into<String>, C: Into<String>>(extension: E, content_type: C) -> Self {
        ContentType::Default {
            extension: extension.into(),
            content_type: content_type.into(),
        }
    }

    /// Create a part override
    pub fn override_for<P: Into<String>, C: Into<String>>(part_name: P, content_type: C) -> Self {
        ContentType::Override {
            part_name: part_name.into(),
            content_type: content_type.into(),
        }
    }

    /// The content type string
    pub fn content_type(&self) -> &str {
        match self {
            ContentType::Default { content_type, .. }
            | ContentType::Override { content_type, .. } => content_type,
        }
    }

    /// Check if this is an extension default
    pub fn is_default(&self) -> bool {
        matches!(self, ContentType::Default { .. })
    }
}
