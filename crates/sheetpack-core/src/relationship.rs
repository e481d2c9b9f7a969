//! Package relationships

/// Relationship type URIs used when wiring a package together
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const SHARED_STRINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";
}

/// A link from one part to another part or to an external resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// Id referenced from the owning part (e.g. "rId1")
    pub id: String,
    /// Target part path or external URI
    pub target_uri: String,
    /// Relationship type
    pub rel_type: String,
}

impl Relationship {
    /// Create a relationship whose type is its target URI.
    ///
    /// Hyperlink relationships are created this way, so their emitted `Type`
    /// matches their `Target`.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, target_uri: T) -> Self {
        let target_uri = target_uri.into();
        Self {
            id: id.into(),
            rel_type: target_uri.clone(),
            target_uri,
        }
    }

    /// Replace the relationship type
    pub fn with_type<S: Into<String>>(mut self, rel_type: S) -> Self {
        self.rel_type = rel_type.into();
        self
    }

    /// Positional id for the n-th relationship (0-based) of a part: "rId{n+1}"
    pub fn positional_id(index: usize) -> String {
        format!("rId{}", index + 1)
    }
}
