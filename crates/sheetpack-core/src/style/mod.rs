//! Cell styling types
//!
//! A [`Style`] is identified by its content hash. Cells only store that hash;
//! the [`StyleRegistry`] maps each distinct hash to a style index for export.

mod registry;

pub use registry::StyleRegistry;

use std::hash::{BuildHasher, Hash, Hasher};

/// Complete cell style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Bold font
    pub bold: bool,
    /// Italic font
    pub italic: bool,
    /// Underlined font
    pub underline: bool,
    /// Font color as ARGB
    pub font_color: Option<u32>,
    /// Solid fill color as ARGB
    pub fill_color: Option<u32>,
    /// Number format code (e.g. "0.00%")
    pub number_format: Option<String>,
    /// Wrap text inside the cell
    pub wrap_text: bool,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set font underline
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set font color (ARGB)
    pub fn font_color(mut self, argb: u32) -> Self {
        self.font_color = Some(argb);
        self
    }

    /// Set fill color (ARGB, solid fill)
    pub fn fill_color(mut self, argb: u32) -> Self {
        self.fill_color = Some(argb);
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Check if this is the default (unstyled) style
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Content hash identifying this style.
    ///
    /// Uses a fixed-seed hasher so the value is stable across processes.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = ahash::RandomState::with_seeds(0x5e, 0xe7, 0x9a, 0xc1).build_hasher();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_styles_share_hash() {
        let a = Style::new().bold(true).number_format("0.00");
        let b = Style::new().bold(true).number_format("0.00");
        let c = Style::new().italic(true);

        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn test_default_detection() {
        assert!(Style::new().is_default());
        assert!(!Style::new().fill_color(0xFFFF0000).is_default());
    }
}
