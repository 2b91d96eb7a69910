//! Logical content blocks that make up the summary document.
//!
//! Blocks are immutable data; they reference styles by [`StyleName`] so the
//! story can be composed without touching the rendering crate.  The ordered
//! sequence of blocks renders top-to-bottom, page-breaking automatically.

use crate::style::StyleName;

/// One discrete unit of document content.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    /// A section heading rendered with [`StyleName::SectionHeading`].
    Heading(String),
    /// A prose paragraph rendered with the named style.
    Paragraph {
        style: StyleName,
        text: String,
    },
    /// A bulleted list of items rendered with the body style.
    BulletList(Vec<String>),
    /// A bordered two-column table of key/value rows.
    KeyValueTable(Vec<(String, String)>),
    /// Vertical whitespace measured in text lines.
    Spacer(f64),
}

impl ContentBlock {
    /// Convenience helper for building a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    /// Convenience helper for building a paragraph block.
    pub fn paragraph(style: StyleName, text: impl Into<String>) -> Self {
        Self::Paragraph {
            style,
            text: text.into(),
        }
    }

    /// Convenience helper for building a body paragraph block.
    pub fn body(text: impl Into<String>) -> Self {
        Self::paragraph(StyleName::Body, text)
    }

    /// Convenience helper for building a bullet list block.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BulletList(items.into_iter().map(Into::into).collect())
    }

    /// Convenience helper for building a key/value table block.
    pub fn table<I, K, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::KeyValueTable(
            rows.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
