//! Document information stamping built on top of `lopdf`.
//!
//! `genpdf` only exposes a title setter, so the author (and a consistent
//! title) are written into the PDF information dictionary as a post-render
//! step over the in-memory bytes.

use lopdf::{Dictionary, Document, Object};

/// Errors that can occur while stamping metadata into a rendered PDF document.
#[derive(Debug)]
pub enum MetadataError {
    /// The PDF bytes could not be parsed or rewritten by `lopdf`.
    Parse(lopdf::Error),
}

impl From<lopdf::Error> for MetadataError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl std::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Failed to rewrite PDF metadata: {err}"),
        }
    }
}

impl std::error::Error for MetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

/// Writes title and author into the information dictionary of `pdf_bytes`.
///
/// A fresh `/Info` dictionary is attached to the trailer, replacing any
/// reference the renderer may have written.
pub fn stamp_document_info(
    pdf_bytes: &[u8],
    title: &str,
    author: &str,
) -> Result<Vec<u8>, MetadataError> {
    let mut document = Document::load_mem(pdf_bytes)?;

    let mut info = Dictionary::new();
    info.set("Title", Object::string_literal(title));
    info.set("Author", Object::string_literal(author));
    let info_id = document.add_object(Object::Dictionary(info));
    document.trailer.set("Info", Object::Reference(info_id));

    let mut buffer = Vec::new();
    document.save_to(&mut buffer).map_err(MetadataError::from)?;
    Ok(buffer)
}
