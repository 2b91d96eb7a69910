//! One-shot generator for the Overgangsdashboard app-summary PDF.
//!
//! The crate assembles a fixed set of text sections into an ordered sequence
//! of [`content::ContentBlock`] values, applies a named [`style::StyleSet`],
//! and renders the result to a single A4 document via `genpdf`.  The pipeline
//! is strictly linear: build styles, compose the story, render, write.

pub mod content;
pub mod document;
pub mod elements;
pub mod fonts;
pub mod metadata;
pub mod style;
pub mod summary;

pub use content::ContentBlock;
pub use document::{DocumentConfig, ReportBuilder, ReportError};
pub use style::{StyleName, StyleSet, TextStyle};
pub use summary::SummaryText;
