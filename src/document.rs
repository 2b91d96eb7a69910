//! Document construction and rendering for the app summary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::{PaperSize, SimplePageDecorator};

use crate::content::ContentBlock;
use crate::elements;
use crate::fonts;
use crate::metadata::{self, MetadataError};
use crate::style::StyleSet;
use crate::summary::SummaryText;

/// Default location the summary is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output/pdf/app_summary_overgangsdashboard.pdf";

/// Errors surfaced by [`ReportBuilder`].
#[derive(Debug)]
pub enum ReportError {
    /// The output path could not be created or written.
    Io(io::Error),
    /// The layout library rejected the document while rendering.
    Render(genpdf::error::Error),
    /// Post-render metadata stamping failed.
    Metadata(MetadataError),
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<genpdf::error::Error> for ReportError {
    fn from(err: genpdf::error::Error) -> Self {
        Self::Render(err)
    }
}

impl From<MetadataError> for ReportError {
    fn from(err: MetadataError) -> Self {
        Self::Metadata(err)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to write the report: {err}"),
            Self::Render(err) => write!(f, "Failed to render the report: {err}"),
            Self::Metadata(err) => write!(f, "Failed to finalize the report: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Metadata(err) => Some(err),
        }
    }
}

/// Page geometry and document metadata, fixed at construction.
#[derive(Clone, Debug)]
pub struct DocumentConfig {
    pub paper_size: genpdf::Size,
    pub margins: genpdf::Margins,
    pub title: String,
    pub author: String,
    pub output_path: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4.into(),
            margins: genpdf::Margins::trbl(12.0, 14.0, 12.0, 14.0),
            title: "App Summary - Overgangsdashboard".to_string(),
            author: "Codex".to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Assembles styles, configuration and the block sequence into a rendered PDF.
///
/// The builder is consumed by neither render call, so the same instance can
/// produce the document repeatedly with identical layout.
pub struct ReportBuilder {
    config: DocumentConfig,
    styles: StyleSet,
    blocks: Vec<ContentBlock>,
}

impl ReportBuilder {
    /// Creates a builder with default configuration and styles and no content.
    pub fn new() -> Self {
        Self {
            config: DocumentConfig::default(),
            styles: StyleSet::document_default(),
            blocks: Vec::new(),
        }
    }

    /// Creates a builder pre-filled with the Overgangsdashboard summary story.
    pub fn app_summary() -> Self {
        let text = SummaryText::overgangsdashboard();
        Self::new().with_blocks(text.compose())
    }

    /// Replaces the document configuration.
    pub fn with_config(mut self, config: DocumentConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the style set.
    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.styles = styles;
        self
    }

    /// Appends a single block to the story.
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the story with multiple blocks.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        self.blocks.extend(blocks);
        self
    }

    /// Returns the configured document settings.
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Returns the composed story.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Renders the story into PDF bytes, including stamped metadata.
    pub fn render_to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);
        document.set_title(self.config.title.clone());
        document.set_paper_size(self.config.paper_size);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.config.margins);
        document.set_page_decorator(decorator);

        for block in &self.blocks {
            elements::realize_into(&mut document, block, &self.styles)?;
        }

        let mut rendered = Vec::new();
        document.render(&mut rendered)?;
        log::debug!("rendered {} blocks into {} bytes", self.blocks.len(), rendered.len());

        let stamped =
            metadata::stamp_document_info(&rendered, &self.config.title, &self.config.author)?;
        Ok(stamped)
    }

    /// Renders the story and writes it to `path`, overwriting any existing file.
    ///
    /// Missing parent directories are created first; nothing is written when
    /// rendering fails.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = self.render_to_bytes()?;
        fs::write(path, &bytes)?;
        log::info!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Renders the story and writes it to the configured default output path.
    pub fn write_to_default(&self) -> Result<PathBuf, ReportError> {
        let path = self.config.output_path.clone();
        self.write_to(&path)?;
        Ok(path)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
