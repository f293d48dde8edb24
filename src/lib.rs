//! # layout2md
//!
//! Markdown reconstruction from structured PDF page layouts.
//!
//! The input is what a PDF layout engine reports per page: blocks of lines
//! of font-tagged text spans with positions, link annotations and detected
//! tables. The output is Markdown with headings inferred from font sizes,
//! fenced code for monospaced lines, emphasis, links and tables placed in
//! reading order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use layout2md::{render, Document};
//!
//! fn main() -> layout2md::Result<()> {
//!     let doc = Document::from_path("layout.json")?;
//!
//!     // All pages
//!     let markdown = render(&doc, None)?;
//!     println!("{}", markdown);
//!
//!     // First and third page only (0-based indices)
//!     let excerpt = render(&doc, Some(&[0, 2]))?;
//!     println!("{}", excerpt);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading levels** from the document's font-size histogram
//! - **Code blocks** for runs of monospaced lines, with indentation
//! - **Links** attached to the spans their annotations cover
//! - **Tables** interleaved with text in top-to-bottom order
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod error;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{
    Block, Document, Line, Link, LinkKind, Page, Rect, Span, SpanFlags, Table, TableHeader,
    TableMarkdown,
};
pub use render::{
    ExtractionStats, FontHistogram, HeaderMap, PageSelection, PageStream, RenderOptions, RenderResult,
};

use std::path::Path;

/// Render pages of a document to Markdown.
///
/// `pages` holds 0-based page indices in output order; `None` renders
/// every page.
///
/// # Example
///
/// ```
/// use layout2md::{render, Document, Page};
///
/// let mut doc = Document::new();
/// doc.add_page(Page::letter(1));
/// let markdown = render(&doc, None).unwrap();
/// assert!(markdown.ends_with("-----\n\n"));
/// ```
pub fn render(doc: &Document, pages: Option<&[usize]>) -> Result<String> {
    let renderer = render::MarkdownRenderer::new(RenderOptions::default());
    match pages {
        Some(indices) => Ok(renderer.render_pages(doc, indices)?.content),
        None => renderer.render(doc),
    }
}

/// Convert a document to Markdown with default options.
pub fn to_markdown(doc: &Document) -> Result<String> {
    render::to_markdown(doc, &RenderOptions::default())
}

/// Convert a document to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use layout2md::{to_markdown_with_options, Document, PageSelection, RenderOptions};
///
/// let doc = Document::from_path("layout.json").unwrap();
/// let selection = PageSelection::parse("1-3,N", doc.page_count()).unwrap();
/// let options = RenderOptions::new().with_pages(selection).with_body_size(11.0);
/// let markdown = to_markdown_with_options(&doc, &options).unwrap();
/// ```
pub fn to_markdown_with_options(doc: &Document, options: &RenderOptions) -> Result<String> {
    render::to_markdown(doc, options)
}

/// Load a JSON layout dump and convert it to Markdown.
///
/// # Example
///
/// ```no_run
/// let markdown = layout2md::convert_file("layout.json").unwrap();
/// std::fs::write("layout.md", markdown).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = Document::from_path(path)?;
    to_markdown(&doc)
}

/// Builder for loading and converting layout dumps.
///
/// # Example
///
/// ```no_run
/// use layout2md::Layout2Md;
///
/// let markdown = Layout2Md::new()
///     .with_body_size(10.0)
///     .sequential()
///     .load("layout.json")?
///     .to_markdown()?;
/// # Ok::<(), layout2md::Error>(())
/// ```
pub struct Layout2Md {
    options: RenderOptions,
    page_spec: Option<String>,
}

impl Layout2Md {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            page_spec: None,
        }
    }

    /// Select pages with a range string such as `"1-3,5"` or `"2-N"`.
    ///
    /// The string is parsed once the document (and its page count) is known.
    pub fn with_page_range(mut self, spec: impl Into<String>) -> Self {
        self.page_spec = Some(spec.into());
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.page_spec = None;
        self.options = self.options.with_pages(pages);
        self
    }

    /// Override the body text size.
    pub fn with_body_size(mut self, size: f32) -> Self {
        self.options = self.options.with_body_size(size);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Collect statistics while rendering.
    pub fn with_stats(mut self) -> Self {
        self.options = self.options.with_stats(true);
        self
    }

    /// Load a JSON layout dump from a file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Layout2MdResult> {
        self.with_document(Document::from_path(path)?)
    }

    /// Use an already loaded document.
    pub fn with_document(self, document: Document) -> Result<Layout2MdResult> {
        let mut options = self.options;
        if let Some(spec) = self.page_spec {
            options.page_selection = PageSelection::parse(&spec, document.page_count())?;
        }
        Ok(Layout2MdResult { document, options })
    }
}

impl Default for Layout2Md {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document together with its render options.
pub struct Layout2MdResult {
    /// The loaded document
    pub document: Document,
    options: RenderOptions,
}

impl Layout2MdResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.options)
    }

    /// Convert to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.document, &self.options)
    }

    /// Stream rendered pages one at a time.
    pub fn pages(&self) -> Result<PageStream<'_>> {
        PageStream::new(&self.document, self.options.clone())
    }

    /// Heading map for the selected pages.
    pub fn header_map(&self) -> Result<HeaderMap> {
        let indices = self.options.page_selection.resolve(self.document.page_count())?;
        Ok(HeaderMap::from_pages(
            indices.iter().filter_map(|&i| self.document.page(i)),
            self.options.body_size,
        ))
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
