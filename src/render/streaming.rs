//! Page-by-page rendering.
//!
//! [`PageStream`] yields one rendered page at a time, which lets callers
//! report progress or write output incrementally. The heading map is still
//! computed over every selected page before the first page is produced, so
//! the concatenated pages are identical to [`to_markdown`](super::to_markdown).
//!
//! # Example
//!
//! ```no_run
//! use layout2md::render::{PageStream, RenderOptions};
//! use layout2md::Document;
//!
//! fn main() -> layout2md::Result<()> {
//!     let doc = Document::from_path("layout.json")?;
//!     for page in PageStream::new(&doc, RenderOptions::default())? {
//!         println!("page {}: {} bytes", page.number, page.markdown.len());
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::model::Document;

use super::markdown::render_page;
use super::{ExtractionStats, HeaderMap, RenderOptions};

/// A single rendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 1-indexed page number
    pub number: u32,
    /// Markdown of the page, including the trailing page separator
    pub markdown: String,
    /// Statistics for this page
    pub stats: ExtractionStats,
}

/// Iterator over the rendered pages of a document.
pub struct PageStream<'a> {
    doc: &'a Document,
    indices: std::vec::IntoIter<usize>,
    headers: HeaderMap,
    options: RenderOptions,
}

impl<'a> PageStream<'a> {
    /// Prepare to stream the pages selected in `options`.
    ///
    /// Fails if the selection names pages the document does not have.
    pub fn new(doc: &'a Document, options: RenderOptions) -> Result<Self> {
        let indices = options.page_selection.resolve(doc.page_count())?;
        let headers = HeaderMap::from_pages(
            indices.iter().filter_map(|&i| doc.page(i)),
            options.body_size,
        );
        Ok(Self {
            doc,
            indices: indices.into_iter(),
            headers,
            options,
        })
    }

    /// Heading map shared by all pages of the stream.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Number of pages not yet rendered.
    pub fn remaining(&self) -> usize {
        self.indices.len()
    }
}

impl Iterator for PageStream<'_> {
    type Item = RenderedPage;

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.doc.page(self.indices.next()?)?;
        let (markdown, mut stats) = render_page(page, &self.headers, &self.options);
        if self.options.collect_stats {
            stats.count_text(&markdown);
        }
        Some(RenderedPage {
            number: page.number,
            markdown,
            stats,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// Concatenate all remaining pages of a stream.
pub fn collect_content(stream: PageStream<'_>) -> String {
    stream.map(|p| p.markdown).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Line, Page, Rect, Span};
    use crate::render::PageSelection;

    fn sample_document() -> Document {
        let mut doc = Document::new();
        for (n, text) in [(1, "Alpha"), (2, "Beta"), (3, "Gamma")] {
            let mut page = Page::letter(n);
            page.add_block(Block::new(vec![Line::new(vec![Span::new(
                text,
                Rect::new(72.0, 100.0, 200.0, 110.0),
                10.0,
            )])]));
            doc.add_page(page);
        }
        doc
    }

    #[test]
    fn test_stream_yields_selected_pages() {
        let doc = sample_document();
        let options = RenderOptions::new().with_pages(PageSelection::Pages(vec![3, 1]));
        let stream = PageStream::new(&doc, options).unwrap();
        assert_eq!(stream.remaining(), 2);

        let numbers: Vec<u32> = stream.map(|p| p.number).collect();
        assert_eq!(numbers, vec![3, 1]);
    }

    #[test]
    fn test_stream_out_of_range() {
        let doc = sample_document();
        let options = RenderOptions::new().with_page_list(vec![4]);
        assert!(PageStream::new(&doc, options).is_err());
    }

    #[test]
    fn test_collect_content_matches_to_markdown() {
        let doc = sample_document();
        let streamed = collect_content(PageStream::new(&doc, RenderOptions::default()).unwrap());
        let whole = super::super::to_markdown(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(streamed, whole);
    }
}
