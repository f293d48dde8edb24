//! Markdown rendering of whole documents.
//!
//! Every page is cut into text and table regions from top to bottom. Text
//! regions go through the [`TextRenderer`], tables serialize themselves,
//! and each page ends with a separator. The heading map is built once over
//! all requested pages before any page is rendered.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Document, Page};

use super::options::MAX_REPORTED_PAGES;
use super::{
    render_table, segment_page, ExtractionStats, HeaderMap, Region, RenderOptions, RenderResult,
    TextRenderer,
};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    MarkdownRenderer::new(options).render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the selected pages of a document.
    pub fn render(&self, doc: &Document) -> Result<String> {
        Ok(self.render_with_stats(doc)?.content)
    }

    /// Render the selected pages of a document with extraction statistics.
    pub fn render_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        let indices = self.options.page_selection.resolve(doc.page_count())?;
        self.render_pages(doc, &indices)
    }

    /// Render the pages at the given 0-based indices, in that order.
    pub fn render_pages(&self, doc: &Document, indices: &[usize]) -> Result<RenderResult> {
        let pages = select_pages(doc, indices)?;
        let headers = HeaderMap::from_pages(pages.iter().copied(), self.options.body_size);

        let rendered: Vec<(String, ExtractionStats)> = if self.options.parallel && pages.len() > 1 {
            pages
                .par_iter()
                .map(|page| render_page(page, &headers, &self.options))
                .collect()
        } else {
            pages
                .iter()
                .map(|page| render_page(page, &headers, &self.options))
                .collect()
        };

        let mut content = String::new();
        let mut stats = ExtractionStats::new();
        for (markdown, page_stats) in rendered {
            content.push_str(&markdown);
            stats.merge(&page_stats);
        }

        if self.options.collect_stats {
            stats.count_text(&content);
        }

        Ok(RenderResult::new(content, stats))
    }
}

/// Look up pages by index, reporting up to four missing ones (1-based).
///
/// Indices whose page number does not fit a `u32` are reported as `u32::MAX`.
fn select_pages<'a>(doc: &'a Document, indices: &[usize]) -> Result<Vec<&'a Page>> {
    let mut wrong: Vec<u32> = Vec::new();
    for &i in indices {
        let number = u32::try_from(i)
            .ok()
            .and_then(|n| n.checked_add(1))
            .unwrap_or(u32::MAX);
        if doc.page(i).is_none() && !wrong.contains(&number) {
            wrong.push(number);
            if wrong.len() == MAX_REPORTED_PAGES {
                break;
            }
        }
    }
    if !wrong.is_empty() {
        return Err(Error::PageOutOfRange {
            pages: wrong,
            page_count: doc.page_count(),
        });
    }
    Ok(indices.iter().filter_map(|&i| doc.page(i)).collect())
}

/// Render one page: its regions in order followed by the page separator.
pub(crate) fn render_page(
    page: &Page,
    headers: &HeaderMap,
    options: &RenderOptions,
) -> (String, ExtractionStats) {
    let mut output = String::new();
    let mut stats = ExtractionStats::new();
    stats.add_page();

    let text = TextRenderer::new(page, headers, options);

    for region in segment_page(page) {
        match region {
            Region::Text(clip) => {
                stats.add_text_region();
                output.push_str(&text.render_counted(&clip, &mut stats));
                output.push('\n');
            }
            Region::Table { index, .. } => {
                if let Some(table) = page.tables.get(index) {
                    stats.add_table();
                    output.push_str(&render_table(table));
                }
            }
        }
    }

    output.push_str(&options.page_separator);
    log::debug!("rendered page {} ({} bytes)", page.number, output.len());

    (output, stats)
}
