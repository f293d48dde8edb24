//! Rendering options and configuration.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Vertical distance (points) within which a line continues the previous one.
pub const DEFAULT_SAME_LINE_TOLERANCE: f32 = 3.0;

/// Fraction of the font size that makes up one indentation space in code.
pub const DEFAULT_INDENT_UNIT: f32 = 0.5;

/// Share of a span's area a link rectangle must cover to claim the span.
pub const DEFAULT_LINK_OVERLAP: f32 = 0.7;

/// Most out-of-range page numbers named in one error.
pub(crate) const MAX_REPORTED_PAGES: usize = 4;

/// Text appended after every rendered page.
pub const DEFAULT_PAGE_SEPARATOR: &str = "\n-----\n\n";

/// Options for rendering a document to Markdown.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pages to render
    pub page_selection: PageSelection,

    /// Body text size; sizes above it become headings.
    /// `None` derives it from the font-size histogram.
    pub body_size: Option<f32>,

    /// Maximum baseline difference for two lines to be merged
    pub same_line_tolerance: f32,

    /// Font-size multiplier for one space of code indentation
    pub indent_unit: f32,

    /// Minimum link coverage of a span's area (0.0-1.0)
    pub link_overlap: f32,

    /// Separator emitted after each page
    pub page_separator: String,

    /// Render pages in parallel
    pub parallel: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, selection: PageSelection) -> Self {
        self.page_selection = selection;
        self
    }

    /// Set specific pages (1-indexed).
    pub fn with_page_list(mut self, pages: Vec<u32>) -> Self {
        self.page_selection = PageSelection::Pages(pages);
        self
    }

    /// Override the body text size used for heading detection.
    pub fn with_body_size(mut self, size: f32) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Set the same-line tolerance in points.
    pub fn with_same_line_tolerance(mut self, tolerance: f32) -> Self {
        self.same_line_tolerance = tolerance;
        self
    }

    /// Set the code indentation unit as a fraction of the font size.
    pub fn with_indent_unit(mut self, unit: f32) -> Self {
        self.indent_unit = unit;
        self
    }

    /// Set the link overlap threshold.
    pub fn with_link_overlap(mut self, ratio: f32) -> Self {
        self.link_overlap = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the page separator.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// Enable or disable parallel page rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Render pages one after another.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_selection: PageSelection::All,
            body_size: None,
            same_line_tolerance: DEFAULT_SAME_LINE_TOLERANCE,
            indent_unit: DEFAULT_INDENT_UNIT,
            link_overlap: DEFAULT_LINK_OVERLAP,
            page_separator: DEFAULT_PAGE_SEPARATOR.to_string(),
            parallel: true,
            collect_stats: false,
        }
    }
}

/// Page selection for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Render all pages
    #[default]
    All,
    /// Render specific pages (1-indexed), in the given order
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Parse a page selection string such as `"1-3,5"` or `"2-N"`.
    ///
    /// Entries are 1-based page numbers or inclusive `start-end` ranges,
    /// separated by commas. `N` stands for the last page. Pages keep the
    /// order in which they first appear; repeats are dropped.
    ///
    /// A range running past the last page is cut short once it holds as
    /// many missing pages as [`resolve`](Self::resolve) can report.
    pub fn parse(spec: &str, page_count: u32) -> Result<Self> {
        let trimmed = spec.trim();

        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        let expanded = trimmed.replace('N', &page_count.to_string());
        let mut pages = Vec::new();
        let mut seen = HashSet::new();
        let mut push = |p: u32| {
            if seen.insert(p) {
                pages.push(p);
            }
        };

        for part in expanded.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start = parse_page_number(start, spec)?;
                let end = parse_page_number(end, spec)?;
                let limit = start
                    .max(page_count.saturating_add(1))
                    .saturating_add(MAX_REPORTED_PAGES as u32 - 1);
                for p in start..=end.min(limit) {
                    push(p);
                }
            } else {
                push(parse_page_number(part, spec)?);
            }
        }

        Ok(PageSelection::Pages(pages))
    }

    /// Resolve the selection to 0-based page indices for a document.
    ///
    /// Fails with [`Error::PageOutOfRange`] naming up to four offending pages.
    pub fn resolve(&self, page_count: u32) -> Result<Vec<usize>> {
        match self {
            PageSelection::All => Ok((0..page_count as usize).collect()),
            PageSelection::Pages(pages) => {
                let mut wrong: Vec<u32> = Vec::new();
                for &p in pages {
                    if (p == 0 || p > page_count) && !wrong.contains(&p) {
                        wrong.push(p);
                        if wrong.len() == MAX_REPORTED_PAGES {
                            break;
                        }
                    }
                }
                if !wrong.is_empty() {
                    return Err(Error::PageOutOfRange {
                        pages: wrong,
                        page_count,
                    });
                }
                Ok(pages.iter().map(|&p| (p - 1) as usize).collect())
            }
        }
    }
}

fn parse_page_number(s: &str, spec: &str) -> Result<u32> {
    let n: u32 = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(format!("'{}' in '{}'", s.trim(), spec)))?;
    if n == 0 {
        return Err(Error::InvalidPageRange(format!(
            "page numbers start at 1 in '{}'",
            spec
        )));
    }
    Ok(n)
}
