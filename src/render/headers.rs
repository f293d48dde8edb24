//! Heading detection from font-size statistics.
//!
//! The most common font size (by character count) is taken as body text;
//! every larger size becomes a heading level, the largest being level 1.

use std::collections::BTreeMap;

use crate::model::{Page, Span};

/// Character counts per rounded font size.
///
/// Sizes are kept in the order they were first seen, which decides ties
/// when picking the body size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontHistogram {
    entries: Vec<(i32, usize)>,
}

impl FontHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the histogram over all spans of the given pages.
    ///
    /// Blank spans are ignored; the others count their trimmed characters.
    pub fn from_pages<'a>(pages: impl IntoIterator<Item = &'a Page>) -> Self {
        let mut histogram = Self::new();
        for page in pages {
            for span in page.spans() {
                histogram.add_span(span);
            }
        }
        histogram
    }

    /// Count a single span.
    pub fn add_span(&mut self, span: &Span) {
        if span.is_blank() {
            return;
        }
        self.add(span.rounded_size(), span.text.trim().chars().count());
    }

    /// Add `chars` characters at font size `size`.
    pub fn add(&mut self, size: i32, chars: usize) {
        match self.entries.iter_mut().find(|(s, _)| *s == size) {
            Some((_, count)) => *count += chars,
            None => self.entries.push((size, chars)),
        }
    }

    /// Character count recorded for `size`.
    pub fn count(&self, size: i32) -> usize {
        self.entries
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// The size carrying the most characters; the earliest seen wins ties.
    pub fn dominant_size(&self) -> Option<i32> {
        let mut best: Option<(i32, usize)> = None;
        for &(size, count) in &self.entries {
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((size, count)),
            }
        }
        best.map(|(size, _)| size)
    }

    /// Entries as `(size, characters)` in first-seen order.
    pub fn entries(&self) -> &[(i32, usize)] {
        &self.entries
    }

    /// Check if no text was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping from rounded font size to a Markdown heading prefix.
///
/// Built once per document render and shared read-only by every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    prefixes: BTreeMap<i32, String>,
    body_size: Option<f32>,
}

impl HeaderMap {
    /// Build the map from a histogram.
    ///
    /// `body_size` overrides the size derived from the histogram.
    pub fn build(histogram: &FontHistogram, body_size: Option<f32>) -> Self {
        let body_size = body_size.or_else(|| histogram.dominant_size().map(|s| s as f32));

        let Some(body) = body_size else {
            log::debug!("HeaderMap: no text found, headings disabled");
            return Self::default();
        };

        let mut sizes: Vec<i32> = histogram
            .entries()
            .iter()
            .map(|(s, _)| *s)
            .filter(|&s| s as f32 > body)
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        let prefixes = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| (size, format!("{} ", "#".repeat(i + 1))))
            .collect::<BTreeMap<_, _>>();

        log::debug!(
            "HeaderMap: body size {}, heading sizes {:?}",
            body,
            sizes
        );

        Self {
            prefixes,
            body_size: Some(body),
        }
    }

    /// Scan `pages` and build the map.
    pub fn from_pages<'a>(pages: impl IntoIterator<Item = &'a Page>, body_size: Option<f32>) -> Self {
        Self::build(&FontHistogram::from_pages(pages), body_size)
    }

    /// Heading prefix (`"# "`, `"## "`, ...) for a span, or `""` for body text.
    pub fn prefix(&self, span: &Span) -> &str {
        self.prefix_for_size(span.rounded_size())
    }

    /// Heading prefix for a rounded font size.
    pub fn prefix_for_size(&self, size: i32) -> &str {
        self.prefixes.get(&size).map(String::as_str).unwrap_or("")
    }

    /// Heading level (1 = largest) for a rounded font size.
    pub fn level(&self, size: i32) -> Option<usize> {
        self.prefixes.get(&size).map(|p| p.len() - 1)
    }

    /// Body size the map was built with.
    pub fn body_size(&self) -> Option<f32> {
        self.body_size
    }

    /// Heading sizes with their levels, largest size first.
    pub fn levels(&self) -> Vec<(i32, usize)> {
        self.prefixes
            .iter()
            .rev()
            .map(|(&size, p)| (size, p.len() - 1))
            .collect()
    }

    /// Check if no heading levels were assigned.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
