//! Association of link annotations with the spans they cover.

use crate::model::{Link, Page, Span};

/// Matches URI links to spans by area of overlap.
#[derive(Debug, Clone)]
pub struct LinkResolver<'a> {
    links: Vec<&'a Link>,
    overlap: f32,
}

impl<'a> LinkResolver<'a> {
    /// Resolver over the URI links of `page`.
    ///
    /// `overlap` is the share of a span's area the link rectangle must cover.
    pub fn new(page: &'a Page, overlap: f32) -> Self {
        Self::from_links(page.uri_links(), overlap)
    }

    /// Resolver over an explicit list of links, tried in order.
    pub fn from_links(links: Vec<&'a Link>, overlap: f32) -> Self {
        Self { links, overlap }
    }

    /// First link whose rectangle covers enough of the span.
    ///
    /// Spans without area never match, even though a zero share of a zero
    /// area is trivially "enough"; otherwise every flat span would take the
    /// page's first link.
    pub fn find(&self, span: &Span) -> Option<&'a Link> {
        let area = span.bbox.area();
        if area <= 0.0 {
            return None;
        }
        let needed = area * self.overlap;
        self.links
            .iter()
            .copied()
            .find(|link| link.from.intersect(&span.bbox).area() >= needed)
    }

    /// Markdown link `[text](uri)` for the span, if a link covers it.
    pub fn resolve(&self, span: &Span) -> Option<String> {
        let link = self.find(span)?;
        let uri = link.uri.as_deref()?;
        log::trace!("link {} matched span {:?}", uri, span.text);
        Some(format!("[{}]({})", span.text.trim(), uri))
    }

    /// Check if there are no links to match against.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
