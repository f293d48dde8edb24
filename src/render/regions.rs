//! Vertical segmentation of a page into text and table regions.

use crate::model::{Page, Rect, Table};

/// A horizontal slice of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// Running text, spanning the full page width
    Text(Rect),
    /// A table, including its header row
    Table {
        /// Area covered by the table
        bbox: Rect,
        /// Index into the page's table list
        index: usize,
    },
}

impl Region {
    /// Area covered by the region.
    pub fn bbox(&self) -> Rect {
        match self {
            Region::Text(bbox) | Region::Table { bbox, .. } => *bbox,
        }
    }

    /// Check if this is a text region.
    pub fn is_text(&self) -> bool {
        matches!(self, Region::Text(_))
    }

    /// Check if this is a table region.
    pub fn is_table(&self) -> bool {
        matches!(self, Region::Table { .. })
    }
}

/// Regions of a page, top to bottom.
pub fn segment_page(page: &Page) -> Vec<Region> {
    segment(&page.rect, &page.tables)
}

/// Split `page_rect` into table regions and the text gaps between them.
///
/// Tables are ordered by top edge, then left edge. Each gap between the
/// previous table's bottom and the next table's top becomes a text region
/// as wide as the page; gaps without height are skipped.
pub fn segment(page_rect: &Rect, tables: &[Table]) -> Vec<Region> {
    let mut table_rects: Vec<(Rect, usize)> = tables
        .iter()
        .enumerate()
        .map(|(i, t)| (t.full_bbox(), i))
        .collect();
    table_rects.sort_by(|a, b| a.0.y0.total_cmp(&b.0.y0).then(a.0.x0.total_cmp(&b.0.x0)));

    let mut regions = Vec::with_capacity(table_rects.len() * 2 + 1);
    let mut top = page_rect.y0;

    for (bbox, index) in table_rects {
        let gap = page_rect.with_top(top).with_bottom(bbox.y0);
        if !gap.is_empty() {
            regions.push(Region::Text(gap));
        }
        regions.push(Region::Table { bbox, index });
        top = bbox.y1;
    }

    let tail = page_rect.with_top(top);
    if !tail.is_empty() {
        regions.push(Region::Text(tail));
    }

    log::debug!(
        "segmented page into {} regions ({} tables)",
        regions.len(),
        tables.len()
    );
    regions
}
