//! Document-level types.

use super::Page;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A paginated document as delivered by the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the source document (usually its file name)
    #[serde(default)]
    pub name: Option<String>,

    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a layout dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a layout dump from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let mut doc = Self::from_json(&data)?;
        if doc.name.is_none() {
            doc.name = path
                .as_ref()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
        }
        Ok(doc)
    }

    /// Serialize the document back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by its 0-based index.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Line, Rect, Span};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.page(0).is_none());
    }

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{
            "pages": [{
                "number": 1,
                "rect": [0, 0, 612, 792],
                "blocks": [{
                    "bbox": [72, 72, 300, 86],
                    "lines": [{
                        "bbox": [72, 72, 300, 86],
                        "spans": [{"text": "Title", "bbox": [72, 72, 300, 86], "size": 14.0,
                                   "flags": {"bold": true}}]
                    }]
                }],
                "links": [{"from": [72, 72, 300, 86], "uri": "https://example.com"}]
            }]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.page_count(), 1);
        let page = doc.page(0).unwrap();
        assert_eq!(page.blocks[0].lines[0].dir, [1.0, 0.0]);
        assert!(page.blocks[0].lines[0].spans[0].flags.bold);
        assert_eq!(page.uri_links().len(), 1);
        assert!(page.tables.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Document::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_geometry() {
        let mut doc = Document::new();
        let mut page = crate::model::Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![Span::new(
            "code",
            Rect::new(1.0, 2.0, 3.0, 4.0),
            8.0,
        )
        .monospace()])]));
        doc.add_page(page);

        let back = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back, doc);
    }
}
