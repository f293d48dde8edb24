//! Table types.
//!
//! Tables are detected by the layout engine. This crate only needs their
//! geometry and a way to serialize them, which is the [`TableMarkdown`] trait.

use super::Rect;
use serde::{Deserialize, Serialize};

/// Serialization of a detected table to Markdown.
pub trait TableMarkdown {
    /// Render the table as a Markdown pipe table.
    ///
    /// With `clean` unset, cell text is emitted verbatim and blank cells are kept.
    fn to_markdown(&self, clean: bool) -> String;
}

/// A table detected on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Bounding box of the table body
    pub bbox: Rect,

    /// Header row
    #[serde(default)]
    pub header: TableHeader,

    /// Body rows; `None` marks a cell with no content
    #[serde(default)]
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create an empty table occupying `bbox`.
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            header: TableHeader::default(),
            rows: Vec::new(),
        }
    }

    /// Set the header row.
    pub fn with_header(mut self, bbox: Rect, names: Vec<Option<String>>) -> Self {
        self.header = TableHeader { bbox, names };
        self
    }

    /// Add a body row.
    pub fn add_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Area covered by the table including its header row.
    pub fn full_bbox(&self) -> Rect {
        self.bbox.union(&self.header.bbox)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.names.len()))
            .max()
            .unwrap_or(0)
    }
}

impl TableMarkdown for Table {
    fn to_markdown(&self, clean: bool) -> String {
        let cols = self.column_count();
        let mut output = String::from("|");

        for i in 0..cols {
            let name = match self.header.names.get(i).and_then(|n| n.as_deref()) {
                Some(n) if !n.is_empty() => n.replace('\n', " "),
                _ => format!("Col{}", i + 1),
            };
            output.push_str(&clean_cell(&name, clean));
            output.push('|');
        }
        output.push_str("\n|");
        output.push_str(&"---|".repeat(cols));
        output.push('\n');

        for row in &self.rows {
            output.push('|');
            for i in 0..cols {
                let cell = row.get(i).and_then(|c| c.as_deref()).unwrap_or("");
                let cell = cell.replace('\n', "<br>");
                output.push_str(&clean_cell(&cell, clean));
                output.push('|');
            }
            output.push('\n');
        }

        output.push('\n');
        output
    }
}

fn clean_cell(text: &str, clean: bool) -> String {
    if !clean {
        return text.to_string();
    }
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('-', "&#45;")
}

/// The header row of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableHeader {
    /// Bounding box of the header row (all zero when the table has no header)
    #[serde(default)]
    pub bbox: Rect,

    /// Column names
    #[serde(default)]
    pub names: Vec<Option<String>>,
}
