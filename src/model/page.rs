//! Page-level types.

use super::{Block, Line, Rect, Span, Table};
use serde::{Deserialize, Serialize};

/// A single page of structured layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page rectangle in points
    pub rect: Rect,

    /// Text blocks on the page
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Link annotations
    #[serde(default)]
    pub links: Vec<Link>,

    /// Detected tables
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Page {
    /// Create an empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            rect: Rect::new(0.0, 0.0, width, height),
            blocks: Vec::new(),
            links: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Create an empty page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0)
    }

    /// Add a text block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a link annotation.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Iterate over every span on the page, unclipped.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.blocks.iter().flat_map(|b| b.spans())
    }

    /// Links that point to an external URI.
    pub fn uri_links(&self) -> Vec<&Link> {
        self.links
            .iter()
            .filter(|l| l.kind == LinkKind::Uri && l.uri.is_some())
            .collect()
    }

    /// Text blocks restricted to `clip`, ordered by bottom edge then left edge.
    ///
    /// A span belongs to the clip when the centre of its bbox lies inside it.
    /// The bottom edge is exclusive so that regions stacked on top of each
    /// other never both claim the same span. Lines and blocks that lose some
    /// of their children get their bbox recomputed from what is left.
    pub fn text_blocks(&self, clip: &Rect) -> Vec<Block> {
        let mut blocks: Vec<Block> = self
            .blocks
            .iter()
            .filter_map(|b| clip_block(b, clip))
            .collect();
        blocks.sort_by(|a, b| {
            a.bbox
                .y1
                .total_cmp(&b.bbox.y1)
                .then(a.bbox.x0.total_cmp(&b.bbox.x0))
        });
        blocks
    }

    /// Plain text of the page.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(1)
    }
}

fn in_clip(span: &Span, clip: &Rect) -> bool {
    let (x, y) = span.bbox.center();
    x >= clip.x0 && x <= clip.x1 && y >= clip.y0 && y < clip.y1
}

fn clip_line(line: &Line, clip: &Rect) -> Option<Line> {
    let spans: Vec<Span> = line
        .spans
        .iter()
        .filter(|s| in_clip(s, clip))
        .cloned()
        .collect();
    if spans.is_empty() {
        return None;
    }
    if spans.len() == line.spans.len() {
        return Some(line.clone());
    }
    Some(Line::new(spans).with_dir(line.dir[0], line.dir[1]))
}

fn clip_block(block: &Block, clip: &Rect) -> Option<Block> {
    let lines: Vec<Line> = block
        .lines
        .iter()
        .filter_map(|l| clip_line(l, clip))
        .collect();
    if lines.is_empty() {
        return None;
    }
    if lines == block.lines {
        return Some(block.clone());
    }
    Some(Block::new(lines))
}

/// Kind of a link annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// External URI
    #[default]
    Uri,
    /// Jump to a page in this document
    Goto,
    /// Jump into another document
    GotoRemote,
    /// Launch an application or file
    Launch,
    /// Named viewer action
    Named,
}

/// A link annotation: a hot area on the page and its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Source rectangle of the annotation
    pub from: Rect,

    /// Link kind
    #[serde(default)]
    pub kind: LinkKind,

    /// Target URI (for URI links)
    #[serde(default)]
    pub uri: Option<String>,
}

impl Link {
    /// Create a URI link.
    pub fn uri(from: Rect, uri: impl Into<String>) -> Self {
        Self {
            from,
            kind: LinkKind::Uri,
            uri: Some(uri.into()),
        }
    }
}
