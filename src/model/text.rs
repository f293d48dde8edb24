//! Text-level geometry: blocks, lines and spans.

use super::Rect;
use serde::{Deserialize, Serialize};

/// A block of text lines as laid out on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Bounding box of the block
    pub bbox: Rect,

    /// Lines in reading order
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block whose bbox encloses all of its lines.
    pub fn new(lines: Vec<Line>) -> Self {
        let bbox = lines.iter().fold(Rect::default(), |acc, l| acc.union(&l.bbox));
        Self { bbox, lines }
    }

    /// Iterate over all spans of the block.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.lines.iter().flat_map(|l| l.spans.iter())
    }

    /// Plain text of the block, one line per text line.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A line of spans sharing a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Bounding box of the line
    pub bbox: Rect,

    /// Writing direction as a unit vector `(cos, sin)`
    #[serde(default = "horizontal")]
    pub dir: [f32; 2],

    /// Spans in the line, left to right
    pub spans: Vec<Span>,
}

fn horizontal() -> [f32; 2] {
    [1.0, 0.0]
}

impl Line {
    /// Create a horizontal line whose bbox encloses all of its spans.
    pub fn new(spans: Vec<Span>) -> Self {
        let bbox = spans.iter().fold(Rect::default(), |acc, s| acc.union(&s.bbox));
        Self {
            bbox,
            dir: horizontal(),
            spans,
        }
    }

    /// Set the writing direction.
    pub fn with_dir(mut self, dx: f32, dy: f32) -> Self {
        self.dir = [dx, dy];
        self
    }

    /// Lines with any vertical direction component are rotated or vertical text.
    pub fn is_horizontal(&self) -> bool {
        self.dir[1] == 0.0
    }

    /// Check if every span of the line uses a monospaced font.
    pub fn is_monospace(&self) -> bool {
        self.spans.iter().all(|s| s.flags.monospace)
    }

    /// Concatenated span text.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A contiguous run of text with one font size and one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,

    /// Bounding box of the run
    pub bbox: Rect,

    /// Font size in points
    pub size: f32,

    /// Style flags
    #[serde(default)]
    pub flags: SpanFlags,
}

impl Span {
    /// Create a plain (regular weight, proportional font) span.
    pub fn new(text: impl Into<String>, bbox: Rect, size: f32) -> Self {
        Self {
            text: text.into(),
            bbox,
            size,
            flags: SpanFlags::default(),
        }
    }

    /// Mark the span as monospaced.
    pub fn monospace(mut self) -> Self {
        self.flags.monospace = true;
        self
    }

    /// Mark the span as bold.
    pub fn bold(mut self) -> Self {
        self.flags.bold = true;
        self
    }

    /// Mark the span as italic.
    pub fn italic(mut self) -> Self {
        self.flags.italic = true;
        self
    }

    /// Font size rounded to the nearest integer, ties to even.
    pub fn rounded_size(&self) -> i32 {
        self.size.round_ties_even() as i32
    }

    /// Check if the span carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Font capability flags of a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanFlags {
    /// Monospaced font
    pub monospace: bool,

    /// Bold weight
    pub bold: bool,

    /// Italic or oblique style
    pub italic: bool,
}
