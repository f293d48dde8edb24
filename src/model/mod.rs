//! Structured page geometry consumed by the Markdown renderer.
//!
//! These types mirror what a PDF layout engine reports for each page:
//! a tree of blocks, lines and spans with positions and font information,
//! link annotations and detected tables. All of them can be loaded from a
//! JSON layout dump.

mod document;
mod geometry;
mod page;
mod table;
mod text;

pub use document::Document;
pub use geometry::Rect;
pub use page::{Link, LinkKind, Page};
pub use table::{Table, TableHeader, TableMarkdown};
pub use text::{Block, Line, Span, SpanFlags};
