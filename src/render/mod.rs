//! Rendering of page layouts to Markdown.

mod headers;
mod links;
mod markdown;
mod options;
mod regions;
mod result;
pub mod streaming;
mod table;
mod text;

pub use headers::{FontHistogram, HeaderMap};
pub use links::LinkResolver;
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{
    PageSelection, RenderOptions, DEFAULT_INDENT_UNIT, DEFAULT_LINK_OVERLAP,
    DEFAULT_PAGE_SEPARATOR, DEFAULT_SAME_LINE_TOLERANCE,
};
pub use regions::{segment, segment_page, Region};
pub use result::{ExtractionStats, RenderResult};
pub use streaming::{collect_content, PageStream, RenderedPage};
pub use table::render_table;
pub use text::{escape_text, TextRenderer};
