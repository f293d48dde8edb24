//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of pages rendered
    pub page_count: u32,

    /// Number of text regions rendered
    pub text_region_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of heading prefixes emitted
    pub heading_count: u32,

    /// Number of fenced code blocks opened
    pub code_block_count: u32,

    /// Number of spans rendered as links
    pub link_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment text region count.
    pub fn add_text_region(&mut self) {
        self.text_region_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment code block count.
    pub fn add_code_block(&mut self) {
        self.code_block_count += 1;
    }

    /// Increment link count.
    pub fn add_link(&mut self) {
        self.link_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.page_count += other.page_count;
        self.text_region_count += other.text_region_count;
        self.table_count += other.table_count;
        self.heading_count += other.heading_count;
        self.code_block_count += other.code_block_count;
        self.link_count += other.link_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
