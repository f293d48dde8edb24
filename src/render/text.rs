//! Markdown reconstruction of the text inside one page region.
//!
//! Lines whose spans are all monospaced form fenced code blocks; other
//! lines become prose with heading prefixes, emphasis, inline code and
//! links. Lines sitting within a few points of the previous baseline are
//! merged into it, which keeps super- and subscripts on their line.

use crate::model::{Block, Page, Rect, Span};

use super::{ExtractionStats, HeaderMap, LinkResolver, RenderOptions};

/// Upper bound on the leading spaces of a code line.
const MAX_CODE_INDENT: usize = 256;

/// Renders the text of a page region to Markdown.
pub struct TextRenderer<'a> {
    page: &'a Page,
    headers: &'a HeaderMap,
    links: LinkResolver<'a>,
    same_line_tolerance: f32,
    indent_unit: f32,
}

impl<'a> TextRenderer<'a> {
    /// Create a renderer for `page` using the document's heading map.
    pub fn new(page: &'a Page, headers: &'a HeaderMap, options: &RenderOptions) -> Self {
        Self {
            page,
            headers,
            links: LinkResolver::new(page, options.link_overlap),
            same_line_tolerance: options.same_line_tolerance,
            indent_unit: options.indent_unit,
        }
    }

    /// Render the text inside `clip`.
    pub fn render(&self, clip: &Rect) -> String {
        self.render_counted(clip, &mut ExtractionStats::new())
    }

    /// Render the text inside `clip`, recording headings, code blocks and links.
    pub fn render_counted(&self, clip: &Rect, stats: &mut ExtractionStats) -> String {
        let mut output = String::new();
        let mut in_code = false;

        for block in self.page.text_blocks(clip) {
            let mut previous_y = 0.0_f32;

            for line in &block.lines {
                if !line.is_horizontal() || line.spans.is_empty() {
                    continue;
                }

                let this_y = line.bbox.y1;
                let same_line =
                    previous_y > 0.0 && (this_y - previous_y).abs() <= self.same_line_tolerance;

                if same_line && output.ends_with('\n') {
                    output.pop();
                }
                if !same_line {
                    previous_y = this_y;
                    if !output.ends_with('\n') {
                        output.push('\n');
                    }
                }

                if line.is_monospace() {
                    if !in_code {
                        output.push_str("```");
                        in_code = true;
                        stats.add_code_block();
                    }
                    if !same_line {
                        output.push('\n');
                        output.push_str(&" ".repeat(self.indent(&block, &line.spans[0])));
                    }
                    output.push_str(&line.plain_text());
                    output.push(' ');
                    continue;
                }

                if in_code {
                    output.push_str("```\n");
                    in_code = false;
                }
                for (i, span) in line.spans.iter().enumerate() {
                    let rendered = self.render_span(span, i == 0, stats);
                    output.push_str(&rendered);
                }
                previous_y = this_y;
                output.push('\n');
            }

            output.push('\n');
        }

        if in_code {
            output.push_str("```\n");
        }

        output.replace(" \n", "\n")
    }

    /// Leading spaces of a code line relative to its block's left edge,
    /// capped at [`MAX_CODE_INDENT`].
    fn indent(&self, block: &Block, span: &Span) -> usize {
        let unit = span.size * self.indent_unit;
        if unit <= 0.0 {
            return 0;
        }
        let delta = ((span.bbox.x0 - block.bbox.x0) / unit).trunc();
        if delta.is_nan() || delta <= 0.0 {
            0
        } else {
            delta.min(MAX_CODE_INDENT as f32) as usize
        }
    }

    fn render_span(&self, span: &Span, first: bool, stats: &mut ExtractionStats) -> String {
        if span.flags.monospace {
            return format!("`{}` ", span.text.trim());
        }

        let header = if first { self.headers.prefix(span) } else { "" };
        let mut prefix = String::new();
        let mut suffix = String::new();

        if header.is_empty() {
            if span.flags.bold {
                prefix.push_str("**");
                suffix.push_str("**");
            }
            if span.flags.italic {
                prefix.push('_');
                suffix.insert(0, '_');
            }
        } else {
            stats.add_heading();
        }

        let body = match self.links.resolve(span) {
            Some(link) => {
                stats.add_link();
                link
            }
            None => span.text.trim().to_string(),
        };

        escape_text(&format!("{}{}{}{} ", header, prefix, body, suffix))
    }
}

/// Escape angle brackets and normalize bullet glyphs to `-`.
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{F0B7}' | '\u{00B7}' | '\u{2022}' | '\u{25CF}' => result.push('-'),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Line, Link};

    fn span(text: &str, x0: f32, y0: f32, x1: f32, y1: f32, size: f32) -> Span {
        Span::new(text, Rect::new(x0, y0, x1, y1), size)
    }

    fn render_page(page: &Page) -> String {
        let headers = HeaderMap::from_pages([page], None);
        TextRenderer::new(page, &headers, &RenderOptions::default()).render(&page.rect)
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a<b>c"), "a&lt;b&gt;c");
        assert_eq!(escape_text("&lt;kept&gt;"), "&lt;kept&gt;");
        assert_eq!(escape_text("\u{2022} one \u{F0B7} two"), "- one - two");
        assert_eq!(escape_text("\u{00B7}\u{25CF}"), "--");
    }

    #[test]
    fn test_render_paragraph() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![span(
            "Hello world", 72.0, 100.0, 200.0, 110.0, 10.0,
        )])]));
        assert_eq!(render_page(&page), "\nHello world\n\n");
    }

    #[test]
    fn test_render_heading_and_body() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![
            span("Title", 72.0, 50.0, 200.0, 70.0, 20.0).bold(),
        ])]));
        page.add_block(Block::new(vec![Line::new(vec![span(
            "Some body text that dominates the page.",
            72.0,
            100.0,
            400.0,
            110.0,
            10.0,
        )])]));
        assert_eq!(
            render_page(&page),
            "\n# Title\n\nSome body text that dominates the page.\n\n"
        );
    }

    #[test]
    fn test_render_emphasis() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![
            span("plain", 72.0, 100.0, 100.0, 110.0, 10.0),
            span("strong", 100.0, 100.0, 130.0, 110.0, 10.0).bold(),
            span("slanted", 130.0, 100.0, 160.0, 110.0, 10.0).italic(),
            span("both", 160.0, 100.0, 190.0, 110.0, 10.0).bold().italic(),
        ])]));
        assert_eq!(
            render_page(&page),
            "\nplain **strong** _slanted_ **_both_**\n\n"
        );
    }

    #[test]
    fn test_render_code_run_indentation() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![
            Line::new(vec![span("fn main() {", 0.0, 0.0, 60.0, 10.0, 8.0).monospace()]),
            Line::new(vec![span("let x = 1;", 4.0, 10.0, 60.0, 20.0, 8.0).monospace()]),
            Line::new(vec![span("x", 8.0, 20.0, 60.0, 30.0, 8.0).monospace()]),
        ]));
        let md = render_page(&page);
        assert_eq!(md, "\n```\nfn main() {\n\n let x = 1;\n\n  x\n```\n");
        assert_eq!(md.matches("```").count(), 2);
    }

    #[test]
    fn test_code_run_closed_by_prose() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![
            Line::new(vec![span("cargo build", 72.0, 100.0, 160.0, 110.0, 9.0).monospace()]),
            Line::new(vec![span("Then run it.", 72.0, 120.0, 160.0, 130.0, 10.0)]),
        ]));
        assert_eq!(render_page(&page), "\n```\ncargo build\n```\nThen run it.\n\n");
    }

    #[test]
    fn test_inline_code_span() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![
            span("Run", 72.0, 100.0, 90.0, 110.0, 10.0),
            span(" cargo test ", 90.0, 100.0, 150.0, 110.0, 10.0).monospace(),
            span("now", 150.0, 100.0, 170.0, 110.0, 10.0),
        ])]));
        assert_eq!(render_page(&page), "\nRun `cargo test` now\n\n");
    }

    #[test]
    fn test_same_line_merge() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![
            Line::new(vec![span("E = mc", 72.0, 90.0, 110.0, 100.0, 10.0)]),
            Line::new(vec![span("2", 110.0, 94.0, 114.0, 102.0, 6.0)]),
        ]));
        assert_eq!(render_page(&page), "\nE = mc 2\n\n");
    }

    #[test]
    fn test_rotated_lines_skipped() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![
            Line::new(vec![span("upright", 72.0, 100.0, 110.0, 110.0, 10.0)]),
            Line::new(vec![span("sideways", 20.0, 300.0, 30.0, 400.0, 10.0)]).with_dir(0.0, -1.0),
        ]));
        assert_eq!(render_page(&page), "\nupright\n\n");
    }

    #[test]
    fn test_link_and_escape() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![
            span("See", 72.0, 100.0, 92.0, 110.0, 10.0),
            span("the docs", 92.0, 100.0, 132.0, 110.0, 10.0),
            span("for <T>", 132.0, 100.0, 172.0, 110.0, 10.0),
        ])]));
        page.add_link(Link::uri(
            Rect::new(90.0, 98.0, 134.0, 112.0),
            "https://docs.example.com",
        ));
        assert_eq!(
            render_page(&page),
            "\nSee [the docs](https://docs.example.com) for &lt;T&gt;\n\n"
        );
    }

    #[test]
    fn test_bullets_normalized() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![span(
            "\u{2022} first item",
            72.0,
            100.0,
            160.0,
            110.0,
            10.0,
        )])]));
        assert_eq!(render_page(&page), "\n- first item\n\n");
    }

    #[test]
    fn test_code_indent_capped_for_tiny_font() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![
            Line::new(vec![span("x", 72.0, 100.0, 90.0, 110.0, 8.0).monospace()]),
            Line::new(vec![span("y", 100.0, 120.0, 110.0, 130.0, 1e-30).monospace()]),
        ]));
        let md = render_page(&page);
        let expected = format!("\n{}y\n```\n", " ".repeat(MAX_CODE_INDENT));
        assert!(md.ends_with(&expected));
    }

    #[test]
    fn test_side_by_side_blocks_not_merged() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![span(
            "left", 72.0, 100.0, 200.0, 110.0, 10.0,
        )])]));
        page.add_block(Block::new(vec![Line::new(vec![span(
            "right", 320.0, 100.0, 450.0, 110.0, 10.0,
        )])]));
        assert_eq!(render_page(&page), "\nleft\n\nright\n\n");
    }

    #[test]
    fn test_code_line_continued_on_same_line() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![
            Line::new(vec![span("let x =", 72.0, 100.0, 120.0, 110.0, 8.0).monospace()]),
            Line::new(vec![span("42;", 130.0, 101.0, 150.0, 111.0, 8.0).monospace()]),
        ]));
        assert_eq!(render_page(&page), "\n```\nlet x = 42;\n```\n");
    }

    #[test]
    fn test_stats_counted() {
        let mut page = Page::letter(1);
        page.add_block(Block::new(vec![Line::new(vec![
            span("Heading", 72.0, 40.0, 200.0, 60.0, 18.0),
        ])]));
        page.add_block(Block::new(vec![
            Line::new(vec![span("body body body body", 72.0, 100.0, 300.0, 110.0, 10.0)]),
            Line::new(vec![span("let a = 1;", 72.0, 120.0, 300.0, 130.0, 9.0).monospace()]),
        ]));
        page.add_link(Link::uri(Rect::new(70.0, 98.0, 302.0, 112.0), "https://x.example"));

        let headers = HeaderMap::from_pages([&page], None);
        let renderer = TextRenderer::new(&page, &headers, &RenderOptions::default());
        let mut stats = ExtractionStats::new();
        renderer.render_counted(&page.rect, &mut stats);

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.code_block_count, 1);
        assert_eq!(stats.link_count, 1);
    }
}
