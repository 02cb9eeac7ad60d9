//! Markdown rendering for the supported subset
//!
//! Input is split into blocks on blank lines. Each block goes through the
//! rule chain in [`super::transform`] on its own and the results are joined
//! with a paragraph break.

use super::transform;

/// Markup placed between two rendered blocks
pub const BLOCK_SEPARATOR: &str = "\n\n<br>\n<br>\n";

/// How a block is wrapped once rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A lone `#`, `##` or `###` line
    Heading,
    /// A block starting with `>`
    Quote,
    Paragraph,
}

impl BlockKind {
    /// Classify a block from its source text
    pub fn of(block: &str) -> Self {
        if transform::is_header_line(block) {
            BlockKind::Heading
        } else if block.starts_with('>') {
            BlockKind::Quote
        } else {
            BlockKind::Paragraph
        }
    }
}

/// Accumulator for the line scan: finished blocks plus the block in progress
#[derive(Debug, Default)]
struct Segmenter<'a> {
    blocks: Vec<String>,
    current: Vec<&'a str>,
}

impl<'a> Segmenter<'a> {
    fn push(mut self, line: &'a str) -> Self {
        if line.trim().is_empty() {
            self.flush()
        } else {
            self.current.push(line);
            self
        }
    }

    fn flush(mut self) -> Self {
        if !self.current.is_empty() {
            self.blocks.push(self.current.join("\n"));
            self.current.clear();
        }
        self
    }

    fn finish(self) -> Vec<String> {
        self.flush().blocks
    }
}

/// Split markdown into blocks of consecutive non-blank lines
pub fn split_blocks(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .fold(Segmenter::default(), Segmenter::push)
        .finish()
}

/// Render a single block, wrapping prose in a paragraph
pub fn render_block(block: &str) -> String {
    let html = transform::apply_all(block);
    match BlockKind::of(block) {
        BlockKind::Heading | BlockKind::Quote => html,
        BlockKind::Paragraph => format!("<p>{}</p>", html),
    }
}

/// Render markdown to HTML.
///
/// Never fails: syntax that doesn't match a rule is kept as literal text.
pub fn render(markdown: &str) -> String {
    split_blocks(markdown)
        .iter()
        .map(|block| render_block(block))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
