//! Page-level types.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text line within the full-width cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush against the left cell margin
    #[default]
    Left,
    /// Centered on the printable width
    Center,
    /// Flush against the right cell margin
    Right,
}

/// One line of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Text to print, exactly as it appears on the label
    pub text: String,

    /// Horizontal alignment
    pub align: Alignment,
}

impl Line {
    /// Create a line with the given alignment.
    pub fn new(text: impl Into<String>, align: Alignment) -> Self {
        Self {
            text: text.into(),
            align,
        }
    }

    /// The blank line that separates consecutive blocks.
    pub fn spacer() -> Self {
        Self::new(" ", Alignment::Left)
    }

    /// Check whether the line carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The rendered lines of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Source row index (0-indexed)
    pub record: usize,

    /// Field lines followed by the spacer line
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block for a source row.
    pub fn new(record: usize, lines: Vec<Line>) -> Self {
        Self { record, lines }
    }

    /// Lines that carry field text (everything except spacers).
    pub fn text_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| !line.is_blank())
    }

    /// Get plain text content of the block, one line per row.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single logical page of label blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Blocks on the page in record order
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the number of lines on the page, spacers included.
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|block| block.lines.len()).sum()
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
