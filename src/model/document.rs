//! Document-level types.

use super::{Block, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default document title written into the PDF metadata.
pub const DEFAULT_TITLE: &str = "Address Labels";

/// A paginated sheet of address labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDocument {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Logical pages in order
    pub pages: Vec<Page>,
}

impl LabelDocument {
    /// Create a new document with no pages.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            pages: Vec::new(),
        }
    }

    /// Get the number of logical pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get the number of pages holding at least one block.
    pub fn non_empty_page_count(&self) -> u32 {
        self.pages.iter().filter(|page| !page.is_empty()).count() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Iterate over every block in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.pages.iter().flat_map(|page| page.blocks.iter())
    }

    /// Total number of blocks across all pages.
    pub fn block_count(&self) -> usize {
        self.pages.iter().map(Page::block_count).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for LabelDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: String,

    /// Document author
    pub author: Option<String>,

    /// Producing application
    pub producer: String,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: None,
            producer: format!("labelgen {}", env!("CARGO_PKG_VERSION")),
            created: None,
        }
    }
}

impl Metadata {
    /// Format the creation date the way PDF info dictionaries expect it.
    ///
    /// Returns e.g. `D:20240131093005+00'00'`.
    pub fn pdf_creation_date(&self) -> Option<String> {
        self.created
            .map(|created| format!("D:{}+00'00'", created.format("%Y%m%d%H%M%S")))
    }
}
