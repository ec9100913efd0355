//! Rendering options and configuration.

use crate::model::DEFAULT_TITLE;

/// Options for writing the PDF.
///
/// Page size, margins and font are fixed; only document metadata and stream
/// compression can be changed.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title stored in the document info dictionary
    pub title: String,

    /// Author stored in the document info dictionary
    pub author: Option<String>,

    /// Deflate page content streams
    pub compress: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: None,
            compress: true,
        }
    }
}
