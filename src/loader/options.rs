//! Loading options and configuration.

/// Options for reading a spreadsheet into a [`Table`](crate::model::Table).
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Drop data rows whose cells are all empty
    pub skip_blank_rows: bool,

    /// Strip leading and trailing whitespace from header names
    pub trim_headers: bool,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable skipping of blank rows.
    pub fn with_skip_blank_rows(mut self, skip: bool) -> Self {
        self.skip_blank_rows = skip;
        self
    }

    /// Enable or disable header trimming.
    pub fn with_trim_headers(mut self, trim: bool) -> Self {
        self.trim_headers = trim;
        self
    }
}
