//! Data model for label generation.
//!
//! [`Table`] is the text-only input shape produced by the loader; the
//! [`LabelDocument`] / [`Page`] / [`Block`] hierarchy is the paginated output
//! that renderers consume.

mod document;
mod page;
mod table;

pub use document::{LabelDocument, Metadata, DEFAULT_TITLE};
pub use page::{Alignment, Block, Line, Page};
pub use table::{Record, Table};
