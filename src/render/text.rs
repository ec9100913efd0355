//! Plain text rendering for label documents.

use crate::model::LabelDocument;

/// Separator written between logical pages.
pub const PAGE_SEPARATOR: char = '\u{000C}';

/// Convert a document to plain text.
///
/// Each block prints its lines followed by an empty spacer line; logical
/// pages are separated by a form feed.
pub fn to_text(doc: &LabelDocument) -> String {
    doc.pages
        .iter()
        .map(|page| page.plain_text())
        .collect::<Vec<_>>()
        .join(&format!("{}\n", PAGE_SEPARATOR))
}
