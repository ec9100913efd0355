//! Label pagination.
//!
//! Turns a [`NormalizedTable`] into a [`LabelDocument`]: one [`Block`] per
//! row, in row order, with a page break after every
//! [`BLOCKS_PER_PAGE`] blocks.

use crate::model::{Block, LabelDocument, Line, Metadata, Page};
use crate::normalize::{LabelRecord, NormalizedTable};
use crate::template::Template;

/// Number of blocks after which a new page is started.
pub const BLOCKS_PER_PAGE: usize = 20;

/// Lays records out into pages.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    metadata: Metadata,
}

impl Paginator {
    /// Create a paginator with default document metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metadata copied into every produced document.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Paginate a normalized table with the template it was validated for.
    ///
    /// One page exists before the first row is placed, so an empty table
    /// yields a single blank page. The break check runs after each block,
    /// which leaves a trailing empty page when the row count is a positive
    /// multiple of [`BLOCKS_PER_PAGE`].
    pub fn paginate(&self, table: &NormalizedTable) -> LabelDocument {
        let template = table.template();

        let mut doc = LabelDocument::new();
        doc.metadata = self.metadata.clone();

        let mut page = Page::new(1);
        let mut count = 0usize;

        for record in table.records() {
            page.add_block(render_block(template, &record));
            count += 1;

            if count % BLOCKS_PER_PAGE == 0 {
                let next = Page::new(page.number + 1);
                doc.add_page(std::mem::replace(&mut page, next));
            }
        }
        doc.add_page(page);

        log::debug!(
            "paginated {} block(s) onto {} page(s)",
            count,
            doc.page_count()
        );
        doc
    }
}

/// Render one record: a line per template entry, then the spacer.
pub fn render_block(template: &Template, record: &LabelRecord<'_>) -> Block {
    let mut lines = Vec::with_capacity(template.block_height());
    for entry in &template.lines {
        lines.push(Line::new(
            entry.format(record.value(entry.field)),
            template.align,
        ));
    }
    lines.push(Line::spacer());

    Block::new(record.index(), lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Table};
    use crate::normalize::{NormalizeOptions, Normalizer};
    use crate::template::Variant;

    fn contact_table(rows: usize) -> NormalizedTable {
        let mut table = Table::new([
            "Name",
            "Name of School",
            "Coordinator Name",
            "Address",
            "Contact Number",
        ]);
        for i in 0..rows {
            table.push_row([
                format!("Name {}", i + 1),
                format!("School {}", i + 1),
                format!("Coordinator {}", i + 1),
                format!("{} Main Street", i + 1),
                format!("555-{:04}", i + 1),
            ]);
        }
        Normalizer::new(Variant::Contact.template(), NormalizeOptions::new())
            .normalize(&table)
            .unwrap()
    }

    #[test]
    fn test_empty_table_gives_one_blank_page() {
        let doc = Paginator::new().paginate(&contact_table(0));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.block_count(), 0);
        assert!(doc.pages[0].is_empty());
    }

    #[test]
    fn test_block_layout() {
        let doc = Paginator::new().paginate(&contact_table(1));
        let block = &doc.pages[0].blocks[0];

        let texts: Vec<_> = block.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "Name: Name 1",
                "School: School 1",
                "Coordinator: Coordinator 1",
                "Address: 1 Main Street",
                "Contact: 555-0001",
                " ",
            ]
        );
        assert!(block.lines[..5].iter().all(|l| l.align == Alignment::Center));
        assert_eq!(block.lines[5], Line::spacer());
    }

    #[test]
    fn test_page_break_counts() {
        let cases = [(1, 1), (19, 1), (20, 2), (21, 2), (40, 3), (45, 3), (60, 4)];
        for (rows, pages) in cases {
            let doc = Paginator::new().paginate(&contact_table(rows));
            assert_eq!(doc.page_count(), pages, "rows = {}", rows);
            assert_eq!(doc.block_count(), rows);
            assert!(doc.pages.iter().all(|p| p.block_count() <= BLOCKS_PER_PAGE));
        }
    }

    #[test]
    fn test_multiple_of_twenty_leaves_trailing_empty_page() {
        let doc = Paginator::new().paginate(&contact_table(40));
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.non_empty_page_count(), 2);
        assert!(doc.pages[2].is_empty());
    }

    #[test]
    fn test_page_numbers_are_sequential() {
        let doc = Paginator::new().paginate(&contact_table(45));
        let numbers: Vec<_> = doc.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn test_metadata_is_copied() {
        let metadata = Metadata {
            title: "Participants".to_string(),
            ..Default::default()
        };
        let doc = Paginator::new()
            .with_metadata(metadata)
            .paginate(&contact_table(2));
        assert_eq!(doc.metadata.title, "Participants");
    }
}
