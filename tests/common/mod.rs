//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use labelgen::Table;
use rust_xlsxwriter::Workbook;

pub const CONTACT_COLUMNS: [&str; 5] = [
    "Name",
    "Name of School",
    "Coordinator Name",
    "Address",
    "Contact Number",
];

pub const PRINCIPAL_COLUMNS: [&str; 6] = [
    "Name of Principal",
    "Name of School",
    "Coordinator Name",
    "Address",
    "Contact Number",
    "Total Number of Participants",
];

/// Contact rows numbered from 1.
pub fn contact_rows(count: usize) -> Vec<Vec<String>> {
    (1..=count)
        .map(|i| {
            vec![
                format!("Student {}", i),
                format!("School {}", i),
                format!("Coordinator {}", i),
                format!("{} Station Road", i),
                format!("98450{:05}", i),
            ]
        })
        .collect()
}

/// In-memory table with the contact columns.
pub fn contact_table(count: usize) -> Table {
    let mut table = Table::new(CONTACT_COLUMNS);
    for row in contact_rows(count) {
        table.push_row(row);
    }
    table
}

/// Write a single-sheet workbook with text cells.
pub fn write_workbook(path: &Path, header: &[&str], rows: &[Vec<String>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet
                .write_string(r as u32 + 1, c as u16, value.as_str())
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

/// Write a contact workbook into `dir` and return its path.
pub fn contact_workbook(dir: &Path, count: usize) -> PathBuf {
    let path = dir.join("participants.xlsx");
    write_workbook(&path, &CONTACT_COLUMNS, &contact_rows(count));
    path
}

/// Text drawn by every `Tj` operator on a PDF page, in stream order.
pub fn page_strings(doc: &lopdf::Document, page_number: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let data = doc.get_page_content(page_id).unwrap();
    let content = lopdf::content::Content::decode(&data).unwrap();

    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(lopdf::Object::String(bytes, _)) => {
                Some(bytes.iter().map(|&b| b as char).collect())
            }
            _ => None,
        })
        .collect()
}
