//! End-to-end tests: workbook in, label document and PDF out.

mod common;

use std::path::{Path, PathBuf};

use common::{contact_rows, contact_table, contact_workbook, write_workbook, PRINCIPAL_COLUMNS};
use labelgen::{
    generate_file, load_file, render, Alignment, Error, LabelGenerator, NormalizeOptions, Table,
    Variant, BLOCKS_PER_PAGE, TEMP_PREFIX,
};

#[test]
fn test_forty_five_rows_fill_three_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = contact_workbook(dir.path(), 45);

    let generator = LabelGenerator::new(Variant::Contact);
    let table = load_file(&path).unwrap();
    let normalized = generator.normalize(&table).unwrap();
    let doc = generator.paginate(&normalized);

    assert_eq!(doc.page_count(), 3);
    let per_page: Vec<_> = doc.pages.iter().map(|p| p.block_count()).collect();
    assert_eq!(per_page, [20, 20, 5]);

    let records: Vec<_> = doc.blocks().map(|b| b.record).collect();
    assert_eq!(records, (0..45).collect::<Vec<_>>());

    let first = &doc.pages[0].blocks[0];
    assert_eq!(first.lines[0].text, "Name: Student 1");
    assert_eq!(first.lines[4].text, "Contact: 9845000001");
    assert!(first.lines.iter().all(|l| l.align == Alignment::Center));
}

#[test]
fn test_generate_file_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = contact_workbook(dir.path(), 45);

    let file = generate_file(&path, &LabelGenerator::new(Variant::Contact)).unwrap();
    assert_eq!(file.file_name, "Address_Labels.pdf");
    assert_eq!(file.mime_type, "application/pdf");
    assert_eq!(file.page_count, 3);
    assert_eq!(file.label_count, 45);

    let bytes = file.read_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let pdf = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(pdf.get_pages().len(), file.sheet_count);

    let temp = file.path.clone();
    file.remove().unwrap();
    assert!(!temp.exists());
}

#[test]
fn test_missing_column_names_every_required_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.xlsx");
    let rows: Vec<Vec<String>> = contact_rows(3)
        .into_iter()
        .map(|mut row| {
            row.pop();
            row
        })
        .collect();
    write_workbook(
        &path,
        &["Name", "Name of School", "Coordinator Name", "Address"],
        &rows,
    );

    let err = generate_file(&path, &LabelGenerator::new(Variant::Contact)).unwrap_err();
    match &err {
        Error::MissingColumns { missing, .. } => assert_eq!(missing, &["Contact Number"]),
        other => panic!("expected MissingColumns, got {:?}", other),
    }

    let message = err.to_string();
    for column in [
        "Name",
        "Name of School",
        "Coordinator Name",
        "Address",
        "Contact Number",
    ] {
        assert!(message.contains(column), "{} not in {}", column, message);
    }
}

#[test]
fn test_zero_rows_produce_one_empty_page() {
    let generator = LabelGenerator::new(Variant::Contact);
    let (doc, pdf) = generator.build(&contact_table(0)).unwrap();

    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.block_count(), 0);
    assert_eq!(pdf.sheet_count, 1);
}

#[test]
fn test_page_count_follows_row_count() {
    let generator = LabelGenerator::new(Variant::Contact);

    for rows in [0usize, 1, 19, 20, 21, 39, 40, 41, 100] {
        let normalized = generator.normalize(&contact_table(rows)).unwrap();
        let doc = generator.paginate(&normalized);

        assert_eq!(doc.page_count() as usize, rows / BLOCKS_PER_PAGE + 1, "rows = {}", rows);
        assert_eq!(doc.block_count(), rows);
        assert_eq!(
            doc.non_empty_page_count() as usize,
            rows.div_ceil(BLOCKS_PER_PAGE),
            "rows = {}",
            rows
        );
        assert!(doc.pages.iter().all(|p| p.block_count() <= BLOCKS_PER_PAGE));
    }
}

#[test]
fn test_sanitizing_replaces_non_ascii_runs() {
    let table = Table::new([
        "Name",
        "Name of School",
        "Coordinator Name",
        "Address",
        "Contact Number",
    ])
    .with_row(["José Ñ", "Hill Top", "Ravi", "1 Main St", "111"]);

    let generator = LabelGenerator::new(Variant::Contact)
        .with_normalize_options(NormalizeOptions::new().sanitized());
    let (doc, _) = generator.build(&table).unwrap();

    assert_eq!(doc.pages[0].blocks[0].lines[0].text, "Name: Jos   ");
}

fn written_pdfs(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(TEMP_PREFIX) && name.ends_with(".pdf"))
        })
        .collect()
}

#[test]
fn test_unencodable_text_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let table = Table::new([
        "Name",
        "Name of School",
        "Coordinator Name",
        "Address",
        "Contact Number",
    ])
    .with_row(["Asha \u{1F600}", "Hill Top", "Ravi", "1 Main St", "111"]);

    let generator = LabelGenerator::new(Variant::Contact);
    match generator.generate_in(dir.path(), &table) {
        Err(Error::RenderEncoding { character, .. }) => assert_eq!(character, '\u{1F600}'),
        other => panic!("expected RenderEncoding, got {:?}", other.map(|f| f.path)),
    }
    assert!(written_pdfs(dir.path()).is_empty());

    let sanitized = generator
        .with_normalize_options(NormalizeOptions::new().sanitized())
        .generate_in(dir.path(), &table)
        .unwrap();
    assert_eq!(written_pdfs(dir.path()), [sanitized.path.clone()]);
}

#[test]
fn test_missing_columns_fail_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let table = Table::new(["Name", "Name of School", "Coordinator Name", "Address"])
        .with_row(["Asha", "Hill Top", "Ravi", "1 Main St"]);

    let result = LabelGenerator::new(Variant::Contact).generate_in(dir.path(), &table);
    assert!(matches!(result, Err(Error::MissingColumns { .. })));
    assert!(written_pdfs(dir.path()).is_empty());
}

#[test]
fn test_latin1_text_renders_without_sanitizing() {
    let table = Table::new([
        "Name",
        "Name of School",
        "Coordinator Name",
        "Address",
        "Contact Number",
    ])
    .with_row(["José", "Hill Top", "Ravi", "1 Main St", "111"]);

    let (doc, pdf) = LabelGenerator::new(Variant::Contact).build(&table).unwrap();
    assert_eq!(doc.pages[0].blocks[0].lines[0].text, "Name: José");
    assert_eq!(pdf.sheet_count, 1);
}

#[test]
fn test_principal_variant_from_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("principals.xlsx");
    write_workbook(
        &path,
        &PRINCIPAL_COLUMNS,
        &[vec![
            "Dr. Rao".into(),
            "Hill Top".into(),
            "Ravi".into(),
            "1 Main St".into(),
            "111".into(),
            "12".into(),
        ]],
    );

    let table = load_file(&path).unwrap();
    assert_eq!(Variant::detect(&table), Some(Variant::Principal));

    let text = labelgen::labels_to_text(&table, Variant::Principal).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Principal: Dr. Rao",
            "School: Hill Top",
            "Coordinator: Ravi",
            "Address: 1 Main St",
            "Contact: 111",
            "Participants: 12",
        ]
    );
}

#[test]
fn test_extra_columns_are_ignored() {
    let table = Table::new([
        "Serial",
        "Name",
        "Name of School",
        "Coordinator Name",
        "Address",
        "Contact Number",
    ])
    .with_row(["7", "Asha", "Hill Top", "Ravi", "1 Main St", "111"]);

    let (doc, _) = LabelGenerator::new(Variant::Contact).build(&table).unwrap();
    let block = &doc.pages[0].blocks[0];
    assert_eq!(block.lines.len(), 6);
    assert!(block.lines.iter().all(|l| !l.text.contains('7')));
}

#[test]
fn test_json_view_lists_pages() {
    let (doc, _) = LabelGenerator::default().build(&contact_table(21)).unwrap();
    let json = render::to_json(&doc, render::JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let pages = value["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1]["blocks"].as_array().unwrap().len(), 1);
}
