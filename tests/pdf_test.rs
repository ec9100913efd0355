//! Tests that inspect the written PDF with lopdf.

mod common;

use common::{contact_table, page_strings};
use labelgen::{LabelGenerator, RenderOptions, Variant};

fn uncompressed() -> LabelGenerator {
    LabelGenerator::new(Variant::Contact)
        .with_render_options(RenderOptions::new().with_compression(false))
}

#[test]
fn test_full_page_spills_onto_extra_sheets() {
    // 20 blocks of 6 lines: 120 lines at 27 per sheet, then the empty page.
    let (doc, pdf) = uncompressed().build(&contact_table(20)).unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(pdf.sheet_count, 6);

    let parsed = lopdf::Document::load_mem(&pdf.bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), 6);

    let per_sheet: Vec<_> = (1..=6).map(|n| page_strings(&parsed, n).len()).collect();
    assert_eq!(per_sheet, [27, 27, 27, 27, 12, 0]);
}

#[test]
fn test_sheet_text_in_print_order() {
    let (_, pdf) = uncompressed().build(&contact_table(2)).unwrap();
    let parsed = lopdf::Document::load_mem(&pdf.bytes).unwrap();

    let strings = page_strings(&parsed, 1);
    assert_eq!(
        strings,
        [
            "Name: Student 1",
            "School: School 1",
            "Coordinator: Coordinator 1",
            "Address: 1 Station Road",
            "Contact: 9845000001",
            " ",
            "Name: Student 2",
            "School: School 2",
            "Coordinator: Coordinator 2",
            "Address: 2 Station Road",
            "Contact: 9845000002",
            " ",
        ]
    );
}

#[test]
fn test_info_dictionary_carries_title() {
    let generator = LabelGenerator::new(Variant::Contact).with_render_options(
        RenderOptions::new()
            .with_title("Delegates")
            .with_author("Front Desk")
            .with_compression(false),
    );
    let (_, pdf) = generator.build(&contact_table(1)).unwrap();
    let parsed = lopdf::Document::load_mem(&pdf.bytes).unwrap();

    let info_id = parsed.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = parsed.get_object(info_id).unwrap().as_dict().unwrap();
    assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Delegates");
    assert_eq!(info.get(b"Author").unwrap().as_str().unwrap(), b"Front Desk");
    assert!(info.has(b"CreationDate"));
}

#[test]
fn test_compressed_output_loads() {
    let (_, pdf) = LabelGenerator::default()
        .build(&contact_table(45))
        .unwrap();
    let parsed = lopdf::Document::load_mem(&pdf.bytes).unwrap();
    assert_eq!(parsed.get_pages().len(), pdf.sheet_count);
}

#[test]
fn test_empty_document_is_single_blank_sheet() {
    let (_, pdf) = uncompressed().build(&contact_table(0)).unwrap();
    let parsed = lopdf::Document::load_mem(&pdf.bytes).unwrap();

    assert_eq!(parsed.get_pages().len(), 1);
    assert!(page_strings(&parsed, 1).is_empty());
}
