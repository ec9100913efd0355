//! PDF output using lopdf.
//!
//! Every line is printed as a full-width text cell on A4 portrait paper in
//! 12 pt Helvetica. A logical [`Page`](crate::model::Page) always starts a new
//! sheet; lines that would run into the bottom margin continue on a fresh
//! sheet of the same page.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, StringFormat, Stream};

use crate::error::{Error, Result};
use crate::model::{Alignment, LabelDocument, Metadata};

use super::font::{encode_win_ansi, string_width, FONT_NAME};
use super::RenderOptions;

/// Points per millimetre.
const MM: f32 = 72.0 / 25.4;

/// A4 width in points.
pub const PAGE_WIDTH: f32 = 210.0 * MM;
/// A4 height in points.
pub const PAGE_HEIGHT: f32 = 297.0 * MM;
/// Left, top and right margin.
pub const MARGIN: f32 = 10.0 * MM;
/// Distance from the bottom edge at which lines move to the next sheet.
pub const BOTTOM_MARGIN: f32 = 15.0 * MM;
/// Horizontal padding inside a cell for left and right alignment.
pub const CELL_MARGIN: f32 = 1.0 * MM;
/// Height of one line cell.
pub const LINE_HEIGHT: f32 = 10.0 * MM;
/// Font size in points.
pub const FONT_SIZE: f32 = 12.0;

/// Resource name of the font inside page resources.
const FONT_RESOURCE: &str = "F1";

/// A line positioned on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Left edge of the text in points
    pub x: f32,
    /// Baseline in PDF coordinates (origin bottom-left)
    pub y: f32,
    /// WinAnsi-encoded text
    pub text: Vec<u8>,
}

/// One physical PDF page.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Logical page this sheet belongs to (1-indexed)
    pub page: u32,
    /// Lines in print order
    pub lines: Vec<PlacedLine>,
}

impl Sheet {
    fn new(page: u32) -> Self {
        Self {
            page,
            lines: Vec::new(),
        }
    }
}

/// Position every line of the document on physical sheets.
///
/// Fails with [`Error::RenderEncoding`] on the first line that the font
/// cannot encode.
pub fn layout(doc: &LabelDocument) -> Result<Vec<Sheet>> {
    let cell_width = PAGE_WIDTH - 2.0 * MARGIN;
    let break_trigger = PAGE_HEIGHT - BOTTOM_MARGIN;

    let mut sheets = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let mut sheet = Sheet::new(page.number);
        let mut y = MARGIN;

        for line in page.blocks.iter().flat_map(|block| block.lines.iter()) {
            if y + LINE_HEIGHT > break_trigger {
                sheets.push(std::mem::replace(&mut sheet, Sheet::new(page.number)));
                y = MARGIN;
            }

            let text = encode_win_ansi(&line.text)?;
            let width = string_width(&text, FONT_SIZE);
            let dx = match line.align {
                Alignment::Left => CELL_MARGIN,
                Alignment::Center => (cell_width - width) / 2.0,
                Alignment::Right => cell_width - CELL_MARGIN - width,
            };
            let baseline = y + 0.5 * LINE_HEIGHT + 0.3 * FONT_SIZE;

            sheet.lines.push(PlacedLine {
                x: MARGIN + dx,
                y: PAGE_HEIGHT - baseline,
                text,
            });
            y += LINE_HEIGHT;
        }

        sheets.push(sheet);
    }

    Ok(sheets)
}

/// The written PDF and how many physical pages it has.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    /// Complete PDF file content
    pub bytes: Vec<u8>,
    /// Number of physical pages
    pub sheet_count: usize,
}

/// Writes a [`LabelDocument`] as PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    options: RenderOptions,
}

impl PdfRenderer {
    /// Create a renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Lay out and serialize the document.
    ///
    /// Nothing is written anywhere; the caller decides where the bytes go.
    pub fn render(&self, doc: &LabelDocument) -> Result<RenderedPdf> {
        let sheets = layout(doc)?;

        let mut pdf = Document::with_version("1.4");
        let pages_id = pdf.new_object_id();

        let font_id = pdf.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(FONT_NAME.as_bytes().to_vec())),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
        ]));
        let resources_id = pdf.add_object(Dictionary::from_iter([(
            "Font",
            Object::Dictionary(Dictionary::from_iter([(
                FONT_RESOURCE,
                Object::Reference(font_id),
            )])),
        )]));

        let mut kids = Vec::with_capacity(sheets.len());
        for sheet in &sheets {
            let content = Content {
                operations: sheet_operations(sheet),
            };
            let content_id = pdf.add_object(Stream::new(Dictionary::new(), content.encode()?));

            let page_id = pdf.add_object(Dictionary::from_iter([
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                ("Contents", Object::Reference(content_id)),
                ("Resources", Object::Reference(resources_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        0.into(),
                        0.into(),
                        PAGE_WIDTH.into(),
                        PAGE_HEIGHT.into(),
                    ]),
                ),
            ]));
            kids.push(Object::Reference(page_id));
        }

        let sheet_count = kids.len();
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter([
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(sheet_count as i64)),
            ])),
        );

        let catalog_id = pdf.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        pdf.trailer.set("Root", Object::Reference(catalog_id));

        let info_id = pdf.add_object(info_dictionary(&doc.metadata));
        pdf.trailer.set("Info", Object::Reference(info_id));

        if self.options.compress {
            pdf.compress();
        }

        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes)
            .map_err(|e| Error::Pdf(format!("failed to serialize PDF: {}", e)))?;

        log::debug!(
            "rendered {} logical page(s) onto {} sheet(s), {} bytes",
            doc.page_count(),
            sheet_count,
            bytes.len()
        );

        Ok(RenderedPdf { bytes, sheet_count })
    }
}

/// Content stream operations for one sheet.
fn sheet_operations(sheet: &Sheet) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(sheet.lines.len() * 5);
    for line in &sheet.lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), FONT_SIZE.into()],
        ));
        operations.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(line.text.clone(), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

/// Build the document information dictionary.
fn info_dictionary(metadata: &Metadata) -> Dictionary {
    let mut info = Dictionary::new();
    info.set("Title", text_string(&metadata.title));
    info.set("Producer", text_string(&metadata.producer));
    if let Some(ref author) = metadata.author {
        info.set("Author", text_string(author));
    }
    if let Some(date) = metadata.pdf_creation_date() {
        info.set("CreationDate", Object::string_literal(date));
    }
    info
}

/// Encode an info string: printable ASCII as a literal, anything else as UTF-16BE.
fn text_string(text: &str) -> Object {
    if text.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Object::string_literal(text);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
