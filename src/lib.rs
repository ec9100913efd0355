//! # labelgen
//!
//! Address-label PDF generation from spreadsheet rows.
//!
//! The library reads the first worksheet of an Excel workbook, checks that
//! the header row carries the columns a label template needs, and prints one
//! fixed-format text block per row onto A4 pages, twenty blocks per page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use labelgen::{generate_file, LabelGenerator, Variant};
//!
//! fn main() -> labelgen::Result<()> {
//!     let generator = LabelGenerator::new(Variant::Contact);
//!     let file = generate_file("participants.xlsx", &generator)?;
//!
//!     println!("{} -> {}", file.file_name, file.path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Load**: [`loader::SheetLoader`] turns a workbook into a text-only [`Table`]
//! - **Normalize**: [`Normalizer`] validates required columns and optionally
//!   strips characters outside printable ASCII
//! - **Paginate**: [`Paginator`] emits one [`Block`] per row, breaking pages
//!   every [`BLOCKS_PER_PAGE`] blocks
//! - **Render**: [`render::PdfRenderer`] writes the PDF with lopdf
//! - **Output**: [`output::write_temp_pdf`] stores it in a temporary file

pub mod detect;
pub mod error;
pub mod generate;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod output;
pub mod paginate;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_spreadsheet, SpreadsheetFormat};
pub use error::{Error, Result};
pub use generate::LabelGenerator;
pub use loader::{LoadOptions, SheetLoader};
pub use model::{Alignment, Block, LabelDocument, Line, Metadata, Page, Record, Table};
pub use normalize::{
    check_columns, filter_text, CharacterFilter, LabelRecord, NormalizeOptions, NormalizedTable,
    Normalizer,
};
pub use output::{GeneratedFile, OUTPUT_FILE_NAME, PDF_MIME_TYPE, TEMP_PREFIX};
pub use paginate::{Paginator, BLOCKS_PER_PAGE};
pub use render::{JsonFormat, PdfRenderer, RenderOptions};
pub use template::{Field, Template, TemplateLine, Variant};

use std::io::Read;
use std::path::Path;

/// Load the first worksheet of a spreadsheet file.
///
/// # Example
///
/// ```no_run
/// use labelgen::load_file;
///
/// let table = load_file("participants.xlsx").unwrap();
/// println!("Rows: {}", table.row_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Table> {
    SheetLoader::open(path)?.load()
}

/// Load the first worksheet of a spreadsheet file with custom options.
pub fn load_file_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Table> {
    SheetLoader::open_with_options(path, options)?.load()
}

/// Load the first worksheet of a spreadsheet held in memory.
///
/// # Example
///
/// ```no_run
/// use labelgen::load_bytes;
///
/// let data = std::fs::read("participants.xlsx").unwrap();
/// let table = load_bytes(&data).unwrap();
/// ```
pub fn load_bytes(data: &[u8]) -> Result<Table> {
    SheetLoader::from_bytes(data)?.load()
}

/// Load the first worksheet of a spreadsheet from a reader.
pub fn load_reader<R: Read>(reader: R) -> Result<Table> {
    SheetLoader::from_reader(reader)?.load()
}

/// Load a spreadsheet and generate its labels into a temporary PDF.
///
/// # Example
///
/// ```no_run
/// use labelgen::{generate_file, LabelGenerator, Variant};
///
/// let file = generate_file("principals.xls", &LabelGenerator::new(Variant::Principal)).unwrap();
/// let bytes = file.read_bytes().unwrap();
/// ```
pub fn generate_file<P: AsRef<Path>>(path: P, generator: &LabelGenerator) -> Result<GeneratedFile> {
    let table = load_file(path)?;
    generator.generate(&table)
}

/// Render a table's labels as plain text, without writing a PDF.
///
/// # Example
///
/// ```
/// use labelgen::{labels_to_text, Table, Variant};
///
/// let table = Table::new(["Name", "Name of School", "Coordinator Name", "Address", "Contact Number"])
///     .with_row(["Asha", "Hill Top", "Ravi", "1 Main St", "111"]);
/// let text = labels_to_text(&table, Variant::Contact).unwrap();
/// assert!(text.starts_with("Name: Asha\nSchool: Hill Top"));
/// ```
pub fn labels_to_text(table: &Table, template: impl Into<Template>) -> Result<String> {
    let generator = LabelGenerator::new(template);
    let normalized = generator.normalize(table)?;
    Ok(render::to_text(&generator.paginate(&normalized)))
}
