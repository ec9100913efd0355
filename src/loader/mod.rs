//! Spreadsheet loading.
//!
//! Reads the first worksheet of a workbook into a text-only [`Table`]. The
//! first row of the used range is the header row.

mod backend;
mod options;

pub use backend::{CalamineBackend, CellValue, RawSheet, SheetBackend};
pub use options::LoadOptions;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::detect::{detect_format_from_bytes, detect_format_from_path, SpreadsheetFormat};
use crate::error::Result;
use crate::model::Table;

/// Spreadsheet loader.
pub struct SheetLoader {
    sheet: RawSheet,
    format: Option<SpreadsheetFormat>,
    options: LoadOptions,
}

impl SheetLoader {
    /// Open a spreadsheet file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, LoadOptions::default())
    }

    /// Open a spreadsheet file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();

        let format = detect_format_from_path(path)?;

        let mut backend = CalamineBackend::open(path, format)?;
        let sheet = backend.first_sheet()?;
        log::debug!(
            "read sheet {:?} from {} ({} rows)",
            sheet.name,
            path.display(),
            sheet.rows.len()
        );

        Ok(Self {
            sheet,
            format: Some(format),
            options,
        })
    }

    /// Load a spreadsheet from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, LoadOptions::default())
    }

    /// Load a spreadsheet from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: LoadOptions) -> Result<Self> {
        let format = detect_format_from_bytes(data)?;

        let mut backend = CalamineBackend::from_bytes(data, format)?;
        let sheet = backend.first_sheet()?;

        Ok(Self {
            sheet,
            format: Some(format),
            options,
        })
    }

    /// Load a spreadsheet from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, LoadOptions::default())
    }

    /// Load a spreadsheet from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: LoadOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Wrap an already-read sheet.
    pub fn from_sheet(sheet: RawSheet, options: LoadOptions) -> Self {
        Self {
            sheet,
            format: None,
            options,
        }
    }

    /// Detected container format, if the sheet came from a workbook.
    pub fn format(&self) -> Option<SpreadsheetFormat> {
        self.format
    }

    /// Name of the worksheet that was read.
    pub fn sheet_name(&self) -> &str {
        &self.sheet.name
    }

    /// Build the table: header row to column names, every cell to text.
    pub fn load(&self) -> Result<Table> {
        let mut rows = self.sheet.rows.iter();

        let header = match rows.next() {
            Some(header) => header,
            None => {
                log::debug!("sheet {:?} is empty", self.sheet.name);
                return Ok(Table::default());
            }
        };

        let mut table = Table::new(header_names(header, self.options.trim_headers));

        let mut skipped = 0usize;
        for row in rows {
            if self.options.skip_blank_rows && row.iter().all(CellValue::is_blank) {
                skipped += 1;
                continue;
            }
            table.push_row(row.iter().map(CellValue::to_text));
        }

        if skipped > 0 {
            log::debug!("skipped {} blank row(s)", skipped);
        }
        log::info!(
            "loaded {} row(s) with {} column(s) from sheet {:?}",
            table.row_count(),
            table.column_count(),
            self.sheet.name
        );

        Ok(table)
    }
}

/// Turn header cells into unique column names.
///
/// Empty headers become `Unnamed: <index>`; repeated names get `.1`, `.2`, …
/// suffixes in order of appearance.
fn header_names(cells: &[CellValue], trim: bool) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(cells.len());
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (index, cell) in cells.iter().enumerate() {
        let mut base = cell.to_text();
        if trim {
            base = base.trim().to_string();
        }
        if base.is_empty() {
            base = format!("Unnamed: {}", index);
        }

        let count = counts.entry(base.clone()).or_insert(0);
        let mut name = base.clone();
        while names.contains(&name) {
            *count += 1;
            name = format!("{}.{}", base, count);
        }
        names.push(name);
    }

    names
}
