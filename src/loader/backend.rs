//! Spreadsheet backend abstraction layer.
//!
//! Provides a trait-based interface for workbook access, isolating
//! the concrete spreadsheet library (calamine) from table building.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Sheets, Xls, Xlsx};
use chrono::NaiveDateTime;

use crate::detect::SpreadsheetFormat;
use crate::error::{Error, Result};

/// A typed cell value as stored in the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Value the workbook already stores as text (ISO dates, durations)
    Raw(String),
    /// Formula error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Coerce the value to the text printed on a label.
    ///
    /// Whole floats print without a fractional part so phone numbers and
    /// counts stored as numbers read naturally.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) | CellValue::Raw(s) | CellValue::Error(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Check whether the cell holds nothing printable.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// The cells of one worksheet, header row first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    /// Worksheet name
    pub name: String,

    /// Rows of the used range
    pub rows: Vec<Vec<CellValue>>,
}

/// Abstract interface for workbook access.
pub trait SheetBackend {
    /// Names of all worksheets in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Read the first worksheet.
    fn first_sheet(&mut self) -> Result<RawSheet>;
}

// ---------------------------------------------------------------------------
// CalamineBackend — concrete implementation backed by calamine
// ---------------------------------------------------------------------------

/// Concrete [`SheetBackend`] backed by `calamine::Sheets`.
pub struct CalamineBackend<RS> {
    workbook: Sheets<RS>,
}

impl<RS> CalamineBackend<RS>
where
    RS: Read + Seek,
{
    /// Open a workbook with the reader for `format`, whatever its file name says.
    pub fn with_format(reader: RS, format: SpreadsheetFormat) -> Result<Self> {
        let workbook = match format {
            SpreadsheetFormat::Xlsx => {
                Sheets::Xlsx(Xlsx::new(reader).map_err(calamine::Error::Xlsx)?)
            }
            SpreadsheetFormat::Xls => Sheets::Xls(Xls::new(reader).map_err(calamine::Error::Xls)?),
        };
        Ok(Self { workbook })
    }
}

impl CalamineBackend<BufReader<File>> {
    /// Open a workbook file.
    pub fn open<P: AsRef<Path>>(path: P, format: SpreadsheetFormat) -> Result<Self> {
        let file = File::open(path)?;
        Self::with_format(BufReader::new(file), format)
    }
}

impl CalamineBackend<Cursor<Vec<u8>>> {
    /// Open a workbook from an in-memory buffer.
    pub fn from_bytes(data: &[u8], format: SpreadsheetFormat) -> Result<Self> {
        Self::with_format(Cursor::new(data.to_vec()), format)
    }
}

impl<RS> SheetBackend for CalamineBackend<RS>
where
    RS: Read + Seek,
{
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn first_sheet(&mut self) -> Result<RawSheet> {
        let name = self
            .workbook
            .sheet_names()
            .into_iter()
            .next()
            .ok_or(Error::EmptyWorkbook)?;

        let range = self
            .workbook
            .worksheet_range_at(0)
            .ok_or(Error::EmptyWorkbook)??;

        let rows = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        Ok(RawSheet { name, rows })
    }
}

/// Convert a `calamine::Data` cell to [`CellValue`].
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Raw(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
