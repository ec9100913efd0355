//! Spreadsheet format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Spreadsheet container formats accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadsheetFormat {
    /// Office Open XML workbook (`.xlsx`, `.xlsm`), a ZIP container.
    Xlsx,
    /// Legacy BIFF workbook (`.xls`), a compound file binary container.
    Xls,
}

impl SpreadsheetFormat {
    /// File extensions belonging to this format family (lower case).
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SpreadsheetFormat::Xlsx => &["xlsx", "xlsm"],
            SpreadsheetFormat::Xls => &["xls"],
        }
    }

    /// Look up a format by file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        [SpreadsheetFormat::Xlsx, SpreadsheetFormat::Xls]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for SpreadsheetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpreadsheetFormat::Xlsx => write!(f, "Excel workbook (OOXML)"),
            SpreadsheetFormat::Xls => write!(f, "Excel 97-2003 workbook (BIFF)"),
        }
    }
}

/// ZIP local file header: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Compound File Binary header used by BIFF workbooks.
const CFB_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Detect the spreadsheet format from a file path.
///
/// The file must carry a workbook extension (`.xlsx`, `.xlsm`, `.xls`);
/// anything else is [`Error::UnsupportedFormat`]. The header bytes then
/// decide which reader opens it, so an `.xls` that is really an OOXML
/// workbook still loads.
///
/// # Example
/// ```no_run
/// use labelgen::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("participants.xlsx").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SpreadsheetFormat> {
    let path = path.as_ref();
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(SpreadsheetFormat::from_extension)
        .ok_or(Error::UnsupportedFormat)?;

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = Vec::with_capacity(CFB_MAGIC.len());
    reader
        .by_ref()
        .take(CFB_MAGIC.len() as u64)
        .read_to_end(&mut header)?;
    let by_magic = detect_format_from_bytes(&header)?;

    if by_extension != by_magic {
        log::warn!(
            "{} has a {:?} extension but {:?} content; reading it as {:?}",
            path.display(),
            by_extension,
            by_magic,
            by_magic
        );
    }

    Ok(by_magic)
}

/// Detect the spreadsheet format from the leading bytes of a file.
///
/// # Returns
/// * `Ok(SpreadsheetFormat)` if the bytes start with a ZIP or CFB header
/// * `Err(Error::UnsupportedFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SpreadsheetFormat> {
    if data.starts_with(ZIP_MAGIC) {
        Ok(SpreadsheetFormat::Xlsx)
    } else if data.starts_with(CFB_MAGIC) {
        Ok(SpreadsheetFormat::Xls)
    } else {
        Err(Error::UnsupportedFormat)
    }
}

/// Check if a file is a readable spreadsheet.
pub fn is_spreadsheet<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a spreadsheet.
pub fn is_spreadsheet_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
