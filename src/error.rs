//! Error types for labelgen library.

use std::io;
use thiserror::Error;

/// Result type alias for labelgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading spreadsheets and generating labels.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither an Office Open XML nor a legacy BIFF workbook.
    #[error("Unsupported file format: expected .xlsx, .xlsm or .xls")]
    UnsupportedFormat,

    /// Error reported by the spreadsheet reader.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// The workbook has no worksheet to read.
    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    /// One or more required columns are absent from the table.
    ///
    /// The message always lists the full required set so the user can fix
    /// the header row in one go.
    #[error("The uploaded file must contain these columns: {}", .required.join(", "))]
    MissingColumns {
        /// Every column the template needs, in template order.
        required: Vec<String>,
        /// The subset of `required` that was not found.
        missing: Vec<String>,
    },

    /// A value contains a character the PDF font cannot encode.
    #[error(
        "Character {:?} (U+{:04X}) in {:?} cannot be encoded by the PDF font",
        .character,
        *.character as u32,
        .text
    )]
    RenderEncoding {
        /// The offending character.
        character: char,
        /// The full line that contained it.
        text: String,
    },

    /// Error building or serializing the PDF document.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Error::Io(e),
            _ => Error::Spreadsheet(err.to_string()),
        }
    }
}
