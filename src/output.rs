//! Temporary output files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name offered to the user when downloading the labels.
pub const OUTPUT_FILE_NAME: &str = "Address_Labels.pdf";

/// MIME type of the generated document.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File name prefix of written PDFs.
pub const TEMP_PREFIX: &str = "labels_";

/// Write bytes to a new, uniquely named PDF file in the system temp directory.
///
/// The file is kept on disk; removing it is the caller's job.
pub fn write_temp_pdf(bytes: &[u8]) -> Result<PathBuf> {
    write_temp_pdf_in(std::env::temp_dir(), bytes)
}

/// Write bytes to a new `labels_*.pdf` file inside `dir`.
pub fn write_temp_pdf_in<P: AsRef<Path>>(dir: P, bytes: &[u8]) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".pdf")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;

    let (_, path) = file.keep().map_err(|e| Error::Io(e.error))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// A generated label document waiting for delivery.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Location of the temporary file
    pub path: PathBuf,

    /// Download name
    pub file_name: String,

    /// MIME type for delivery
    pub mime_type: &'static str,

    /// Number of logical pages
    pub page_count: u32,

    /// Number of physical PDF pages
    pub sheet_count: usize,

    /// Number of label blocks
    pub label_count: usize,
}

impl GeneratedFile {
    /// Describe a PDF already written to `path`.
    pub fn new(path: PathBuf, page_count: u32, sheet_count: usize, label_count: usize) -> Self {
        Self {
            path,
            file_name: OUTPUT_FILE_NAME.to_string(),
            mime_type: PDF_MIME_TYPE,
            page_count,
            sheet_count,
            label_count,
        }
    }

    /// Read the whole file for streaming to the user.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    /// Copy the file to a destination. A directory destination receives
    /// [`OUTPUT_FILE_NAME`]. Returns the final path.
    pub fn persist_to<P: AsRef<Path>>(&self, dest: P) -> Result<PathBuf> {
        let dest = dest.as_ref();
        let target = if dest.is_dir() {
            dest.join(&self.file_name)
        } else {
            dest.to_path_buf()
        };

        fs::copy(&self.path, &target)?;
        Ok(target)
    }

    /// Copy the file to `dest`, then delete the temporary file whether or
    /// not the copy succeeded. A copy failure is reported first.
    pub fn deliver_to<P: AsRef<Path>>(self, dest: P) -> Result<PathBuf> {
        let copied = self.persist_to(dest);
        let removed = fs::remove_file(&self.path);

        let target = copied?;
        removed?;
        Ok(target)
    }

    /// Delete the temporary file.
    pub fn remove(self) -> Result<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
