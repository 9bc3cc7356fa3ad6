//! Downloadable artifacts
//!
//! An [`Artifact`] bundles the bytes of an export with the file name and MIME
//! type the host offers it under.

pub mod csv;

pub use self::csv::CsvExporter;

/// File name of the tabular export
pub const CSV_FILE_NAME: &str = "klimadata.csv";
/// MIME type of the tabular export
pub const CSV_MIME: &str = "text/csv";
/// File name of the report document
pub const PDF_FILE_NAME: &str = "klimarapport.pdf";
/// MIME type of the report document
pub const PDF_MIME: &str = "application/pdf";

/// A generated file ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested file name
    pub file_name: &'static str,
    /// MIME type
    pub mime: &'static str,
    /// File content
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// The tabular export
    pub fn csv(bytes: Vec<u8>) -> Self {
        Self {
            file_name: CSV_FILE_NAME,
            mime: CSV_MIME,
            bytes,
        }
    }

    /// The report document
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self {
            file_name: PDF_FILE_NAME,
            mime: PDF_MIME,
            bytes,
        }
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
