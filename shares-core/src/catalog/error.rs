use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a share catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("Failed to open catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV layer could not read a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record is missing one of the three expected fields.
    #[error("Line {line}: expected 3 fields (id, cost, profit), found {found}")]
    MissingField { line: u64, found: usize },

    /// The same share id appears on more than one record.
    #[error("Line {line}: share '{id}' already listed on line {first_line}")]
    DuplicateShare { line: u64, id: String, first_line: u64 },

    /// A field could not be parsed. Never coerced to zero.
    #[error("Line {line}, share '{id}': invalid {field} '{value}' ({reason})")]
    MalformedRecord {
        line: u64,
        id: String,
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// A specialized Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
