//! Error types for bid-tools-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bid-tools-core
#[derive(Debug, Error)]
pub enum Error {
    /// A required root path or workbook is missing; nothing has been mutated
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Malformed user input, surfaced to the caller for correction
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Bid number has no matching row in the workbook
    #[error("Bid number not found in workbook: {0}")]
    NotFound(String),

    /// Destination bid folder already exists
    #[error("Destination already exists: {0}")]
    AlreadyExists(String),

    /// No folder with a leading bid number to derive the next number from
    #[error("No existing bid-number folders found in: {0}")]
    NoBidNumbers(String),

    /// A canonical column is absent from the header map
    #[error("Header column missing: {0}")]
    MissingColumn(String),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0:?}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}
