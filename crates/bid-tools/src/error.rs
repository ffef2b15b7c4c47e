//! Error type for the top-level operations

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the bid-tools operations
#[derive(Debug, Error)]
pub enum Error {
    /// Core error
    #[error("{0}")]
    Core(#[from] bid_tools_core::Error),

    /// Workbook I/O error
    #[error("{0}")]
    Xlsx(#[from] bid_tools_xlsx::XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
