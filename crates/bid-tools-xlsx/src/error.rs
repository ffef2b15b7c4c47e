//! XLSX error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while loading or saving a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XLSX read error
    #[error("XLSX read error: {0}")]
    Read(#[from] calamine::XlsxError),

    /// XLSX write error
    #[error("XLSX write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Workbook file missing before any mutation
    #[error("Workbook not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] bid_tools_core::Error),
}
