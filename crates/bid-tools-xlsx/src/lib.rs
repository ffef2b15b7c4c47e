//! # bid-tools-xlsx
//!
//! XLSX I/O for the bid-tools workbook model, plus [`WorkbookHandle`], the
//! scoped resource the top-level operations hold for their duration.
//!
//! Reading goes through `calamine`, writing through `rust_xlsxwriter`. The
//! whole workbook is loaded into memory, mutated there, and written back in
//! one save, so a locked original can be left untouched in favor of a
//! sidecar file.

pub mod error;
pub mod handle;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use handle::{SaveTarget, WorkbookHandle};
pub use reader::read_workbook;
pub use writer::write_workbook;
