//! # bid-tools
//!
//! Bid folder and bid-list workbook operations for a construction-bidding
//! office: standardized bid folders on a shared drive, and a bid list
//! workbook kept synchronized with them.
//!
//! The two workbook operations — [`sync_bid_workbook`] and
//! [`update_bid_status`] — each own one scoped [`WorkbookHandle`]. When the
//! workbook is open on another machine, the handle falls back to read-only
//! and the updates land in a timestamped "Pending Update" sidecar next to the
//! original.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bid_tools::{sync_bid_workbook, Config};
//!
//! let config = Config::new(
//!     "S:/Bid Documents 2026".into(),
//!     "S:/Bid Documents 2026/26000 Proposal Templates/15 - Folder Structure".into(),
//!     "S:/Bid Documents 2026/26000 Proposal Templates/Bid List.xlsx".into(),
//! );
//! let report = sync_bid_workbook(&config)?;
//! println!("saved to {}", report.saved_to.display());
//! # Ok::<(), bid_tools::Error>(())
//! ```

pub mod error;
pub mod folders;
pub mod ops;

pub use error::{Error, Result};
pub use folders::{
    copy_template, create_bid_folder, ensure_roots, list_bid_folders, CreatedBid, NewBid,
};
pub use ops::{
    sync_bid_workbook, sync_with_handle, update_bid_status, update_status_with_handle, StatusReport,
    SyncReport,
};

// Re-export core types callers need
pub use bid_tools_core::{
    build_folder_name, next_bid_number, normalize_due_date, parse_folder_name, sanitize,
    BidColumn, BidRecord, CellValue, Config, HeaderMap, HeaderPolicy, StatusUpdate, UpsertStats,
    Workbook, Worksheet,
};

// Re-export the workbook handle and I/O entry points
pub use bid_tools_xlsx::{read_workbook, write_workbook, WorkbookHandle, XlsxError};
