//! # bid-tools-core
//!
//! Core data structures and bid-list logic for bid-tools.
//!
//! This crate provides the fundamental types used throughout bid-tools:
//! - [`BidRecord`] and the folder-name codec ([`build_folder_name`],
//!   [`parse_folder_name`], [`sanitize`], [`normalize_due_date`])
//! - [`BidColumn`], [`HeaderMap`], [`HeaderPolicy`] - the canonical bid-list
//!   schema and its reconciliation against a sheet ([`reconcile_headers`])
//! - [`Workbook`], [`Worksheet`], [`CellValue`] - the in-memory sheet model
//! - [`upsert_bid_rows`] and [`apply_status_update`] - the row mutations the
//!   top-level operations produce
//!
//! Everything here is pure: no filesystem access and no spreadsheet-format
//! dependencies. The I/O lives in `bid-tools-xlsx`.
//!
//! ## Example
//!
//! ```rust
//! use bid_tools_core::{reconcile_headers, upsert_bid_rows, HeaderPolicy, Worksheet};
//!
//! let mut sheet = Worksheet::new("Bid List");
//! let headers = reconcile_headers(&mut sheet, HeaderPolicy::ForceCanonicalOrder);
//!
//! let stats = upsert_bid_rows(
//!     &mut sheet,
//!     &headers,
//!     ["26001 - MD - 12-05 - Acme Builders - North Plant"],
//! )
//! .unwrap();
//! assert_eq!(stats.added, 1);
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod locate;
pub mod reconcile;
pub mod record;
pub mod schema;
pub mod status;
pub mod sync;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::CellValue;
pub use config::Config;
pub use error::{Error, Result};
pub use locate::{find_row_by_text, FIRST_DATA_ROW};
pub use reconcile::{reconcile_headers, HEADER_ROW};
pub use record::{
    build_folder_name, next_bid_number, normalize_due_date, parse_folder_name, sanitize, BidRecord,
};
pub use schema::{canonical_title, BidColumn, HeaderMap, HeaderPolicy, HEADER_SCAN_COLS};
pub use status::{apply_status_update, StatusUpdate, AWARD_TITLE};
pub use sync::{upsert_bid_rows, write_bid_row, UpsertStats};
pub use workbook::Workbook;
pub use worksheet::Worksheet;
