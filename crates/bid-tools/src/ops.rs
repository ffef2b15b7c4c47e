//! Top-level workbook operations
//!
//! Each operation acquires one [`WorkbookHandle`] for its duration and closes
//! it on every exit path, so a failure mid-operation still saves and releases
//! the handle without leaking it.

use std::path::PathBuf;

use bid_tools_core::{
    apply_status_update, reconcile_headers, upsert_bid_rows, Config, Error as CoreError,
    StatusUpdate, UpsertStats,
};
use bid_tools_xlsx::WorkbookHandle;

use crate::error::Result;
use crate::folders;

/// Outcome of one synchronization pass
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Row counts from the upsert pass
    pub stats: UpsertStats,
    /// Where the workbook was saved
    pub saved_to: PathBuf,
    /// Whether the original was locked and a sidecar was written instead
    pub read_only_fallback: bool,
}

/// Outcome of one status update
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// Titles of the fields actually written
    pub fields_written: Vec<&'static str>,
    /// Where the workbook was saved
    pub saved_to: PathBuf,
    /// Whether the original was locked and a sidecar was written instead
    pub read_only_fallback: bool,
}

/// Synchronize the bid list workbook with the bid folders.
///
/// Opens the workbook (read-only fallback included), reconciles the header
/// row, then upserts one row per parsed bid folder.
pub fn sync_bid_workbook(config: &Config) -> Result<SyncReport> {
    let handle = open_workbook(config)?;
    sync_with_handle(config, handle)
}

/// Run the synchronization against an already-open handle.
///
/// Split out so callers that forced a particular open mode (or already hold
/// the handle) can reuse the pass.
pub fn sync_with_handle(config: &Config, mut handle: WorkbookHandle) -> Result<SyncReport> {
    let folders = folders::list_bid_folders(&config.bid_root)?;
    let read_only_fallback = handle.read_only();

    let outcome = run_sync(config, &mut handle, &folders);
    // The save-and-release runs whether or not the pass succeeded
    let saved_to = handle.close()?;
    let stats = outcome?;

    tracing::info!(
        updated = stats.updated,
        added = stats.added,
        skipped = stats.skipped,
        saved_to = %saved_to.display(),
        "bid list synchronized"
    );
    Ok(SyncReport {
        stats,
        saved_to,
        read_only_fallback,
    })
}

fn run_sync(
    config: &Config,
    handle: &mut WorkbookHandle,
    folders: &[String],
) -> Result<UpsertStats> {
    let sheet = handle.worksheet_mut()?;
    let headers = reconcile_headers(sheet, config.header_policy);
    let stats = upsert_bid_rows(sheet, &headers, folders.iter().map(String::as_str))?;
    Ok(stats)
}

/// Update status fields for the bid matching `bid_number`.
///
/// Blank fields in `update` keep their current values. `confirm_overwrite`
/// is consulted before a non-blank cell is replaced; see
/// [`apply_status_update`].
pub fn update_bid_status<F>(
    config: &Config,
    bid_number: &str,
    update: &StatusUpdate,
    confirm_overwrite: F,
) -> Result<StatusReport>
where
    F: FnMut(&str, &str) -> bool,
{
    let handle = open_workbook(config)?;
    update_status_with_handle(config, handle, bid_number, update, confirm_overwrite)
}

/// Run the status update against an already-open handle.
pub fn update_status_with_handle<F>(
    config: &Config,
    mut handle: WorkbookHandle,
    bid_number: &str,
    update: &StatusUpdate,
    confirm_overwrite: F,
) -> Result<StatusReport>
where
    F: FnMut(&str, &str) -> bool,
{
    let read_only_fallback = handle.read_only();

    let outcome = run_status_update(config, &mut handle, bid_number, update, confirm_overwrite);
    let saved_to = handle.close()?;
    let fields_written = outcome?;

    tracing::info!(
        bid_number,
        fields = fields_written.len(),
        saved_to = %saved_to.display(),
        "bid status updated"
    );
    Ok(StatusReport {
        fields_written,
        saved_to,
        read_only_fallback,
    })
}

fn run_status_update<F>(
    config: &Config,
    handle: &mut WorkbookHandle,
    bid_number: &str,
    update: &StatusUpdate,
    confirm_overwrite: F,
) -> Result<Vec<&'static str>>
where
    F: FnMut(&str, &str) -> bool,
{
    let sheet = handle.worksheet_mut()?;
    let headers = reconcile_headers(sheet, config.header_policy);
    let fields = apply_status_update(sheet, &headers, bid_number, update, confirm_overwrite)?;
    Ok(fields)
}

/// Open the configured workbook, with the missing-file precondition mapped
/// to the core taxonomy.
fn open_workbook(config: &Config) -> Result<WorkbookHandle> {
    if !config.workbook_path.is_file() {
        return Err(CoreError::PreconditionFailed(format!(
            "Workbook not found: {}",
            config.workbook_path.display()
        ))
        .into());
    }
    Ok(WorkbookHandle::open(
        &config.workbook_path,
        &config.worksheet_name,
    )?)
}
