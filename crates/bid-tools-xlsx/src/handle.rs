//! Scoped workbook handle with read-only fallback

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use bid_tools_core::{Error as CoreError, Workbook, Worksheet};
use chrono::Local;

use crate::error::{XlsxError, XlsxResult};
use crate::{reader, writer};

/// Where the handle will save on close
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    /// Write access confirmed; save over the original file
    InPlace(PathBuf),
    /// Original is locked elsewhere; save to a timestamped sidecar
    Sidecar(PathBuf),
}

impl SaveTarget {
    /// Path the handle will save to
    pub fn path(&self) -> &Path {
        match self {
            SaveTarget::InPlace(path) | SaveTarget::Sidecar(path) => path,
        }
    }
}

/// An open bid-list workbook, scoped to one operation.
///
/// Opening probes the file for write access once; when another process holds
/// the file, the handle switches to read-only mode and redirects the eventual
/// save to a sidecar path stamped at fallback time. There is no retry loop
/// and no blocking wait. The target worksheet is created when absent.
///
/// [`close`](WorkbookHandle::close) consumes the handle and performs the one
/// and only save; callers run it on success and error paths alike.
#[derive(Debug)]
pub struct WorkbookHandle {
    workbook: Workbook,
    worksheet_name: String,
    target: SaveTarget,
}

impl WorkbookHandle {
    /// Open the workbook at `path`, probing for write access first.
    pub fn open(path: &Path, worksheet_name: &str) -> XlsxResult<Self> {
        if !path.is_file() {
            return Err(XlsxError::WorkbookNotFound(path.to_path_buf()));
        }

        let target = match OpenOptions::new().read(true).write(true).open(path) {
            Ok(_probe) => SaveTarget::InPlace(path.to_path_buf()),
            Err(err) if is_lock_error(&err) => {
                let sidecar = sidecar_path(path);
                tracing::warn!(
                    path = %path.display(),
                    sidecar = %sidecar.display(),
                    "workbook is open elsewhere; updates will be saved to a sidecar"
                );
                SaveTarget::Sidecar(sidecar)
            }
            Err(err) => return Err(err.into()),
        };

        Self::load(path, worksheet_name, target)
    }

    /// Open the workbook treating it as locked, regardless of the probe.
    ///
    /// All updates go to a sidecar; the original file is never written.
    pub fn open_read_only(path: &Path, worksheet_name: &str) -> XlsxResult<Self> {
        if !path.is_file() {
            return Err(XlsxError::WorkbookNotFound(path.to_path_buf()));
        }
        Self::load(path, worksheet_name, SaveTarget::Sidecar(sidecar_path(path)))
    }

    fn load(path: &Path, worksheet_name: &str, target: SaveTarget) -> XlsxResult<Self> {
        let mut workbook = reader::read_workbook(path)?;
        if workbook.worksheet_by_name(worksheet_name).is_none() {
            tracing::debug!(sheet = worksheet_name, "worksheet missing, creating it");
            workbook.add_worksheet_with_name(worksheet_name)?;
        }
        Ok(Self {
            workbook,
            worksheet_name: worksheet_name.to_string(),
            target,
        })
    }

    /// Whether the handle fell back to read-only mode
    pub fn read_only(&self) -> bool {
        matches!(self.target, SaveTarget::Sidecar(_))
    }

    /// Path [`close`](WorkbookHandle::close) will save to
    pub fn save_path(&self) -> &Path {
        self.target.path()
    }

    /// The target worksheet
    pub fn worksheet(&self) -> XlsxResult<&Worksheet> {
        self.workbook
            .worksheet_by_name(&self.worksheet_name)
            .ok_or_else(|| CoreError::SheetNotFound(self.worksheet_name.clone()).into())
    }

    /// The target worksheet, mutably
    pub fn worksheet_mut(&mut self) -> XlsxResult<&mut Worksheet> {
        let name = self.worksheet_name.clone();
        self.workbook
            .worksheet_by_name_mut(&name)
            .ok_or_else(|| CoreError::SheetNotFound(name).into())
    }

    /// Save to the resolved target and release the handle.
    ///
    /// Consuming `self` makes a double save unrepresentable; the original
    /// file is never written when the handle is read-only.
    pub fn close(self) -> XlsxResult<PathBuf> {
        let path = self.target.path().to_path_buf();
        writer::write_workbook(&self.workbook, &path)?;
        Ok(path)
    }
}

/// Whether an open failure means "locked by someone else" rather than a real
/// I/O problem.
fn is_lock_error(err: &io::Error) -> bool {
    // Windows reports a share lock as ERROR_SHARING_VIOLATION (32) or
    // ERROR_LOCK_VIOLATION (33); elsewhere it surfaces as PermissionDenied.
    matches!(err.kind(), io::ErrorKind::PermissionDenied)
        || matches!(err.raw_os_error(), Some(32) | Some(33))
}

/// Sidecar path: `<dir>/<stem> - Pending Update <YYYYMMDD-HHmmss><ext>`.
///
/// Stamped at call time, so retries after a later fallback get fresh names.
fn sidecar_path(path: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("workbook");
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    path.with_file_name(format!("{stem} - Pending Update {stamp}{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path_pattern() {
        let sidecar = sidecar_path(Path::new("/shared/Bid List.xlsx"));
        let name = sidecar.file_name().and_then(|n| n.to_str()).unwrap();

        assert!(name.starts_with("Bid List - Pending Update "));
        assert!(name.ends_with(".xlsx"));
        assert_eq!(sidecar.parent(), Some(Path::new("/shared")));

        // 15-character timestamp: YYYYMMDD-HHmmss
        let stamp = name
            .trim_start_matches("Bid List - Pending Update ")
            .trim_end_matches(".xlsx");
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'-');
    }

    #[test]
    fn test_sidecar_path_without_extension() {
        let sidecar = sidecar_path(Path::new("Bid List"));
        let name = sidecar.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(name.starts_with("Bid List - Pending Update "));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_lock_error_classification() {
        assert!(is_lock_error(&io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied"
        )));
        assert!(is_lock_error(&io::Error::from_raw_os_error(32)));
        assert!(!is_lock_error(&io::Error::new(
            io::ErrorKind::NotFound,
            "missing"
        )));
    }

    #[test]
    fn test_open_missing_workbook_fails() {
        let err = WorkbookHandle::open(Path::new("/nonexistent/Bid List.xlsx"), "Bid List")
            .unwrap_err();
        assert!(matches!(err, XlsxError::WorkbookNotFound(_)));
    }
}
