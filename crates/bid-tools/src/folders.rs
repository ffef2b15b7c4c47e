//! Bid folder enumeration, creation, and template copying

use std::fs;
use std::path::{Path, PathBuf};

use bid_tools_core::{
    build_folder_name, next_bid_number, normalize_due_date, Config, Error as CoreError,
};

use crate::error::Result;

/// File names excluded from template copies, case-insensitively
const JUNK_FILES: &[&str] = &["thumbs.db"];

/// Immediate subdirectory names of the bid root, sorted by name.
///
/// This is the directory-listing contract the synchronizer consumes; files
/// in the root are ignored.
pub fn list_bid_folders(bid_root: &Path) -> Result<Vec<String>> {
    if !bid_root.is_dir() {
        return Err(CoreError::PreconditionFailed(format!(
            "Bid root not found: {}",
            bid_root.display()
        ))
        .into());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(bid_root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Check that both configured roots exist before any mutation
pub fn ensure_roots(config: &Config) -> Result<()> {
    if !config.bid_root.is_dir() {
        return Err(CoreError::PreconditionFailed(format!(
            "Bid root not found: {}",
            config.bid_root.display()
        ))
        .into());
    }
    if !config.template_root.is_dir() {
        return Err(CoreError::PreconditionFailed(format!(
            "Template root not found: {}",
            config.template_root.display()
        ))
        .into());
    }
    Ok(())
}

/// User-supplied fields for a new bid; the bid number is allocated, not given
#[derive(Debug, Clone)]
pub struct NewBid {
    pub initials: String,
    pub due_date: String,
    pub customer: String,
    pub bid_name: String,
}

/// A bid folder that was just created
#[derive(Debug, Clone)]
pub struct CreatedBid {
    pub bid_number: u32,
    pub folder_name: String,
    pub path: PathBuf,
}

/// Create the next bid folder under the configured bid root.
///
/// Allocates the next bid number from the existing folder names, normalizes
/// the due date, builds the canonical folder name, and creates the
/// directory. Fails before any mutation when a root is missing, and with
/// [`CoreError::AlreadyExists`] when the destination folder is already there.
pub fn create_bid_folder(config: &Config, new_bid: &NewBid) -> Result<CreatedBid> {
    ensure_roots(config)?;

    let due_date = normalize_due_date(&new_bid.due_date)?;
    let folders = list_bid_folders(&config.bid_root)?;
    let bid_number = next_bid_number(folders.iter().map(String::as_str)).ok_or_else(|| {
        CoreError::NoBidNumbers(config.bid_root.display().to_string())
    })?;

    let folder_name = build_folder_name(
        &bid_number.to_string(),
        &new_bid.initials,
        &due_date,
        &new_bid.customer,
        &new_bid.bid_name,
    );
    let path = config.bid_root.join(&folder_name);
    if path.exists() {
        return Err(CoreError::AlreadyExists(path.display().to_string()).into());
    }
    fs::create_dir_all(&path)?;

    tracing::info!(bid_number, folder = %folder_name, "created bid folder");
    Ok(CreatedBid {
        bid_number,
        folder_name,
        path,
    })
}

/// Recursively copy the template tree into `dest`, skipping junk files.
///
/// Returns the number of files copied.
pub fn copy_template(template_root: &Path, dest: &Path) -> Result<u64> {
    let mut copied = 0;
    copy_dir_contents(template_root, dest, &mut copied)?;
    tracing::info!(files = copied, dest = %dest.display(), "copied template tree");
    Ok(copied)
}

fn copy_dir_contents(from: &Path, to: &Path, copied: &mut u64) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let name = entry.file_name();
        if is_junk(&name) {
            continue;
        }
        let target = to.join(&name);
        if entry.file_type()?.is_dir() {
            copy_dir_contents(&entry.path(), &target, copied)?;
        } else {
            fs::copy(entry.path(), &target)?;
            *copied += 1;
        }
    }
    Ok(())
}

fn is_junk(name: &std::ffi::OsStr) -> bool {
    name.to_str()
        .map(|name| JUNK_FILES.iter().any(|junk| name.eq_ignore_ascii_case(junk)))
        .unwrap_or(false)
}
