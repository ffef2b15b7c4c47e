//! Operation configuration

use std::path::PathBuf;

use crate::schema::HeaderPolicy;

/// Immutable configuration for one bid-tools session.
///
/// Built once (from CLI arguments) and passed by reference into each
/// operation; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root folder holding one folder per bid
    pub bid_root: PathBuf,
    /// Template tree copied into new bid folders
    pub template_root: PathBuf,
    /// Path of the bid list workbook
    pub workbook_path: PathBuf,
    /// Name of the worksheet holding the bid list
    pub worksheet_name: String,
    /// How the header row is reconciled with the canonical schema
    pub header_policy: HeaderPolicy,
}

impl Config {
    /// Create a config with the default worksheet name and header policy
    pub fn new(bid_root: PathBuf, template_root: PathBuf, workbook_path: PathBuf) -> Self {
        Self {
            bid_root,
            template_root,
            workbook_path,
            worksheet_name: "Bid List".to_string(),
            header_policy: HeaderPolicy::default(),
        }
    }
}
