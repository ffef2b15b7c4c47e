//! Canonical bid-list header schema

use std::collections::HashMap;

/// Upper bound on header columns inspected during reconciliation.
///
/// Headers beyond this column are not recognized.
pub const HEADER_SCAN_COLS: u16 = 30;

/// The canonical bid-list columns, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidColumn {
    Folder,
    Number,
    Estimator,
    DueDate,
    Customer,
    BidName,
    ProposalDate,
    ProposalAmount,
    Status,
}

impl BidColumn {
    /// All canonical columns in canonical order
    pub const ALL: [BidColumn; 9] = [
        BidColumn::Folder,
        BidColumn::Number,
        BidColumn::Estimator,
        BidColumn::DueDate,
        BidColumn::Customer,
        BidColumn::BidName,
        BidColumn::ProposalDate,
        BidColumn::ProposalAmount,
        BidColumn::Status,
    ];

    /// On-sheet title of this column
    pub fn title(self) -> &'static str {
        match self {
            BidColumn::Folder => "Bid Folder",
            BidColumn::Number => "Bid Number",
            BidColumn::Estimator => "Estimator",
            BidColumn::DueDate => "Bid Due Date",
            BidColumn::Customer => "Customer/GC",
            BidColumn::BidName => "Bid Name",
            BidColumn::ProposalDate => "Proposal Date",
            BidColumn::ProposalAmount => "Proposal Amount",
            BidColumn::Status => "Bid Status",
        }
    }
}

/// Map a legacy header title to its canonical form; identity for anything else.
///
/// These are the titles the older bid-list layout used for the same semantic
/// columns.
pub fn canonical_title(raw: &str) -> &str {
    match raw {
        "Folder Name" => "Bid Folder",
        "Bid#" => "Bid Number",
        "GC/Owner" => "Customer/GC",
        "Description" => "Bid Name",
        "Due Date" => "Bid Due Date",
        "Status" => "Bid Status",
        other => other,
    }
}

/// Header reconciliation policy
///
/// Two layouts of the bid list exist in the wild; which one a sheet is held to
/// is a configuration choice, not a code path per workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Keep the existing column order; append canonical columns that are
    /// missing at the next free column
    AppendMissing,
    /// Re-lay the first nine columns in canonical order when they deviate
    #[default]
    ForceCanonicalOrder,
}

/// Column title → 0-based column index for one open sheet.
///
/// Valid only for the lifetime of one operation against one sheet. Besides
/// the canonical titles, recognized non-canonical headers found during the
/// scan (e.g. `Award`) are retained at their scanned positions.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: HashMap<String, u16>,
}

impl HeaderMap {
    /// Index of a canonical column, if mapped
    pub fn column(&self, column: BidColumn) -> Option<u16> {
        self.column_by_title(column.title())
    }

    /// Index of any mapped title, canonical or not
    pub fn column_by_title(&self, title: &str) -> Option<u16> {
        self.columns.get(title).copied()
    }

    /// Index of a canonical column that the reconciler guarantees to exist
    pub fn require(&self, column: BidColumn) -> crate::error::Result<u16> {
        self.column(column)
            .ok_or_else(|| crate::error::Error::MissingColumn(column.title().to_string()))
    }

    /// Number of mapped titles
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no titles are mapped
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Record a title at a column unless the title is already mapped
    /// (first occurrence wins, matching the left-to-right scan)
    pub(crate) fn insert_first(&mut self, title: &str, col: u16) {
        self.columns.entry(title.to_string()).or_insert(col);
    }

    /// Record a title at a column, replacing any earlier mapping
    pub(crate) fn set(&mut self, title: &str, col: u16) {
        self.columns.insert(title.to_string(), col);
    }

    /// Drop non-canonical titles mapped below `bound`.
    ///
    /// Used after a destructive header re-lay: a scanned extra whose column
    /// was overwritten no longer exists on the sheet.
    pub(crate) fn prune_extras_below(&mut self, bound: u16) {
        let canonical: Vec<&str> = BidColumn::ALL.iter().map(|c| c.title()).collect();
        self.columns
            .retain(|title, &mut col| col >= bound || canonical.contains(&title.as_str()));
    }
}
