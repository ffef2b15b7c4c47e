//! Conditional status-field updates for a single bid row

use crate::error::{Error, Result};
use crate::locate::find_row_by_text;
use crate::schema::{BidColumn, HeaderMap};
use crate::worksheet::Worksheet;

/// Title of the optional award column. Recognized when present on the sheet,
/// never created.
pub const AWARD_TITLE: &str = "Award";

/// Requested field writes; `None` or a blank string keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: Option<String>,
    pub proposal_date: Option<String>,
    pub proposal_amount: Option<String>,
    pub award: Option<String>,
}

impl StatusUpdate {
    /// Check if no field carries a value
    pub fn is_empty(&self) -> bool {
        let blank = |field: &Option<String>| {
            field.as_deref().map_or(true, |value| value.trim().is_empty())
        };
        blank(&self.status)
            && blank(&self.proposal_date)
            && blank(&self.proposal_amount)
            && blank(&self.award)
    }
}

/// Apply a [`StatusUpdate`] to the row matching `bid_number`.
///
/// A blank requested value keeps the current cell untouched, never clears it.
/// When the target cell already holds a non-blank value, `confirm_overwrite`
/// is consulted with the field title and the current text; a `false` answer
/// leaves the cell alone. Returns the titles of the fields actually written.
///
/// Fails with [`Error::NotFound`] when no row matches the bid number.
pub fn apply_status_update<F>(
    sheet: &mut Worksheet,
    headers: &HeaderMap,
    bid_number: &str,
    update: &StatusUpdate,
    mut confirm_overwrite: F,
) -> Result<Vec<&'static str>>
where
    F: FnMut(&str, &str) -> bool,
{
    let number_col = headers.require(BidColumn::Number)?;
    let row = find_row_by_text(sheet, number_col, bid_number)
        .ok_or_else(|| Error::NotFound(bid_number.to_string()))?;

    let fields: [(&'static str, Option<u16>, Option<&str>); 4] = [
        ("Bid Status", headers.column(BidColumn::Status), update.status.as_deref()),
        ("Proposal Date", headers.column(BidColumn::ProposalDate), update.proposal_date.as_deref()),
        ("Proposal Amount", headers.column(BidColumn::ProposalAmount), update.proposal_amount.as_deref()),
        (AWARD_TITLE, headers.column_by_title(AWARD_TITLE), update.award.as_deref()),
    ];

    let mut written = Vec::new();
    for (title, col, value) in fields {
        // A field is skipped when the sheet lacks its column (Award on most
        // sheets) or the caller supplied nothing for it.
        let (Some(col), Some(value)) = (col, value) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let current = sheet.text_at(row, col);
        if !current.is_empty() && !confirm_overwrite(title, &current) {
            tracing::debug!(field = title, "overwrite declined, keeping current value");
            continue;
        }
        sheet.set_value_at(row, col, value);
        written.push(title);
    }

    Ok(written)
}
