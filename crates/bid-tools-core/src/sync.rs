//! Row upsert for bid folders

use crate::error::Result;
use crate::locate::find_row_by_text;
use crate::record::{parse_folder_name, BidRecord};
use crate::reconcile::HEADER_ROW;
use crate::schema::{BidColumn, HeaderMap};
use crate::worksheet::Worksheet;

/// Counts from one upsert pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertStats {
    /// Rows that already existed and were rewritten
    pub updated: usize,
    /// Rows appended after the last used row
    pub added: usize,
    /// Folder names that did not parse and were skipped
    pub skipped: usize,
}

/// Upsert one row per parsed bid folder name.
///
/// Folders that do not parse are skipped, never fatal. An existing row is
/// located by bid number first, then by folder name (a row may have been
/// created by hand, or an earlier sync keyed it differently). New rows are
/// appended after the last used row, which advances monotonically within the
/// pass so two new folders never collide.
pub fn upsert_bid_rows<'a, I>(
    sheet: &mut Worksheet,
    headers: &HeaderMap,
    folder_names: I,
) -> Result<UpsertStats>
where
    I: IntoIterator<Item = &'a str>,
{
    let number_col = headers.require(BidColumn::Number)?;
    let folder_col = headers.require(BidColumn::Folder)?;

    let mut last_row = sheet.last_row().unwrap_or(HEADER_ROW);
    let mut stats = UpsertStats::default();

    for folder_name in folder_names {
        let Some(record) = parse_folder_name(folder_name) else {
            tracing::debug!(folder = %folder_name, "skipping folder without a parsable bid name");
            stats.skipped += 1;
            continue;
        };

        let existing = find_row_by_text(sheet, number_col, &record.bid_number)
            .or_else(|| find_row_by_text(sheet, folder_col, &record.folder_name));

        let row = match existing {
            Some(row) => {
                stats.updated += 1;
                row
            }
            None => {
                last_row += 1;
                stats.added += 1;
                last_row
            }
        };

        write_bid_row(sheet, headers, row, &record)?;
    }

    Ok(stats)
}

/// Write the mapped fields of one bid into a row as a single logical step.
///
/// The due date is written as its formatted `MM-DD` text, not a date value,
/// so no spreadsheet host can reinterpret it per locale.
pub fn write_bid_row(
    sheet: &mut Worksheet,
    headers: &HeaderMap,
    row: u32,
    record: &BidRecord,
) -> Result<()> {
    let fields = [
        (BidColumn::Folder, record.folder_name.as_str()),
        (BidColumn::Number, record.bid_number.as_str()),
        (BidColumn::Estimator, record.initials.as_str()),
        (BidColumn::DueDate, record.due_date.as_str()),
        (BidColumn::Customer, record.customer.as_str()),
        (BidColumn::BidName, record.bid_name.as_str()),
    ];
    for (column, value) in fields {
        sheet.set_value_at(row, headers.require(column)?, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reconcile::reconcile_headers;
    use crate::schema::HeaderPolicy;

    fn fresh_sheet() -> (Worksheet, HeaderMap) {
        let mut sheet = Worksheet::new("Bid List");
        let headers = reconcile_headers(&mut sheet, HeaderPolicy::ForceCanonicalOrder);
        (sheet, headers)
    }

    fn snapshot(sheet: &Worksheet) -> Vec<(u32, u16, String)> {
        sheet
            .cells()
            .map(|(row, col, value)| (row, col, value.display_text()))
            .collect()
    }

    #[test]
    fn test_new_folders_append_consecutive_rows() {
        let (mut sheet, headers) = fresh_sheet();

        let folders = [
            "26001 - MD - 12-05 - Acme - Plant",
            "26002 - TS - 01-15 - Beta - Office",
        ];
        let stats = upsert_bid_rows(&mut sheet, &headers, folders).unwrap();

        assert_eq!(stats.added, 2);
        assert_eq!(stats.updated, 0);
        assert_eq!(sheet.text_at(1, 1), "26001");
        assert_eq!(sheet.text_at(2, 1), "26002");
        assert_eq!(sheet.text_at(1, 0), "26001 - MD - 12-05 - Acme - Plant");
        assert_eq!(sheet.text_at(1, 2), "MD");
        assert_eq!(sheet.text_at(1, 3), "12-05");
        assert_eq!(sheet.text_at(1, 4), "Acme");
        assert_eq!(sheet.text_at(1, 5), "Plant");
    }

    #[test]
    fn test_existing_row_is_updated_in_place() {
        let (mut sheet, headers) = fresh_sheet();
        upsert_bid_rows(&mut sheet, &headers, ["26001 - MD - 12-05 - Acme - Plant"]).unwrap();

        // Same bid number, renamed folder: row 1 is rewritten, nothing appended
        let stats =
            upsert_bid_rows(&mut sheet, &headers, ["26001 - TS - 12-09 - Acme - Plant B"]).unwrap();

        assert_eq!(stats.updated, 1);
        assert_eq!(stats.added, 0);
        assert_eq!(sheet.text_at(1, 2), "TS");
        assert_eq!(sheet.text_at(1, 3), "12-09");
        assert_eq!(sheet.text_at(1, 5), "Plant B");
        assert_eq!(sheet.last_row(), Some(1));
    }

    #[test]
    fn test_fallback_match_by_folder_name() {
        let (mut sheet, headers) = fresh_sheet();

        // A hand-made row with a folder name but no bid number
        sheet.set_value_at(1, 0, "26005 - MD - 03-01 - Acme - Garage");

        let stats =
            upsert_bid_rows(&mut sheet, &headers, ["26005 - MD - 03-01 - Acme - Garage"]).unwrap();

        assert_eq!(stats.updated, 1);
        assert_eq!(stats.added, 0);
        assert_eq!(sheet.text_at(1, 1), "26005");
    }

    #[test]
    fn test_unparsable_folders_are_skipped() {
        let (mut sheet, headers) = fresh_sheet();

        let folders = [
            "26000 Proposal Templates",
            "26001 - MD - 12-05 - Acme - Plant",
            "misc",
        ];
        let stats = upsert_bid_rows(&mut sheet, &headers, folders).unwrap();

        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.added, 1);
        assert_eq!(sheet.last_row(), Some(1));
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let (mut sheet, headers) = fresh_sheet();
        let folders = [
            "26001 - MD - 12-05 - Acme - Plant",
            "26002 - TS - 01-15 - Beta - Office",
        ];

        upsert_bid_rows(&mut sheet, &headers, folders).unwrap();
        let first = snapshot(&sheet);

        let stats = upsert_bid_rows(&mut sheet, &headers, folders).unwrap();
        assert_eq!(stats.updated, 2);
        assert_eq!(stats.added, 0);
        assert_eq!(snapshot(&sheet), first);
    }

    #[test]
    fn test_columns_outside_canonical_set_are_preserved() {
        let (mut sheet, headers) = fresh_sheet();
        sheet.set_value_at(0, 11, "Award");
        sheet.set_value_at(1, 11, "Won");
        sheet.set_value_at(1, 1, "26001");

        upsert_bid_rows(&mut sheet, &headers, ["26001 - MD - 12-05 - Acme - Plant"]).unwrap();

        assert_eq!(sheet.text_at(1, 11), "Won");
    }
}
