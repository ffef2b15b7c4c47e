//! Header reconciliation against the canonical schema

use crate::schema::{canonical_title, BidColumn, HeaderMap, HeaderPolicy, HEADER_SCAN_COLS};
use crate::worksheet::Worksheet;

/// Row holding the header contract; data rows start below it
pub const HEADER_ROW: u32 = 0;

/// Reconcile the sheet's header row with the canonical schema.
///
/// Legacy titles are renamed in place. An entirely blank header row receives
/// the full canonical schema starting at column 0. Otherwise the configured
/// [`HeaderPolicy`] decides whether missing canonical columns are appended
/// after the existing ones or the first nine columns are re-laid in canonical
/// order. The returned [`HeaderMap`] always covers every canonical column.
pub fn reconcile_headers(sheet: &mut Worksheet, policy: HeaderPolicy) -> HeaderMap {
    let mut map = HeaderMap::default();
    let mut last_used_col: Option<u16> = None;

    // Scan pass: rename legacy titles in place and record what sits where.
    for col in 0..HEADER_SCAN_COLS {
        let text = sheet.text_at(HEADER_ROW, col);
        if text.is_empty() {
            continue;
        }
        let canonical = canonical_title(&text).to_string();
        if canonical != text {
            tracing::debug!(col, from = %text, to = %canonical, "renaming legacy header");
            sheet.set_value_at(HEADER_ROW, col, canonical.as_str());
        }
        map.insert_first(&canonical, col);
        last_used_col = Some(col);
    }

    // Fresh sheet: lay down the whole canonical schema.
    if map.is_empty() {
        for (idx, column) in BidColumn::ALL.iter().enumerate() {
            sheet.set_value_at(HEADER_ROW, idx as u16, column.title());
            map.set(column.title(), idx as u16);
        }
        tracing::debug!("wrote canonical headers to blank sheet");
        return map;
    }

    match policy {
        HeaderPolicy::AppendMissing => {
            let mut next_free = last_used_col.map_or(0, |col| col + 1);
            for column in BidColumn::ALL {
                if map.column(column).is_none() {
                    sheet.set_value_at(HEADER_ROW, next_free, column.title());
                    map.set(column.title(), next_free);
                    tracing::debug!(col = next_free, title = column.title(), "appended missing header");
                    next_free += 1;
                }
            }
        }
        HeaderPolicy::ForceCanonicalOrder => {
            let canonical_len = BidColumn::ALL.len() as u16;
            let in_order = BidColumn::ALL
                .iter()
                .enumerate()
                .all(|(idx, column)| sheet.text_at(HEADER_ROW, idx as u16) == column.title());
            if !in_order {
                for (idx, column) in BidColumn::ALL.iter().enumerate() {
                    sheet.set_value_at(HEADER_ROW, idx as u16, column.title());
                }
                // Scanned extras that sat inside the re-laid region are gone
                map.prune_extras_below(canonical_len);
                tracing::debug!("re-laid header row in canonical order");
            }
            for (idx, column) in BidColumn::ALL.iter().enumerate() {
                map.set(column.title(), idx as u16);
            }
        }
    }

    map
}
