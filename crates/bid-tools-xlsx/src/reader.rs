//! Workbook loading via calamine

use std::path::Path;

use bid_tools_core::{CellValue, Workbook, Worksheet};
use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::error::XlsxResult;

/// Load an XLSX file into the in-memory workbook model.
///
/// Every sheet is loaded in full so unrelated columns and sheets survive the
/// save untouched. Date cells come across as their serial numbers; the bid
/// list itself only ever stores formatted text.
pub fn read_workbook(path: &Path) -> XlsxResult<Workbook> {
    let mut source: Xlsx<_> = open_workbook(path)?;
    let mut workbook = Workbook::empty();

    let sheet_names = source.sheet_names().to_vec();
    for name in &sheet_names {
        let range = source.worksheet_range(name)?;
        let mut sheet = Worksheet::new(name.as_str());

        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        for (row, col, cell) in range.used_cells() {
            let row = start_row + row as u32;
            let col = (start_col as usize + col) as u16;
            let value = match cell {
                Data::Empty => continue,
                Data::String(s) => {
                    if s.is_empty() {
                        continue;
                    }
                    CellValue::String(s.clone())
                }
                Data::Float(n) => CellValue::Number(*n),
                Data::Int(n) => CellValue::Number(*n as f64),
                Data::Bool(b) => CellValue::Boolean(*b),
                Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
                Data::DateTimeIso(s) => CellValue::String(s.clone()),
                Data::DurationIso(s) => CellValue::String(s.clone()),
                Data::Error(e) => CellValue::String(e.to_string()),
            };
            sheet.set_value_at(row, col, value);
        }

        workbook.add_existing_worksheet(sheet)?;
    }

    tracing::debug!(path = %path.display(), sheets = workbook.sheet_count(), "loaded workbook");
    Ok(workbook)
}
