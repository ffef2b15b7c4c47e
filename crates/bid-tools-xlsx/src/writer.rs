//! Workbook saving via rust_xlsxwriter

use std::path::Path;

use bid_tools_core::{CellValue, Workbook};

use crate::error::XlsxResult;

/// Write the in-memory workbook model to an XLSX file.
///
/// Cell values are written back verbatim; cell styling is not carried through
/// a load/save cycle. Value-level fidelity is the contract the bid list
/// needs.
pub fn write_workbook(workbook: &Workbook, path: &Path) -> XlsxResult<()> {
    let mut output = rust_xlsxwriter::Workbook::new();

    for sheet in workbook.worksheets() {
        let out_sheet = output.add_worksheet().set_name(sheet.name())?;
        for (row, col, value) in sheet.cells() {
            match value {
                CellValue::Empty => {}
                CellValue::Boolean(b) => {
                    out_sheet.write_boolean(row, col, *b)?;
                }
                CellValue::Number(n) => {
                    out_sheet.write_number(row, col, *n)?;
                }
                CellValue::String(s) => {
                    out_sheet.write_string(row, col, s.as_str())?;
                }
            }
        }
    }

    output.save(path)?;
    tracing::debug!(path = %path.display(), "saved workbook");
    Ok(())
}
