//! Load/save round-trips through real XLSX files

use bid_tools_core::{CellValue, Workbook, Worksheet};
use bid_tools_xlsx::{read_workbook, write_workbook, WorkbookHandle};
use pretty_assertions::assert_eq;

fn bid_list_workbook() -> Workbook {
    let mut sheet = Worksheet::new("Bid List");
    sheet.set_value_at(0, 0, "Bid Folder");
    sheet.set_value_at(0, 1, "Bid Number");
    sheet.set_value_at(1, 0, "26001 - MD - 12-05 - Acme - Plant");
    sheet.set_value_at(1, 1, "26001");
    sheet.set_value_at(1, 7, 125000.0);
    sheet.set_value_at(2, 3, true);

    let mut workbook = Workbook::empty();
    workbook.add_existing_worksheet(sheet).unwrap();
    workbook.add_worksheet_with_name("Notes").unwrap();
    workbook
}

#[test]
fn values_survive_a_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Bid List.xlsx");

    write_workbook(&bid_list_workbook(), &path).unwrap();
    let loaded = read_workbook(&path).unwrap();

    let sheet = loaded.worksheet_by_name("Bid List").unwrap();
    assert_eq!(sheet.text_at(0, 0), "Bid Folder");
    assert_eq!(sheet.text_at(1, 0), "26001 - MD - 12-05 - Acme - Plant");
    assert_eq!(sheet.text_at(1, 1), "26001");
    assert_eq!(sheet.get_value_at(1, 7), CellValue::Number(125000.0));
    assert_eq!(sheet.get_value_at(2, 3), CellValue::Boolean(true));
}

#[test]
fn sheet_names_and_count_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Bid List.xlsx");

    write_workbook(&bid_list_workbook(), &path).unwrap();
    let loaded = read_workbook(&path).unwrap();

    assert_eq!(loaded.sheet_count(), 2);
    assert!(loaded.worksheet_by_name("Bid List").is_some());
    assert!(loaded.worksheet_by_name("Notes").is_some());
}

#[test]
fn handle_creates_missing_worksheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Bid List.xlsx");

    let mut workbook = Workbook::empty();
    workbook.add_worksheet_with_name("Unrelated").unwrap();
    write_workbook(&workbook, &path).unwrap();

    let mut handle = WorkbookHandle::open(&path, "Bid List").unwrap();
    assert!(!handle.read_only());
    handle
        .worksheet_mut()
        .unwrap()
        .set_value_at(0, 0, "Bid Folder");
    let saved_to = handle.close().unwrap();
    assert_eq!(saved_to, path);

    let loaded = read_workbook(&path).unwrap();
    assert!(loaded.worksheet_by_name("Unrelated").is_some());
    assert_eq!(
        loaded.worksheet_by_name("Bid List").unwrap().text_at(0, 0),
        "Bid Folder"
    );
}

#[test]
fn read_only_handle_saves_to_sidecar_and_leaves_original_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Bid List.xlsx");
    write_workbook(&bid_list_workbook(), &path).unwrap();
    let original_bytes = std::fs::read(&path).unwrap();

    let mut handle = WorkbookHandle::open_read_only(&path, "Bid List").unwrap();
    assert!(handle.read_only());
    handle
        .worksheet_mut()
        .unwrap()
        .set_value_at(1, 8, "Submitted");
    let saved_to = handle.close().unwrap();

    // Original untouched, byte for byte
    assert_eq!(std::fs::read(&path).unwrap(), original_bytes);

    // Sidecar sits next to it, named per the pending-update pattern
    assert_ne!(saved_to, path);
    assert_eq!(saved_to.parent(), path.parent());
    let name = saved_to.file_name().and_then(|n| n.to_str()).unwrap();
    assert!(name.starts_with("Bid List - Pending Update "));
    assert!(name.ends_with(".xlsx"));

    let sidecar = read_workbook(&saved_to).unwrap();
    assert_eq!(
        sidecar.worksheet_by_name("Bid List").unwrap().text_at(1, 8),
        "Submitted"
    );
}
