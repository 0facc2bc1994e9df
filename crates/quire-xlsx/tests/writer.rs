//! Package-level tests for the XLSX writer

use std::io::{Cursor, Read};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use quire_core::{DocProperties, Style, Workbook, WorkbookOptions};
use quire_xlsx::{XlsxError, XlsxWriter};

fn write_to_vec(workbook: &mut Workbook) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    XlsxWriter::write(workbook, &mut cursor).unwrap();
    cursor.into_inner()
}

fn entry_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn fixed_properties() -> DocProperties {
    DocProperties::new().with_created(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

#[test]
fn test_part_order_with_strings() {
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet().unwrap();
    let second = workbook.add_worksheet_with_name("Data").unwrap();
    workbook
        .worksheet_mut(first)
        .unwrap()
        .write_string(0, 0, "hello", None)
        .unwrap();
    workbook
        .worksheet_mut(second)
        .unwrap()
        .write_number(1, 1, 2.5, None)
        .unwrap();

    let bytes = write_to_vec(&mut workbook);

    assert_eq!(
        entry_names(&bytes),
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/_rels/workbook.xml.rels",
            "xl/worksheets/sheet1.xml",
            "xl/worksheets/sheet2.xml",
            "xl/workbook.xml",
            "xl/sharedStrings.xml",
            "xl/styles.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ]
    );
}

#[test]
fn test_no_shared_strings_part_without_strings() {
    let mut workbook = Workbook::new();
    let index = workbook.add_worksheet().unwrap();
    workbook
        .worksheet_mut(index)
        .unwrap()
        .write_number(0, 0, 1.0, None)
        .unwrap();

    let bytes = write_to_vec(&mut workbook);

    assert!(!entry_names(&bytes).iter().any(|n| n == "xl/sharedStrings.xml"));
    assert!(!read_entry(&bytes, "[Content_Types].xml").contains("sharedStrings"));
    assert!(!read_entry(&bytes, "xl/_rels/workbook.xml.rels").contains("sharedStrings"));
}

#[test]
fn test_empty_workbook_gets_a_sheet() {
    let mut workbook = Workbook::new();
    let bytes = write_to_vec(&mut workbook);

    let names = entry_names(&bytes);
    assert!(names.iter().any(|n| n == "xl/worksheets/sheet1.xml"));
    assert!(read_entry(&bytes, "xl/workbook.xml").contains("<sheet name=\"Sheet1\""));
    assert!(read_entry(&bytes, "xl/worksheets/sheet1.xml").contains("<dimension ref=\"A1\"/>"));
}

#[test]
fn test_styles_part_counts() {
    let mut workbook = Workbook::new();
    let bold = workbook.add_format(Style::new().bold(true));
    let bold_again = workbook.add_format(Style::new().bold(true));
    let index = workbook.add_worksheet().unwrap();
    {
        let mut sheet = workbook.worksheet_mut(index).unwrap();
        sheet.write_string(0, 0, "a", Some(bold)).unwrap();
        sheet.write_string(1, 0, "b", Some(bold_again)).unwrap();
        sheet.write_string(2, 0, "a", None).unwrap();
    }

    let bytes = write_to_vec(&mut workbook);

    let styles = read_entry(&bytes, "xl/styles.xml");
    assert!(styles.contains("<fonts count=\"2\">"));
    assert!(styles.contains("<cellXfs count=\"2\">"));

    let sst = read_entry(&bytes, "xl/sharedStrings.xml");
    assert!(sst.contains("count=\"3\" uniqueCount=\"2\""));
}

#[test]
fn test_identical_workbooks_produce_identical_bytes() {
    let build = || {
        let mut workbook = Workbook::new();
        workbook.set_properties(fixed_properties().with_title("Same"));
        let index = workbook.add_worksheet().unwrap();
        workbook
            .worksheet_mut(index)
            .unwrap()
            .write_string(0, 0, "same", None)
            .unwrap();
        write_to_vec(&mut workbook)
    };

    assert_eq!(build(), build());
}

#[test]
fn test_zip64_and_compression_options() {
    let options = WorkbookOptions::new()
        .with_zip64(true)
        .with_compression_level(1);
    let mut workbook = Workbook::with_options(options);
    workbook.set_properties(fixed_properties());

    let bytes = write_to_vec(&mut workbook);

    assert!(read_entry(&bytes, "xl/workbook.xml").contains("<sheets>"));
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let mut workbook = Workbook::new();
    workbook.set_properties(fixed_properties().with_author("Tester"));
    XlsxWriter::write_file(&mut workbook, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(read_entry(&bytes, "docProps/core.xml").contains("<dc:creator>Tester</dc:creator>"));
}

#[test]
fn test_write_file_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.xlsx");

    let mut workbook = Workbook::new();
    let err = XlsxWriter::write_file(&mut workbook, &path).unwrap_err();
    assert!(matches!(err, XlsxError::Io(_)));
}
